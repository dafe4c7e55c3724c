//! `ant-agent`: what a single ant does in one tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`state`]    | `AntState` (`Searching` / `Returning`)                          |
//! | [`context`]  | `StepContext<'a>`: the grid state an ant reads and writes      |
//! | [`sense`]    | `SensorReading`, sensing-cone sampling                          |
//! | [`steer`]    | `Steering` decision and turn angles                             |
//! | [`motion`]   | candidate move and wall / obstacle bounce                       |
//! | [`ant`]      | `Ant`, `StepOutcome`, the per-tick step                         |
//!
//! # Step order
//!
//! ```text
//! ① sense    : searching only: forward / left / right cone averages
//! ② steer    : searching: follow / wander; returning: clamp toward nest
//! ③ move     : heading applied, candidate position computed
//! ④ collide  : reflect on grid edge or obstacle; a bounce skips the move
//! ⑤ deposit  : returning only, at the (possibly unchanged) cell
//! ⑥ interact : pickup (→ returning) or delivery (→ searching)
//! ```
//!
//! Nothing here returns an error: off-grid samples read as zero signal and
//! impossible moves become bounces.

pub mod ant;
pub mod context;
pub mod motion;
pub mod sense;
pub mod state;
pub mod steer;

#[cfg(test)]
mod tests;

pub use ant::{Ant, StepOutcome};
pub use context::StepContext;
pub use motion::Motion;
pub use sense::SensorReading;
pub use state::AntState;
pub use steer::Steering;
