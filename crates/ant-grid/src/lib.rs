//! `ant-grid`: the per-cell state the colony moves through.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`scent`]      | `ScentField`: bounded scalar trail strength, double-buffered advance |
//! | [`obstacle`]   | `ObstacleMask`: impassable cells with a no-build zone around the nest |
//! | [`food`]       | `FoodStore`, `FoodPile`: depletable, mergeable food piles |
//! | [`nest`]       | `Nest`: fixed spawn / delivery point                      |
//!
//! Nothing in this crate can fail.  Off-grid cells degrade to "no signal"
//! for reads and to a no-op for writes.

pub mod food;
pub mod nest;
pub mod obstacle;
pub mod scent;

#[cfg(test)]
mod tests;

pub use food::{FoodPile, FoodStore};
pub use nest::Nest;
pub use obstacle::ObstacleMask;
pub use scent::ScentField;
