//! `ant-core`: foundational types for the ant colony engine.
//!
//! This crate is a dependency of every other `ant-*` crate.  It has no
//! `ant-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Cell`, `Point`, `Grid`, angle helpers                |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-ant), `SimRng` (world-level)          |
//! | [`config`]      | `ColonyConfig`: every tunable of the engine          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ColonyConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Cell, Grid, Point, angle_diff, normalize_angle};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
