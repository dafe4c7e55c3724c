//! `ant-sim`: the colony world and its tick loop.
//!
//! # One tick
//!
//! ```text
//! for ant in ants (collection order):
//!     ant.step(field, obstacles, food, nest)   // sees earlier deposits
//!     Delivered → score += 1
//! field.advance()                              // once, double-buffered
//! tick += 1
//! ```
//!
//! There is no parallel agent pass: an ant must see the scent laid by the
//! ants stepped before it in the same tick.
//!
//! # Frame pacing
//!
//! [`FrameDriver`] turns wall-clock frame time into a whole number of ticks
//! (at least one while running, none while paused) and runs them all before
//! returning, so a renderer draws once per frame against settled state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ant_core::{Cell, ColonyConfig};
//! use ant_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(ColonyConfig::default())
//!     .seed(42)
//!     .population(300)
//!     .build()?;
//! world.add_food(Cell::new(40, 40), 50);
//! world.run_ticks(1_000, 1.0, &mut NoopObserver);
//! println!("score {}", world.score());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pacer;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use pacer::{FrameDriver, TickPacer};
pub use world::{TickReport, World};
