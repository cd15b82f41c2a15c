//! Star Barrage: simulation core of a top-down arcade shooter.
//!
//! - `entities`: pure data for every entity and the `GameWorld` aggregate
//! - `compute`: the per-tick orchestrator (`init_world`, `tick`, `restart`)
//! - `spawner`, `motion`, `collision`, `effects`: the tick's phases
//! - `snapshot`: what the renderer reads each frame
//! - `config`, `error`: tuning table and startup errors

pub mod collision;
pub mod compute;
pub mod config;
pub mod effects;
pub mod entities;
pub mod error;
pub mod motion;
pub mod snapshot;
pub mod spawner;

pub use compute::{init_world, restart, resize, tick, TickInput};
pub use config::GameConfig;
pub use entities::{GameEvent, GameMode, GameWorld};
pub use error::GameError;
pub use snapshot::{snapshot, RenderSnapshot};
