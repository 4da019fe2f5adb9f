//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one fixed step
//! - Seeded RNG only
//! - Stable iteration order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rocket;
pub mod scroll;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use rocket::{Rocket, ThrustKeys};
pub use scroll::{FuelPickup, Obstacle, Scrolling, Star};
pub use spawner::{SpawnBatch, Spawner, spawn_obstacle, spawn_pickup};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, restart, tick};
