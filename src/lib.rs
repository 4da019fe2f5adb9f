//! Space Dash - A side-scrolling rocket arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rocket physics, spawning, collisions, game state)
//! - `renderer`: Scene tessellation from read-only state snapshots
//! - `platform`: Input sources and fixed-step pacing
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{ConfigError, GameConfig};

/// Game configuration defaults
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Nominal simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks run per frame when catching up to wall time
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Rocket defaults
    pub const ROCKET_WIDTH: f32 = 40.0;
    pub const ROCKET_HEIGHT: f32 = 60.0;
    pub const ROCKET_START_X: f32 = 100.0;
    pub const ROCKET_THRUST: f32 = 0.5;
    pub const ROCKET_MAX_SPEED: f32 = 8.0;
    /// Velocity multiplier applied every tick
    pub const ROCKET_DRAG: f32 = 0.95;
    pub const MAX_FUEL: f32 = 100.0;
    /// Fuel burned per tick of upward thrust
    pub const FUEL_BURN: f32 = 0.2;

    /// Obstacle defaults
    pub const OBSTACLE_INTERVAL: u32 = 90;
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_SCORE: u64 = 10;

    /// Fuel pickup defaults
    pub const PICKUP_INTERVAL: u32 = 300;
    pub const PICKUP_SIZE: f32 = 20.0;
    pub const PICKUP_SPEED: f32 = 2.0;
    pub const PICKUP_REFUEL: f32 = 30.0;
    pub const PICKUP_SCORE: u64 = 5;

    /// Fuel granted after a forced landing that did not end the game
    pub const RECOVERY_FUEL: f32 = 50.0;
    pub const STARTING_LIVES: u8 = 3;
    pub const STAR_COUNT: usize = 100;
}

/// Facing angle in degrees for a velocity, with 0 pointing straight up
#[inline]
pub fn heading_degrees(vx: f32, vy: f32) -> f32 {
    vy.atan2(vx).to_degrees() + 90.0
}
