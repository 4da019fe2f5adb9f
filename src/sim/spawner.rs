//! Timed procedural spawning of obstacles and fuel pickups

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scroll::{FuelPickup, Obstacle};
use crate::tuning::GameConfig;

/// Entities produced by one spawner step
#[derive(Debug, Clone, Default)]
pub struct SpawnBatch {
    pub obstacle: Option<Obstacle>,
    pub pickup: Option<FuelPickup>,
}

/// Two independent tick counters, one per entity kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_timer: u32,
    pub pickup_timer: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.obstacle_timer = 0;
        self.pickup_timer = 0;
    }

    /// Advance both counters by one tick, spawning whatever came due
    ///
    /// A counter fires once it exceeds its interval, so with the default
    /// interval of 90 the first obstacle appears on tick 91.
    pub fn step<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        self.obstacle_timer += 1;
        if self.obstacle_timer > config.obstacle_interval {
            batch.obstacle = Some(spawn_obstacle(rng, config));
            self.obstacle_timer = 0;
        }

        self.pickup_timer += 1;
        if self.pickup_timer > config.pickup_interval {
            batch.pickup = Some(spawn_pickup(rng, config));
            self.pickup_timer = 0;
        }

        batch
    }
}

/// New obstacle at the right edge with random height, row and speed
pub fn spawn_obstacle<R: Rng>(rng: &mut R, config: &GameConfig) -> Obstacle {
    let height = rng.random_range(config.obstacle_min_height..=config.obstacle_max_height);
    let y = rng.random_range(0..=config.screen_height - height);
    let speed = rng.random_range(config.obstacle_min_speed..=config.obstacle_max_speed);
    Obstacle::new(
        Vec2::new(config.width(), y as f32),
        Vec2::new(config.obstacle_width, height as f32),
        speed,
    )
}

/// New fuel pickup at the right edge, clear of the top and bottom margins
pub fn spawn_pickup<R: Rng>(rng: &mut R, config: &GameConfig) -> FuelPickup {
    let margin = config.pickup_margin;
    let y = rng.random_range(margin..=config.screen_height - margin);
    FuelPickup::new(Vec2::new(config.width(), y as f32), config)
}
