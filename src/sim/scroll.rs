//! Side-scrolling entities
//!
//! Obstacles, fuel pickups and background stars all drift left at their own
//! speed. Obstacles and pickups are dropped once fully off-screen; stars wrap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::GameConfig;

/// Shared capability of everything that scrolls across the playfield
pub trait Scrolling {
    /// Move one tick to the left
    fn advance(&mut self);

    /// True once the entity has fully left the screen
    fn is_offscreen(&self) -> bool;
}

/// A wall segment the rocket must dodge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed in pixels per tick
    pub speed: f32,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Scrolling for Obstacle {
    fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    fn is_offscreen(&self) -> bool {
        self.pos.x < -self.size.x
    }
}

/// A fuel canister
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPickup {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Bob animation phase in radians (cosmetic, never collides)
    pub bob_phase: f32,
    pub bob_rate: f32,
}

impl FuelPickup {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::splat(config.pickup_size),
            speed: config.pickup_speed,
            bob_phase: 0.0,
            bob_rate: config.pickup_bob_rate,
        }
    }

    /// Collision rectangle (ignores the bob offset)
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Vertical draw offset for the current bob phase
    pub fn bob_offset(&self, amplitude: f32) -> f32 {
        self.bob_phase.sin() * amplitude
    }
}

impl Scrolling for FuelPickup {
    fn advance(&mut self) {
        self.pos.x -= self.speed;
        self.bob_phase += self.bob_rate;
    }

    fn is_offscreen(&self) -> bool {
        self.pos.x < -self.size.x
    }
}

/// Background star (decorative, no collision)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    /// Grey level 0-255
    pub brightness: u8,
}

impl Star {
    /// Star at a random spot on screen
    pub fn random<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let x = rng.random_range(0..=config.screen_width);
        let y = rng.random_range(0..=config.screen_height);
        Self {
            pos: Vec2::new(x as f32, y as f32),
            speed: rng.random_range(config.star_min_speed..=config.star_max_speed),
            brightness: rng.random_range(config.star_min_brightness..=config.star_max_brightness),
        }
    }

    /// Re-enter from the right edge at a fresh height
    pub fn wrap<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) {
        self.pos.x = config.width();
        self.pos.y = rng.random_range(0..=config.screen_height) as f32;
    }
}

impl Scrolling for Star {
    fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    fn is_offscreen(&self) -> bool {
        self.pos.x < 0.0
    }
}
