//! Player rocket and its per-tick kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::heading_degrees;
use crate::tuning::GameConfig;

/// Directional keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrustKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ThrustKeys {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// The player's rocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    /// Top-left corner in screen space
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub size: Vec2,
    pub fuel: f32,
    pub max_fuel: f32,
    /// Facing angle in degrees (0 = nose up). Cosmetic only.
    pub angle: f32,
}

impl Rocket {
    /// Fresh rocket at the configured spawn point with a full tank
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.rocket_start();
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: Vec2::new(config.rocket_width, config.rocket_height),
            fuel: config.max_fuel,
            max_fuel: config.max_fuel,
            angle: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    /// Resting on the bottom edge of the playfield
    pub fn on_floor(&self, config: &GameConfig) -> bool {
        self.pos.y >= config.height() - self.size.y
    }

    /// Add fuel, capped at the tank size
    pub fn refuel(&mut self, amount: f32) {
        self.fuel = (self.fuel + amount).min(self.max_fuel);
    }

    /// Advance one tick of input, drag, clamping and integration
    ///
    /// Returns true if the main engine fired (fuel was burned).
    pub fn update(&mut self, keys: &ThrustKeys, config: &GameConfig) -> bool {
        let thrust = config.thrust;
        let mut burned = false;

        if keys.up && self.has_fuel() {
            self.vel.y -= thrust;
            // Fuel floors at zero; see DESIGN.md
            self.fuel = (self.fuel - config.fuel_burn).max(0.0);
            burned = true;
        }
        if keys.down {
            self.vel.y += thrust * config.down_thrust_factor;
        }
        if keys.left {
            self.vel.x -= thrust * config.lateral_thrust_factor;
        }
        if keys.right {
            self.vel.x += thrust * config.lateral_thrust_factor;
        }

        self.vel *= config.drag;

        let max = Vec2::splat(config.max_speed);
        self.vel = self.vel.clamp(-max, max);

        self.pos += self.vel;

        // Screen edges are inelastic
        let max_x = config.width() - self.size.x;
        let max_y = config.height() - self.size.y;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = 0.0;
        }

        if self.vel != Vec2::ZERO {
            self.angle = heading_degrees(self.vel.x, self.vel.y);
        }

        burned
    }
}
