//! Data-driven game balance
//!
//! Every constant the simulation reads lives in [`GameConfig`]. The defaults
//! reproduce the classic 800x600 arcade feel; a JSON file can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid config `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Immutable tuning passed to the simulation at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Ticks per second the session runner aims for
    pub tick_rate: u32,

    // === Rocket ===
    pub rocket_width: f32,
    pub rocket_height: f32,
    pub rocket_start_x: f32,
    pub thrust: f32,
    /// Fraction of `thrust` applied by the down key
    pub down_thrust_factor: f32,
    /// Fraction of `thrust` applied by the left/right keys
    pub lateral_thrust_factor: f32,
    pub drag: f32,
    pub max_speed: f32,
    pub max_fuel: f32,
    pub fuel_burn: f32,

    // === Obstacles ===
    pub obstacle_interval: u32,
    pub obstacle_width: f32,
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,
    pub obstacle_min_speed: f32,
    pub obstacle_max_speed: f32,
    pub obstacle_score: u64,

    // === Fuel pickups ===
    pub pickup_interval: u32,
    pub pickup_size: f32,
    pub pickup_speed: f32,
    /// Keep-out band at the top and bottom of the screen for pickup spawns
    pub pickup_margin: u32,
    pub pickup_refuel: f32,
    pub pickup_score: u64,
    /// Bob phase advance per tick (radians, cosmetic)
    pub pickup_bob_rate: f32,
    /// Bob amplitude in pixels (cosmetic)
    pub pickup_bob_amplitude: f32,

    // === Lives and scoring ===
    pub starting_lives: u8,
    pub recovery_fuel: f32,
    /// Score granted every tick survived
    pub survival_score: u64,

    // === Starfield ===
    pub star_count: usize,
    pub star_min_speed: f32,
    pub star_max_speed: f32,
    pub star_min_brightness: u8,
    pub star_max_brightness: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,

            rocket_width: ROCKET_WIDTH,
            rocket_height: ROCKET_HEIGHT,
            rocket_start_x: ROCKET_START_X,
            thrust: ROCKET_THRUST,
            down_thrust_factor: 0.5,
            lateral_thrust_factor: 0.7,
            drag: ROCKET_DRAG,
            max_speed: ROCKET_MAX_SPEED,
            max_fuel: MAX_FUEL,
            fuel_burn: FUEL_BURN,

            obstacle_interval: OBSTACLE_INTERVAL,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: 50,
            obstacle_max_height: 150,
            obstacle_min_speed: 3.0,
            obstacle_max_speed: 6.0,
            obstacle_score: OBSTACLE_SCORE,

            pickup_interval: PICKUP_INTERVAL,
            pickup_size: PICKUP_SIZE,
            pickup_speed: PICKUP_SPEED,
            pickup_margin: 50,
            pickup_refuel: PICKUP_REFUEL,
            pickup_score: PICKUP_SCORE,
            pickup_bob_rate: 0.2,
            pickup_bob_amplitude: 3.0,

            starting_lives: STARTING_LIVES,
            recovery_fuel: RECOVERY_FUEL,
            survival_score: 1,

            star_count: STAR_COUNT,
            star_min_speed: 0.5,
            star_max_speed: 2.0,
            star_min_brightness: 100,
            star_max_brightness: 255,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Screen width as a simulation coordinate
    #[inline]
    pub fn width(&self) -> f32 {
        self.screen_width as f32
    }

    /// Screen height as a simulation coordinate
    #[inline]
    pub fn height(&self) -> f32 {
        self.screen_height as f32
    }

    /// Rocket spawn point (left side, vertically centered on the pixel grid)
    pub fn rocket_start(&self) -> (f32, f32) {
        (self.rocket_start_x, (self.screen_height / 2) as f32)
    }

    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::invalid(
                "screen_width/screen_height",
                format!(
                    "screen must be non-empty, got {}x{}",
                    self.screen_width, self.screen_height
                ),
            ));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be positive"));
        }

        positive("rocket_width", self.rocket_width)?;
        positive("rocket_height", self.rocket_height)?;
        if self.rocket_width > self.width() || self.rocket_height > self.height() {
            return Err(ConfigError::invalid(
                "rocket_width/rocket_height",
                "rocket does not fit on screen",
            ));
        }
        let (start_x, start_y) = self.rocket_start();
        if !(0.0..=self.width() - self.rocket_width).contains(&start_x) {
            return Err(ConfigError::invalid(
                "rocket_start_x",
                format!("{} is outside the playfield", start_x),
            ));
        }
        // Start height is half the screen; the body must still clear the floor
        if !(0.0..=self.height() - self.rocket_height).contains(&start_y) {
            return Err(ConfigError::invalid(
                "rocket_height",
                format!(
                    "rocket starting at y={} sinks below the floor at {}",
                    start_y,
                    self.height() - self.rocket_height
                ),
            ));
        }
        non_negative("thrust", self.thrust)?;
        non_negative("down_thrust_factor", self.down_thrust_factor)?;
        non_negative("lateral_thrust_factor", self.lateral_thrust_factor)?;
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(ConfigError::invalid("drag", "must be in (0, 1]"));
        }
        positive("max_speed", self.max_speed)?;
        positive("max_fuel", self.max_fuel)?;
        non_negative("fuel_burn", self.fuel_burn)?;

        positive("obstacle_width", self.obstacle_width)?;
        ordered(
            "obstacle_min_height/obstacle_max_height",
            self.obstacle_min_height as f32,
            self.obstacle_max_height as f32,
        )?;
        if self.obstacle_min_height == 0 {
            return Err(ConfigError::invalid(
                "obstacle_min_height",
                "must be positive",
            ));
        }
        if self.obstacle_max_height > self.screen_height {
            return Err(ConfigError::invalid(
                "obstacle_max_height",
                "taller than the screen",
            ));
        }
        non_negative("obstacle_min_speed", self.obstacle_min_speed)?;
        ordered(
            "obstacle_min_speed/obstacle_max_speed",
            self.obstacle_min_speed,
            self.obstacle_max_speed,
        )?;

        positive("pickup_size", self.pickup_size)?;
        non_negative("pickup_speed", self.pickup_speed)?;
        if self.pickup_margin.saturating_mul(2) > self.screen_height {
            return Err(ConfigError::invalid(
                "pickup_margin",
                "margins leave no room to spawn pickups",
            ));
        }
        non_negative("pickup_refuel", self.pickup_refuel)?;

        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be positive"));
        }
        non_negative("recovery_fuel", self.recovery_fuel)?;
        if self.recovery_fuel > self.max_fuel {
            return Err(ConfigError::invalid(
                "recovery_fuel",
                "exceeds max_fuel",
            ));
        }

        non_negative("star_min_speed", self.star_min_speed)?;
        ordered(
            "star_min_speed/star_max_speed",
            self.star_min_speed,
            self.star_max_speed,
        )?;
        ordered(
            "star_min_brightness/star_max_brightness",
            self.star_min_brightness as f32,
            self.star_max_brightness as f32,
        )?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be non-negative, got {}", value),
        ))
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("range is inverted: {}..={}", min, max),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rocket_start(), (100.0, 300.0));
    }

    #[test]
    fn test_zero_screen_rejected() {
        let config = GameConfig {
            screen_width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));

        let config = GameConfig {
            screen_height: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let config = GameConfig {
            obstacle_min_height: 200,
            obstacle_max_height: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            obstacle_min_speed: 7.0,
            obstacle_max_speed: 6.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            star_min_brightness: 200,
            star_max_brightness: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spawn_ranges_must_fit_screen() {
        let config = GameConfig {
            screen_height: 120,
            ..Default::default()
        };
        // Default obstacles can be up to 150 tall
        assert!(config.validate().is_err());

        let config = GameConfig {
            screen_height: 90,
            obstacle_min_height: 10,
            obstacle_max_height: 20,
            rocket_height: 30.0,
            ..Default::default()
        };
        // 2 * 50 margin > 90
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rocket_must_start_above_floor() {
        let config = GameConfig {
            screen_height: 100,
            obstacle_min_height: 10,
            obstacle_max_height: 50,
            ..Default::default()
        };
        // Start y 50, but a 60px rocket needs y <= 40
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "rocket_height"),
            other => panic!("expected rocket_height rejection, got {:?}", other),
        }
        assert!(crate::sim::GameState::new(config.clone(), 1).is_err());

        let config = GameConfig {
            rocket_height: 40.0,
            ..config
        };
        assert!(config.validate().is_ok());
        let state = crate::sim::GameState::new(config, 1).expect("valid config");
        assert!(state.rocket.pos.y <= 100.0 - 40.0);
    }

    #[test]
    fn test_small_screen_config_is_valid() {
        let config = GameConfig {
            screen_width: 320,
            screen_height: 240,
            obstacle_max_height: 100,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.rocket_start(), (100.0, 120.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "screen_width": 1024, "max_speed": 10.0 }"#)
            .expect("valid config");
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.max_speed, 10.0);
        assert_eq!(config.screen_height, SCREEN_HEIGHT);
        assert_eq!(config.obstacle_interval, OBSTACLE_INTERVAL);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "drag": 1.5 }"#),
            Err(ConfigError::Invalid { field: "drag", .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load("/nonexistent/space-dash/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = GameConfig {
            pickup_interval: 120,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed = GameConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }
}
