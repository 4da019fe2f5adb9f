//! Game state and core simulation types
//!
//! `GameState` is the single mutable aggregate of a session. Only
//! [`tick`](super::tick::tick) and [`restart`](super::tick::restart) mutate it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rocket::Rocket;
use super::scroll::{FuelPickup, Obstacle, Star};
use super::spawner::Spawner;
use crate::tuning::{ConfigError, GameConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { y: f32, height: f32, speed: f32 },
    PickupSpawned { y: f32 },
    /// An obstacle scrolled off the left edge
    ObstaclePassed,
    /// The rocket hit an obstacle
    ObstacleHit { lives_left: u8 },
    FuelCollected { fuel: f32 },
    /// Forced landing with an empty tank
    FuelExhausted { lives_left: u8 },
    GameOver { score: u64 },
    Restarted,
}

/// Read-only view of the state handed to renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub screen_width: u32,
    pub screen_height: u32,
    pub rocket: Rocket,
    /// Main engine fired this tick (drives the flame)
    pub thrusting: bool,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<FuelPickup>,
    pub stars: Vec<Star>,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub pickup_bob_amplitude: f32,
}

impl Snapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub rocket: Rocket,
    /// Main engine fired during the last tick
    pub thrusting: bool,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Live pickups, oldest first
    pub pickups: Vec<FuelPickup>,
    /// Background starfield (not gameplay-affecting)
    pub stars: Vec<Star>,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub spawner: Spawner,
    /// Simulation ticks run since process start
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state, rejecting configs the simulation cannot run
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Create a new game state with the stock tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..config.star_count)
            .map(|_| Star::random(&mut rng, &config))
            .collect();

        log::info!(
            "New game: seed={} screen={}x{}",
            seed,
            config.screen_width,
            config.screen_height
        );

        Self {
            rocket: Rocket::new(&config),
            thrusting: false,
            obstacles: Vec::new(),
            pickups: Vec::new(),
            stars,
            score: 0,
            lives: config.starting_lives,
            phase: GamePhase::Playing,
            spawner: Spawner::new(),
            time_ticks: 0,
            events: Vec::new(),
            seed,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take one life; enters `GameOver` when none remain
    ///
    /// Returns true if this call ended the game.
    pub(crate) fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over - score {}", self.score);
            return true;
        }
        false
    }

    /// Put every gameplay field back to its starting value
    ///
    /// Stars and the RNG stream carry on; they never influence gameplay.
    pub(crate) fn reset_run(&mut self) {
        self.rocket = Rocket::new(&self.config);
        self.thrusting = false;
        self.obstacles.clear();
        self.pickups.clear();
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.phase = GamePhase::Playing;
        self.spawner.reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            rocket: self.rocket.clone(),
            thrusting: self.thrusting,
            obstacles: self.obstacles.clone(),
            pickups: self.pickups.clone(),
            stars: self.stars.clone(),
            score: self.score,
            lives: self.lives,
            phase: self.phase,
            pickup_bob_amplitude: self.config.pickup_bob_amplitude,
        }
    }
}
