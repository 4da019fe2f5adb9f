//! Session runner: owns a game and feeds it input until someone quits

use serde::Serialize;

use super::input::InputSource;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Outcome of a single session step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Quit,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    /// Session steps taken, including idle steps on the game over screen
    pub steps: u64,
    pub games_played: u32,
    pub best_score: u64,
    pub final_score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub obstacles_passed: u64,
    pub obstacles_hit: u64,
    pub fuel_collected: u64,
    pub quit: bool,
}

impl SessionSummary {
    /// Pretty-printed JSON report
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A running game driven by an input source
pub struct Session<I: InputSource> {
    state: GameState,
    input: I,
    steps: u64,
    games_played: u32,
    best_score: u64,
    obstacles_passed: u64,
    obstacles_hit: u64,
    fuel_collected: u64,
    quit: bool,
}

impl<I: InputSource> Session<I> {
    pub fn new(state: GameState, input: I) -> Self {
        Self {
            state,
            input,
            steps: 0,
            games_played: 1,
            best_score: 0,
            obstacles_passed: 0,
            obstacles_hit: 0,
            fuel_collected: 0,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Sample input and advance the game by one tick
    ///
    /// A quit request only ends the session from the game over screen.
    pub fn step(&mut self) -> SessionStatus {
        if self.quit {
            return SessionStatus::Quit;
        }

        let input = self.input.sample(&self.state);
        if input.quit && self.state.is_game_over() {
            log::info!("Quit after {} steps", self.steps);
            self.quit = true;
            return SessionStatus::Quit;
        }

        tick(&mut self.state, &input);
        self.steps += 1;
        self.record_events();
        self.best_score = self.best_score.max(self.state.score);

        SessionStatus::Running
    }

    /// Step up to `max_steps` times, drawing after every step
    ///
    /// Returns the number of steps actually taken.
    pub fn run(&mut self, max_steps: u64, renderer: &mut impl Renderer) -> u64 {
        let start = self.steps;
        while self.steps - start < max_steps {
            if self.step() == SessionStatus::Quit {
                break;
            }
            renderer.render(&self.state.snapshot());
        }
        self.steps - start
    }

    /// Run the ticks a pacing clock says are due, stopping early on quit
    ///
    /// `on_step` sees the session after every step actually taken.
    pub fn catch_up(
        &mut self,
        due: u64,
        renderer: &mut impl Renderer,
        mut on_step: impl FnMut(&Self),
    ) -> u64 {
        let mut taken = 0;
        while taken < due {
            if self.run(1, &mut *renderer) == 0 {
                break;
            }
            taken += 1;
            on_step(self);
        }
        taken
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.state.seed,
            steps: self.steps,
            games_played: self.games_played,
            best_score: self.best_score,
            final_score: self.state.score,
            lives: self.state.lives,
            phase: self.state.phase,
            obstacles_passed: self.obstacles_passed,
            obstacles_hit: self.obstacles_hit,
            fuel_collected: self.fuel_collected,
            quit: self.quit,
        }
    }

    fn record_events(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::ObstaclePassed => self.obstacles_passed += 1,
                GameEvent::ObstacleHit { .. } => self.obstacles_hit += 1,
                GameEvent::FuelCollected { .. } => self.fuel_collected += 1,
                GameEvent::Restarted => self.games_played += 1,
                _ => {}
            }
        }
    }
}
