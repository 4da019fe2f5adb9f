//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is one
//! tick; speeds and timers are all expressed in ticks.

use serde::{Deserialize, Serialize};

use super::rocket::ThrustKeys;
use super::scroll::Scrolling;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Directional keys held this tick
    pub keys: ThrustKeys,
    /// Restart request (honoured on the game over screen)
    pub restart: bool,
    /// Quit request (handled by the session runner, not the simulation)
    pub quit: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            restart(state);
        }
        return;
    }

    state.time_ticks += 1;

    state.thrusting = state.rocket.update(&input.keys, &state.config);
    update_stars(state);
    run_spawner(state);
    update_obstacles(state);
    update_pickups(state);
    check_fuel_exhaustion(state);

    state.score += state.config.survival_score;
}

/// Start a fresh run: new rocket, empty playfield, score 0, full lives
pub fn restart(state: &mut GameState) {
    state.reset_run();
    state.events.push(GameEvent::Restarted);
    log::info!("Restarted (seed {})", state.seed);
}

fn update_stars(state: &mut GameState) {
    for star in state.stars.iter_mut() {
        star.advance();
        if star.is_offscreen() {
            star.wrap(&mut state.rng, &state.config);
        }
    }
}

fn run_spawner(state: &mut GameState) {
    let batch = state.spawner.step(&mut state.rng, &state.config);

    if let Some(obstacle) = batch.obstacle {
        log::debug!(
            "Obstacle spawned: y={} h={} speed={:.2}",
            obstacle.pos.y,
            obstacle.size.y,
            obstacle.speed
        );
        state.events.push(GameEvent::ObstacleSpawned {
            y: obstacle.pos.y,
            height: obstacle.size.y,
            speed: obstacle.speed,
        });
        state.obstacles.push(obstacle);
    }
    if let Some(pickup) = batch.pickup {
        log::debug!("Fuel pickup spawned: y={}", pickup.pos.y);
        state.events.push(GameEvent::PickupSpawned { y: pickup.pos.y });
        state.pickups.push(pickup);
    }
}

/// Oldest first; each obstacle either scores, costs a life, or survives
fn update_obstacles(state: &mut GameState) {
    let rocket_rect = state.rocket.rect();
    let current = std::mem::take(&mut state.obstacles);
    let mut survivors = Vec::with_capacity(current.len());

    for mut obstacle in current {
        obstacle.advance();

        if obstacle.is_offscreen() {
            state.score += state.config.obstacle_score;
            state.events.push(GameEvent::ObstaclePassed);
        } else if obstacle.rect().intersects(&rocket_rect) {
            state.events.push(GameEvent::ObstacleHit {
                lives_left: state.lives.saturating_sub(1),
            });
            log::info!("Hit obstacle - {} lives left", state.lives.saturating_sub(1));
            state.lose_life();
        } else {
            survivors.push(obstacle);
        }
    }

    state.obstacles = survivors;
}

fn update_pickups(state: &mut GameState) {
    let rocket_rect = state.rocket.rect();
    let current = std::mem::take(&mut state.pickups);
    let mut survivors = Vec::with_capacity(current.len());

    for mut pickup in current {
        pickup.advance();

        if pickup.is_offscreen() {
            continue;
        }
        if pickup.rect().intersects(&rocket_rect) {
            state.rocket.refuel(state.config.pickup_refuel);
            state.score += state.config.pickup_score;
            state.events.push(GameEvent::FuelCollected {
                fuel: state.rocket.fuel,
            });
            log::debug!("Fuel collected - tank at {:.1}", state.rocket.fuel);
        } else {
            survivors.push(pickup);
        }
    }

    state.pickups = survivors;
}

/// An empty tank on the floor costs a life; survivors get a partial refill
fn check_fuel_exhaustion(state: &mut GameState) {
    if state.rocket.has_fuel() || !state.rocket.on_floor(&state.config) {
        return;
    }

    state.events.push(GameEvent::FuelExhausted {
        lives_left: state.lives.saturating_sub(1),
    });
    log::info!("Out of fuel on the ground - {} lives left", state.lives.saturating_sub(1));

    if !state.lose_life() && state.lives > 0 {
        state.rocket.fuel = state.config.recovery_fuel;
    }
}
