//! Input sources
//!
//! Anything that can drive the rocket implements [`InputSource`]. The
//! simulation only ever sees the resulting [`TickInput`].

use std::collections::VecDeque;

use crate::sim::{GameState, Rect, ThrustKeys, TickInput};

/// Produces one tick's worth of input from the current state
pub trait InputSource {
    fn sample(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed list of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    /// Hold the same keys for `ticks` ticks
    pub fn hold(keys: ThrustKeys, ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(
            TickInput {
                keys,
                ..Default::default()
            },
            ticks,
        ))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, _state: &GameState) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// How far ahead (pixels) the autopilot looks for obstacles
const LOOKAHEAD: f32 = 200.0;
/// Clearance kept between the rocket and an obstacle when dodging
const CLEARANCE: f32 = 10.0;
/// Dead zone around the vertical target
const Y_TOLERANCE: f32 = 10.0;
/// Dead zone around the home column
const X_TOLERANCE: f32 = 20.0;
/// Ticks of current velocity folded into the position estimate
const VELOCITY_LEAD: f32 = 5.0;

/// Simple AI pilot for demos and headless runs
///
/// Dodges the nearest obstacle in its lane, otherwise heads for the nearest
/// pickup ahead or back to its starting height. On the game over screen it
/// restarts while it has restarts left, then asks to quit.
#[derive(Debug, Clone)]
pub struct Autopilot {
    restarts_left: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
        }
    }

    pub fn restarts_left(&self) -> u32 {
        self.restarts_left
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            if self.restarts_left > 0 {
                self.restarts_left -= 1;
                return TickInput {
                    restart: true,
                    ..Default::default()
                };
            }
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        TickInput {
            keys: steer(state),
            ..Default::default()
        }
    }
}

/// Pick thrust keys for the current situation
fn steer(state: &GameState) -> ThrustKeys {
    let config = state.config();
    let rocket = &state.rocket;
    let body = rocket.rect();
    let (home_x, home_y) = config.rocket_start();
    let floor = config.height() - rocket.size.y - 1.0;

    let target_y = match nearest_threat(state, &body) {
        Some(obstacle) => {
            let above = obstacle.top() - rocket.size.y - CLEARANCE;
            let below = obstacle.bottom() + CLEARANCE;
            let can_climb = above >= 0.0 && rocket.has_fuel();
            let can_dive = below <= floor;
            match (can_climb, can_dive) {
                (true, true) => {
                    if (rocket.pos.y - above).abs() <= (below - rocket.pos.y).abs() {
                        above
                    } else {
                        below
                    }
                }
                (true, false) => above,
                // Diving is the only free move when the tank is dry
                _ => below.min(floor),
            }
        }
        None => nearest_pickup_y(state, &body)
            .unwrap_or(home_y)
            .min(floor),
    };

    let predicted_y = rocket.pos.y + rocket.vel.y * VELOCITY_LEAD;
    let predicted_x = rocket.pos.x + rocket.vel.x * VELOCITY_LEAD;

    ThrustKeys {
        up: predicted_y > target_y + Y_TOLERANCE && rocket.has_fuel(),
        down: predicted_y < target_y - Y_TOLERANCE,
        left: predicted_x > home_x + X_TOLERANCE,
        right: predicted_x < home_x - X_TOLERANCE,
    }
}

/// Closest obstacle ahead whose vertical band overlaps the rocket's
fn nearest_threat(state: &GameState, body: &Rect) -> Option<Rect> {
    state
        .obstacles
        .iter()
        .map(|o| o.rect())
        .filter(|r| r.right() > body.left() && r.left() - body.right() < LOOKAHEAD)
        .filter(|r| {
            r.top() < body.bottom() + CLEARANCE && r.bottom() > body.top() - CLEARANCE
        })
        .min_by(|a, b| a.left().total_cmp(&b.left()))
}

/// Rocket y that lines its center up with the nearest pickup ahead
fn nearest_pickup_y(state: &GameState, body: &Rect) -> Option<f32> {
    state
        .pickups
        .iter()
        .map(|p| p.rect())
        .filter(|r| r.right() > body.left())
        .min_by(|a, b| a.left().total_cmp(&b.left()))
        .map(|r| r.center().y - body.size.y / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FuelPickup, GamePhase, Obstacle};
    use glam::Vec2;

    fn state() -> GameState {
        GameState::with_seed(5)
    }

    #[test]
    fn test_scripted_replays_then_idles() {
        let up = ThrustKeys {
            up: true,
            ..Default::default()
        };
        let mut script = ScriptedInput::hold(up, 2);
        let s = state();

        assert_eq!(script.remaining(), 2);
        assert!(script.sample(&s).keys.up);
        assert!(script.sample(&s).keys.up);
        assert!(script.is_finished());
        assert_eq!(script.sample(&s), TickInput::default());
    }

    #[test]
    fn test_autopilot_idles_at_home() {
        let s = state();
        let mut pilot = Autopilot::new(0);
        assert_eq!(pilot.sample(&s).keys, ThrustKeys::NONE);
    }

    #[test]
    fn test_autopilot_climbs_over_obstacle() {
        let mut s = state();
        // Rocket spans y 300..360; block spans 320..420
        s.obstacles.push(Obstacle::new(
            Vec2::new(250.0, 320.0),
            Vec2::new(30.0, 100.0),
            4.0,
        ));
        let keys = Autopilot::new(0).sample(&s).keys;
        assert!(keys.up);
        assert!(!keys.down);
    }

    #[test]
    fn test_autopilot_dives_without_fuel() {
        let mut s = state();
        s.rocket.fuel = 0.0;
        s.obstacles.push(Obstacle::new(
            Vec2::new(250.0, 320.0),
            Vec2::new(30.0, 100.0),
            4.0,
        ));
        let keys = Autopilot::new(0).sample(&s).keys;
        assert!(keys.down);
        assert!(!keys.up);
    }

    #[test]
    fn test_autopilot_ignores_obstacles_out_of_lane() {
        let mut s = state();
        s.obstacles.push(Obstacle::new(
            Vec2::new(250.0, 0.0),
            Vec2::new(30.0, 100.0),
            4.0,
        ));
        s.obstacles.push(Obstacle::new(
            Vec2::new(10.0, 300.0),
            Vec2::new(30.0, 100.0),
            4.0,
        ));
        assert_eq!(Autopilot::new(0).sample(&s).keys, ThrustKeys::NONE);
    }

    #[test]
    fn test_autopilot_seeks_pickup() {
        let mut s = state();
        let pickup = FuelPickup::new(Vec2::new(500.0, 100.0), s.config());
        s.pickups.push(pickup);
        assert!(Autopilot::new(0).sample(&s).keys.up);
    }

    #[test]
    fn test_autopilot_returns_home() {
        let mut s = state();
        s.rocket.pos.x = 400.0;
        let keys = Autopilot::new(0).sample(&s).keys;
        assert!(keys.left);
        assert!(!keys.right);
    }

    #[test]
    fn test_autopilot_restarts_then_quits() {
        let mut s = state();
        s.phase = GamePhase::GameOver;
        let mut pilot = Autopilot::new(2);

        assert!(pilot.sample(&s).restart);
        assert!(pilot.sample(&s).restart);
        assert_eq!(pilot.restarts_left(), 0);
        let last = pilot.sample(&s);
        assert!(last.quit);
        assert!(!last.restart);
    }
}
