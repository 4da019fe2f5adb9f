//! Wall-clock pacing for the fixed-step simulation

use crate::consts::MAX_SUBSTEPS;

/// Longest frame the clock will honour (seconds); anything slower is treated
/// as a stall rather than simulated in a burst
const MAX_FRAME_TIME: f32 = 0.1;

/// Accumulator turning elapsed wall time into whole simulation ticks
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Seconds per tick
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed `elapsed` seconds and return how many ticks to run now
    ///
    /// A frame that hits the substep cap drops its backlog.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ticks_carry_over() {
        let mut clock = FixedStep::new(64);
        let dt = clock.dt();

        assert_eq!(clock.advance(dt * 0.5), 0);
        assert_eq!(clock.advance(dt * 0.75), 1);
        assert_eq!(clock.advance(dt * 0.75), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FixedStep::new(64);
        // 0.1s at 64Hz is 6.4 ticks
        assert_eq!(clock.advance(10.0), 6);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = FixedStep::new(100).with_max_substeps(4);
        assert_eq!(clock.advance(0.1), 4);
        // Backlog dropped, at most one tick left over
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_and_reset() {
        let mut clock = FixedStep::new(64);
        assert_eq!(clock.advance(-1.0), 0);
        clock.advance(clock.dt() * 0.9);
        clock.reset();
        assert_eq!(clock.advance(clock.dt() * 0.5), 0);
    }
}
