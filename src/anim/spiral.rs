//! Transient click-triggered spiral overlay

use std::f32::consts::TAU;

use glam::Vec2;

/// Effect-clock advance per frame while the spiral is live
pub const SPIRAL_STEP: f32 = 0.3;
/// The spiral expires once its clock exceeds two full turns of angular
/// progress (deactivation lands on frame 42 at the fixed step)
pub const SPIRAL_LIFETIME: f32 = 2.0 * TAU;

/// The expanding-spiral effect.
///
/// There is exactly one spiral slot: a new activation replaces whatever is
/// in progress, so no queueing or overlap is possible.
#[derive(Debug, Clone, Copy)]
pub struct SpiralEffect {
    /// Click position the spiral winds around
    pub origin: Vec2,
    /// Effect clock, independent of the shapes' angles
    pub elapsed: f32,
    /// Whether the effect is currently drawn and ticking
    pub active: bool,
}

impl SpiralEffect {
    /// A dormant spiral; nothing draws until the first activation.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            origin: Vec2::ZERO,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) the effect at `origin`, replacing any in-progress
    /// spiral. Last activation wins.
    pub fn activate(&mut self, origin: Vec2) {
        self.origin = origin;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Advance the effect clock by one frame, deactivating once the clock
    /// exceeds the lifetime. Does nothing while inactive.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.elapsed += SPIRAL_STEP;
        if self.elapsed > SPIRAL_LIFETIME {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let spiral = SpiralEffect::idle();
        assert!(!spiral.active);
    }

    #[test]
    fn activation_resets_the_clock() {
        let mut spiral = SpiralEffect::idle();
        spiral.activate(Vec2::new(10.0, 20.0));
        for _ in 0..5 {
            spiral.tick();
        }
        assert!(spiral.elapsed > 0.0);

        spiral.activate(Vec2::new(300.0, 40.0));
        assert!(spiral.active);
        assert_eq!(spiral.elapsed, 0.0);
        assert_eq!(spiral.origin, Vec2::new(300.0, 40.0));
    }

    #[test]
    fn expires_after_two_full_turns() {
        let mut spiral = SpiralEffect::idle();
        spiral.activate(Vec2::ZERO);

        // 41 ticks: 12.3 < 4π, still live
        for _ in 0..41 {
            spiral.tick();
        }
        assert!(spiral.active);

        // tick 42 pushes the clock past 4π
        spiral.tick();
        assert!(!spiral.active);
    }

    #[test]
    fn ticking_while_idle_is_a_no_op() {
        let mut spiral = SpiralEffect::idle();
        spiral.tick();
        assert!(!spiral.active);
        assert_eq!(spiral.elapsed, 0.0);
    }
}
