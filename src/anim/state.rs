//! Animation state: the shape collection and the spiral slot

use std::f32::consts::TAU;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::anim::shape::{Rgb, Shape};
use crate::anim::spiral::SpiralEffect;
use crate::input::Command;

/// Number of orbiting shapes; indices are stable for the process lifetime
pub const SHAPE_COUNT: usize = 8;

/// Velocity multiplier applied by [`Command::Accelerate`]
pub const ACCELERATE_FACTOR: f32 = 1.5;
/// Velocity multiplier applied by [`Command::Decelerate`]
pub const DECELERATE_FACTOR: f32 = 0.7;

/// Owns every piece of mutable animation state.
///
/// The engine loop holds a single instance and touches it only within one
/// frame's synchronous sequence: apply commands, `advance`, read for render.
/// No hidden statics, so tests can run as many instances as they like.
pub struct AnimationState {
    shapes: Vec<Shape>,
    spiral: SpiralEffect,
    rng: SmallRng,
}

impl AnimationState {
    /// Build the fixed shape collection around `center` with an
    /// entropy-seeded color RNG.
    #[must_use]
    pub fn new(center: Vec2) -> Self {
        Self::with_rng(center, SmallRng::from_entropy())
    }

    /// Deterministic variant for tests: same layout, seeded color RNG.
    #[must_use]
    pub fn with_seed(center: Vec2, seed: u64) -> Self {
        Self::with_rng(center, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(center: Vec2, rng: SmallRng) -> Self {
        let shapes = (0..SHAPE_COUNT)
            .map(|i| Shape::at_slot(i, SHAPE_COUNT, center))
            .collect();
        Self {
            shapes,
            spiral: SpiralEffect::idle(),
            rng,
        }
    }

    /// The shape collection, in stable index order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The (single) spiral slot.
    #[must_use]
    pub fn spiral(&self) -> &SpiralEffect {
        &self.spiral
    }

    /// Advance the animation by one fixed time-step: integrate every shape's
    /// angle and tick the spiral clock.
    ///
    /// Angles are reduced with `rem_euclid` rather than a single subtraction
    /// because speed scaling is unbounded, so a velocity can exceed a full
    /// turn per step (and may be negative in general).
    pub fn advance(&mut self) {
        for shape in &mut self.shapes {
            shape.angle = (shape.angle + shape.angular_velocity).rem_euclid(TAU);
        }
        self.spiral.tick();
    }

    /// Reroll every shape's color, each channel uniform in `[0, 256)`.
    pub fn randomize_colors(&mut self) {
        for shape in &mut self.shapes {
            shape.color = Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen());
        }
    }

    /// Multiply every shape's angular velocity by `factor`. No clamping:
    /// repeated calls compose multiplicatively without bound.
    pub fn scale_speed(&mut self, factor: f32) {
        for shape in &mut self.shapes {
            shape.angular_velocity *= factor;
        }
    }

    /// Start (or restart) the spiral overlay at `origin`.
    pub fn activate_spiral(&mut self, origin: Vec2) {
        self.spiral.activate(origin);
    }

    /// Apply one decoded input command. `Quit` terminates the loop and is
    /// handled by the engine, not here.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ActivateSpiral(origin) => self.activate_spiral(origin),
            Command::RandomizeColors => self.randomize_colors(),
            Command::Accelerate => self.scale_speed(ACCELERATE_FACTOR),
            Command::Decelerate => self.scale_speed(DECELERATE_FACTOR),
            Command::Quit => {}
        }
    }
}
