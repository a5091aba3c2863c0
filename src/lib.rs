//! A real-time rotating-shapes animation toy
//!
//! Eight shapes orbit a shared center on concentric tracks; keyboard and
//! pointer input mutate the animation (color rerolls, speed scaling, a
//! transient click-triggered spiral overlay). The crate provides:
//! - The animation/state core with a fixed per-frame advance step
//! - A closed input-command set routed once per frame
//! - A software rasterizer presented through a pixels/winit window

pub mod anim;
pub mod core;
pub mod input;
pub mod render;

// Re-exports for convenience
pub use glam;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::anim::{AnimationState, Rgb, Shape, ShapeKind, SpiralEffect, SHAPE_COUNT};
    pub use crate::core::{Engine, EngineConfig, EngineError, FrameStats};
    pub use crate::input::{Bindings, Command, InputRouter};
    pub use crate::render::{Canvas, SoftCanvas};
    pub use glam::Vec2;
}
