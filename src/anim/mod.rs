//! Animation core: rotating shapes and the transient spiral effect

mod shape;
mod spiral;
mod state;

pub use shape::{Rgb, Shape, ShapeKind};
pub use spiral::{SpiralEffect, SPIRAL_LIFETIME, SPIRAL_STEP};
pub use state::{AnimationState, ACCELERATE_FACTOR, DECELERATE_FACTOR, SHAPE_COUNT};
