//! Core engine module
//!
//! Contains the engine loop, its configuration, and frame statistics

mod engine;
mod stats;

pub use engine::{Engine, EngineConfig, EngineError};
pub use stats::FrameStats;
