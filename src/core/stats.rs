//! Frame statistics feeding the HUD FPS readout

use std::collections::VecDeque;
use std::time::Duration;

/// Rolling frame-time tracker.
#[derive(Debug)]
pub struct FrameStats {
    /// Frame time history for averaging
    frame_times: VecDeque<Duration>,
    /// Maximum samples to keep
    max_samples: usize,
    /// Current FPS over the sample window
    fps: f32,
    /// Total frames rendered
    total_frames: u64,
}

impl FrameStats {
    /// Tracker averaging over the last 120 frames.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
            fps: 0.0,
            total_frames: 0,
        }
    }

    /// Record a frame with the given wall-clock delta.
    pub fn record_frame(&mut self, delta: Duration) {
        self.total_frames += 1;

        if self.frame_times.len() >= self.max_samples {
            let _ = self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);

        let total: Duration = self.frame_times.iter().sum();
        let total_secs = total.as_secs_f32();
        // Guard against division by zero
        if total_secs > 0.0 {
            self.fps = self.frame_times.len() as f32 / total_secs;
        } else {
            self.fps = 0.0;
        }
    }

    /// Frames per second averaged over the sample window.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Total frames recorded since startup.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_reflects_a_steady_cadence() {
        let mut stats = FrameStats::new();
        for _ in 0..10 {
            stats.record_frame(Duration::from_millis(30));
        }
        assert!((stats.fps() - 1000.0 / 30.0).abs() < 0.5);
        assert_eq!(stats.total_frames(), 10);
    }

    #[test]
    fn window_is_bounded() {
        let mut stats = FrameStats::new();
        for _ in 0..500 {
            stats.record_frame(Duration::from_millis(16));
        }
        assert_eq!(stats.total_frames(), 500);
        assert!(stats.frame_times.len() <= 120);
    }

    #[test]
    fn zero_deltas_do_not_divide_by_zero() {
        let mut stats = FrameStats::new();
        stats.record_frame(Duration::ZERO);
        assert_eq!(stats.fps(), 0.0);
    }
}
