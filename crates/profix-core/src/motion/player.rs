//! Sequence playback state
//!
//! [`map_progress_to_frame`] is stateless; the previous frame index lives
//! here instead. Each animated element owns its own player.
//!
//! The player also finishes the approach: once the smoothed step rounds to
//! zero it walks the remaining frames one per tick, so a held progress
//! value always ends on its exact frame.

use std::cmp::Ordering;

use super::easing::EasingType;
use super::frames::{map_progress_to_frame, FrameSequence};
use crate::config::SequenceConfig;

/// Frame playback controller for one image sequence
///
/// Call `update()` once per animation tick with the latest progress
/// sample; the returned frame converges toward the target over successive
/// ticks at the configured smoothing rate.
#[derive(Debug, Clone)]
pub struct SequencePlayer {
    sequence: FrameSequence,
    smoothing: f64,
    easing: EasingType,
    current_frame: u32,
}

impl Default for SequencePlayer {
    fn default() -> Self {
        Self::new(SequenceConfig::default())
    }
}

impl SequencePlayer {
    pub fn new(config: SequenceConfig) -> Self {
        Self {
            sequence: FrameSequence::from_config(&config),
            smoothing: config.smoothing,
            easing: config.easing,
            current_frame: 0,
        }
    }

    pub fn with_sequence(sequence: FrameSequence, smoothing: f64) -> Self {
        Self {
            sequence,
            smoothing,
            easing: EasingType::Linear,
            current_frame: 0,
        }
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    #[inline]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Filename of the frame that should be on screen right now
    pub fn current_filename(&self) -> String {
        self.sequence.filename(self.current_frame)
    }

    /// Advance one tick toward the frame for `progress`
    pub fn update(&mut self, progress: f64) -> u32 {
        self.current_frame = self.target_after(progress);
        self.current_frame
    }

    /// Whether the frame already shows `progress` exactly
    pub fn is_settled(&self, progress: f64) -> bool {
        self.target_frame(progress) == self.current_frame
    }

    /// Frame `progress` maps to with no smoothing
    pub fn target_frame(&self, progress: f64) -> u32 {
        map_progress_to_frame(
            self.eased(progress),
            self.sequence.total_frames,
            1.0,
            self.current_frame,
        )
    }

    /// Jump to a frame immediately (clamped to the sequence)
    pub fn set_frame(&mut self, frame: u32) {
        self.current_frame = frame.min(self.sequence.last_index());
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
    }

    fn target_after(&self, progress: f64) -> u32 {
        let next = map_progress_to_frame(
            self.eased(progress),
            self.sequence.total_frames,
            self.smoothing,
            self.current_frame,
        );
        if next != self.current_frame || self.smoothing <= 0.0 {
            return next;
        }

        let target = self.target_frame(progress);
        match target.cmp(&self.current_frame) {
            Ordering::Greater => self.current_frame + 1,
            Ordering::Less => self.current_frame - 1,
            Ordering::Equal => self.current_frame,
        }
    }

    // Linear easing passes the raw sample through so overshoot reaches the
    // mapper unclamped.
    fn eased(&self, progress: f64) -> f64 {
        match self.easing {
            EasingType::Linear => progress,
            easing => easing.apply(progress),
        }
    }
}
