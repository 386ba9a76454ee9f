//! Progress to frame index mapping and frame file naming

use std::path::{Path, PathBuf};

use super::timing::{clamp, lerp};
use crate::config::SequenceConfig;

/// Zero-padding width used by the exported hero sequence
pub const DEFAULT_FRAME_PADDING: usize = 4;

/// Extension of the production frames
pub const FRAME_EXTENSION: &str = "webp";

/// Map a progress sample to a smoothed frame index
///
/// `progress` is conventionally in [0, 1] but may overshoot in either
/// direction; the result is always in `[0, total_frames - 1]`. The mapper
/// is stateless: callers feed their previous return value back in as
/// `previous_index` on every tick, and the index moves `smoothing` of the
/// way toward the raw target per call.
///
/// Rounding is half away from zero (`f64::round`), which for the
/// non-negative indices that survive clamping is round-half-up: a smoothed
/// index of `59.5` becomes frame `60`.
///
/// Because the caller feeds back a rounded index, repeated calls stop
/// moving once `smoothing * distance < 0.5`. [`SequencePlayer`] closes that
/// gap; direct callers see the index settle within `0.5 / smoothing`
/// frames of the target.
///
/// [`SequencePlayer`]: super::SequencePlayer
///
/// `total_frames` of 0 or 1 always yields frame 0. A NaN intermediate (for
/// example infinite progress with zero smoothing) leaves the index where it
/// was.
pub fn map_progress_to_frame(
    progress: f64,
    total_frames: u32,
    smoothing: f64,
    previous_index: u32,
) -> u32 {
    if total_frames <= 1 {
        return 0;
    }
    let last = total_frames - 1;

    let raw_index = progress * f64::from(last);
    let smoothed = lerp(f64::from(previous_index), raw_index, smoothing);
    if smoothed.is_nan() {
        return previous_index.min(last);
    }

    clamp(smoothed.round(), 0.0, f64::from(last)) as u32
}

/// Filename of a production frame: `frame_0001_delay-0.066s.webp`
///
/// Indices wider than `padding` are kept whole, never truncated.
pub fn frame_filename(index: u32, padding: usize) -> String {
    frame_filename_with_extension(index, padding, FRAME_EXTENSION)
}

/// Same naming rule as [`frame_filename`] with a caller-chosen extension
pub fn frame_filename_with_extension(index: u32, padding: usize, extension: &str) -> String {
    format!(
        "frame_{:0width$}_delay-0.066s.{}",
        index,
        extension,
        width = padding
    )
}

/// An exported image sequence on disk
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    pub total_frames: u32,
    pub padding: usize,
    pub extension: String,
    pub directory: PathBuf,
}

impl FrameSequence {
    pub fn new(total_frames: u32, directory: impl Into<PathBuf>) -> Self {
        Self {
            total_frames,
            padding: DEFAULT_FRAME_PADDING,
            extension: FRAME_EXTENSION.to_string(),
            directory: directory.into(),
        }
    }

    pub fn from_config(config: &SequenceConfig) -> Self {
        Self {
            total_frames: config.total_frames,
            padding: config.padding,
            extension: FRAME_EXTENSION.to_string(),
            directory: config.directory(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Highest valid frame index (0 for an empty sequence)
    #[inline]
    pub fn last_index(&self) -> u32 {
        self.total_frames.saturating_sub(1)
    }

    pub fn filename(&self, index: u32) -> String {
        frame_filename_with_extension(index, self.padding, &self.extension)
    }

    pub fn path(&self, index: u32) -> PathBuf {
        self.directory.join(self.filename(index))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Filenames of every frame in playback order
    pub fn filenames(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.total_frames).map(move |i| self.filename(i))
    }
}
