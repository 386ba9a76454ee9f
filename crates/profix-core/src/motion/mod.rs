//! Scroll-synchronized image-sequence playback for the hero section
//!
//! The UI samples scroll or pointer progress once per animation tick and
//! turns it into a discrete frame of a pre-rendered image sequence.
//!
//! # Layers
//!
//! ## Atoms
//! - `timing` - Numeric primitives (`lerp`, `clamp`)
//! - `easing` - Easing curves applied to progress samples
//! - `frames` - Progress to frame index mapping and frame file naming
//!
//! ## Molecules
//! - `player` - Per-sequence playback state fed back into the mapper
//! - `pointer` - Pointer parallax offsets and playback mode selection
//!
//! # Usage
//!
//! ```
//! use profix_core::motion::{SequencePlayer, SequenceConfig};
//!
//! let mut player = SequencePlayer::new(SequenceConfig::default());
//!
//! // Once per animation tick, with the latest scroll progress
//! let frame = player.update(0.5);
//! assert!(frame <= 119);
//! ```

pub mod easing;
pub mod frames;
pub mod timing;

pub mod player;
pub mod pointer;

pub use easing::{ease_out_expo, EasingType};
pub use frames::{
    frame_filename, frame_filename_with_extension, map_progress_to_frame, FrameSequence,
    DEFAULT_FRAME_PADDING,
};
pub use player::SequencePlayer;
pub use pointer::{is_low_power_device, pointer_progress, DeviceProfile, PlaybackMode};
pub use timing::{clamp, lerp};

pub use crate::config::SequenceConfig;
