pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod format;
pub mod motion;
pub mod placeholder;
pub mod ratelimit;
pub mod validate;

pub use api::{ApiServer, BookingClient, BookingOutcome};
pub use config::{AppConfig, SequenceConfig};
pub use error::{Error, Result};
pub use format::format_phone_number;
pub use motion::{frame_filename, map_progress_to_frame, EasingType, SequencePlayer};
pub use ratelimit::{debounce, throttle, Debouncer, Throttle};
pub use validate::{is_valid_email, is_valid_phone, is_valid_uae_phone};
