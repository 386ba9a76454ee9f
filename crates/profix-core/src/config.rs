use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::EasingType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the booking endpoint listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Origins allowed to call the endpoint from a browser (empty = any)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Hero image sequence and its playback parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of frames in the exported sequence
    #[serde(default = "default_total_frames")]
    pub total_frames: u32,
    /// Zero-padding width of frame numbers in filenames
    #[serde(default = "default_padding")]
    pub padding: usize,
    /// Fraction of the remaining distance covered per tick (0, 1]
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Easing applied to progress samples before frame mapping
    #[serde(default)]
    pub easing: EasingType,
    /// Directory holding the frames
    #[serde(default = "default_sequence_dir")]
    pub directory: PathBuf,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            total_frames: default_total_frames(),
            padding: default_padding(),
            smoothing: default_smoothing(),
            easing: EasingType::default(),
            directory: default_sequence_dir(),
        }
    }
}

impl SequenceConfig {
    /// Frame directory with tilde expansion
    pub fn directory(&self) -> PathBuf {
        expand_tilde(&self.directory)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Booking endpoint the CLI submits to
    #[serde(default = "default_booking_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_booking_endpoint(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_total_frames() -> u32 {
    120
}

fn default_padding() -> usize {
    crate::motion::DEFAULT_FRAME_PADDING
}

fn default_smoothing() -> f64 {
    0.12
}

fn default_sequence_dir() -> PathBuf {
    PathBuf::from("public").join("sequence")
}

fn default_booking_endpoint() -> String {
    "http://127.0.0.1:3000/api/booking".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/profix/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("profix")
            .join("config.toml")
    }

    /// Reject values the playback code would only tolerate, not use
    pub fn validate(&self) -> crate::Result<()> {
        let seq = &self.sequence;
        if seq.total_frames == 0 {
            return Err(crate::Error::Config(
                "sequence.total_frames must be at least 1".to_string(),
            ));
        }
        if !(seq.smoothing > 0.0 && seq.smoothing <= 1.0) {
            return Err(crate::Error::Config(format!(
                "sequence.smoothing must be in (0, 1], got {}",
                seq.smoothing
            )));
        }
        Ok(())
    }
}
