//! Pointer parallax and playback mode selection for the hero section

use super::timing::clamp;

/// Normalized pointer offset inside a tracked element, in [-0.5, 0.5]
///
/// 0 is the element's center along the axis. A non-positive `extent`
/// (element not laid out yet) reports the center.
pub fn pointer_progress(position: f64, origin: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    clamp((position - origin) / extent - 0.5, -0.5, 0.5)
}

/// What the client reports about the viewing device
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceProfile {
    pub prefers_reduced_motion: bool,
    /// Logical CPU cores, when the platform exposes them
    pub cores: Option<usize>,
    /// Device memory in gigabytes, when the platform exposes it
    pub memory_gb: Option<f64>,
}

/// Assume a mid-range device when the core count is unknown
const DEFAULT_CORES: usize = 4;
const MIN_CORES: usize = 4;
const MIN_MEMORY_GB: f64 = 4.0;

/// Heuristic for devices that should not decode a full frame sequence
pub fn is_low_power_device(cores: Option<usize>, memory_gb: Option<f64>) -> bool {
    let cores = cores.filter(|&c| c > 0).unwrap_or(DEFAULT_CORES);
    if cores < MIN_CORES {
        return true;
    }
    matches!(memory_gb, Some(mem) if mem > 0.0 && mem < MIN_MEMORY_GB)
}

/// How the hero section should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Scroll-driven frame sequence
    Sequence,
    /// Single poster image
    Static,
}

impl PlaybackMode {
    pub fn detect(device: DeviceProfile) -> Self {
        if device.prefers_reduced_motion || is_low_power_device(device.cores, device.memory_gb) {
            PlaybackMode::Static
        } else {
            PlaybackMode::Sequence
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, PlaybackMode::Sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_progress_center_and_edges() {
        assert_eq!(pointer_progress(500.0, 0.0, 1000.0), 0.0);
        assert_eq!(pointer_progress(0.0, 0.0, 1000.0), -0.5);
        assert_eq!(pointer_progress(1000.0, 0.0, 1000.0), 0.5);
        assert_eq!(pointer_progress(350.0, 100.0, 1000.0), -0.25);
    }

    #[test]
    fn test_pointer_progress_outside_element_clamps() {
        assert_eq!(pointer_progress(-200.0, 0.0, 1000.0), -0.5);
        assert_eq!(pointer_progress(4000.0, 0.0, 1000.0), 0.5);
    }

    #[test]
    fn test_pointer_progress_without_layout() {
        assert_eq!(pointer_progress(10.0, 0.0, 0.0), 0.0);
        assert_eq!(pointer_progress(10.0, 0.0, -5.0), 0.0);
        assert_eq!(pointer_progress(10.0, 0.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_low_power_heuristic() {
        assert!(!is_low_power_device(None, None));
        assert!(is_low_power_device(Some(2), None));
        assert!(!is_low_power_device(Some(8), Some(8.0)));
        assert!(is_low_power_device(Some(8), Some(2.0)));
        // Unknown or zero values fall back to defaults
        assert!(!is_low_power_device(Some(0), Some(0.0)));
    }

    #[test]
    fn test_playback_mode_detection() {
        let capable = DeviceProfile {
            prefers_reduced_motion: false,
            cores: Some(8),
            memory_gb: Some(16.0),
        };
        assert_eq!(PlaybackMode::detect(capable), PlaybackMode::Sequence);
        assert!(PlaybackMode::detect(capable).is_animated());

        let reduced = DeviceProfile {
            prefers_reduced_motion: true,
            ..capable
        };
        assert_eq!(PlaybackMode::detect(reduced), PlaybackMode::Static);

        let weak = DeviceProfile {
            cores: Some(2),
            ..capable
        };
        assert_eq!(PlaybackMode::detect(weak), PlaybackMode::Static);
    }
}
