use media::Dimensions;
use serde::{Deserialize, Serialize};

/// Output limits applied to frames fed through a
/// [`BufferCapturer`](crate::BufferCapturer).
///
/// Options belong to whoever created the capturer and may be replaced between
/// captures. Each capture call takes one snapshot of the options, which is used
/// when that frame's dimensions resolve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureOptions {
    /// Largest output size; frames are aspect-fit into it. A zero axis leaves
    /// that axis unconstrained.
    pub max_dimensions: Dimensions,
    /// Frame rate requested from the output format adapter.
    pub target_fps: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            max_dimensions: Dimensions::H1080_169,
            target_fps: 15,
        }
    }
}

impl CaptureOptions {
    pub fn new(max_dimensions: Dimensions, target_fps: u32) -> Self {
        Self {
            max_dimensions,
            target_fps,
        }
    }

    pub fn with_max_dimensions(mut self, max_dimensions: Dimensions) -> Self {
        self.max_dimensions = max_dimensions;
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_capture_options_default() {
        let options = CaptureOptions::default();
        assert_eq!(options.max_dimensions, Dimensions::new(1920, 1080));
        assert_eq!(options.target_fps, 15);
    }

    #[test]
    fn test_capture_options_builder() {
        let options = CaptureOptions::default()
            .with_max_dimensions(Dimensions::H360_169)
            .with_target_fps(30);
        assert_eq!(options, CaptureOptions::new(Dimensions::H360_169, 30));
    }

    #[test]
    fn test_capture_options_serde() -> Result<(), serde_json::Error> {
        let options = CaptureOptions::new(Dimensions::H720_169, 24);
        let json = serde_json::to_string(&options)?;
        assert_eq!(
            json,
            r#"{"maxDimensions":{"width":1280,"height":720},"targetFps":24}"#
        );
        assert_eq!(serde_json::from_str::<CaptureOptions>(&json)?, options);

        let partial: CaptureOptions = serde_json::from_str(r#"{"targetFps":60}"#)?;
        assert_eq!(partial.max_dimensions, Dimensions::H1080_169);
        assert_eq!(partial.target_fps, 60);

        Ok(())
    }
}
