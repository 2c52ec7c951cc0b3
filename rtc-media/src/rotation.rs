use shared::error::{Error, Result};
use std::fmt;

/// Clockwise rotation that must be applied to a captured frame before display.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VideoRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl VideoRotation {
    pub fn degrees(&self) -> u32 {
        match *self {
            VideoRotation::Rotation0 => 0,
            VideoRotation::Rotation90 => 90,
            VideoRotation::Rotation180 => 180,
            VideoRotation::Rotation270 => 270,
        }
    }

    /// True for 90° and 270°, where width and height trade places.
    pub fn is_quarter_turn(&self) -> bool {
        matches!(
            self,
            VideoRotation::Rotation90 | VideoRotation::Rotation270
        )
    }
}

impl TryFrom<u32> for VideoRotation {
    type Error = Error;

    fn try_from(degrees: u32) -> Result<Self> {
        match degrees {
            0 => Ok(VideoRotation::Rotation0),
            90 => Ok(VideoRotation::Rotation90),
            180 => Ok(VideoRotation::Rotation180),
            270 => Ok(VideoRotation::Rotation270),
            _ => Err(Error::ErrInvalidRotation(degrees)),
        }
    }
}

impl fmt::Display for VideoRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_video_rotation_try_from() -> Result<()> {
        for degrees in [0u32, 90, 180, 270] {
            let rotation = VideoRotation::try_from(degrees)?;
            assert_eq!(rotation.degrees(), degrees);
        }

        assert_eq!(
            VideoRotation::try_from(45u32),
            Err(Error::ErrInvalidRotation(45))
        );
        assert_eq!(
            VideoRotation::try_from(360u32),
            Err(Error::ErrInvalidRotation(360))
        );

        Ok(())
    }

    #[test]
    fn test_video_rotation_display() {
        assert_eq!(VideoRotation::default().to_string(), "0°");
        assert_eq!(VideoRotation::Rotation270.to_string(), "270°");
    }
}
