//! Simulcast quality tiers.

use shared::error::{Error, Result};
use std::fmt;

/// Quality tier of a simulcast layer.
///
/// Tiers are ordered, `Low < Medium < High`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VideoQuality {
    /// The lowest resolution / bitrate layer.
    #[default]
    Low,

    /// The middle layer.
    Medium,

    /// The full resolution layer.
    High,
}

const VIDEO_QUALITY_LOW_STR: &str = "low";
const VIDEO_QUALITY_MEDIUM_STR: &str = "medium";
const VIDEO_QUALITY_HIGH_STR: &str = "high";

impl TryFrom<&str> for VideoQuality {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        match raw {
            VIDEO_QUALITY_LOW_STR => Ok(VideoQuality::Low),
            VIDEO_QUALITY_MEDIUM_STR => Ok(VideoQuality::Medium),
            VIDEO_QUALITY_HIGH_STR => Ok(VideoQuality::High),
            _ => Err(Error::ErrInvalidVideoQuality(raw.to_owned())),
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            VideoQuality::Low => VIDEO_QUALITY_LOW_STR,
            VideoQuality::Medium => VIDEO_QUALITY_MEDIUM_STR,
            VideoQuality::High => VIDEO_QUALITY_HIGH_STR,
        };
        write!(f, "{s}")
    }
}
