//! Track Settings
//!
//! This module defines the quality settings a subscriber currently wants for a
//! remote video track.
//!
//! Settings are produced by an external policy component (visibility, element
//! size, bandwidth) and read by the adaptive layer selector, which only
//! re-signals the server when a new value differs from the previous one.

#[cfg(test)]
mod track_settings_test;

use crate::video_quality::VideoQuality;
use media::Dimensions;

/// Desired delivery parameters for one subscribed track.
///
/// `TrackSettings` is an immutable value. Equality and hashing cover all four
/// fields, so two values built from the same fields are indistinguishable and
/// a changed field always compares unequal.
///
/// # Examples
///
/// ```
/// use media::Dimensions;
/// use rtc_track::{TrackSettings, VideoQuality};
///
/// let current = TrackSettings::default();
/// let desired = current.copy_with(Some(true), Some(Dimensions::H720_169), None, None);
///
/// assert_ne!(current, desired);
/// assert_eq!(desired.quality(), VideoQuality::Low);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackSettings {
    /// Whether media should flow for the track at all.
    enabled: bool,

    /// Size of the element the track is rendered into, zero when unknown.
    dimensions: Dimensions,

    /// Requested simulcast tier.
    quality: VideoQuality,

    /// Preferred frame rate, 0 for no preference.
    preferred_fps: u32,
}

impl TrackSettings {
    pub fn new(
        enabled: bool,
        dimensions: Dimensions,
        quality: VideoQuality,
        preferred_fps: u32,
    ) -> Self {
        Self {
            enabled,
            dimensions,
            quality,
            preferred_fps,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn quality(&self) -> VideoQuality {
        self.quality
    }

    pub fn preferred_fps(&self) -> u32 {
        self.preferred_fps
    }

    /// Returns a copy with the supplied fields replaced. `None` keeps the
    /// receiver's value.
    #[must_use]
    pub fn copy_with(
        &self,
        enabled: Option<bool>,
        dimensions: Option<Dimensions>,
        quality: Option<VideoQuality>,
        preferred_fps: Option<u32>,
    ) -> Self {
        Self {
            enabled: enabled.unwrap_or(self.enabled),
            dimensions: dimensions.unwrap_or(self.dimensions),
            quality: quality.unwrap_or(self.quality),
            preferred_fps: preferred_fps.unwrap_or(self.preferred_fps),
        }
    }

    #[must_use]
    pub fn with_enabled(&self, enabled: bool) -> Self {
        self.copy_with(Some(enabled), None, None, None)
    }

    #[must_use]
    pub fn with_dimensions(&self, dimensions: Dimensions) -> Self {
        self.copy_with(None, Some(dimensions), None, None)
    }

    #[must_use]
    pub fn with_quality(&self, quality: VideoQuality) -> Self {
        self.copy_with(None, None, Some(quality), None)
    }

    #[must_use]
    pub fn with_preferred_fps(&self, preferred_fps: u32) -> Self {
        self.copy_with(None, None, None, Some(preferred_fps))
    }
}
