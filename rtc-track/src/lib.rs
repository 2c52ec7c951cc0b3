//! Per-track quality settings consumed by adaptive layer selection.
//!
//! A subscriber's desired quality is described by a [`TrackSettings`] value.
//! The value is immutable: every change produces a new instance through
//! [`TrackSettings::copy_with`], and the adaptation loop compares the new
//! value against the previous one to skip re-signaling when nothing changed.

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod track_settings;
pub mod video_quality;

pub use track_settings::TrackSettings;
pub use video_quality::VideoQuality;
