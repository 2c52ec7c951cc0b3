//! RTC Media - video frame and dimension primitives.
//!
//! This crate holds the pure building blocks shared by capturers and track
//! publication:
//!
//! - [`Dimensions`]: width/height value type with aspect-fit and
//!   encode-safe rounding.
//! - [`resolve_dimensions`]: maps a source frame size onto the size a
//!   capturer should deliver to the encoder.
//! - [`VideoRotation`], [`PixelFormat`], [`PixelBuffer`] and [`SampleBuffer`]:
//!   the raw frame forms accepted by a capturer.
//!
//! ```
//! use rtc_media::{Dimensions, resolve_dimensions};
//!
//! let target = resolve_dimensions(Dimensions::new(1920, 1080), Dimensions::new(640, 640));
//! assert_eq!(target, Dimensions::new(640, 360));
//! ```

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod dimensions;
pub mod frame;
pub mod resolver;
pub mod rotation;

pub use dimensions::Dimensions;
pub use frame::{PixelBuffer, PixelFormat, SUPPORTED_PIXEL_FORMATS, SampleBuffer};
pub use resolver::resolve_dimensions;
pub use rotation::VideoRotation;
