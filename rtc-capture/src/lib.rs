//! RTC Capture - buffer capture and dimension negotiation for local video tracks.
//!
//! A [`BufferCapturer`] accepts raw frames from the application and hands them
//! to a [`VideoCapturerDelegate`], the capture backend that feeds the encoder.
//! The delegate resolves each accepted frame's source dimensions
//! asynchronously. The capturer then maps them through
//! [`resolve_dimensions`](media::resolve_dimensions) using the
//! [`CaptureOptions`] snapshot taken when the frame was submitted, and:
//!
//! - stores the result as the capturer's current dimensions, and
//! - asks the optional [`OutputFormatAdapter`] to reconfigure its output.
//!
//! ```text
//! capture_*(frame) ──► delegate ──(oneshot: source dims)──► resolve ──┬──► current dimensions
//!                                                                     └──► adapt_output_format
//! ```
//!
//! Frames in unsupported pixel formats are dropped by the delegate without a
//! completion. A track must not be published before the first frame resolved;
//! publishers wait with [`BufferCapturer::wait_for_dimensions`].
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rtc_capture::{BufferCapturerBuilder, CaptureOptions, LocalVideoSource};
//! use media::{Dimensions, PixelBuffer, PixelFormat};
//!
//! # async fn example(pixels: bytes::Bytes) -> shared::error::Result<()> {
//! let (source, mut frames) = LocalVideoSource::new();
//! let source = Arc::new(source);
//!
//! let capturer = BufferCapturerBuilder::new(source.clone())
//!     .with_output_format_adapter(source.clone())
//!     .with_options(CaptureOptions::new(Dimensions::H720_169, 30))
//!     .build()?;
//!
//! capturer.capture_pixel_buffer_now(PixelBuffer::new(
//!     Dimensions::H1080_169,
//!     PixelFormat::Nv12FullRange,
//!     pixels,
//! ));
//!
//! let dimensions = capturer.wait_for_dimensions(Duration::from_secs(5)).await?;
//! assert_eq!(dimensions, Dimensions::H720_169);
//! # let _ = frames.recv().await;
//! # Ok(())
//! # }
//! ```

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

mod buffer_capturer;
mod delegate;
mod dimensions_cell;
mod options;
mod video_source;

pub use buffer_capturer::{BufferCapturer, BufferCapturerBuilder};
pub use delegate::{DimensionsReceiver, DimensionsSender, OutputFormatAdapter, VideoCapturerDelegate};
pub use dimensions_cell::AtomicDimensions;
pub use options::CaptureOptions;
pub use video_source::{CapturedFrame, LocalVideoSource, OutputFormat};
