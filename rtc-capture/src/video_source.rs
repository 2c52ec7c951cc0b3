use crate::delegate::{DimensionsReceiver, OutputFormatAdapter, VideoCapturerDelegate};
use log::trace;
use media::{PixelBuffer, SampleBuffer, VideoRotation};
use std::sync::{Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// A frame accepted by a [`LocalVideoSource`], ready for the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub buffer: PixelBuffer,
    pub timestamp_ns: i64,
    pub rotation: VideoRotation,
}

/// Output format last requested through [`OutputFormatAdapter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OutputFormat {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

/// In-process video source that forwards accepted frames over a channel.
///
/// Frames whose pixel format is not in
/// [`SUPPORTED_PIXEL_FORMATS`](media::SUPPORTED_PIXEL_FORMATS) are dropped
/// without resolving. Accepted frames resolve immediately with the buffer's
/// own dimensions. The source records the requested output format but does
/// not scale frames itself; the consumer of the frame channel reads
/// [`LocalVideoSource::output_format`] to configure its encoder.
#[derive(Debug)]
pub struct LocalVideoSource {
    frames_tx: mpsc::UnboundedSender<CapturedFrame>,
    output_format: Mutex<Option<OutputFormat>>,
}

impl LocalVideoSource {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CapturedFrame>) {
        let (frames_tx, frames_rx) = mpsc::unbounded_channel();
        (
            Self {
                frames_tx,
                output_format: Mutex::new(None),
            },
            frames_rx,
        )
    }

    /// The most recently requested output format, if any.
    pub fn output_format(&self) -> Option<OutputFormat> {
        *self
            .output_format
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn deliver(&self, frame: CapturedFrame) -> DimensionsReceiver {
        let (tx, rx) = oneshot::channel();

        let format = frame.buffer.format();
        if !format.is_supported() {
            trace!("dropping frame with unsupported pixel format {format:?}");
            return rx;
        }

        let dimensions = frame.buffer.dimensions();
        if self.frames_tx.send(frame).is_err() {
            trace!("frame receiver closed, dropping {dimensions} frame");
            return rx;
        }

        // The capturer may already be gone; nothing to do then.
        let _ = tx.send(dimensions);
        rx
    }
}

impl VideoCapturerDelegate for LocalVideoSource {
    fn capture_sample_buffer(&self, frame: SampleBuffer) -> DimensionsReceiver {
        let timestamp_ns = frame.timestamp_ns();
        self.deliver(CapturedFrame {
            buffer: frame.pixel_buffer().clone(),
            timestamp_ns,
            rotation: VideoRotation::Rotation0,
        })
    }

    fn capture_pixel_buffer(
        &self,
        frame: PixelBuffer,
        timestamp_ns: i64,
        rotation: VideoRotation,
    ) -> DimensionsReceiver {
        self.deliver(CapturedFrame {
            buffer: frame,
            timestamp_ns,
            rotation,
        })
    }
}

impl OutputFormatAdapter for LocalVideoSource {
    fn adapt_output_format(&self, width: u32, height: u32, fps: u32) {
        trace!("adapting output format to {width}x{height}@{fps}");
        *self
            .output_format
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(OutputFormat { width, height, fps });
    }
}
