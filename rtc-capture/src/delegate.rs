use media::{Dimensions, PixelBuffer, SampleBuffer, VideoRotation};
use tokio::sync::oneshot;

/// Completion side handed to the capture backend for one frame.
pub type DimensionsSender = oneshot::Sender<Dimensions>;

/// Resolves once with the source dimensions of an accepted frame. Dropping
/// the matching [`DimensionsSender`] without sending means the frame was
/// dropped.
pub type DimensionsReceiver = oneshot::Receiver<Dimensions>;

/// The capture backend a [`BufferCapturer`](crate::BufferCapturer) feeds.
///
/// Implementations decide whether a frame's pixel format is supported. An
/// unsupported frame is dropped silently by dropping the sender, so the
/// returned receiver never yields a value.
///
/// The receiver may resolve on any thread and in any order relative to other
/// frames.
pub trait VideoCapturerDelegate: Send + Sync {
    /// Accepts a frame that carries its own timestamp.
    fn capture_sample_buffer(&self, frame: SampleBuffer) -> DimensionsReceiver;

    /// Accepts a raw frame with an explicit timestamp and rotation.
    fn capture_pixel_buffer(
        &self,
        frame: PixelBuffer,
        timestamp_ns: i64,
        rotation: VideoRotation,
    ) -> DimensionsReceiver;
}

/// Optional backend capability to reconfigure the format frames are delivered
/// to the encoder in.
pub trait OutputFormatAdapter: Send + Sync {
    fn adapt_output_format(&self, width: u32, height: u32, fps: u32);
}
