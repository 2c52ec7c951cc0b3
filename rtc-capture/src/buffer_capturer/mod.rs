
use crate::delegate::{DimensionsReceiver, OutputFormatAdapter, VideoCapturerDelegate};
use crate::dimensions_cell::AtomicDimensions;
use crate::options::CaptureOptions;
use log::{debug, trace, warn};
use media::{Dimensions, PixelBuffer, SampleBuffer, VideoRotation, resolve_dimensions};
use shared::error::{Error, Result};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{Notify, watch};

/// Builder for the BufferCapturer.
///
/// # Example
///
/// ```ignore
/// use rtc_capture::{BufferCapturerBuilder, CaptureOptions};
///
/// let capturer = BufferCapturerBuilder::new(video_source.clone())
///     .with_output_format_adapter(video_source)
///     .with_options(CaptureOptions::new(Dimensions::H720_169, 30))
///     .build()?;
/// ```
pub struct BufferCapturerBuilder {
    delegate: Arc<dyn VideoCapturerDelegate>,
    adapter: Option<Arc<dyn OutputFormatAdapter>>,
    options: CaptureOptions,
    runtime: Option<Handle>,
}

impl BufferCapturerBuilder {
    pub fn new(delegate: Arc<dyn VideoCapturerDelegate>) -> Self {
        Self {
            delegate,
            adapter: None,
            options: CaptureOptions::default(),
            runtime: None,
        }
    }

    /// Set the backend that reconfigures output after dimensions resolve.
    ///
    /// Without an adapter the capturer only tracks dimensions.
    pub fn with_output_format_adapter(mut self, adapter: Arc<dyn OutputFormatAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn with_options(mut self, options: CaptureOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the runtime completions are awaited on.
    ///
    /// Defaults to the runtime `build` is called from.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the capturer.
    ///
    /// Fails with [`Error::ErrNoRuntime`] when no runtime was given and `build`
    /// is not called from within a tokio runtime.
    pub fn build(self) -> Result<BufferCapturer> {
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(|_| Error::ErrNoRuntime)?,
        };

        let (stop_tx, _) = watch::channel(false);

        Ok(BufferCapturer {
            delegate: self.delegate,
            adapter: self.adapter,
            options: Mutex::new(self.options),
            state: Arc::new(CaptureState::default()),
            stop_tx,
            runtime,
        })
    }
}

#[derive(Default)]
struct CaptureState {
    dimensions: AtomicDimensions,
    dimensions_changed: Notify,
}

impl CaptureState {
    fn set_dimensions(&self, dimensions: Dimensions) {
        self.dimensions.store(dimensions);
        self.dimensions_changed.notify_waiters();
    }
}

/// Captures application supplied frames and negotiates their output size.
///
/// Every accepted frame resolves its source dimensions asynchronously. The
/// capturer aspect-fits them into [`CaptureOptions::max_dimensions`], rounds
/// to encode-safe sizes, stores the result as [`BufferCapturer::dimensions`]
/// and, when an [`OutputFormatAdapter`] was configured, requests that output
/// format at [`CaptureOptions::target_fps`].
///
/// Completions may finish in any order; the last one to finish wins.
///
/// At least one frame must resolve before the track is published, since
/// publishing computes video parameters from the dimensions.
pub struct BufferCapturer {
    delegate: Arc<dyn VideoCapturerDelegate>,
    adapter: Option<Arc<dyn OutputFormatAdapter>>,
    options: Mutex<CaptureOptions>,
    state: Arc<CaptureState>,
    stop_tx: watch::Sender<bool>,
    runtime: Handle,
}

impl BufferCapturer {
    /// Current options.
    pub fn options(&self) -> CaptureOptions {
        *self.options.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the options. Frames already submitted keep the snapshot taken
    /// when they were captured.
    pub fn set_options(&self, options: CaptureOptions) {
        *self.options.lock().unwrap_or_else(PoisonError::into_inner) = options;
    }

    /// Last resolved target dimensions, zero until the first frame resolves.
    ///
    /// Eventually consistent: with several frames in flight the value follows
    /// whichever completion finished last.
    pub fn dimensions(&self) -> Dimensions {
        self.state.dimensions.load()
    }

    /// Capture a frame that carries its own timestamp.
    pub fn capture_sample_buffer(&self, frame: SampleBuffer) {
        if self.is_stopped() {
            trace!("capturer stopped, ignoring sample buffer");
            return;
        }

        let options = self.options();
        trace!(
            "capture sample buffer {} {:?} at {}ns",
            frame.dimensions(),
            frame.format(),
            frame.timestamp_ns()
        );
        let completion = self.delegate.capture_sample_buffer(frame);
        self.spawn_resolution(completion, options);
    }

    /// Capture a raw frame with an explicit timestamp and rotation.
    pub fn capture_pixel_buffer(
        &self,
        frame: PixelBuffer,
        timestamp_ns: i64,
        rotation: VideoRotation,
    ) {
        if self.is_stopped() {
            trace!("capturer stopped, ignoring pixel buffer");
            return;
        }

        let options = self.options();
        trace!(
            "capture pixel buffer {} {:?} at {timestamp_ns}ns rotated {rotation}",
            frame.dimensions(),
            frame.format()
        );
        let completion = self
            .delegate
            .capture_pixel_buffer(frame, timestamp_ns, rotation);
        self.spawn_resolution(completion, options);
    }

    /// Capture a raw frame stamped with the current capture clock, unrotated.
    pub fn capture_pixel_buffer_now(&self, frame: PixelBuffer) {
        self.capture_pixel_buffer(
            frame,
            shared::time::timestamp_ns(),
            VideoRotation::Rotation0,
        );
    }

    /// Wait until dimensions have resolved to a non-zero size.
    ///
    /// Returns immediately when a frame already resolved. Fails with
    /// [`Error::ErrDimensionsTimeout`] when nothing resolves within `timeout`
    /// and with [`Error::ErrCapturerClosed`] when the capturer is stopped.
    pub async fn wait_for_dimensions(&self, timeout: Duration) -> Result<Dimensions> {
        let mut stopped = self.stop_tx.subscribe();

        let wait = async {
            loop {
                let notified = self.state.dimensions_changed.notified();
                tokio::pin!(notified);
                // Register before checking, so a store between the check and
                // the await still wakes us.
                notified.as_mut().enable();

                let current = self.dimensions();
                if !current.is_zero() {
                    return Ok(current);
                }
                if *stopped.borrow_and_update() {
                    return Err(Error::ErrCapturerClosed);
                }

                tokio::select! {
                    _ = &mut notified => {}
                    _ = stopped.changed() => {}
                }
            }
        };

        tokio::time::timeout(timeout, wait)
            .await
            .map_err(|_| Error::ErrDimensionsTimeout)?
    }

    /// Stop the capturer.
    ///
    /// Later captures are ignored and completions still in flight are dropped
    /// without touching dimensions or the output format adapter.
    pub fn stop(&self) {
        if !self.stop_tx.send_replace(true) {
            debug!("capturer stopped at {}", self.dimensions());
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop_tx.borrow()
    }

    fn spawn_resolution(&self, completion: DimensionsReceiver, options: CaptureOptions) {
        let state = Arc::downgrade(&self.state);
        let adapter = self.adapter.clone();
        let stopped = self.stop_tx.subscribe();

        self.runtime
            .spawn(resolve_completion(completion, options, state, adapter, stopped));
    }
}

impl Drop for BufferCapturer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn resolve_completion(
    completion: DimensionsReceiver,
    options: CaptureOptions,
    state: Weak<CaptureState>,
    adapter: Option<Arc<dyn OutputFormatAdapter>>,
    mut stopped: watch::Receiver<bool>,
) {
    let source = tokio::select! {
        biased;
        _ = wait_stopped(&mut stopped) => {
            trace!("capturer stopped before dimensions resolved");
            return;
        }
        result = completion => match result {
            Ok(source) => source,
            Err(_) => {
                trace!("frame dropped without resolving dimensions");
                return;
            }
        },
    };

    let Some(state) = state.upgrade() else {
        debug!("capturer released, dropping resolved {source}");
        return;
    };
    if is_cancelled(&stopped) {
        debug!("capturer stopped, dropping resolved {source}");
        return;
    }

    let target = resolve_dimensions(source, options.max_dimensions);
    if target.is_zero() {
        warn!(
            "source {source} resolved to degenerate {target} within {}",
            options.max_dimensions
        );
    } else {
        debug!(
            "source {source} resolved to {target} within {}",
            options.max_dimensions
        );
    }

    state.set_dimensions(target);

    if let Some(adapter) = adapter {
        adapter.adapt_output_format(target.width, target.height, options.target_fps);
    }
}

/// Resolves once the capturer is stopped or dropped.
async fn wait_stopped(stopped: &mut watch::Receiver<bool>) {
    let _ = stopped.wait_for(|stopped| *stopped).await;
}

fn is_cancelled(stopped: &watch::Receiver<bool>) -> bool {
    *stopped.borrow() || stopped.has_changed().is_err()
}
