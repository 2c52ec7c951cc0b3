use std::sync::OnceLock;
use std::time::Instant;

static CLOCK_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Returns a monotonic capture timestamp in nanoseconds.
///
/// All timestamps share one process-wide origin, so values taken from
/// different threads are comparable. The first call returns a value close to 0.
pub fn timestamp_ns() -> i64 {
    let origin = *CLOCK_ORIGIN.get_or_init(Instant::now);
    i64::try_from(origin.elapsed().as_nanos()).unwrap_or(i64::MAX)
}
