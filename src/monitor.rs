use std::time::{Duration, Instant};

/// Log how long `name` took since `start` and return the elapsed time.
///
/// ```
/// use std::time::Instant;
///
/// let start = Instant::now();
/// let elapsed = rust_utils::monitor::time_track(start, "noop");
/// assert!(elapsed >= std::time::Duration::ZERO);
/// ```
pub fn time_track(start: Instant, name: &str) -> Duration {
    let elapsed = start.elapsed();
    tracing::info!(target: "rust_utils.monitor", name, ?elapsed, "{name} took {elapsed:?}");
    elapsed
}
