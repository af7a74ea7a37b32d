//! Store metrics collection.

use metrics::histogram;
use std::time::Instant;

/// Record the duration of one store operation.
pub fn record_store_duration(operation: &'static str, key: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation,
        "key" => key.to_string()
    )
    .record(duration_secs);
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = StoreTimer::new("read", PAGES_KEY);
/// let raw = backend.get(PAGES_KEY);
/// timer.record();
/// ```
pub struct StoreTimer {
    operation: &'static str,
    key: String,
    start: Instant,
}

impl StoreTimer {
    pub fn new(operation: &'static str, key: impl Into<String>) -> Self {
        Self {
            operation,
            key: key.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_store_duration(self.operation, &self.key, duration);
    }
}
