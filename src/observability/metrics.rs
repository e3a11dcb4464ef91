//! Metrics tracking for validation and export activity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for the two things the library does: validate and export.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    validations_total: Arc<AtomicU64>,
    validation_failures_total: Arc<AtomicU64>,
    exports_total: Arc<AtomicU64>,
    export_failures_total: Arc<AtomicU64>,
    export_duration_total_ms: Arc<AtomicU64>,
    pages_emitted_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            validations_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            exports_total: Arc::new(AtomicU64::new(0)),
            export_failures_total: Arc::new(AtomicU64::new(0)),
            export_duration_total_ms: Arc::new(AtomicU64::new(0)),
            pages_emitted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a validation pass.
    pub fn track_validation(&self, valid: bool) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);

        if !valid {
            self.validation_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::trace!(valid = valid, "Validation tracked");
    }

    /// Track an export attempt.
    pub fn track_export(&self, duration_ms: u128, pages: usize, success: bool) {
        self.exports_total.fetch_add(1, Ordering::Relaxed);
        self.export_duration_total_ms
            .fetch_add(duration_ms as u64, Ordering::Relaxed);

        if success {
            self.pages_emitted_total
                .fetch_add(pages as u64, Ordering::Relaxed);
        } else {
            self.export_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            duration_ms = duration_ms,
            pages = pages,
            success = success,
            "Export tracked"
        );
    }

    /// Get the total number of validation passes.
    pub fn validations_total(&self) -> u64 {
        self.validations_total.load(Ordering::Relaxed)
    }

    /// Get the number of validation passes that reported errors.
    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    /// Get the total number of export attempts.
    pub fn exports_total(&self) -> u64 {
        self.exports_total.load(Ordering::Relaxed)
    }

    /// Get the number of failed export attempts.
    pub fn export_failures_total(&self) -> u64 {
        self.export_failures_total.load(Ordering::Relaxed)
    }

    /// Get the total number of document pages emitted.
    pub fn pages_emitted_total(&self) -> u64 {
        self.pages_emitted_total.load(Ordering::Relaxed)
    }

    /// Get the export failure rate (0.0 to 1.0).
    pub fn export_failure_rate(&self) -> f64 {
        let failures = self.export_failures_total() as f64;
        let total = self.exports_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failures / total
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        self.finish_with_status(true)
    }

    /// Finish the timer with a specific status.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_track_validation() {
        let metrics = MetricsTracker::new();
        metrics.track_validation(true);
        metrics.track_validation(false);

        assert_eq!(metrics.validations_total(), 2);
        assert_eq!(metrics.validation_failures_total(), 1);
    }

    #[test]
    fn test_track_export_success_counts_pages() {
        let metrics = MetricsTracker::new();
        metrics.track_export(12, 3, true);

        assert_eq!(metrics.exports_total(), 1);
        assert_eq!(metrics.export_failures_total(), 0);
        assert_eq!(metrics.pages_emitted_total(), 3);
    }

    #[test]
    fn test_track_export_failure() {
        let metrics = MetricsTracker::new();
        metrics.track_export(5, 0, false);

        assert_eq!(metrics.exports_total(), 1);
        assert_eq!(metrics.export_failures_total(), 1);
        assert_eq!(metrics.pages_emitted_total(), 0);
    }

    #[test]
    fn test_export_failure_rate() {
        let metrics = MetricsTracker::new();
        assert_eq!(metrics.export_failure_rate(), 0.0);

        metrics.track_export(1, 1, true);
        metrics.track_export(1, 0, false);
        assert_eq!(metrics.export_failure_rate(), 0.5);
    }

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = Timer::new("test_operation");
        thread::sleep(Duration::from_millis(10));
        assert!(timer.finish() >= 10);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = MetricsTracker::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.track_validation(true);
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.track_validation(false);
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.validations_total(), 200);
        assert_eq!(metrics.validation_failures_total(), 100);
    }
}
