//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::bloom_filter::BloomFilterError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, SweepError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = SweepError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors convert and display their source.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: SweepError = io_error.into();
    assert!(format!("{error}").contains("file not found"));

    let error: SweepError = BloomFilterError::InvalidSize(0).into();
    assert_eq!(
        error.to_string(),
        "Bloom filter error: Invalid filter size 0: size must be greater than 0"
    );

    let error: SweepError = ConfigError::ValidationError("bad".to_string()).into();
    assert!(matches!(error, SweepError::Config(_)));
}

/// Test that a panicking task surfaces as a trial error.
#[tokio::test]
async fn test_join_error_conversion() {
    let handle = tokio::task::spawn_blocking(|| panic!("trial exploded"));
    let join_error = handle.await.unwrap_err();
    let error: SweepError = join_error.into();
    assert!(matches!(error, SweepError::Trial(_)));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = SweepError::Custom("test error".to_string());
    report_error(&ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = SweepError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(&ErrorContext::new(error, "test_component"));
}
