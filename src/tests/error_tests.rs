//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::codec::SizeReport;
use crate::data_structures::LauTrieError;
use crate::error::verification::VerificationError;
use crate::error::workspace::WorkspaceError;
use crate::error::{
    report_error, set_error_reporter, CodecError, ErrorContext, ErrorReporter,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = CodecError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "create-trie").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("create-trie"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = CodecError::from(io_error);
    assert!(error.to_string().contains("file not found"));

    let error = CodecError::from(LauTrieError::Malformed("bad shape".to_string()));
    assert_eq!(error.to_string(), "Trie error: Malformed trie: bad shape");

    let error = CodecError::from(LauTrieError::CodeTooLong {
        length: 1100,
        max_depth: 1024,
    });
    assert_eq!(
        error.to_string(),
        "Trie error: Code of 1100 characters exceeds the maximum trie depth of 1024"
    );

    let error = CodecError::from(WorkspaceError::MissingInput(PathBuf::from("X/codes.json")));
    assert!(error.to_string().contains("X/codes.json"));
}

/// Test the round-trip error names counts and a sample of codes.
#[test]
fn test_round_trip_display() {
    let error = VerificationError::RoundTrip {
        missing: (0..8).map(|i| format!("CS {i}")).collect(),
        extraneous: vec!["MATH 1".to_string()],
    };
    let text = error.to_string();
    assert!(text.contains("lost 8 code(s)"));
    assert!(text.contains("CS 4"));
    assert!(!text.contains("CS 5"));
    assert!(text.contains("invented 1 code(s)"));
    assert!(text.contains("MATH 1"));
}

/// Test the compression gate message.
#[test]
fn test_compression_gate_display() {
    let error = VerificationError::CompressionGate {
        report: SizeReport {
            original_size: 100,
            trie_size: 140,
            compressed_size: 120,
        },
    };
    assert_eq!(
        error.to_string(),
        "compressed artifact is 120 bytes, not smaller than the 100 byte input"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the process-wide error reporter works correctly.
///
/// Note: This test modifies global state.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = CodecError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = CodecError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
