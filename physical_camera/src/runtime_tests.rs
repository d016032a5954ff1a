//! Unit tests for CameraRuntime
//!
//! IMPORTANT: LOGGER is a global OnceLock shared across all tests.
//! Tests that swap the logger are marked with #[serial].

use crate::physcam::CameraRuntime;
use crate::physcam::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

/// Test logger that captures entries from "physcam::tests" only
///
/// Other unit tests log concurrently through the same global logger.
struct TestLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, Option<u32>)>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<(LogSeverity, String, Option<u32>)>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source != "physcam::tests" {
            return;
        }
        self.entries.lock().unwrap().push((entry.severity, entry.message.clone(), entry.line));
    }
}

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let (logger, entries) = TestLogger::new();
    CameraRuntime::set_logger(logger);

    CameraRuntime::log(LogSeverity::Info, "physcam::tests", "hello".to_string());
    CameraRuntime::log_detailed(LogSeverity::Error, "physcam::tests", "boom".to_string(), "x.rs", 3);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], (LogSeverity::Info, "hello".to_string(), None));
    assert_eq!(captured[1], (LogSeverity::Error, "boom".to_string(), Some(3)));
    drop(captured);

    CameraRuntime::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_runtime() {
    let (logger, entries) = TestLogger::new();
    CameraRuntime::set_logger(logger);

    crate::camera_trace!("physcam::tests", "trace {}", 1);
    crate::camera_debug!("physcam::tests", "debug {}", 2);
    crate::camera_info!("physcam::tests", "info {}", 3);
    crate::camera_warn!("physcam::tests", "warn {}", 4);
    crate::camera_error!("physcam::tests", "error {}", 5);

    let captured = entries.lock().unwrap();
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.0).collect();
    assert_eq!(severities, vec![
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ]);
    assert_eq!(captured[4].1, "error 5");
    assert!(captured[4].2.is_some());
    assert!(captured[0].2.is_none());
    drop(captured);

    CameraRuntime::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (logger, entries) = TestLogger::new();
    CameraRuntime::set_logger(logger);
    CameraRuntime::reset_logger();

    CameraRuntime::log(LogSeverity::Info, "physcam::tests", "after reset".to_string());
    assert!(entries.lock().unwrap().is_empty());
}
