#![cfg(feature = "dev")]
//! Tests for the `tracing` events emitted by the postfilter.
//!
//! ## Test Organization
//!
//! 1. **Non-finite Warnings** - Zero temporal variance, negative GV mean
//! 2. **Quiet Runs** - Finite output emits no warning

use std::io;
use std::sync::{Arc, Mutex};

use fastGV::prelude::*;
use ndarray::array;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// Helper Functions
// ============================================================================

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber recording WARN and above.
fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(LevelFilter::WARN)
        .finish();

    {
        let _guard = subscriber.set_default();
        f();
    }
    logs.contents()
}

// ============================================================================
// Non-finite Warning Tests
// ============================================================================

/// Test that a constant filtered dimension is reported.
#[test]
fn test_warns_on_zero_temporal_variance() {
    let stats = stats_from_array(&array![[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]]).unwrap();
    let data = array![[1.0, 3.0, 0.0], [2.0, 3.0, 1.0], [3.0, 3.0, 2.0]];
    let model = GlobalVariance::new().parallel(false).build().unwrap();

    let logs = capture_warnings(|| {
        let out = model.postfilter(&data, &stats).unwrap();
        assert!(out.column(1).iter().all(|v: &f64| v.is_nan()));
    });

    assert!(logs.contains("WARN"));
    assert!(logs.contains("dim=1"));
    assert!(!logs.contains("dim=2"));
    assert!(logs.contains("non-finite"));
}

/// Test that a negative GV mean is reported.
#[test]
fn test_warns_on_negative_gv_mean() {
    let stats = stats_from_array(&array![[1.0, -1.0], [0.0, 0.0]]).unwrap();
    let data = array![[1.0, 0.0], [2.0, 1.0], [3.0, 2.0]];
    let model = GlobalVariance::new().parallel(false).build().unwrap();

    let logs = capture_warnings(|| {
        let out = model.postfilter(&data, &stats).unwrap();
        assert!(out.column(1).iter().all(|v: &f64| v.is_nan()));
    });

    assert!(logs.contains("dim=1"));
    assert!(logs.contains("negative GV mean"));
}

// ============================================================================
// Quiet Run Tests
// ============================================================================

/// Test that finite output produces no warning.
#[test]
fn test_no_warning_for_finite_output() {
    let stats = stats_from_array(&array![[1.0, 1.0], [0.0, 0.0]]).unwrap();
    let data = array![[1.0, 0.0], [2.0, 1.0], [3.0, 2.0]];
    let model = GlobalVariance::new().parallel(false).build().unwrap();

    let logs = capture_warnings(|| {
        model.postfilter(&data, &stats).unwrap();
    });

    assert!(logs.is_empty());
}
