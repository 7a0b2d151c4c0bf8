//! Integration tests for deduplicated warnings.

use std::sync::{Mutex, MutexGuard, Once, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record};
use sift_common::warning::{clear_warnings, warn_once};

/// Records every warning logged under the `sift` target.
struct Capture;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();
/// `clear_warnings` resets global state, so the tests take turns.
static SERIAL: Mutex<()> = Mutex::new(());

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() == Level::Warn && metadata.target() == "sift"
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

fn install() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });
    guard
}

fn logged(line: &str) -> usize {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| *entry == line)
        .count()
}

#[test]
fn test_warn_once_deduplicates() {
    let _serial = install();
    warn_once("test", "first sighting of a unique message");
    warn_once("test", "first sighting of a unique message");
    assert_eq!(logged("[test] first sighting of a unique message"), 1);
}

#[test]
fn test_warn_once_keys_on_component() {
    let _serial = install();
    warn_once("one", "shared text");
    warn_once("two", "shared text");
    assert_eq!(logged("[one] shared text"), 1);
    assert_eq!(logged("[two] shared text"), 1);
}

#[test]
fn test_clear_warnings_allows_repeat() {
    let _serial = install();
    warn_once("clear", "seen before and after a reset");
    clear_warnings();
    warn_once("clear", "seen before and after a reset");
    assert_eq!(logged("[clear] seen before and after a reset"), 2);
}
