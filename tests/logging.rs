//! Failure tracing through the `log` facade

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use textcomb::prelude::*;
use textcomb::text::{integer, literal};

struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_failures_are_traced() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let parser = literal("let").save_right(integer());
    assert!(parser.parse_str("let x").is_failure());
    assert!(parser.parse_str("let 1").is_success());

    let lines = RECORDER.lines.lock().unwrap();
    assert!(lines.contains(&"TRACE integer failed at byte 4".to_string()));
    assert!(lines.contains(&"TRACE save_right failed at byte 4".to_string()));
    assert_eq!(lines.len(), 2);
}
