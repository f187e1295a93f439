#![cfg(feature = "std")]

use std::env;
use std::string::String;

use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

/// One log line: level, emitting module, message.
fn format_record(record: &Record) -> String {
    format!("[{:<5} {}] {}", record.level(), record.target(), record.args())
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `SEABATTLE_LOG`
/// (`off`, `error` .. `trace`) and falls back to `info`.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
