#![cfg(feature = "std")]

//! Stderr logger. Stdout is left free for STOMP frames when no `--connect`
//! peer is given.

use log::{Level, LevelFilter, Metadata, Record};
use std::env;
use std::fmt;

const LEVEL_VAR: &str = "BATTLESHIP_CLIENT_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_record(record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

/// `LEVEL [module] - message`, with the crate prefix dropped from the module
/// path so `battleship_client::session` reads as `session`.
fn format_record(level: Level, target: &str, args: &fmt::Arguments) -> String {
    let module = target
        .strip_prefix("battleship_client::")
        .unwrap_or(target);
    format!("{:<5} [{}] - {}", level, module, args)
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `BATTLESHIP_CLIENT_LOG`
/// environment variable. Defaults to `info` if unset or invalid. Calling it
/// again keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LEVEL_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_module() {
        assert_eq!(
            format_record(Level::Warn, "battleship_client::session", &format_args!("no room")),
            "WARN  [session] - no room"
        );
        assert_eq!(
            format_record(Level::Debug, "other", &format_args!("{} bytes", 12)),
            "DEBUG [other] - 12 bytes"
        );
    }

    #[test]
    fn level_falls_back_to_info() {
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" trace ")), LevelFilter::Trace);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from(None), LevelFilter::Info);
    }
}
