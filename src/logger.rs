//! Logging setup for the shroud binary.
//!
//! Two output shapes, selected by the level string: a plain human-readable
//! format via `env_logger`, or JSON lines on stderr when the level is
//! prefixed with `json:` (e.g. `json:debug`), matching the rest of the
//! packaging toolchain. The level comes from `SHROUD_LOG_LEVEL` unless the
//! caller passes one explicitly.

use chrono::{Local, Utc};
use log::{Level, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::io::{self, Write};

/// JSON-lines logger writing one object per record to stderr.
#[derive(Debug)]
struct JsonLogger {
    level: Level,
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
        });

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{entry}");
        let _ = stderr.flush();
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "warn" => Level::Warn,
        "error" => Level::Error,
        _ => Level::Info,
    }
}

/// Initialize logging from a level string such as `debug` or `json:info`.
///
/// Initialization failure (a logger already installed) is logged to
/// stderr and otherwise ignored; the transform itself never depends on
/// logging being live.
pub fn init_with_level(level_str: &str) {
    let (use_json, level_name) = if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    };

    let level = parse_level(level_name);

    if use_json {
        let logger = Box::new(JsonLogger { level });
        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return;
        }
        log::set_max_level(level.to_level_filter());
        return;
    }

    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Initialize logging from `SHROUD_LOG_LEVEL`, defaulting to `info`.
pub fn init() {
    let level = env::var("SHROUD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_with_level(&level);
}
