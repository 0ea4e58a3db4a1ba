// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER: ConsoleLogger = ConsoleLogger;
static USE_COLOR: AtomicBool = AtomicBool::new(true);

struct ConsoleLogger;

/// Installs the stderr logger. Fails if another logger is already set.
pub fn init(level: LevelFilter, use_color: bool) -> Result<(), SetLoggerError> {
  USE_COLOR.store(use_color, Ordering::Relaxed);
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Prefix for a record, e.g. "🔴 " or "[ERROR] " without colour.
fn prefix(level: Level, use_color: bool) -> &'static str {
  if use_color {
    match level {
      Level::Error => "🔴 ",
      Level::Warn => "🟠 ",
      Level::Info => "🔵 ",
      Level::Debug => "⚪ ",
      Level::Trace => "▫️ ",
    }
  } else {
    match level {
      Level::Error => "[ERROR] ",
      Level::Warn => "[WARN]  ",
      Level::Info => "[INFO]  ",
      Level::Debug => "[DEBUG] ",
      Level::Trace => "[TRACE] ",
    }
  }
}

fn format_line(record: &Record, use_color: bool) -> String {
  format!("{}{}", prefix(record.level(), use_color), record.args())
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_line(record, USE_COLOR.load(Ordering::Relaxed));
      let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
