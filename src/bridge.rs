use crate::{level::LogLevel, writer::LogWriter};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::{fmt::Write as _, io::Write as _};

/// Routes the `log` crate's macros through the policy and writer, so
/// `log::info!` and friends obey the process-wide mute switch and the
/// per-level stream routing.
#[derive(Debug)]
pub struct PolicyLogger {
    filter: LevelFilter,
}

impl PolicyLogger {
    pub fn new(filter: LevelFilter) -> Self {
        Self { filter }
    }
}

impl Log for PolicyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // The writer flushes on drop at the end of this scope; mute and
            // debug-build rules are applied there.
            let mut writer = LogWriter::new();
            let _ = write!(writer.write(LogLevel::from(record.level())), "{}", record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Installs a [`PolicyLogger`] as the process-wide logger. Fails if a global
/// logger was already installed.
pub fn init(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(PolicyLogger::new(filter)))?;
    log::set_max_level(filter);
    Ok(())
}
