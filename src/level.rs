use log::Level;

/// Debug output is excluded at compile time in release builds: the tag is
/// never formatted and the flush performs no I/O.
pub(crate) const DEBUG_OUTPUT: bool = cfg!(debug_assertions);

/// Severity of a single log message. Determines the bracketed tag text and
/// which stream the message is flushed to: `Info` and `Debug` go to stdout,
/// `Warning` goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Debug,
}

impl LogLevel {
    /// The tag text placed between brackets at the start of the emitted line.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Debug => "debug",
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Error | Level::Warn => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug | Level::Trace => Self::Debug,
        }
    }
}
