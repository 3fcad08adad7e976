use crate::{
    level::{LogLevel, DEBUG_OUTPUT},
    policy::LogPolicy,
};
use parking_lot::Mutex;
use std::{
    fmt,
    io,
};

/// Serializes the tagging step across threads so a severity tag is never
/// interleaved mid-append. The final stream write is deliberately not held
/// under this lock, so whole output lines from different threads may still
/// interleave at the OS level.
static TAG_LOCK: Mutex<()> = Mutex::new(());

/// A single in-flight log message. Text accumulates in an internal buffer and
/// is flushed as one line to stdout or stderr when the writer is dropped,
/// unless the bound policy is muted at that instant.
///
/// Each instance is one write transaction: it is not copyable and flushes
/// exactly once, on destruction, on every exit path including unwinding.
pub struct LogWriter<'p> {
    policy: &'p LogPolicy,
    level: LogLevel,
    buffer: String,
    flushed: bool,
}

impl LogWriter<'static> {
    /// A writer bound to [`LogPolicy::global`], severity `Info`.
    pub fn new() -> Self {
        Self::with_policy(LogPolicy::global())
    }
}

impl Default for LogWriter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> LogWriter<'p> {
    /// A writer bound to an explicit policy instead of the process-wide one.
    pub fn with_policy(policy: &'p LogPolicy) -> Self {
        Self { policy, level: LogLevel::Info, buffer: String::new(), flushed: false }
    }

    /// Sets the active severity, appends its bracketed tag to the buffer, and
    /// returns the writer for stream-style appends:
    ///
    /// ```
    /// use std::fmt::Write;
    /// use streamlog::{LogLevel, LogWriter};
    ///
    /// let mut log = LogWriter::new();
    /// let _ = write!(log.write(LogLevel::Info), "server started");
    /// ```
    ///
    /// Calling `write` more than once on the same instance is permitted: the
    /// buffer keeps all previously appended text (including earlier tags) and
    /// the last level decides the output stream.
    ///
    /// In a debug-disabled build a `Debug` tag is not formatted at all. Any
    /// formatting failure during tagging is discarded; at worst the emitted
    /// line is missing its tag, the caller never sees an error.
    pub fn write(&mut self, level: LogLevel) -> &mut Self {
        let _guard = TAG_LOCK.lock();
        self.level = level;
        if level != LogLevel::Debug || DEBUG_OUTPUT {
            let _ = fmt::Write::write_fmt(
                &mut self.buffer,
                format_args!("[{}] ", level.tag()),
            );
        }
        self
    }

    /// The flush decision. Runs at most once per instance; the mute flag is
    /// read here, not snapshotted at construction. `Debug` output is dropped
    /// entirely when [`DEBUG_OUTPUT`] is false.
    fn flush_into(&mut self, stdout: &mut dyn io::Write, stderr: &mut dyn io::Write) {
        if self.flushed {
            return;
        }
        self.flushed = true;

        if self.policy.is_muted() {
            return;
        }

        let result = match self.level {
            LogLevel::Info => writeln!(stdout, "{}", self.buffer),
            LogLevel::Warning => writeln!(stderr, "{}", self.buffer),
            LogLevel::Debug if DEBUG_OUTPUT => writeln!(stdout, "{}", self.buffer),
            LogLevel::Debug => Ok(()),
        };
        // A failed stream write is discarded; logging must never surface a
        // failure to the caller.
        let _ = result;
    }
}

impl fmt::Write for LogWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for LogWriter<'_> {
    fn drop(&mut self) {
        self.flush_into(&mut io::stdout(), &mut io::stderr());
    }
}
