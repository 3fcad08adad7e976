use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL: LogPolicy = LogPolicy::new();

/// Process-wide switch controlling whether log output is emitted.
///
/// The flag is a relaxed atomic: a `mute`/`unmute` racing with a concurrent
/// flush may log or suppress that one message either way. Tolerated.
#[derive(Debug)]
pub struct LogPolicy {
    muted: AtomicBool,
}

impl LogPolicy {
    /// Creates a policy in the muted state, matching the process default.
    pub const fn new() -> Self {
        Self { muted: AtomicBool::new(true) }
    }

    /// The single policy shared by every [`LogWriter`](crate::LogWriter) that
    /// doesn't carry an injected one. Const-initialized, so first access from
    /// any number of threads observes the same fully-constructed instance.
    pub fn global() -> &'static LogPolicy {
        &GLOBAL
    }

    /// Suppresses all output from subsequently flushed writers.
    pub fn mute(&self) {
        self.muted.store(true, Ordering::Relaxed);
    }

    /// Re-enables output from subsequently flushed writers.
    pub fn unmute(&self) {
        self.muted.store(false, Ordering::Relaxed);
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self::new()
    }
}
