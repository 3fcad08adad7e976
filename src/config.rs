use crate::{bridge, policy::LogPolicy};
use log::{LevelFilter, SetLoggerError};

/// Config controls the process-wide logging behaviour: whether output starts
/// muted and the maximum level forwarded from the `log` facade. It is applied
/// once at startup via [`Config::install`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the global policy starts muted.
    pub muted: bool,
    /// The maximum level forwarded from `log` macros.
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    // Setters
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    /// Applies the mute flag to the global policy and installs the `log`
    /// facade bridge. Fails if a global logger was already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let policy = LogPolicy::global();
        if self.muted {
            policy.mute();
        } else {
            policy.unmute();
        }
        bridge::init(self.log_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        // The process starts muted, matching LogPolicy::new().
        Self { muted: true, log_level: LevelFilter::Info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(config.muted);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_setters() {
        let config = Config::new().with_muted(false).with_log_level(LevelFilter::Debug);
        assert!(!config.muted);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
