use log::LevelFilter;
use std::{fmt::Write as _, thread};
use streamlog::{Config, LogLevel, LogPolicy, LogWriter};

// The global policy and the `log` facade are process-wide, and integration
// tests in one binary share the process. Everything touching that shared
// state lives in this single test so the steps stay serialized.
#[test]
fn global_policy_and_facade_lifecycle() {
    // The process starts muted, so a freshly constructed writer dropped
    // without any policy changes performs no I/O.
    let mut writer = LogWriter::new();
    write!(writer.write(LogLevel::Info), "suppressed by default").unwrap();
    drop(writer);

    // Two accesses, from different threads, see one shared instance.
    let a = LogPolicy::global();
    let b = thread::spawn(LogPolicy::global).join().unwrap();
    assert!(std::ptr::eq(a, b));

    // Mutating through one reference is observable through the other.
    a.unmute();
    assert!(!b.is_muted());
    b.mute();
    assert!(a.is_muted());

    // Installing the facade applies the configured mute flag and claims the
    // `log` crate's one global logger slot.
    Config::new().with_muted(false).with_log_level(LevelFilter::Debug).install().unwrap();
    assert!(!LogPolicy::global().is_muted());
    log::info!("routed through the policy logger");

    assert!(Config::new().install().is_err());

    LogPolicy::global().mute();
}

#[test]
fn writer_against_local_policy_does_not_touch_global_state() {
    let policy = LogPolicy::new();
    let mut writer = LogWriter::with_policy(&policy);
    write!(writer.write(LogLevel::Warning), "local only").unwrap();
    drop(writer);

    assert!(policy.is_muted());
}

#[test]
fn chained_writes_build_one_message() {
    let policy = LogPolicy::new();
    let mut writer = LogWriter::with_policy(&policy);
    let _ = write!(writer.write(LogLevel::Info), "pages synced: {}", 42);
    let _ = write!(writer, ", elapsed: {}ms", 7);
}
