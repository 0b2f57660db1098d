//! Integration tests for the `tracelog` facade crate.
//!
//! These run the full startup story through the re-exported API: read a
//! configuration, apply it to the process-wide context, change the level at
//! runtime and check what each channel writes.

use std::collections::HashMap;
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::tempdir;
use tracelog::{
    CaptureBuffer, ErrorFormat, INFO_OUTPUT_ENV, LEVEL_ENV, Level, LoggingConfig, Sink,
    debug_log, error_log, info_log,
};

static GUARD: Mutex<()> = Mutex::new(());

fn fresh() -> MutexGuard<'static, ()> {
    let guard = GUARD.lock().unwrap_or_else(PoisonError::into_inner);
    tracelog::reset();
    guard
}

// ============================================================================
// Startup
// ============================================================================

/// Verifies the bogus-then-devel sequence through the facade.
#[test]
fn bogus_then_devel() {
    let _guard = fresh();
    assert_eq!(tracelog::level(), Level::Normal);

    let err = tracelog::update_level("BOGUS").expect_err("not a level");
    assert_eq!(tracelog::level(), Level::Normal);
    assert_eq!(err.valid_levels(), &tracelog::LOG_LEVELS[..]);

    tracelog::update_level("DEVEL").expect("valid level");
    assert!(tracelog::debug_logger().sink().is_stderr());
    assert_eq!(tracelog::error_formatter(), ErrorFormat::Verbose);

    let line = tracelog::debug_logger()
        .render_line(tracelog::logging_sink::now(), format_args!("x={}", 1));
    assert!(line.ends_with("DEBUG: x=1\n"), "{line:?}");
    debug_log!("x={}", 1);
}

/// Verifies a configuration read from variables applies to the facade.
#[test]
fn configuration_applies_to_global_context() {
    let _guard = fresh();
    let dir = tempdir().expect("tempdir");
    let info_path = dir.path().join("info.log");

    let vars: HashMap<&str, String> = [
        (LEVEL_ENV, "NORMAL".to_owned()),
        (INFO_OUTPUT_ENV, info_path.display().to_string()),
    ]
    .into_iter()
    .collect();
    let config = LoggingConfig::from_lookup(|key| vars.get(key).cloned()).expect("config");
    config.apply(tracelog::global()).expect("apply");

    info_log!("ready");
    let contents = fs::read_to_string(&info_path).expect("read info log");
    assert!(contents.ends_with("INFO: ready\n"));
}

// ============================================================================
// Error Rendering
// ============================================================================

/// Verifies a held LevelError renders with the level active at display time.
#[test]
fn level_error_follows_runtime_level() {
    let _guard = fresh();
    let err = tracelog::update_level("chatty").expect_err("not a level");
    let concise = err.to_string();

    tracelog::update_level("DEVEL").expect("valid level");
    let verbose = err.to_string();
    assert!(verbose.starts_with(&concise));
    assert_eq!(tracelog::error_formatter().render(&err), verbose);

    tracelog::update_level("NORMAL").expect("valid level");
    assert_eq!(err.to_string(), concise);
}

/// Verifies the error channel is still live at ERROR.
#[test]
fn errors_survive_error_level() {
    let _guard = fresh();
    let errors = CaptureBuffer::new();
    tracelog::set_error_output(Sink::from(errors.clone()));

    tracelog::update_level("ERROR").expect("valid level");
    error_log!("{}", ErrorFormat::Concise.directive());

    assert!(errors.contents().ends_with("ERROR: {}\n"));
}
