//! crates/logging/src/macros.rs
//! `format!`-style write macros for the process-wide channels.

/// Write a line to the process-wide debug channel.
///
/// Silent unless the level is `DEVEL`.
///
/// # Example
/// ```
/// logging::debug_log!("x={}", 1);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        $crate::debug_logger().log(::std::format_args!($($arg)+))
    };
}

/// Write a line to the process-wide info channel.
///
/// # Example
/// ```
/// logging::info_log!("loaded {} entries", 3);
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)+) => {
        $crate::info_logger().log(::std::format_args!($($arg)+))
    };
}

/// Write a line to the process-wide warning channel.
///
/// # Example
/// ```
/// logging::warning_log!("retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! warning_log {
    ($($arg:tt)+) => {
        $crate::warning_logger().log(::std::format_args!($($arg)+))
    };
}

/// Write a line to the process-wide error channel.
///
/// # Example
/// ```
/// logging::error_log!("request {} failed", 42);
/// ```
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)+) => {
        $crate::error_logger().log(::std::format_args!($($arg)+))
    };
}
