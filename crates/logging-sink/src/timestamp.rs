//! crates/logging-sink/src/timestamp.rs
//! Line timestamp format shared by every channel.

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Date and time with microsecond precision, e.g. `2024/03/09 17:04:05.000123`.
pub const LOG_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:6]"
);

const FALLBACK_TIMESTAMP: &str = "0000/00/00 00:00:00.000000";

/// Returns the current local time, or UTC when the local offset is unknown.
///
/// The local offset cannot always be determined soundly (for example in a
/// multi-threaded process on some Unix platforms); UTC is used in that case.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Renders `at` using [`LOG_TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(LOG_TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}
