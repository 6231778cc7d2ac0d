//! Human-readable date-range formatting for notification emails.
//!
//! Event timestamps are stored in UTC but organizers and attendees are in
//! Chile, so the "published" email renders the range in America/Santiago
//! local time.

use chrono_tz::Tz;

use crate::types::Timestamp;

/// Timezone all user-facing event times are rendered in.
pub const EVENT_TIMEZONE: Tz = chrono_tz::America::Santiago;

/// Format a start/end pair as a human-readable range in local time.
///
/// Same-day ranges collapse the date: `Monday, November 17, 2025, 6:00 PM
/// – 9:00 PM`. Ranges spanning midnight repeat the full date on both
/// sides.
pub fn format_date_range(start: Timestamp, end: Timestamp) -> String {
    let start_local = start.with_timezone(&EVENT_TIMEZONE);
    let end_local = end.with_timezone(&EVENT_TIMEZONE);

    if start_local.date_naive() == end_local.date_naive() {
        format!(
            "{}, {} – {}",
            start_local.format("%A, %B %-d, %Y"),
            start_local.format("%-I:%M %p"),
            end_local.format("%-I:%M %p"),
        )
    } else {
        format!(
            "{}, {} – {}, {}",
            start_local.format("%A, %B %-d, %Y"),
            start_local.format("%-I:%M %p"),
            end_local.format("%A, %B %-d, %Y"),
            end_local.format("%-I:%M %p"),
        )
    }
}
