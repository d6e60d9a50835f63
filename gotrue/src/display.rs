//! pt-BR formatting of user attributes for the dashboard.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub const FIRST_ACCESS: &str = "Primeiro acesso";

/// Render the last sign-in time as `dd/mm/aaaa, hh:mm:ss` in `offset`, or
/// [`FIRST_ACCESS`] when the user has never signed in.
#[must_use]
pub fn format_last_sign_in(at: Option<OffsetDateTime>, offset: UtcOffset) -> String {
    let Some(at) = at else {
        return FIRST_ACCESS.to_owned();
    };
    let format = format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");
    at.checked_to_offset(offset).unwrap_or(at).format(&format).unwrap_or_else(|_| at.to_string())
}

/// Convert a JavaScript `Date#getTimezoneOffset` value (minutes *behind*
/// UTC) into a [`UtcOffset`].
#[must_use]
pub fn offset_from_js_minutes(minutes_behind_utc: i32) -> UtcOffset {
    minutes_behind_utc
        .checked_mul(-60)
        .and_then(|secs| UtcOffset::from_whole_seconds(secs).ok())
        .unwrap_or(UtcOffset::UTC)
}
