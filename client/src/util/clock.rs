//! Wall-clock and timezone access that works in both build targets.

use time::UtcOffset;

/// Current time in unix seconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// The viewer's UTC offset. Server rendering uses UTC.
#[allow(clippy::cast_possible_truncation)]
pub fn viewer_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        let minutes = js_sys::Date::new_0().get_timezone_offset() as i32;
        gotrue::display::offset_from_js_minutes(minutes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}
