//! Browser clock access. `chrono`'s own clock is unavailable on wasm32.

use chrono::{DateTime, FixedOffset, Offset, Utc};

pub fn now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// The browser's current UTC offset.
pub fn local_offset() -> FixedOffset {
    // getTimezoneOffset is UTC minus local time, in minutes.
    let minutes = js_sys::Date::new_0().get_timezone_offset() as i32;
    FixedOffset::west_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
}
