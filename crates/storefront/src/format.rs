//! Display formatting for order history.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Output format for order timestamps: `YYYY.MM.DD HH:MM`.
pub const ORDER_DATE_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Formats for timestamps with a numeric offset that RFC 3339 rejects
/// (`+0900`, or a space before the time).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Formats for timestamps without an offset, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format an ISO-8601 order timestamp in the given time zone.
///
/// - With an offset (`Z`, `+09:00`): converted into `tz`.
/// - Date and time without an offset: taken as already being local wall time.
/// - Date only: taken as midnight UTC, then converted into `tz`.
///
/// Returns `None` when the input is not ISO-8601.
pub fn format_order_date_in<Tz>(iso: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let iso = iso.trim();

    if let Some(parsed) = DateTime::parse_from_rfc3339(iso).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(iso, fmt).ok())
    }) {
        return Some(
            parsed
                .with_timezone(tz)
                .format(ORDER_DATE_FORMAT)
                .to_string(),
        );
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso, fmt).ok())
    {
        return Some(naive.format(ORDER_DATE_FORMAT).to_string());
    }

    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| {
            Utc.from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format(ORDER_DATE_FORMAT)
                .to_string()
        })
}

/// Format an order timestamp in the server's local time zone.
///
/// Unparseable input is returned verbatim (and logged) so the order still
/// renders.
#[must_use]
pub fn format_order_date(iso: &str) -> String {
    format_order_date_in(iso, &Local).unwrap_or_else(|| {
        tracing::warn!(order_date = %iso, "Unparseable order date");
        iso.to_string()
    })
}
