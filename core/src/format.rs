//! Display helpers for ticket dates.
//!
//! Dates are rendered in UTC with Spanish month abbreviations, matching the
//! labels in [`crate::labels`].

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Shown where a date is missing.
pub const NO_DATE: &str = "—";

/// `18 oct 2026, 14:05`, or [`NO_DATE`] when absent.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => format!(
            "{} {} {}, {:02}:{:02}",
            d.day(),
            MONTHS[d.month0() as usize],
            d.year(),
            d.hour(),
            d.minute()
        ),
        None => NO_DATE.to_owned(),
    }
}

/// Relative age of `then` as seen at `now`.
///
/// Falls back to [`format_date`] after a week. Timestamps in the future
/// read as "Justo ahora".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Justo ahora".to_owned();
    }
    if minutes < 60 {
        return format!("Hace {minutes} min");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("Hace {hours}h");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("Hace {days}d");
    }
    format_date(Some(then))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(at(2026, 10, 18, 14, 5))), "18 oct 2026, 14:05");
        assert_eq!(format_date(Some(at(2027, 1, 3, 0, 0))), "3 ene 2027, 00:00");
        assert_eq!(format_date(None), "—");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = at(2026, 10, 18, 12, 0);
        assert_eq!(time_ago(now - Duration::seconds(30), now), "Justo ahora");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "Hace 5 min");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "Hace 59 min");
        assert_eq!(time_ago(now - Duration::minutes(60), now), "Hace 1h");
        assert_eq!(time_ago(now - Duration::hours(23), now), "Hace 23h");
        assert_eq!(time_ago(now - Duration::days(1), now), "Hace 1d");
        assert_eq!(time_ago(now - Duration::days(6), now), "Hace 6d");
    }

    #[test]
    fn test_time_ago_falls_back_to_date() {
        let now = at(2026, 10, 18, 12, 0);
        assert_eq!(time_ago(now - Duration::days(7), now), "11 oct 2026, 12:00");
    }

    #[test]
    fn test_time_ago_future() {
        let now = at(2026, 10, 18, 12, 0);
        assert_eq!(time_ago(now + Duration::hours(2), now), "Justo ahora");
    }
}
