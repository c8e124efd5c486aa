//! Date helpers shared by the climate services
//!
//! Measurement dates are stored as `YYYY-MM-DD` text, so lexical comparison in SQL
//! matches chronological order as long as every bound is rendered canonically.

use chrono::{Days, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing "last year" window, in calendar days
pub const YEAR_WINDOW_DAYS: u64 = 365;

/// Parse a `YYYY-MM-DD` date string.
///
/// # Examples
///
/// ```
/// use climate_api::utils::parse_iso_date;
///
/// assert!(parse_iso_date("2017-08-23").is_some());
/// assert!(parse_iso_date("2016-02-30").is_none());
/// assert!(parse_iso_date("08/23/2017").is_none());
/// assert!(parse_iso_date("+2017-08-23").is_none());
/// ```
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !has_iso_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Four-digit year, then one or two digits each for month and day.
///
/// chrono alone tolerates signs and padding spaces that are not dates here.
fn has_iso_shape(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    parts.len() == 3 && digits(parts[0], 4, 4) && digits(parts[1], 1, 2) && digits(parts[2], 1, 2)
}

/// Render a date in the canonical stored form
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start of the trailing year window ending at `latest`.
///
/// Plain day subtraction, so a window spanning Feb 29 starts one day later
/// than the same calendar date a year earlier.
///
/// ```
/// use chrono::NaiveDate;
/// use climate_api::utils::year_window_start;
///
/// let latest = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();
/// assert_eq!(year_window_start(latest), NaiveDate::from_ymd_opt(2016, 8, 23).unwrap());
/// ```
pub fn year_window_start(latest: NaiveDate) -> NaiveDate {
    latest
        .checked_sub_days(Days::new(YEAR_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}
