use chrono::{NaiveDate, Utc};

/// Number of days a listing counts as newly released.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Get today's date for recency comparisons
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether a release date falls inside the recency window around `today`.
///
/// The comparison uses absolute distance, so a date slightly in the future
/// still counts as newly released.
pub fn is_new_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    (release_date - today).num_days().abs() <= RECENCY_WINDOW_DAYS
}

/// Parse an ISO-8601 date, mapping malformed input to `None`
pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
