use chrono::{DateTime, Utc};

/// Relative age of `then` as seen from `now`, e.g. `3 days ago` or `in an hour`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let phrase = describe(seconds.unsigned_abs() as f64);

    if seconds < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Calendar date such as `Mar 4, 2025`.
pub fn calendar_date(then: DateTime<Utc>) -> String {
    then.format("%b %-d, %Y").to_string()
}

// Each bucket is checked against the rounded value in its own unit.
fn describe(seconds: f64) -> String {
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let months = days / 30.4375;
    let years = days / 365.25;

    if seconds.round() <= 44.0 {
        "a few seconds".to_string()
    } else if seconds.round() <= 89.0 {
        "a minute".to_string()
    } else if minutes.round() <= 44.0 {
        format!("{} minutes", minutes.round())
    } else if minutes.round() <= 89.0 {
        "an hour".to_string()
    } else if hours.round() <= 21.0 {
        format!("{} hours", hours.round())
    } else if hours.round() <= 35.0 {
        "a day".to_string()
    } else if days.round() <= 25.0 {
        format!("{} days", days.round())
    } else if days.round() <= 45.0 {
        "a month".to_string()
    } else if months.round() <= 10.0 {
        format!("{} months", months.round())
    } else if months.round() <= 17.0 {
        "a year".to_string()
    } else {
        format!("{} years", years.round().max(2.0))
    }
}
