//! Relative time rendering.
//!
//! Renders the distance between two timestamps the way people say it ("in 3 days",
//! "2 months ago") rather than as an exact duration. Distances are rounded to the nearest
//! whole unit and bucketed with these thresholds:
//!
//! | Distance           | Output          |
//! |--------------------|-----------------|
//! | 0 to 44 seconds    | a few seconds   |
//! | 45 to 89 seconds   | a minute        |
//! | 2 to 44 minutes    | N minutes       |
//! | 45 to 89 minutes   | an hour         |
//! | 2 to 21 hours      | N hours         |
//! | 22 to 35 hours     | a day           |
//! | 2 to 25 days       | N days          |
//! | 26 to 45 days      | a month         |
//! | 2 to 10 months     | N months        |
//! | 11 to 17 months    | a year          |
//! | 18 months and more | N years         |

use chrono::NaiveDateTime;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const YEAR_MS: f64 = 365.25 * DAY_MS;
const MONTH_MS: f64 = YEAR_MS / 12.0;

/// Renders `target` relative to `now`, e.g. "in 2 days" or "3 days ago"
///
/// A `target` equal to `now` is treated as past.
pub fn relative_to(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff_ms = (target - now).num_milliseconds();
    let distance = humanize_distance(diff_ms.unsigned_abs() as f64);

    if diff_ms > 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

/// Renders an absolute distance in milliseconds without direction, e.g. "2 days"
pub fn humanize_distance(ms: f64) -> String {
    let seconds = (ms / SECOND_MS).round();
    if seconds <= 44.0 {
        return "a few seconds".to_string();
    }
    if seconds <= 89.0 {
        return "a minute".to_string();
    }

    let minutes = (ms / MINUTE_MS).round();
    if minutes <= 44.0 {
        return count_of(minutes, "a minute", "minutes");
    }
    if minutes <= 89.0 {
        return "an hour".to_string();
    }

    let hours = (ms / HOUR_MS).round();
    if hours <= 21.0 {
        return count_of(hours, "an hour", "hours");
    }
    if hours <= 35.0 {
        return "a day".to_string();
    }

    let days = (ms / DAY_MS).round();
    if days <= 25.0 {
        return count_of(days, "a day", "days");
    }
    if days <= 45.0 {
        return "a month".to_string();
    }

    let months = (ms / MONTH_MS).round();
    if months <= 10.0 {
        return count_of(months, "a month", "months");
    }
    if months <= 17.0 {
        return "a year".to_string();
    }

    let years = (ms / YEAR_MS).round();
    count_of(years, "a year", "years")
}

fn count_of(count: f64, singular: &str, plural_unit: &str) -> String {
    if count <= 1.0 {
        singular.to_string()
    } else {
        format!("{} {}", count as u64, plural_unit)
    }
}
