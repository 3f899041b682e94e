//! Presentation-only metrics derived from an already-fetched stats snapshot
//!
//! Pure functions of `created_at`, `clicks` and a caller-supplied `now`: no
//! fetching, and the same snapshot always renders the same strings. Taking
//! `now` as a parameter keeps the exact spec'd behavior testable.

use chrono::{DateTime, Utc};

/// Elapsed age in the largest whole unit among days, hours, minutes.
///
/// Days win once a full day has elapsed, then hours, with minutes as the
/// floor unit (a link younger than a minute is "0 minutes"). Singular at
/// exactly one unit.
pub fn age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes().max(0);

    if days > 0 {
        format_unit(days, "day")
    } else if hours > 0 {
        format_unit(hours, "hour")
    } else {
        format_unit(minutes, "minute")
    }
}

/// `clicks / max(1, floor(days_elapsed))`, one decimal place.
///
/// Clamping the divisor keeps day-one links meaningful instead of dividing
/// by zero.
pub fn daily_average(created_at: DateTime<Utc>, clicks: u64, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(created_at).num_days().max(1);
    format!("{:.1} clicks/day", clicks as f64 / days as f64)
}

/// "active" once the link has been clicked at least once, else "unused".
pub fn activity(clicks: u64) -> &'static str {
    if clicks > 0 { "active" } else { "unused" }
}

fn format_unit(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-29T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn age_prefers_whole_days() {
        // 36 hours is one whole day, not 36 hours
        assert_eq!(age(now() - Duration::hours(36), now()), "1 day");
        assert_eq!(age(now() - Duration::days(3), now()), "3 days");
    }

    #[test]
    fn age_falls_back_to_hours_then_minutes() {
        assert_eq!(age(now() - Duration::minutes(90), now()), "1 hour");
        assert_eq!(age(now() - Duration::hours(5), now()), "5 hours");
        assert_eq!(age(now() - Duration::minutes(45), now()), "45 minutes");
        assert_eq!(age(now() - Duration::minutes(1), now()), "1 minute");
        assert_eq!(age(now() - Duration::seconds(20), now()), "0 minutes");
    }

    #[test]
    fn daily_average_floors_elapsed_days() {
        // 2.5 days floored to 2 full days: 10 / 2 = 5.0
        let created = now() - Duration::hours(60);
        assert_eq!(daily_average(created, 10, now()), "5.0 clicks/day");
    }

    #[test]
    fn daily_average_clamps_young_links_to_one_day() {
        let created = now() - Duration::hours(3);
        assert_eq!(daily_average(created, 7, now()), "7.0 clicks/day");
    }

    #[test]
    fn daily_average_renders_one_decimal() {
        let created = now() - Duration::days(3);
        assert_eq!(daily_average(created, 10, now()), "3.3 clicks/day");
        assert_eq!(daily_average(created, 0, now()), "0.0 clicks/day");
    }

    #[test]
    fn activity_flag() {
        assert_eq!(activity(0), "unused");
        assert_eq!(activity(1), "active");
        assert_eq!(activity(500), "active");
    }
}
