//! Calendar-day windowing in the fixed reference timezone.
//!
//! Every piece of day-bucketing in the service goes through `window_for` /
//! `window_for_date`, so the boundary math for "today" and for range
//! normalization is a single code path.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// One calendar day in the reference timezone: its date plus the inclusive
/// instant bounds `[00:00:00.000, 23:59:59.999]` expressed in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub day: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Window containing `instant`, interpreted in `tz`.
pub fn window_for(instant: DateTime<Utc>, tz: Tz) -> DayWindow {
    window_for_date(instant.with_timezone(&tz).date_naive(), tz)
}

/// Window for an explicit calendar date in `tz`. Identical boundary math to
/// `window_for`; range queries widen their endpoints through this.
pub fn window_for_date(day: NaiveDate, tz: Tz) -> DayWindow {
    let start = resolve_local(day.and_time(NaiveTime::MIN), tz);
    // NaiveTime construction from in-range constants cannot fail.
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    let end = resolve_local(day.and_time(last_milli), tz);
    DayWindow { day, start, end }
}

// Total mapping from a local wall-clock time to UTC. DST-ambiguous times
// take the earlier instant; times skipped by a DST gap fall back to the
// UTC reading of the same wall-clock value.
fn resolve_local(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&local),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_day_instants_share_a_window() {
        let tz = chrono_tz::UTC;
        let morning = window_for(utc("2024-05-10T00:00:00Z"), tz);
        let noon = window_for(utc("2024-05-10T12:30:45Z"), tz);
        let night = window_for(utc("2024-05-10T23:59:59.999Z"), tz);
        assert_eq!(morning, noon);
        assert_eq!(noon, night);
    }

    #[test]
    fn test_boundary_exclusivity() {
        let tz = chrono_tz::UTC;
        let last_milli = window_for(utc("2024-05-10T23:59:59.999Z"), tz);
        let next_day = window_for(utc("2024-05-11T00:00:00Z"), tz);
        assert_eq!(last_milli.day, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(next_day.day, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert_ne!(last_milli, next_day);
    }

    #[test]
    fn test_window_bounds_utc() {
        let w = window_for(utc("2024-05-10T08:15:00Z"), chrono_tz::UTC);
        assert_eq!(w.start, utc("2024-05-10T00:00:00Z"));
        assert_eq!(w.end, utc("2024-05-10T23:59:59.999Z"));
    }

    #[test]
    fn test_reference_zone_shifts_the_bucket() {
        // 03:00 UTC on the 10th is still the 9th in New York.
        let w = window_for(utc("2024-05-10T03:00:00Z"), chrono_tz::America::New_York);
        assert_eq!(w.day, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        // EDT is UTC-4, so the local day starts at 04:00 UTC.
        assert_eq!(w.start, utc("2024-05-09T04:00:00Z"));
    }

    #[test]
    fn test_window_for_date_matches_window_for() {
        let tz = chrono_tz::Europe::Lisbon;
        let instant = utc("2024-05-10T14:00:00Z");
        let by_instant = window_for(instant, tz);
        let by_date = window_for_date(by_instant.day, tz);
        assert_eq!(by_instant, by_date);
    }

    #[test]
    fn test_dst_gap_day_still_produces_a_window() {
        // 2024-03-10 in New York: 02:00-03:00 never exists on the clock.
        let w = window_for_date(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            chrono_tz::America::New_York,
        );
        assert!(w.start < w.end);
        assert_eq!(w.end.with_timezone(&chrono_tz::America::New_York).hour(), 23);
    }
}
