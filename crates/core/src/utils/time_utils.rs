use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Default timezone for civil dates.
/// Every "day" boundary in the application (entry dates, cycle starts,
/// trailing windows) is evaluated in this zone, never in the host's locale.
pub const DEFAULT_CIVIL_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Source of the current instant.
///
/// Injected into [`Calendar`] so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to noon UTC on the given civil date.
    pub fn at_date(date: NaiveDate) -> Self {
        let instant = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Timezone-anchored calendar.
///
/// This is the single source of truth for "today". Services receive it
/// explicitly instead of reading the system time.
#[derive(Clone)]
pub struct Calendar {
    tz: Tz,
    clock: Arc<dyn Clock>,
}

impl Calendar {
    pub fn new(tz: Tz, clock: Arc<dyn Clock>) -> Self {
        Self { tz, clock }
    }

    /// Calendar in the given timezone backed by the system clock.
    pub fn system(tz: Tz) -> Self {
        Self::new(tz, Arc::new(SystemClock))
    }

    /// Calendar pinned to a civil date (for tests and replays).
    pub fn fixed(date: NaiveDate) -> Self {
        Self::new(chrono_tz::UTC, Arc::new(FixedClock::at_date(date)))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The current civil date in the calendar's timezone.
    pub fn today(&self) -> NaiveDate {
        civil_date_from_utc(self.clock.now(), self.tz)
    }

    /// The current instant as a naive UTC timestamp, for `created_at` and
    /// `updated_at` columns.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now().naive_utc()
    }
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("tz", &self.tz)
            .field("today", &self.today())
            .finish()
    }
}

/// Converts a UTC instant to a civil date in the given timezone.
pub fn civil_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Last day-of-month for the given year and month.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// First and last civil date of a calendar month, or `None` for an invalid
/// month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day_of_month(year, month))?;
    Some((first, last))
}

/// The anchor day within a month, clamped to that month's last day.
fn anchored_date(anchor_day: u32, year: i32, month: u32) -> Option<NaiveDate> {
    let day = anchor_day.clamp(1, 31).min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Start of the spend cycle containing `reference`.
///
/// Returns the most recent date whose day-of-month equals `anchor_day` and
/// which is not after `reference`. Anchors past the end of a shorter month
/// clamp to that month's last day, so an anchor of 31 resolves to Feb 28/29
/// in February and to the 30th in 30-day months.
pub fn cycle_start(anchor_day: u32, reference: NaiveDate) -> NaiveDate {
    if let Some(candidate) = anchored_date(anchor_day, reference.year(), reference.month()) {
        if candidate <= reference {
            return candidate;
        }
    }

    let (prev_year, prev_month) = if reference.month() == 1 {
        (reference.year() - 1, 12)
    } else {
        (reference.year(), reference.month() - 1)
    };

    anchored_date(anchor_day, prev_year, prev_month).unwrap_or(reference)
}

/// Inclusive number of days from `start` to `end`, never less than 1.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(1)
}

/// The `count` calendar days ending at `end` (inclusive), oldest first.
pub fn trailing_days(end: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count as i64)
        .rev()
        .map(|offset| end - Duration::days(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_today_uses_configured_timezone() {
        // 20:00 UTC on Jan 1 is already Jan 2 in Kolkata (UTC+5:30)
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        let calendar = Calendar::new(DEFAULT_CIVIL_TZ, Arc::new(FixedClock(instant)));
        assert_eq!(calendar.today(), d(2024, 1, 2));

        let utc_calendar = Calendar::new(chrono_tz::UTC, Arc::new(FixedClock(instant)));
        assert_eq!(utc_calendar.today(), d(2024, 1, 1));
    }

    #[test]
    fn test_fixed_calendar_returns_pinned_date() {
        let calendar = Calendar::fixed(d(2024, 3, 15));
        assert_eq!(calendar.today(), d(2024, 3, 15));
        assert_eq!(calendar.now(), d(2024, 3, 15).and_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_now_is_utc_regardless_of_timezone() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        let calendar = Calendar::new(DEFAULT_CIVIL_TZ, Arc::new(FixedClock(instant)));
        assert_eq!(calendar.now(), instant.naive_utc());
    }

    #[test]
    fn test_cycle_start_anchor_already_passed() {
        assert_eq!(cycle_start(5, d(2024, 3, 10)), d(2024, 3, 5));
    }

    #[test]
    fn test_cycle_start_anchor_is_today() {
        assert_eq!(cycle_start(10, d(2024, 3, 10)), d(2024, 3, 10));
    }

    #[test]
    fn test_cycle_start_anchor_in_future_uses_previous_month() {
        assert_eq!(cycle_start(20, d(2024, 3, 10)), d(2024, 2, 20));
    }

    #[test]
    fn test_cycle_start_wraps_year() {
        assert_eq!(cycle_start(15, d(2024, 1, 3)), d(2023, 12, 15));
    }

    #[test]
    fn test_cycle_start_clamps_to_end_of_short_month() {
        // Leap-year February: anchor 31 clamps to the 29th
        assert_eq!(cycle_start(31, d(2024, 2, 29)), d(2024, 2, 29));
        assert_eq!(cycle_start(31, d(2023, 2, 28)), d(2023, 2, 28));
        // Before the clamped day, fall back to the previous month's anchor
        assert_eq!(cycle_start(31, d(2024, 2, 15)), d(2024, 1, 31));
        // Previous month shorter than the anchor
        assert_eq!(cycle_start(31, d(2024, 3, 30)), d(2024, 2, 29));
        assert_eq!(cycle_start(30, d(2024, 4, 30)), d(2024, 4, 30));
        assert_eq!(cycle_start(31, d(2024, 4, 30)), d(2024, 4, 30));
    }

    #[test]
    fn test_days_between_inclusive_minimum_one() {
        assert_eq!(days_between(d(2024, 3, 5), d(2024, 3, 10)), 6);
        assert_eq!(days_between(d(2024, 3, 10), d(2024, 3, 10)), 1);
        assert_eq!(days_between(d(2024, 3, 12), d(2024, 3, 10)), 1);
        assert_eq!(days_between(d(2024, 2, 28), d(2024, 3, 1)), 3);
    }

    #[test]
    fn test_trailing_days_oldest_first() {
        let days = trailing_days(d(2024, 3, 3), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], d(2024, 2, 26));
        assert_eq!(days[6], d(2024, 3, 3));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(month_bounds(2023, 12), Some((d(2023, 12, 1), d(2023, 12, 31))));
        assert_eq!(month_bounds(2024, 13), None);
    }
}
