//! Trailing date-window filter.
//!
//! # Invariants
//! - A record's instant is its calendar date at local midnight.
//! - Inclusion is `window_start <= instant <= now`, inclusive on both ends.
//! - Records with malformed dates never match.
//! - Month arithmetic overflows into the next month when the target day does
//!   not exist: `2024-03-31` minus one month is `2024-03-02`.

use crate::model::dinner::DinnerRecord;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Query string for the seven-day window.
pub const DATE_RANGE_WEEK: &str = "week";
/// Query string for the one-calendar-month window.
pub const DATE_RANGE_MONTH: &str = "month";

const WEEK_DAYS: u64 = 7;

/// Trailing window anchored at a caller-supplied `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
    /// `now` minus 7 calendar days.
    Week,
    /// `now` minus 1 calendar month.
    Month,
}

impl DateRange {
    /// Parses a raw query value. Matching is exact; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            DATE_RANGE_WEEK => Some(Self::Week),
            DATE_RANGE_MONTH => Some(Self::Month),
            _ => None,
        }
    }

    /// Stable query string for this range.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => DATE_RANGE_WEEK,
            Self::Month => DATE_RANGE_MONTH,
        }
    }

    /// Returns the inclusive lower bound of the window ending at `now`.
    ///
    /// Keeps the time of day of `now`. Returns `None` only when the bound is
    /// outside the representable calendar.
    pub fn window_start(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let start_day = match self {
            Self::Week => now.date().checked_sub_days(Days::new(WEEK_DAYS))?,
            Self::Month => subtract_calendar_month(now.date())?,
        };
        Some(start_day.and_time(now.time()))
    }
}

/// Moves `date` back one calendar month, keeping the day-of-month.
///
/// When the prior month is shorter than the day-of-month, the excess days
/// roll forward: `2023-03-31` becomes `2023-03-03`, `2024-12-31` becomes
/// `2024-12-01`.
pub fn subtract_calendar_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = match date.month() {
        1 => (date.year().checked_sub(1)?, 12),
        month => (date.year(), month - 1),
    };
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Filters records whose date falls in the window named by `range`.
///
/// Unrecognized `range` values return an empty result.
pub fn filter_by_date_range<'a, I>(
    records: I,
    range: &str,
    now: NaiveDateTime,
) -> Vec<&'a DinnerRecord>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    match DateRange::parse(range) {
        Some(range) => filter_by_range(records, range, now),
        None => Vec::new(),
    }
}

/// Typed variant of [`filter_by_date_range`].
pub fn filter_by_range<'a, I>(
    records: I,
    range: DateRange,
    now: NaiveDateTime,
) -> Vec<&'a DinnerRecord>
where
    I: IntoIterator<Item = &'a DinnerRecord>,
{
    let Some(start) = range.window_start(now) else {
        return Vec::new();
    };

    records
        .into_iter()
        .filter(|record| {
            record.calendar_date().is_some_and(|day| {
                let instant = day.and_time(NaiveTime::MIN);
                start <= instant && instant <= now
            })
        })
        .collect()
}
