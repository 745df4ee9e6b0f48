//! Presence aggregation utilities.
//!
//! Pure functions that turn a user's date-keyed records into weekday
//! buckets, mean values, and ranked calendar weeks. Everything here
//! allocates fresh per call; nothing is shared or mutated concurrently.

use super::types::DayRecords;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of weekday buckets (Monday = 0 .. Sunday = 6).
pub const WEEKDAY_COUNT: usize = 7;

/// Start and end clock-in times collected for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartEndBucket {
    /// Clock-in times, as seconds since midnight.
    pub start: Vec<i64>,

    /// Clock-out times, as seconds since midnight.
    pub end: Vec<i64>,
}

/// A calendar week, Monday through Sunday, used as a ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekRange {
    /// Monday of the week.
    pub monday: NaiveDate,

    /// Sunday of the same week.
    pub sunday: NaiveDate,
}

impl WeekRange {
    /// Returns the Monday..Sunday week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            monday,
            sunday: monday + Duration::days(6),
        }
    }

    /// Iterates the seven days of this week in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let monday = self.monday;
        (0..7).map(move |offset| monday + Duration::days(offset))
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.monday, self.sunday)
    }
}

/// Seconds elapsed since midnight for a time of day.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Signed duration in seconds between two times of day.
///
/// Negative when `end` precedes `start`; callers must tolerate that.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean of a list of seconds values. Zero for empty input.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Groups presence intervals into the seven weekday buckets.
///
/// Each record contributes `interval(start, end)` to the bucket of its
/// date's weekday. All seven buckets are always present, Monday first,
/// even for empty input.
pub fn group_by_weekday(records: &DayRecords) -> [Vec<i64>; WEEKDAY_COUNT] {
    let mut buckets: [Vec<i64>; WEEKDAY_COUNT] = std::array::from_fn(|_| Vec::new());

    for (date, record) in records {
        let weekday = date.weekday().num_days_from_monday() as usize;
        buckets[weekday].push(interval(record.start, record.end));
    }

    buckets
}

/// Groups clock-in and clock-out times into the seven weekday buckets.
///
/// Start and end times are tracked separately, as seconds since
/// midnight, so callers can average arrival and departure independently.
pub fn group_start_end_weekday(records: &DayRecords) -> [StartEndBucket; WEEKDAY_COUNT] {
    let mut buckets: [StartEndBucket; WEEKDAY_COUNT] = Default::default();

    for (date, record) in records {
        let weekday = date.weekday().num_days_from_monday() as usize;
        buckets[weekday].start.push(seconds_since_midnight(record.start));
        buckets[weekday].end.push(seconds_since_midnight(record.end));
    }

    buckets
}

/// Sums presence per calendar week.
///
/// For each date, its Monday..Sunday week is summed over the days that
/// exist in `records`. Presence of the key in the result map marks the
/// week as already summed, so each week is computed exactly once even
/// when its total is zero.
pub fn group_weeks(records: &DayRecords) -> BTreeMap<WeekRange, i64> {
    let mut weeks: BTreeMap<WeekRange, i64> = BTreeMap::new();

    for date in records.keys() {
        let week = WeekRange::containing(*date);
        if weeks.contains_key(&week) {
            continue;
        }

        let total = week
            .days()
            .filter_map(|day| records.get(&day))
            .map(|record| interval(record.start, record.end))
            .sum();
        weeks.insert(week, total);
    }

    weeks
}

/// Returns the top `n` weeks by summed presence, highest first.
///
/// Ties are broken by the earlier week.
pub fn top_weeks(records: &DayRecords, n: usize) -> Vec<(WeekRange, i64)> {
    let mut ranked: Vec<(WeekRange, i64)> = group_weeks(records).into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
