//! Calendar period helpers
//!
//! Monthly buckets use the wall-clock calendar month (first to last day
//! inclusive) - retainer "this month" must match what the client sees on
//! their invoice, so there is no UTC-shifted week arithmetic here. Weekly
//! buckets exist only for the minimum-hours advisory and never feed
//! revenue. Callers always pass periods explicitly; nothing in this crate
//! reads "today" on its own.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, the bucketing key for retainer revenue and payout
/// idempotency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthPeriod {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
}

impl MonthPeriod {
    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn start(&self) -> NaiveDate {
        // month is always 1..=12 for values built via of()/prev()
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end(&self) -> NaiveDate {
        let next_start = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_start
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The preceding calendar month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// This month and the `n - 1` months before it, oldest first. Used for
    /// the rolling utilization history on retainer dashboards.
    pub fn last_n(&self, n: usize) -> Vec<MonthPeriod> {
        let mut months = Vec::with_capacity(n);
        let mut current = *self;
        for _ in 0..n {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Canonical week start: the Monday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(days_from_monday))
        .unwrap_or(date)
}

/// Last day of the week starting at `week_start(date)` (inclusive)
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date)
        .checked_add_days(Days::new(6))
        .unwrap_or(date)
}
