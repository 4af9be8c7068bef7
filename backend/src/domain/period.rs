//! Aggregation periods and period filtering.
//!
//! An [`AggregationPeriod`] is an inclusive date interval used to bound
//! transactions before summarization. All constructors take an explicit
//! anchor date so that callers (and tests) control what "now" means; the
//! rolling-window constructors truncate to month boundaries.

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::domain::models::transaction::Transaction;

/// An inclusive date interval [start, end]. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AggregationPeriod {
    /// The calendar month containing `anchor`
    pub fn month_of(anchor: NaiveDate) -> Self {
        let start = first_day_of_month(anchor.year(), anchor.month());
        let end = last_day_of_month(anchor.year(), anchor.month());
        Self { start, end }
    }

    /// The calendar year containing `anchor`
    pub fn year_of(anchor: NaiveDate) -> Self {
        let year = anchor.year();
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1st always exists"),
            end: NaiveDate::from_ymd_opt(year, 12, 31).expect("December 31st always exists"),
        }
    }

    /// Rolling window of `months` calendar months ending with the month that
    /// contains `anchor`, truncated to month boundaries. Typical windows are
    /// 6 and 12 months; `months` is clamped to at least 1.
    pub fn last_n_months(anchor: NaiveDate, months: u32) -> Self {
        let months = months.max(1);
        let (start_year, start_month) = months_back(anchor.year(), anchor.month(), months - 1);
        Self {
            start: first_day_of_month(start_year, start_month),
            end: last_day_of_month(anchor.year(), anchor.month()),
        }
    }

    /// An explicit interval. `start` and `end` are normalized so that the
    /// period is never empty by construction.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Whether `date` falls inside the period, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Select the transactions whose business date falls inside `period`.
///
/// Records with missing or unparseable dates are skipped with a logged
/// warning; a bad record must never abort the whole filter.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    period: &AggregationPeriod,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| match transaction.business_date() {
            Some(date) => period.contains(date),
            None => {
                warn!(
                    "Skipping transaction {} with unparseable date '{}'",
                    transaction.id, transaction.date
                );
                false
            }
        })
        .collect()
}

/// First calendar day of the given month
pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start")
}

/// Last calendar day of the given month
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).expect("valid month end")
}

/// Number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Walk `months` calendar months backwards from (year, month)
pub fn months_back(year: i32, month: u32, months: u32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - months as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}
