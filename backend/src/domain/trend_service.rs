//! Time-series building for charts and trend analysis.
//!
//! Buckets are derived by running the period filter and aggregator once per
//! bucket, so the chart numbers can never drift from the dashboard numbers.
//! Series always contain exactly the requested number of buckets, oldest
//! first; months or weeks without transactions yield zero-valued buckets.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use std::sync::Arc;

use shared::TrendPoint;

use crate::domain::models::transaction::Transaction;
use crate::domain::period::{
    filter_transactions, first_day_of_month, last_day_of_month, months_back, AggregationPeriod,
};
use crate::domain::summary_service::summarize;
use crate::storage::{Connection, TransactionStorage};

/// Build a monthly series of `window` buckets ending with the month that
/// contains `anchor`. Pure: identical inputs yield identical output.
///
/// Typical windows are 6 and 12 months; `window` is clamped to at least 1.
pub fn monthly_series(
    transactions: &[Transaction],
    anchor: NaiveDate,
    window: u32,
) -> Vec<TrendPoint> {
    let window = window.max(1);
    let mut points = Vec::with_capacity(window as usize);

    for offset in (0..window).rev() {
        let (year, month) = months_back(anchor.year(), anchor.month(), offset);
        let period = AggregationPeriod {
            start: first_day_of_month(year, month),
            end: last_day_of_month(year, month),
        };
        let summary = summarize(&filter_transactions(transactions, &period));

        points.push(TrendPoint {
            label: period.start.format("%b %Y").to_string(),
            income: summary.total_income,
            expenses: summary.total_expenses,
            net: summary.balance,
        });
    }

    points
}

/// Build a weekly series of `window` buckets ending with the week that
/// contains `anchor`. Weeks run Monday through Sunday; labels carry the
/// week's start date.
pub fn weekly_series(
    transactions: &[Transaction],
    anchor: NaiveDate,
    window: u32,
) -> Vec<TrendPoint> {
    let window = window.max(1);
    let anchor_week_start =
        anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
    let mut points = Vec::with_capacity(window as usize);

    for offset in (0..window).rev() {
        let start = anchor_week_start - Duration::weeks(offset as i64);
        let period = AggregationPeriod {
            start,
            end: start + Duration::days(6),
        };
        let summary = summarize(&filter_transactions(transactions, &period));

        points.push(TrendPoint {
            label: format!("Wk {}", start.format("%Y-%m-%d")),
            income: summary.total_income,
            expenses: summary.total_expenses,
            net: summary.balance,
        });
    }

    points
}

/// Service producing chart series from the transaction store
#[derive(Clone)]
pub struct TrendService<C: Connection> {
    transaction_repository: C::TransactionRepository,
}

impl<C: Connection> TrendService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let transaction_repository = connection.create_transaction_repository();
        Self { transaction_repository }
    }

    /// Monthly income/expense/net buckets for the trailing `window` months
    pub fn monthly_trend(&self, anchor: NaiveDate, window: u32) -> Result<Vec<TrendPoint>> {
        let transactions = self.transaction_repository.list_transactions()?;
        Ok(monthly_series(&transactions, anchor, window))
    }

    /// Weekly income/expense/net buckets for the trailing `window` weeks
    pub fn weekly_trend(&self, anchor: NaiveDate, window: u32) -> Result<Vec<TrendPoint>> {
        let transactions = self.transaction_repository.list_transactions()?;
        Ok(weekly_series(&transactions, anchor, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::TransactionType;

    fn transaction(date: &str, amount: f64, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id: format!("txn-{}-{}", date, amount),
            date: date.to_string(),
            description: "Test transaction".to_string(),
            amount,
            category: "Bills".to_string(),
            transaction_type,
            created_at: "2024-01-15T09:30:00+00:00".to_string(),
        }
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_empty_set_yields_exactly_n_zero_buckets() {
        let points = monthly_series(&[], day(2024, 3, 15), 6);

        assert_eq!(points.len(), 6);
        for point in &points {
            assert_eq!(point.income, 0.0);
            assert_eq!(point.expenses, 0.0);
            assert_eq!(point.net, 0.0);
        }
    }

    #[test]
    fn test_buckets_are_chronological_and_labeled() {
        let points = monthly_series(&[], day(2024, 3, 15), 6);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Oct 2023", "Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024", "Mar 2024"]
        );
    }

    #[test]
    fn test_transactions_land_in_their_month() {
        let transactions = vec![
            transaction("2024-01-05", 3500.0, TransactionType::Income),
            transaction("2024-01-20", 495.50, TransactionType::Expense),
            transaction("2024-03-01", 200.0, TransactionType::Expense),
            // Outside the window entirely
            transaction("2022-01-01", 9999.0, TransactionType::Expense),
        ];

        let points = monthly_series(&transactions, day(2024, 3, 15), 6);

        let january = points.iter().find(|p| p.label == "Jan 2024").unwrap();
        assert_eq!(january.income, 3500.0);
        assert_eq!(january.expenses, 495.50);
        assert_eq!(january.net, 3004.50);

        let february = points.iter().find(|p| p.label == "Feb 2024").unwrap();
        assert_eq!(february.income, 0.0);
        assert_eq!(february.expenses, 0.0);

        let march = points.iter().find(|p| p.label == "Mar 2024").unwrap();
        assert_eq!(march.expenses, 200.0);
    }

    #[test]
    fn test_series_is_pure() {
        let transactions = vec![transaction("2024-01-05", 100.0, TransactionType::Income)];
        let first = monthly_series(&transactions, day(2024, 3, 15), 12);
        let second = monthly_series(&transactions, day(2024, 3, 15), 12);
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn test_twelve_month_window_crosses_year_boundary() {
        let points = monthly_series(&[], day(2024, 2, 10), 12);
        assert_eq!(points.len(), 12);
        assert_eq!(points.first().unwrap().label, "Mar 2023");
        assert_eq!(points.last().unwrap().label, "Feb 2024");
    }

    #[test]
    fn test_weekly_series_buckets() {
        // 2024-03-13 is a Wednesday; its week starts Monday 2024-03-11
        let transactions = vec![
            transaction("2024-03-11", 50.0, TransactionType::Expense),
            transaction("2024-03-17", 25.0, TransactionType::Expense),
            transaction("2024-03-10", 10.0, TransactionType::Expense), // previous week (Sunday)
        ];

        let points = weekly_series(&transactions, day(2024, 3, 13), 4);
        assert_eq!(points.len(), 4);

        let current = points.last().unwrap();
        assert_eq!(current.label, "Wk 2024-03-11");
        assert_eq!(current.expenses, 75.0);

        let previous = &points[points.len() - 2];
        assert_eq!(previous.label, "Wk 2024-03-04");
        assert_eq!(previous.expenses, 10.0);
    }
}
