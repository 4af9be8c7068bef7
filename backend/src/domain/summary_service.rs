//! Period aggregation for the dashboard and analytics views.
//!
//! The arithmetic lives in the pure [`summarize`] function over a filtered
//! snapshot; [`SummaryService`] only orchestrates repository access and
//! period filtering on top of it.

use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use shared::{ExpenseCategory, IncomeCategory, PeriodSummary};

use crate::domain::models::transaction::{Transaction, TransactionType};
use crate::domain::period::{filter_transactions, AggregationPeriod};
use crate::storage::{Connection, TransactionStorage};

/// Aggregate a set of transactions into period totals.
///
/// Category totals are computed independently for the income and expense
/// subsets; free-text labels are canonicalized through the closed
/// vocabularies, folding unknown labels into "Other". The savings rate is
/// defined as 0 when there is no income - never NaN, never an error.
pub fn summarize(transactions: &[&Transaction]) -> PeriodSummary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut income_by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut expenses_by_category: BTreeMap<String, f64> = BTreeMap::new();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => {
                total_income += transaction.amount;
                let label = IncomeCategory::from_label(&transaction.category).label();
                *income_by_category.entry(label.to_string()).or_insert(0.0) += transaction.amount;
            }
            TransactionType::Expense => {
                total_expenses += transaction.amount;
                let label = ExpenseCategory::from_label(&transaction.category).label();
                *expenses_by_category.entry(label.to_string()).or_insert(0.0) += transaction.amount;
            }
        }
    }

    let balance = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        (total_income - total_expenses) / total_income * 100.0
    } else {
        0.0
    };

    PeriodSummary {
        total_income,
        total_expenses,
        balance,
        savings_rate,
        income_by_category,
        expenses_by_category,
    }
}

/// Service computing period summaries from the transaction store
#[derive(Clone)]
pub struct SummaryService<C: Connection> {
    transaction_repository: C::TransactionRepository,
}

impl<C: Connection> SummaryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let transaction_repository = connection.create_transaction_repository();
        Self { transaction_repository }
    }

    /// Summarize all transactions whose business date falls in `period`
    pub fn period_summary(&self, period: &AggregationPeriod) -> Result<PeriodSummary> {
        let transactions = self.transaction_repository.list_transactions()?;
        let filtered = filter_transactions(&transactions, period);
        debug!(
            "Summarizing {} of {} transactions for {} .. {}",
            filtered.len(),
            transactions.len(),
            period.start,
            period.end
        );
        Ok(summarize(&filtered))
    }

    /// Summary for the calendar month containing `anchor`
    pub fn month_summary(&self, anchor: chrono::NaiveDate) -> Result<PeriodSummary> {
        self.period_summary(&AggregationPeriod::month_of(anchor))
    }

    /// Summary for the calendar year containing `anchor`
    pub fn year_summary(&self, anchor: chrono::NaiveDate) -> Result<PeriodSummary> {
        self.period_summary(&AggregationPeriod::year_of(anchor))
    }
}
