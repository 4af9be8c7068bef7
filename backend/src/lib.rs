//! # Expense Tracker Backend
//!
//! Core engine for a household/farm expense-tracking application:
//! transaction storage with period aggregation, chart time series,
//! financial-planning worksheet calculators and checklist scoring.
//!
//! All computation is synchronous and operates on in-memory snapshots;
//! persistence is a JSON-backed key-value store mirroring the in-memory
//! state. Frontends own rendering, document generation and import parsing -
//! this crate hands them plain data.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::json::JsonConnection;

/// Composition root that wires all services over one storage connection.
///
/// Replaces the ambient-singleton storage access of the original product
/// with an explicitly injected connection: construct one `Backend` at
/// startup and hand it to the UI layer. No teardown is required.
pub struct Backend {
    pub transaction_service: domain::TransactionService<JsonConnection>,
    pub summary_service: domain::SummaryService<JsonConnection>,
    pub trend_service: domain::TrendService<JsonConnection>,
    pub checklist_service: domain::ChecklistService,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a backend instance with all services over `data_dir`
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);

        Ok(Backend {
            transaction_service: domain::TransactionService::new(connection.clone()),
            summary_service: domain::SummaryService::new(connection.clone()),
            trend_service: domain::TrendService::new(connection.clone()),
            checklist_service: domain::ChecklistService::new(),
            export_service: domain::ExportService::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::transactions::CreateTransactionCommand;
    use crate::domain::models::transaction::TransactionType;
    use crate::domain::AggregationPeriod;
    use chrono::NaiveDate;

    fn create(
        backend: &Backend,
        description: &str,
        amount: f64,
        category: &str,
        transaction_type: TransactionType,
        date: &str,
    ) {
        backend
            .transaction_service
            .create_transaction(CreateTransactionCommand {
                description: description.to_string(),
                amount,
                category: category.to_string(),
                transaction_type,
                date: Some(date.to_string()),
            })
            .unwrap();
    }

    #[test]
    fn test_services_share_one_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let backend = Backend::new(temp_dir.path()).unwrap();

        create(&backend, "Paycheck", 3500.0, "Salary", TransactionType::Income, "2024-01-01");
        create(&backend, "Electricity", 450.0, "Bills", TransactionType::Expense, "2024-01-01");
        create(&backend, "Groceries", 45.50, "Food", TransactionType::Expense, "2024-01-15");

        let anchor = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        // A mutation through the transaction service is immediately visible
        // to the summary and trend services
        let summary = backend.summary_service.month_summary(anchor).unwrap();
        assert_eq!(summary.total_income, 3500.0);
        assert_eq!(summary.total_expenses, 495.50);
        assert_eq!(summary.balance, 3004.50);

        let trend = backend.trend_service.monthly_trend(anchor, 6).unwrap();
        assert_eq!(trend.len(), 6);
        assert_eq!(trend.last().unwrap().net, 3004.50);
    }

    #[test]
    fn test_state_survives_restart() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        {
            let backend = Backend::new(temp_dir.path()).unwrap();
            create(&backend, "Paycheck", 1000.0, "Salary", TransactionType::Income, "2024-01-01");
        }

        let reopened = Backend::new(temp_dir.path()).unwrap();
        let period = AggregationPeriod::year_of(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let summary = reopened.summary_service.period_summary(&period).unwrap();
        assert_eq!(summary.total_income, 1000.0);
    }
}
