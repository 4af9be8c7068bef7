//! Export service domain logic for the expense tracker.
//!
//! Renders transaction snapshots to CSV text and flattens computed
//! aggregates into plain rows for the document-generation collaborators
//! (PDF/DOCX builders live outside the engine and receive only numbers and
//! strings - the engine knows nothing about document formatting).

use anyhow::{Context, Result};
use log::info;

use shared::{ExportDataRequest, ExportDataResponse, PeriodSummary};

use crate::domain::commands::transactions::TransactionListQuery;
use crate::domain::mappers::TransactionMapper;
use crate::domain::transaction_service::TransactionService;
use crate::storage::Connection;

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Export transactions as CSV data, optionally bounded by a date range
    pub fn export_transactions_csv<C: Connection>(
        &self,
        request: ExportDataRequest,
        transaction_service: &TransactionService<C>,
    ) -> Result<ExportDataResponse> {
        info!(
            "📄 EXPORT: Exporting transactions as CSV ({:?} .. {:?})",
            request.start_date, request.end_date
        );

        let query = TransactionListQuery {
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            limit: None,
        };
        let result = transaction_service.list_transactions(query)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["id", "date", "description", "category", "type", "amount"])
            .context("Failed to write CSV header")?;

        let mut row_count = 0;
        for transaction in result.transactions {
            let dto = TransactionMapper::to_dto(transaction);
            let type_label = match dto.transaction_type {
                shared::TransactionType::Income => "income",
                shared::TransactionType::Expense => "expense",
            };
            let amount = format!("{:.2}", dto.amount);
            writer
                .write_record([
                    dto.id.as_str(),
                    dto.date.as_str(),
                    dto.description.as_str(),
                    dto.category.as_str(),
                    type_label,
                    amount.as_str(),
                ])
                .context("Failed to write CSV row")?;
            row_count += 1;
        }

        let bytes = writer.into_inner().context("Failed to flush CSV data")?;
        let content = String::from_utf8(bytes).context("CSV data was not valid UTF-8")?;

        let filename = match (&request.start_date, &request.end_date) {
            (Some(start), Some(end)) => format!("transactions_{}_{}.csv", start, end),
            _ => "transactions_all.csv".to_string(),
        };

        info!("📄 EXPORT: Wrote {} rows to {}", row_count, filename);

        Ok(ExportDataResponse {
            filename,
            content,
            row_count,
        })
    }

    /// Flatten a period summary into labeled rows for document builders
    pub fn summary_rows(&self, summary: &PeriodSummary) -> Vec<(String, f64)> {
        let mut rows = vec![
            ("Total income".to_string(), summary.total_income),
            ("Total expenses".to_string(), summary.total_expenses),
            ("Balance".to_string(), summary.balance),
            ("Savings rate (%)".to_string(), summary.savings_rate),
        ];

        for (category, total) in &summary.expenses_by_category {
            rows.push((format!("Expenses / {}", category), *total));
        }
        for (category, total) in &summary.income_by_category {
            rows.push((format!("Income / {}", category), *total));
        }

        rows
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
