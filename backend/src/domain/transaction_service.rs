//! Transaction service domain logic for the expense tracker.
//!
//! Handles creation, listing, merge-style partial updates and deletion of
//! transaction records on top of the storage abstraction. Required-field
//! validation happens here, before anything reaches the store; malformed
//! *stored* data is the aggregation layer's concern and is skipped there.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use shared::TrackerConfig;

use crate::domain::commands::transactions::{
    CreateTransactionCommand, DeleteTransactionsCommand, DeleteTransactionsResult,
    TransactionListQuery, TransactionListResult, UpdateTransactionCommand,
};
use crate::domain::models::transaction::Transaction;
use crate::domain::period::{filter_transactions, AggregationPeriod};
use crate::storage::{Connection, TransactionStorage};

/// Validation failures surfaced before any engine computation runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Description must be at most {0} characters")]
    DescriptionTooLong(usize),
    #[error("Amount must be a non-negative number")]
    NegativeAmount,
    #[error("Amount must be a finite number")]
    NonFiniteAmount,
    #[error("Amount exceeds the maximum of {0}")]
    AmountTooLarge(f64),
    #[error("Category is required")]
    EmptyCategory,
    #[error("Date '{0}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub struct TransactionService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    config: TrackerConfig,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            config: TrackerConfig::default(),
        }
    }

    /// Create a transaction, assigning its id and creation timestamp
    pub fn create_transaction(&self, command: CreateTransactionCommand) -> Result<Transaction> {
        self.validate_create_command(&command)?;

        let date = match command.date {
            Some(date) => date,
            None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
        };

        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        let transaction = Transaction {
            id: Transaction::generate_id(command.transaction_type, now_millis),
            date,
            description: command.description,
            amount: command.amount,
            category: command.category,
            transaction_type: command.transaction_type,
            created_at: Utc::now().to_rfc3339(),
        };

        self.transaction_repository.store_transaction(&transaction)?;
        info!("Created transaction {} ({})", transaction.id, transaction.category);

        Ok(transaction)
    }

    /// Retrieve a single transaction by id
    pub fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    /// List transactions, newest first, with optional date bounds and limit
    pub fn list_transactions(&self, query: TransactionListQuery) -> Result<TransactionListResult> {
        let transactions = self.transaction_repository.list_transactions()?;

        let mut transactions = if query.start_date.is_some() || query.end_date.is_some() {
            let start = query
                .start_date
                .as_deref()
                .and_then(|raw| parse_query_date(raw, "start_date"))
                .unwrap_or(NaiveDate::MIN);
            let end = query
                .end_date
                .as_deref()
                .and_then(|raw| parse_query_date(raw, "end_date"))
                .unwrap_or(NaiveDate::MAX);
            let period = AggregationPeriod::custom(start, end);
            filter_transactions(&transactions, &period)
                .into_iter()
                .cloned()
                .collect()
        } else {
            transactions
        };

        // YYYY-MM-DD sorts lexicographically; created_at breaks same-day ties
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        if let Some(limit) = query.limit {
            transactions.truncate(limit as usize);
        }

        Ok(TransactionListResult { transactions })
    }

    /// Partially update a transaction. Fields left as `None` are preserved;
    /// id and created_at are immutable.
    pub fn update_transaction(&self, command: UpdateTransactionCommand) -> Result<Transaction> {
        let mut transaction = self
            .transaction_repository
            .get_transaction(&command.transaction_id)?
            .ok_or_else(|| anyhow!("Transaction not found: {}", command.transaction_id))?;

        self.validate_update_command(&command)?;

        if let Some(description) = command.description {
            transaction.description = description.trim().to_string();
        }
        if let Some(amount) = command.amount {
            transaction.amount = amount;
        }
        if let Some(category) = command.category {
            transaction.category = category.trim().to_string();
        }
        if let Some(transaction_type) = command.transaction_type {
            transaction.transaction_type = transaction_type;
        }
        if let Some(date) = command.date {
            transaction.date = date;
        }

        if !self.transaction_repository.update_transaction(&transaction)? {
            return Err(anyhow!("Transaction not found: {}", transaction.id));
        }

        info!("Updated transaction {}", transaction.id);
        Ok(transaction)
    }

    /// Delete a single transaction by id.
    /// Returns true if the transaction existed and was removed.
    pub fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        let deleted = self
            .transaction_repository
            .delete_transactions(&[transaction_id.to_string()])?;
        if deleted > 0 {
            info!("Deleted transaction {}", transaction_id);
        }
        Ok(deleted > 0)
    }

    /// Delete transactions by id, reporting ids that were not found
    pub fn delete_transactions(
        &self,
        command: DeleteTransactionsCommand,
    ) -> Result<DeleteTransactionsResult> {
        let existing_ids = self
            .transaction_repository
            .check_transactions_exist(&command.transaction_ids)?;
        let not_found_ids: Vec<String> = command
            .transaction_ids
            .iter()
            .filter(|id| !existing_ids.contains(id))
            .cloned()
            .collect();

        let deleted_count = if existing_ids.is_empty() {
            0
        } else {
            self.transaction_repository.delete_transactions(&existing_ids)?
        };

        let success_message = match deleted_count {
            0 => "No transactions were deleted".to_string(),
            1 => "1 transaction deleted successfully".to_string(),
            n => format!("{} transactions deleted successfully", n),
        };

        Ok(DeleteTransactionsResult {
            deleted_count: deleted_count as usize,
            not_found_ids,
            success_message,
        })
    }

    fn validate_create_command(&self, command: &CreateTransactionCommand) -> Result<()> {
        self.validate_description(&command.description)?;
        self.validate_amount(command.amount)?;
        if command.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        if let Some(date) = &command.date {
            self.validate_date(date)?;
        }
        Ok(())
    }

    fn validate_update_command(&self, command: &UpdateTransactionCommand) -> Result<()> {
        if let Some(description) = &command.description {
            self.validate_description(description)?;
        }
        if let Some(amount) = command.amount {
            self.validate_amount(amount)?;
        }
        if let Some(category) = &command.category {
            if category.trim().is_empty() {
                return Err(ValidationError::EmptyCategory.into());
            }
        }
        if let Some(date) = &command.date {
            self.validate_date(date)?;
        }
        Ok(())
    }

    fn validate_description(&self, description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if description.len() > self.config.max_description_length {
            return Err(
                ValidationError::DescriptionTooLong(self.config.max_description_length).into(),
            );
        }
        Ok(())
    }

    fn validate_amount(&self, amount: f64) -> Result<()> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount.into());
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount.into());
        }
        if amount > self.config.max_amount {
            return Err(ValidationError::AmountTooLarge(self.config.max_amount).into());
        }
        Ok(())
    }

    fn validate_date(&self, date: &str) -> Result<()> {
        NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        Ok(())
    }
}

fn parse_query_date(raw: &str, field: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Ignoring unparseable {} '{}' in transaction query", field, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::TransactionType;
    use crate::storage::json::JsonConnection;

    fn setup() -> (TransactionService<JsonConnection>, tempfile::TempDir) {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        (TransactionService::new(connection), temp_dir)
    }

    fn create_command(
        description: &str,
        amount: f64,
        category: &str,
        transaction_type: TransactionType,
        date: &str,
    ) -> CreateTransactionCommand {
        CreateTransactionCommand {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            transaction_type,
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_create_transaction_basic() {
        let (service, _temp_dir) = setup();

        let transaction = service
            .create_transaction(create_command(
                "Monthly electricity",
                450.0,
                "Bills",
                TransactionType::Expense,
                "2024-01-01",
            ))
            .unwrap();

        assert!(transaction.id.starts_with("txn-ex-"));
        assert_eq!(transaction.amount, 450.0);
        assert_eq!(transaction.date, "2024-01-01");
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert!(!transaction.created_at.is_empty());

        // Visible through list() immediately after the mutating call
        let listed = service.list_transactions(TransactionListQuery::default()).unwrap();
        assert_eq!(listed.transactions.len(), 1);
        assert_eq!(listed.transactions[0].id, transaction.id);
    }

    #[test]
    fn test_create_defaults_to_current_date() {
        let (service, _temp_dir) = setup();

        let transaction = service
            .create_transaction(CreateTransactionCommand {
                description: "Roadside egg sales".to_string(),
                amount: 60.0,
                category: "Crop Sales".to_string(),
                transaction_type: TransactionType::Income,
                date: None,
            })
            .unwrap();

        assert!(transaction.business_date().is_some());
    }

    #[test]
    fn test_create_validation() {
        let (service, _temp_dir) = setup();

        let empty_description = create_command("   ", 10.0, "Food", TransactionType::Expense, "2024-01-01");
        assert!(service.create_transaction(empty_description).is_err());

        let too_long = create_command(&"x".repeat(257), 10.0, "Food", TransactionType::Expense, "2024-01-01");
        assert!(service.create_transaction(too_long).is_err());

        let negative = create_command("Refund", -5.0, "Food", TransactionType::Expense, "2024-01-01");
        assert!(service.create_transaction(negative).is_err());

        let non_finite = create_command("Overflow", f64::NAN, "Food", TransactionType::Expense, "2024-01-01");
        assert!(service.create_transaction(non_finite).is_err());

        let no_category = create_command("Groceries", 10.0, "  ", TransactionType::Expense, "2024-01-01");
        assert!(service.create_transaction(no_category).is_err());

        let bad_date = create_command("Groceries", 10.0, "Food", TransactionType::Expense, "01/15/2024");
        assert!(service.create_transaction(bad_date).is_err());

        // Nothing was stored along the way
        let listed = service.list_transactions(TransactionListQuery::default()).unwrap();
        assert!(listed.transactions.is_empty());
    }

    #[test]
    fn test_list_newest_first_with_limit() {
        let (service, _temp_dir) = setup();
        for (date, amount) in [("2024-01-05", 1.0), ("2024-01-20", 2.0), ("2024-01-10", 3.0)] {
            service
                .create_transaction(create_command("Entry", amount, "Food", TransactionType::Expense, date))
                .unwrap();
        }

        let listed = service.list_transactions(TransactionListQuery::default()).unwrap();
        let dates: Vec<&str> = listed.transactions.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-20", "2024-01-10", "2024-01-05"]);

        let limited = service
            .list_transactions(TransactionListQuery { limit: Some(2), ..Default::default() })
            .unwrap();
        assert_eq!(limited.transactions.len(), 2);
        assert_eq!(limited.transactions[0].date, "2024-01-20");
    }

    #[test]
    fn test_list_with_date_bounds() {
        let (service, _temp_dir) = setup();
        for date in ["2023-12-31", "2024-01-01", "2024-01-31", "2024-02-01"] {
            service
                .create_transaction(create_command("Entry", 10.0, "Food", TransactionType::Expense, date))
                .unwrap();
        }

        let query = TransactionListQuery {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            limit: None,
        };
        let listed = service.list_transactions(query).unwrap();
        let dates: Vec<&str> = listed.transactions.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-31", "2024-01-01"]);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let (service, _temp_dir) = setup();
        let created = service
            .create_transaction(create_command(
                "Seed order",
                120.0,
                "Seeds",
                TransactionType::Expense,
                "2024-03-01",
            ))
            .unwrap();

        let updated = service
            .update_transaction(UpdateTransactionCommand {
                transaction_id: created.id.clone(),
                amount: Some(135.50),
                ..Default::default()
            })
            .unwrap();

        // Only the amount changed; identity and untouched fields preserved
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.amount, 135.50);
        assert_eq!(updated.description, "Seed order");
        assert_eq!(updated.category, "Seeds");
        assert_eq!(updated.date, "2024-03-01");

        let stored = service.get_transaction(&created.id).unwrap().unwrap();
        assert_eq!(stored.amount, 135.50);
    }

    #[test]
    fn test_update_nonexistent_transaction() {
        let (service, _temp_dir) = setup();
        let result = service.update_transaction(UpdateTransactionCommand {
            transaction_id: "txn-ex-1-dead".to_string(),
            description: Some("Ghost".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_update_rejects_invalid_fields() {
        let (service, _temp_dir) = setup();
        let created = service
            .create_transaction(create_command("Entry", 10.0, "Food", TransactionType::Expense, "2024-01-01"))
            .unwrap();

        let bad_amount = service.update_transaction(UpdateTransactionCommand {
            transaction_id: created.id.clone(),
            amount: Some(-1.0),
            ..Default::default()
        });
        assert!(bad_amount.is_err());

        let bad_date = service.update_transaction(UpdateTransactionCommand {
            transaction_id: created.id.clone(),
            date: Some("soon".to_string()),
            ..Default::default()
        });
        assert!(bad_date.is_err());

        // Unchanged after failed updates
        let stored = service.get_transaction(&created.id).unwrap().unwrap();
        assert_eq!(stored.amount, 10.0);
        assert_eq!(stored.date, "2024-01-01");
    }

    #[test]
    fn test_delete_single_transaction() {
        let (service, _temp_dir) = setup();
        let created = service
            .create_transaction(create_command("Entry", 10.0, "Food", TransactionType::Expense, "2024-01-01"))
            .unwrap();

        assert!(service.delete_transaction(&created.id).unwrap());
        assert!(service.get_transaction(&created.id).unwrap().is_none());

        // Deleting again reports not-found instead of erroring
        assert!(!service.delete_transaction(&created.id).unwrap());
    }

    #[test]
    fn test_delete_transactions_reports_not_found() {
        let (service, _temp_dir) = setup();
        let first = service
            .create_transaction(create_command("One", 1.0, "Food", TransactionType::Expense, "2024-01-01"))
            .unwrap();
        let second = service
            .create_transaction(create_command("Two", 2.0, "Food", TransactionType::Expense, "2024-01-02"))
            .unwrap();

        let result = service
            .delete_transactions(DeleteTransactionsCommand {
                transaction_ids: vec![
                    first.id.clone(),
                    "txn-ex-0-dead".to_string(),
                    second.id.clone(),
                ],
            })
            .unwrap();

        assert_eq!(result.deleted_count, 2);
        assert_eq!(result.not_found_ids, vec!["txn-ex-0-dead".to_string()]);
        assert_eq!(result.success_message, "2 transactions deleted successfully");

        let listed = service.list_transactions(TransactionListQuery::default()).unwrap();
        assert!(listed.transactions.is_empty());
    }
}
