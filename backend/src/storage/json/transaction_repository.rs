use anyhow::{Context, Result};
use log::warn;

use crate::domain::models::transaction::Transaction;
use crate::storage::traits::TransactionStorage;
use super::connection::JsonConnection;

/// Fixed storage key under which the transaction array is persisted
pub const TRANSACTIONS_KEY: &str = "transactions";

/// JSON-backed transaction repository
///
/// All records live in a single JSON array under [`TRANSACTIONS_KEY`].
/// Reads deserialize the committed value; a missing or corrupt value yields
/// an empty list (logged) so that a damaged file never takes the whole
/// application down.
#[derive(Clone)]
pub struct TransactionRepository {
    connection: JsonConnection,
}

impl TransactionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Read the full transaction array from the store
    fn read_all(&self) -> Result<Vec<Transaction>> {
        let raw = match self.connection.get(TRANSACTIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                warn!(
                    "Stored transaction data is not a valid JSON array ({}); starting from an empty list",
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Write the full transaction array back to the store
    fn write_all(&self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions)
            .context("Failed to serialize transactions")?;
        self.connection.set(TRANSACTIONS_KEY, &raw)
    }
}

impl TransactionStorage for TransactionRepository {
    fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.read_all()?;
        transactions.push(transaction.clone());
        self.write_all(&transactions)
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let transactions = self.read_all()?;
        Ok(transactions.into_iter().find(|t| t.id == transaction_id))
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.read_all()
    }

    fn update_transaction(&self, transaction: &Transaction) -> Result<bool> {
        let mut transactions = self.read_all()?;

        match transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(existing) => {
                *existing = transaction.clone();
            }
            None => return Ok(false),
        }

        self.write_all(&transactions)?;
        Ok(true)
    }

    fn delete_transactions(&self, transaction_ids: &[String]) -> Result<u32> {
        let mut transactions = self.read_all()?;
        let before = transactions.len();

        transactions.retain(|t| !transaction_ids.contains(&t.id));

        let deleted = (before - transactions.len()) as u32;
        if deleted > 0 {
            self.write_all(&transactions)?;
        }
        Ok(deleted)
    }

    fn check_transactions_exist(&self, transaction_ids: &[String]) -> Result<Vec<String>> {
        let transactions = self.read_all()?;
        Ok(transaction_ids
            .iter()
            .filter(|id| transactions.iter().any(|t| &t.id == *id))
            .cloned()
            .collect())
    }
}
