//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::domain::models::transaction::Transaction;

/// Trait defining the interface for transaction storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// without modification.
///
/// Note: all operations are synchronous; the backing store is local.
pub trait TransactionStorage: Send + Sync {
    /// Store a new transaction
    fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Retrieve a specific transaction by ID
    fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>>;

    /// List all transactions in insertion order.
    /// Callers apply ordering and period filtering on the snapshot.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Replace an existing transaction (matched by ID)
    /// Returns true if the transaction was found and replaced, false otherwise
    fn update_transaction(&self, transaction: &Transaction) -> Result<bool>;

    /// Delete multiple transactions
    /// Returns the number of transactions actually deleted
    fn delete_transactions(&self, transaction_ids: &[String]) -> Result<u32>;

    /// Check which of the given transaction IDs exist in the store
    fn check_transactions_exist(&self, transaction_ids: &[String]) -> Result<Vec<String>>;
}

/// Trait defining the interface for storage connections
///
/// This abstracts away the specific connection type and provides factory
/// methods for creating repositories, so the domain layer can work with any
/// storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of TransactionStorage this connection creates
    type TransactionRepository: TransactionStorage;

    /// Create a new transaction repository for this connection
    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
