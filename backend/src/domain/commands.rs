//! Domain-level command and query types
//! These structs are used by services inside the domain layer. Frontends map
//! the public DTOs defined in the `shared` crate to these internal types.

pub mod transactions {
    use crate::domain::models::transaction::{Transaction, TransactionType};

    /// Input for creating a new transaction.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub description: String,
        pub amount: f64,
        pub category: String,
        pub transaction_type: TransactionType,
        /// Business date (YYYY-MM-DD) - uses the current date if not provided
        pub date: Option<String>,
    }

    /// Input for updating a transaction. `None` fields are preserved
    /// (merge semantics); id and created_at are immutable.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateTransactionCommand {
        pub transaction_id: String,
        pub description: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub transaction_type: Option<TransactionType>,
        pub date: Option<String>,
    }

    /// Query parameters for listing transactions.
    #[derive(Debug, Clone, Default)]
    pub struct TransactionListQuery {
        /// Start date for filtering (YYYY-MM-DD, inclusive)
        pub start_date: Option<String>,
        /// End date for filtering (YYYY-MM-DD, inclusive)
        pub end_date: Option<String>,
        pub limit: Option<u32>,
    }

    /// Result of listing transactions.
    #[derive(Debug, Clone)]
    pub struct TransactionListResult {
        pub transactions: Vec<Transaction>,
    }

    /// Command for deleting multiple transactions.
    #[derive(Debug, Clone)]
    pub struct DeleteTransactionsCommand {
        pub transaction_ids: Vec<String>,
    }

    /// Result of deleting transactions.
    #[derive(Debug, Clone)]
    pub struct DeleteTransactionsResult {
        pub deleted_count: usize,
        pub not_found_ids: Vec<String>,
        pub success_message: String,
    }
}
