//! # JSON Storage Module
//!
//! File-backed key-value storage for the expense tracker, standing in for
//! the browser's synchronous local storage. Every key maps to one JSON file
//! in the data directory; values are kept in memory and mirrored to disk on
//! write, so the in-memory state stays authoritative even when a disk write
//! fails.
//!
//! ## File Format
//!
//! The transaction repository persists all records as a single JSON array
//! under the fixed `transactions` key:
//!
//! ```json
//! [
//!   {"id":"txn-in-1702516122000-af3c","date":"2024-01-15","description":"Weekly groceries",
//!    "amount":45.5,"category":"Food","transaction_type":"Expense",
//!    "created_at":"2024-01-15T09:30:00+00:00"}
//! ]
//! ```

pub mod connection;
pub mod transaction_repository;

pub use connection::JsonConnection;
pub use transaction_repository::{TransactionRepository, TRANSACTIONS_KEY};
