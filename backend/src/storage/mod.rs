//! Storage layer for the expense tracker.
//!
//! The domain layer talks to storage exclusively through the traits in
//! [`traits`]; the [`json`] module provides the file-backed key-value
//! implementation used in production and tests.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{Connection, TransactionStorage};
