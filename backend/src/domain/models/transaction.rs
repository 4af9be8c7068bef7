//! Domain model for a transaction record.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Business date (YYYY-MM-DD). Kept as entered; parse via `business_date`.
    pub date: String,
    pub description: String,
    /// Non-negative amount in currency units; direction comes from `transaction_type`
    pub amount: f64,
    pub category: String,
    pub transaction_type: TransactionType,
    /// RFC 3339 timestamp of record creation, immutable
    pub created_at: String,
}

impl Transaction {
    /// Generate a unique transaction ID from the type and a timestamp.
    /// Format: txn-<in|ex>-<timestamp_ms>-<random_suffix>
    /// Example: txn-in-1625846400123-af3c
    pub fn generate_id(transaction_type: TransactionType, timestamp_ms: u64) -> String {
        let type_tag = match transaction_type {
            TransactionType::Income => "in",
            TransactionType::Expense => "ex",
        };
        format!("txn-{}-{}-{}", type_tag, timestamp_ms, Self::generate_random_suffix(4))
    }

    /// Parse a transaction ID to extract its type tag and timestamp.
    pub fn parse_id(id: &str) -> Result<(&str, u64), String> {
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 4 || parts[0] != "txn" {
            return Err(format!("Invalid transaction ID format: {}", id));
        }
        let type_tag = parts[1];
        if type_tag != "in" && type_tag != "ex" {
            return Err(format!("Invalid type tag in ID: {}", type_tag));
        }
        let timestamp = parts[2]
            .parse::<u64>()
            .map_err(|_| format!("Invalid timestamp in ID: {}", parts[2]))?;
        Ok((type_tag, timestamp))
    }

    /// Parse the business date. Returns `None` for malformed dates; records
    /// with unparseable dates are excluded from date-bounded aggregations
    /// instead of failing them.
    pub fn business_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Generate a random hex suffix for transaction IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}
