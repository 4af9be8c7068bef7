//! Debt consolidation worksheet.

use serde::{Deserialize, Serialize};
use shared::DebtWorksheetSummary;

use super::parse::{parse_amount, parse_number};

/// Factor projecting the 8-week observation log to a full year.
/// A simplifying assumption carried over from the product, not a
/// statistically derived constant.
pub const ANNUAL_EXTRAPOLATION_FACTOR: f64 = 6.5;

/// One debt the user wants to consolidate. Fields hold the raw form text;
/// an entry only participates in the totals when both fields parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtEntry {
    pub name: String,
    pub balance: String,
    /// Annual interest rate in percent
    pub interest_rate: String,
}

impl DebtEntry {
    /// (balance, rate) when the entry is valid, i.e. both fields parse
    pub fn parsed(&self) -> Option<(f64, f64)> {
        let balance = parse_number(&self.balance)?;
        let rate = parse_number(&self.interest_rate)?;
        Some((balance, rate))
    }
}

/// One row of the weekly progress log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtWeekRow {
    pub week: u32,
    pub amount_paid: String,
    pub savings: String,
    pub interest_before: String,
    pub interest_after: String,
}

/// Form state for the debt consolidation worksheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtWorksheet {
    pub debts: Vec<DebtEntry>,
    pub weekly_log: Vec<DebtWeekRow>,
}

impl DebtWorksheet {
    /// Derive the worksheet totals.
    ///
    /// `average_interest_rate` is the balance-weighted mean over valid
    /// entries (defined as 0 when there is no debt), so a small
    /// high-interest card cannot dominate a large low-interest loan.
    pub fn summarize(&self) -> DebtWorksheetSummary {
        let mut total_debt = 0.0;
        let mut weighted_rate_sum = 0.0;

        for (balance, rate) in self.debts.iter().filter_map(DebtEntry::parsed) {
            total_debt += balance;
            weighted_rate_sum += balance * rate;
        }

        let average_interest_rate = if total_debt > 0.0 {
            weighted_rate_sum / total_debt
        } else {
            0.0
        };

        let mut total_paid = 0.0;
        let mut total_savings = 0.0;
        let mut total_interest_reduction = 0.0;
        for row in &self.weekly_log {
            total_paid += parse_amount(&row.amount_paid);
            total_savings += parse_amount(&row.savings);
            total_interest_reduction +=
                parse_amount(&row.interest_before) - parse_amount(&row.interest_after);
        }

        DebtWorksheetSummary {
            total_debt,
            average_interest_rate,
            total_paid,
            total_savings,
            total_interest_reduction,
            projected_annual_savings: total_savings * ANNUAL_EXTRAPOLATION_FACTOR,
        }
    }
}
