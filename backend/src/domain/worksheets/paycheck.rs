//! Paycheck-cycle worksheet.

use serde::{Deserialize, Serialize};
use shared::PaycheckCycleSummary;

use super::parse::parse_amount;

/// Average number of weeks per month, used to project weekly savings to a
/// monthly figure. Heuristic (52 / 12), not a per-calendar computation.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// One week of the paycheck cycle. Fields hold the raw form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaycheckWeekRow {
    pub income: String,
    pub essential: String,
    pub discretionary: String,
    pub savings: String,
}

/// Form state for the paycheck-cycle worksheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaycheckWorksheet {
    pub weeks: Vec<PaycheckWeekRow>,
}

impl PaycheckWorksheet {
    /// Derive the worksheet totals. Each column is summed independently;
    /// the savings rate is 0 when there is no income.
    pub fn summarize(&self) -> PaycheckCycleSummary {
        let mut total_income = 0.0;
        let mut total_essential = 0.0;
        let mut total_discretionary = 0.0;
        let mut total_savings = 0.0;

        for week in &self.weeks {
            total_income += parse_amount(&week.income);
            total_essential += parse_amount(&week.essential);
            total_discretionary += parse_amount(&week.discretionary);
            total_savings += parse_amount(&week.savings);
        }

        let savings_rate = if total_income > 0.0 {
            total_savings / total_income * 100.0
        } else {
            0.0
        };

        PaycheckCycleSummary {
            total_income,
            total_essential,
            total_discretionary,
            total_savings,
            savings_rate,
            monthly_projection: total_savings * WEEKS_PER_MONTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(income: &str, essential: &str, discretionary: &str, savings: &str) -> PaycheckWeekRow {
        PaycheckWeekRow {
            income: income.to_string(),
            essential: essential.to_string(),
            discretionary: discretionary.to_string(),
            savings: savings.to_string(),
        }
    }

    #[test]
    fn test_two_paid_weeks_of_four() {
        let worksheet = PaycheckWorksheet {
            weeks: vec![
                week("800", "500", "150", "50"),
                week("800", "480", "140", "60"),
                week("0", "0", "0", "0"),
                week("0", "0", "0", "0"),
            ],
        };
        let summary = worksheet.summarize();

        assert_eq!(summary.total_income, 1600.0);
        assert_eq!(summary.total_savings, 110.0);
        assert!((summary.savings_rate - 6.875).abs() < 1e-9);
        assert!((summary.monthly_projection - 476.3).abs() < 1e-9);
    }

    #[test]
    fn test_blank_and_garbage_fields_count_as_zero() {
        let worksheet = PaycheckWorksheet {
            weeks: vec![week("800", "", "n/a", "50"), week("", "", "", "")],
        };
        let summary = worksheet.summarize();

        assert_eq!(summary.total_income, 800.0);
        assert_eq!(summary.total_essential, 0.0);
        assert_eq!(summary.total_discretionary, 0.0);
        assert_eq!(summary.total_savings, 50.0);
    }

    #[test]
    fn test_savings_rate_is_zero_without_income() {
        let worksheet = PaycheckWorksheet {
            weeks: vec![week("", "", "", "25")],
        };
        let summary = worksheet.summarize();

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
        assert!(summary.savings_rate.is_finite());
    }

    #[test]
    fn test_empty_worksheet_is_all_zeroes() {
        let summary = PaycheckWorksheet::default().summarize();
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.monthly_projection, 0.0);
    }
}
