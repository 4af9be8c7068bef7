//! Budget-planner worksheet.

use serde::{Deserialize, Serialize};
use shared::BudgetPlanSummary;

use super::parse::parse_amount;

/// Form state for the single-period budget planner.
/// Fields hold the raw form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlanForm {
    pub monthly_income: String,
    pub fixed_expenses: String,
    pub variable_expenses: String,
    pub savings_goal: String,
    pub debt_payment: String,
    pub emergency_fund: String,
}

impl BudgetPlanForm {
    /// Derive the plan totals. The savings goal is tracked separately from
    /// expenses: it reduces `remaining` but does not count as spending.
    pub fn summarize(&self) -> BudgetPlanSummary {
        let income = parse_amount(&self.monthly_income);
        let fixed = parse_amount(&self.fixed_expenses);
        let variable = parse_amount(&self.variable_expenses);
        let savings_goal = parse_amount(&self.savings_goal);
        let debt = parse_amount(&self.debt_payment);
        let emergency = parse_amount(&self.emergency_fund);

        let total_expenses = fixed + variable + debt + emergency;
        let remaining = income - total_expenses - savings_goal;
        let savings_rate = if income > 0.0 {
            savings_goal / income * 100.0
        } else {
            0.0
        };

        BudgetPlanSummary {
            total_expenses,
            remaining,
            savings_rate,
        }
    }
}
