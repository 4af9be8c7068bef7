use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single dated income or expense record, as exposed to frontends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Business date of the transaction (ISO 8601, YYYY-MM-DD).
    /// Distinct from `created_at`, which records when the entry was made.
    pub date: String,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Transaction amount in currency units (always non-negative)
    pub amount: f64,
    /// Category label; canonical vocabularies are defined by
    /// `IncomeCategory` / `ExpenseCategory`, but free text is accepted
    pub category: String,
    pub transaction_type: TransactionType,
    /// RFC 3339 timestamp of record creation
    pub created_at: String,
}

impl Transaction {
    /// Parse the business date. Returns `None` for missing or malformed
    /// dates; callers are expected to skip such records in date-bounded
    /// computations rather than fail.
    pub fn business_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Type of transaction for filtering and aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money received (salary, crop sales, subsidies, ...)
    Income,
    /// Money spent (household and farm operating costs)
    Expense,
}

/// Closed vocabulary for income categories.
///
/// Unknown labels fold into `Other` so that aggregation never has to deal
/// with an open-ended label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    CropSales,
    Subsidy,
    Gift,
    Interest,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 6] = [
        IncomeCategory::Salary,
        IncomeCategory::CropSales,
        IncomeCategory::Subsidy,
        IncomeCategory::Gift,
        IncomeCategory::Interest,
        IncomeCategory::Other,
    ];

    /// Display label used in category breakdowns and exports.
    pub fn label(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::CropSales => "Crop Sales",
            IncomeCategory::Subsidy => "Subsidy",
            IncomeCategory::Gift => "Gift",
            IncomeCategory::Interest => "Interest",
            IncomeCategory::Other => "Other",
        }
    }

    /// Map a free-text label onto the closed vocabulary.
    /// Matching is case-insensitive and exact; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "salary" => IncomeCategory::Salary,
            "crop sales" | "sales" => IncomeCategory::CropSales,
            "subsidy" => IncomeCategory::Subsidy,
            "gift" => IncomeCategory::Gift,
            "interest" => IncomeCategory::Interest,
            _ => IncomeCategory::Other,
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Closed vocabulary for expense categories, covering both household and
/// farm operating costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Bills,
    Housing,
    Transport,
    Health,
    Education,
    Entertainment,
    Seeds,
    Fertilizer,
    Equipment,
    Labor,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Food,
        ExpenseCategory::Bills,
        ExpenseCategory::Housing,
        ExpenseCategory::Transport,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Seeds,
        ExpenseCategory::Fertilizer,
        ExpenseCategory::Equipment,
        ExpenseCategory::Labor,
        ExpenseCategory::Other,
    ];

    /// Display label used in category breakdowns and exports.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Seeds => "Seeds",
            ExpenseCategory::Fertilizer => "Fertilizer",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Labor => "Labor",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Map a free-text label onto the closed vocabulary.
    /// Matching is case-insensitive and exact; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "food" => ExpenseCategory::Food,
            "bills" => ExpenseCategory::Bills,
            "housing" => ExpenseCategory::Housing,
            "transport" => ExpenseCategory::Transport,
            "health" => ExpenseCategory::Health,
            "education" => ExpenseCategory::Education,
            "entertainment" => ExpenseCategory::Entertainment,
            "seeds" => ExpenseCategory::Seeds,
            "fertilizer" => ExpenseCategory::Fertilizer,
            "equipment" => ExpenseCategory::Equipment,
            "labor" => ExpenseCategory::Labor,
            _ => ExpenseCategory::Other,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Request for creating a new transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub transaction_type: TransactionType,
    /// Optional business date (YYYY-MM-DD) - uses the current date if not provided
    pub date: Option<String>,
}

/// Request for updating an existing transaction.
/// Fields left as `None` are preserved (merge semantics).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub date: Option<String>,
}

/// Request for listing transactions with optional date bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionListRequest {
    /// Start date for filtering (YYYY-MM-DD, inclusive)
    pub start_date: Option<String>,
    /// End date for filtering (YYYY-MM-DD, inclusive)
    pub end_date: Option<String>,
    /// Maximum number of transactions to return
    pub limit: Option<u32>,
}

/// Response containing a list of transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// Request for deleting multiple transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionsRequest {
    pub transaction_ids: Vec<String>,
}

/// Response after deleting transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionsResponse {
    pub deleted_count: usize,
    pub success_message: String,
    pub not_found_ids: Vec<String>,
}

/// Aggregated totals for a bounded date interval, as consumed by the
/// dashboard and analytics views.
///
/// All values are full-precision; rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub balance: f64,
    /// Percentage of income kept, 0 when there is no income
    pub savings_rate: f64,
    /// Income totals keyed by canonical category label
    pub income_by_category: BTreeMap<String, f64>,
    /// Expense totals keyed by canonical category label
    pub expenses_by_category: BTreeMap<String, f64>,
}

/// One bucket of a chart time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Bucket label, e.g. "Jan 2024" for monthly buckets
    pub label: String,
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses` for the bucket
    pub net: f64,
}

/// Derived totals for the debt consolidation worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtWorksheetSummary {
    /// Sum of balances over valid debt entries
    pub total_debt: f64,
    /// Balance-weighted mean interest rate, 0 when there is no debt
    pub average_interest_rate: f64,
    pub total_paid: f64,
    pub total_savings: f64,
    /// Sum of (interest before - interest after) over the weekly log
    pub total_interest_reduction: f64,
    /// `total_savings` extrapolated to a full year
    pub projected_annual_savings: f64,
}

/// Derived totals for the paycheck-cycle worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaycheckCycleSummary {
    pub total_income: f64,
    pub total_essential: f64,
    pub total_discretionary: f64,
    pub total_savings: f64,
    /// Percentage of income saved, 0 when there is no income
    pub savings_rate: f64,
    /// `total_savings` extrapolated to a month
    pub monthly_projection: f64,
}

/// Derived totals for the budget-planner worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlanSummary {
    /// fixed + variable + debt payment + emergency fund
    pub total_expenses: f64,
    /// income - total expenses - savings goal
    pub remaining: f64,
    /// Percentage of income earmarked for the savings goal, 0 when income is 0
    pub savings_rate: f64,
}

/// A habit-tagged checklist item surfaced by the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSuggestion {
    pub item_id: String,
    pub text: String,
}

/// Scoring results for a checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistStats {
    pub total_items: usize,
    pub total_answers: usize,
    pub yes_answers: usize,
    pub no_answers: usize,
    /// Answered items as a percentage of all items, 0 for an empty checklist
    pub completion_rate: f64,
    /// "Yes" answers as a percentage of answered items, 0 when nothing is answered
    pub positive_rate: f64,
    pub habits_to_develop: Vec<HabitSuggestion>,
}

/// Request for exporting transactions as CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDataRequest {
    /// Start date for filtering (YYYY-MM-DD, inclusive)
    pub start_date: Option<String>,
    /// End date for filtering (YYYY-MM-DD, inclusive)
    pub end_date: Option<String>,
}

/// Response containing exported CSV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub filename: String,
    pub content: String,
    pub row_count: usize,
}

/// Configuration for transaction entry forms and validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub max_description_length: usize,
    pub max_amount: f64,
    pub currency_symbol: String,
    /// Default trend window in months (6 or 12)
    pub default_trend_window: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_description_length: 256,
            max_amount: 1_000_000_000.0,
            currency_symbol: "$".to_string(),
            default_trend_window: 6,
        }
    }
}
