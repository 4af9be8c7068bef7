//! Domain model for financial-habit checklists.
use serde::{Deserialize, Serialize};

/// A single yes/no checklist question.
///
/// Item lists typically come from the document import boundary; the engine
/// only consumes the structured records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    /// Marks the item as a habit candidate for the suggestions list
    pub is_habit: bool,
}

/// A recorded answer to a checklist item.
/// Unanswered items simply have no entry in the answer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}
