//! Checklist scoring domain logic.
//!
//! Checklists are sets of yes/no questions with optional habit tagging.
//! Item lists arrive from the import boundary; answers live in the view's
//! local state as a sparse map. This service only derives statistics -
//! nothing here is persisted.

use log::debug;
use std::collections::HashMap;

use shared::{ChecklistStats, HabitSuggestion};

use crate::domain::models::checklist::{Answer, ChecklistItem};

/// Checklist service that derives completion statistics and habit suggestions
#[derive(Clone)]
pub struct ChecklistService;

impl ChecklistService {
    pub fn new() -> Self {
        Self
    }

    /// Score a checklist against its sparse answer map.
    ///
    /// Only answers whose key matches an item in the list are counted, so a
    /// stale entry in the map cannot inflate the rates. Both rates carry the
    /// engine-wide division guard: 0 instead of NaN for empty denominators.
    ///
    /// The habit list intentionally contains habit-tagged items whose answer
    /// is Yes, matching the product's observed behavior.
    pub fn score(&self, items: &[ChecklistItem], answers: &HashMap<String, Answer>) -> ChecklistStats {
        let total_items = items.len();
        let mut yes_answers = 0;
        let mut no_answers = 0;
        let mut habits_to_develop = Vec::new();

        for item in items {
            match answers.get(&item.id) {
                Some(Answer::Yes) => {
                    yes_answers += 1;
                    if item.is_habit {
                        habits_to_develop.push(HabitSuggestion {
                            item_id: item.id.clone(),
                            text: item.text.clone(),
                        });
                    }
                }
                Some(Answer::No) => no_answers += 1,
                None => {}
            }
        }

        let total_answers = yes_answers + no_answers;
        let completion_rate = if total_items > 0 {
            total_answers as f64 / total_items as f64 * 100.0
        } else {
            0.0
        };
        let positive_rate = if total_answers > 0 {
            yes_answers as f64 / total_answers as f64 * 100.0
        } else {
            0.0
        };

        debug!(
            "Scored checklist: {}/{} answered, {} yes, {} habit suggestions",
            total_answers,
            total_items,
            yes_answers,
            habits_to_develop.len()
        );

        ChecklistStats {
            total_items,
            total_answers,
            yes_answers,
            no_answers,
            completion_rate,
            positive_rate,
            habits_to_develop,
        }
    }
}

impl Default for ChecklistService {
    fn default() -> Self {
        Self::new()
    }
}
