//! Sample items for a fresh database.

use jiff::{civil::Date, ToSpan};

use crate::{
    engine::{Failure, QueryEngine},
    models::{Item, ItemType, Priority},
    params::ItemDraft,
    store::RecordStore,
};

/// The five sample items, with task due dates relative to `today`.
pub fn sample_drafts(today: Date) -> Vec<ItemDraft> {
    let in_days = |days: i64| today.checked_add(days.days()).ok();

    let sample = |title: &str, item_type, notes: &str, priority, due_date| ItemDraft {
        title: title.to_string(),
        item_type,
        notes: Some(notes.to_string()),
        priority,
        due_date,
    };

    vec![
        sample(
            "Morning Meditation",
            ItemType::Habit,
            "Start the day with 10 minutes of meditation",
            Priority::Medium,
            None,
        ),
        sample(
            "Read a Book",
            ItemType::Habit,
            "Read at least 30 pages",
            Priority::Low,
            None,
        ),
        sample(
            "Complete Project",
            ItemType::Task,
            "Finish the project write-up",
            Priority::High,
            in_days(3),
        ),
        sample(
            "Exercise",
            ItemType::Habit,
            "30 minutes workout",
            Priority::Medium,
            None,
        ),
        sample(
            "Review Tasks",
            ItemType::Task,
            "Review and plan for tomorrow",
            Priority::Low,
            in_days(1),
        ),
    ]
}

/// Adds every sample item through `engine`, stopping at the first failure.
pub fn seed<S: RecordStore>(engine: &mut QueryEngine<S>, today: Date) -> Result<Vec<Item>, Failure> {
    sample_drafts(today)
        .into_iter()
        .map(|draft| engine.add(draft))
        .collect()
}
