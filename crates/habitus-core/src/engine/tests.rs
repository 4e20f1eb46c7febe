//! Tests for the query engine, run against the in-memory store.

use jiff::{civil::date, Timestamp};

use super::*;
use crate::{
    models::{ItemType, Priority},
    store::MemoryStore,
};

fn stored(title: &str, item_type: ItemType, priority: Priority, created_second: i64) -> Item {
    let created_at = Timestamp::from_second(created_second).unwrap();
    Item {
        id: ItemId::new(),
        title: title.to_string(),
        item_type,
        notes: None,
        priority,
        due_date: None,
        is_complete: false,
        created_at,
        updated_at: created_at,
    }
}

/// Two tasks, two habits, one of each completed.
fn mixed_store() -> MemoryStore {
    let mut done_task = stored("Done task", ItemType::Task, Priority::Low, 400);
    done_task.is_complete = true;
    let mut done_habit = stored("Done habit", ItemType::Habit, Priority::None, 500);
    done_habit.is_complete = true;
    MemoryStore::with_items([
        stored("Open task", ItemType::Task, Priority::Medium, 100),
        stored("Open habit", ItemType::Habit, Priority::High, 200),
        done_task,
        done_habit,
    ])
}

fn titles(engine: &QueryEngine<MemoryStore>) -> Vec<String> {
    engine.items().into_iter().map(|item| item.title).collect()
}

fn assert_sorted(items: &[Item]) {
    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.priority > b.priority
                || (a.priority == b.priority && a.created_at >= b.created_at),
            "{} should not precede {}",
            a.title,
            b.title
        );
    }
}

#[test]
fn test_initial_refresh_loads_snapshot() {
    let engine = QueryEngine::new(mixed_store());
    assert_eq!(engine.filter(), ItemFilter::All);
    assert_eq!(engine.items().len(), 4);
    assert!(engine.failure().is_none());
    assert_eq!(engine.state().revision, 1);
}

#[test]
fn test_initial_refresh_failure_is_published() {
    let mut store = MemoryStore::new();
    store.set_simulate_read_error(true);

    let engine = QueryEngine::new(store);
    assert!(engine.items().is_empty());
    let failure = engine.failure().expect("failure should be published");
    assert_eq!(failure.kind, FailureKind::StoreRead);
}

#[test]
fn test_snapshot_orders_by_priority_then_newest() {
    let a = stored("A", ItemType::Task, Priority::Low, 100);
    let b = stored("B", ItemType::Task, Priority::High, 200);
    let engine = QueryEngine::new(MemoryStore::with_items([a, b]));
    assert_eq!(titles(&engine), ["B", "A"]);
}

#[test]
fn test_equal_priority_newest_first() {
    let engine = QueryEngine::new(MemoryStore::with_items([
        stored("Older", ItemType::Task, Priority::Medium, 100),
        stored("Newer", ItemType::Task, Priority::Medium, 200),
        stored("Top", ItemType::Habit, Priority::High, 50),
    ]));
    assert_eq!(titles(&engine), ["Top", "Newer", "Older"]);
    assert_sorted(&engine.items());
}

#[test]
fn test_every_filter_is_exact() {
    let mut engine = QueryEngine::new(mixed_store());
    let everything = engine.store().query(None, &[]).unwrap();

    for filter in ItemFilter::ALL {
        engine.set_filter(filter).unwrap();
        let snapshot = engine.items();

        assert!(snapshot.iter().all(|item| filter.matches(item)));
        let expected = everything.iter().filter(|item| filter.matches(item)).count();
        assert_eq!(snapshot.len(), expected, "filter {}", filter.as_str());
        assert_sorted(&snapshot);
        assert_eq!(engine.state().filter, filter);
    }
}

#[test]
fn test_filter_membership() {
    let mut engine = QueryEngine::new(mixed_store());

    engine.set_filter(ItemFilter::Tasks).unwrap();
    assert_eq!(titles(&engine), ["Open task", "Done task"]);

    engine.set_filter(ItemFilter::Habits).unwrap();
    assert_eq!(titles(&engine), ["Open habit", "Done habit"]);

    engine.set_filter(ItemFilter::Completed).unwrap();
    assert_eq!(titles(&engine), ["Done task", "Done habit"]);

    engine.set_filter(ItemFilter::Incomplete).unwrap();
    assert_eq!(titles(&engine), ["Open habit", "Open task"]);
}

#[test]
fn test_add_creates_open_item() {
    let mut engine = QueryEngine::new(MemoryStore::new());

    let item = engine
        .add(ItemDraft {
            item_type: ItemType::Habit,
            notes: Some("Ten minutes".to_string()),
            priority: Priority::Medium,
            due_date: Some(date(2030, 1, 15)),
            ..ItemDraft::titled("Stretch")
        })
        .unwrap();

    assert!(!item.is_complete);
    assert_eq!(item.created_at, item.updated_at);
    assert_eq!(item.item_type, ItemType::Habit);
    assert_eq!(item.due_date, Some(date(2030, 1, 15)));

    let snapshot = engine.items();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0], item);
    assert_eq!(
        snapshot.iter().filter(|i| i.title == "Stretch").count(),
        1
    );
}

#[test]
fn test_add_blank_notes_are_dropped() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let item = engine
        .add(ItemDraft {
            notes: Some("   ".to_string()),
            ..ItemDraft::titled("Laundry")
        })
        .unwrap();
    assert_eq!(item.notes, None);
}

#[test]
fn test_add_rejects_blank_title() {
    let mut engine = QueryEngine::new(mixed_store());
    let before = engine.items();

    for title in ["", "   ", "\t\n"] {
        let failure = engine.add(ItemDraft::titled(title)).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.message, "Title cannot be empty");
    }

    assert_eq!(engine.store().len(), 4);
    assert_eq!(engine.items(), before);
    assert!(engine.failure().unwrap().is_validation());
}

#[test]
fn test_add_write_failure_leaves_snapshot() {
    let mut engine = QueryEngine::new(mixed_store());
    let before = engine.items();
    engine.store_mut().set_simulate_write_error(true);

    let failure = engine.add(ItemDraft::titled("Blocked")).unwrap_err();
    assert_eq!(failure.kind, FailureKind::StoreWrite);
    assert!(failure.message.starts_with("Failed to save changes"));
    assert_eq!(engine.items(), before);
    assert_eq!(engine.store().len(), 4);
}

#[test]
fn test_read_failure_keeps_stale_snapshot() {
    let mut engine = QueryEngine::new(mixed_store());
    let before = engine.items();
    engine.store_mut().set_simulate_read_error(true);

    let failure = engine.set_filter(ItemFilter::Habits).unwrap_err();
    assert_eq!(failure.kind, FailureKind::StoreRead);
    assert_eq!(engine.items(), before);
    assert_eq!(engine.failure(), Some(failure));

    engine.store_mut().set_simulate_read_error(false);
    engine.refresh().unwrap();
    assert_eq!(engine.items().len(), 2);
}

#[test]
fn test_dismiss_failure() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    engine.add(ItemDraft::titled("")).unwrap_err();
    assert!(engine.failure().is_some());

    let revision = engine.state().revision;
    engine.dismiss_failure();
    assert!(engine.failure().is_none());
    assert_eq!(engine.state().revision, revision + 1);

    // Nothing to dismiss, nothing published
    engine.dismiss_failure();
    assert_eq!(engine.state().revision, revision + 1);
}

#[test]
fn test_update_overwrites_fields() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let item = engine
        .add(ItemDraft {
            notes: Some("old".to_string()),
            due_date: Some(date(2030, 5, 1)),
            ..ItemDraft::titled("Draft")
        })
        .unwrap();

    let updated = engine
        .update(
            item.id,
            ItemDraft {
                item_type: ItemType::Habit,
                priority: Priority::High,
                ..ItemDraft::titled("Final")
            },
        )
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.item_type, ItemType::Habit);
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.notes, None);
    assert_eq!(updated.due_date, None);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);
    assert_eq!(engine.items(), vec![updated]);
}

#[test]
fn test_update_rejects_blank_title() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let item = engine.add(ItemDraft::titled("Keep me")).unwrap();

    let failure = engine.update(item.id, ItemDraft::titled("  ")).unwrap_err();
    assert!(failure.is_validation());
    assert_eq!(engine.store().get(item.id).unwrap().unwrap().title, "Keep me");
}

#[test]
fn test_update_can_move_item_out_of_filter() {
    let mut engine = QueryEngine::with_filter(mixed_store(), ItemFilter::Tasks);
    let task = engine.items()[0].clone();

    engine
        .update(
            task.id,
            ItemDraft {
                item_type: ItemType::Habit,
                ..ItemDraft::from_item(&task)
            },
        )
        .unwrap();
    assert!(engine.items().iter().all(|item| item.id != task.id));
}

#[test]
fn test_update_reorders_snapshot() {
    let mut engine = QueryEngine::new(mixed_store());
    let last = engine.items().last().unwrap().clone();

    engine
        .update(
            last.id,
            ItemDraft {
                priority: Priority::High,
                ..ItemDraft::from_item(&last)
            },
        )
        .unwrap();
    assert_sorted(&engine.items());
}

#[test]
fn test_toggle_twice_restores_and_advances() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let item = engine.add(ItemDraft::titled("Walk")).unwrap();

    let once = engine.toggle_completion(item.id).unwrap();
    assert!(once.is_complete);
    assert!(once.updated_at > item.updated_at);

    let twice = engine.toggle_completion(item.id).unwrap();
    assert!(!twice.is_complete);
    assert!(twice.updated_at > once.updated_at);
    assert_eq!(twice.created_at, item.created_at);
}

#[test]
fn test_toggle_under_incomplete_filter_removes_item() {
    let mut engine = QueryEngine::with_filter(mixed_store(), ItemFilter::Incomplete);
    let open = engine.items()[0].clone();

    engine.toggle_completion(open.id).unwrap();
    assert!(engine.items().iter().all(|item| item.id != open.id));

    engine.set_filter(ItemFilter::Completed).unwrap();
    assert!(engine.items().iter().any(|item| item.id == open.id));
}

#[test]
fn test_delete_removes_item() {
    let mut engine = QueryEngine::new(mixed_store());
    let victim = engine.items()[1].clone();

    let removed = engine.delete(victim.id).unwrap();
    assert_eq!(removed, victim);
    engine.refresh().unwrap();
    assert!(engine.items().iter().all(|item| item.id != victim.id));
    assert_eq!(engine.store().len(), 3);
}

#[test]
fn test_unknown_id_is_write_failure() {
    let mut engine = QueryEngine::new(mixed_store());
    let missing = ItemId::new();

    let failures = [
        engine.toggle_completion(missing).unwrap_err(),
        engine.delete(missing).unwrap_err(),
        engine.update(missing, ItemDraft::titled("Ghost")).unwrap_err(),
    ];
    for failure in failures {
        assert_eq!(failure.kind, FailureKind::StoreWrite);
        assert!(failure.message.contains(&missing.to_string()));
    }
    assert_eq!(engine.store().len(), 4);
}

#[test]
fn test_write_failure_on_toggle_keeps_item_open() {
    let mut engine = QueryEngine::new(mixed_store());
    let open = engine
        .items()
        .into_iter()
        .find(|item| !item.is_complete)
        .unwrap();
    engine.store_mut().set_simulate_write_error(true);

    let failure = engine.toggle_completion(open.id).unwrap_err();
    assert_eq!(failure.kind, FailureKind::StoreWrite);
    assert!(!engine.store().get(open.id).unwrap().unwrap().is_complete);
}

#[test]
fn test_resolve_by_prefix() {
    let mut engine = QueryEngine::new(mixed_store());
    let target = engine.items()[2].clone();

    let by_short = engine.resolve(&target.id.short()).unwrap();
    assert_eq!(by_short.id, target.id);

    let by_full = engine.resolve(&target.id.to_string().to_uppercase()).unwrap();
    assert_eq!(by_full.id, target.id);
}

#[test]
fn test_resolve_ignores_active_filter() {
    let mut engine = QueryEngine::with_filter(mixed_store(), ItemFilter::Completed);
    let open = engine
        .store()
        .query(Some(crate::models::Predicate::CompletionIs(false)), &[])
        .unwrap()
        .remove(0);

    assert_eq!(engine.resolve(&open.id.to_string()).unwrap().id, open.id);
    assert!(engine.items().iter().all(|item| item.is_complete));
}

#[test]
fn test_resolve_failures() {
    let mut engine = QueryEngine::new(mixed_store());

    let failure = engine.resolve("").unwrap_err();
    assert!(failure.is_validation());

    let failure = engine.resolve("not-an-id").unwrap_err();
    assert!(failure.is_validation());
    assert!(failure.message.contains("No item matches"));

    // Every hex id starts with one of sixteen digits, so with seventeen items
    // at least one single-digit prefix is shared.
    let items: Vec<Item> = (0..17)
        .map(|n| stored(&format!("Item {n}"), ItemType::Task, Priority::None, n))
        .collect();
    let mut engine = QueryEngine::new(MemoryStore::with_items(items));
    let ambiguous = "0123456789abcdef"
        .chars()
        .map(String::from)
        .find(|prefix| {
            engine
                .items()
                .iter()
                .filter(|item| item.id.short().starts_with(prefix.as_str()))
                .count()
                > 1
        })
        .unwrap();
    let failure = engine.resolve(&ambiguous).unwrap_err();
    assert!(failure.message.contains("ambiguous"));
}

#[test]
fn test_subscription_sees_each_publish() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let mut view = engine.subscribe();
    assert!(!view.has_changed());
    assert_eq!(engine.subscriber_count(), 1);

    engine.add(ItemDraft::titled("First")).unwrap();
    assert!(view.has_changed());
    let state = view.current();
    assert_eq!(state.items.len(), 1);
    assert!(!view.has_changed());

    engine.add(ItemDraft::titled("")).unwrap_err();
    assert!(view.has_changed());
    let state = view.current();
    assert!(state.failure.unwrap().is_validation());
    assert_eq!(state.items.len(), 1);

    view.unsubscribe();
    assert_eq!(engine.subscriber_count(), 0);
}

#[test]
fn test_revision_advances_on_every_publish() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let start = engine.state().revision;

    engine.add(ItemDraft::titled("One")).unwrap();
    engine.set_filter(ItemFilter::Habits).unwrap();
    assert_eq!(engine.state().revision, start + 2);
}

#[tokio::test]
async fn test_subscription_wakes_on_change() {
    let mut engine = QueryEngine::new(MemoryStore::new());
    let mut view = engine.subscribe();

    let waiter = tokio::spawn(async move {
        let changed = view.changed().await;
        (changed, view.current().items.len())
    });

    engine.add(ItemDraft::titled("Wake up")).unwrap();
    let (changed, len) = waiter.await.unwrap();
    assert!(changed);
    assert_eq!(len, 1);
}

#[tokio::test]
async fn test_subscription_ends_with_engine() {
    let engine = QueryEngine::new(MemoryStore::new());
    let mut view = engine.subscribe();
    drop(engine);
    assert!(!view.changed().await);
    assert!(!view.has_changed());
}
