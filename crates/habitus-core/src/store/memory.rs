//! In-memory record store.

use super::RecordStore;
use crate::{
    error::{HabitusError, Result},
    models::{Item, ItemId, Predicate, SortKey},
};

/// In-memory record store for tests and throwaway sessions.
///
/// Items are kept in insertion order, so items that tie on every sort key
/// come back in the order they were added. Reads and writes can be made to
/// fail on demand to exercise error handling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of stored items, regardless of any filter.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_read(&self) -> Result<()> {
        if self.simulate_read_error {
            return Err(HabitusError::Simulated {
                message: "Simulated read error".to_string(),
            });
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(HabitusError::Simulated {
                message: "Simulated write error".to_string(),
            });
        }
        Ok(())
    }

    fn position(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(HabitusError::ItemNotFound { id })
    }
}

impl RecordStore for MemoryStore {
    fn query(&self, predicate: Option<Predicate>, sort: &[SortKey]) -> Result<Vec<Item>> {
        self.check_read()?;
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| predicate.map_or(true, |p| p.matches(item)))
            .cloned()
            .collect();
        items.sort_by(|a, b| SortKey::compare_all(sort, a, b));
        Ok(items)
    }

    fn get(&self, id: ItemId) -> Result<Option<Item>> {
        self.check_read()?;
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    fn insert(&mut self, item: &Item) -> Result<()> {
        self.check_write()?;
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(HabitusError::invalid_input("id")
                .with_reason(format!("Item with ID {} already exists", item.id)));
        }
        self.items.push(item.clone());
        Ok(())
    }

    fn update(&mut self, item: &Item) -> Result<()> {
        self.check_write()?;
        let index = self.position(item.id)?;
        self.items[index] = item.clone();
        Ok(())
    }

    fn delete(&mut self, id: ItemId) -> Result<()> {
        self.check_write()?;
        let index = self.position(id)?;
        self.items.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{ItemType, Priority, DEFAULT_SORT};

    fn item(title: &str, priority: Priority, created_second: i64) -> Item {
        let created_at = Timestamp::from_second(created_second).unwrap();
        Item {
            id: ItemId::new(),
            title: title.to_string(),
            item_type: ItemType::Task,
            notes: None,
            priority,
            due_date: None,
            is_complete: false,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_query_sorts_and_filters() {
        let mut done = item("Done", Priority::High, 300);
        done.is_complete = true;
        let store = MemoryStore::with_items([
            item("Old low", Priority::Low, 100),
            done,
            item("New low", Priority::Low, 200),
        ]);

        let all = store.query(None, &DEFAULT_SORT).unwrap();
        let titles: Vec<_> = all.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Done", "New low", "Old low"]);

        let open = store
            .query(Some(Predicate::CompletionIs(false)), &DEFAULT_SORT)
            .unwrap();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|i| !i.is_complete));
    }

    #[test]
    fn test_insert_duplicate_id_fails() {
        let mut store = MemoryStore::new();
        let first = item("First", Priority::None, 100);
        store.insert(&first).unwrap();
        assert!(store.insert(&first).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut store = MemoryStore::new();
        let missing = item("Missing", Priority::None, 100);
        assert!(store.update(&missing).unwrap_err().is_not_found());
        assert!(store.delete(missing.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_simulated_errors() {
        let mut store = MemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(
            store.insert(&item("Blocked", Priority::None, 100)),
            Err(HabitusError::Simulated { .. })
        ));
        assert!(store.is_empty());

        store.set_simulate_write_error(false);
        store.insert(&item("Allowed", Priority::None, 100)).unwrap();

        store.set_simulate_read_error(true);
        assert!(store.query(None, &DEFAULT_SORT).is_err());
        store.set_simulate_read_error(false);
        assert_eq!(store.query(None, &DEFAULT_SORT).unwrap().len(), 1);
    }
}
