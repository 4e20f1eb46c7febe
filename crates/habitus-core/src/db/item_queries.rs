//! Item CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{
    params, params_from_iter,
    types::{Type, Value},
    OptionalExtension,
};

use crate::{
    error::{DatabaseResultExt, HabitusError, Result},
    models::{Item, ItemId, ItemType, Predicate, Priority, SortDirection, SortField, SortKey},
    store::RecordStore,
};

const SELECT_ITEMS_SQL: &str = "SELECT id, title, type, notes, priority, due_date, created_at, updated_at, is_complete FROM items";
const SELECT_ITEM_BY_ID_SQL: &str = "SELECT id, title, type, notes, priority, due_date, created_at, updated_at, is_complete FROM items WHERE id = ?1";
const INSERT_ITEM_SQL: &str = "INSERT INTO items (id, title, type, notes, priority, due_date, created_at, updated_at, is_complete) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_ITEM_SQL: &str = "UPDATE items SET title = ?1, type = ?2, notes = ?3, priority = ?4, due_date = ?5, updated_at = ?6, is_complete = ?7 WHERE id = ?8";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";

/// Converts a timestamp to the stored nanosecond count.
fn timestamp_to_sql(timestamp: Timestamp) -> Result<i64> {
    i64::try_from(timestamp.as_nanosecond()).map_err(|_| {
        HabitusError::invalid_input("timestamp")
            .with_reason(format!("{timestamp} cannot be stored as nanoseconds"))
    })
}

fn timestamp_from_sql(index: usize, nanos: i64) -> rusqlite::Result<Timestamp> {
    Timestamp::from_nanosecond(i128::from(nanos))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}

fn predicate_sql(predicate: Predicate) -> (&'static str, Value) {
    match predicate {
        Predicate::TypeIs(kind) => ("type = ?1", Value::Text(kind.as_str().to_string())),
        Predicate::CompletionIs(flag) => ("is_complete = ?1", Value::Integer(i64::from(flag))),
    }
}

/// Builds the ORDER BY clause; `rowid` breaks remaining ties in insertion
/// order.
fn order_by_sql(sort: &[SortKey]) -> String {
    let mut terms: Vec<String> = sort
        .iter()
        .map(|key| {
            let column = match key.field {
                SortField::Priority => "priority",
                SortField::CreatedAt => "created_at",
                SortField::UpdatedAt => "updated_at",
                SortField::Title => "title",
            };
            let direction = match key.direction {
                SortDirection::Ascending => "ASC",
                SortDirection::Descending => "DESC",
            };
            format!("{column} {direction}")
        })
        .collect();
    terms.push("rowid ASC".to_string());
    format!(" ORDER BY {}", terms.join(", "))
}

impl super::Database {
    /// Helper function to construct an Item from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<Item> {
        let id_str: String = row.get(0)?;
        let id = id_str.parse::<ItemId>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
        })?;

        let type_str: String = row.get(2)?;
        let item_type = type_str.parse::<ItemType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid item type: {type_str}").into(),
            )
        })?;

        let priority_value: i64 = row.get(4)?;
        let priority = Priority::try_from(priority_value).map_err(|reason| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, reason.into())
        })?;

        let due_date = row
            .get::<_, Option<String>>(5)?
            .map(|s| {
                s.parse::<Date>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                })
            })
            .transpose()?;

        Ok(Item {
            id,
            title: row.get(1)?,
            item_type,
            notes: row.get(3)?,
            priority,
            due_date,
            created_at: timestamp_from_sql(6, row.get(6)?)?,
            updated_at: timestamp_from_sql(7, row.get(7)?)?,
            is_complete: row.get::<_, i64>(8)? != 0,
        })
    }

    /// Total number of stored items.
    pub fn count_items(&self) -> Result<u64> {
        self.connection
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count items")
    }
}

impl RecordStore for super::Database {
    fn query(&self, predicate: Option<Predicate>, sort: &[SortKey]) -> Result<Vec<Item>> {
        let mut sql = SELECT_ITEMS_SQL.to_string();
        let mut values: Vec<Value> = Vec::new();
        if let Some(predicate) = predicate {
            let (clause, value) = predicate_sql(predicate);
            sql.push_str(" WHERE ");
            sql.push_str(clause);
            values.push(value);
        }
        sql.push_str(&order_by_sql(sort));

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params_from_iter(values), Self::build_item_from_row)
            .db_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch items")?;

        Ok(items)
    }

    fn get(&self, id: ItemId) -> Result<Option<Item>> {
        self.connection
            .query_row(
                SELECT_ITEM_BY_ID_SQL,
                params![id.to_string()],
                Self::build_item_from_row,
            )
            .optional()
            .db_context("Failed to get item")
    }

    fn insert(&mut self, item: &Item) -> Result<()> {
        self.connection
            .execute(
                INSERT_ITEM_SQL,
                params![
                    item.id.to_string(),
                    &item.title,
                    item.item_type.as_str(),
                    &item.notes,
                    i64::from(item.priority.value()),
                    item.due_date.map(|d| d.to_string()),
                    timestamp_to_sql(item.created_at)?,
                    timestamp_to_sql(item.updated_at)?,
                    item.is_complete,
                ],
            )
            .db_context("Failed to insert item")?;
        Ok(())
    }

    fn update(&mut self, item: &Item) -> Result<()> {
        let changed = self
            .connection
            .execute(
                UPDATE_ITEM_SQL,
                params![
                    &item.title,
                    item.item_type.as_str(),
                    &item.notes,
                    i64::from(item.priority.value()),
                    item.due_date.map(|d| d.to_string()),
                    timestamp_to_sql(item.updated_at)?,
                    item.is_complete,
                    item.id.to_string(),
                ],
            )
            .db_context("Failed to update item")?;

        if changed == 0 {
            return Err(HabitusError::ItemNotFound { id: item.id });
        }
        Ok(())
    }

    fn delete(&mut self, id: ItemId) -> Result<()> {
        let changed = self
            .connection
            .execute(DELETE_ITEM_SQL, params![id.to_string()])
            .db_context("Failed to delete item")?;

        if changed == 0 {
            return Err(HabitusError::ItemNotFound { id });
        }
        Ok(())
    }
}
