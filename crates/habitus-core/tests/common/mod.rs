#![allow(dead_code)]

use habitus_core::{Database, EngineBuilder, QueryEngine};
use tempfile::TempDir;

/// Helper function to create an engine over a fresh database file
pub fn create_test_engine() -> (TempDir, QueryEngine<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create engine");
    (temp_dir, engine)
}

/// Reopens the database file inside `temp_dir`
pub fn reopen(temp_dir: &TempDir) -> QueryEngine<Database> {
    EngineBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to reopen engine")
}
