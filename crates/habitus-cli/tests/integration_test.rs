//! The CLI prints exactly what the core display types produce.

use assert_cmd::Command;
use habitus_core::{
    display::{CreateResult, Items},
    models::{ItemFilter, ItemType, Priority},
    params::ItemDraft,
    samples, Database, EngineBuilder, QueryEngine,
};
use jiff::civil::date;
use tempfile::TempDir;

fn create_test_engine() -> (TempDir, QueryEngine<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let engine = EngineBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create engine");
    (temp_dir, engine)
}

/// Helper function to run CLI commands against the engine's database
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let db_path = temp_dir.path().join("test.db");
    let output = Command::cargo_bin("habitus")
        .expect("Failed to find habitus binary")
        .arg("--no-color")
        .arg("--database-file")
        .arg(&db_path)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");
    assert!(output.status.success(), "habitus {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}

#[test]
fn test_show_matches_item_display() {
    let (temp_dir, mut engine) = create_test_engine();
    let item = engine
        .add(ItemDraft {
            item_type: ItemType::Habit,
            notes: Some("Stretch before running".to_string()),
            priority: Priority::High,
            due_date: Some(date(2032, 9, 1)),
            ..ItemDraft::titled("Exercise")
        })
        .unwrap();

    let cli_output = run_cli_command(&temp_dir, &["show", &item.id.to_string()]);
    assert_eq!(cli_output, item.to_string());
}

#[test]
fn test_list_matches_engine_snapshot() {
    let (temp_dir, mut engine) = create_test_engine();
    samples::seed(&mut engine, date(2030, 1, 1)).unwrap();

    for (filter, arg) in [
        (ItemFilter::All, "all"),
        (ItemFilter::Tasks, "tasks"),
        (ItemFilter::Habits, "habits"),
    ] {
        engine.set_filter(filter).unwrap();
        let items = engine.items();
        let expected = format!("# {} ({})\n\n{}", filter, items.len(), Items(items));

        let cli_output = run_cli_command(&temp_dir, &["list", "--filter", arg]);
        assert_eq!(cli_output, expected);
    }
}

#[test]
fn test_empty_list_consistency() {
    let (temp_dir, _engine) = create_test_engine();
    let cli_output = run_cli_command(&temp_dir, &["list", "--filter", "completed"]);
    assert_eq!(cli_output, Items(vec![]).to_string());
}

#[test]
fn test_cli_writes_are_visible_to_engine() {
    let (temp_dir, mut engine) = create_test_engine();

    let output = run_cli_command(&temp_dir, &["add", "From the CLI", "-p", "1"]);
    engine.refresh().unwrap();
    let items = engine.items();
    assert_eq!(items.len(), 1);
    assert_eq!(output, CreateResult::new(items[0].clone()).to_string());
}
