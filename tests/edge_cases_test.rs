/// Edge case integration tests
///
/// These tests cover filesystem quirks, encoding problems and other unusual history files
mod common;

use std::fs;

use common::{HistoryFileBuilder, TestHome};
use zsh_history_cleaner::{HistoryError, HistoryStore, WarningKind};

#[test]
fn test_edge_case_empty_file() {
    let home = HistoryFileBuilder::new().build();

    let mut store = HistoryStore::load(home.history_path()).unwrap();
    assert!(store.is_empty());
    assert!(store.warnings().is_empty());
    assert_eq!(store.remove_duplicates().after, 0);
}

#[test]
fn test_edge_case_blank_lines_are_silent() {
    let home = HistoryFileBuilder::new()
        .line("")
        .entry(1583848895, 0, "ls")
        .line("    ")
        .line("\t")
        .entry(1583848896, 0, "pwd")
        .build();

    let store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.warnings().is_empty(), "Blank lines should not produce warnings");
}

#[test]
fn test_edge_case_no_trailing_newline() {
    let home =
        HistoryFileBuilder::new().commands(&["ls", "pwd"]).without_trailing_newline().build();

    let store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[1].raw_line(), ": 1583848896:0;pwd");
}

#[test]
fn test_edge_case_crlf_line_endings_survive_save() {
    let home = TestHome::empty();
    fs::write(
        home.history_path(),
        ": 1583848895:0;ls\r\n: 1583848896:0;pwd\r\n: 1583848897:0;ls\r\n",
    )
    .unwrap();

    let mut store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.entries()[0].raw_line(), ": 1583848895:0;ls\r");
    assert_eq!(store.entries()[1].command(), "pwd");

    store.remove_duplicates();
    store.save(None, false).unwrap();
    assert_eq!(home.read_history(), ": 1583848895:0;ls\r\n: 1583848896:0;pwd\r\n");
}

#[test]
fn test_edge_case_invalid_utf8_does_not_abort() {
    let home = TestHome::empty();
    let mut content = b": 1583848895:0;ls\n".to_vec();
    content.extend_from_slice(b": 1583848896:0;echo \x83\xa0\n");
    content.extend_from_slice(b": 1583848897:0;pwd\n");
    fs::write(home.history_path(), content).unwrap();

    let store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.warnings().len(), 1);
    assert_eq!(store.warnings()[0].line_number, 2);
    assert_eq!(store.warnings()[0].kind, WarningKind::Decode);
}

#[test]
fn test_edge_case_unicode_commands() {
    let home = HistoryFileBuilder::new()
        .commands(&[
            "echo 'Hello 👋 World 🌍'",
            "echo 测试 中文 テスト",
            "echo 'Hello 👋 World 🌍'",
        ])
        .build();

    let mut store = HistoryStore::load(home.history_path()).unwrap();
    store.remove_duplicates();
    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[1].command(), "echo 测试 中文 テスト");
}

#[test]
fn test_edge_case_very_long_command() {
    let long_command = format!("echo {}", "a".repeat(100 * 1024));
    let home = HistoryFileBuilder::new().commands(&[long_command.as_str()]).build();

    let store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].command().len(), long_command.len());
}

#[test]
fn test_edge_case_many_entries() {
    let commands: Vec<String> = (0..1000).map(|i| format!("echo {}", i % 10)).collect();
    let refs: Vec<&str> = commands.iter().map(String::as_str).collect();
    let home = HistoryFileBuilder::new().commands(&refs).build();

    let mut store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 1000);
    assert_eq!(store.duplicate_count(), 990);

    store.remove_duplicates();
    let kept: Vec<&str> = store.entries().iter().map(|e| e.command()).collect();
    let expected: Vec<String> = (0..10).map(|i| format!("echo {}", i)).collect();
    assert_eq!(kept, expected);
}

#[test]
fn test_edge_case_multiline_command_survives_save() {
    let home = HistoryFileBuilder::new()
        .line(": 1583848895:0;echo 'hello \\")
        .line("world'")
        .entry(1583848896, 0, "ls")
        .entry(1583848897, 0, "ls")
        .build();

    let mut store = HistoryStore::load(home.history_path()).unwrap();
    assert!(store.warnings().is_empty());
    assert_eq!(store.len(), 3);
    assert_eq!(store.entries()[0].command(), "echo 'hello \\\nworld'");

    store.remove_duplicates();
    store.save(None, false).unwrap();
    assert_eq!(home.read_history(), ": 1583848895:0;echo 'hello \\\nworld'\n: 1583848896:0;ls\n");
}

#[test]
fn test_edge_case_multiline_warning_line_numbers() {
    let home = HistoryFileBuilder::new()
        .line(": 1583848895:0;echo 'hello \\")
        .line("world'")
        .line("garbage")
        .build();

    let store = HistoryStore::load(home.history_path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.warnings().len(), 1);
    assert_eq!(store.warnings()[0].line_number, 3);
}

#[test]
fn test_edge_case_missing_file() {
    let home = TestHome::empty();

    let err = HistoryStore::load(home.history_path()).unwrap_err();
    assert!(matches!(err, HistoryError::Load { .. }));
    assert!(err.to_string().contains(".zsh_history"));
}

#[test]
fn test_edge_case_directory_path() {
    let home = TestHome::empty();
    fs::create_dir(home.history_path()).unwrap();

    let err = HistoryStore::load(home.history_path()).unwrap_err();
    assert!(matches!(err, HistoryError::NotAFile { .. }));
}
