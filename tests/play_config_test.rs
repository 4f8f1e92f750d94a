//! Tests for loading play configuration from TOML files.

use std::io::Write;
use strictly_minimax::{Mark, PlayConfig};
use tempfile::NamedTempFile;

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
human_mark = "O"
human_name = "Ada"
ai_name = "Hal"
show_values = true
"#
    )
    .unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(config.human_name(), "Ada");
    assert_eq!(config.ai_name(), "Hal");
    assert!(*config.show_values());
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_bad_mark_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"Z\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
    assert!(err.to_string().starts_with("Config error"));
}
