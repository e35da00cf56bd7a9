//! Integration tests for logger behavior.

use campus_grades::logger::{
    close_file_logging, init_file_logging, set_level, set_level_from_str, Level,
};
use campus_grades::{debug, error, info, warn};
use std::fs;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARNING"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_captures_messages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs").join("campusgrades.log");

    assert!(init_file_logging(&path));
    error!("record HDAT0001 could not be read");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("read log file");
    assert!(content.contains("[ERROR] record HDAT0001 could not be read"));
}
