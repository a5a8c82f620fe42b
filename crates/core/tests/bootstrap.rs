//! Integration tests for the directory bootstrapper.

mod common;

use common::*;
use std::path::Path;
use std::path::PathBuf;
use summ_core::bootstrap::create_directories;
use walkdir::WalkDir;

#[test]
fn test_every_requested_directory_exists_afterwards() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let nested: Vec<PathBuf> = (0..5)
        .map(|depth| {
            (0..=depth).fold(dir.path().to_path_buf(), |path, level| {
                path.join(format!("level-{level}"))
            })
        })
        .rev()
        .collect();

    let report = create_directories(&nested, false, &RecordingLogger::default())
        .expect("Failed to create directories");

    for path in &nested {
        assert!(path.is_dir(), "{path:?} should exist");
    }
    // The deepest path comes first and creates every ancestor with it.
    assert_eq!(report.created, vec![nested[0].clone()]);
    assert_eq!(report.existing.len(), 4);
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let paths = ["artifacts", "artifacts/data_ingestion", "logs"].map(|p| dir.path().join(p));
    let logger = RecordingLogger::default();

    create_directories(&paths, true, &logger).expect("First run failed");
    let before = list_tree(dir.path());
    let report = create_directories(&paths, true, &logger).expect("Second run failed");
    let after = list_tree(dir.path());

    assert_eq!(before, after);
    assert!(report.created.is_empty());
    assert_eq!(logger.messages().len(), 6, "Verbose logs on both runs");
}

fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.expect("Failed to walk temp dir").into_path())
        .collect();
    found.sort();
    found
}
