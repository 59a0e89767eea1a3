/*!
 * Tests for staging folder utilities
 */

use anyhow::Result;
use std::fs;
use std::time::{Duration, SystemTime};

use crate::common;
use otioflow::file_utils::FileManager;

/// file_exists distinguishes files from directories and absences
#[test]
fn test_file_exists_withFileDirAndMissing_shouldOnlyMatchFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "present.otio", "{}")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("absent.otio")));
    Ok(())
}

/// dir_exists distinguishes directories from files and absences
#[test]
fn test_dir_exists_withDirFileAndMissing_shouldOnlyMatchDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "present.otio", "{}")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    assert!(!FileManager::dir_exists(temp_dir.path().join("absent")));
    Ok(())
}

/// Clearing an already-empty directory succeeds with zero deletions
#[test]
fn test_clear_directory_withEmptyDir_shouldReportZeroDeletions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let deleted = FileManager::clear_directory(temp_dir.path())?;

    assert_eq!(deleted, 0);
    Ok(())
}

/// Clearing deletes exactly the regular files and leaves subdirectories untouched
#[test]
fn test_clear_directory_withFilesAndSubdirs_shouldOnlyDeleteFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.otio", "{}")?;
    common::create_test_file(temp_dir.path(), "b.json", "{}")?;
    common::create_test_file(temp_dir.path(), "c.txt", "notes")?;

    let subdir = temp_dir.path().join("keep");
    fs::create_dir(&subdir)?;
    common::create_test_file(&subdir, "nested.otio", "{}")?;

    let deleted = FileManager::clear_directory(temp_dir.path())?;

    assert_eq!(deleted, 3);
    assert!(subdir.is_dir());
    assert!(subdir.join("nested.otio").is_file());
    Ok(())
}

/// Clearing a directory twice is harmless
#[test]
fn test_clear_directory_calledTwice_shouldSucceedBothTimes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.json", "{}")?;

    assert_eq!(FileManager::clear_directory(temp_dir.path())?, 1);
    assert_eq!(FileManager::clear_directory(temp_dir.path())?, 0);
    Ok(())
}

/// Clearing a missing directory is an error
#[test]
fn test_clear_directory_withMissingDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("does_not_exist");

    assert!(FileManager::clear_directory(&missing).is_err());
    Ok(())
}

/// find_files matches by extension, case-insensitively, at the top level only
#[test]
fn test_find_files_withMixedContents_shouldMatchExtensionAtTopLevel() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "one.otio", "{}")?;
    common::create_test_file(temp_dir.path(), "two.OTIO", "{}")?;
    common::create_test_file(temp_dir.path(), "three.json", "{}")?;

    let subdir = temp_dir.path().join("nested");
    fs::create_dir(&subdir)?;
    common::create_test_file(&subdir, "deep.otio", "{}")?;

    let mut found = FileManager::find_files(temp_dir.path(), "otio")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|path| path.parent() == Some(temp_dir.path())));
    Ok(())
}

/// A leading dot on the extension is accepted too
#[test]
fn test_find_files_withDottedExtension_shouldMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "one.json", "{}")?;

    let found = FileManager::find_files(temp_dir.path(), ".json")?;

    assert_eq!(found.len(), 1);
    Ok(())
}

/// newest_file selects the most recently modified path
#[test]
fn test_newest_file_withDistinctMtimes_shouldPickNewest() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let older = common::create_test_file(temp_dir.path(), "older.json", "{}")?;
    let newer = common::create_test_file(temp_dir.path(), "newer.json", "{}")?;

    let now = SystemTime::now();
    common::set_file_mtime(&older, now - Duration::from_secs(3600))?;
    common::set_file_mtime(&newer, now)?;

    let picked = FileManager::newest_file(&[older, newer.clone()]);

    assert_eq!(picked, Some(newer));
    Ok(())
}

/// newest_file on an empty list yields nothing
#[test]
fn test_newest_file_withEmptyList_shouldReturnNone() {
    assert_eq!(FileManager::newest_file(&[]), None);
}

/// ensure_dir creates missing parents and tolerates existing dirs
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAndBeIdempotent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("data").join("timelineprocessing");

    FileManager::ensure_dir(&nested)?;
    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// dir_status reports name, size and mtime per regular file
#[test]
fn test_dir_status_withFiles_shouldReportEachFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "timeline.json", "{\"a\":1}")?;
    fs::create_dir(temp_dir.path().join("subdir"))?;

    let status = FileManager::dir_status(temp_dir.path())?;

    assert_eq!(status.file_count, 1);
    assert_eq!(status.files.len(), 1);
    assert_eq!(status.files[0].name, "timeline.json");
    assert_eq!(status.files[0].size, 7);
    assert!(status.files[0].modified > 0);
    Ok(())
}
