/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use glossboard::file_utils::FileManager;
use crate::common;

/// Test that read_input reads regular files
#[test]
fn test_read_input_withFilePath_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "terms.txt", "A\tB")?;

    assert_eq!(FileManager::read_input(&file)?, "A\tB");
    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("out.json");

    FileManager::write_to_file(&target, "{}")?;

    assert_eq!(fs::read_to_string(&target)?, "{}");
    Ok(())
}

/// Test that existing outputs are protected unless forced
#[test]
fn test_resolve_output_path_withExistingFile_shouldRequireForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "backup.json", "{}")?;

    assert!(FileManager::resolve_output_path(temp_dir.path(), "backup.json", false).is_err());
    let forced = FileManager::resolve_output_path(temp_dir.path(), "backup.json", true)?;
    assert_eq!(forced, temp_dir.path().join("backup.json"));

    let fresh = FileManager::resolve_output_path(temp_dir.path(), "new.json", false)?;
    assert!(!Path::new(&fresh).exists());
    Ok(())
}

/// Test that reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let err = FileManager::read_to_string("definitely_missing_12345.txt").unwrap_err();
    assert!(format!("{}", err).contains("Failed to read file"));
}
