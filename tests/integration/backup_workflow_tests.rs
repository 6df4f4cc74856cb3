/*!
 * End-to-end tests for backup export, validation and restore planning
 */

use anyhow::Result;
use chrono::NaiveDate;
use glossboard::backup::{BackupDocument, RestoreTarget, backup_file_name};
use glossboard::content::{
    DEFAULT_BASE_CONTENT_HEADER, combine_for_clipboard, find_base_content, find_prompt,
};
use glossboard::errors::BackupError;
use glossboard::file_utils::FileManager;
use crate::common;

/// Test writing a backup to disk and loading it back
#[test]
fn test_backup_exportThenInspect_shouldProducePlan() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let document = BackupDocument::new(
        vec![common::sample_prompt(1, "Explain the terms."), common::sample_prompt(2, "Quiz me.")],
        vec![common::sample_base_content(5, "Background")],
    );

    let file_name = backup_file_name(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    let path = FileManager::resolve_output_path(temp_dir.path(), &file_name, false)?;
    FileManager::write_to_file(&path, &document.to_json()?)?;
    assert!(path.ends_with("ai_info_backup_2025-01-31.json"));

    let loaded = BackupDocument::from_json(&FileManager::read_to_string(&path)?)?;
    let plan = loaded.restore_plan();

    assert_eq!(plan.requests.len(), 3);
    assert_eq!(plan.requests[0].target, RestoreTarget::Prompt);
    assert_eq!(plan.requests[2].title, "Base 5");
    assert_eq!(plan.summary(), "Data restored.\nPrompts: 2\nBase content: 1");

    // The backup can also feed the clipboard payload
    let combined = combine_for_clipboard(
        find_prompt(&loaded.prompts, 1),
        find_base_content(&loaded.base_contents, 5),
        DEFAULT_BASE_CONTENT_HEADER,
    );
    assert_eq!(combined, "Explain the terms.\n\n[기반 내용]\nBackground");
    Ok(())
}

/// Test that a backup written by the web export (server rows) loads
#[test]
fn test_backup_serverExport_shouldLoad() -> Result<()> {
    let json = r#"{
  "prompts": [
    {"id": 3, "title": "Daily", "content": "Summarize", "category": "default",
     "created_at": "2025-01-01T00:00:00"}
  ],
  "baseContents": [
    {"id": 4, "title": "Ref", "content": "Facts", "category": "notes", "created_at": "2025-01-02"}
  ],
  "exportDate": "2025-01-03T10:00:00.000Z",
  "version": "2.0"
}"#;

    let document = BackupDocument::from_json(json)?;
    assert_eq!(document.prompts[0].id, Some(3));
    assert_eq!(document.base_contents[0].category.as_deref(), Some("notes"));
    assert_eq!(document.version.as_deref(), Some("2.0"));
    Ok(())
}

/// Test that a legacy document without version metadata still loads
#[test]
fn test_backup_withoutVersion_shouldLoad() -> Result<()> {
    let json = r#"{"prompts": [{"title": "t", "content": "c"}], "baseContents": []}"#;
    let document = BackupDocument::from_json(json)?;
    assert!(document.version.is_none());
    assert_eq!(document.restore_plan().requests[0].category, "default");
    Ok(())
}

/// Test that null categories load and fall back like missing ones
#[test]
fn test_backup_nullCategory_shouldRestoreWithDefault() -> Result<()> {
    let json = r#"{
  "prompts": [{"title": "t", "content": "c", "category": null}],
  "baseContents": [{"title": "b", "content": "d", "category": null}]
}"#;

    let document = BackupDocument::from_json(json)?;
    assert!(document.prompts[0].category.is_none());

    let plan = document.restore_plan();
    assert_eq!(plan.requests[0].category, "default");
    assert_eq!(plan.requests[1].category, "default");
    assert_eq!(plan.prompt_count, 1);
    Ok(())
}

/// Test that a backup from a newer exporter is still restored
#[test]
fn test_backup_newerVersion_shouldLoad() -> Result<()> {
    let json =
        r#"{"prompts": [], "baseContents": [{"title": "b", "content": "d"}], "version": "3.1"}"#;
    let document = BackupDocument::from_json(json)?;
    assert_eq!(document.restore_plan().base_content_count, 1);
    Ok(())
}

/// Test that unrelated JSON files are rejected
#[test]
fn test_backup_unrelatedJson_shouldBeRejected() {
    common::init_test_logging();
    let err = BackupDocument::from_json(r#"{"users": []}"#).unwrap_err();
    assert!(matches!(err, BackupError::InvalidDocument(_)));
}
