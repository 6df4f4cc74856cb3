/*!
 * Backup documents for prompts and base content.
 *
 * The export is a pretty-printed JSON object holding both collections, an
 * export timestamp and a format version. A restore re-creates every entry,
 * so [`BackupDocument::restore_plan`] lists the create requests it implies.
 */

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{BaseContent, DEFAULT_CATEGORY, Prompt};
use crate::errors::BackupError;

/// Version written into new backups
pub const BACKUP_FORMAT_VERSION: &str = "2.0";

/// A full backup of prompts and base content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub prompts: Vec<Prompt>,
    pub base_contents: Vec<BaseContent>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Which collection a restore request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreTarget {
    Prompt,
    BaseContent,
}

/// One create request issued during a restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreRequest {
    pub target: RestoreTarget,
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Everything a restore would create, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestorePlan {
    pub requests: Vec<RestoreRequest>,
    pub prompt_count: usize,
    pub base_content_count: usize,
}

impl RestorePlan {
    /// Summary shown after a successful restore.
    pub fn summary(&self) -> String {
        format!(
            "Data restored.\nPrompts: {}\nBase content: {}",
            self.prompt_count, self.base_content_count
        )
    }
}

impl BackupDocument {
    /// Create a backup stamped with the current time and format version.
    pub fn new(prompts: Vec<Prompt>, base_contents: Vec<BaseContent>) -> Self {
        Self::with_export_date(prompts, base_contents, Utc::now())
    }

    /// Create a backup with an explicit export timestamp.
    pub fn with_export_date(
        prompts: Vec<Prompt>,
        base_contents: Vec<BaseContent>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prompts,
            base_contents,
            export_date: Some(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            version: Some(BACKUP_FORMAT_VERSION.to_string()),
        }
    }

    /// Override the format version stamped on this document.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Serialize as pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a backup document.
    ///
    /// Both `prompts` and `baseContents` must be present as arrays. The version
    /// is informational: unknown versions are logged and still loaded.
    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        let value: Value = serde_json::from_str(json)?;

        for key in ["prompts", "baseContents"] {
            match value.get(key) {
                Some(Value::Array(_)) => {}
                Some(_) => {
                    return Err(BackupError::InvalidDocument(format!(
                        "'{}' must be an array",
                        key
                    )));
                }
                None => {
                    log::warn!("Backup document rejected: missing '{}'", key);
                    return Err(BackupError::InvalidDocument(format!(
                        "missing '{}'",
                        key
                    )));
                }
            }
        }

        let document: BackupDocument = serde_json::from_value(value)?;
        if let Some(version) = document.version.as_deref() {
            if !is_known_version(version) {
                log::warn!(
                    "Backup version {} is newer than {}, loading anyway",
                    version,
                    BACKUP_FORMAT_VERSION
                );
            }
        }

        Ok(document)
    }

    /// The create requests a restore would issue: prompts first, then base content.
    pub fn restore_plan(&self) -> RestorePlan {
        self.restore_plan_with_category(DEFAULT_CATEGORY)
    }

    /// Same as [`BackupDocument::restore_plan`] with a custom fallback category.
    pub fn restore_plan_with_category(&self, fallback: &str) -> RestorePlan {
        let prompts = self.prompts.iter().map(|p| RestoreRequest {
            target: RestoreTarget::Prompt,
            title: p.title.clone(),
            content: p.content.clone(),
            category: category_or(p.category.as_deref(), fallback),
        });
        let bases = self.base_contents.iter().map(|b| RestoreRequest {
            target: RestoreTarget::BaseContent,
            title: b.title.clone(),
            content: b.content.clone(),
            category: category_or(b.category.as_deref(), fallback),
        });

        RestorePlan {
            requests: prompts.chain(bases).collect(),
            prompt_count: self.prompts.len(),
            base_content_count: self.base_contents.len(),
        }
    }
}

/// File name used when saving a backup exported on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("ai_info_backup_{}.json", date.format("%Y-%m-%d"))
}

fn is_known_version(version: &str) -> bool {
    matches!(version.split('.').next(), Some("1") | Some("2"))
}

// Missing, null and blank categories all fall back
fn category_or(category: Option<&str>, fallback: &str) -> String {
    match category {
        Some(category) if !category.trim().is_empty() => category.to_string(),
        _ => fallback.to_string(),
    }
}
