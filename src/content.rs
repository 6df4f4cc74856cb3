/*!
 * Content items, prompts and base content.
 *
 * A content item is one titled entry with its own glossary. Bulk-pasted
 * terms are parsed with [`crate::terms`] and appended to the item's list.
 * Prompts and base content are the reusable text blocks that get combined
 * into a single clipboard payload.
 */

use serde::{Deserialize, Serialize};

use crate::terms::{TermListParser, TermRecord};

/// Label placed before the base content in a combined payload
pub const DEFAULT_BASE_CONTENT_HEADER: &str = "[기반 내용]";

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "default";

/// Which half of a term record to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermField {
    Term,
    Definition,
}

/// Outcome of a bulk term import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermImportReport {
    /// Records appended to the item
    pub parsed: usize,
    /// Non-blank lines in the pasted text
    pub non_blank_lines: usize,
}

impl TermImportReport {
    /// Lines that did not produce a record.
    pub fn skipped(&self) -> usize {
        self.non_blank_lines.saturating_sub(self.parsed)
    }

    /// Whether anything was added.
    pub fn is_success(&self) -> bool {
        self.parsed > 0
    }

    /// User-facing summary of the import.
    pub fn message(&self) -> String {
        if self.is_success() {
            format!("{} term(s) added", self.parsed)
        } else {
            "No terms could be parsed. Check the input format.".to_string()
        }
    }
}

/// A titled content entry with its glossary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub terms: Vec<TermRecord>,
}

impl ContentItem {
    /// Create an item with no terms.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            terms: Vec::new(),
        }
    }

    /// Parse pasted text and append the resulting records after the existing ones.
    ///
    /// Blank input is a no-op and reports zero lines.
    pub fn import_terms(&mut self, text: &str) -> TermImportReport {
        if text.trim().is_empty() {
            return TermImportReport { parsed: 0, non_blank_lines: 0 };
        }

        let report = TermListParser::new().parse_with_report(text);
        let parsed = report.records.len();
        self.terms.extend(report.records);

        log::debug!(
            "Imported {} of {} line(s) into '{}'",
            parsed,
            report.non_blank_lines,
            self.title
        );

        TermImportReport {
            parsed,
            non_blank_lines: report.non_blank_lines,
        }
    }

    /// Append a single record.
    pub fn add_term(&mut self, record: TermRecord) {
        self.terms.push(record);
    }

    /// Remove the record at `index`, returning it if present.
    pub fn remove_term(&mut self, index: usize) -> Option<TermRecord> {
        if index < self.terms.len() {
            Some(self.terms.remove(index))
        } else {
            None
        }
    }

    /// Replace one field of the record at `index`. Returns false if out of range.
    pub fn update_term(
        &mut self,
        index: usize,
        field: TermField,
        value: impl Into<String>,
    ) -> bool {
        let Some(record) = self.terms.get_mut(index) else {
            return false;
        };
        match field {
            TermField::Term => record.term = value.into(),
            TermField::Definition => record.definition = value.into(),
        }
        true
    }
}

/// A stored prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A stored block of base content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseContent {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Find a prompt by id.
pub fn find_prompt(prompts: &[Prompt], id: i64) -> Option<&Prompt> {
    prompts.iter().find(|p| p.id == Some(id))
}

/// Find a base content block by id.
pub fn find_base_content(bases: &[BaseContent], id: i64) -> Option<&BaseContent> {
    bases.iter().find(|b| b.id == Some(id))
}

/// Build the clipboard payload from an optional prompt and base content.
///
/// The prompt body comes first (empty if none is selected). When a base is
/// selected it follows after a blank line and the header line.
pub fn combine_for_clipboard(
    prompt: Option<&Prompt>,
    base: Option<&BaseContent>,
    header: &str,
) -> String {
    let mut combined = prompt.map(|p| p.content.clone()).unwrap_or_default();
    if let Some(base) = base {
        combined.push_str("\n\n");
        combined.push_str(header);
        combined.push('\n');
        combined.push_str(&base.content);
    }
    combined
}
