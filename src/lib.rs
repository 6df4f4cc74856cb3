/*!
 * # glossboard
 *
 * Content tooling for an AI-info admin workflow.
 *
 * ## Features
 *
 * - Parse bulk-pasted glossaries (tab or double-space separated) into
 *   ordered term/definition records
 * - Attach parsed terms to content items and report how many were added
 * - Combine a prompt with base content into one clipboard payload
 * - Export, validate and plan restores of prompt/base-content backups
 *
 * ## Architecture
 *
 * - `terms`: The bulk term-list parser
 * - `content`: Content items, prompts, base content and payload combination
 * - `backup`: Backup document format and restore planning
 * - `app_config`: Configuration management
 * - `file_utils`: File and stdin helpers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod backup;
pub mod content;
pub mod errors;
pub mod file_utils;
pub mod terms;

// Re-export main types for easier usage
pub use app_config::Config;
pub use backup::{BackupDocument, RestorePlan};
pub use content::{BaseContent, ContentItem, Prompt, TermImportReport, combine_for_clipboard};
pub use errors::{BackupError, ConfigError};
pub use terms::{TermListParser, TermRecord, parse_terms, to_tab_text};
