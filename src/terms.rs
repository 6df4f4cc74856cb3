/*!
 * Bulk term-list parsing.
 *
 * Turns a pasted block of text into ordered term/definition records.
 * Each line holds one pair, either tab separated (`term\tdefinition`)
 * or separated by a run of two or more whitespace characters
 * (`term  definition`). Lines that do not yield both halves are dropped.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Byte order mark, treated as whitespace when trimming and splitting
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Separator for the space-delimited form: two or more whitespace characters
static WIDE_GAP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\x{FEFF}]{2,}").expect("wide gap pattern is valid")
});

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermRecord {
    /// The term being defined
    pub term: String,

    /// What the term means
    #[serde(rename = "description", alias = "definition")]
    pub definition: String,
}

impl TermRecord {
    /// Create a record from already-trimmed parts.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Render the record as a single tab-separated line.
    pub fn to_tab_line(&self) -> String {
        format!("{}\t{}", self.term, self.definition)
    }
}

/// Outcome for one non-blank input line, used for optional diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced a record
    Parsed(TermRecord),
    /// The line had a tab but the term or definition beside it was empty
    EmptyTabField,
    /// The line had no tab and no whitespace run wide enough to split on
    NoSeparator,
    /// The line split on whitespace but one side was empty
    EmptySpaceField,
}

impl LineOutcome {
    /// Short reason for a skipped line, `None` if the line parsed.
    pub fn skip_reason(&self) -> Option<&'static str> {
        match self {
            LineOutcome::Parsed(_) => None,
            LineOutcome::EmptyTabField => Some("empty term or definition around tab"),
            LineOutcome::NoSeparator => Some("no tab or double-space separator"),
            LineOutcome::EmptySpaceField => Some("empty term or definition"),
        }
    }
}

/// A non-blank line that did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the input
    pub line_number: usize,
    /// The trimmed line text
    pub text: String,
    /// Why the line was dropped
    pub reason: &'static str,
}

/// Parse result with per-line diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records in input order
    pub records: Vec<TermRecord>,
    /// Non-blank lines that were dropped
    pub skipped: Vec<SkippedLine>,
    /// Number of non-blank lines seen
    pub non_blank_lines: usize,
}

/// Stateless parser for bulk term input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermListParser;

impl TermListParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a text block into records. Never fails; malformed lines are skipped.
    pub fn parse(&self, text: &str) -> Vec<TermRecord> {
        let records: Vec<TermRecord> = non_blank_lines(text)
            .filter_map(|(_, _, line)| match parse_line(line) {
                LineOutcome::Parsed(record) => Some(record),
                _ => None,
            })
            .collect();

        log::debug!("Parsed {} term record(s)", records.len());
        records
    }

    /// Parse a text block and also report which lines were dropped.
    ///
    /// The records are always identical to what [`TermListParser::parse`] returns.
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (line_number, raw, line) in non_blank_lines(text) {
            report.non_blank_lines += 1;
            // Trimming can strip the only tab from `term\t` or `\tdefinition`
            let outcome = match parse_line(line) {
                LineOutcome::NoSeparator if raw.contains('\t') => LineOutcome::EmptyTabField,
                outcome => outcome,
            };
            match outcome.skip_reason() {
                None => {
                    if let LineOutcome::Parsed(record) = outcome {
                        report.records.push(record);
                    }
                }
                Some(reason) => {
                    log::debug!("Skipping line {}: {}", line_number, reason);
                    report.skipped.push(SkippedLine {
                        line_number,
                        text: line.to_string(),
                        reason,
                    });
                }
            }
        }

        report
    }
}

/// Parse a text block with the default parser.
pub fn parse_terms(text: &str) -> Vec<TermRecord> {
    TermListParser::new().parse(text)
}

/// Join records back into tab-separated text, one record per line.
pub fn to_tab_text(records: &[TermRecord]) -> String {
    records
        .iter()
        .map(|r| r.to_tab_line())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count the lines that would be considered by the parser.
pub fn count_non_blank_lines(text: &str) -> usize {
    non_blank_lines(text).count()
}

// Yields (1-based line number, raw line, trimmed line) for every non-blank line
fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line, trim_text(line)))
        .filter(|(_, _, line)| !line.is_empty())
}

fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn parse_line(line: &str) -> LineOutcome {
    if line.contains('\t') {
        let mut fields = line.split('\t').map(trim_text);
        let term = fields.next().unwrap_or_default();
        let definition = fields.next().unwrap_or_default();
        if term.is_empty() || definition.is_empty() {
            return LineOutcome::EmptyTabField;
        }
        return LineOutcome::Parsed(TermRecord::new(term, definition));
    }

    let mut parts = WIDE_GAP_REGEX.split(line);
    let term = trim_text(parts.next().unwrap_or_default());
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return LineOutcome::NoSeparator;
    }

    let definition = rest.join(" ");
    let definition = trim_text(&definition);
    if term.is_empty() || definition.is_empty() {
        return LineOutcome::EmptySpaceField;
    }

    LineOutcome::Parsed(TermRecord::new(term, definition))
}
