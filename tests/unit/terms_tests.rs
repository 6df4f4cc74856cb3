/*!
 * Tests for the bulk term-list parser
 */

use glossboard::terms::{
    TermListParser, TermRecord, count_non_blank_lines, parse_terms, to_tab_text,
};
use crate::common;

fn record(term: &str, definition: &str) -> TermRecord {
    TermRecord::new(term, definition)
}

/// Test the documented single-line examples
#[test]
fn test_parse_documentedExamples_shouldMatchExpected() {
    assert_eq!(parse_terms(""), Vec::<TermRecord>::new());
    assert_eq!(
        parse_terms("LLM\tA large language model"),
        vec![record("LLM", "A large language model")]
    );
    assert_eq!(
        parse_terms("LLM   A large language model"),
        vec![record("LLM", "A large language model")]
    );
    assert!(parse_terms("LLM A large language model").is_empty());
    assert!(parse_terms("  \n\t\n").is_empty());
    assert!(parse_terms("Term\t").is_empty());
}

/// Test that output order follows input order, not sorting
#[test]
fn test_parse_unsortedInput_shouldKeepInsertionOrder() {
    let records = parse_terms("Zeta\tlast letter\nAlpha\tfirst letter\nMu  middle letter");
    let terms: Vec<&str> = records.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, vec!["Zeta", "Alpha", "Mu"]);
}

/// Test the mixed sample paste from the common helpers
#[test]
fn test_parse_samplePaste_shouldParseFourRecords() {
    let records = parse_terms(common::sample_glossary_paste());
    assert_eq!(
        records,
        vec![
            record("LLM", "Large language model"),
            record("Token", "Smallest unit of text a model reads"),
            record("RAG", "Retrieval  augmented generation"),
            record("Embedding", "Vector representation of text"),
        ]
    );
    assert_eq!(count_non_blank_lines(common::sample_glossary_paste()), 5);
}

/// Test that whitespace runs including tabs are handled by the tab path first
#[test]
fn test_parse_tabInsideWideGap_shouldUseTabPath() {
    let records = parse_terms("Term \t  Definition  with gaps");
    assert_eq!(records, vec![record("Term", "Definition  with gaps")]);
}

/// Test that non-ASCII text is parsed the same way
#[test]
fn test_parse_unicodeText_shouldSplitCorrectly() {
    let records = parse_terms(concat!(
        "인공지능\t사람의 지능을 모방한 기술\n",
        "머신러닝   데이터로 학습하는 방법",
    ));
    assert_eq!(
        records,
        vec![
            record("인공지능", "사람의 지능을 모방한 기술"),
            record("머신러닝", "데이터로 학습하는 방법"),
        ]
    );
}

/// Test that arbitrary junk never panics and never yields empty fields
#[test]
fn test_parse_arbitraryInput_shouldNeverEmitEmptyFields() {
    let inputs = [
        "\t\t\t",
        "   \t   ",
        "a\t\tb",
        "\n\n\n",
        "only-one-word",
        "x  ",
        "  y",
        "a\u{3000}\u{3000}b",
        "\r\n\r\n",
    ];
    for input in inputs {
        for r in parse_terms(input) {
            assert!(!r.term.trim().is_empty(), "empty term from {:?}", input);
            assert!(!r.definition.trim().is_empty(), "empty definition from {:?}", input);
        }
    }
}

/// Test that ideographic spaces count as whitespace for the gap separator
#[test]
fn test_parse_ideographicSpaces_shouldSplit() {
    assert_eq!(parse_terms("a\u{3000}\u{3000}b"), vec![record("a", "b")]);
}

/// Test round-trip stability through tab-joined text
#[test]
fn test_toTabText_roundTrip_shouldReproduceRecords() {
    let first = parse_terms(common::sample_glossary_paste());
    let text = to_tab_text(&first);
    assert_eq!(text.lines().count(), first.len());
    assert_eq!(parse_terms(&text), first);
}

/// Test that the diagnostic report never changes the records
#[test]
fn test_parseWithReport_samplePaste_shouldAgreeWithParse() {
    common::init_test_logging();
    let parser = TermListParser::new();
    let report = parser.parse_with_report(common::sample_glossary_paste());

    assert_eq!(report.records, parser.parse(common::sample_glossary_paste()));
    assert_eq!(report.non_blank_lines, 5);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_number, 4);
    assert_eq!(report.skipped[0].text, "this line has no separator");
}
