//! Integration tests for the tokenizer/escaper.

use sprig::{Occurrence, scan};

// =============================================================================
// Plain text
// =============================================================================

#[test]
fn plain_text_is_identity() {
    let model = scan("nothing to see here");
    assert_eq!(model.text, "nothing to see here");
    assert!(model.occurrences.is_empty());
}

#[test]
fn empty_string() {
    let model = scan("");
    assert_eq!(model.text, "");
    assert!(model.occurrences.is_empty());
}

// =============================================================================
// Live tokens
// =============================================================================

#[test]
fn locates_a_single_token() {
    let model = scan("lang is ${lang}!");
    assert_eq!(model.text, "lang is ${lang}!");
    assert_eq!(
        model.occurrences,
        vec![Occurrence {
            name: "lang".to_string(),
            location: 8,
            length: 7,
        }]
    );
}

#[test]
fn adjacent_tokens_scan_independently() {
    let model = scan("${a}${b}");
    assert_eq!(model.text, "${a}${b}");
    assert_eq!(
        model.occurrences,
        vec![
            Occurrence {
                name: "a".to_string(),
                location: 0,
                length: 4,
            },
            Occurrence {
                name: "b".to_string(),
                location: 4,
                length: 4,
            },
        ]
    );
}

#[test]
fn identifier_case_and_charset_are_preserved() {
    let model = scan("${Lang} ${a-b_c1}");
    let names: Vec<&str> = model.occurrences.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Lang", "a-b_c1"]);
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn escape_removes_the_backslash_and_suppresses_the_token() {
    let model = scan(r"\${lang}");
    assert_eq!(model.text, "${lang}");
    assert!(model.occurrences.is_empty());
}

#[test]
fn offsets_account_for_removed_escapes() {
    let model = scan(r"\${a} ${b}");
    assert_eq!(model.text, "${a} ${b}");
    assert_eq!(
        model.occurrences,
        vec![Occurrence {
            name: "b".to_string(),
            location: 5,
            length: 4,
        }]
    );
}

#[test]
fn backslash_not_followed_by_a_token_is_ordinary_text() {
    let model = scan(r"a \ b \x ${c}");
    assert_eq!(model.text, r"a \ b \x ${c}");
    assert_eq!(
        model.occurrences,
        vec![Occurrence {
            name: "c".to_string(),
            location: 9,
            length: 4,
        }]
    );
}

#[test]
fn double_backslash_escapes_only_the_token() {
    let model = scan(r"\\${a}");
    assert_eq!(model.text, r"\${a}");
    assert!(model.occurrences.is_empty());
}

// =============================================================================
// Malformed-looking syntax
// =============================================================================

#[test]
fn non_identifier_tokens_pass_through() {
    let model = scan("${0} ${1:foo} ${bar}");
    assert_eq!(model.text, "${0} ${1:foo} ${bar}");
    assert_eq!(
        model.occurrences,
        vec![Occurrence {
            name: "bar".to_string(),
            location: 14,
            length: 6,
        }]
    );
}

#[test]
fn unterminated_token_is_text() {
    let model = scan("${lang");
    assert_eq!(model.text, "${lang");
    assert!(model.occurrences.is_empty());
}

#[test]
fn lone_dollar_and_braces_are_text() {
    let model = scan("cost: $5 {braces}");
    assert_eq!(model.text, "cost: $5 {braces}");
    assert!(model.occurrences.is_empty());
}
