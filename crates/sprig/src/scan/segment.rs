//! Segment grammar for the placeholder scanner.
//!
//! A raw string is one left-to-right sequence of segments: literal text,
//! escaped tokens (`\${name}`, rendered without the backslash and never
//! substituted), and live tokens (`${name}`). A backslash escapes only when
//! a token immediately follows it; anywhere else it is ordinary text.

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_till, take_while};

/// One piece of a raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Verbatim text with no placeholder or escape meaning.
    Literal(String),
    /// An escaped token; carries the identifier.
    Escaped(String),
    /// A live token; carries the identifier.
    Token(String),
}

/// Split `input` into segments. Total: every string parses, anything that
/// is not token syntax comes back as literal text.
pub(crate) fn segments(input: &str) -> Vec<Segment> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<Segment>> = repeat(0.., segment).parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => segments,
        // `literal` accepts any single character, so the grammar only halts
        // at end of input; anything else degrades to plain text
        _ => vec![Segment::Literal(input.to_string())],
    }
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escaped, token, literal)).parse_next(input)
}

/// `\${name}` — the backslash escapes the token. A backslash followed by
/// anything else backtracks into `literal`.
fn escaped(input: &mut &str) -> ModalResult<Segment> {
    preceded('\\', token_name).map(Segment::Escaped).parse_next(input)
}

/// `${name}` — a live token.
fn token(input: &mut &str) -> ModalResult<Segment> {
    token_name.map(Segment::Token).parse_next(input)
}

/// A run of ordinary text: everything up to the next character that could
/// start an escape or a token, or a single such character when it turns out
/// not to start one.
fn literal(input: &mut &str) -> ModalResult<Segment> {
    alt((
        take_till(1.., ['$', '\\']).map(|s: &str| Segment::Literal(s.to_string())),
        any.map(|c: char| Segment::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// The `${identifier}` syntax; yields the identifier.
fn token_name(input: &mut &str) -> ModalResult<String> {
    delimited("${", identifier, '}').parse_next(input)
}

/// `[A-Za-z][A-Za-z0-9_-]*`, original case preserved.
fn identifier(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    )
        .map(|(first, rest): (char, &str)| {
            let mut name = String::with_capacity(1 + rest.len());
            name.push(first);
            name.push_str(rest);
            name
        })
        .parse_next(input)
}
