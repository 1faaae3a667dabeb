//! Scan model: normalized text plus located token occurrences.

use serde::{Deserialize, Serialize};

use crate::scan::segment::{Segment, segments};

/// Bytes of token syntax around the identifier: `${` and `}`.
const TOKEN_SYNTAX_LEN: usize = 3;

/// One located, unescaped `${name}` occurrence in a normalized string.
///
/// Offsets are byte offsets into [`ScanModel::text`], not the raw input:
/// escape removal ahead of an occurrence shifts its location. Token syntax
/// is ASCII, so every offset falls on a UTF-8 boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The identifier between `${` and `}`, original case preserved.
    pub name: String,

    /// Byte offset of `$` in the normalized text.
    pub location: usize,

    /// Byte length of the whole token, delimiters included.
    pub length: usize,
}

/// The result of scanning a raw string: the string with escape backslashes
/// removed, and the live occurrences found in it, in position order.
///
/// Recomputed fresh for every string processed; nothing is cached across
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanModel {
    /// Normalized text. Live tokens are still present verbatim; the string
    /// resolver replaces them.
    pub text: String,

    /// Live occurrences in ascending `location` order.
    pub occurrences: Vec<Occurrence>,
}

/// Scan a raw string.
///
/// Total: any input produces a model, and malformed-looking token syntax is
/// passed through as text.
pub fn scan(raw: &str) -> ScanModel {
    let mut text = String::with_capacity(raw.len());
    let mut occurrences = Vec::new();

    for segment in segments(raw) {
        match segment {
            Segment::Literal(chunk) => text.push_str(&chunk),
            Segment::Escaped(name) => push_token(&mut text, &name),
            Segment::Token(name) => {
                occurrences.push(Occurrence {
                    location: text.len(),
                    length: name.len() + TOKEN_SYNTAX_LEN,
                    name: name.clone(),
                });
                push_token(&mut text, &name);
            }
        }
    }

    ScanModel { text, occurrences }
}

fn push_token(text: &mut String, name: &str) {
    text.push_str("${");
    text.push_str(name);
    text.push('}');
}
