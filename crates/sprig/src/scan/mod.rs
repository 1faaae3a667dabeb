//! Tokenizer/escaper: locates `${name}` tokens and strips escapes.
//!
//! [`scan`] is a pure fold over the segment grammar. It produces a
//! normalized string (escape backslashes removed) together with the live
//! occurrences' byte positions in that string — positions in the normalized
//! output, not the raw input, which is what keeps later occurrences correct
//! after an earlier escape was dropped. Escaped tokens are emitted verbatim
//! and never recorded. The scan has no tree awareness.

mod model;
mod segment;

pub use model::{Occurrence, ScanModel, scan};
