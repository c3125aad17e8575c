//! In-memory lexicon model.
//!
//! `Lexicon` stores word → `Word` entries, each with a frequency and
//! optional shortcut and bigram lists of `WeightedString`s.

mod entry;
mod lexicon;

pub use entry::{WeightedString, Word};
pub use lexicon::{Lexicon, LexiconStats};

/// Upper bound of relation frequencies in the XML documents.
pub const XML_MAX: i32 = 256;
/// Upper bound of relation frequencies in memory.
pub const MEMORY_MAX: i32 = 16;
const XML_TO_MEMORY_RATIO: i32 = XML_MAX / MEMORY_MAX;

/// Convert a relation frequency from the XML scale (0..256) to the
/// in-memory scale (0..16) by floor division.
///
/// Unigram frequencies are never rescaled.
pub fn rescale(raw: i32) -> i32 {
    raw.div_euclid(XML_TO_MEMORY_RATIO)
}
