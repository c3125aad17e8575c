/// A target string with its own frequency.
///
/// Used both as a shortcut target and as a bigram successor. Frequencies
/// are on the internal scale (see [`rescale`](crate::dict::rescale)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedString {
    pub word: String,
    pub frequency: i32,
}

impl WeightedString {
    pub fn new(word: impl Into<String>, frequency: i32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// One lexicon entry, keyed by `word` within a [`Lexicon`](crate::dict::Lexicon).
///
/// `None` relation lists mean "no relation for this word" and are kept
/// distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub frequency: i32,
    pub shortcut_targets: Option<Vec<WeightedString>>,
    pub bigrams: Option<Vec<WeightedString>>,
}
