use std::collections::HashMap;

use super::{WeightedString, Word};

/// Collection of [`Word`] entries keyed by their text.
///
/// Iteration order is unspecified; use [`Lexicon::sorted_words`] for the
/// deterministic order the serializer writes in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashMap<String, Word>,
}

/// Entry counts reported by [`Lexicon::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconStats {
    pub words: usize,
    pub shortcuts: usize,
    pub bigrams: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, or update it if the text is already present.
    ///
    /// On update the frequency becomes the larger of the two, and each
    /// supplied relation list is merged into the existing one: entries with
    /// a known text take the new frequency, unknown ones are appended.
    /// `None` leaves the existing list as it is.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        frequency: i32,
        shortcut_targets: Option<Vec<WeightedString>>,
        bigrams: Option<Vec<WeightedString>>,
    ) {
        let word = word.into();
        match self.words.get_mut(&word) {
            Some(existing) => {
                tracing::debug!(word = %existing.word, "updating existing word");
                existing.frequency = existing.frequency.max(frequency);
                merge_relations(&mut existing.shortcut_targets, shortcut_targets);
                merge_relations(&mut existing.bigrams, bigrams);
            }
            None => {
                self.words.insert(
                    word.clone(),
                    Word {
                        word,
                        frequency,
                        shortcut_targets,
                        bigrams,
                    },
                );
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Word> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words ordered by text (byte-wise UTF-8, i.e. by code point).
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.values().collect();
        words.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        words
    }

    pub fn stats(&self) -> LexiconStats {
        let count = |list: &Option<Vec<WeightedString>>| list.as_ref().map_or(0, Vec::len);
        self.words.values().fold(
            LexiconStats {
                words: self.words.len(),
                ..LexiconStats::default()
            },
            |mut stats, w| {
                stats.shortcuts += count(&w.shortcut_targets);
                stats.bigrams += count(&w.bigrams);
                stats
            },
        )
    }
}

fn merge_relations(
    existing: &mut Option<Vec<WeightedString>>,
    incoming: Option<Vec<WeightedString>>,
) {
    let Some(incoming) = incoming else {
        return;
    };
    match existing {
        Some(list) => {
            for target in incoming {
                match list.iter_mut().find(|t| t.word == target.word) {
                    Some(known) => known.frequency = target.frequency,
                    None => list.push(target),
                }
            }
        }
        None => *existing = Some(incoming),
    }
}
