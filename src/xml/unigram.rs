use std::io::BufRead;
use std::mem;

use super::events::{parse_document, Attributes, DocumentHandler};
use super::format::WordListTags;
use super::relation::RelationMap;
use super::XmlDictError;
use crate::dict::{Lexicon, WeightedString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ready for the next word element.
    Start,
    /// Inside a word element, accumulating its text.
    Word,
    /// Inside a shortcut or bigram element nested in a word element.
    Inline(InlineKind),
    /// Inside an element that is not a word; ignored.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineKind {
    Shortcut,
    Bigram,
}

#[derive(Default)]
struct PendingWord {
    text: String,
    word_attr: Option<String>,
    frequency: i32,
    shortcuts: Option<Vec<WeightedString>>,
    bigrams: Option<Vec<WeightedString>>,
}

/// Streaming reader for the unigram document.
///
/// Each closed word element is added to the lexicon together with the
/// shortcut and bigram lists the relation maps hold for exactly that text.
/// The maps must therefore be complete before this reader runs.
///
/// The combined document written by
/// [`write_dictionary_xml`](super::write_dictionary_xml) is accepted as
/// well: a `word` attribute takes precedence over the element text, and
/// nested shortcut/bigram elements (already on the in-memory scale) are
/// appended to the relation-map lists.
pub struct UnigramReader<'a> {
    tags: &'a WordListTags,
    lexicon: &'a mut Lexicon,
    shortcuts: &'a RelationMap,
    bigrams: &'a RelationMap,
    state: State,
    pending: PendingWord,
    inline_frequency: i32,
    inline_text: String,
    words_read: usize,
}

impl<'a> UnigramReader<'a> {
    pub fn new(
        tags: &'a WordListTags,
        lexicon: &'a mut Lexicon,
        shortcuts: &'a RelationMap,
        bigrams: &'a RelationMap,
    ) -> Self {
        Self {
            tags,
            lexicon,
            shortcuts,
            bigrams,
            state: State::Start,
            pending: PendingWord::default(),
            inline_frequency: 0,
            inline_text: String::new(),
            words_read: 0,
        }
    }

    /// Number of word elements added so far.
    pub fn words_read(&self) -> usize {
        self.words_read
    }

    fn inline_tag(&self, kind: InlineKind) -> &str {
        match kind {
            InlineKind::Shortcut => &self.tags.shortcut_tag,
            InlineKind::Bigram => &self.tags.bigram_tag,
        }
    }

    fn finish_word(&mut self) -> Result<(), XmlDictError> {
        let pending = mem::take(&mut self.pending);
        let word = pending.word_attr.unwrap_or(pending.text);
        if word.is_empty() {
            return Err(XmlDictError::Structure(format!(
                "<{}> element without text",
                self.tags.word_tag
            )));
        }
        let shortcuts = with_inline(self.shortcuts.get(&word), pending.shortcuts);
        let bigrams = with_inline(self.bigrams.get(&word), pending.bigrams);
        self.lexicon.add(word, pending.frequency, shortcuts, bigrams);
        self.words_read += 1;
        Ok(())
    }

    fn finish_inline(&mut self, kind: InlineKind) {
        let target = WeightedString::new(mem::take(&mut self.inline_text), self.inline_frequency);
        let list = match kind {
            InlineKind::Shortcut => &mut self.pending.shortcuts,
            InlineKind::Bigram => &mut self.pending.bigrams,
        };
        list.get_or_insert_with(Vec::new).push(target);
    }
}

/// Relation-map list followed by inline entries; absent only if both are.
fn with_inline(
    from_map: Option<&Vec<WeightedString>>,
    inline: Option<Vec<WeightedString>>,
) -> Option<Vec<WeightedString>> {
    if from_map.is_none() && inline.is_none() {
        return None;
    }
    let mut list = from_map.cloned().unwrap_or_default();
    list.extend(inline.into_iter().flatten());
    Some(list)
}

impl DocumentHandler for UnigramReader<'_> {
    fn start_element(&mut self, name: &str, attrs: &Attributes) -> Result<(), XmlDictError> {
        match self.state {
            State::Start | State::Unknown => {
                if name == self.tags.word_tag {
                    let frequency = attrs.require_int(name, &self.tags.frequency_attr)?;
                    self.pending = PendingWord {
                        frequency,
                        word_attr: attrs.get(&self.tags.word_attr).map(str::to_string),
                        ..PendingWord::default()
                    };
                    self.state = State::Word;
                } else {
                    self.state = State::Unknown;
                }
            }
            State::Word => {
                let kind = if name == self.tags.shortcut_tag {
                    InlineKind::Shortcut
                } else if name == self.tags.bigram_tag {
                    InlineKind::Bigram
                } else {
                    return Err(XmlDictError::Structure(format!(
                        "unexpected <{name}> inside <{}>",
                        self.tags.word_tag
                    )));
                };
                self.inline_frequency = attrs.require_int(name, &self.tags.frequency_attr)?;
                self.inline_text.clear();
                self.state = State::Inline(kind);
            }
            State::Inline(kind) => {
                return Err(XmlDictError::Structure(format!(
                    "unexpected <{name}> inside <{}>",
                    self.inline_tag(kind)
                )));
            }
        }
        Ok(())
    }

    fn characters(&mut self, text: &str) -> Result<(), XmlDictError> {
        // Text may arrive in several chunks, e.g. around a CDATA section.
        match self.state {
            State::Word => self.pending.text.push_str(text),
            State::Inline(_) => self.inline_text.push_str(text),
            State::Start | State::Unknown => {}
        }
        Ok(())
    }

    fn end_element(&mut self, _name: &str) -> Result<(), XmlDictError> {
        match self.state {
            State::Word => {
                self.finish_word()?;
                self.state = State::Start;
            }
            State::Inline(kind) => {
                self.finish_inline(kind);
                self.state = State::Word;
            }
            State::Unknown => self.state = State::Start,
            State::Start => {}
        }
        Ok(())
    }
}

/// Read a unigram document into `lexicon`, returning the number of word
/// elements read.
pub fn read_unigrams<R: BufRead>(
    source: R,
    tags: &WordListTags,
    lexicon: &mut Lexicon,
    shortcuts: &RelationMap,
    bigrams: &RelationMap,
) -> Result<usize, XmlDictError> {
    let mut reader = UnigramReader::new(tags, lexicon, shortcuts, bigrams);
    parse_document(source, &mut reader)?;
    Ok(reader.words_read())
}
