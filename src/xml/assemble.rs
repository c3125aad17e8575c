use super::format::{RelationTags, XmlFormat};
use super::relation::{read_relations, RelationMap};
use super::source::{DictionarySources, XmlSource};
use super::unigram::read_unigrams;
use super::XmlDictError;
use crate::dict::Lexicon;

/// Read a dictionary from its XML documents.
///
/// Bigrams are read first, then shortcuts, then unigrams: every word looks
/// up its relations when its element closes, so both maps must be complete
/// by then. A missing relation document behaves like an empty one. Any
/// error aborts the whole read.
pub fn read_dictionary_xml(
    sources: DictionarySources<'_>,
    format: &XmlFormat,
) -> Result<Lexicon, XmlDictError> {
    let DictionarySources {
        unigrams,
        shortcuts,
        bigrams,
    } = sources;
    let unigrams = unigrams.ok_or(XmlDictError::MissingUnigrams)?;

    let bigram_map = read_optional(bigrams, &format.bigram)?;
    let shortcut_map = read_optional(shortcuts, &format.shortcut)?;

    let mut lexicon = Lexicon::new();
    let words = read_unigrams(
        unigrams.open()?,
        &format.wordlist,
        &mut lexicon,
        &shortcut_map,
        &bigram_map,
    )?;

    let stats = lexicon.stats();
    tracing::info!(
        word_elements = words,
        words = stats.words,
        shortcuts = stats.shortcuts,
        bigrams = stats.bigrams,
        "read dictionary"
    );
    Ok(lexicon)
}

fn read_optional(
    source: Option<XmlSource<'_>>,
    tags: &RelationTags,
) -> Result<RelationMap, XmlDictError> {
    match source {
        Some(source) => read_relations(source.open()?, tags),
        None => Ok(RelationMap::new()),
    }
}
