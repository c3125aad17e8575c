use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::format::{WordListTags, XmlFormat};
use super::XmlDictError;
use crate::dict::{Lexicon, WeightedString};

/// Write `dict` as a combined (format "2") XML document.
///
/// Words are written in ascending text order, each followed by its shortcut
/// and bigram elements when those lists are present. Text is written
/// verbatim; no XML escaping is applied. The sink is consumed, so it is
/// flushed and released exactly once whether or not writing succeeds.
pub fn write_dictionary_xml<W: Write>(
    mut destination: W,
    dict: &Lexicon,
    format: &XmlFormat,
) -> Result<(), XmlDictError> {
    let tags = &format.wordlist;
    let words = dict.sorted_words();

    writeln!(
        destination,
        "<{} format=\"{}\">",
        tags.root_tag, tags.format_version
    )?;
    for word in &words {
        warn_unescaped(&word.word);
        write!(
            destination,
            "  <{tag} {word_attr}=\"{text}\" {freq_attr}=\"{freq}\">",
            tag = tags.word_tag,
            word_attr = tags.word_attr,
            text = word.word,
            freq_attr = tags.frequency_attr,
            freq = word.frequency,
        )?;
        if let Some(targets) = &word.shortcut_targets {
            write_relation_list(&mut destination, tags, &tags.shortcut_tag, targets)?;
        }
        if let Some(bigrams) = &word.bigrams {
            write_relation_list(&mut destination, tags, &tags.bigram_tag, bigrams)?;
        }
        writeln!(destination, "</{}>", tags.word_tag)?;
    }
    writeln!(destination, "</{}>", tags.root_tag)?;
    destination.flush()?;

    tracing::debug!(words = words.len(), "wrote dictionary");
    Ok(())
}

fn write_relation_list<W: Write>(
    destination: &mut W,
    tags: &WordListTags,
    tag: &str,
    list: &[WeightedString],
) -> Result<(), XmlDictError> {
    writeln!(destination)?;
    for target in list {
        warn_unescaped(&target.word);
        writeln!(
            destination,
            "    <{tag} {freq_attr}=\"{freq}\">{text}</{tag}>",
            freq_attr = tags.frequency_attr,
            freq = target.frequency,
            text = target.word,
        )?;
    }
    write!(destination, "  ")?;
    Ok(())
}

fn warn_unescaped(text: &str) {
    if text.contains(['<', '>', '&', '"']) {
        tracing::warn!(text, "writing markup characters without escaping");
    }
}

/// Write `dict` to a new file at `path` (see [`write_dictionary_xml`]).
pub fn write_dictionary_xml_to_path(
    path: &Path,
    dict: &Lexicon,
    format: &XmlFormat,
) -> Result<(), XmlDictError> {
    let file = File::create(path).map_err(|source| XmlDictError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_dictionary_xml(BufWriter::new(file), dict, format)
}
