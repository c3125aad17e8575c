//! XML dictionary documents: reading the unigram/shortcut/bigram documents
//! into a [`Lexicon`](crate::dict::Lexicon) and writing a lexicon back out.
//!
//! The relation documents must be read before the unigram document, since
//! each word looks up its shortcuts and bigrams when its element closes.
//! [`read_dictionary_xml`] enforces that order.

mod assemble;
pub mod events;
pub mod format;
mod relation;
mod source;
#[cfg(test)]
mod tests;
mod unigram;
mod writer;

pub use assemble::read_dictionary_xml;
pub use format::{parse_format_toml, FormatConfigError, RelationTags, WordListTags, XmlFormat};
pub use relation::{read_relations, RelationMap, RelationReader};
pub use source::{DictionarySources, XmlSource};
pub use unigram::{read_unigrams, UnigramReader};
pub use writer::{write_dictionary_xml, write_dictionary_xml_to_path};

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::sync::Arc;

/// Error raised while reading or writing XML dictionary documents.
///
/// Every variant aborts the whole read or write; no partial lexicon is
/// returned. Use [`XmlDictError::kind`] to tell the failure classes apart.
#[derive(Debug, thiserror::Error)]
pub enum XmlDictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed document: {0}")]
    Structure(String),

    #[error("invalid integer in attribute {attr}=\"{value}\": {source}")]
    Format {
        attr: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no unigram source given")]
    MissingUnigrams,
}

/// Coarse classification of [`XmlDictError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source or sink could not be opened, read or written.
    Io,
    /// Malformed markup, unexpected nesting or a missing attribute.
    Structure,
    /// An attribute that should hold an integer does not.
    Format,
    /// The caller supplied an incomplete set of sources.
    Config,
}

impl XmlDictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Open { .. } => ErrorKind::Io,
            Self::Structure(_) => ErrorKind::Structure,
            Self::Format { .. } => ErrorKind::Format,
            Self::MissingUnigrams => ErrorKind::Config,
        }
    }
}

impl From<quick_xml::Error> for XmlDictError {
    fn from(e: quick_xml::Error) -> Self {
        match e {
            quick_xml::Error::Io(shared) => XmlDictError::Io(
                Arc::try_unwrap(shared)
                    .unwrap_or_else(|shared| io::Error::new(shared.kind(), shared.to_string())),
            ),
            other => XmlDictError::Structure(other.to_string()),
        }
    }
}
