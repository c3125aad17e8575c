//! Conversion between the XML dictionary documents of a predictive-text
//! engine and its in-memory lexicon.
//!
//! ```no_run
//! use lex_makedict::xml::{read_dictionary_xml, write_dictionary_xml, DictionarySources, XmlFormat};
//!
//! # fn main() -> Result<(), lex_makedict::xml::XmlDictError> {
//! let format = XmlFormat::new();
//! let sources = DictionarySources::new()
//!     .unigrams(std::path::Path::new("words.xml"))
//!     .shortcuts(std::path::Path::new("shortcuts.xml"))
//!     .bigrams(std::path::Path::new("bigrams.xml"));
//! let lexicon = read_dictionary_xml(sources, &format)?;
//! write_dictionary_xml(std::io::stdout().lock(), &lexicon, &format)?;
//! # Ok(())
//! # }
//! ```

pub mod dict;
pub mod trace_init;
pub mod xml;
