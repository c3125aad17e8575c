use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::XmlDictError;

/// One input document: a file opened lazily, or an already-open reader.
///
/// A path is opened only when its read pass starts, and the handle is
/// dropped when that pass ends.
pub enum XmlSource<'a> {
    Path(PathBuf),
    Reader(Box<dyn BufRead + 'a>),
}

impl<'a> XmlSource<'a> {
    pub fn reader(reader: impl BufRead + 'a) -> Self {
        Self::Reader(Box::new(reader))
    }

    pub(super) fn open(self) -> Result<Box<dyn BufRead + 'a>, XmlDictError> {
        match self {
            Self::Path(path) => {
                let file = File::open(&path).map_err(|source| XmlDictError::Open {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "opened source");
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Reader(reader) => Ok(reader),
        }
    }
}

impl From<PathBuf> for XmlSource<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for XmlSource<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl<'a> From<&'a [u8]> for XmlSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::reader(bytes)
    }
}

impl<'a> From<&'a str> for XmlSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::reader(text.as_bytes())
    }
}

/// The three input documents of a dictionary.
///
/// The unigram document is required; the shortcut and bigram documents are
/// optional.
#[derive(Default)]
pub struct DictionarySources<'a> {
    pub(super) unigrams: Option<XmlSource<'a>>,
    pub(super) shortcuts: Option<XmlSource<'a>>,
    pub(super) bigrams: Option<XmlSource<'a>>,
}

impl<'a> DictionarySources<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unigrams(mut self, source: impl Into<XmlSource<'a>>) -> Self {
        self.unigrams = Some(source.into());
        self
    }

    pub fn shortcuts(mut self, source: impl Into<XmlSource<'a>>) -> Self {
        self.shortcuts = Some(source.into());
        self
    }

    pub fn bigrams(mut self, source: impl Into<XmlSource<'a>>) -> Self {
        self.bigrams = Some(source.into());
        self
    }

    /// Sources from optional file paths, as given on a command line.
    pub fn from_paths(
        unigrams: Option<&Path>,
        shortcuts: Option<&Path>,
        bigrams: Option<&Path>,
    ) -> Self {
        Self {
            unigrams: unigrams.map(XmlSource::from),
            shortcuts: shortcuts.map(XmlSource::from),
            bigrams: bigrams.map(XmlSource::from),
        }
    }
}
