use std::collections::HashMap;
use std::io::BufRead;

use super::events::{parse_document, Attributes, DocumentHandler};
use super::format::RelationTags;
use super::XmlDictError;
use crate::dict::{rescale, WeightedString};

/// Source word → weighted destinations, in document order.
///
/// A key is present only once at least one edge for it has been read.
pub type RelationMap = HashMap<String, Vec<WeightedString>>;

/// Streaming reader for a source → weighted-destination document.
///
/// Used for both the bigram document (`<bi w1=..><w w2=.. p=../></bi>`) and
/// the shortcut document (`<entry shortcut=..><target replacement=..
/// priority=../></entry>`); the names come from [`RelationTags`]. All data
/// sits in attributes, so only start tags matter. Frequencies are rescaled
/// to the in-memory range.
pub struct RelationReader<'a> {
    tags: &'a RelationTags,
    current_source: Option<String>,
    map: RelationMap,
}

impl<'a> RelationReader<'a> {
    pub fn new(tags: &'a RelationTags) -> Self {
        Self {
            tags,
            current_source: None,
            map: RelationMap::new(),
        }
    }

    pub fn into_map(self) -> RelationMap {
        self.map
    }
}

impl DocumentHandler for RelationReader<'_> {
    fn start_element(&mut self, name: &str, attrs: &Attributes) -> Result<(), XmlDictError> {
        if name == self.tags.source_tag {
            let source = attrs.require(name, &self.tags.source_attr)?;
            self.current_source = Some(source.to_string());
        } else if name == self.tags.destination_tag {
            let Some(source) = &self.current_source else {
                return Err(XmlDictError::Structure(format!(
                    "<{}> before any <{}> element",
                    self.tags.destination_tag, self.tags.source_tag
                )));
            };
            let destination = attrs.require(name, &self.tags.destination_attr)?;
            let raw = attrs.require_int(name, &self.tags.frequency_attr)?;
            self.map
                .entry(source.clone())
                .or_default()
                .push(WeightedString::new(destination, rescale(raw)));
        }
        Ok(())
    }
}

/// Read a whole relation document into a [`RelationMap`].
pub fn read_relations<R: BufRead>(
    source: R,
    tags: &RelationTags,
) -> Result<RelationMap, XmlDictError> {
    let mut reader = RelationReader::new(tags);
    parse_document(source, &mut reader)?;
    let map = reader.into_map();
    tracing::debug!(
        source_tag = %tags.source_tag,
        sources = map.len(),
        edges = map.values().map(Vec::len).sum::<usize>(),
        "read relation document"
    );
    Ok(map)
}
