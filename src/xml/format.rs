//! Tag and attribute names used by the readers and the serializer.
//!
//! The defaults are compile-time constants; a TOML document can override
//! any subset of them (see `default_format.toml` for the full layout).

use serde::Deserialize;

pub const DEFAULT_FORMAT_TOML: &str = include_str!("default_format.toml");

pub const ROOT_TAG: &str = "wordlist";
pub const FORMAT_VERSION: &str = "2";
pub const WORD_TAG: &str = "w";
pub const WORD_ATTR: &str = "word";
pub const FREQUENCY_ATTR: &str = "f";
pub const SHORTCUT_TAG: &str = "shortcut";
pub const BIGRAM_TAG: &str = "bigram";

const BIGRAM_W1_TAG: &str = "bi";
const BIGRAM_W1_ATTR: &str = "w1";
const BIGRAM_W2_TAG: &str = "w";
const BIGRAM_W2_ATTR: &str = "w2";
const BIGRAM_FREQ_ATTR: &str = "p";

const ENTRY_TAG: &str = "entry";
const ENTRY_ATTR: &str = "shortcut";
const TARGET_TAG: &str = "target";
const REPLACEMENT_ATTR: &str = "replacement";
const TARGET_PRIORITY_ATTR: &str = "priority";

#[derive(Debug, thiserror::Error)]
pub enum FormatConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Names for every tag and attribute the dictionary documents use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFormat {
    pub wordlist: WordListTags,
    pub bigram: RelationTags,
    pub shortcut: RelationTags,
}

/// Names used by the unigram document and the combined output document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordListTags {
    pub root_tag: String,
    pub format_version: String,
    pub word_tag: String,
    pub word_attr: String,
    pub frequency_attr: String,
    pub shortcut_tag: String,
    pub bigram_tag: String,
}

impl Default for WordListTags {
    fn default() -> Self {
        Self {
            root_tag: ROOT_TAG.to_string(),
            format_version: FORMAT_VERSION.to_string(),
            word_tag: WORD_TAG.to_string(),
            word_attr: WORD_ATTR.to_string(),
            frequency_attr: FREQUENCY_ATTR.to_string(),
            shortcut_tag: SHORTCUT_TAG.to_string(),
            bigram_tag: BIGRAM_TAG.to_string(),
        }
    }
}

/// Names describing one source → weighted-destination relation document.
///
/// Source elements carry the source word in `source_attr`; destination
/// elements carry the destination word in `destination_attr` and the raw
/// frequency in `frequency_attr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTags {
    pub source_tag: String,
    pub source_attr: String,
    pub destination_tag: String,
    pub destination_attr: String,
    pub frequency_attr: String,
}

impl RelationTags {
    pub fn bigrams() -> Self {
        Self::new(
            BIGRAM_W1_TAG,
            BIGRAM_W1_ATTR,
            BIGRAM_W2_TAG,
            BIGRAM_W2_ATTR,
            BIGRAM_FREQ_ATTR,
        )
    }

    pub fn shortcuts() -> Self {
        Self::new(
            ENTRY_TAG,
            ENTRY_ATTR,
            TARGET_TAG,
            REPLACEMENT_ATTR,
            TARGET_PRIORITY_ATTR,
        )
    }

    fn new(
        source_tag: &str,
        source_attr: &str,
        destination_tag: &str,
        destination_attr: &str,
        frequency_attr: &str,
    ) -> Self {
        Self {
            source_tag: source_tag.to_string(),
            source_attr: source_attr.to_string(),
            destination_tag: destination_tag.to_string(),
            destination_attr: destination_attr.to_string(),
            frequency_attr: frequency_attr.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFormat {
    #[serde(default)]
    wordlist: WordListTags,
    bigram: Option<RawRelationTags>,
    shortcut: Option<RawRelationTags>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRelationTags {
    source_tag: Option<String>,
    source_attr: Option<String>,
    destination_tag: Option<String>,
    destination_attr: Option<String>,
    frequency_attr: Option<String>,
}

impl RawRelationTags {
    fn over(self, base: RelationTags) -> RelationTags {
        RelationTags {
            source_tag: self.source_tag.unwrap_or(base.source_tag),
            source_attr: self.source_attr.unwrap_or(base.source_attr),
            destination_tag: self.destination_tag.unwrap_or(base.destination_tag),
            destination_attr: self.destination_attr.unwrap_or(base.destination_attr),
            frequency_attr: self.frequency_attr.unwrap_or(base.frequency_attr),
        }
    }
}

impl XmlFormat {
    pub fn new() -> Self {
        Self {
            wordlist: WordListTags::default(),
            bigram: RelationTags::bigrams(),
            shortcut: RelationTags::shortcuts(),
        }
    }
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the embedded default format TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_FORMAT_TOML
}

/// Parse a (possibly partial) format TOML. Missing keys keep their defaults.
pub fn parse_format_toml(toml_str: &str) -> Result<XmlFormat, FormatConfigError> {
    let raw: RawFormat =
        toml::from_str(toml_str).map_err(|e| FormatConfigError::Parse(e.to_string()))?;
    let format = XmlFormat {
        wordlist: raw.wordlist,
        bigram: raw
            .bigram
            .map_or_else(RelationTags::bigrams, |b| b.over(RelationTags::bigrams())),
        shortcut: raw
            .shortcut
            .map_or_else(RelationTags::shortcuts, |s| s.over(RelationTags::shortcuts())),
    };
    validate(&format)?;
    Ok(format)
}

fn validate(format: &XmlFormat) -> Result<(), FormatConfigError> {
    let w = &format.wordlist;
    for (field, value) in [
        ("wordlist.root_tag", &w.root_tag),
        ("wordlist.word_tag", &w.word_tag),
        ("wordlist.word_attr", &w.word_attr),
        ("wordlist.frequency_attr", &w.frequency_attr),
        ("wordlist.shortcut_tag", &w.shortcut_tag),
        ("wordlist.bigram_tag", &w.bigram_tag),
    ] {
        check_name(field, value)?;
    }
    if w.format_version.is_empty() {
        return Err(invalid("wordlist.format_version", "must not be empty"));
    }
    if w.shortcut_tag == w.bigram_tag {
        return Err(invalid("wordlist.bigram_tag", "must differ from shortcut_tag"));
    }
    if w.word_tag == w.shortcut_tag || w.word_tag == w.bigram_tag {
        return Err(invalid(
            "wordlist.word_tag",
            "must differ from shortcut_tag and bigram_tag",
        ));
    }

    for (section, tags) in [("bigram", &format.bigram), ("shortcut", &format.shortcut)] {
        for (field, value) in [
            ("source_tag", &tags.source_tag),
            ("source_attr", &tags.source_attr),
            ("destination_tag", &tags.destination_tag),
            ("destination_attr", &tags.destination_attr),
            ("frequency_attr", &tags.frequency_attr),
        ] {
            check_name(&format!("{section}.{field}"), value)?;
        }
        if tags.source_tag == tags.destination_tag {
            return Err(invalid(
                &format!("{section}.destination_tag"),
                "must differ from source_tag",
            ));
        }
    }

    Ok(())
}

fn check_name(field: &str, value: &str) -> Result<(), FormatConfigError> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if value.chars().any(|c| c.is_whitespace() || "<>&\"'=/".contains(c)) {
        return Err(invalid(field, "must be a plain XML name"));
    }
    Ok(())
}

fn invalid(field: &str, reason: &str) -> FormatConfigError {
    FormatConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let format = parse_format_toml(DEFAULT_FORMAT_TOML).unwrap();
        assert_eq!(format, XmlFormat::new());
    }

    #[test]
    fn defaults_match_documents() {
        let format = XmlFormat::new();
        assert_eq!(format.wordlist.word_tag, "w");
        assert_eq!(format.wordlist.frequency_attr, "f");
        assert_eq!(format.bigram.source_tag, "bi");
        assert_eq!(format.bigram.destination_attr, "w2");
        assert_eq!(format.shortcut.source_attr, "shortcut");
        assert_eq!(format.shortcut.frequency_attr, "priority");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let toml = r#"
[wordlist]
word_tag = "word"

[shortcut]
frequency_attr = "weight"
"#;
        let format = parse_format_toml(toml).unwrap();
        assert_eq!(format.wordlist.word_tag, "word");
        assert_eq!(format.wordlist.frequency_attr, "f");
        assert_eq!(format.shortcut.frequency_attr, "weight");
        assert_eq!(format.shortcut.source_tag, "entry");
        assert_eq!(format.bigram, RelationTags::bigrams());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(parse_format_toml("").unwrap(), XmlFormat::new());
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_format_toml("[wordlist\n").unwrap_err();
        assert!(matches!(err, FormatConfigError::Parse(_)));
    }

    #[test]
    fn error_unknown_key() {
        let err = parse_format_toml("[wordlist]\nwrod_tag = \"w\"\n").unwrap_err();
        assert!(matches!(err, FormatConfigError::Parse(_)));
    }

    #[test]
    fn error_empty_name() {
        let err = parse_format_toml("[bigram]\nsource_attr = \"\"\n").unwrap_err();
        match err {
            FormatConfigError::InvalidValue { field, .. } => assert_eq!(field, "bigram.source_attr"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_name_with_whitespace() {
        let err = parse_format_toml("[wordlist]\nroot_tag = \"word list\"\n").unwrap_err();
        assert!(matches!(err, FormatConfigError::InvalidValue { .. }));
    }

    #[test]
    fn error_source_equals_destination() {
        let err = parse_format_toml("[shortcut]\ndestination_tag = \"entry\"\n").unwrap_err();
        match err {
            FormatConfigError::InvalidValue { field, .. } => {
                assert_eq!(field, "shortcut.destination_tag")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_inline_tags_collide() {
        let err = parse_format_toml("[wordlist]\nbigram_tag = \"shortcut\"\n").unwrap_err();
        assert!(matches!(err, FormatConfigError::InvalidValue { .. }));
    }
}
