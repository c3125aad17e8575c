use super::ws;
use crate::dict::Lexicon;
use crate::xml::events::{Attributes, DocumentHandler};
use crate::xml::{read_unigrams, ErrorKind, RelationMap, UnigramReader, WordListTags};

fn read(doc: &str, shortcuts: &RelationMap, bigrams: &RelationMap) -> Lexicon {
    let mut lexicon = Lexicon::new();
    read_unigrams(
        doc.as_bytes(),
        &WordListTags::default(),
        &mut lexicon,
        shortcuts,
        bigrams,
    )
    .unwrap();
    lexicon
}

fn read_err(doc: &str) -> ErrorKind {
    let mut lexicon = Lexicon::new();
    read_unigrams(
        doc.as_bytes(),
        &WordListTags::default(),
        &mut lexicon,
        &RelationMap::new(),
        &RelationMap::new(),
    )
    .unwrap_err()
    .kind()
}

#[test]
fn test_read_words() {
    let doc = r#"<wordlist><w f="200">cat</w><w f="0">zero</w><w f="255">the</w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.get("cat").unwrap().frequency, 200);
    assert_eq!(lexicon.get("zero").unwrap().frequency, 0);
    assert_eq!(lexicon.get("the").unwrap().frequency, 255);
}

#[test]
fn test_unigram_frequency_not_rescaled() {
    let doc = r#"<wordlist><w f="1000">big</w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.get("big").unwrap().frequency, 1000);
}

#[test]
fn test_relations_attached_by_exact_text() {
    let shortcuts = RelationMap::from([("cat".to_string(), vec![ws("kitty", 2)])]);
    let bigrams = RelationMap::from([
        ("cat".to_string(), vec![ws("sat", 3)]),
        ("Cat".to_string(), vec![ws("woman", 5)]),
    ]);
    let doc = r#"<wordlist><w f="200">cat</w><w f="10">cats</w></wordlist>"#;
    let lexicon = read(doc, &shortcuts, &bigrams);

    let cat = lexicon.get("cat").unwrap();
    assert_eq!(cat.shortcut_targets, Some(vec![ws("kitty", 2)]));
    assert_eq!(cat.bigrams, Some(vec![ws("sat", 3)]));

    let cats = lexicon.get("cats").unwrap();
    assert_eq!(cats.shortcut_targets, None);
    assert_eq!(cats.bigrams, None);
    assert!(!lexicon.contains("Cat"));
}

#[test]
fn test_absent_relations_are_none_not_empty() {
    let doc = r#"<wordlist><w f="5">alone</w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    let alone = lexicon.get("alone").unwrap();
    assert!(alone.shortcut_targets.is_none());
    assert!(alone.bigrams.is_none());
}

#[test]
fn test_fragmented_text_events() {
    let tags = WordListTags::default();
    let empty = RelationMap::new();
    let mut lexicon = Lexicon::new();
    let mut reader = UnigramReader::new(&tags, &mut lexicon, &empty, &empty);
    let attrs: Attributes = [("f", "42")].into_iter().collect();
    reader.start_element("w", &attrs).unwrap();
    reader.characters("ab").unwrap();
    reader.characters("cd").unwrap();
    reader.end_element("w").unwrap();
    assert_eq!(reader.words_read(), 1);
    assert_eq!(lexicon.get("abcd").unwrap().frequency, 42);
    assert!(!lexicon.contains("ab"));
}

#[test]
fn test_fragmented_text_from_cdata_and_entities() {
    let doc = r#"<wordlist><w f="7">ab<![CDATA[cd]]></w><w f="8">r&amp;b</w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.get("abcd").unwrap().frequency, 7);
    assert_eq!(lexicon.get("r&b").unwrap().frequency, 8);
}

#[test]
fn test_text_outside_words_ignored() {
    let doc = "<wordlist>\n  <header>Sample words</header>\n  <w f=\"3\">one</w>\n  stray\n</wordlist>";
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.len(), 1);
    assert!(lexicon.contains("one"));
}

#[test]
fn test_word_attribute_overrides_text() {
    let doc = "<wordlist><w word=\"cat\" f=\"200\">\n  </w></wordlist>";
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.get("cat").unwrap().frequency, 200);
}

#[test]
fn test_inline_relations() {
    let doc = r#"<wordlist format="2">
  <w word="cat" f="200">
    <shortcut f="2">kitty</shortcut>

    <bigram f="3">sat</bigram>
    <bigram f="1">r<![CDATA[a]]>n</bigram>
  </w>
</wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    let cat = lexicon.get("cat").unwrap();
    assert_eq!(cat.shortcut_targets, Some(vec![ws("kitty", 2)]));
    assert_eq!(cat.bigrams, Some(vec![ws("sat", 3), ws("ran", 1)]));
}

#[test]
fn test_inline_relations_follow_map_relations() {
    let bigrams = RelationMap::from([("cat".to_string(), vec![ws("sat", 3)])]);
    let doc = r#"<wordlist><w word="cat" f="200"><bigram f="4">ran</bigram></w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &bigrams);
    let cat = lexicon.get("cat").unwrap();
    assert_eq!(cat.bigrams, Some(vec![ws("sat", 3), ws("ran", 4)]));
    assert_eq!(cat.shortcut_targets, None);
}

#[test]
fn test_self_closing_word() {
    let doc = r#"<wordlist><w word="ok" f="9"/></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.get("ok").unwrap().frequency, 9);
}

#[test]
fn test_duplicate_word_merges() {
    let doc = r#"<wordlist><w f="10">dup</w><w f="30">dup</w><w f="20">dup</w></wordlist>"#;
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.get("dup").unwrap().frequency, 30);
}

#[test]
fn test_error_missing_frequency() {
    assert_eq!(
        read_err(r#"<wordlist><w f="10">a</w><w>b</w></wordlist>"#),
        ErrorKind::Structure
    );
}

#[test]
fn test_error_non_integer_frequency() {
    assert_eq!(
        read_err(r#"<wordlist><w f="often">a</w></wordlist>"#),
        ErrorKind::Format
    );
}

#[test]
fn test_error_empty_word() {
    assert_eq!(
        read_err(r#"<wordlist><w f="10"></w></wordlist>"#),
        ErrorKind::Structure
    );
}

#[test]
fn test_error_nested_word() {
    assert_eq!(
        read_err(r#"<wordlist><w f="1">a<w f="2">b</w></w></wordlist>"#),
        ErrorKind::Structure
    );
}

#[test]
fn test_error_unknown_element_in_word() {
    assert_eq!(
        read_err(r#"<wordlist><w f="1">a<b>bold</b></w></wordlist>"#),
        ErrorKind::Structure
    );
}

#[test]
fn test_error_malformed_markup() {
    assert_eq!(
        read_err(r#"<wordlist><w f="1">a</wordlist>"#),
        ErrorKind::Structure
    );
}

#[test]
fn test_namespace_declaration_does_not_shadow_frequency() {
    let doc = "<wordlist xmlns=\"urn:w\"><w xmlns:f=\"urn:y\" f=\"10\">a</w></wordlist>";
    let lexicon = read(doc, &RelationMap::new(), &RelationMap::new());
    assert_eq!(lexicon.get("a").unwrap().frequency, 10);
}

#[test]
fn test_error_padded_frequency() {
    assert_eq!(read_err("<wordlist><w f=\" 12 \">a</w></wordlist>"), ErrorKind::Format);
}
