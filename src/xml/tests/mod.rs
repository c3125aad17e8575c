mod unigram;

use crate::dict::WeightedString;

pub(super) fn ws(word: &str, frequency: i32) -> WeightedString {
    WeightedString::new(word, frequency)
}

pub(super) const CAT_UNIGRAMS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wordlist>
  <w f="200">cat</w>
  <w f="120">sat</w>
  <w f="90">kitty</w>
</wordlist>
"#;

pub(super) const CAT_SHORTCUTS: &str = r#"<shortcuts>
  <entry shortcut="cat">
    <target replacement="kitty" priority="32"/>
  </entry>
</shortcuts>
"#;

pub(super) const CAT_BIGRAMS: &str = r#"<bigrams>
  <bi w1="cat">
    <w w2="sat" p="48"/>
  </bi>
</bigrams>
"#;
