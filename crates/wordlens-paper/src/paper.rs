//! The immutable paper value analyzed by every research

use serde::{Deserialize, Serialize};

/// Locale used when a paper has none, or an empty one
pub const DEFAULT_LOCALE: &str = "en_US";

/// Optional metadata used to build a [`Paper`]
///
/// Every field defaults to empty; `locale` falls back to [`DEFAULT_LOCALE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperAttributes {
    /// Focus keyphrase
    pub keyword: String,
    /// Alternate forms of the focus keyphrase
    pub synonyms: Vec<String>,
    /// SEO title
    pub title: String,
    /// Rendered title width in pixels
    pub title_width: u32,
    /// Meta description
    pub description: String,
    /// Permalink or slug
    pub permalink: String,
    /// Publication date as supplied by the host
    pub date: String,
    /// BCP-47-like locale tag, e.g. `en_US` or `ja`
    pub locale: String,
}

/// Immutable snapshot of analyzable content and its metadata
///
/// A `Paper` is never mutated after construction. Operations that need a variation
/// (for instance scoring a related keyphrase against the same text) build a new
/// value with [`Paper::with_keyphrase`]. Deserialization goes through
/// [`Paper::new`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaperRecord")]
pub struct Paper {
    text: String,
    keyword: String,
    synonyms: Vec<String>,
    title: String,
    title_width: u32,
    description: String,
    permalink: String,
    date: String,
    locale: String,
}

/// Wire shape of a [`Paper`]
#[derive(Deserialize)]
struct PaperRecord {
    #[serde(default)]
    text: String,
    #[serde(flatten)]
    attributes: PaperAttributes,
}

impl From<PaperRecord> for Paper {
    fn from(record: PaperRecord) -> Self {
        Paper::new(record.text, record.attributes)
    }
}

impl Paper {
    /// Create a new paper from raw text and attributes
    pub fn new(text: impl Into<String>, attributes: PaperAttributes) -> Self {
        let locale = if attributes.locale.trim().is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            attributes.locale.trim().to_string()
        };

        Paper {
            text: text.into(),
            keyword: attributes.keyword,
            synonyms: attributes
                .synonyms
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            title: attributes.title,
            title_width: attributes.title_width,
            description: attributes.description,
            permalink: attributes.permalink,
            date: attributes.date,
            locale,
        }
    }

    /// Create a paper that only carries text, with default attributes
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, PaperAttributes::default())
    }

    /// Build a new paper with the same content but a different keyphrase
    pub fn with_keyphrase(&self, keyword: impl Into<String>, synonyms: Vec<String>) -> Self {
        let mut attributes = self.attributes();
        attributes.keyword = keyword.into();
        attributes.synonyms = synonyms;
        Paper::new(self.text.clone(), attributes)
    }

    /// Attributes of this paper, cloned
    pub fn attributes(&self) -> PaperAttributes {
        PaperAttributes {
            keyword: self.keyword.clone(),
            synonyms: self.synonyms.clone(),
            title: self.title.clone(),
            title_width: self.title_width,
            description: self.description.clone(),
            permalink: self.permalink.clone(),
            date: self.date.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Raw text, possibly containing markup
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Focus keyphrase
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Synonyms of the focus keyphrase
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// SEO title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered title width in pixels
    pub fn title_width(&self) -> u32 {
        self.title_width
    }

    /// Meta description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Permalink or slug
    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    /// Publication date
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Primary language subtag of the locale, lower-cased (`en_US` -> `en`)
    pub fn language(&self) -> String {
        self.locale
            .split(|c: char| c == '_' || c == '-')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Whether the paper has non-blank text
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether the paper has a non-blank keyphrase
    pub fn has_keyword(&self) -> bool {
        !self.keyword.trim().is_empty()
    }

    /// Whether the paper has synonyms
    pub fn has_synonyms(&self) -> bool {
        !self.synonyms.is_empty()
    }

    /// Whether the paper has a non-blank title
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Whether the paper has a non-blank meta description
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Whether the paper has a non-blank permalink
    pub fn has_permalink(&self) -> bool {
        !self.permalink.trim().is_empty()
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self::from_text("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults_when_missing() {
        let paper = Paper::from_text("Some text");
        assert_eq!(paper.locale(), DEFAULT_LOCALE);
        assert_eq!(paper.language(), "en");
    }

    #[test]
    fn test_locale_defaults_when_blank() {
        let paper = Paper::new(
            "Some text",
            PaperAttributes {
                locale: "  ".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(paper.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_language_subtag() {
        for (locale, expected) in [("ca", "ca"), ("ja_JP", "ja"), ("pt-BR", "pt"), ("NL_nl", "nl")] {
            let paper = Paper::new(
                "",
                PaperAttributes {
                    locale: locale.to_string(),
                    ..Default::default()
                },
            );
            assert_eq!(paper.language(), expected, "locale {}", locale);
        }
    }

    #[test]
    fn test_with_keyphrase_leaves_original_untouched() {
        let original = Paper::new(
            "Text about cats",
            PaperAttributes {
                keyword: "cats".to_string(),
                title: "Cats".to_string(),
                ..Default::default()
            },
        );

        let derived = original.with_keyphrase("dogs", vec!["puppies".to_string()]);

        assert_eq!(original.keyword(), "cats");
        assert!(original.synonyms().is_empty());
        assert_eq!(derived.keyword(), "dogs");
        assert_eq!(derived.synonyms(), &["puppies".to_string()]);
        assert_eq!(derived.text(), original.text());
        assert_eq!(derived.title(), original.title());
    }

    #[test]
    fn test_blank_synonyms_are_dropped() {
        let paper = Paper::new(
            "",
            PaperAttributes {
                synonyms: vec![" ".to_string(), " live index ".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(paper.synonyms(), &["live index".to_string()]);
    }

    #[test]
    fn test_presence_helpers() {
        let empty = Paper::default();
        assert!(!empty.has_text());
        assert!(!empty.has_keyword());
        assert!(!empty.has_title());
        assert!(!empty.has_description());
        assert!(!empty.has_permalink());
        assert!(!empty.has_synonyms());
    }

    #[test]
    fn test_paper_serializes_by_value() {
        let paper = Paper::new(
            "<p>Hello</p>",
            PaperAttributes {
                keyword: "hello".to_string(),
                locale: "ca".to_string(),
                ..Default::default()
            },
        );
        let json = serde_json::to_string(&paper).unwrap();
        let back: Paper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, paper);
    }

    #[test]
    fn test_deserialized_paper_is_normalized() {
        let paper: Paper = serde_json::from_str(
            r#"{"text": "Hello", "keyword": "hello", "synonyms": [" hi ", " "], "locale": ""}"#,
        )
        .unwrap();
        assert_eq!(paper.locale(), DEFAULT_LOCALE);
        assert_eq!(paper.synonyms(), &["hi".to_string()]);
        assert_eq!(paper.keyword(), "hello");
        assert_eq!(paper.title(), "");
    }
}
