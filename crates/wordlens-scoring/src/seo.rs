//! Keyphrase assessments
//!
//! Each assessment reads the typed research output for the researcher's paper, so
//! the same assessments score the focus keyphrase and every related keyphrase.

use tracing::debug;
use wordlens_paper::Paper;
use wordlens_research::researches::keyphrase::{
    get_first_paragraph_match, get_keyphrase_length, get_keyword_count,
    get_meta_description_matches, get_title_match, get_url_match,
};
use wordlens_research::researches::text_statistics::get_text_length;
use wordlens_research::Researcher;

use crate::assessment::Assessment;
use crate::result::AssessmentResult;

/// Character-counting locales multiply word thresholds by this factor
pub const CHARACTERS_PER_WORD: usize = 3;

pub(crate) fn scaled(researcher: &Researcher, words: usize) -> usize {
    if researcher.profile().count_characters {
        words * CHARACTERS_PER_WORD
    } else {
        words
    }
}

/// Number of content words in the keyphrase
#[derive(Debug, Default)]
pub struct KeyphraseLengthAssessment;

impl Assessment for KeyphraseLengthAssessment {
    fn identifier(&self) -> &'static str {
        "keyphraseLength"
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let length = get_keyphrase_length(paper, researcher).keyphrase_length;
        let (score, text) = match length {
            0 => (1, "Keyphrase length: No focus keyphrase was set for this page."),
            1..=4 => (9, "Keyphrase length: Good job!"),
            5..=8 => (6, "Keyphrase length: The keyphrase is a bit long. Try to make it shorter."),
            _ => (3, "Keyphrase length: The keyphrase is too long. Make it shorter."),
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Keyphrase density in the body text
#[derive(Debug, Default)]
pub struct KeyphraseDensityAssessment;

impl KeyphraseDensityAssessment {
    /// Minimum text length in words before density is meaningful
    pub const MINIMUM_TEXT_LENGTH: usize = 100;
    /// Lowest recommended density, in percent
    pub const MINIMUM_DENSITY: f64 = 0.5;
    /// Highest recommended density, in percent
    pub const MAXIMUM_DENSITY: f64 = 3.0;
}

impl Assessment for KeyphraseDensityAssessment {
    fn identifier(&self) -> &'static str {
        "keyphraseDensity"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_keyword()
            && researcher.text_length() >= scaled(researcher, Self::MINIMUM_TEXT_LENGTH)
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let count = get_keyword_count(paper, researcher);
        debug!("Keyphrase density {:.2}% ({} matches)", count.density, count.count);
        let (score, text) = if count.density < Self::MINIMUM_DENSITY {
            (
                4,
                format!(
                    "Keyphrase density: The keyphrase was found {} times. That's less than recommended.",
                    count.count
                ),
            )
        } else if count.density <= Self::MAXIMUM_DENSITY {
            (
                9,
                format!(
                    "Keyphrase density: The keyphrase was found {} times. This is great!",
                    count.count
                ),
            )
        } else {
            (
                1,
                format!(
                    "Keyphrase density: The keyphrase was found {} times. That's more than recommended.",
                    count.count
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Keyphrase or synonym in the first paragraph
#[derive(Debug, Default)]
pub struct IntroductionKeywordAssessment;

impl Assessment for IntroductionKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "introductionKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_text()
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = get_first_paragraph_match(paper, researcher);
        let (score, text) = if found.found_in_one_sentence {
            (9, "Keyphrase in introduction: Well done!")
        } else if found.found_in_paragraph {
            (
                6,
                "Keyphrase in introduction: Your keyphrase or its synonyms appear in the first paragraph, but not within one sentence.",
            )
        } else {
            (
                3,
                "Keyphrase in introduction: Your keyphrase or its synonyms do not appear in the first paragraph.",
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Keyphrase placement in the SEO title
#[derive(Debug, Default)]
pub struct KeyphraseInTitleAssessment;

impl Assessment for KeyphraseInTitleAssessment {
    fn identifier(&self) -> &'static str {
        "keyphraseInTitle"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_title()
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = get_title_match(paper, researcher);
        let (score, text) = if found.exact_match_found && found.position == 0 {
            (
                9,
                "Keyphrase in title: The exact match of the keyphrase appears at the beginning of the SEO title. Good job!",
            )
        } else if found.exact_match_found {
            (
                6,
                "Keyphrase in title: The exact match of the keyphrase appears in the SEO title, but not at the beginning.",
            )
        } else if found.all_words_found {
            (
                6,
                "Keyphrase in title: Does not contain the exact match. Try to write the exact match of your keyphrase in the SEO title.",
            )
        } else {
            (
                2,
                "Keyphrase in title: Not all the words from your keyphrase appear in the SEO title.",
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Keyphrase or synonym in the meta description
#[derive(Debug, Default)]
pub struct MetaDescriptionKeywordAssessment;

impl Assessment for MetaDescriptionKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "metaDescriptionKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_description()
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let matches = get_meta_description_matches(paper, researcher);
        let (score, text) = match matches {
            0 => (
                3,
                "Keyphrase in meta description: The meta description has been specified, but it does not contain the keyphrase.".to_string(),
            ),
            1 | 2 => (
                9,
                "Keyphrase in meta description: Keyphrase or synonym appear in the meta description. Well done!".to_string(),
            ),
            _ => (
                3,
                format!(
                    "Keyphrase in meta description: The meta description contains the keyphrase {} times, which is over the advised maximum of 2 times.",
                    matches
                ),
            ),
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Keyphrase words in the slug
#[derive(Debug, Default)]
pub struct SlugKeywordAssessment;

impl Assessment for SlugKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "slugKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_permalink()
    }

    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = get_url_match(paper, researcher);
        let (score, text) = if found.percent_word_matches == 100 {
            (9, "Keyphrase in slug: Great work!")
        } else if found.percent_word_matches >= 50 {
            (6, "Keyphrase in slug: More than half of your keyphrase appears in the slug.")
        } else {
            (3, "Keyphrase in slug: (Part of) your keyphrase does not appear in the slug.")
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Length of the body text
#[derive(Debug, Default)]
pub struct TextLengthAssessment;

impl TextLengthAssessment {
    /// Recommended minimum, in words
    pub const RECOMMENDED: usize = 300;
    /// Slightly below the recommended minimum
    pub const SLIGHTLY_BELOW: usize = 250;
    /// Below the recommended minimum
    pub const BELOW: usize = 200;
}

impl Assessment for TextLengthAssessment {
    fn identifier(&self) -> &'static str {
        "textLength"
    }

    fn assess(&self, _paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let length = get_text_length(researcher);
        let unit = if researcher.profile().count_characters {
            "characters"
        } else {
            "words"
        };
        let recommended = scaled(researcher, Self::RECOMMENDED);
        let score = if length.count >= recommended {
            9
        } else if length.count >= scaled(researcher, Self::SLIGHTLY_BELOW) {
            6
        } else if length.count >= scaled(researcher, Self::BELOW) {
            3
        } else {
            1
        };
        let text = if score == 9 {
            format!("Text length: The text contains {} {}. Good job!", length.count, unit)
        } else {
            format!(
                "Text length: The text contains {} {}. This is below the recommended minimum of {} {}.",
                length.count, unit, recommended, unit
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}
