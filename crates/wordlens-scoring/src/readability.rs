//! Readability assessments

use wordlens_paper::Paper;
use wordlens_research::researches::text_statistics::{get_paragraph_lengths, get_sentence_lengths};
use wordlens_research::Researcher;

use crate::assessment::Assessment;
use crate::result::AssessmentResult;
use crate::seo::scaled;

/// Flags texts too short to assess
#[derive(Debug, Default)]
pub struct TextPresenceAssessment;

impl TextPresenceAssessment {
    /// Minimum text length in words
    pub const MINIMUM_TEXT_LENGTH: usize = 50;
}

impl Assessment for TextPresenceAssessment {
    fn identifier(&self) -> &'static str {
        "textPresence"
    }

    fn is_applicable(&self, _paper: &Paper, researcher: &Researcher) -> bool {
        researcher.text_length() < scaled(researcher, Self::MINIMUM_TEXT_LENGTH)
    }

    fn assess(&self, _paper: &Paper, _researcher: &Researcher) -> AssessmentResult {
        AssessmentResult::new(
            self.identifier(),
            3,
            "Not enough content: Please add some content to enable a good analysis.",
        )
    }
}

/// Share of sentences that are too long
#[derive(Debug, Default)]
pub struct SentenceLengthAssessment;

impl SentenceLengthAssessment {
    /// Longest recommended sentence, in words
    pub const RECOMMENDED_LENGTH: usize = 20;
    /// Recommended sentence length for character-counting locales
    pub const RECOMMENDED_CHARACTER_LENGTH: usize = 40;
    /// Share of long sentences scored as good, in percent
    pub const GOOD_PERCENTAGE: f64 = 25.0;
    /// Share of long sentences scored as ok, in percent
    pub const OK_PERCENTAGE: f64 = 30.0;

    fn limit(researcher: &Researcher) -> usize {
        if researcher.profile().count_characters {
            Self::RECOMMENDED_CHARACTER_LENGTH
        } else {
            Self::RECOMMENDED_LENGTH
        }
    }
}

impl Assessment for SentenceLengthAssessment {
    fn identifier(&self) -> &'static str {
        "sentenceLength"
    }

    fn is_applicable(&self, _paper: &Paper, researcher: &Researcher) -> bool {
        !researcher.parsed().sentences().is_empty()
    }

    fn assess(&self, _paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let sentences = get_sentence_lengths(researcher);
        let limit = Self::limit(researcher);
        let long = sentences.iter().filter(|s| s.sentence_length > limit).count();
        let percentage = long as f64 / sentences.len().max(1) as f64 * 100.0;

        let score = if percentage <= Self::GOOD_PERCENTAGE {
            9
        } else if percentage <= Self::OK_PERCENTAGE {
            6
        } else {
            3
        };
        let text = if score == 9 {
            "Sentence length: Great!".to_string()
        } else {
            format!(
                "Sentence length: {:.1}% of the sentences contain more than {} units, which is more than the recommended maximum of {}%. Try to shorten the sentences.",
                percentage,
                limit,
                Self::GOOD_PERCENTAGE
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

/// Longest paragraph in the text
#[derive(Debug, Default)]
pub struct ParagraphLengthAssessment;

impl ParagraphLengthAssessment {
    /// Paragraphs above this length, in words, score 3
    pub const RECOMMENDED_MAXIMUM: usize = 150;
    /// Paragraphs above this length, in words, score 2
    pub const MAXIMUM: usize = 200;
}

impl Assessment for ParagraphLengthAssessment {
    fn identifier(&self) -> &'static str {
        "paragraphLength"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn assess(&self, _paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let longest = get_paragraph_lengths(researcher)
            .iter()
            .map(|p| p.count_length)
            .max()
            .unwrap_or(0);

        let score = if longest > scaled(researcher, Self::MAXIMUM) {
            2
        } else if longest > scaled(researcher, Self::RECOMMENDED_MAXIMUM) {
            3
        } else {
            9
        };
        let text = if score == 9 {
            "Paragraph length: None of the paragraphs are too long. Great job!".to_string()
        } else {
            format!(
                "Paragraph length: The longest paragraph is {} units long, more than the recommended maximum of {}. Shorten your paragraphs!",
                longest,
                scaled(researcher, Self::RECOMMENDED_MAXIMUM)
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}
