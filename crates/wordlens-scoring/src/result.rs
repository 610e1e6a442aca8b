//! Assessment results and score sets

use serde::{Deserialize, Serialize};

/// Highest score a single assessment can give
pub const MAX_ASSESSMENT_SCORE: i32 = 9;

/// Traffic-light rating derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Score 0: informational feedback only
    Feedback,
    /// Scores 1 to 4
    Bad,
    /// Scores 5 to 7
    Ok,
    /// Scores 8 and 9
    Good,
}

impl Rating {
    /// Rating for a 0-9 score
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=0 => Rating::Feedback,
            1..=4 => Rating::Bad,
            5..=7 => Rating::Ok,
            _ => Rating::Good,
        }
    }
}

/// Outcome of one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Assessment identifier, e.g. `keyphraseLength`
    pub identifier: String,
    /// Score from 0 to 9
    pub score: i32,
    /// Rating derived from the score
    pub rating: Rating,
    /// Feedback text
    pub text: String,
}

impl AssessmentResult {
    /// Create a result; the score is clamped to 0-9 and the rating derived from it
    pub fn new(identifier: impl Into<String>, score: i32, text: impl Into<String>) -> Self {
        let score = score.clamp(0, MAX_ASSESSMENT_SCORE);
        AssessmentResult {
            identifier: identifier.into(),
            score,
            rating: Rating::from_score(score),
            text: text.into(),
        }
    }
}

/// Assessment results together with their overall 0-100 score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    /// Overall score from 0 to 100
    pub score: u8,
    /// Individual results in assessor order
    pub results: Vec<AssessmentResult>,
}

impl ScoreSet {
    /// Build a score set from results
    pub fn from_results(results: Vec<AssessmentResult>) -> Self {
        ScoreSet {
            score: overall_score(&results),
            results,
        }
    }

    /// Result of the assessment with `identifier`
    pub fn result(&self, identifier: &str) -> Option<&AssessmentResult> {
        self.results.iter().find(|r| r.identifier == identifier)
    }

    /// Overall rating
    pub fn rating(&self) -> Rating {
        if self.results.is_empty() {
            return Rating::Feedback;
        }
        Rating::from_score((f64::from(self.score) / 10.0).round() as i32)
    }
}

/// `round(sum / (9 * n) * 100)`; 0 for no results
pub fn overall_score(results: &[AssessmentResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let total: i32 = results.iter().map(|r| r.score).sum();
    let max = MAX_ASSESSMENT_SCORE * results.len() as i32;
    (f64::from(total) / f64::from(max) * 100.0).round() as u8
}
