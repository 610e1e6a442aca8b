//! The assessment trait

use wordlens_paper::Paper;
use wordlens_research::Researcher;

use crate::result::AssessmentResult;

/// Maps research output for a paper to a scored result
pub trait Assessment: Send + Sync {
    /// Identifier reported in results
    fn identifier(&self) -> &'static str;

    /// Whether the assessment has enough input to score the paper
    fn is_applicable(&self, _paper: &Paper, _researcher: &Researcher) -> bool {
        true
    }

    /// Score the paper
    fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult;
}
