//! Assessors: ordered groups of assessments

use tracing::{debug, info};
use wordlens_research::Researcher;

use crate::assessment::Assessment;
use crate::readability::{ParagraphLengthAssessment, SentenceLengthAssessment, TextPresenceAssessment};
use crate::result::ScoreSet;
use crate::seo::{
    IntroductionKeywordAssessment, KeyphraseDensityAssessment, KeyphraseInTitleAssessment,
    KeyphraseLengthAssessment, MetaDescriptionKeywordAssessment, SlugKeywordAssessment,
    TextLengthAssessment,
};

/// Runs a fixed list of assessments against a researcher's paper
pub struct Assessor {
    name: &'static str,
    assessments: Vec<Box<dyn Assessment>>,
}

impl Assessor {
    /// Create an assessor from an explicit list of assessments
    pub fn new(name: &'static str, assessments: Vec<Box<dyn Assessment>>) -> Self {
        Assessor { name, assessments }
    }

    /// SEO assessor for the focus keyphrase
    pub fn seo() -> Self {
        Assessor::new(
            "seo",
            vec![
                Box::new(IntroductionKeywordAssessment),
                Box::new(KeyphraseLengthAssessment),
                Box::new(KeyphraseDensityAssessment),
                Box::new(MetaDescriptionKeywordAssessment),
                Box::new(TextLengthAssessment),
                Box::new(KeyphraseInTitleAssessment),
                Box::new(SlugKeywordAssessment),
            ],
        )
    }

    /// SEO assessor for a related keyphrase
    ///
    /// Text length and title placement are only scored for the focus keyphrase.
    pub fn related_keyphrase() -> Self {
        Assessor::new(
            "relatedKeyphrase",
            vec![
                Box::new(IntroductionKeywordAssessment),
                Box::new(KeyphraseLengthAssessment),
                Box::new(KeyphraseDensityAssessment),
                Box::new(MetaDescriptionKeywordAssessment),
                Box::new(SlugKeywordAssessment),
            ],
        )
    }

    /// Readability assessor
    pub fn readability() -> Self {
        Assessor::new(
            "readability",
            vec![
                Box::new(TextPresenceAssessment),
                Box::new(SentenceLengthAssessment),
                Box::new(ParagraphLengthAssessment),
            ],
        )
    }

    /// Identifiers of the assessments in order
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.assessments.iter().map(|a| a.identifier()).collect()
    }

    /// Score the researcher's paper; inapplicable assessments are omitted
    pub fn assess(&self, researcher: &Researcher) -> ScoreSet {
        let paper = researcher.paper();
        let results: Vec<_> = self
            .assessments
            .iter()
            .filter(|assessment| {
                let applicable = assessment.is_applicable(paper, researcher);
                if !applicable {
                    debug!("Skipping '{}': not applicable", assessment.identifier());
                }
                applicable
            })
            .map(|assessment| assessment.assess(paper, researcher))
            .collect();

        let set = ScoreSet::from_results(results);
        info!(
            "{} assessor scored {} ({} results)",
            self.name,
            set.score,
            set.results.len()
        );
        set
    }
}

impl std::fmt::Debug for Assessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assessor")
            .field("name", &self.name)
            .field("assessments", &self.identifiers())
            .finish()
    }
}
