//! Property-based tests for assessment scores and score sets

use proptest::prelude::*;
use wordlens_paper::{Paper, PaperAttributes};
use wordlens_research::{select_researcher, ResearcherOptions};
use wordlens_scoring::{AssessmentResult, Assessor, Rating, ScoreSet};

// ============================================================================
// Generators for property testing
// ============================================================================

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "cat", "food", "the", "garden", "is", "quiet", ".", "\n\n", "birds", "sang",
        ]),
        0..400,
    )
    .prop_map(|words| words.join(" "))
}

fn attributes() -> impl Strategy<Value = PaperAttributes> {
    (
        prop::sample::select(vec!["", "cat food", "garden", "\"cat food\""]),
        prop::sample::select(vec!["", "Cat food", "A quiet garden"]),
        prop::sample::select(vec!["", "cat-food", "garden"]),
        prop::sample::select(vec!["en_US", "ca", "ja", "nl"]),
    )
        .prop_map(|(keyword, title, permalink, locale)| PaperAttributes {
            keyword: keyword.to_string(),
            title: title.to_string(),
            permalink: permalink.to_string(),
            locale: locale.to_string(),
            ..Default::default()
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every score stays within 0-9 and the overall score within 0-100
    #[test]
    fn prop_scores_in_range(text in text(), attributes in attributes()) {
        let paper = Paper::new(text, attributes);
        let researcher = select_researcher(&paper, ResearcherOptions::default());
        for assessor in [Assessor::seo(), Assessor::related_keyphrase(), Assessor::readability()] {
            let set = assessor.assess(&researcher);
            prop_assert!(set.score <= 100);
            for result in &set.results {
                prop_assert!((0..=9).contains(&result.score));
                prop_assert_eq!(result.rating, Rating::from_score(result.score));
            }
        }
    }

    /// Assessing twice gives the same score set
    #[test]
    fn prop_assessment_is_deterministic(text in text(), attributes in attributes()) {
        let paper = Paper::new(text, attributes);
        let first = Assessor::seo().assess(&select_researcher(&paper, ResearcherOptions::default()));
        let second = Assessor::seo().assess(&select_researcher(&paper, ResearcherOptions::default()));
        prop_assert_eq!(first, second);
    }

    /// The overall score is the rounded share of the maximum
    #[test]
    fn prop_overall_score_formula(scores in prop::collection::vec(0i32..=9, 1..12)) {
        let results: Vec<_> = scores
            .iter()
            .map(|score| AssessmentResult::new("a", *score, ""))
            .collect();
        let set = ScoreSet::from_results(results);
        let expected = (scores.iter().sum::<i32>() as f64 / (9 * scores.len()) as f64 * 100.0).round() as u8;
        prop_assert_eq!(set.score, expected);
    }
}
