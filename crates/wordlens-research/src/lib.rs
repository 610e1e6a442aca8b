#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Research System
//!
//! Selects a locale-specific [`Researcher`] for a [`wordlens_paper::Paper`] and runs
//! the deterministic researches (prominent words, keyphrase placement, text
//! statistics) that assessments score.

pub mod error;
pub mod language;
pub mod parsed;
pub mod researcher;
pub mod researches;
pub mod text;
pub mod tokenizer;

pub use error::ResearchError;
pub use language::{profile_for, supported_languages, LanguageData, LanguageProfile};
pub use parsed::ParsedText;
pub use researcher::{select_researcher, ResearchFn, Researcher, ResearcherOptions};
pub use researches::matching::Keyphrase;
pub use researches::prominent_words::{
    get_prominent_words_for_insights, get_prominent_words_for_internal_linking, ProminentWord,
};
pub use tokenizer::Tokenizer;
