#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Scoring
//!
//! Turns research output into 0-9 assessment scores with feedback text, grouped
//! into [`ScoreSet`]s by the SEO, related-keyphrase and readability assessors.

pub mod assessment;
pub mod assessor;
pub mod readability;
pub mod result;
pub mod seo;

pub use assessment::Assessment;
pub use assessor::Assessor;
pub use result::{AssessmentResult, Rating, ScoreSet};
