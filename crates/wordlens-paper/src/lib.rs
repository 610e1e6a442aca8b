#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Document Model
//!
//! Provides the immutable [`Paper`] snapshot every research runs against, plus the
//! keyphrase and document-field types a host hands to the analysis orchestrator.

pub mod keyphrase;
pub mod paper;

pub use keyphrase::{
    parse_synonyms, DocumentFields, KeyphraseEntry, KeyphraseMap, RelatedKeyphrase,
    RelatedKeyphrases, FOCUS_KEYPHRASE_ID,
};
pub use paper::{Paper, PaperAttributes, DEFAULT_LOCALE};
