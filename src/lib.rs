//! Integration test harness for the WordLens workspace.
//!
//! The crates under `crates/` carry the engine; this package only hosts the
//! cross-crate tests in `tests/`.
