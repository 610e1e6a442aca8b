//! Call sequencing for hosts that fire overlapping analyses

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of one analysis call, increasing per sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallId(pub u64);

/// Hands out call ids and tells whether a finished call is still the latest
///
/// Superseded calls are not cancelled; the host discards their results.
#[derive(Debug, Default)]
pub struct AnalysisSequencer {
    latest: AtomicU64,
}

impl AnalysisSequencer {
    /// Create a sequencer
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new call; it supersedes every earlier one
    pub fn begin(&self) -> CallId {
        CallId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no call began after `id`
    pub fn is_current(&self, id: CallId) -> bool {
        self.latest.load(Ordering::SeqCst) == id.0
    }

    /// Most recent call, if any
    pub fn latest(&self) -> Option<CallId> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            id => Some(CallId(id)),
        }
    }
}
