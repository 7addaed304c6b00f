//! Recommendation results produced by the matcher.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MedicineRecord;

/// Why a matched medicine was judged safe or unsafe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SafetyReason {
    AllergyConflict,
    HistoryConflict,
    NoConflict,
}

impl SafetyReason {
    /// Whether this reason leaves the medicine marked safe.
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyReason::NoConflict)
    }

    /// Human-readable explanation shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            SafetyReason::AllergyConflict => "Possible allergy conflict.",
            SafetyReason::HistoryConflict => "May not be recommended with your medical history.",
            SafetyReason::NoConflict => "No obvious conflicts detected in this mock system.",
        }
    }
}

impl fmt::Display for SafetyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A catalog entry whose symptoms overlapped the input, with its verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub medicine: MedicineRecord,
    pub safe: bool,
    pub reason: SafetyReason,
}

impl MatchResult {
    pub fn new(medicine: MedicineRecord, reason: SafetyReason) -> Self {
        Self {
            medicine,
            safe: reason.is_safe(),
            reason,
        }
    }
}

/// Ordered matcher output (catalog order).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub results: Vec<MatchResult>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Number of results with no detected conflicts.
    pub fn safe_count(&self) -> usize {
        self.results.iter().filter(|r| r.safe).count()
    }

    /// Number of results flagged by an allergy or history conflict.
    pub fn unsafe_count(&self) -> usize {
        self.results.iter().filter(|r| !r.safe).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> {
        self.results.iter()
    }
}

impl IntoIterator for Recommendations {
    type Item = MatchResult;
    type IntoIter = std::vec::IntoIter<MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
