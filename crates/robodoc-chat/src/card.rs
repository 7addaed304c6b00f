//! Recommendation cards shown on the summary page.

use serde::{Deserialize, Serialize};

use robodoc_core::MatchResult;

/// View model for one matched medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub safe: bool,
    /// "Mock status: Likely OK" or "Mock status: Use caution"
    pub status_label: String,
    pub reason: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub cost_label: String,
}

impl MedicineCard {
    pub fn status_label_for(safe: bool) -> &'static str {
        if safe {
            "Mock status: Likely OK"
        } else {
            "Mock status: Use caution"
        }
    }
}

impl From<MatchResult> for MedicineCard {
    fn from(result: MatchResult) -> Self {
        let med = result.medicine;
        Self {
            id: med.id,
            name: med.name,
            description: med.description,
            safe: result.safe,
            status_label: Self::status_label_for(result.safe).to_string(),
            reason: result.reason.to_string(),
            pros: med.pros,
            cons: med.cons,
            cost_label: med.cost_label.to_string(),
        }
    }
}
