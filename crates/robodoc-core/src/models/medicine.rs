//! Medicine catalog models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display tag for the rough price of a medicine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CostLabel {
    #[serde(rename = "Low Cost")]
    Low,
    #[serde(rename = "Moderate Cost")]
    Moderate,
    #[serde(rename = "High Cost")]
    High,
}

impl CostLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostLabel::Low => "Low Cost",
            CostLabel::Moderate => "Moderate Cost",
            CostLabel::High => "High Cost",
        }
    }
}

impl fmt::Display for CostLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the medicine catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display name (e.g., "Ibuprofen (Advil, Motrin)")
    pub name: String,
    /// Short description shown on the card
    pub description: String,
    /// Symptom keywords, matched fuzzily against symptom tokens
    pub symptoms: Vec<String>,
    /// Allergy keywords that disqualify this medicine (exact token match)
    #[serde(default)]
    pub avoid_if_allergy: Vec<String>,
    /// History keywords that disqualify this medicine (exact token match)
    #[serde(default)]
    pub avoid_if_history: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub cost_label: CostLabel,
}

impl MedicineRecord {
    /// Create a record with required fields and no keywords.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost_label: CostLabel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            symptoms: Vec::new(),
            avoid_if_allergy: Vec::new(),
            avoid_if_history: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            cost_label,
        }
    }

    /// True if any symptom keyword contains `token` or is contained by it.
    pub fn matches_symptom_token(&self, token: &str) -> bool {
        self.symptoms
            .iter()
            .any(|keyword| keyword.contains(token) || token.contains(keyword.as_str()))
    }

    /// True if any allergy disqualifier equals one of `tokens` exactly.
    pub fn has_allergy_conflict(&self, tokens: &[String]) -> bool {
        self.avoid_if_allergy.iter().any(|k| tokens.contains(k))
    }

    /// True if any history disqualifier equals one of `tokens` exactly.
    pub fn has_history_conflict(&self, tokens: &[String]) -> bool {
        self.avoid_if_history.iter().any(|k| tokens.contains(k))
    }
}
