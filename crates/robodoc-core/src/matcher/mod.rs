//! Rule-based recommendation matcher.
//!
//! Pipeline: Tokenize → Symptom match (fuzzy) → Conflict checks (exact)
//!
//! Symptom matching is a bidirectional substring test between catalog
//! keywords and symptom tokens. Allergy and history conflicts require an
//! exact keyword/token match. The asymmetry is part of the contract.

mod tokenizer;

pub use tokenizer::*;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{MatchResult, MedicineRecord, Recommendations, SafetyReason};

/// Matches free-text input against a catalog.
pub struct Matcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Recommend catalog entries for the given symptom, history and allergy text.
    ///
    /// Results follow catalog order. Entries with no symptom overlap are
    /// left out entirely.
    pub fn recommend(
        &self,
        symptom_text: &str,
        history_text: Option<&str>,
        allergy_text: Option<&str>,
    ) -> Recommendations {
        let symptom_tokens = tokenize(symptom_text);
        let history_tokens = tokenize_opt(history_text);
        let allergy_tokens = tokenize_opt(allergy_text);

        let results: Vec<MatchResult> = self
            .catalog
            .iter()
            .filter(|med| symptom_tokens.iter().any(|t| med.matches_symptom_token(t)))
            .map(|med| {
                let reason = Self::assess(med, &history_tokens, &allergy_tokens);
                MatchResult::new(med.clone(), reason)
            })
            .collect();

        debug!(
            symptom_tokens = symptom_tokens.len(),
            matches = results.len(),
            "Matched symptoms against catalog"
        );

        Recommendations { results }
    }

    /// Allergy conflicts take precedence over history conflicts.
    fn assess(
        med: &MedicineRecord,
        history_tokens: &[String],
        allergy_tokens: &[String],
    ) -> SafetyReason {
        if med.has_allergy_conflict(allergy_tokens) {
            SafetyReason::AllergyConflict
        } else if med.has_history_conflict(history_tokens) {
            SafetyReason::HistoryConflict
        } else {
            SafetyReason::NoConflict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(recs: &Recommendations) -> Vec<&str> {
        recs.iter().map(|r| r.medicine.id.as_str()).collect()
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = Catalog::builtin();
        let matcher = Matcher::new(&catalog);

        let recs = matcher.recommend("sore throat and fever", None, None);
        assert_eq!(ids(&recs), vec!["ibuprofen", "acetaminophen", "throat-lozenges"]);
        assert!(recs.iter().all(|r| r.safe));
    }

    #[test]
    fn test_partial_token_matches_keyword() {
        let catalog = Catalog::builtin();
        let matcher = Matcher::new(&catalog);

        let recs = matcher.recommend("head", None, None);
        assert_eq!(ids(&recs), vec!["ibuprofen", "acetaminophen"]);
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin();
        let matcher = Matcher::new(&catalog);

        assert!(matcher.recommend("rash", None, None).is_empty());
        assert!(matcher.recommend("", Some("kidney"), Some("nsaid")).is_empty());
    }

    #[test]
    fn test_history_conflict() {
        let catalog = Catalog::builtin();
        let matcher = Matcher::new(&catalog);

        let recs = matcher.recommend("fever", Some("Chronic kidney disease"), None);
        let ibuprofen = &recs.results[0];
        assert_eq!(ibuprofen.medicine.id, "ibuprofen");
        assert!(!ibuprofen.safe);
        assert_eq!(ibuprofen.reason, SafetyReason::HistoryConflict);

        let acetaminophen = &recs.results[1];
        assert!(acetaminophen.safe);
    }

    #[test]
    fn test_allergy_wins_over_history() {
        let catalog = Catalog::builtin();
        let matcher = Matcher::new(&catalog);

        let recs = matcher.recommend("fever", Some("ulcer"), Some("advil"));
        assert_eq!(recs.results[0].reason, SafetyReason::AllergyConflict);
        assert_eq!(recs.safe_count(), 1);
        assert_eq!(recs.unsafe_count(), 1);
    }
}
