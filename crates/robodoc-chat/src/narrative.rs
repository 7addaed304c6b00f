//! Assistant message templates for the analysis chat.

use robodoc_core::Recommendations;

/// Shown when no catalog entry matched the symptoms.
pub const NO_MATCH_NOTICE: &str = "I couldn't match your symptoms with any options in this mock database. This demo can't replace a real doctor, so please talk to a professional if you're concerned.";

/// Closing note after the recommendation cards.
pub const DISCLAIMER: &str = "These suggestions are generated from a limited, hard-coded database just for demo purposes. Please consult a licensed healthcare provider before taking any medication.";

/// Longest summary header shown without truncation, in characters.
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Characters kept before the ellipsis when truncating.
const SUMMARY_KEEP_CHARS: usize = 47;

pub fn acknowledge_symptoms(symptoms: &str) -> String {
    format!(
        "Thanks for sharing your symptoms. I see you're dealing with: {}.",
        symptoms
    )
}

pub fn acknowledge_history(history: &str) -> String {
    format!("I'll also keep in mind your medical history: {}.", history)
}

pub fn acknowledge_allergies(allergies: &str) -> String {
    format!(
        "And I’ll avoid options related to these allergies: {}.",
        allergies
    )
}

pub fn conflict_summary(safe_count: usize, unsafe_count: usize) -> String {
    format!(
        "Based on our mock rules, I found {} option(s) that look generally safe and {} that may have conflicts.",
        safe_count, unsafe_count
    )
}

/// Header text for the summary page.
pub fn summary_condition(symptoms: &str) -> String {
    if symptoms.chars().count() > SUMMARY_MAX_CHARS {
        let kept: String = symptoms.chars().take(SUMMARY_KEEP_CHARS).collect();
        format!("{}...", kept)
    } else {
        symptoms.to_string()
    }
}

/// Build the full ordered list of assistant messages for one analysis.
pub fn build_narrative(
    symptoms: &str,
    history: Option<&str>,
    allergies: Option<&str>,
    recs: &Recommendations,
) -> Vec<String> {
    let mut messages = vec![acknowledge_symptoms(symptoms)];

    if let Some(history) = history {
        messages.push(acknowledge_history(history));
    }
    if let Some(allergies) = allergies {
        messages.push(acknowledge_allergies(allergies));
    }

    if recs.is_empty() {
        messages.push(NO_MATCH_NOTICE.to_string());
    } else {
        messages.push(conflict_summary(recs.safe_count(), recs.unsafe_count()));
        messages.push(DISCLAIMER.to_string());
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodoc_core::{Catalog, Matcher};

    #[test]
    fn test_summary_condition_truncation() {
        assert_eq!(summary_condition("fever"), "fever");

        let exactly_fifty = "x".repeat(50);
        assert_eq!(summary_condition(&exactly_fifty), exactly_fifty);

        let long = "y".repeat(51);
        let header = summary_condition(&long);
        assert_eq!(header.chars().count(), 50);
        assert!(header.ends_with("..."));
    }

    #[test]
    fn test_narrative_with_matches() {
        let catalog = Catalog::builtin();
        let recs = Matcher::new(&catalog).recommend("fever", Some("kidney"), None);

        let messages = build_narrative("fever", Some("kidney"), None, &recs);
        assert_eq!(
            messages,
            vec![
                "Thanks for sharing your symptoms. I see you're dealing with: fever.".to_string(),
                "I'll also keep in mind your medical history: kidney.".to_string(),
                "Based on our mock rules, I found 1 option(s) that look generally safe and 1 that may have conflicts.".to_string(),
                DISCLAIMER.to_string(),
            ]
        );
    }

    #[test]
    fn test_narrative_without_matches() {
        let messages = build_narrative("rash", None, Some("latex"), &Recommendations::default());

        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[1],
            "And I’ll avoid options related to these allergies: latex."
        );
        assert_eq!(messages[2], NO_MATCH_NOTICE);
    }
}
