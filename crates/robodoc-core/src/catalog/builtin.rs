//! Compiled-in demo catalog.

use crate::models::{CostLabel, MedicineRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four over-the-counter entries shipped with the app.
pub(super) fn medicines() -> Vec<MedicineRecord> {
    vec![
        MedicineRecord {
            id: "ibuprofen".into(),
            name: "Ibuprofen (Advil, Motrin)".into(),
            description: "Over-the-counter pain reliever & fever reducer.".into(),
            symptoms: strings(&["fever", "pain", "headache", "sore throat", "body aches"]),
            avoid_if_allergy: strings(&["ibuprofen", "advil", "motrin", "nsaid"]),
            avoid_if_history: strings(&["kidney", "ulcer", "bleeding disorder"]),
            pros: strings(&[
                "Reduces fever effectively",
                "Helps with body aches",
                "Widely available",
            ]),
            cons: strings(&[
                "Can cause stomach upset",
                "Not recommended with kidney issues",
            ]),
            cost_label: CostLabel::Low,
        },
        MedicineRecord {
            id: "acetaminophen".into(),
            name: "Acetaminophen (Tylenol)".into(),
            description: "Over-the-counter pain reliever & fever reducer.".into(),
            symptoms: strings(&["fever", "pain", "headache"]),
            avoid_if_allergy: strings(&["acetaminophen", "tylenol"]),
            avoid_if_history: strings(&["liver", "hepatitis"]),
            pros: strings(&[
                "Gentler on the stomach",
                "Effective for pain and fever",
                "Fewer drug interactions",
            ]),
            cons: strings(&[
                "Not an anti-inflammatory",
                "Risk of liver damage if taken in high doses",
            ]),
            cost_label: CostLabel::Low,
        },
        MedicineRecord {
            id: "throat-lozenges".into(),
            name: "Sore Throat Lozenges".into(),
            description: "Medicated drops to soothe throat irritation.".into(),
            symptoms: strings(&["sore throat", "cough", "throat pain"]),
            avoid_if_allergy: strings(&["menthol", "benzocaine"]),
            avoid_if_history: Vec::new(),
            pros: strings(&[
                "Provides immediate relief",
                "Can numb throat slightly",
                "Easy to use",
            ]),
            cons: strings(&[
                "Relief is temporary",
                "Does not treat the underlying cause",
            ]),
            cost_label: CostLabel::Low,
        },
        MedicineRecord {
            id: "saline-spray".into(),
            name: "Saline Nasal Spray".into(),
            description: "Non-medicated spray to ease congestion and dryness.".into(),
            symptoms: strings(&["congestion", "stuffy nose"]),
            avoid_if_allergy: Vec::new(),
            avoid_if_history: Vec::new(),
            pros: strings(&[
                "Safe for most people",
                "Can be used frequently",
                "Non-medicated",
            ]),
            cons: strings(&["Mild, may not be enough alone for severe symptoms"]),
            cost_label: CostLabel::Low,
        },
    ]
}
