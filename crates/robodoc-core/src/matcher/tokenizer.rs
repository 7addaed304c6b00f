//! Free-text tokenizer.
//!
//! Lowercases the input and splits on every run of characters that are not
//! ASCII letters or digits. No stemming and no stopword removal.

/// Split free text into lowercase ASCII alphanumeric tokens, in input order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tokenize optional text; absent text yields no tokens.
pub fn tokenize_opt(text: Option<&str>) -> Vec<String> {
    text.map(tokenize).unwrap_or_default()
}
