//! Local account models.

use serde::{Deserialize, Serialize};

/// A locally stored account. Demo-grade: the password is kept in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Normalized email (trimmed, lowercase), unique across users
    pub email: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub email: String,
}

impl UserIdentity {
    /// Label shown in the header once logged in.
    pub fn label(&self) -> String {
        format!("Logged in as {}", self.email)
    }
}

/// Normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
