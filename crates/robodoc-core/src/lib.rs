//! RoboDoc Core Library
//!
//! Mock medication recommendations from free-text symptoms, plus a local,
//! demo-grade account store.
//!
//! # Architecture
//!
//! ```text
//! symptom / history / allergy text
//!               │
//!           Tokenizer
//!               │
//!   ┌───────────▼───────────┐
//!   │        Matcher        │◄── Catalog (fixed at startup)
//!   │  symptoms: substring  │
//!   │  conflicts: exact     │
//!   └───────────┬───────────┘
//!               │
//!        Recommendations ──► presentation (robodoc-chat / native shell)
//!
//! CredentialStore ◄──► Database (SQLite key-value entry "robodoc_users")
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Read-only medicine catalog
//! - [`matcher`]: Tokenizer and recommendation matcher
//! - [`auth`]: Credential store and password rule
//! - [`db`]: SQLite key-value storage
//! - [`models`]: Domain types (MedicineRecord, MatchResult, UserRecord, etc.)
//! - [`config`]: JSON configuration with defaults
//! - [`logging`]: tracing subscriber setup

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod matcher;
pub mod models;

// Re-export commonly used types
pub use auth::{AuthError, CredentialStore};
pub use catalog::{Catalog, CatalogError};
pub use config::AppConfig;
pub use db::Database;
pub use matcher::{tokenize, Matcher};
pub use models::{
    CostLabel, MatchResult, MedicineRecord, Recommendations, SafetyReason, UserIdentity,
    UserRecord,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum RoboDocError {
    #[error("An account with that email already exists.")]
    DuplicateEmail,

    #[error("Password must be at least 8 characters and include a special character.")]
    WeakPassword,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("You must be logged in to change your email or password.")]
    NotAuthenticated,

    #[error("New password cannot be the same as the old password.")]
    PasswordUnchanged,

    #[error("Current user not found. Please log in again.")]
    SessionUserMissing,

    #[error("Please enter your primary symptoms or diagnosis first.")]
    MissingInput,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<AuthError> for RoboDocError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateEmail => RoboDocError::DuplicateEmail,
            AuthError::WeakPassword => RoboDocError::WeakPassword,
            AuthError::InvalidCredentials => RoboDocError::InvalidCredentials,
            AuthError::NotAuthenticated => RoboDocError::NotAuthenticated,
            AuthError::PasswordUnchanged => RoboDocError::PasswordUnchanged,
            AuthError::SessionUserMissing => RoboDocError::SessionUserMissing,
            AuthError::Storage(e) => RoboDocError::StorageError(e.to_string()),
        }
    }
}

impl From<db::DbError> for RoboDocError {
    fn from(e: db::DbError) -> Self {
        RoboDocError::StorageError(e.to_string())
    }
}

impl From<CatalogError> for RoboDocError {
    fn from(e: CatalogError) -> Self {
        RoboDocError::ConfigError(e.to_string())
    }
}

impl From<anyhow::Error> for RoboDocError {
    fn from(e: anyhow::Error) -> Self {
        RoboDocError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for RoboDocError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RoboDocError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install the global log subscriber. Returns false if one already exists.
#[uniffi::export]
pub fn setup_logging(filter: String) -> bool {
    logging::init_logging(&filter)
}

/// Open the app using the JSON config at `config_path` (defaults if missing).
///
/// Installs the log subscriber from `log_filter` unless one already exists.
#[uniffi::export]
pub fn open_app(config_path: String) -> Result<Arc<RoboDocCore>, RoboDocError> {
    let config = AppConfig::load(&config_path)?;
    logging::init_logging(&config.log_filter);
    let db = Database::open(&config.storage.database_path)?;
    RoboDocCore::new(db, config).map(Arc::new)
}

/// Open the app with default settings and an in-memory database (for testing).
#[uniffi::export]
pub fn open_app_in_memory() -> Result<Arc<RoboDocCore>, RoboDocError> {
    let db = Database::open_in_memory()?;
    RoboDocCore::new(db, AppConfig::default()).map(Arc::new)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe app state for FFI.
#[derive(uniffi::Object)]
pub struct RoboDocCore {
    auth: Mutex<CredentialStore>,
    catalog: Catalog,
    config: AppConfig,
}

impl RoboDocCore {
    fn new(db: Database, config: AppConfig) -> Result<Self, RoboDocError> {
        let catalog = config.catalog()?;
        let auth = CredentialStore::load_with_key(db, &config.storage.users_key);
        Ok(Self {
            auth: Mutex::new(auth),
            catalog,
            config,
        })
    }
}

#[uniffi::export]
impl RoboDocCore {
    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Create an account.
    pub fn sign_up(&self, email: String, password: String) -> Result<(), RoboDocError> {
        let mut auth = self.auth.lock()?;
        auth.sign_up(&email, &password)?;
        Ok(())
    }

    /// Log in and return the normalized email.
    pub fn log_in(&self, email: String, password: String) -> Result<String, RoboDocError> {
        let mut auth = self.auth.lock()?;
        let identity = auth.log_in(&email, &password)?;
        Ok(identity.email)
    }

    /// Change the logged-in user's email and/or password.
    pub fn change_credentials(
        &self,
        new_email: Option<String>,
        new_password: Option<String>,
    ) -> Result<(), RoboDocError> {
        let mut auth = self.auth.lock()?;
        auth.change_credentials(new_email.as_deref(), new_password.as_deref())?;
        Ok(())
    }

    /// Email of the logged-in user, if any.
    pub fn current_user(&self) -> Result<Option<String>, RoboDocError> {
        let auth = self.auth.lock()?;
        Ok(auth.current_user().map(|u| u.email))
    }

    // =========================================================================
    // Recommendation Operations
    // =========================================================================

    /// Match free text against the catalog.
    pub fn recommend(
        &self,
        symptoms: String,
        history: Option<String>,
        allergies: Option<String>,
    ) -> Result<Vec<FfiMatchResult>, RoboDocError> {
        if symptoms.trim().is_empty() {
            return Err(RoboDocError::MissingInput);
        }
        let matcher = Matcher::new(&self.catalog);
        let recs = matcher.recommend(&symptoms, history.as_deref(), allergies.as_deref());
        Ok(recs.into_iter().map(Into::into).collect())
    }

    /// All catalog entries, in catalog order.
    pub fn list_catalog(&self) -> Vec<FfiMedicine> {
        self.catalog.iter().cloned().map(Into::into).collect()
    }

    /// Configured display delay before showing analysis results.
    pub fn analysis_delay_ms(&self) -> u64 {
        self.config.analysis.delay_ms
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medicine record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub cost_label: String,
}

impl From<MedicineRecord> for FfiMedicine {
    fn from(med: MedicineRecord) -> Self {
        Self {
            id: med.id,
            name: med.name,
            description: med.description,
            symptoms: med.symptoms,
            pros: med.pros,
            cons: med.cons,
            cost_label: med.cost_label.to_string(),
        }
    }
}

/// FFI-safe match result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMatchResult {
    pub medicine: FfiMedicine,
    pub safe: bool,
    pub reason: String,
}

impl From<MatchResult> for FfiMatchResult {
    fn from(result: MatchResult) -> Self {
        Self {
            medicine: result.medicine.into(),
            safe: result.safe,
            reason: result.reason.to_string(),
        }
    }
}
