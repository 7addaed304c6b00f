//! Local credential store.
//!
//! Holds the user list loaded from the key-value store and the identity of
//! the logged-in user. Demo-grade only: passwords are stored in plaintext.
//!
//! Every operation validates fully before mutating, and persists before
//! committing the in-memory change, so a rejected or failed call leaves the
//! store untouched.

mod password;

pub use password::*;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::db::{Database, DbError};
use crate::models::{normalize_email, UserIdentity, UserRecord};

/// Key of the persisted user list.
pub const DEFAULT_USERS_KEY: &str = "robodoc_users";

/// Credential store errors.
#[derive(Error, Debug)]
pub enum AuthError {
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

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// User accounts plus the in-memory login session.
pub struct CredentialStore {
    db: Database,
    users_key: String,
    users: Vec<UserRecord>,
    current_user: Option<String>,
}

impl CredentialStore {
    /// Load users stored under [`DEFAULT_USERS_KEY`].
    pub fn load(db: Database) -> Self {
        Self::load_with_key(db, DEFAULT_USERS_KEY)
    }

    /// Load users stored under `users_key`. A missing or malformed entry
    /// yields an empty user list.
    pub fn load_with_key(db: Database, users_key: &str) -> Self {
        let users = Self::read_users(&db, users_key);
        debug!(count = users.len(), key = users_key, "Loaded user accounts");
        Self {
            db,
            users_key: users_key.to_string(),
            users,
            current_user: None,
        }
    }

    fn read_users(db: &Database, key: &str) -> Vec<UserRecord> {
        let raw = match db.get_value(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read stored users, starting empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored users are malformed, starting empty");
            Vec::new()
        })
    }

    fn persist(&self, users: &[UserRecord]) -> AuthResult<()> {
        let json = serde_json::to_string(users).map_err(DbError::from)?;
        self.db.set_value(&self.users_key, &json)?;
        Ok(())
    }

    /// Create an account. The email is trimmed and lowercased.
    pub fn sign_up(&mut self, email: &str, password: &str) -> AuthResult<()> {
        let email = normalize_email(email);

        if !is_strong_password(password) {
            return Err(AuthError::WeakPassword);
        }
        if self.users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let mut users = self.users.clone();
        users.push(UserRecord::new(email.clone(), password.to_string()));
        self.persist(&users)?;
        self.users = users;

        info!(email = %email, "Account created");
        Ok(())
    }

    /// Log in with an exact email/password match.
    pub fn log_in(&mut self, email: &str, password: &str) -> AuthResult<UserIdentity> {
        let email = normalize_email(email);

        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or_else(|| {
                debug!(email = %email, "Login rejected");
                AuthError::InvalidCredentials
            })?;

        self.current_user = Some(user.email.clone());
        info!(email = %email, "Logged in");
        Ok(UserIdentity { email })
    }

    /// Change the logged-in user's email and/or password.
    ///
    /// Empty values count as "not given". Persists only if something changed.
    pub fn change_credentials(
        &mut self,
        new_email: Option<&str>,
        new_password: Option<&str>,
    ) -> AuthResult<()> {
        let current_email = self
            .current_user
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;
        let index = self
            .users
            .iter()
            .position(|u| u.email == current_email)
            .ok_or(AuthError::SessionUserMissing)?;

        let new_email = new_email
            .map(normalize_email)
            .filter(|e| !e.is_empty() && *e != current_email);
        let new_password = new_password.filter(|p| !p.is_empty());

        if let Some(email) = &new_email {
            if self.users.iter().any(|u| &u.email == email) {
                return Err(AuthError::DuplicateEmail);
            }
        }

        if let Some(password) = new_password {
            if password == self.users[index].password {
                return Err(AuthError::PasswordUnchanged);
            }
            if !is_strong_password(password) {
                return Err(AuthError::WeakPassword);
            }
        }

        if new_email.is_none() && new_password.is_none() {
            return Ok(());
        }

        let mut users = self.users.clone();
        if let Some(email) = &new_email {
            users[index].email = email.clone();
        }
        if let Some(password) = new_password {
            users[index].password = password.to_string();
        }
        self.persist(&users)?;

        self.users = users;
        if let Some(email) = new_email {
            info!(from = %current_email, to = %email, "Email changed");
            self.current_user = Some(email);
        }
        info!("Credentials updated");
        Ok(())
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.current_user
            .as_ref()
            .map(|email| UserIdentity { email: email.clone() })
    }

    /// All accounts, in creation order.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Get the underlying database.
    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> CredentialStore {
        CredentialStore::load(Database::open_in_memory().unwrap())
    }

    fn logged_in_store() -> CredentialStore {
        let mut store = setup_store();
        store.sign_up("a@b.com", "abc12345!").unwrap();
        store.log_in("a@b.com", "abc12345!").unwrap();
        store
    }

    #[test]
    fn test_sign_up_then_log_in_normalizes_email() {
        let mut store = setup_store();

        store.sign_up("  A@B.com ", "abc12345!").unwrap();
        let identity = store.log_in("a@b.com", "abc12345!").unwrap();

        assert_eq!(identity.email, "a@b.com");
        assert_eq!(store.current_user(), Some(identity));
    }

    #[test]
    fn test_weak_password_rejected() {
        let mut store = setup_store();

        let err = store.sign_up("x@y.com", "alllower").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
        assert!(store.users().is_empty());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut store = setup_store();

        store.sign_up("a@b.com", "abc12345!").unwrap();
        let err = store.sign_up("A@B.COM", "other123!").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_log_in_requires_exact_password() {
        let mut store = setup_store();
        store.sign_up("a@b.com", "abc12345!").unwrap();

        let err = store.log_in("a@b.com", "ABC12345!").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(store.current_user().is_none());

        let err = store.log_in("nobody@b.com", "abc12345!").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_change_requires_session() {
        let mut store = setup_store();
        store.sign_up("a@b.com", "abc12345!").unwrap();

        let err = store
            .change_credentials(Some("c@d.com"), None)
            .unwrap_err();
        assert!(matches!(err, AuthError::NotAuthenticated));
    }

    #[test]
    fn test_change_email_updates_session() {
        let mut store = logged_in_store();

        store.change_credentials(Some(" New@B.com"), None).unwrap();

        assert_eq!(store.current_user().unwrap().email, "new@b.com");
        assert_eq!(store.users()[0].email, "new@b.com");
        assert!(store.log_in("new@b.com", "abc12345!").is_ok());
    }

    #[test]
    fn test_change_email_to_taken_address() {
        let mut store = logged_in_store();
        store.sign_up("taken@b.com", "abc12345!").unwrap();

        let err = store
            .change_credentials(Some("taken@b.com"), None)
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(store.current_user().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_same_email_is_not_a_change() {
        let mut store = logged_in_store();
        assert!(store.change_credentials(Some("A@b.com"), None).is_ok());
        assert_eq!(store.current_user().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_password_unchanged_rejected() {
        let mut store = logged_in_store();

        let err = store
            .change_credentials(None, Some("abc12345!"))
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordUnchanged));
    }

    #[test]
    fn test_weak_new_password_rejected() {
        let mut store = logged_in_store();

        let err = store.change_credentials(None, Some("short")).unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
    }

    #[test]
    fn test_rejected_change_applies_nothing() {
        let mut store = logged_in_store();

        let err = store
            .change_credentials(Some("new@b.com"), Some("abc12345!"))
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordUnchanged));

        // Email change was not applied either
        assert_eq!(store.current_user().unwrap().email, "a@b.com");
        assert_eq!(store.users()[0].email, "a@b.com");
    }

    #[test]
    fn test_change_password() {
        let mut store = logged_in_store();

        store.change_credentials(None, Some("newpass99#")).unwrap();

        assert!(store.log_in("a@b.com", "abc12345!").is_err());
        assert!(store.log_in("a@b.com", "newpass99#").is_ok());
    }

    #[test]
    fn test_empty_change_is_noop() {
        let mut store = logged_in_store();
        assert!(store.change_credentials(Some("  "), Some("")).is_ok());
        assert_eq!(store.users()[0].password, "abc12345!");
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_value(DEFAULT_USERS_KEY, "{not json").unwrap();

        let store = CredentialStore::load(db);
        assert!(store.users().is_empty());
    }

    #[test]
    fn test_persists_after_sign_up() {
        let mut store = setup_store();
        store.sign_up("a@b.com", "abc12345!").unwrap();

        let raw = store.db().get_value(DEFAULT_USERS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"email":"a@b.com","password":"abc12345!"}]"#);
    }
}
