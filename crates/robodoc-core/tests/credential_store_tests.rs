//! Credential store persistence tests against an on-disk database.

use robodoc_core::auth::{AuthError, CredentialStore, DEFAULT_USERS_KEY};
use robodoc_core::db::Database;

fn open(path: &std::path::Path) -> CredentialStore {
    CredentialStore::load(Database::open(path).unwrap())
}

#[test]
fn test_accounts_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robodoc.db");

    {
        let mut store = open(&path);
        store.sign_up("A@B.com", "abc12345!").unwrap();
        store.sign_up("c@d.com", "xyz98765?").unwrap();
    }

    let mut store = open(&path);
    assert_eq!(store.users().len(), 2);
    assert_eq!(store.users()[0].email, "a@b.com");
    assert_eq!(store.users()[1].email, "c@d.com");

    // Session state is not persisted
    assert!(store.current_user().is_none());
    assert!(store.log_in("a@b.com", "abc12345!").is_ok());
}

#[test]
fn test_credential_change_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robodoc.db");

    {
        let mut store = open(&path);
        store.sign_up("a@b.com", "abc12345!").unwrap();
        store.log_in("a@b.com", "abc12345!").unwrap();
        store
            .change_credentials(Some("new@b.com"), Some("fresh-pass1"))
            .unwrap();
    }

    let mut store = open(&path);
    let err = store.log_in("a@b.com", "abc12345!").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(store.log_in("new@b.com", "fresh-pass1").is_ok());
}

#[test]
fn test_reads_external_entry() {
    let db = Database::open_in_memory().unwrap();
    db.set_value(
        DEFAULT_USERS_KEY,
        r#"[{"email":"x@y.com","password":"pa$$word1"}]"#,
    )
    .unwrap();

    let mut store = CredentialStore::load(db);
    assert!(store.log_in("X@Y.com ", "pa$$word1").is_ok());
}

#[test]
fn test_wrong_shape_degrades_to_empty() {
    let db = Database::open_in_memory().unwrap();
    db.set_value(DEFAULT_USERS_KEY, r#"{"email":"x@y.com"}"#).unwrap();

    let mut store = CredentialStore::load(db);
    assert!(store.users().is_empty());

    // The store still works and overwrites the bad entry
    store.sign_up("x@y.com", "abc12345!").unwrap();
    assert_eq!(store.users().len(), 1);
}

#[test]
fn test_custom_users_key() {
    let db = Database::open_in_memory().unwrap();
    let mut store = CredentialStore::load_with_key(db, "other_users");
    store.sign_up("a@b.com", "abc12345!").unwrap();

    assert!(store.db().get_value(DEFAULT_USERS_KEY).unwrap().is_none());
    assert!(store.db().get_value("other_users").unwrap().is_some());
}
