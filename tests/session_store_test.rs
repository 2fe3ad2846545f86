//! Session cache on disk.

mod common;

use common::test_session;
use folio::auth::SessionStore;
use folio::error::{AuthError, FolioError};
use tempfile::TempDir;

#[test]
fn test_missing_session_is_not_logged_in() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    assert!(store.load().is_none());
    assert_eq!(store.require().unwrap_err(), AuthError::NotLoggedIn);
}

#[test]
fn test_save_creates_directory_and_reloads() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(&dir.path().join("nested"));
    let session = test_session("owner", true);

    store.save(&session).unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load(), Some(session));
}

#[test]
fn test_corrupt_session_is_ignored() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    store.save(&test_session("owner", false)).unwrap();

    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_non_admin_cannot_manage_gallery() {
    let session = test_session("visitor", false);
    let err: FolioError = session.require_admin().unwrap_err().into();
    assert!(err.user_message().contains("visitor"));
}
