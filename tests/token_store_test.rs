// ABOUTME: On-disk token persistence tests - round trip, blob import, permissions
// ABOUTME: Uses tempdirs so no real token directory is touched
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{Duration, Utc};
use garmin_mcp_server::garmin::{OAuth2Token, TokenStore};
use tempfile::TempDir;

fn sample_token() -> OAuth2Token {
    OAuth2Token {
        access_token: "access-abc".to_owned(),
        refresh_token: Some("refresh-def".to_owned()),
        expires_at: Some(Utc::now() + Duration::hours(10)),
        token_type: "Bearer".to_owned(),
        scope: Some("connect:all".to_owned()),
    }
}

#[test]
fn test_empty_directory_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().to_path_buf());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().join("tokens"));

    let token = sample_token();
    store.save(&token).unwrap();
    assert!(store.token_path().is_file());

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.access_token, token.access_token);
    assert_eq!(loaded.refresh_token, token.refresh_token);
    assert_eq!(loaded.token_type, "Bearer");
    assert_eq!(loaded.scope, token.scope);
}

#[cfg(unix)]
#[test]
fn test_token_file_permissions_are_restricted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().to_path_buf());
    store.save(&sample_token()).unwrap();

    let mode = std::fs::metadata(store.token_path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_blob_import_when_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("tokens.b64");

    let serialized = serde_json::to_string(&sample_token()).unwrap();
    std::fs::write(&blob_path, BASE64.encode(serialized.as_bytes())).unwrap();

    let store = TokenStore::with_blob(dir.path().join("empty"), Some(blob_path));
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.access_token, "access-abc");
}

#[test]
fn test_save_mirrors_blob_when_configured() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("tokens.b64");
    let store = TokenStore::with_blob(dir.path().join("tokens"), Some(blob_path.clone()));

    store.save(&sample_token()).unwrap();

    let raw = std::fs::read_to_string(&blob_path).unwrap();
    let decoded = BASE64.decode(raw.trim().as_bytes()).unwrap();
    let token: OAuth2Token = serde_json::from_slice(&decoded).unwrap();
    assert_eq!(token.access_token, "access-abc");
}

#[test]
fn test_corrupt_token_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().to_path_buf());
    std::fs::write(store.token_path(), "not json").unwrap();

    assert!(store.load().is_err());
}

#[test]
fn test_directory_token_wins_over_blob() {
    let dir = TempDir::new().unwrap();
    let blob_path = dir.path().join("tokens.b64");

    let mut blob_token = sample_token();
    blob_token.access_token = "from-blob".to_owned();
    let serialized = serde_json::to_string(&blob_token).unwrap();
    std::fs::write(&blob_path, BASE64.encode(serialized.as_bytes())).unwrap();

    // Seed the directory without touching the blob
    TokenStore::new(dir.path().to_path_buf())
        .save(&sample_token())
        .unwrap();

    let store = TokenStore::with_blob(dir.path().to_path_buf(), Some(blob_path));
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.access_token, "access-abc");
}
