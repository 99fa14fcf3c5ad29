//! Integration tests for the KeyForge vault module: envelope format,
//! codec round-trips, schema migration, and the high-level store.

use chrono::Utc;
use tempfile::TempDir;
use uuid::Uuid;

use keyforge::crypto;
use keyforge::errors::KeyForgeError;
use keyforge::storage::{FsStorage, PRIMARY_FILE};
use keyforge::vault::{
    Envelope, NewEntry, PasswordEntry, VaultCodec, VaultDocument, VaultStore, FORMAT_VERSION,
    SCHEMA_VERSION,
};

fn sample_document() -> VaultDocument {
    let mut doc = VaultDocument::empty();
    let now = Utc::now();
    doc.passwords.push(PasswordEntry {
        id: Uuid::new_v4(),
        title: "GitHub".into(),
        username: "octocat".into(),
        password: "hunter2hunter2".into(),
        url: Some("https://github.com".into()),
        notes: None,
        pinned: true,
        folder_id: None,
        created_at: now,
        updated_at: now,
    });
    doc.passwords.push(PasswordEntry {
        id: Uuid::new_v4(),
        title: "Mail".into(),
        username: "me@example.com".into(),
        password: "s3cret-s3cret".into(),
        url: None,
        notes: Some("work account".into()),
        pinned: false,
        folder_id: None,
        created_at: now,
        updated_at: now,
    });
    doc
}

// ---------------------------------------------------------------------------
// Codec round-trip and opacity
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip_preserves_document() {
    let codec = VaultCodec::with_defaults();
    let doc = sample_document();

    let envelope = codec.seal(&doc, "master-password").expect("seal");
    let reopened = codec.open(&envelope, "master-password").expect("open");

    assert_eq!(reopened.passwords, doc.passwords);
    assert_eq!(reopened.folders, doc.folders);
    assert_eq!(reopened.schema_version, SCHEMA_VERSION);
}

#[test]
fn open_with_wrong_secret_fails_opaquely() {
    let codec = VaultCodec::with_defaults();
    let envelope = codec.seal(&sample_document(), "right-password").expect("seal");

    let result = codec.open(&envelope, "wrong-password");
    assert!(matches!(result, Err(KeyForgeError::AuthenticationFailed)));
}

#[test]
fn single_byte_tamper_anywhere_fails_open() {
    let codec = VaultCodec::with_defaults();
    let envelope = codec.seal(&sample_document(), "master-password").expect("seal");

    // Ciphertext body, auth tag, nonce, salt, associated data — one
    // flipped byte in any region must be fatal.
    let mut tampered = envelope.clone();
    tampered.ciphertext[0] ^= 0x01;
    assert!(matches!(
        codec.open(&tampered, "master-password"),
        Err(KeyForgeError::AuthenticationFailed)
    ));

    let mut tampered = envelope.clone();
    let last = tampered.ciphertext.len() - 1;
    tampered.ciphertext[last] ^= 0x01;
    assert!(matches!(
        codec.open(&tampered, "master-password"),
        Err(KeyForgeError::AuthenticationFailed)
    ));

    let mut tampered = envelope.clone();
    tampered.iv[0] ^= 0x01;
    assert!(matches!(
        codec.open(&tampered, "master-password"),
        Err(KeyForgeError::AuthenticationFailed)
    ));

    let mut tampered = envelope.clone();
    tampered.salt[0] ^= 0x01;
    assert!(matches!(
        codec.open(&tampered, "master-password"),
        Err(KeyForgeError::AuthenticationFailed)
    ));

    let mut tampered = envelope;
    tampered.aad.as_mut().expect("aad present")[0] ^= 0x01;
    assert!(matches!(
        codec.open(&tampered, "master-password"),
        Err(KeyForgeError::AuthenticationFailed)
    ));
}

#[test]
fn sealing_twice_is_never_deterministic() {
    let codec = VaultCodec::with_defaults();
    let doc = sample_document();

    let a = codec.seal(&doc, "master-password").expect("seal 1");
    let b = codec.seal(&doc, "master-password").expect("seal 2");

    assert_ne!(a.salt, b.salt, "salts must be fresh per seal");
    assert_ne!(a.iv, b.iv, "nonces must be fresh per seal");
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn codec_rejects_weak_iteration_counts() {
    assert!(matches!(
        VaultCodec::new(10_000),
        Err(KeyForgeError::InvalidInput(_))
    ));
    assert!(VaultCodec::new(600_000).is_ok());
}

// ---------------------------------------------------------------------------
// Envelope encoding/decoding
// ---------------------------------------------------------------------------

/// Build an envelope directly from the primitives with a low iteration
/// count, so format tests stay fast.
fn fast_envelope(plaintext: &[u8], secret: &str, iterations: u32) -> Envelope {
    let salt = crypto::generate_salt();
    let nonce = crypto::generate_nonce();
    let aad = crypto::generate_aad();
    let key = crypto::derive_key(secret.as_bytes(), &salt, iterations).expect("derive");
    let ciphertext = crypto::seal(&key, &nonce, plaintext, &aad).expect("seal");

    Envelope {
        ciphertext,
        iv: nonce.to_vec(),
        salt: salt.to_vec(),
        iterations,
        aad: Some(aad.to_vec()),
        version: FORMAT_VERSION.to_string(),
    }
}

#[test]
fn envelope_encode_decode_roundtrip() {
    let envelope = fast_envelope(b"payload bytes", "pw", 1_000);

    let text = envelope.encode().expect("encode");
    let decoded = Envelope::decode(&text).expect("decode");

    assert_eq!(decoded.ciphertext, envelope.ciphertext);
    assert_eq!(decoded.iv, envelope.iv);
    assert_eq!(decoded.salt, envelope.salt);
    assert_eq!(decoded.iterations, envelope.iterations);
    assert_eq!(decoded.aad, envelope.aad);
    assert_eq!(decoded.version, FORMAT_VERSION);
}

#[test]
fn envelope_wire_format_matches_contract() {
    let envelope = fast_envelope(b"payload", "pw", 1_000);
    let text = envelope.encode().expect("encode");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for field in ["ciphertext", "iv", "salt", "iterations", "aad", "version"] {
        assert!(value.get(field).is_some(), "missing '{field}' field");
    }
    assert_eq!(value["version"], "2.0");
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(
        Envelope::decode("not json at all"),
        Err(KeyForgeError::MalformedEnvelope(_))
    ));
}

#[test]
fn decode_rejects_wrong_salt_length() {
    let mut envelope = fast_envelope(b"payload", "pw", 1_000);
    envelope.salt.truncate(16);
    let text = envelope.encode().expect("encode");

    assert!(matches!(
        Envelope::decode(&text),
        Err(KeyForgeError::MalformedEnvelope(_))
    ));
}

#[test]
fn decode_rejects_wrong_nonce_length() {
    let mut envelope = fast_envelope(b"payload", "pw", 1_000);
    envelope.iv.push(0);
    let text = envelope.encode().expect("encode");

    assert!(matches!(
        Envelope::decode(&text),
        Err(KeyForgeError::MalformedEnvelope(_))
    ));
}

#[test]
fn decode_rejects_zero_iterations() {
    let mut envelope = fast_envelope(b"payload", "pw", 1_000);
    envelope.iterations = 0;
    let text = envelope.encode().expect("encode");

    assert!(matches!(
        Envelope::decode(&text),
        Err(KeyForgeError::MalformedEnvelope(_))
    ));
}

#[test]
fn decode_rejects_unknown_version() {
    let mut envelope = fast_envelope(b"payload", "pw", 1_000);
    envelope.version = "9.9".to_string();
    let text = envelope.encode().expect("encode");

    assert!(matches!(
        Envelope::decode(&text),
        Err(KeyForgeError::MalformedEnvelope(_))
    ));
}

#[test]
fn decode_accepts_legacy_envelope_without_aad_or_version() {
    let envelope = fast_envelope(b"payload", "pw", 1_000);

    // A 1.0-era blob: no aad, no version field.
    let value = serde_json::json!({
        "ciphertext": base64(&envelope.ciphertext),
        "iv": base64(&envelope.iv),
        "salt": base64(&envelope.salt),
        "iterations": 1_000,
    });

    let decoded = Envelope::decode(&value.to_string()).expect("decode");
    assert_eq!(decoded.version, "1.0");
    assert!(decoded.aad.is_none());
}

fn base64(bytes: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

// ---------------------------------------------------------------------------
// Legacy document normalization
// ---------------------------------------------------------------------------

#[test]
fn legacy_entries_field_is_normalized_on_open() {
    // A document persisted by an old build, entries under `entries`.
    let legacy_json = serde_json::json!({
        "version": "1.0.0",
        "entries": [{
            "id": Uuid::new_v4(),
            "title": "Old Entry",
            "username": "legacy-user",
            "password": "old-password",
            "createdAt": Utc::now(),
            "updatedAt": Utc::now(),
        }],
    });

    let iterations = 1_000;
    let envelope = fast_envelope(legacy_json.to_string().as_bytes(), "pw", iterations);

    // open() honors the envelope's stored iteration count, so the
    // codec's own sealing floor does not get in the way.
    let codec = VaultCodec::with_defaults();
    let doc = codec.open(&envelope, "pw").expect("open legacy");

    assert_eq!(doc.passwords.len(), 1);
    assert_eq!(doc.passwords[0].title, "Old Entry");
    assert_eq!(doc.passwords[0].username, "legacy-user");
}

// ---------------------------------------------------------------------------
// VaultStore over filesystem storage
// ---------------------------------------------------------------------------

fn test_store(dir: &TempDir) -> VaultStore<FsStorage> {
    VaultStore::create(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "master-password",
    )
    .expect("create vault")
}

#[test]
fn create_then_unlock_roundtrip() {
    let dir = TempDir::new().unwrap();

    let mut store = test_store(&dir);
    store
        .add_entry(NewEntry {
            title: "GitHub".into(),
            username: "octocat".into(),
            password: "hunter2hunter2".into(),
            ..NewEntry::default()
        })
        .unwrap();
    store.save().unwrap();

    let reopened = VaultStore::unlock(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "master-password",
    )
    .expect("unlock");

    assert_eq!(reopened.entry_count(), 1);
    let entry = reopened.find_entry("github").expect("entry");
    assert_eq!(entry.password, "hunter2hunter2");
}

#[test]
fn create_refuses_to_clobber_existing_vault() {
    let dir = TempDir::new().unwrap();
    let _store = test_store(&dir);

    let result = VaultStore::create(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "another-password",
    );
    assert!(matches!(result, Err(KeyForgeError::VaultAlreadyExists)));
}

#[test]
fn unlock_without_vault_fails() {
    let dir = TempDir::new().unwrap();
    let result = VaultStore::unlock(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "whatever",
    );
    assert!(matches!(result, Err(KeyForgeError::VaultNotFound)));
}

#[test]
fn deleting_a_folder_clears_entry_references() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    let folder_id = store.add_folder("Work", "#ff0000").unwrap();
    let entry_id = store
        .add_entry(NewEntry {
            title: "Jira".into(),
            username: "me".into(),
            password: "pwpwpwpwpw".into(),
            folder_id: Some(folder_id),
            ..NewEntry::default()
        })
        .unwrap();

    store.delete_folder(folder_id).unwrap();

    assert!(store.folders().is_empty());
    let entry = store.entries().iter().find(|e| e.id == entry_id).unwrap();
    assert_eq!(entry.folder_id, None, "dangling folder reference must be cleared");
}

#[test]
fn update_entry_stamps_updated_at() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    let id = store
        .add_entry(NewEntry {
            title: "Site".into(),
            username: "me".into(),
            password: "first-password".into(),
            ..NewEntry::default()
        })
        .unwrap();

    let created_at = store.entries()[0].created_at;
    store
        .update_entry(id, |e| e.password = "second-password".into())
        .unwrap();

    let entry = &store.entries()[0];
    assert_eq!(entry.password, "second-password");
    assert!(entry.updated_at >= created_at);
}

// ---------------------------------------------------------------------------
// Recovery independence
// ---------------------------------------------------------------------------

#[test]
fn recovery_backup_survives_primary_corruption() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    store
        .add_entry(NewEntry {
            title: "Bank".into(),
            username: "me".into(),
            password: "very-secret-pw".into(),
            ..NewEntry::default()
        })
        .unwrap();
    store.save().unwrap();

    let phrase = store.generate_recovery().expect("generate recovery");
    assert_eq!(phrase.len(), 15);
    assert!(store.recovery_configured());
    drop(store);

    // Vandalize the primary blob.
    std::fs::write(dir.path().join(PRIMARY_FILE), "garbage").unwrap();
    assert!(VaultStore::unlock(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "master-password",
    )
    .is_err());

    // The recovery envelope is untouched and opens independently.
    let recovered = VaultStore::unlock_with_recovery(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        &phrase,
    )
    .expect("recovery unlock");

    assert_eq!(recovered.entry_count(), 1);
    assert_eq!(recovered.find_entry("Bank").unwrap().password, "very-secret-pw");
}

#[test]
fn recovery_with_wrong_phrase_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);
    store.generate_recovery().expect("generate recovery");
    drop(store);

    // A structurally valid phrase that (with overwhelming probability)
    // is not the generated one.
    let wrong: Vec<String> = keyforge::recovery::generate_phrase();

    let result = VaultStore::unlock_with_recovery(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        &wrong,
    );
    assert!(matches!(result, Err(KeyForgeError::AuthenticationFailed)));
}

#[test]
fn recovery_backup_is_a_point_in_time_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    let phrase = store.generate_recovery().expect("generate recovery");

    // Edit after recovery setup; the backup must not see it.
    store
        .add_entry(NewEntry {
            title: "Later".into(),
            username: "me".into(),
            password: "added-after-setup".into(),
            ..NewEntry::default()
        })
        .unwrap();
    store.save().unwrap();
    drop(store);

    let snapshot = VaultStore::unlock_with_recovery(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        &phrase,
    )
    .expect("recovery unlock");

    assert_eq!(snapshot.entry_count(), 0, "backup reflects setup time, not later edits");
}

#[test]
fn change_secret_reseal_keeps_old_password_out() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);
    store.change_secret("new-master-password").unwrap();
    drop(store);

    assert!(matches!(
        VaultStore::unlock(
            FsStorage::new(dir.path()),
            VaultCodec::with_defaults(),
            "master-password",
        ),
        Err(KeyForgeError::AuthenticationFailed)
    ));

    assert!(VaultStore::unlock(
        FsStorage::new(dir.path()),
        VaultCodec::with_defaults(),
        "new-master-password",
    )
    .is_ok());
}
