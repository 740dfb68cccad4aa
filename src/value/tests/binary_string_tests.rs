//! Unit tests for binary-string payloads.

use super::{SAMPLE, meta, sample_uuid};
use crate::value::adapters::uuid::UuidValueMeta;
use crate::value::domain::{StorageType, Value, ValueMetaConfig};
use crate::value::error::ValueMetaError;
use crate::value::ports::ValueMeta;
use rstest::rstest;

fn binary_storage(identical_format: bool) -> UuidValueMeta {
    UuidValueMeta::from_config(
        ValueMetaConfig::named("id")
            .with_storage_type(StorageType::BinaryString)
            .with_identical_format(identical_format),
    )
}

#[rstest]
fn binary_string_encodes_rendered_text(meta: UuidValueMeta) {
    let bytes = meta
        .binary_string(&Value::Uuid(sample_uuid()))
        .expect("encodable");
    assert_eq!(bytes.as_deref(), Some(SAMPLE.as_bytes()));
}

#[rstest]
fn binary_string_null_is_none(meta: UuidValueMeta) {
    assert_eq!(meta.binary_string(&Value::Null).expect("null encodes"), None);
}

#[test]
fn identical_binary_storage_passes_payload_through() {
    let raw = b"123E4567-E89B-12D3-A456-426614174000".to_vec();
    let bytes = binary_storage(true)
        .binary_string(&Value::Binary(raw.clone()))
        .expect("payload passes through");
    assert_eq!(bytes, Some(raw));
}

#[test]
fn non_identical_binary_storage_normalises_payload() {
    let raw = b"123E4567-E89B-12D3-A456-426614174000".to_vec();
    let bytes = binary_storage(false)
        .binary_string(&Value::Binary(raw))
        .expect("payload converts");
    assert_eq!(bytes.as_deref(), Some(SAMPLE.as_bytes()));
}

#[test]
fn identical_binary_storage_still_encodes_native_values() {
    let bytes = binary_storage(true)
        .binary_string(&Value::Uuid(sample_uuid()))
        .expect("native value encodes");
    assert_eq!(bytes.as_deref(), Some(SAMPLE.as_bytes()));
}

#[test]
fn latin1_encoding_matches_ascii_text() {
    let meta =
        UuidValueMeta::from_config(ValueMetaConfig::named("id").with_string_encoding("ISO-8859-1"));
    let bytes = meta.binary_string(&Value::from(SAMPLE)).expect("encodable");
    assert_eq!(bytes.as_deref(), Some(SAMPLE.as_bytes()));
}

#[test]
fn unsupported_encoding_is_conversion_error() {
    let meta =
        UuidValueMeta::from_config(ValueMetaConfig::named("id").with_string_encoding("EBCDIC-XX"));
    let err = meta
        .binary_string(&Value::from(SAMPLE))
        .expect_err("encoding should be rejected");

    assert!(err.is_conversion());
    assert!(matches!(
        &err,
        ValueMetaError::UnsupportedEncoding { encoding, .. } if encoding == "EBCDIC-XX"
    ));
}

#[rstest]
fn binary_string_inverse_recovers_uuid(meta: UuidValueMeta) {
    let bytes = meta
        .binary_string(&Value::from(SAMPLE))
        .expect("encodable")
        .expect("non-null");
    let recovered = meta
        .convert_binary_string_to_native(&bytes)
        .expect("decodable");
    assert_eq!(recovered, Some(sample_uuid()));
}

#[rstest]
fn binary_string_inverse_rejects_empty_payload(meta: UuidValueMeta) {
    let err = meta
        .convert_binary_string_to_native(&[])
        .expect_err("empty payload is not a UUID");
    assert!(err.is_conversion());
}
