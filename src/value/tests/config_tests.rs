//! Unit tests for `ValueMetaConfig` loading and validation.

use crate::value::domain::{ConfigError, StorageType, ValueMetaConfig};

#[test]
fn default_config_matches_engine_defaults() {
    let config = ValueMetaConfig::default();
    assert_eq!(config.name, None);
    assert!(!config.sort_descending);
    assert_eq!(config.storage_type, StorageType::Normal);
    assert!(config.identical_format);
    assert_eq!(config.string_encoding, None);
    assert!(!config.empty_is_null);
}

#[test]
fn from_json_fills_missing_fields() {
    let config = ValueMetaConfig::from_json(r#"{"name": "order_id", "sort_descending": true}"#)
        .expect("valid config");
    assert_eq!(config.name.as_deref(), Some("order_id"));
    assert!(config.sort_descending);
    assert!(config.identical_format);
    assert_eq!(config.storage_type, StorageType::Normal);
}

#[test]
fn from_json_reads_storage_type() {
    let config = ValueMetaConfig::from_json(
        r#"{"storage_type": "binary_string", "identical_format": false, "string_encoding": "UTF-16LE"}"#,
    )
    .expect("valid config");
    assert_eq!(config.storage_type, StorageType::BinaryString);
    assert!(!config.identical_format);
    assert_eq!(config.string_encoding.as_deref(), Some("UTF-16LE"));
}

#[test]
fn from_json_rejects_unknown_encoding() {
    let err = ValueMetaConfig::from_json(r#"{"string_encoding": "KOI8-Q"}"#)
        .expect_err("encoding should be rejected");
    assert!(matches!(err, ConfigError::UnsupportedEncoding(ref name) if name == "KOI8-Q"));
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = ValueMetaConfig::from_json("{name:").expect_err("malformed JSON");
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid value metadata configuration"));
}

#[test]
fn config_serialises_with_snake_case_storage() {
    let config = ValueMetaConfig::named("id").with_storage_type(StorageType::BinaryString);
    let json = serde_json::to_value(&config).expect("serialisable");
    assert_eq!(json["storage_type"], "binary_string");
    assert_eq!(json["name"], "id");
}
