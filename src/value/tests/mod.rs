//! Unit tests for the value module.
//!
//! Tests are organised by contract, covering happy paths, error cases, and
//! edge cases for the UUID handler and its supporting types.

mod binary_string_tests;
mod config_tests;
mod ordering_tests;

use crate::value::adapters::uuid::UuidValueMeta;
use rstest::fixture;

/// Sample UUID used across tests, in canonical form.
pub(super) const SAMPLE: &str = "123e4567-e89b-12d3-a456-426614174000";

#[fixture]
pub(super) fn meta() -> UuidValueMeta {
    UuidValueMeta::new("id")
}

pub(super) fn sample_uuid() -> uuid::Uuid {
    uuid::Uuid::parse_str(SAMPLE).expect("valid sample UUID")
}
