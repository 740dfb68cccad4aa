//! Unit tests for comparison and hashing.

use std::cmp::Ordering;

use super::{SAMPLE, meta};
use crate::value::adapters::uuid::UuidValueMeta;
use crate::value::domain::{Value, ValueMetaConfig};
use crate::value::ports::ValueMeta;
use rstest::rstest;

fn descending() -> UuidValueMeta {
    UuidValueMeta::from_config(ValueMetaConfig::named("id").with_sort_descending(true))
}

// ============================================================================
// compare tests
// ============================================================================

#[rstest]
fn compare_is_reflexive(meta: UuidValueMeta) {
    let value = Value::from(SAMPLE);
    assert_eq!(meta.compare(&value, &value).expect("comparable"), Ordering::Equal);
}

#[rstest]
#[case(
    "00000000-0000-0000-0000-000000000001",
    "00000000-0000-0000-0000-000000000002"
)]
#[case(
    "7fffffff-ffff-ffff-ffff-ffffffffffff",
    "80000000-0000-0000-0000-000000000000"
)]
#[case(
    "00000000-0000-0000-ffff-ffffffffffff",
    "00000000-0000-0001-0000-000000000000"
)]
#[case(
    "00000000-0000-0000-7fff-ffffffffffff",
    "00000000-0000-0000-8000-000000000000"
)]
fn compare_orders_as_unsigned_128_bit(meta: UuidValueMeta, #[case] lower: &str, #[case] higher: &str) {
    let low = Value::from(lower);
    let high = Value::from(higher);
    assert_eq!(meta.compare(&low, &high).expect("comparable"), Ordering::Less);
    assert_eq!(meta.compare(&high, &low).expect("comparable"), Ordering::Greater);
}

#[rstest]
fn compare_treats_representations_equally(meta: UuidValueMeta) {
    let text = Value::from("123E4567-E89B-12D3-A456-426614174000");
    let native = Value::Uuid(uuid::Uuid::parse_str(SAMPLE).expect("valid"));
    assert_eq!(meta.compare(&text, &native).expect("comparable"), Ordering::Equal);
}

#[rstest]
#[case(false, Ordering::Less)]
#[case(true, Ordering::Greater)]
fn compare_null_position_follows_direction(#[case] sort_descending: bool, #[case] expected: Ordering) {
    let meta = UuidValueMeta::from_config(
        ValueMetaConfig::named("id").with_sort_descending(sort_descending),
    );
    let value = Value::from(SAMPLE);

    assert_eq!(meta.compare(&Value::Null, &value).expect("comparable"), expected);
    assert_eq!(
        meta.compare(&value, &Value::Null).expect("comparable"),
        expected.reverse()
    );
}

#[rstest]
#[case(false)]
#[case(true)]
fn compare_two_nulls_is_equal(#[case] sort_descending: bool) {
    let meta = UuidValueMeta::from_config(
        ValueMetaConfig::named("id").with_sort_descending(sort_descending),
    );
    assert_eq!(
        meta.compare(&Value::Null, &Value::Null).expect("comparable"),
        Ordering::Equal
    );
}

#[test]
fn compare_descending_reverses_non_null_order() {
    let low = Value::from("00000000-0000-0000-0000-000000000001");
    let high = Value::from("00000000-0000-0000-0000-000000000002");
    assert_eq!(descending().compare(&low, &high).expect("comparable"), Ordering::Greater);
}

#[test]
fn compare_honours_empty_as_null() {
    let meta =
        UuidValueMeta::from_config(ValueMetaConfig::named("id").with_empty_is_null(true));
    let ordering = meta
        .compare(&Value::from(""), &Value::from(SAMPLE))
        .expect("empty string counts as null");
    assert_eq!(ordering, Ordering::Less);
}

#[rstest]
fn compare_propagates_conversion_error(meta: UuidValueMeta) {
    let err = meta
        .compare(&Value::from(SAMPLE), &Value::from("not-a-uuid"))
        .expect_err("conversion should fail");
    assert!(err.is_conversion());
}

#[rstest]
fn compare_is_antisymmetric_and_sorts_consistently(meta: UuidValueMeta) {
    let uuids: Vec<uuid::Uuid> = (0..32).map(|_| uuid::Uuid::new_v4()).collect();
    let mut values: Vec<Value> = uuids.iter().copied().map(Value::Uuid).collect();
    values.push(Value::Null);

    for left in &values {
        for right in &values {
            let forward = meta.compare(left, right).expect("comparable");
            let backward = meta.compare(right, left).expect("comparable");
            assert_eq!(forward, backward.reverse());
        }
    }

    values.sort_by(|left, right| meta.compare(left, right).expect("comparable"));
    let mut expected = uuids;
    expected.sort();
    let mut expected_values = vec![Value::Null];
    expected_values.extend(expected.into_iter().map(Value::Uuid));
    assert_eq!(values, expected_values);
}

// ============================================================================
// hash_value tests
// ============================================================================

#[rstest]
fn hash_of_null_is_zero(meta: UuidValueMeta) {
    assert_eq!(meta.hash_value(&Value::Null).expect("null hashes"), 0);
}

#[rstest]
fn hash_ignores_input_representation(meta: UuidValueMeta) {
    let upper = meta
        .hash_value(&Value::from("123E4567-E89B-12D3-A456-426614174000"))
        .expect("hashable");
    let lower = meta.hash_value(&Value::from(SAMPLE)).expect("hashable");
    let native = meta
        .hash_value(&Value::Uuid(uuid::Uuid::parse_str(SAMPLE).expect("valid")))
        .expect("hashable");
    assert_eq!(upper, lower);
    assert_eq!(lower, native);
}

#[rstest]
#[case("00000000-0000-0000-0000-000000000000", 0)]
#[case("00000000-0000-0001-0000-000000000000", 1)]
#[case("00000000-0000-0000-0000-000000000001", 1)]
#[case("00000000-0000-0001-0000-000000000001", 0)]
#[case("00000001-0000-0000-0000-000000000000", 1)]
#[case("00000000-ffff-ffff-0000-000000000000", -1)]
fn hash_folds_halves(meta: UuidValueMeta, #[case] input: &str, #[case] expected: i32) {
    assert_eq!(meta.hash_value(&Value::from(input)).expect("hashable"), expected);
}

#[rstest]
fn hash_propagates_conversion_error(meta: UuidValueMeta) {
    let err = meta
        .hash_value(&Value::from("not-a-uuid"))
        .expect_err("conversion should fail");
    assert!(err.is_conversion());
}
