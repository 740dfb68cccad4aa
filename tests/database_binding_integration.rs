//! Integration tests for moving UUID values between handlers and statements.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use diesel::pg::Pg;
use eyre::Result;
use rstest::rstest;
use uuid::Uuid;
use valuemeta_uuid::value::{
    adapters::{
        memory::{BoundParameter, InMemoryRow, RecordingBinder},
        postgres::PgStatement,
        uuid::UuidValueMeta,
    },
    domain::{ColumnDefinitionOptions, DialectDescriptor, Value},
    ports::ValueMeta,
};

fn bound_value(parameter: &BoundParameter) -> Value {
    match parameter {
        BoundParameter::Null(_) => Value::Null,
        BoundParameter::Uuid(uuid) => Value::Uuid(*uuid),
        BoundParameter::String(text) => Value::from(text.as_str()),
    }
}

#[rstest]
#[case(DialectDescriptor::postgres(), RecordingBinder::new())]
#[case(DialectDescriptor::mysql(), RecordingBinder::text_only())]
#[case(DialectDescriptor::mssql_native(), RecordingBinder::new())]
fn values_round_trip_through_binder_and_row(
    #[case] dialect: DialectDescriptor,
    #[case] mut binder: RecordingBinder,
) -> Result<()> {
    let meta = UuidValueMeta::new("id");
    let values = [Value::Uuid(Uuid::new_v4()), Value::Null, Value::Uuid(Uuid::max())];

    for (index, value) in (1_usize..).zip(&values) {
        meta.bind_parameter(&mut binder, index, value)?;
    }
    let row = InMemoryRow::new(binder.params().values().map(bound_value));
    assert_eq!(row.width(), values.len());

    for (index, value) in values.iter().enumerate() {
        assert_eq!(meta.value_from_row(&dialect, &row, index)?, meta.convert(value)?);
    }
    Ok(())
}

#[test]
fn insert_statement_binds_every_column() -> Result<()> {
    let dialect = DialectDescriptor::postgres();
    let id = UuidValueMeta::new("id");
    let parent = UuidValueMeta::new("parent_id");
    let options = ColumnDefinitionOptions::default().with_field_name();

    let ddl = format!(
        "CREATE TABLE orders ({}, {})",
        id.column_type_definition(&dialect, &options),
        parent.column_type_definition(&dialect, &options)
    );
    assert_eq!(ddl, "CREATE TABLE orders (id UUID, parent_id UUID)");

    let order = Uuid::new_v4();
    let mut statement = PgStatement::new("INSERT INTO orders (id, parent_id) VALUES ($1, $2)");
    id.bind_parameter(&mut statement, 1, &Value::from(order.to_string()))?;
    parent.bind_parameter(&mut statement, 2, &Value::Null)?;

    let query = statement.into_query()?;
    let debug = diesel::debug_query::<Pg, _>(&query).to_string();
    assert!(debug.contains("-- binds:"));
    assert!(debug.contains(&order.to_string()));
    Ok(())
}

#[test]
fn text_only_driver_receives_canonical_text() {
    let meta = UuidValueMeta::new("id");
    let mut binder = RecordingBinder::text_only();
    meta.bind_parameter(
        &mut binder,
        1,
        &Value::from(" 123E4567-E89B-12D3-A456-426614174000\n"),
    )
    .expect("fallback bind succeeds");

    assert_eq!(
        binder.get(1),
        Some(&BoundParameter::String(
            "123e4567-e89b-12d3-a456-426614174000".to_owned()
        ))
    );
}
