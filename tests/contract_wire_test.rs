use anyhow::Result;
use chrono::{FixedOffset, TimeZone, Timelike};
use customer_contract::{
    from_json_str, from_value, to_json_string, to_value, ContractError, CustomerContract, Field,
    FieldValue,
};
use serde_json::json;

fn full_contract() -> CustomerContract {
    let ts = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 6, 1, 10, 15, 30)
        .unwrap()
        .with_nanosecond(123_456_000)
        .unwrap();
    CustomerContract::new(
        Some(42),
        Some("Ada Lovelace".to_string()),
        Some(ts),
        Some(vec!["ORD-1".to_string(), "ORD-2".to_string()]),
    )
}

/// A fully populated contract survives serialize then deserialize.
#[test]
fn test_round_trip_full_contract() -> Result<()> {
    let original = full_contract();
    let text = to_json_string(&original)?;
    let restored = from_json_str(&text)?;

    assert_eq!(restored, original);
    assert_eq!(
        to_value(&original),
        json!({
            "id": 42,
            "fullName": "Ada Lovelace",
            "lastReadTimestamp": "2023-06-01T10:15:30.123456+0200",
            "orderNumbers": ["ORD-1", "ORD-2"]
        })
    );
    Ok(())
}

#[test]
fn test_absent_fields_stay_absent() -> Result<()> {
    let contract = from_json_str("{}")?;

    assert_eq!(contract.id(), None);
    assert_eq!(contract.full_name(), None);
    assert_eq!(contract.last_read_timestamp(), None);
    assert!(contract.order_numbers().is_empty());
    assert_eq!(to_json_string(&contract)?, r#"{"orderNumbers":[]}"#);
    Ok(())
}

#[test]
fn test_null_order_numbers_collapse() -> Result<()> {
    let contract = from_value(&json!({ "orderNumbers": null }))?;
    assert!(contract.order_numbers().is_empty());
    assert!(contract.is_set(Field::OrderNumbers));
    Ok(())
}

#[test]
fn test_timestamp_text_is_reproduced() -> Result<()> {
    let raw = "2023-06-01T10:15:30.123456+0000";
    let contract = from_value(&json!({ "lastReadTimestamp": raw }))?;
    assert_eq!(to_value(&contract)["lastReadTimestamp"], json!(raw));
    Ok(())
}

#[test]
fn test_bad_timestamp_is_format_error() {
    let err = from_value(&json!({ "lastReadTimestamp": "not-a-date" })).unwrap_err();
    match err {
        ContractError::FormatError { field, value, .. } => {
            assert_eq!(field, "lastReadTimestamp");
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected a format error, got {other}"),
    }
}

#[test]
fn test_order_numbers_not_a_list_is_shape_error() {
    let err = from_value(&json!({ "orderNumbers": "not-a-list" })).unwrap_err();
    assert!(matches!(
        err,
        ContractError::ShapeError { ref field, ref found, .. }
            if field == "orderNumbers" && found == "string"
    ));
    assert!(err.is_client_error());
}

#[test]
fn test_with_field_is_non_destructive() {
    let original = full_contract();
    let renamed = original.with_field(FieldValue::FullName(Some("X".to_string())));

    assert_eq!(original, full_contract());
    assert_eq!(renamed.full_name(), Some("X"));
    assert_eq!(renamed.with_full_name(original.full_name().map(str::to_string)), original);
}

#[test]
fn test_unknown_keys_are_ignored() -> Result<()> {
    let contract = from_value(&json!({ "unknownKey": 1, "id": 5 }))?;
    assert_eq!(contract.id(), Some(5));
    assert_eq!(to_value(&contract), json!({ "id": 5, "orderNumbers": [] }));
    Ok(())
}

/// A host embeds the contract in its own serde types.
#[test]
fn test_embedding_in_host_type() -> Result<()> {
    #[derive(serde::Deserialize, serde::Serialize)]
    struct Envelope {
        customer: Option<CustomerContract>,
    }

    let envelope: Envelope = serde_json::from_value(json!({
        "customer": { "id": 9, "orderNumbers": null }
    }))?;
    let customer = envelope.customer.as_ref().unwrap();
    assert_eq!(customer.id(), Some(9));
    assert!(customer.order_numbers().is_empty());
    assert_eq!(
        serde_json::to_value(&envelope)?,
        json!({ "customer": { "id": 9, "orderNumbers": [] } })
    );

    let err = serde_json::from_value::<Envelope>(json!({
        "customer": { "lastReadTimestamp": "yesterday" }
    }));
    assert!(err.is_err());
    Ok(())
}

/// Same instant, different offset: the payloads differ, so the contracts do too.
#[test]
fn test_offset_is_part_of_equality() -> Result<()> {
    let utc = from_json_str(r#"{"lastReadTimestamp":"2023-06-01T10:15:30.123456+0000"}"#)?;
    let plus_two = from_json_str(r#"{"lastReadTimestamp":"2023-06-01T12:15:30.123456+0200"}"#)?;

    assert_eq!(utc.last_read_timestamp(), plus_two.last_read_timestamp());
    assert_ne!(to_json_string(&utc)?, to_json_string(&plus_two)?);
    assert_ne!(utc, plus_two);

    let restored = from_json_str(&to_json_string(&plus_two)?)?;
    assert_eq!(restored, plus_two);
    Ok(())
}
