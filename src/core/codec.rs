use crate::core::timestamp::{format_timestamp, parse_timestamp};
use crate::domain::{Absence, CustomerContract, Field, FieldValue};
use crate::utils::error::{ContractError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Field name reported when the payload as a whole has the wrong shape.
pub const ROOT: &str = "$";

/// Reads a contract from an already-parsed JSON value.
///
/// A top-level `null` stands for "no body" and yields the empty contract.
/// Keys that are not part of the contract are ignored.
pub fn from_value(value: &Value) -> Result<CustomerContract> {
    let object = match value {
        Value::Null => {
            tracing::debug!("Empty customer payload, using empty contract");
            return Ok(CustomerContract::default());
        }
        Value::Object(object) => object,
        other => return Err(ContractError::shape(ROOT, "a JSON object", other)),
    };

    for key in object.keys() {
        if Field::from_wire_name(key).is_none() {
            tracing::trace!(key = %key, "Ignoring unknown customer field");
        }
    }

    let mut contract = CustomerContract::default();
    for field in Field::ALL {
        // Absent and null are the same wire state.
        let raw = object.get(field.wire_name()).filter(|v| !v.is_null());
        let value = match (raw, field.absence()) {
            (Some(raw), _) => decode_field(field, raw)?,
            (None, Absence::Unset) => continue,
            (None, Absence::CollapseToEmpty) => FieldValue::empty(field),
        };
        contract = contract.with_field(value);
    }

    tracing::debug!(
        id = ?contract.id(),
        order_numbers = contract.order_numbers().len(),
        "Decoded customer contract"
    );
    Ok(contract)
}

pub fn from_json_str(input: &str) -> Result<CustomerContract> {
    let value: Value = serde_json::from_str(input).map_err(malformed)?;
    from_value(&value)
}

pub fn from_json_slice(input: &[u8]) -> Result<CustomerContract> {
    let value: Value = serde_json::from_slice(input).map_err(malformed)?;
    from_value(&value)
}

/// Renders the contract as a JSON value. Unset scalars are left out.
pub fn to_value(contract: &CustomerContract) -> Value {
    let mut object = Map::new();
    for field in Field::ALL {
        if let Some(value) = encode_field(contract, field) {
            object.insert(field.wire_name().to_string(), value);
        }
    }
    Value::Object(object)
}

/// Renders the contract as JSON text, keys in wire order.
pub fn to_json_string(contract: &CustomerContract) -> Result<String> {
    Ok(serde_json::to_string(contract)?)
}

pub fn to_json_string_pretty(contract: &CustomerContract) -> Result<String> {
    Ok(serde_json::to_string_pretty(contract)?)
}

/// Canonical form of a payload: read it as a contract and write it back.
pub fn normalize_json_str(input: &str, pretty: bool) -> Result<String> {
    let contract = from_json_str(input)?;
    if pretty {
        to_json_string_pretty(&contract)
    } else {
        to_json_string(&contract)
    }
}

fn malformed(err: serde_json::Error) -> ContractError {
    ContractError::ShapeError {
        field: ROOT.to_string(),
        expected: "a JSON document".to_string(),
        found: format!("unreadable text ({})", err),
    }
}

fn decode_field(field: Field, raw: &Value) -> Result<FieldValue> {
    let name = field.wire_name();
    match field {
        Field::Id => raw
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(|id| FieldValue::Id(Some(id)))
            .ok_or_else(|| ContractError::shape(name, "a 32-bit integer", raw)),
        Field::FullName => raw
            .as_str()
            .map(|s| FieldValue::FullName(Some(s.to_string())))
            .ok_or_else(|| ContractError::shape(name, "a string", raw)),
        Field::LastReadTimestamp => {
            let text = raw
                .as_str()
                .ok_or_else(|| ContractError::shape(name, "a timestamp string", raw))?;
            Ok(FieldValue::LastReadTimestamp(Some(parse_timestamp(text)?)))
        }
        Field::OrderNumbers => {
            let items = raw
                .as_array()
                .ok_or_else(|| ContractError::shape(name, "an array of strings", raw))?;
            let numbers = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| ContractError::shape(&format!("{}[{}]", name, i), "a string", item))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::OrderNumbers(Some(numbers)))
        }
    }
}

/// The wire value of `field`, or `None` when the field is left out of the payload.
fn encode_field(contract: &CustomerContract, field: Field) -> Option<Value> {
    let value = match field {
        Field::Id => contract.id().map(Value::from),
        Field::FullName => contract.full_name().map(Value::from),
        Field::LastReadTimestamp => contract
            .last_read_timestamp()
            .map(|ts| Value::String(format_timestamp(&ts))),
        Field::OrderNumbers => Some(contract.order_numbers())
            .filter(|numbers| !numbers.is_empty())
            .map(|numbers| Value::from(numbers.to_vec())),
    };

    match (value, field.absence()) {
        (Some(value), _) => Some(value),
        (None, Absence::Unset) => None,
        (None, Absence::CollapseToEmpty) => Some(Value::Array(Vec::new())),
    }
}

impl Serialize for CustomerContract {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries: Vec<(Field, Value)> = Field::ALL
            .into_iter()
            .filter_map(|field| encode_field(self, field).map(|v| (field, v)))
            .collect();

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (field, value) in &entries {
            map.serialize_entry(field.wire_name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CustomerContract {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(serde::de::Error::custom)
    }
}
