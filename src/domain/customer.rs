use crate::domain::field::Field;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

/// One customer record as exchanged over JSON.
///
/// Instances are immutable. Every `with_*` call returns a new value and the
/// unchanged fields are shared with the source through `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CustomerContract {
    id: Option<i32>,
    full_name: Option<Arc<str>>,
    last_read_timestamp: Option<DateTime<FixedOffset>>,
    order_numbers: Arc<[String]>,
}

impl CustomerContract {
    /// All-args constructor. `None` order numbers collapse to an empty list.
    pub fn new(
        id: Option<i32>,
        full_name: Option<String>,
        last_read_timestamp: Option<DateTime<FixedOffset>>,
        order_numbers: Option<Vec<String>>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.map(Arc::from),
            last_read_timestamp,
            order_numbers: order_numbers.unwrap_or_default().into(),
        }
    }

    pub fn builder() -> CustomerContractBuilder {
        CustomerContractBuilder::default()
    }

    pub fn to_builder(&self) -> CustomerContractBuilder {
        CustomerContractBuilder {
            id: self.id,
            full_name: self.full_name.as_deref().map(str::to_string),
            last_read_timestamp: self.last_read_timestamp,
            order_numbers: Some(self.order_numbers.to_vec()),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn last_read_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.last_read_timestamp
    }

    pub fn order_numbers(&self) -> &[String] {
        &self.order_numbers
    }

    pub fn with_id(&self, id: Option<i32>) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    pub fn with_full_name(&self, full_name: Option<String>) -> Self {
        Self {
            full_name: full_name.map(Arc::from),
            ..self.clone()
        }
    }

    pub fn with_last_read_timestamp(&self, last_read_timestamp: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            last_read_timestamp,
            ..self.clone()
        }
    }

    pub fn with_order_numbers(&self, order_numbers: Option<Vec<String>>) -> Self {
        Self {
            order_numbers: order_numbers.unwrap_or_default().into(),
            ..self.clone()
        }
    }

    /// Replaces exactly one field, chosen at runtime.
    pub fn with_field(&self, value: FieldValue) -> Self {
        match value {
            FieldValue::Id(id) => self.with_id(id),
            FieldValue::FullName(name) => self.with_full_name(name),
            FieldValue::LastReadTimestamp(ts) => self.with_last_read_timestamp(ts),
            FieldValue::OrderNumbers(numbers) => self.with_order_numbers(numbers),
        }
    }

    /// Whether `field` holds a value. `orderNumbers` is always set.
    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Id => self.id.is_some(),
            Field::FullName => self.full_name.is_some(),
            Field::LastReadTimestamp => self.last_read_timestamp.is_some(),
            Field::OrderNumbers => true,
        }
    }
}

// chrono's DateTime equality ignores the offset; two timestamps are the same
// contract value only when both the instant and the offset match.
impl PartialEq for CustomerContract {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.full_name == other.full_name
            && same_timestamp(self.last_read_timestamp, other.last_read_timestamp)
            && self.order_numbers == other.order_numbers
    }
}

impl Eq for CustomerContract {}

fn same_timestamp(a: Option<DateTime<FixedOffset>>, b: Option<DateTime<FixedOffset>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b && a.offset() == b.offset(),
        (None, None) => true,
        _ => false,
    }
}

/// A replacement value for a single contract field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Id(Option<i32>),
    FullName(Option<String>),
    LastReadTimestamp(Option<DateTime<FixedOffset>>),
    OrderNumbers(Option<Vec<String>>),
}

impl FieldValue {
    /// The value a field takes when it is missing from the payload.
    pub fn empty(field: Field) -> FieldValue {
        match field {
            Field::Id => FieldValue::Id(None),
            Field::FullName => FieldValue::FullName(None),
            Field::LastReadTimestamp => FieldValue::LastReadTimestamp(None),
            Field::OrderNumbers => FieldValue::OrderNumbers(Some(Vec::new())),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            FieldValue::Id(_) => Field::Id,
            FieldValue::FullName(_) => Field::FullName,
            FieldValue::LastReadTimestamp(_) => Field::LastReadTimestamp,
            FieldValue::OrderNumbers(_) => Field::OrderNumbers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerContractBuilder {
    id: Option<i32>,
    full_name: Option<String>,
    last_read_timestamp: Option<DateTime<FixedOffset>>,
    order_numbers: Option<Vec<String>>,
}

impl CustomerContractBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn last_read_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.last_read_timestamp = Some(timestamp);
        self
    }

    pub fn order_numbers(mut self, order_numbers: Option<Vec<String>>) -> Self {
        self.order_numbers = order_numbers;
        self
    }

    pub fn order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_numbers
            .get_or_insert_with(Vec::new)
            .push(order_number.into());
        self
    }

    pub fn build(self) -> CustomerContract {
        CustomerContract::new(
            self.id,
            self.full_name,
            self.last_read_timestamp,
            self.order_numbers,
        )
    }
}
