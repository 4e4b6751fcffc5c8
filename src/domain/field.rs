use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a missing or `null` wire value turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// The field stays unset and is omitted when serialized.
    Unset,
    /// The field becomes its empty value and is always serialized.
    CollapseToEmpty,
}

/// The fields of the customer contract, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    FullName,
    LastReadTimestamp,
    OrderNumbers,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Id,
        Field::FullName,
        Field::LastReadTimestamp,
        Field::OrderNumbers,
    ];

    /// Key used in the JSON payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FullName => "fullName",
            Field::LastReadTimestamp => "lastReadTimestamp",
            Field::OrderNumbers => "orderNumbers",
        }
    }

    pub fn rust_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FullName => "full_name",
            Field::LastReadTimestamp => "last_read_timestamp",
            Field::OrderNumbers => "order_numbers",
        }
    }

    pub fn absence(self) -> Absence {
        match self {
            Field::OrderNumbers => Absence::CollapseToEmpty,
            _ => Absence::Unset,
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.wire_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown customer field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts either the wire key or the snake_case Rust name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_wire_name(s)
            .or_else(|| Field::ALL.into_iter().find(|f| f.rust_name() == s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_unique_and_ordered() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(
            names,
            vec!["id", "fullName", "lastReadTimestamp", "orderNumbers"]
        );
    }

    #[test]
    fn test_only_order_numbers_collapses() {
        for field in Field::ALL {
            let expected = if field == Field::OrderNumbers {
                Absence::CollapseToEmpty
            } else {
                Absence::Unset
            };
            assert_eq!(field.absence(), expected, "{}", field);
        }
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("fullName".parse::<Field>(), Ok(Field::FullName));
        assert_eq!("last_read_timestamp".parse::<Field>(), Ok(Field::LastReadTimestamp));
        let err = "FullName".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown customer field: FullName");
    }
}
