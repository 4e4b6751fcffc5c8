use crate::core::codec::ROOT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    /// A field's text does not match its fixed pattern.
    #[error("Format error in field '{field}': '{value}' ({reason})")]
    FormatError {
        field: String,
        value: String,
        reason: String,
    },

    /// A field's JSON type does not match the contract shape.
    #[error("Shape error in field '{field}': expected {expected}, found {found}")]
    ShapeError {
        field: String,
        expected: String,
        found: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Io,
    Config,
}

impl ContractError {
    pub fn format(field: &str, value: &str, reason: impl Into<String>) -> Self {
        ContractError::FormatError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn shape(field: &str, expected: &str, found: &serde_json::Value) -> Self {
        ContractError::ShapeError {
            field: field.to_string(),
            expected: expected.to_string(),
            found: json_type_name(found).to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::FormatError { .. } | ContractError::ShapeError { .. } => {
                ErrorCategory::Contract
            }
            ContractError::IoError(_) | ContractError::SerializationError(_) => ErrorCategory::Io,
            ContractError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// True for errors caused by the payload itself; a host answers these with a 4xx.
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Contract
    }

    /// The offending field or option, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ContractError::FormatError { field, .. }
            | ContractError::ShapeError { field, .. }
            | ContractError::InvalidConfigValueError { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContractError::FormatError { field, value, .. } => {
                format!("Field '{}' has an unreadable value: {}", field, value)
            }
            ContractError::ShapeError {
                field,
                expected,
                found,
            } if field == ROOT => format!("The payload should be {} but is {}", expected, found),
            ContractError::ShapeError {
                field,
                expected,
                found,
            } => format!("Field '{}' should be {} but was {}", field, expected, found),
            ContractError::IoError(e) => format!("Could not read or write the payload: {}", e),
            ContractError::SerializationError(e) => format!("Could not render JSON: {}", e),
            ContractError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, ContractError>;
