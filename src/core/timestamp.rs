use crate::domain::Field;
use crate::utils::error::{ContractError, Result};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;

/// Wire pattern of `lastReadTimestamp`, in the notation used by the contract docs.
pub const TIMESTAMP_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSSSSZ";

/// The same pattern as a chrono format string.
pub const CHRONO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

// chrono alone accepts any fraction width and a colon in the offset.
static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{6}[+-]\d{4}$")
        .expect("timestamp shape regex is valid")
});

pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(CHRONO_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    let field = Field::LastReadTimestamp.wire_name();

    if !SHAPE.is_match(raw) {
        return Err(ContractError::format(
            field,
            raw,
            format!("expected pattern {}", TIMESTAMP_PATTERN),
        ));
    }

    DateTime::parse_from_str(raw, CHRONO_FORMAT)
        .map_err(|e| ContractError::format(field, raw, format!("invalid timestamp: {}", e)))
}
