pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::codec::{
    from_json_slice, from_json_str, from_value, normalize_json_str, to_json_string,
    to_json_string_pretty, to_value,
};
pub use core::timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_PATTERN};
pub use domain::{Absence, CustomerContract, CustomerContractBuilder, Field, FieldValue};
pub use utils::error::{ContractError, ErrorCategory, Result};
