pub mod codec;
pub mod timestamp;

pub use crate::domain::{CustomerContract, Field, FieldValue};
pub use crate::utils::error::Result;
