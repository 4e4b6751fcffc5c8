// Domain layer: the contract value object and its field table. No I/O.

pub mod customer;
pub mod field;

pub use customer::{CustomerContract, CustomerContractBuilder, FieldValue};
pub use field::{Absence, Field};
