//! Core value and table abstractions shared by the inference and
//! assembly layers.

pub mod table;
pub mod value;

pub use table::{MemoryTable, TableSource};
pub use value::Scalar;
