//! Data-type detection: numeric literal validation and the widening
//! lattice that turns a stream of scalar values into a column type tag.

pub mod lattice;
pub mod numeric;

pub use lattice::{detect_data_type, get_bigger_int};
pub use numeric::is_valid_sql_num;
