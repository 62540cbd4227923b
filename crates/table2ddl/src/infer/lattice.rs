//! Type widening lattice.
//!
//! Column types only ever widen as more values are scanned: the join of a
//! value's own classification with the accumulated tag is associative and
//! commutative, so the final tag is independent of row order. VARCHAR is
//! the absorbing maximum - once a column reaches it, nothing narrows it.

use crate::core::Scalar;
use crate::dialect::DialectConfig;

use super::numeric::is_valid_sql_num;

/// Return the wider of two integer tags using the dialect's widening order.
///
/// An unrecognized tag ranks below every known tag, so a known tag always
/// wins against an unknown one.
pub fn get_bigger_int<'a>(tag1: &'a str, tag2: &'a str, dialect: &DialectConfig) -> &'a str {
    if dialect.int_weight(tag1) >= dialect.int_weight(tag2) {
        tag1
    } else {
        tag2
    }
}

/// Widen the accumulated column type `cmp_type` by one observed value.
///
/// `cmp_type` of `""` means no type has been observed yet. Rules are
/// evaluated in fixed priority order, first match wins:
///
/// 1. an accumulated VARCHAR absorbs every value;
/// 2. a boolean value yields the boolean type;
/// 3. NULL leaves the accumulated type unchanged;
/// 4. a value that is not a valid SQL number forces VARCHAR;
/// 5. a float value, or an accumulated float, yields the float type;
/// 6. an integer is classified by magnitude and joined with the
///    accumulated tag via [`get_bigger_int`];
/// 7. anything else falls through with the accumulated type unchanged.
///
/// This function never errors; the orchestrator is responsible for
/// diagnosing fall-through cases.
pub fn detect_data_type(value: &Scalar, cmp_type: &str, dialect: &DialectConfig) -> String {
    if cmp_type == dialect.varchar_type {
        return dialect.varchar_type.clone();
    }
    if matches!(value, Scalar::Bool(_)) {
        return dialect.bool_type.clone();
    }
    if value.is_null() {
        return cmp_type.to_string();
    }
    if !is_valid_sql_num(value) {
        return dialect.varchar_type.clone();
    }
    if matches!(value, Scalar::Float(_)) || cmp_type == dialect.float_type {
        return dialect.float_type.clone();
    }
    if let Scalar::Int(v) = value {
        if cmp_type.is_empty() || cmp_type == dialect.bool_type || dialect.is_integer_tag(cmp_type)
        {
            let classified = dialect.classify_int(*v);
            return get_bigger_int(classified, cmp_type, dialect).to_string();
        }
    }
    cmp_type.to_string()
}
