//! Numeric literal validation.

use crate::core::Scalar;

/// Decide whether a scalar is an acceptable SQL numeric literal.
///
/// Booleans are never numeric, even in sources that encode them as an
/// integer subtype, so they are rejected before any numeric check. Native
/// integers and floats always pass. Strings must parse as a number, carry
/// no underscore digit-group separators, and must not be zero-padded:
/// `"01"` is rejected while `"0"` and `"0.0"` are allowed. Anything else
/// (including NULL) is not a number.
pub fn is_valid_sql_num(value: &Scalar) -> bool {
    match value {
        Scalar::Bool(_) => false,
        Scalar::Int(_) | Scalar::Float(_) => true,
        Scalar::Text(s) => {
            if s.contains('_') || s.parse::<f64>().is_err() {
                return false;
            }
            s == "0" || s == "0.0" || !s.starts_with('0')
        }
        Scalar::Null => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Scalar {
        Scalar::Text(s.to_string())
    }

    #[test]
    fn test_booleans_never_numeric() {
        assert!(!is_valid_sql_num(&Scalar::Bool(true)));
        assert!(!is_valid_sql_num(&Scalar::Bool(false)));
    }

    #[test]
    fn test_native_numbers() {
        assert!(is_valid_sql_num(&Scalar::Int(0)));
        assert!(is_valid_sql_num(&Scalar::Int(-42)));
        assert!(is_valid_sql_num(&Scalar::Float(3.25)));
    }

    #[test]
    fn test_numeric_strings() {
        assert!(is_valid_sql_num(&text("1")));
        assert!(is_valid_sql_num(&text("1.0")));
        assert!(is_valid_sql_num(&text("-17.5")));
    }

    #[test]
    fn test_zero_forms() {
        assert!(is_valid_sql_num(&text("0")));
        assert!(is_valid_sql_num(&text("0.0")));
        // Any other zero-leading literal is ambiguous and rejected.
        assert!(!is_valid_sql_num(&text("01")));
        assert!(!is_valid_sql_num(&text("0.5")));
        assert!(!is_valid_sql_num(&text("007")));
    }

    #[test]
    fn test_underscore_separators_rejected() {
        assert!(!is_valid_sql_num(&text("1_0")));
        assert!(!is_valid_sql_num(&text("1_000_000")));
    }

    #[test]
    fn test_non_numeric_inputs() {
        assert!(!is_valid_sql_num(&text("abc")));
        assert!(!is_valid_sql_num(&text("")));
        assert!(!is_valid_sql_num(&text("12abc")));
        assert!(!is_valid_sql_num(&Scalar::Null));
    }
}
