//! Variable-width sizing transforms.
//!
//! Each transform is a total, pure function over the per-column "longest
//! observed byte width" array. The orchestrator composes them in a fixed
//! order: padding or stepping, max-forcing, truncation, zero-guarding.

use crate::dialect::DialectConfig;
use crate::error::{DdlError, Result};

/// Grow every width by a fractional padding factor, flooring the result.
pub fn vc_padding(longest: &[usize], factor: f64) -> Vec<usize> {
    longest
        .iter()
        .map(|&w| ((w as f64) * (1.0 + factor)).floor() as usize)
        .collect()
}

/// Snap each width up to the first step that leaves at least 2x headroom
/// (`longest < step / 2`); widths beyond the whole step table get the
/// dialect's absolute VARCHAR maximum.
pub fn vc_step(longest: &[usize], dialect: &DialectConfig) -> Vec<usize> {
    longest
        .iter()
        .map(|&w| {
            dialect
                .varchar_steps
                .iter()
                .copied()
                .find(|&step| w < step / 2)
                .unwrap_or(dialect.varchar_max)
        })
        .collect()
}

/// Force every listed column's width to the dialect's absolute VARCHAR
/// maximum.
///
/// # Errors
///
/// Returns [`DdlError::UnknownColumn`] if a listed name is not present in
/// `headers`.
pub fn vc_max(
    longest: &[usize],
    headers: &[String],
    target_columns: &[String],
    dialect: &DialectConfig,
) -> Result<Vec<usize>> {
    let mut out = longest.to_vec();
    for column in target_columns {
        let index = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DdlError::unknown_column(column))?;
        out[index] = dialect.varchar_max;
    }
    Ok(out)
}

/// Cap every width at the dialect's absolute VARCHAR maximum.
pub fn vc_trunc(longest: &[usize], dialect: &DialectConfig) -> Vec<usize> {
    longest.iter().map(|&w| w.min(dialect.varchar_max)).collect()
}

/// Replace zero widths with 1; a zero-width VARCHAR is invalid DDL.
pub fn vc_validate(longest: &[usize]) -> Vec<usize> {
    longest.iter().map(|&w| w.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vc_padding_floors() {
        assert_eq!(vc_padding(&[10, 0, 7], 0.25), vec![12, 0, 8]);
        assert_eq!(vc_padding(&[100], 0.1), vec![110]);
    }

    #[test]
    fn test_vc_step_first_step_with_headroom() {
        let mut dialect = DialectConfig::base();
        dialect.varchar_steps = vec![32, 64, 128];
        dialect.varchar_max = 65_535;
        assert_eq!(vc_step(&[10], &dialect), vec![32]);
        // A width equal to step/2 does not fit that step.
        assert_eq!(vc_step(&[16], &dialect), vec![64]);
        assert_eq!(vc_step(&[40], &dialect), vec![128]);
    }

    #[test]
    fn test_vc_step_overflow_uses_dialect_max() {
        let mut dialect = DialectConfig::base();
        dialect.varchar_steps = vec![32, 64, 128];
        dialect.varchar_max = 65_535;
        assert_eq!(vc_step(&[100], &dialect), vec![65_535]);
    }

    #[test]
    fn test_vc_max_forces_listed_columns() {
        let dialect = DialectConfig::base();
        let headers = vec!["a".to_string(), "b".to_string()];
        let out = vc_max(&[5, 9], &headers, &["b".to_string()], &dialect).unwrap();
        assert_eq!(out, vec![5, dialect.varchar_max]);
    }

    #[test]
    fn test_vc_max_unknown_column_errors() {
        let dialect = DialectConfig::base();
        let headers = vec!["a".to_string()];
        let err = vc_max(&[5], &headers, &["missing".to_string()], &dialect).unwrap_err();
        assert!(matches!(err, DdlError::UnknownColumn { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_vc_trunc_caps_at_max() {
        let dialect = DialectConfig::base();
        let out = vc_trunc(&[10, 1_000_000], &dialect);
        assert_eq!(out, vec![10, dialect.varchar_max]);
    }

    #[test]
    fn test_vc_validate_zero_guard() {
        assert_eq!(vc_validate(&[0]), vec![1]);
        assert_eq!(vc_validate(&[0, 5, 0]), vec![1, 5, 1]);
    }
}
