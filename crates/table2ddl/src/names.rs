//! Column name normalization.
//!
//! Sanitizes raw column headers against a dialect's naming rules: case
//! folding, whitespace trimming, character replacement, reserved-word
//! renames, digit prefixes, length truncation, and batch deduplication.

use crate::dialect::{DialectConfig, ReservedRename};

/// Sanitize a single column name against the dialect's naming rules.
///
/// `index` is the column's position; it is only consulted for the
/// empty-name fallback and for dialects that rename reserved words
/// positionally. Steps, in order:
///
/// 1. lower-case unless the dialect is case-sensitive;
/// 2. trim surrounding whitespace;
/// 3. apply the dialect's ordered substring replacements;
/// 4. an empty result becomes `{prefix}{index}`;
/// 5. a reserved word (checked upper-cased) is renamed per the dialect's
///    collision policy;
/// 6. a leading digit is prefixed with `x_`;
/// 7. the result is truncated to the dialect's identifier limit.
pub fn format_column(name: &str, index: usize, dialect: &DialectConfig) -> String {
    let folded = if dialect.case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    };
    let mut out = folded.trim().to_string();
    for (from, to) in &dialect.replace_chars {
        out = out.replace(from.as_str(), to.as_str());
    }

    if out.is_empty() {
        return format!("{}{}", dialect.fallback_prefix, index);
    }

    if dialect.reserved_words.contains(&out.to_uppercase()) {
        out = match dialect.reserved_rename {
            ReservedRename::AppendUnderscore => format!("{}_", out),
            ReservedRename::PositionalPrefix => {
                format!("{}{}", dialect.fallback_prefix, index)
            }
        };
    }

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out = format!("x_{}", out);
    }

    if out.chars().count() > dialect.max_identifier_length {
        out = out.chars().take(dialect.max_identifier_length).collect();
    }

    out
}

/// Format every column name and deduplicate the results.
///
/// Each column is formatted with its own positional index, then a
/// left-to-right scan renames any name that already appeared earlier by
/// appending `_{index}` - the positional index of the duplicate
/// occurrence, not a running counter.
pub fn format_columns<S: AsRef<str>>(names: &[S], dialect: &DialectConfig) -> Vec<String> {
    let mut out: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(index, name)| format_column(name.as_ref(), index, dialect))
        .collect();

    for index in 0..out.len() {
        if out[..index].contains(&out[index]) {
            out[index] = format!("{}_{}", out[index], index);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_folding_and_trimming() {
        let dialect = DialectConfig::base();
        assert_eq!(format_column("Name", 0, &dialect), "name");
        assert_eq!(format_column("  Name  ", 0, &dialect), "name");
        assert_eq!(format_column("First Name", 0, &dialect), "first_name");
    }

    #[test]
    fn test_case_sensitive_dialect_keeps_case() {
        let mut dialect = DialectConfig::base();
        dialect.case_sensitive = true;
        assert_eq!(format_column("Name", 0, &dialect), "Name");
    }

    #[test]
    fn test_empty_name_fallback() {
        let dialect = DialectConfig::base();
        assert_eq!(format_column("", 3, &dialect), "_3");
        assert_eq!(format_column("   ", 3, &dialect), "_3");
    }

    #[test]
    fn test_empty_name_fallback_uses_dialect_prefix() {
        let dialect = DialectConfig::redshift();
        assert_eq!(format_column("", 3, &dialect), "col_3");
    }

    #[test]
    fn test_reserved_word_append_underscore() {
        let dialect = DialectConfig::base();
        assert_eq!(format_column("SELECT", 0, &dialect), "select_");
        assert_eq!(format_column("table", 5, &dialect), "table_");
    }

    #[test]
    fn test_reserved_word_positional_rename() {
        let dialect = DialectConfig::redshift();
        assert_eq!(format_column("SELECT", 2, &dialect), "col_2");
        assert_eq!(format_column("sortkey", 7, &dialect), "col_7");
    }

    #[test]
    fn test_leading_digit_prefixed() {
        let dialect = DialectConfig::base();
        assert_eq!(format_column("2020_sales", 0, &dialect), "x_2020_sales");
    }

    #[test]
    fn test_truncation_to_identifier_limit() {
        let mut dialect = DialectConfig::base();
        dialect.max_identifier_length = 8;
        assert_eq!(format_column("abcdefghijkl", 0, &dialect), "abcdefgh");
    }

    #[test]
    fn test_chained_replacements_apply_in_order() {
        let mut dialect = DialectConfig::base();
        dialect.replace_chars = vec![
            (" ".to_string(), "_".to_string()),
            ("-".to_string(), "_".to_string()),
        ];
        assert_eq!(format_column("a b-c", 0, &dialect), "a_b_c");
    }

    #[test]
    fn test_format_columns_deduplicates_by_index() {
        let dialect = DialectConfig::base();
        let out = format_columns(&["a", "A", "b"], &dialect);
        assert_eq!(out, vec!["a", "a_1", "b"]);
    }

    #[test]
    fn test_format_columns_repeated_duplicates() {
        let dialect = DialectConfig::base();
        let out = format_columns(&["x", "x", "x"], &dialect);
        assert_eq!(out, vec!["x", "x_1", "x_2"]);
    }

    #[test]
    fn test_format_columns_all_names_non_empty() {
        let dialect = DialectConfig::base();
        let out = format_columns(&["", " ", "a"], &dialect);
        assert!(out.iter().all(|n| !n.is_empty()));
        assert_eq!(out, vec!["_0", "_1", "a"]);
    }
}
