//! SQL dialect configuration (Strategy pattern as data).
//!
//! A [`DialectConfig`] is an immutable record of everything that varies
//! between target SQL engines: reserved words, identifier limits, integer
//! boundaries, and VARCHAR sizing rules. It is constructed once per dialect
//! and passed by reference into the pure inference and rendering functions;
//! a derived dialect builds its own config by copying a base and overriding
//! specific fields, so no shared instance is ever mutated.

use std::collections::HashSet;

/// How a reserved-word collision is resolved during column formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedRename {
    /// Append a trailing underscore to the offending name.
    AppendUnderscore,
    /// Discard the name entirely and substitute `{prefix}{index}`.
    PositionalPrefix,
}

/// One integer class in a dialect's widening order: the tag name plus the
/// open interval of values it can hold.
#[derive(Debug, Clone)]
pub struct IntClass {
    /// SQL type name for this class.
    pub tag: String,
    /// Exclusive lower bound.
    pub min: i64,
    /// Exclusive upper bound.
    pub max: i64,
}

impl IntClass {
    fn new(tag: &str, min: i64, max: i64) -> Self {
        Self {
            tag: tag.to_string(),
            min,
            max,
        }
    }
}

/// Immutable per-dialect configuration consumed by the inference,
/// normalization, sizing, and rendering layers.
#[derive(Debug, Clone)]
pub struct DialectConfig {
    /// Dialect name, for diagnostics.
    pub name: String,

    /// Reserved words, stored upper-cased.
    pub reserved_words: HashSet<String>,

    /// When true, column names keep their original case.
    pub case_sensitive: bool,

    /// Ordered literal substring replacements applied to column names.
    pub replace_chars: Vec<(String, String)>,

    /// Prefix used for empty-name fallbacks and positional renames.
    pub fallback_prefix: String,

    /// Maximum identifier length; longer names are truncated.
    pub max_identifier_length: usize,

    /// Reserved-word collision policy.
    pub reserved_rename: ReservedRename,

    /// SQL type name for booleans.
    pub bool_type: String,

    /// SQL type name for floating-point columns.
    pub float_type: String,

    /// SQL type name for variable-length text columns.
    pub varchar_type: String,

    /// SQL type name for the widest integer class (the classification
    /// fallback when no bounded class fits).
    pub bigint_type: String,

    /// Bounded integer classes in ascending width order.
    pub int_classes: Vec<IntClass>,

    /// Full integer widening order, narrowest first, including the
    /// bigint fallback.
    pub int_order: Vec<String>,

    /// Absolute maximum VARCHAR width.
    pub varchar_max: usize,

    /// Ascending step table for bucketed VARCHAR sizing.
    pub varchar_steps: Vec<usize>,

    /// Whether distkey/sortkey clustering clauses are rendered.
    pub supports_clustering: bool,
}

/// Reserved words shared by most SQL engines.
const BASE_RESERVED_WORDS: &[&str] = &[
    "ALL", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CHECK", "COLUMN",
    "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DEFAULT", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FALSE", "FOR", "FOREIGN", "FROM",
    "FULL", "GRANT", "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTO", "IS", "JOIN", "LEFT",
    "LIKE", "LIMIT", "NOT", "NULL", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES",
    "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE",
    "USER", "USING", "VALUES", "WHEN", "WHERE", "WITH",
];

/// Additional words reserved by the Redshift family.
const REDSHIFT_RESERVED_WORDS: &[&str] = &[
    "AES128", "AES256", "BLANKSASNULL", "CREDENTIALS", "DISTKEY", "ENCODE", "EXPLICIT",
    "GETDATE", "IDENTITY", "LOCALTIME", "OFFSET", "OID", "OLD", "RESPECT", "SORTKEY", "SYSDATE",
    "TOP",
];

impl DialectConfig {
    /// Base dialect: generic SQL with a MEDIUMINT class, 64-character
    /// identifiers, and underscore renames for reserved words.
    pub fn base() -> Self {
        Self {
            name: "base".to_string(),
            reserved_words: BASE_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            case_sensitive: false,
            replace_chars: vec![(" ".to_string(), "_".to_string())],
            fallback_prefix: "_".to_string(),
            max_identifier_length: 64,
            reserved_rename: ReservedRename::AppendUnderscore,
            bool_type: "boolean".to_string(),
            float_type: "float".to_string(),
            varchar_type: "varchar".to_string(),
            bigint_type: "bigint".to_string(),
            int_classes: vec![
                IntClass::new("smallint", -32_768, 32_767),
                IntClass::new("mediumint", -8_388_608, 8_388_607),
                IntClass::new("int", -2_147_483_648, 2_147_483_647),
            ],
            int_order: vec![
                "smallint".to_string(),
                "mediumint".to_string(),
                "int".to_string(),
                "bigint".to_string(),
            ],
            varchar_max: 65_535,
            varchar_steps: vec![32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16_384, 32_768],
            supports_clustering: false,
        }
    }

    /// Redshift-family warehouse dialect, derived from [`base`](Self::base).
    ///
    /// Differences: no MEDIUMINT class, 127-character identifiers, reserved
    /// words renamed positionally to `col_{index}`, and distkey/sortkey
    /// clustering clauses.
    pub fn redshift() -> Self {
        let mut dialect = Self::base();
        dialect.name = "redshift".to_string();
        dialect
            .reserved_words
            .extend(REDSHIFT_RESERVED_WORDS.iter().map(|w| w.to_string()));
        dialect.fallback_prefix = "col_".to_string();
        dialect.max_identifier_length = 127;
        dialect.reserved_rename = ReservedRename::PositionalPrefix;
        dialect.int_classes.retain(|c| c.tag != "mediumint");
        dialect.int_order.retain(|t| t != "mediumint");
        dialect.supports_clustering = true;
        dialect
    }

    /// Quote an identifier with double quotes, doubling embedded quotes.
    #[must_use]
    pub fn quote_ident(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Position of `tag` in the integer widening order, or -1 for tags this
    /// dialect does not recognize.
    #[must_use]
    pub fn int_weight(&self, tag: &str) -> i64 {
        self.int_order
            .iter()
            .position(|t| t == tag)
            .map_or(-1, |p| p as i64)
    }

    /// Check if `tag` is one of this dialect's integer type names.
    #[must_use]
    pub fn is_integer_tag(&self, tag: &str) -> bool {
        self.int_order.iter().any(|t| t == tag)
    }

    /// Classify an integer into the narrowest class whose open interval
    /// strictly contains it, falling through to the bigint type.
    #[must_use]
    pub fn classify_int(&self, value: i64) -> &str {
        for class in &self.int_classes {
            if class.min < value && value < class.max {
                return &class.tag;
            }
        }
        &self.bigint_type
    }
}
