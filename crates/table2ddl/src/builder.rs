//! Schema inference and CREATE TABLE assembly.
//!
//! A single linear pass over the table drives the type lattice and width
//! tracking per column; width finishing, type overrides, and rendering
//! happen afterwards in a fixed order. Each call builds its own
//! [`SchemaMapping`] and discards it - no state survives between calls.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::core::{Scalar, TableSource};
use crate::dialect::DialectConfig;
use crate::error::{DdlError, Result};
use crate::infer::{detect_data_type, is_valid_sql_num};
use crate::names::format_columns;
use crate::width;

/// Textual placeholder for missing values in CSV-like sources.
///
/// Sentinels bypass type inference but still feed width tracking.
const NA_SENTINEL: &str = "NA";

/// Caller options for [`create_statement`].
#[derive(Debug, Clone)]
pub struct StatementOptions {
    /// Fractional width padding; takes precedence over stepped sizing.
    pub padding: Option<f64>,

    /// Distribution key rendered verbatim in a trailing clause.
    pub distkey: Option<String>,

    /// Sort key columns; more than one renders a compound sortkey.
    pub sortkey: Vec<String>,

    /// Formatted column names forced to the dialect's VARCHAR maximum.
    pub varchar_max: Vec<String>,

    /// Cap widths at the dialect maximum (default true).
    pub varchar_truncate: bool,

    /// Per-column literal type overrides, keyed by formatted column name
    /// and applied verbatim after inference.
    pub column_types: HashMap<String, String>,

    /// When false, widths snap up to the dialect's step table instead of
    /// staying exact (default true).
    pub strict_length: bool,
}

impl Default for StatementOptions {
    fn default() -> Self {
        Self {
            padding: None,
            distkey: None,
            sortkey: Vec::new(),
            varchar_max: Vec::new(),
            varchar_truncate: true,
            column_types: HashMap::new(),
            strict_length: true,
        }
    }
}

/// The result of one scan pass: parallel per-column arrays indexed by
/// column position.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaMapping {
    /// Formatted, deduplicated column names.
    pub headers: Vec<String>,

    /// Inferred SQL type tag per column.
    pub type_list: Vec<String>,

    /// Widest observed UTF-8 byte length per column.
    pub longest: Vec<usize>,
}

fn is_sentinel(value: &Scalar) -> bool {
    matches!(value, Scalar::Text(s) if s.is_empty() || s == NA_SENTINEL)
}

/// Scan the table once and accumulate a type tag and widest textual byte
/// length per column.
///
/// NULL cells feed neither accumulator. Sentinel text (`"NA"`, `""`) still
/// counts toward width but never advances the column type; a column whose
/// type never advanced defaults to the dialect's VARCHAR type.
///
/// # Errors
///
/// Returns [`DdlError::EmptyTable`] if the table has no rows.
pub fn infer_schema(table: &dyn TableSource, dialect: &DialectConfig) -> Result<SchemaMapping> {
    if table.is_empty() {
        return Err(DdlError::EmptyTable);
    }

    let headers = format_columns(table.headers(), dialect);
    let ncols = headers.len();
    let mut type_list: Vec<String> = vec![String::new(); ncols];
    let mut longest: Vec<usize> = vec![0; ncols];

    for row in table.rows() {
        for (i, value) in row.iter().enumerate().take(ncols) {
            if value.is_null() {
                continue;
            }
            let text_width = value.text_width();
            if text_width > longest[i] {
                longest[i] = text_width;
            }
            if is_sentinel(value) {
                continue;
            }
            let next = detect_data_type(value, &type_list[i], dialect);
            if next == type_list[i] {
                // The only reachable fall-through: a string that passes
                // numeric validation but is neither a host int nor float.
                if let Scalar::Text(s) = value {
                    if is_valid_sql_num(value) {
                        debug!(
                            column = headers[i].as_str(),
                            value = s.as_str(),
                            "numeric-looking string left column type unchanged"
                        );
                    }
                }
            }
            type_list[i] = next;
        }
    }

    for tag in &mut type_list {
        if tag.is_empty() {
            *tag = dialect.varchar_type.clone();
        }
    }

    Ok(SchemaMapping {
        headers,
        type_list,
        longest,
    })
}

/// Infer a schema from the table and render a complete `CREATE TABLE`
/// statement for the dialect.
///
/// Width finishing runs in a fixed order: padding if given, otherwise
/// stepped sizing when `strict_length` is off; then max-forcing for the
/// listed columns; then truncation unless disabled; then zero-guarding.
/// Type overrides are substituted verbatim afterwards.
///
/// # Errors
///
/// Returns [`DdlError::EmptyTable`] for a table with no rows, and
/// [`DdlError::UnknownColumn`] when a `varchar_max` name is not among the
/// formatted headers. No partial statement is ever produced.
pub fn create_statement(
    table: &dyn TableSource,
    table_name: &str,
    dialect: &DialectConfig,
    opts: &StatementOptions,
) -> Result<String> {
    let mut mapping = infer_schema(table, dialect)?;

    if let Some(factor) = opts.padding {
        mapping.longest = width::vc_padding(&mapping.longest, factor);
    } else if !opts.strict_length {
        mapping.longest = width::vc_step(&mapping.longest, dialect);
    }
    if !opts.varchar_max.is_empty() {
        mapping.longest = width::vc_max(
            &mapping.longest,
            &mapping.headers,
            &opts.varchar_max,
            dialect,
        )?;
    }
    if opts.varchar_truncate {
        mapping.longest = width::vc_trunc(&mapping.longest, dialect);
    }
    mapping.longest = width::vc_validate(&mapping.longest);

    for (i, header) in mapping.headers.iter().enumerate() {
        if let Some(override_type) = opts.column_types.get(header) {
            mapping.type_list[i] = override_type.clone();
        }
    }

    Ok(render_statement(&mapping, table_name, dialect, opts))
}

/// Render the `CREATE TABLE` text from a finished mapping.
///
/// VARCHAR columns carry their computed width; every other type renders
/// bare. Clustering clauses appear only for dialects that support them and
/// render the caller's names verbatim.
fn render_statement(
    mapping: &SchemaMapping,
    table_name: &str,
    dialect: &DialectConfig,
    opts: &StatementOptions,
) -> String {
    let columns: Vec<String> = mapping
        .headers
        .iter()
        .zip(&mapping.type_list)
        .zip(&mapping.longest)
        .map(|((header, tag), &text_width)| {
            let quoted = dialect.quote_ident(header);
            if tag == &dialect.varchar_type {
                format!("  {} {}({})", quoted, tag, text_width)
            } else {
                format!("  {} {}", quoted, tag)
            }
        })
        .collect();

    let mut sql = format!(
        "CREATE TABLE {} (\n{}\n)",
        dialect.quote_ident(table_name),
        columns.join(",\n")
    );

    if dialect.supports_clustering {
        if let Some(ref distkey) = opts.distkey {
            sql.push_str(&format!("\ndistkey({})", distkey));
        }
        match opts.sortkey.len() {
            0 => {}
            1 => sql.push_str(&format!("\nsortkey({})", opts.sortkey[0])),
            _ => sql.push_str(&format!("\ncompound sortkey({})", opts.sortkey.join(", "))),
        }
    }

    sql.push(';');
    sql
}
