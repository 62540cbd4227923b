//! Table abstraction over in-memory row data.
//!
//! The inference pass only needs an ordered header list and a way to walk
//! rows once; [`TableSource`] captures exactly that seam so callers can
//! adapt dataframes, CSV buffers, or query results without copying into a
//! specific container. [`MemoryTable`] is the bundled implementation for
//! fully materialized data.

use super::value::Scalar;

/// An ordered, row-iterable source of tabular data.
pub trait TableSource {
    /// Ordered column names.
    fn headers(&self) -> &[String];

    /// Iterate rows in order. Each row is one record of scalar cells,
    /// positionally aligned with `headers`.
    fn rows(&self) -> Box<dyn Iterator<Item = &[Scalar]> + '_>;

    /// Check if the table holds no rows.
    fn is_empty(&self) -> bool {
        self.rows().next().is_none()
    }
}

/// A fully materialized in-memory table.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    headers: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl MemoryTable {
    /// Create a table from headers and rows.
    pub fn new<H, S>(headers: H, rows: Vec<Vec<Scalar>>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<Scalar>) {
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl TableSource for MemoryTable {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn rows(&self) -> Box<dyn Iterator<Item = &[Scalar]> + '_> {
        Box::new(self.rows.iter().map(|r| r.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_table_basics() {
        let mut table = MemoryTable::new(["a", "b"], vec![vec![1i64.into(), "x".into()]]);
        assert_eq!(table.headers(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.row_count(), 1);
        assert!(!table.is_empty());

        table.push_row(vec![2i64.into(), "y".into()]);
        assert_eq!(table.row_count(), 2);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[1][0], Scalar::Int(2));
    }

    #[test]
    fn test_empty_table() {
        let table = MemoryTable::new(["a"], vec![]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
