//! Scalar cell values for loosely-typed tabular data.
//!
//! A [`Scalar`] is one cell from the source table: null, boolean, integer,
//! float, or text. Values are plain owned data with no lifetime concerns;
//! the inference pass only ever reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell from a source table.
///
/// Deserializes untagged, so rows can be built directly from JSON arrays:
/// `null` maps to [`Scalar::Null`], numbers to [`Scalar::Int`] or
/// [`Scalar::Float`], and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Missing value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 64-bit signed integer.
    Int(i64),

    /// 64-bit floating point.
    Float(f64),

    /// Text data, including strings that merely look like numbers.
    Text(String),
}

impl Scalar {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// The UTF-8 byte length of this value's textual rendering.
    ///
    /// Used for tracking the widest observed value per column; NULLs render
    /// as the empty string and contribute zero width.
    #[must_use]
    pub fn text_width(&self) -> usize {
        self.to_string().len()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

// Convenience conversions for common host types
impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Scalar::Null,
        }
    }
}
