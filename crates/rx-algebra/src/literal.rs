//! Scalar literal values

use serde::{Deserialize, Serialize};

/// A scalar value appearing in a tree: a function argument or a tuple field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Null literal
    Null,
    /// Boolean literal
    Boolean(bool),
    /// Integer literal
    Integer(i64),
    /// Integer literal above `i64::MAX`
    Unsigned(u64),
    /// Float literal
    Float(f64),
    /// String literal
    String(String),
    /// Ordered list of literals (e.g. the right side of an inclusion)
    Array(Vec<Literal>),
}

/// One row of a materialized relation, in header order
pub type Tuple = Vec<Literal>;

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Literal::Integer(n),
            Err(_) => Literal::Unsigned(n),
        }
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(i64::from(n))
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Literal::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "literal_test.rs"]
mod tests;
