//! Attributes and headers: the named, typed columns of a relation

use crate::error::{AlgebraError, AlgebraResult};
use crate::relation::{Direction, SortOrder};
use serde::{Deserialize, Serialize};

/// Value-domain category of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// true / false
    Boolean,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
    /// Exact decimal number
    Decimal,
    /// Floating-point number
    Float,
    /// Integer number
    Integer,
    /// Character string
    String,
    /// Time of day
    Time,
    /// Any other value
    Object,
}

impl AttributeKind {
    /// All attribute kinds, in declaration order
    pub const ALL: [AttributeKind; 9] = [
        AttributeKind::Boolean,
        AttributeKind::Date,
        AttributeKind::DateTime,
        AttributeKind::Decimal,
        AttributeKind::Float,
        AttributeKind::Integer,
        AttributeKind::String,
        AttributeKind::Time,
        AttributeKind::Object,
    ];

    /// Returns true for kinds that support numeric functions
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AttributeKind::Decimal | AttributeKind::Float | AttributeKind::Integer
        )
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::Boolean => write!(f, "Boolean"),
            AttributeKind::Date => write!(f, "Date"),
            AttributeKind::DateTime => write!(f, "DateTime"),
            AttributeKind::Decimal => write!(f, "Decimal"),
            AttributeKind::Float => write!(f, "Float"),
            AttributeKind::Integer => write!(f, "Integer"),
            AttributeKind::String => write!(f, "String"),
            AttributeKind::Time => write!(f, "Time"),
            AttributeKind::Object => write!(f, "Object"),
        }
    }
}

/// A named attribute with its value-domain kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Declared kind
    pub kind: AttributeKind,
}

impl Attribute {
    /// Create an attribute
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Shorthand for an integer attribute
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Integer)
    }

    /// Shorthand for a string attribute
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::String)
    }

    /// Ascending sort direction on this attribute
    pub fn asc(&self) -> Direction {
        Direction::new(SortOrder::Ascending, self.clone())
    }

    /// Descending sort direction on this attribute
    pub fn desc(&self) -> Direction {
        Direction::new(SortOrder::Descending, self.clone())
    }
}

/// Ordered sequence of attributes describing a relation's shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header {
    /// Attributes in declaration order
    pub attributes: Vec<Attribute>,
}

impl Header {
    /// Create a header from attributes
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Build a header from `(name, kind)` pairs
    pub fn coerce<S: AsRef<str>>(pairs: &[(S, AttributeKind)]) -> Self {
        Self {
            attributes: pairs
                .iter()
                .map(|(name, kind)| Attribute::new(name.as_ref(), *kind))
                .collect(),
        }
    }

    /// Find an attribute by name
    pub fn find(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Look up an attribute by name, failing when absent
    pub fn attribute(&self, name: &str) -> AlgebraResult<&Attribute> {
        self.find(name).ok_or_else(|| AlgebraError::UnknownAttribute {
            name: name.to_string(),
        })
    }

    /// Return a header with only the named attributes, in the requested order
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> AlgebraResult<Header> {
        let attributes = names
            .iter()
            .map(|name| self.attribute(name.as_ref()).cloned())
            .collect::<AlgebraResult<Vec<_>>>()?;
        Ok(Header { attributes })
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the header has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Attribute names in order
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }
}

impl From<Vec<Attribute>> for Header {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self::new(attributes)
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
#[path = "attribute_test.rs"]
mod tests;
