//! Nested-list output value

use rx_algebra::{AttributeKind, Literal, Node};
use serde::{Serialize, Serializer};

/// A generated s-expression: a list or a scalar atom
///
/// Tags and attribute names are symbols, relation names and string literals
/// are strings. Structured values that have no rule are carried verbatim as
/// [`Sexp::Opaque`].
///
/// Equality is structural; floats compare by bit pattern so that a tree
/// holding NaN still equals itself.
#[derive(Debug, Clone)]
pub enum Sexp {
    /// Ordered list of sub-expressions
    List(Vec<Sexp>),
    /// Symbolic atom (tags, attribute names)
    Symbol(String),
    /// String atom
    String(String),
    /// Signed integer atom
    Integer(i64),
    /// Unsigned integer atom (tuple counts)
    Unsigned(u64),
    /// Float atom
    Float(f64),
    /// Boolean atom
    Boolean(bool),
    /// Null atom
    Null,
    /// Attribute value-domain kind
    Kind(AttributeKind),
    /// Unregistered structured value, passed through unchanged
    Opaque(Node),
}

impl Sexp {
    /// Symbol atom
    pub fn symbol(name: impl Into<String>) -> Self {
        Sexp::Symbol(name.into())
    }

    /// List from anything convertible to `Sexp`
    pub fn list<T: Into<Sexp>>(items: impl IntoIterator<Item = T>) -> Self {
        Sexp::List(items.into_iter().map(Into::into).collect())
    }

    /// Elements if this is a list
    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Sexp::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// First element of a list (the tag, for tagged forms)
    pub fn head(&self) -> Option<&Sexp> {
        self.as_list().and_then(|items| items.first())
    }

    /// Name if this is a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Symbol(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Sexp::List(_))
    }

    /// Whether this is a non-list value
    pub fn is_atom(&self) -> bool {
        !self.is_list()
    }
}

impl PartialEq for Sexp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sexp::List(a), Sexp::List(b)) => a == b,
            (Sexp::Symbol(a), Sexp::Symbol(b)) | (Sexp::String(a), Sexp::String(b)) => a == b,
            (Sexp::Integer(a), Sexp::Integer(b)) => a == b,
            (Sexp::Unsigned(a), Sexp::Unsigned(b)) => a == b,
            (Sexp::Float(a), Sexp::Float(b)) => a.to_bits() == b.to_bits(),
            (Sexp::Boolean(a), Sexp::Boolean(b)) => a == b,
            (Sexp::Null, Sexp::Null) => true,
            (Sexp::Kind(a), Sexp::Kind(b)) => a == b,
            (Sexp::Opaque(a), Sexp::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&Literal> for Sexp {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Sexp::Null,
            Literal::Boolean(b) => Sexp::Boolean(*b),
            Literal::Integer(n) => Sexp::Integer(*n),
            Literal::Unsigned(n) => Sexp::Unsigned(*n),
            Literal::Float(n) => Sexp::Float(*n),
            Literal::String(s) => Sexp::String(s.clone()),
            Literal::Array(items) => Sexp::List(items.iter().map(Sexp::from).collect()),
        }
    }
}

impl From<Literal> for Sexp {
    fn from(literal: Literal) -> Self {
        Sexp::from(&literal)
    }
}

impl From<Vec<Sexp>> for Sexp {
    fn from(items: Vec<Sexp>) -> Self {
        Sexp::List(items)
    }
}

impl From<&str> for Sexp {
    fn from(s: &str) -> Self {
        Sexp::String(s.to_string())
    }
}

impl From<String> for Sexp {
    fn from(s: String) -> Self {
        Sexp::String(s)
    }
}

impl From<i64> for Sexp {
    fn from(n: i64) -> Self {
        Sexp::Integer(n)
    }
}

impl From<i32> for Sexp {
    fn from(n: i32) -> Self {
        Sexp::Integer(i64::from(n))
    }
}

impl From<u64> for Sexp {
    fn from(n: u64) -> Self {
        Sexp::Unsigned(n)
    }
}

impl From<f64> for Sexp {
    fn from(n: f64) -> Self {
        Sexp::Float(n)
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::Boolean(b)
    }
}

impl From<AttributeKind> for Sexp {
    fn from(kind: AttributeKind) -> Self {
        Sexp::Kind(kind)
    }
}

/// JSON-friendly encoding: lists become arrays, symbols become `":name"`
/// strings, attribute kinds their category name, opaque nodes their own
/// serialized form.
///
/// A string atom that itself starts with `:` or `\` gets a leading `\`,
/// so a JSON string starting with `:` is always a symbol.
impl Serialize for Sexp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Sexp::List(items) => items.serialize(serializer),
            Sexp::Symbol(name) => serializer.serialize_str(&format!(":{name}")),
            Sexp::String(s) if s.starts_with([':', '\\']) => {
                serializer.serialize_str(&format!("\\{s}"))
            }
            Sexp::String(s) => serializer.serialize_str(s),
            Sexp::Integer(n) => serializer.serialize_i64(*n),
            Sexp::Unsigned(n) => serializer.serialize_u64(*n),
            Sexp::Float(n) => serializer.serialize_f64(*n),
            Sexp::Boolean(b) => serializer.serialize_bool(*b),
            Sexp::Null => serializer.serialize_unit(),
            Sexp::Kind(kind) => serializer.serialize_str(&kind.to_string()),
            Sexp::Opaque(node) => node.serialize(serializer),
        }
    }
}

#[cfg(test)]
#[path = "sexp_test.rs"]
mod tests;
