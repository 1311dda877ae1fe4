//! Relations, the nodes of the algebra tree
//!
//! A tree is rooted at a [`Relation`]. Leaves are base relations (named,
//! with a header) and materialized relations (a header plus tuples).
//! Every other variant is an operation over one or two operand relations.

use crate::attribute::{Attribute, Header};
use crate::error::{AlgebraError, AlgebraResult};
use crate::function::{Function, Operand};
use crate::literal::Tuple;
use serde::{Deserialize, Serialize};

/// Sort order of a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// Sort direction on one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    /// Ascending or descending
    pub order: SortOrder,
    /// Attribute to sort by
    pub attribute: Attribute,
}

impl Direction {
    /// Create a direction
    pub fn new(order: SortOrder, attribute: Attribute) -> Self {
        Self { order, attribute }
    }
}

/// Ordered set of sort directions, most significant first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionSet {
    /// Directions in significance order
    pub directions: Vec<Direction>,
}

impl DirectionSet {
    /// Create a direction set
    pub fn new(directions: Vec<Direction>) -> Self {
        Self { directions }
    }

    /// Number of directions
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

impl From<Vec<Direction>> for DirectionSet {
    fn from(directions: Vec<Direction>) -> Self {
        Self::new(directions)
    }
}

/// Rename mapping: `(old_name, new_name)` pairs in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasSet {
    /// Alias pairs
    pub aliases: Vec<(String, String)>,
}

impl AliasSet {
    /// Create an alias set from `(old, new)` pairs
    pub fn new<S: Into<String>, T: Into<String>>(pairs: impl IntoIterator<Item = (S, T)>) -> Self {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
        }
    }
}

/// Operations combining two relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// Natural join
    Join,
    /// Cartesian product
    Product,
    /// Set union
    Union,
    /// Set intersection
    Intersection,
    /// Set difference
    Difference,
}

/// Relation node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "relation", rename_all = "snake_case")]
pub enum Relation {
    /// Named stored relation
    Base {
        /// Relation name
        name: String,
        /// Attributes
        header: Header,
    },

    /// Relation holding explicit tuples
    Materialized {
        /// Attributes
        header: Header,
        /// Rows, each in header order
        tuples: Vec<Tuple>,
    },

    /// Sorted relation
    Order {
        /// Input relation
        operand: Box<Relation>,
        /// Sort directions
        directions: DirectionSet,
    },

    /// First `limit` tuples of a sorted relation
    Limit {
        /// Input relation
        operand: Box<Relation>,
        /// Maximum tuples to keep
        limit: u64,
    },

    /// Sorted relation without its first `offset` tuples
    Offset {
        /// Input relation
        operand: Box<Relation>,
        /// Tuples to skip
        offset: u64,
    },

    /// Sorted relation in reverse order
    Reverse {
        /// Input relation
        operand: Box<Relation>,
    },

    /// Tuples of `operand` minus those of `other`, as a write
    Deletion {
        /// Target relation
        operand: Box<Relation>,
        /// Tuples to delete
        other: Box<Relation>,
    },

    /// Tuples of `operand` plus those of `other`, as a write
    Insertion {
        /// Target relation
        operand: Box<Relation>,
        /// Tuples to insert
        other: Box<Relation>,
    },

    /// Join, product, union, intersection or difference
    Combine {
        /// Operation
        op: Combinator,
        /// Left operand
        left: Box<Relation>,
        /// Right operand
        right: Box<Relation>,
    },

    /// Attribute projection
    Projection {
        /// Input relation
        operand: Box<Relation>,
        /// Attributes kept
        header: Header,
    },

    /// Tuple filter
    Restriction {
        /// Input relation
        operand: Box<Relation>,
        /// Filter predicate
        predicate: Function,
    },

    /// New attributes computed from existing ones
    Extension {
        /// Input relation
        operand: Box<Relation>,
        /// `(new_attribute_name, defining_expression)` in declaration order
        extensions: Vec<(String, Operand)>,
    },

    /// Attribute renaming
    Rename {
        /// Input relation
        operand: Box<Relation>,
        /// Rename mapping
        aliases: AliasSet,
    },

    /// Grouping of `operand` per tuple of `summarize_per`
    Summarization {
        /// Input relation
        operand: Box<Relation>,
        /// Relation providing the grouping keys
        summarize_per: Box<Relation>,
    },
}

impl Relation {
    /// Named base relation
    pub fn base(name: impl Into<String>, header: Header) -> Self {
        Relation::Base {
            name: name.into(),
            header,
        }
    }

    /// Materialized relation; every tuple must match the header's arity
    pub fn materialized(header: Header, tuples: Vec<Tuple>) -> AlgebraResult<Self> {
        check_arity(&header, &tuples)?;
        Ok(Relation::Materialized { header, tuples })
    }

    /// Check the whole tree for invariants the builders enforce but
    /// deserialization does not: every materialized tuple has its header's
    /// arity.
    pub fn validate(&self) -> AlgebraResult<()> {
        match self {
            Relation::Base { .. } => Ok(()),
            Relation::Materialized { header, tuples } => check_arity(header, tuples),
            Relation::Order { operand, .. }
            | Relation::Limit { operand, .. }
            | Relation::Offset { operand, .. }
            | Relation::Reverse { operand }
            | Relation::Projection { operand, .. }
            | Relation::Restriction { operand, .. }
            | Relation::Extension { operand, .. }
            | Relation::Rename { operand, .. } => operand.validate(),
            Relation::Deletion { operand, other } | Relation::Insertion { operand, other } => {
                operand.validate()?;
                other.validate()
            }
            Relation::Combine { left, right, .. } => {
                left.validate()?;
                right.validate()
            }
            Relation::Summarization {
                operand,
                summarize_per,
            } => {
                operand.validate()?;
                summarize_per.validate()
            }
        }
    }

    /// Sort by the given directions
    pub fn sort_by(self, directions: impl Into<DirectionSet>) -> Self {
        Relation::Order {
            operand: Box::new(self),
            directions: directions.into(),
        }
    }

    /// Keep the first `limit` tuples
    pub fn take(self, limit: u64) -> Self {
        Relation::Limit {
            operand: Box::new(self),
            limit,
        }
    }

    /// Skip the first `offset` tuples
    pub fn skip(self, offset: u64) -> Self {
        Relation::Offset {
            operand: Box::new(self),
            offset,
        }
    }

    /// Reverse the sort order
    pub fn reverse(self) -> Self {
        Relation::Reverse {
            operand: Box::new(self),
        }
    }

    /// Delete the tuples of `other`
    pub fn delete(self, other: Relation) -> Self {
        Relation::Deletion {
            operand: Box::new(self),
            other: Box::new(other),
        }
    }

    /// Insert the tuples of `other`
    pub fn insert(self, other: Relation) -> Self {
        Relation::Insertion {
            operand: Box::new(self),
            other: Box::new(other),
        }
    }

    /// Combine with `other` using `op`
    pub fn combine(self, op: Combinator, other: Relation) -> Self {
        Relation::Combine {
            op,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Natural join
    pub fn join(self, other: Relation) -> Self {
        self.combine(Combinator::Join, other)
    }

    /// Cartesian product
    pub fn product(self, other: Relation) -> Self {
        self.combine(Combinator::Product, other)
    }

    /// Set union
    pub fn union(self, other: Relation) -> Self {
        self.combine(Combinator::Union, other)
    }

    /// Set intersection
    pub fn intersect(self, other: Relation) -> Self {
        self.combine(Combinator::Intersection, other)
    }

    /// Set difference
    pub fn difference(self, other: Relation) -> Self {
        self.combine(Combinator::Difference, other)
    }

    /// Keep only the attributes of `header`
    pub fn project(self, header: Header) -> Self {
        Relation::Projection {
            operand: Box::new(self),
            header,
        }
    }

    /// Keep only tuples satisfying `predicate`
    pub fn restrict(self, predicate: Function) -> Self {
        Relation::Restriction {
            operand: Box::new(self),
            predicate,
        }
    }

    /// Add computed attributes, in the given order
    pub fn extend<S, O>(self, extensions: impl IntoIterator<Item = (S, O)>) -> Self
    where
        S: Into<String>,
        O: Into<Operand>,
    {
        Relation::Extension {
            operand: Box::new(self),
            extensions: extensions
                .into_iter()
                .map(|(name, expr)| (name.into(), expr.into()))
                .collect(),
        }
    }

    /// Rename attributes
    pub fn rename(self, aliases: AliasSet) -> Self {
        Relation::Rename {
            operand: Box::new(self),
            aliases,
        }
    }

    /// Group per tuple of `summarize_per`
    pub fn summarize(self, summarize_per: Relation) -> Self {
        Relation::Summarization {
            operand: Box::new(self),
            summarize_per: Box::new(summarize_per),
        }
    }
}

fn check_arity(header: &Header, tuples: &[Tuple]) -> AlgebraResult<()> {
    match tuples
        .iter()
        .enumerate()
        .find(|(_, tuple)| tuple.len() != header.len())
    {
        Some((index, tuple)) => Err(AlgebraError::TupleArity {
            index,
            expected: header.len(),
            actual: tuple.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
