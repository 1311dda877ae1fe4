//! rx-algebra: relational algebra node model
//!
//! This crate provides the expression tree consumed by the s-expression
//! generator: base and materialized relations, relational operations,
//! predicate and numeric functions, attributes and headers. It also defines
//! the closed [`NodeKind`] discriminator and the borrowed [`NodeRef`] view
//! that the generator walks.

pub mod attribute;
pub mod error;
pub mod function;
pub mod literal;
pub mod node;
pub mod relation;

pub use attribute::{Attribute, AttributeKind, Header};
pub use error::{AlgebraError, AlgebraResult};
pub use function::{BinaryOp, Function, Operand, UnaryOp};
pub use literal::{Literal, Tuple};
pub use node::{Field, Node, NodeKind, NodeRef};
pub use relation::{AliasSet, Combinator, Direction, DirectionSet, Relation, SortOrder};
