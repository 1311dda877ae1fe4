//! rx-sexp: s-expression generator for relational algebra trees
//!
//! Converts an expression tree from `rx-algebra` into a nested [`Sexp`]
//! list whose structure mirrors the tree. Output shape is driven entirely
//! by the [`Registry`], a read-only table mapping each [`NodeKind`] to a
//! formatting [`Rule`]; the [`Generator`] looks up a node's rule and
//! recurses into the children the rule names. Values with no rule pass
//! through unchanged.
//!
//! ```
//! use rx_algebra::{AttributeKind, Header, Relation};
//! use rx_sexp::{visit, Sexp};
//!
//! let relation = Relation::base("users", Header::coerce(&[("id", AttributeKind::Integer)]));
//! let sexp = visit(&relation).unwrap();
//! assert_eq!(sexp.head(), Some(&Sexp::symbol("base")));
//! ```
//!
//! [`NodeKind`]: rx_algebra::NodeKind

pub mod error;
pub mod generator;
pub mod registry;
pub mod sexp;

pub use error::{SexpError, SexpResult};
pub use generator::{visit, Generator};
pub use registry::{Registry, Rule, CANONICAL_RULES};
pub use sexp::Sexp;
