//! Node classification: the table mapping node kinds to formatting rules
//!
//! The table is the single source of truth for output shape. Supporting a
//! new node kind means adding one entry to [`CANONICAL_RULES`] (and a new
//! [`Rule`] variant only if no existing interpreter fits).

use crate::error::{SexpError, SexpResult};
use rx_algebra::{Field, NodeKind};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Formatting recipe for one node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `[tag]`
    Static { tag: &'static str },
    /// `[tag, visit(field)]`
    Unary { tag: &'static str, field: Field },
    /// `[tag, visit(left), visit(right)]`
    Binary {
        tag: &'static str,
        left: Field,
        right: Field,
    },
    /// `[visit(item), ...]`
    Collect,
    /// `[:base, name, base_header(header)]`
    Base,
    /// `[:materialized, base_header(header), tuples]`
    Materialized,
    /// `[:extend, visit(operand), [[name, visit(expr)], ...]]`
    Extend,
    /// `[:attr, name]`
    Attribute,
}

impl Rule {
    /// Static rule
    pub const fn fixed(tag: &'static str) -> Self {
        Rule::Static { tag }
    }

    /// Unary rule over the `operand` field
    pub const fn unary(tag: &'static str) -> Self {
        Rule::Unary {
            tag,
            field: Field::Operand,
        }
    }

    /// Unary rule over a specific field
    pub const fn unary_on(tag: &'static str, field: Field) -> Self {
        Rule::Unary { tag, field }
    }

    /// Binary rule over the `left` / `right` fields
    pub const fn binary(tag: &'static str) -> Self {
        Rule::Binary {
            tag,
            left: Field::Left,
            right: Field::Right,
        }
    }

    /// Binary rule over specific fields
    pub const fn binary_on(tag: &'static str, left: Field, right: Field) -> Self {
        Rule::Binary { tag, left, right }
    }

    /// Interpreter name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Static { .. } => "static",
            Rule::Unary { .. } => "unary",
            Rule::Binary { .. } => "binary",
            Rule::Collect => "collect",
            Rule::Base => "base",
            Rule::Materialized => "materialized",
            Rule::Extend => "extend",
            Rule::Attribute => "attribute",
        }
    }

    /// Node fields the interpreter reads, in output order
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Rule::Static { .. } => Vec::new(),
            Rule::Unary { field, .. } => vec![*field],
            Rule::Binary { left, right, .. } => vec![*left, *right],
            Rule::Collect => vec![Field::Items],
            Rule::Base => vec![Field::Name, Field::Header],
            Rule::Materialized => vec![Field::Header, Field::Tuples],
            Rule::Extend => vec![Field::Operand, Field::Extensions],
            Rule::Attribute => vec![Field::Name],
        }
    }

    /// Tag emitted as the list head, for tagged rules
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Rule::Static { tag } | Rule::Unary { tag, .. } | Rule::Binary { tag, .. } => Some(*tag),
            Rule::Base => Some("base"),
            Rule::Materialized => Some("materialized"),
            Rule::Extend => Some("extend"),
            Rule::Attribute => Some("attr"),
            Rule::Collect => None,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Static { tag } => write!(f, "static {tag}"),
            Rule::Unary { tag, field } => write!(f, "unary {tag} {field}"),
            Rule::Binary { tag, left, right } => write!(f, "binary {tag} {left} {right}"),
            other => f.write_str(other.name()),
        }
    }
}

/// The canonical classification table
pub const CANONICAL_RULES: &[(NodeKind, Rule)] = &[
    (NodeKind::Base, Rule::Base),
    (NodeKind::Materialized, Rule::Materialized),
    (NodeKind::Order, Rule::binary_on("order", Field::Operand, Field::Directions)),
    (NodeKind::Header, Rule::Collect),
    (NodeKind::DirectionSet, Rule::Collect),
    (NodeKind::Ascending, Rule::unary_on("asc", Field::Attribute)),
    (NodeKind::Descending, Rule::unary_on("desc", Field::Attribute)),
    (NodeKind::Limit, Rule::binary_on("limit", Field::Operand, Field::Limit)),
    (NodeKind::Offset, Rule::binary_on("offset", Field::Operand, Field::Offset)),
    (NodeKind::Deletion, Rule::binary_on("delete", Field::Operand, Field::Other)),
    (NodeKind::Insertion, Rule::binary_on("insert", Field::Operand, Field::Other)),
    (NodeKind::Reverse, Rule::unary("reverse")),
    (NodeKind::Difference, Rule::binary("difference")),
    (NodeKind::Extension, Rule::Extend),
    (NodeKind::Intersection, Rule::binary("intersect")),
    (NodeKind::Join, Rule::binary("join")),
    (NodeKind::Product, Rule::binary("product")),
    (NodeKind::Projection, Rule::binary_on("project", Field::Operand, Field::Header)),
    (NodeKind::Rename, Rule::binary_on("rename", Field::Operand, Field::Aliases)),
    (NodeKind::Restriction, Rule::binary_on("restrict", Field::Operand, Field::Predicate)),
    (NodeKind::Summarization, Rule::binary_on("summarize", Field::Operand, Field::SummarizePer)),
    (NodeKind::Union, Rule::binary("union")),
    (NodeKind::Conjunction, Rule::binary("and")),
    (NodeKind::Disjunction, Rule::binary("or")),
    (NodeKind::Negation, Rule::unary("not")),
    (NodeKind::Length, Rule::unary("length")),
    (NodeKind::Equality, Rule::binary("eq")),
    (NodeKind::Exclusion, Rule::binary("ex")),
    (NodeKind::GreaterThan, Rule::binary("gt")),
    (NodeKind::GreaterThanOrEqualTo, Rule::binary("gte")),
    (NodeKind::Inclusion, Rule::binary("in")),
    (NodeKind::Inequality, Rule::binary("neq")),
    (NodeKind::LessThan, Rule::binary("lt")),
    (NodeKind::LessThanOrEqualTo, Rule::binary("lte")),
    (NodeKind::Match, Rule::binary("match")),
    (NodeKind::NoMatch, Rule::binary("no_match")),
    (NodeKind::Absolute, Rule::unary("abs")),
    (NodeKind::Addition, Rule::binary("add")),
    (NodeKind::Division, Rule::binary("div")),
    (NodeKind::Exponentiation, Rule::binary("exp")),
    (NodeKind::Modulo, Rule::binary("mod")),
    (NodeKind::Multiplication, Rule::binary("mul")),
    (NodeKind::SquareRoot, Rule::unary("sqr")),
    (NodeKind::Subtraction, Rule::binary("sub")),
    (NodeKind::UnaryMinus, Rule::unary("unary_minus")),
    (NodeKind::UnaryPlus, Rule::unary("unary_plus")),
    (NodeKind::Tautology, Rule::fixed("true")),
    (NodeKind::Contradiction, Rule::fixed("false")),
    (NodeKind::BooleanAttribute, Rule::Attribute),
    (NodeKind::DateAttribute, Rule::Attribute),
    (NodeKind::DateTimeAttribute, Rule::Attribute),
    (NodeKind::DecimalAttribute, Rule::Attribute),
    (NodeKind::FloatAttribute, Rule::Attribute),
    (NodeKind::IntegerAttribute, Rule::Attribute),
    (NodeKind::StringAttribute, Rule::Attribute),
    (NodeKind::TimeAttribute, Rule::Attribute),
    (NodeKind::ObjectAttribute, Rule::Attribute),
];

/// Immutable mapping from node kind to rule
///
/// Built once and never mutated; shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    rules: BTreeMap<NodeKind, Rule>,
}

impl Registry {
    /// The process-wide canonical table
    pub fn canonical() -> &'static Registry {
        static CANONICAL: OnceLock<Registry> = OnceLock::new();
        CANONICAL.get_or_init(|| {
            log::debug!(
                "Building canonical s-expression registry ({} rules)",
                CANONICAL_RULES.len()
            );
            Registry {
                rules: CANONICAL_RULES.iter().copied().collect(),
            }
        })
    }

    /// Build a table from `(kind, rule)` entries; each kind may appear once
    pub fn from_rules(rules: impl IntoIterator<Item = (NodeKind, Rule)>) -> SexpResult<Self> {
        let mut table = BTreeMap::new();
        for (kind, rule) in rules {
            if table.insert(kind, rule).is_some() {
                return Err(SexpError::DuplicateRule { kind });
            }
        }
        Ok(Registry { rules: table })
    }

    /// Rule for `kind`, if registered
    pub fn rule(&self, kind: NodeKind) -> Option<&Rule> {
        self.rules.get(&kind)
    }

    /// Whether `kind` is registered
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entries in node-kind order
    pub fn iter(&self) -> impl Iterator<Item = (NodeKind, &Rule)> + '_ {
        self.rules.iter().map(|(kind, rule)| (*kind, rule))
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
