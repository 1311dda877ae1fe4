//! Node kinds, field slots and the borrowed node view walked by generators.
//!
//! Every value that can appear in an algebra tree is reachable through a
//! [`NodeRef`]. Structured nodes report a [`NodeKind`] from a closed set;
//! scalars (literals and counts) report none. Child slots are addressed by
//! [`Field`], so a rule table can name the slots it reads without knowing
//! the concrete Rust type behind the node.

use crate::attribute::{Attribute, AttributeKind, Header};
use crate::function::{BinaryOp, Function, Operand, UnaryOp};
use crate::literal::{Literal, Tuple};
use crate::relation::{AliasSet, Combinator, Direction, DirectionSet, Relation, SortOrder};
use serde::{Deserialize, Serialize};

/// Discriminator for every concrete node kind the algebra produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // ── Relations ────────────────────────────────────────────────────
    Base,
    Materialized,
    Order,
    Limit,
    Offset,
    Reverse,
    Deletion,
    Insertion,
    Join,
    Product,
    Union,
    Intersection,
    Difference,
    Projection,
    Restriction,
    Extension,
    Rename,
    Summarization,

    // ── Collections ──────────────────────────────────────────────────
    Header,
    DirectionSet,
    AliasSet,

    // ── Sort directions ──────────────────────────────────────────────
    Ascending,
    Descending,

    // ── Functions ────────────────────────────────────────────────────
    Conjunction,
    Disjunction,
    Negation,
    Length,
    Equality,
    Inequality,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Inclusion,
    Exclusion,
    Match,
    NoMatch,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Exponentiation,
    Absolute,
    SquareRoot,
    UnaryMinus,
    UnaryPlus,
    Tautology,
    Contradiction,

    // ── Attributes ───────────────────────────────────────────────────
    BooleanAttribute,
    DateAttribute,
    DateTimeAttribute,
    DecimalAttribute,
    FloatAttribute,
    IntegerAttribute,
    StringAttribute,
    TimeAttribute,
    ObjectAttribute,
}

impl NodeKind {
    /// Every node kind, in declaration order
    pub const ALL: [NodeKind; 58] = [
        NodeKind::Base,
        NodeKind::Materialized,
        NodeKind::Order,
        NodeKind::Limit,
        NodeKind::Offset,
        NodeKind::Reverse,
        NodeKind::Deletion,
        NodeKind::Insertion,
        NodeKind::Join,
        NodeKind::Product,
        NodeKind::Union,
        NodeKind::Intersection,
        NodeKind::Difference,
        NodeKind::Projection,
        NodeKind::Restriction,
        NodeKind::Extension,
        NodeKind::Rename,
        NodeKind::Summarization,
        NodeKind::Header,
        NodeKind::DirectionSet,
        NodeKind::AliasSet,
        NodeKind::Ascending,
        NodeKind::Descending,
        NodeKind::Conjunction,
        NodeKind::Disjunction,
        NodeKind::Negation,
        NodeKind::Length,
        NodeKind::Equality,
        NodeKind::Inequality,
        NodeKind::GreaterThan,
        NodeKind::GreaterThanOrEqualTo,
        NodeKind::LessThan,
        NodeKind::LessThanOrEqualTo,
        NodeKind::Inclusion,
        NodeKind::Exclusion,
        NodeKind::Match,
        NodeKind::NoMatch,
        NodeKind::Addition,
        NodeKind::Subtraction,
        NodeKind::Multiplication,
        NodeKind::Division,
        NodeKind::Modulo,
        NodeKind::Exponentiation,
        NodeKind::Absolute,
        NodeKind::SquareRoot,
        NodeKind::UnaryMinus,
        NodeKind::UnaryPlus,
        NodeKind::Tautology,
        NodeKind::Contradiction,
        NodeKind::BooleanAttribute,
        NodeKind::DateAttribute,
        NodeKind::DateTimeAttribute,
        NodeKind::DecimalAttribute,
        NodeKind::FloatAttribute,
        NodeKind::IntegerAttribute,
        NodeKind::StringAttribute,
        NodeKind::TimeAttribute,
        NodeKind::ObjectAttribute,
    ];

    /// snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Base => "base",
            NodeKind::Materialized => "materialized",
            NodeKind::Order => "order",
            NodeKind::Limit => "limit",
            NodeKind::Offset => "offset",
            NodeKind::Reverse => "reverse",
            NodeKind::Deletion => "deletion",
            NodeKind::Insertion => "insertion",
            NodeKind::Join => "join",
            NodeKind::Product => "product",
            NodeKind::Union => "union",
            NodeKind::Intersection => "intersection",
            NodeKind::Difference => "difference",
            NodeKind::Projection => "projection",
            NodeKind::Restriction => "restriction",
            NodeKind::Extension => "extension",
            NodeKind::Rename => "rename",
            NodeKind::Summarization => "summarization",
            NodeKind::Header => "header",
            NodeKind::DirectionSet => "direction_set",
            NodeKind::AliasSet => "alias_set",
            NodeKind::Ascending => "ascending",
            NodeKind::Descending => "descending",
            NodeKind::Conjunction => "conjunction",
            NodeKind::Disjunction => "disjunction",
            NodeKind::Negation => "negation",
            NodeKind::Length => "length",
            NodeKind::Equality => "equality",
            NodeKind::Inequality => "inequality",
            NodeKind::GreaterThan => "greater_than",
            NodeKind::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            NodeKind::LessThan => "less_than",
            NodeKind::LessThanOrEqualTo => "less_than_or_equal_to",
            NodeKind::Inclusion => "inclusion",
            NodeKind::Exclusion => "exclusion",
            NodeKind::Match => "match",
            NodeKind::NoMatch => "no_match",
            NodeKind::Addition => "addition",
            NodeKind::Subtraction => "subtraction",
            NodeKind::Multiplication => "multiplication",
            NodeKind::Division => "division",
            NodeKind::Modulo => "modulo",
            NodeKind::Exponentiation => "exponentiation",
            NodeKind::Absolute => "absolute",
            NodeKind::SquareRoot => "square_root",
            NodeKind::UnaryMinus => "unary_minus",
            NodeKind::UnaryPlus => "unary_plus",
            NodeKind::Tautology => "tautology",
            NodeKind::Contradiction => "contradiction",
            NodeKind::BooleanAttribute => "boolean_attribute",
            NodeKind::DateAttribute => "date_attribute",
            NodeKind::DateTimeAttribute => "date_time_attribute",
            NodeKind::DecimalAttribute => "decimal_attribute",
            NodeKind::FloatAttribute => "float_attribute",
            NodeKind::IntegerAttribute => "integer_attribute",
            NodeKind::StringAttribute => "string_attribute",
            NodeKind::TimeAttribute => "time_attribute",
            NodeKind::ObjectAttribute => "object_attribute",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BinaryOp> for NodeKind {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::And => NodeKind::Conjunction,
            BinaryOp::Or => NodeKind::Disjunction,
            BinaryOp::Equality => NodeKind::Equality,
            BinaryOp::Inequality => NodeKind::Inequality,
            BinaryOp::GreaterThan => NodeKind::GreaterThan,
            BinaryOp::GreaterThanOrEqualTo => NodeKind::GreaterThanOrEqualTo,
            BinaryOp::LessThan => NodeKind::LessThan,
            BinaryOp::LessThanOrEqualTo => NodeKind::LessThanOrEqualTo,
            BinaryOp::Inclusion => NodeKind::Inclusion,
            BinaryOp::Exclusion => NodeKind::Exclusion,
            BinaryOp::Match => NodeKind::Match,
            BinaryOp::NoMatch => NodeKind::NoMatch,
            BinaryOp::Addition => NodeKind::Addition,
            BinaryOp::Subtraction => NodeKind::Subtraction,
            BinaryOp::Multiplication => NodeKind::Multiplication,
            BinaryOp::Division => NodeKind::Division,
            BinaryOp::Modulo => NodeKind::Modulo,
            BinaryOp::Exponentiation => NodeKind::Exponentiation,
        }
    }
}

impl From<UnaryOp> for NodeKind {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Not => NodeKind::Negation,
            UnaryOp::Length => NodeKind::Length,
            UnaryOp::Absolute => NodeKind::Absolute,
            UnaryOp::SquareRoot => NodeKind::SquareRoot,
            UnaryOp::UnaryMinus => NodeKind::UnaryMinus,
            UnaryOp::UnaryPlus => NodeKind::UnaryPlus,
        }
    }
}

impl From<Combinator> for NodeKind {
    fn from(op: Combinator) -> Self {
        match op {
            Combinator::Join => NodeKind::Join,
            Combinator::Product => NodeKind::Product,
            Combinator::Union => NodeKind::Union,
            Combinator::Intersection => NodeKind::Intersection,
            Combinator::Difference => NodeKind::Difference,
        }
    }
}

impl From<SortOrder> for NodeKind {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => NodeKind::Ascending,
            SortOrder::Descending => NodeKind::Descending,
        }
    }
}

impl From<AttributeKind> for NodeKind {
    fn from(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::Boolean => NodeKind::BooleanAttribute,
            AttributeKind::Date => NodeKind::DateAttribute,
            AttributeKind::DateTime => NodeKind::DateTimeAttribute,
            AttributeKind::Decimal => NodeKind::DecimalAttribute,
            AttributeKind::Float => NodeKind::FloatAttribute,
            AttributeKind::Integer => NodeKind::IntegerAttribute,
            AttributeKind::String => NodeKind::StringAttribute,
            AttributeKind::Time => NodeKind::TimeAttribute,
            AttributeKind::Object => NodeKind::ObjectAttribute,
        }
    }
}

/// Named slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Operand,
    Left,
    Right,
    Other,
    Predicate,
    Header,
    Directions,
    Attribute,
    Limit,
    Offset,
    Aliases,
    SummarizePer,
    Name,
    Tuples,
    Extensions,
    Items,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Operand => "operand",
            Field::Left => "left",
            Field::Right => "right",
            Field::Other => "other",
            Field::Predicate => "predicate",
            Field::Header => "header",
            Field::Directions => "directions",
            Field::Attribute => "attribute",
            Field::Limit => "limit",
            Field::Offset => "offset",
            Field::Aliases => "aliases",
            Field::SummarizePer => "summarize_per",
            Field::Name => "name",
            Field::Tuples => "tuples",
            Field::Extensions => "extensions",
            Field::Items => "items",
        };
        f.write_str(name)
    }
}

/// Borrowed view of any value reachable in an algebra tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Relation(&'a Relation),
    Function(&'a Function),
    Attribute(&'a Attribute),
    Header(&'a Header),
    Direction(&'a Direction),
    DirectionSet(&'a DirectionSet),
    Aliases(&'a AliasSet),
    /// Scalar literal
    Literal(&'a Literal),
    /// Tuple count of a limit or offset
    Count(u64),
}

impl<'a> NodeRef<'a> {
    /// Kind of this node; `None` for scalars
    pub fn kind(&self) -> Option<NodeKind> {
        let kind = match self {
            NodeRef::Relation(relation) => match relation {
                Relation::Base { .. } => NodeKind::Base,
                Relation::Materialized { .. } => NodeKind::Materialized,
                Relation::Order { .. } => NodeKind::Order,
                Relation::Limit { .. } => NodeKind::Limit,
                Relation::Offset { .. } => NodeKind::Offset,
                Relation::Reverse { .. } => NodeKind::Reverse,
                Relation::Deletion { .. } => NodeKind::Deletion,
                Relation::Insertion { .. } => NodeKind::Insertion,
                Relation::Combine { op, .. } => NodeKind::from(*op),
                Relation::Projection { .. } => NodeKind::Projection,
                Relation::Restriction { .. } => NodeKind::Restriction,
                Relation::Extension { .. } => NodeKind::Extension,
                Relation::Rename { .. } => NodeKind::Rename,
                Relation::Summarization { .. } => NodeKind::Summarization,
            },
            NodeRef::Function(function) => match function {
                Function::Binary { op, .. } => NodeKind::from(*op),
                Function::Unary { op, .. } => NodeKind::from(*op),
                Function::Tautology => NodeKind::Tautology,
                Function::Contradiction => NodeKind::Contradiction,
            },
            NodeRef::Attribute(attribute) => NodeKind::from(attribute.kind),
            NodeRef::Header(_) => NodeKind::Header,
            NodeRef::Direction(direction) => NodeKind::from(direction.order),
            NodeRef::DirectionSet(_) => NodeKind::DirectionSet,
            NodeRef::Aliases(_) => NodeKind::AliasSet,
            NodeRef::Literal(_) | NodeRef::Count(_) => return None,
        };
        Some(kind)
    }

    /// Child in the given slot, if this node has that slot
    pub fn field(&self, field: Field) -> Option<NodeRef<'a>> {
        match (*self, field) {
            (NodeRef::Relation(relation), field) => relation_field(relation, field),
            (NodeRef::Function(Function::Binary { left, .. }), Field::Left) => Some(left.into()),
            (NodeRef::Function(Function::Binary { right, .. }), Field::Right) => {
                Some(right.into())
            }
            (NodeRef::Function(Function::Unary { operand, .. }), Field::Operand) => {
                Some(operand.into())
            }
            (NodeRef::Direction(direction), Field::Attribute) => {
                Some(NodeRef::Attribute(&direction.attribute))
            }
            _ => None,
        }
    }

    /// Name of a base relation or attribute
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            NodeRef::Relation(Relation::Base { name, .. }) => Some(name.as_str()),
            NodeRef::Attribute(attribute) => Some(attribute.name.as_str()),
            _ => None,
        }
    }

    /// Header of a base, materialized or projected relation
    pub fn header(&self) -> Option<&'a Header> {
        match *self {
            NodeRef::Relation(
                Relation::Base { header, .. }
                | Relation::Materialized { header, .. }
                | Relation::Projection { header, .. },
            ) => Some(header),
            NodeRef::Header(header) => Some(header),
            _ => None,
        }
    }

    /// Rows of a materialized relation
    pub fn tuples(&self) -> Option<&'a [Tuple]> {
        match *self {
            NodeRef::Relation(Relation::Materialized { tuples, .. }) => Some(tuples.as_slice()),
            _ => None,
        }
    }

    /// Ordered `(name, expression)` entries of an extension
    pub fn extensions(&self) -> Option<&'a [(String, Operand)]> {
        match *self {
            NodeRef::Relation(Relation::Extension { extensions, .. }) => Some(extensions.as_slice()),
            _ => None,
        }
    }

    /// Elements of a collection node, in order
    pub fn items(&self) -> Option<Vec<NodeRef<'a>>> {
        match *self {
            NodeRef::Header(header) => Some(header.iter().map(NodeRef::Attribute).collect()),
            NodeRef::DirectionSet(set) => {
                Some(set.directions.iter().map(NodeRef::Direction).collect())
            }
            _ => None,
        }
    }

    /// Owned copy of the viewed value
    pub fn to_node(&self) -> Node {
        match *self {
            NodeRef::Relation(relation) => Node::Relation(relation.clone()),
            NodeRef::Function(function) => Node::Function(function.clone()),
            NodeRef::Attribute(attribute) => Node::Attribute(attribute.clone()),
            NodeRef::Header(header) => Node::Header(header.clone()),
            NodeRef::Direction(direction) => Node::Direction(direction.clone()),
            NodeRef::DirectionSet(set) => Node::DirectionSet(set.clone()),
            NodeRef::Aliases(aliases) => Node::Aliases(aliases.clone()),
            NodeRef::Literal(literal) => Node::Literal(literal.clone()),
            NodeRef::Count(count) => Node::Count(count),
        }
    }
}

fn relation_field(relation: &Relation, field: Field) -> Option<NodeRef<'_>> {
    let child = match (relation, field) {
        (
            Relation::Order { operand, .. }
            | Relation::Limit { operand, .. }
            | Relation::Offset { operand, .. }
            | Relation::Reverse { operand }
            | Relation::Deletion { operand, .. }
            | Relation::Insertion { operand, .. }
            | Relation::Projection { operand, .. }
            | Relation::Restriction { operand, .. }
            | Relation::Extension { operand, .. }
            | Relation::Rename { operand, .. }
            | Relation::Summarization { operand, .. },
            Field::Operand,
        ) => NodeRef::Relation(operand),
        (Relation::Order { directions, .. }, Field::Directions) => {
            NodeRef::DirectionSet(directions)
        }
        (Relation::Limit { limit, .. }, Field::Limit) => NodeRef::Count(*limit),
        (Relation::Offset { offset, .. }, Field::Offset) => NodeRef::Count(*offset),
        (Relation::Deletion { other, .. } | Relation::Insertion { other, .. }, Field::Other) => {
            NodeRef::Relation(other)
        }
        (Relation::Combine { left, .. }, Field::Left) => NodeRef::Relation(left),
        (Relation::Combine { right, .. }, Field::Right) => NodeRef::Relation(right),
        (
            Relation::Base { header, .. }
            | Relation::Materialized { header, .. }
            | Relation::Projection { header, .. },
            Field::Header,
        ) => NodeRef::Header(header),
        (Relation::Restriction { predicate, .. }, Field::Predicate) => {
            NodeRef::Function(predicate)
        }
        (Relation::Rename { aliases, .. }, Field::Aliases) => NodeRef::Aliases(aliases),
        (Relation::Summarization { summarize_per, .. }, Field::SummarizePer) => {
            NodeRef::Relation(summarize_per)
        }
        _ => return None,
    };
    Some(child)
}

impl<'a> From<&'a Operand> for NodeRef<'a> {
    fn from(operand: &'a Operand) -> Self {
        match operand {
            Operand::Attribute(attribute) => NodeRef::Attribute(attribute),
            Operand::Function(function) => NodeRef::Function(function),
            Operand::Literal(literal) => NodeRef::Literal(literal),
        }
    }
}

impl<'a> From<&'a Relation> for NodeRef<'a> {
    fn from(relation: &'a Relation) -> Self {
        NodeRef::Relation(relation)
    }
}

impl<'a> From<&'a Function> for NodeRef<'a> {
    fn from(function: &'a Function) -> Self {
        NodeRef::Function(function)
    }
}

impl<'a> From<&'a Attribute> for NodeRef<'a> {
    fn from(attribute: &'a Attribute) -> Self {
        NodeRef::Attribute(attribute)
    }
}

impl<'a> From<&'a Header> for NodeRef<'a> {
    fn from(header: &'a Header) -> Self {
        NodeRef::Header(header)
    }
}

impl<'a> From<&'a Direction> for NodeRef<'a> {
    fn from(direction: &'a Direction) -> Self {
        NodeRef::Direction(direction)
    }
}

impl<'a> From<&'a DirectionSet> for NodeRef<'a> {
    fn from(set: &'a DirectionSet) -> Self {
        NodeRef::DirectionSet(set)
    }
}

impl<'a> From<&'a AliasSet> for NodeRef<'a> {
    fn from(aliases: &'a AliasSet) -> Self {
        NodeRef::Aliases(aliases)
    }
}

impl<'a> From<&'a Literal> for NodeRef<'a> {
    fn from(literal: &'a Literal) -> Self {
        NodeRef::Literal(literal)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        node.as_node_ref()
    }
}

/// Owned counterpart of [`NodeRef`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Relation(Relation),
    Function(Function),
    Attribute(Attribute),
    Header(Header),
    Direction(Direction),
    DirectionSet(DirectionSet),
    Aliases(AliasSet),
    Literal(Literal),
    Count(u64),
}

impl Node {
    /// Borrowed view of this node
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Relation(relation) => NodeRef::Relation(relation),
            Node::Function(function) => NodeRef::Function(function),
            Node::Attribute(attribute) => NodeRef::Attribute(attribute),
            Node::Header(header) => NodeRef::Header(header),
            Node::Direction(direction) => NodeRef::Direction(direction),
            Node::DirectionSet(set) => NodeRef::DirectionSet(set),
            Node::Aliases(aliases) => NodeRef::Aliases(aliases),
            Node::Literal(literal) => NodeRef::Literal(literal),
            Node::Count(count) => NodeRef::Count(*count),
        }
    }

    /// Kind of this node; `None` for scalars
    pub fn kind(&self) -> Option<NodeKind> {
        self.as_node_ref().kind()
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
