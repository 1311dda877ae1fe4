//! Predicate, connective and numeric functions

use crate::attribute::Attribute;
use crate::literal::Literal;
use serde::{Deserialize, Serialize};

/// Two-argument operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Equality (=)
    Equality,
    /// Inequality (<>)
    Inequality,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqualTo,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqualTo,
    /// Membership in a set or range
    Inclusion,
    /// Non-membership in a set or range
    Exclusion,
    /// Pattern match
    Match,
    /// Negated pattern match
    NoMatch,
    /// Addition (+)
    Addition,
    /// Subtraction (-)
    Subtraction,
    /// Multiplication (*)
    Multiplication,
    /// Division (/)
    Division,
    /// Modulo (%)
    Modulo,
    /// Exponentiation (**)
    Exponentiation,
}

impl BinaryOp {
    /// Every binary operator
    pub const ALL: [BinaryOp; 18] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Equality,
        BinaryOp::Inequality,
        BinaryOp::GreaterThan,
        BinaryOp::GreaterThanOrEqualTo,
        BinaryOp::LessThan,
        BinaryOp::LessThanOrEqualTo,
        BinaryOp::Inclusion,
        BinaryOp::Exclusion,
        BinaryOp::Match,
        BinaryOp::NoMatch,
        BinaryOp::Addition,
        BinaryOp::Subtraction,
        BinaryOp::Multiplication,
        BinaryOp::Division,
        BinaryOp::Modulo,
        BinaryOp::Exponentiation,
    ];
}

/// Single-argument operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Logical NOT
    Not,
    /// String length
    Length,
    /// Absolute value
    Absolute,
    /// Square root
    SquareRoot,
    /// Negation
    UnaryMinus,
    /// Identity plus
    UnaryPlus,
}

impl UnaryOp {
    /// Every unary operator
    pub const ALL: [UnaryOp; 6] = [
        UnaryOp::Not,
        UnaryOp::Length,
        UnaryOp::Absolute,
        UnaryOp::SquareRoot,
        UnaryOp::UnaryMinus,
        UnaryOp::UnaryPlus,
    ];
}

/// Argument of a function: an attribute reference, a nested function or a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Reference to an attribute of the enclosing relation
    Attribute(Attribute),
    /// Nested function
    Function(Box<Function>),
    /// Scalar literal
    Literal(Literal),
}

impl From<Attribute> for Operand {
    fn from(attribute: Attribute) -> Self {
        Operand::Attribute(attribute)
    }
}

impl From<&Attribute> for Operand {
    fn from(attribute: &Attribute) -> Self {
        Operand::Attribute(attribute.clone())
    }
}

impl From<Function> for Operand {
    fn from(function: Function) -> Self {
        Operand::Function(Box::new(function))
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

macro_rules! operand_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Literal(Literal::from(value))
                }
            }
        )*
    };
}

operand_from_scalar!(bool, i32, i64, u64, f64, &str, String);

/// Function node: predicates, connectives, numeric operators and propositions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum Function {
    /// Binary operator applied to two operands
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        left: Operand,
        /// Right operand
        right: Operand,
    },

    /// Unary operator applied to one operand
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        operand: Operand,
    },

    /// Always-true proposition
    Tautology,

    /// Always-false proposition
    Contradiction,
}

impl Function {
    /// Build a binary function
    pub fn binary(op: BinaryOp, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Function::Binary {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    /// Build a unary function
    pub fn unary(op: UnaryOp, operand: impl Into<Operand>) -> Self {
        Function::Unary {
            op,
            operand: operand.into(),
        }
    }

    /// `left = right`
    pub fn equals(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Equality, left, right)
    }

    /// `left * right`
    pub fn multiply(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Multiplication, left, right)
    }

    /// Conjunction of `self` and `other`
    pub fn and(self, other: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::And, self, other)
    }

    /// Disjunction of `self` and `other`
    pub fn or(self, other: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Or, self, other)
    }

    /// Negation of `self`
    pub fn negate(self) -> Self {
        Self::unary(UnaryOp::Not, self)
    }
}
