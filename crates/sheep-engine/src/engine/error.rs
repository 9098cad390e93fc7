//! Error types for expression construction, parsing and evaluation.

use thiserror::Error;

/// Errors raised while reducing an expression to a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric value was requested from something that has none
    /// (an unresolved reference, an empty cell or an unevaluated operator).
    #[error("Cannot convert to numeric value: {0}")]
    NotNumeric(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow")]
    Overflow,

    #[error("Circular reference through {0}")]
    CircularReference(String),
}

/// Errors raised by an expression factory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidExpression {
    #[error("Operator {0} requires at least one operand")]
    NoOperands(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Errors raised while parsing formula text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Not a valid token: {0}")]
    InvalidToken(String),

    #[error("Cannot parse: {0}")]
    InvalidExpression(#[from] InvalidExpression),
}
