//! Expression trees and their evaluation.
//!
//! An [`Expression`] is either a leaf (constant, reference, empty) or an
//! [`Arithmetic`] node. Evaluation never mutates the tree or the context: it
//! returns a new expression, which is a [`Expression::Constant`] whenever every
//! reference could be resolved to a number.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::arithmetic::Arithmetic;
use super::error::EvalError;

/// Identifier → expression bindings used to resolve references.
pub type Context = HashMap<String, Expression>;

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Expression {
    Constant(i64),
    /// A cell address or built-in name.
    Reference(String),
    /// The contents of a cell that holds nothing.
    Empty,
    Arithmetic(Arithmetic),
}

impl Expression {
    /// Identifiers this expression reads. References are not followed.
    pub fn dependencies(&self) -> BTreeSet<String> {
        let mut deps = BTreeSet::new();
        self.collect_dependencies(&mut deps);
        deps
    }

    fn collect_dependencies(&self, deps: &mut BTreeSet<String>) {
        match self {
            Expression::Constant(_) | Expression::Empty => {}
            Expression::Reference(identifier) => {
                deps.insert(identifier.clone());
            }
            Expression::Arithmetic(arithmetic) => {
                for operand in arithmetic.operands() {
                    operand.collect_dependencies(deps);
                }
            }
        }
    }

    /// The numeric value of a constant. Anything else must be evaluated first.
    pub fn value(&self) -> Result<i64, EvalError> {
        match self {
            Expression::Constant(n) => Ok(*n),
            other => Err(EvalError::NotNumeric(other.render())),
        }
    }

    /// Evaluate against `context`, chasing references through it.
    ///
    /// A chain of references that resolves more identifiers than `context`
    /// binds must revisit one of them, and fails as circular.
    pub fn evaluate(&self, context: &Context) -> Result<Expression, EvalError> {
        self.evaluate_at(context, 0)
    }

    fn evaluate_at(&self, context: &Context, depth: usize) -> Result<Expression, EvalError> {
        match self {
            Expression::Constant(_) | Expression::Empty => Ok(self.clone()),
            Expression::Reference(identifier) => match context.get(identifier) {
                Some(bound) => {
                    if depth >= context.len() {
                        return Err(EvalError::CircularReference(identifier.clone()));
                    }
                    bound.evaluate_at(context, depth + 1)
                }
                None => Ok(self.clone()),
            },
            Expression::Arithmetic(arithmetic) => {
                let mut values = Vec::with_capacity(arithmetic.operands().len());
                for operand in arithmetic.operands() {
                    let reduced = operand.evaluate_at(context, depth)?;
                    values.push(reduced.value()?);
                }
                Ok(Expression::Constant(arithmetic.perform(&values)?))
            }
        }
    }

    /// Canonical text form, re-parseable by the formula parser.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expression::Empty)
    }
}

impl From<Arithmetic> for Expression {
    fn from(arithmetic: Arithmetic) -> Self {
        Expression::Arithmetic(arithmetic)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(n) => write!(f, "{}", n),
            Expression::Reference(identifier) => write!(f, "{}", identifier),
            Expression::Empty => Ok(()),
            Expression::Arithmetic(arithmetic) => write!(f, "{}", arithmetic),
        }
    }
}
