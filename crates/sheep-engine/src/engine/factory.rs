//! Construction of typed expression nodes from parser output.

use super::arithmetic::{Arithmetic, Operator};
use super::error::InvalidExpression;
use super::expression::Expression;

/// Builds expression nodes for a parser.
pub trait ExpressionFactory {
    fn create_reference(&self, identifier: &str) -> Expression;

    fn create_constant(&self, value: i64) -> Expression;

    fn create_empty(&self) -> Expression;

    /// Create an operator node from its name (`+ - * / < =`) and arguments.
    fn create_operator(
        &self,
        name: &str,
        args: Vec<Expression>,
    ) -> Result<Expression, InvalidExpression>;
}

/// Factory for the core expression set.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoreFactory;

impl CoreFactory {
    pub fn new() -> Self {
        CoreFactory
    }
}

impl ExpressionFactory for CoreFactory {
    fn create_reference(&self, identifier: &str) -> Expression {
        Expression::Reference(identifier.to_string())
    }

    fn create_constant(&self, value: i64) -> Expression {
        Expression::Constant(value)
    }

    fn create_empty(&self) -> Expression {
        Expression::Empty
    }

    fn create_operator(
        &self,
        name: &str,
        args: Vec<Expression>,
    ) -> Result<Expression, InvalidExpression> {
        let operator: Operator = name.parse()?;
        Ok(Arithmetic::new(operator, args)?.into())
    }
}
