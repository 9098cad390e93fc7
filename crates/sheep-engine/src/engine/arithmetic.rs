//! N-ary arithmetic and comparison operators.
//!
//! Every operator folds its operand values left to right, with the first value
//! seeding the accumulator. Comparisons produce `1` for true and `0` for false.

use std::fmt;
use std::str::FromStr;

use super::error::{EvalError, InvalidExpression};
use super::expression::Expression;

/// The fixed operator set of the formula language.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Less,
    Equal,
}

impl Operator {
    /// All operators in the order the parser scans for them.
    pub const SCAN_ORDER: [Operator; 6] = [
        Operator::Equal,
        Operator::Less,
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
            Operator::Less => '<',
            Operator::Equal => '=',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Self::SCAN_ORDER.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Reduce `first` followed by `rest` with this operator.
    pub fn fold(self, first: i64, rest: &[i64]) -> Result<i64, EvalError> {
        match self {
            Operator::Plus => rest.iter().try_fold(first, |acc, &n| {
                acc.checked_add(n).ok_or(EvalError::Overflow)
            }),
            Operator::Minus => rest.iter().try_fold(first, |acc, &n| {
                acc.checked_sub(n).ok_or(EvalError::Overflow)
            }),
            Operator::Times => rest.iter().try_fold(first, |acc, &n| {
                acc.checked_mul(n).ok_or(EvalError::Overflow)
            }),
            Operator::Divide => rest.iter().try_fold(first, |acc, &n| {
                if n == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // i64::MIN / -1 is the only other failing case.
                acc.checked_div(n).ok_or(EvalError::Overflow)
            }),
            Operator::Less => {
                let mut previous = first;
                for &n in rest {
                    if previous >= n {
                        return Ok(0);
                    }
                    previous = n;
                }
                Ok(1)
            }
            Operator::Equal => Ok(i64::from(rest.iter().all(|&n| n == first))),
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let operator = match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c),
            _ => None,
        };
        operator.ok_or_else(|| InvalidExpression::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator applied to one or more operand expressions.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Arithmetic {
    operator: Operator,
    operands: Vec<Expression>,
}

impl Arithmetic {
    /// Build an operator node. Fails when `operands` is empty.
    pub fn new(operator: Operator, operands: Vec<Expression>) -> Result<Self, InvalidExpression> {
        if operands.is_empty() {
            return Err(InvalidExpression::NoOperands(operator.to_string()));
        }
        Ok(Arithmetic { operator, operands })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Never empty.
    pub fn operands(&self) -> &[Expression] {
        &self.operands
    }

    /// Fold already-reduced operand values.
    pub(crate) fn perform(&self, values: &[i64]) -> Result<i64, EvalError> {
        match values.split_first() {
            Some((&first, rest)) => self.operator.fold(first, rest),
            None => Err(EvalError::NotNumeric(self.to_string())),
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.operator)?;
            }
            write!(f, "{}", operand)?;
        }
        Ok(())
    }
}
