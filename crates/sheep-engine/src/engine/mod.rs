//! Spreadsheet engine API.
//!
//! This module provides the formula layer of the spreadsheet:
//!
//! - [`Expression`], [`Arithmetic`], [`Operator`] - Expression trees and evaluation
//! - [`ExpressionFactory`], [`CoreFactory`] - Typed node construction
//! - [`Parser`], [`SimpleParser`] - Formula text to expression trees
//! - [`CellLocation`] - Cell addressing (row/column ↔ `C3` notation)

mod arithmetic;
mod cell_location;
mod error;
mod expression;
mod factory;
mod parser;

pub use arithmetic::{Arithmetic, Operator};
pub use cell_location::{CellLocation, MAX_COLUMNS, column_letter};
pub use error::{EvalError, InvalidExpression, ParseError};
pub use expression::{Context, Expression};
pub use factory::{CoreFactory, ExpressionFactory};
pub use parser::{Parser, SimpleParser};
