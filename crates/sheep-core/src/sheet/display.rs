use sheep_engine::engine::{CellLocation, Expression, Parser};
use std::collections::HashMap;

use super::{SheetUpdate, SheetView, ViewElement};
use crate::error::{Result, SheetError};

/// A sheet that checks and stores formulas without evaluating them.
///
/// References are never resolved, so every cell displays its parsed formula.
pub struct DisplaySheet {
    parser: Box<dyn Parser>,
    default_expression: Expression,
    rows: usize,
    columns: usize,
    cells: HashMap<CellLocation, Expression>,
}

impl DisplaySheet {
    pub fn new(
        parser: impl Parser + 'static,
        default_expression: Expression,
        rows: usize,
        columns: usize,
    ) -> Self {
        DisplaySheet {
            parser: Box::new(parser),
            default_expression,
            rows,
            columns,
            cells: HashMap::new(),
        }
    }
}

impl SheetView for DisplaySheet {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn value_at(&self, row: usize, column: usize) -> ViewElement {
        let expression = CellLocation::new(row, column)
            .and_then(|location| self.cells.get(&location))
            .unwrap_or(&self.default_expression);
        ViewElement::plain(expression.render())
    }

    fn formula_at(&self, row: usize, column: usize) -> ViewElement {
        self.value_at(row, column)
    }
}

impl SheetUpdate for DisplaySheet {
    fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()> {
        let location = CellLocation::new(row, column)
            .filter(|_| row < self.rows && column < self.columns)
            .ok_or(SheetError::OutOfBounds { row, column })?;
        let expression = self.parser.parse(input).map_err(|source| SheetError::Parse {
            input: input.to_string(),
            source,
        })?;
        self.cells.insert(location, expression);
        Ok(())
    }
}
