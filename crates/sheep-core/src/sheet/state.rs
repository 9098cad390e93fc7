use sheep_engine::engine::{CellLocation, Context, Expression, Parser};
use std::collections::HashMap;

use super::{SheetView, ViewElement};
use crate::error::{Result, SheetError};

/// A fixed-size grid of cells whose formulas are evaluated as they are written.
///
/// Built with [`super::SheetBuilder`]. Dimensions and built-ins never change
/// after construction; cells are only ever written or overwritten.
pub struct Sheet {
    /// Parser for cell input
    pub(super) parser: Box<dyn Parser>,
    /// Named expressions available to every formula
    pub(super) built_ins: Context,
    /// Shown for cells that have never been written
    pub(super) default_expression: Expression,
    pub(super) rows: usize,
    pub(super) columns: usize,
    /// Stored expression of every written cell
    pub(super) cells: HashMap<CellLocation, Expression>,
}

impl Sheet {
    pub(super) fn new(
        parser: Box<dyn Parser>,
        built_ins: Context,
        default_expression: Expression,
        rows: usize,
        columns: usize,
    ) -> Self {
        Sheet {
            parser,
            built_ins,
            default_expression,
            rows,
            columns,
            cells: HashMap::new(),
        }
    }

    pub fn built_ins(&self) -> &Context {
        &self.built_ins
    }

    /// The stored expression of a written cell.
    pub fn expression_at(&self, location: &CellLocation) -> Option<&Expression> {
        self.cells.get(location)
    }

    /// Written cells in no particular order.
    pub fn written_cells(&self) -> impl Iterator<Item = (&CellLocation, &Expression)> {
        self.cells.iter()
    }

    /// Check that `(row, column)` lies inside the grid.
    pub fn location(&self, row: usize, column: usize) -> Result<CellLocation> {
        if row >= self.rows || column >= self.columns {
            return Err(SheetError::OutOfBounds { row, column });
        }
        CellLocation::new(row, column).ok_or(SheetError::OutOfBounds { row, column })
    }

    /// The evaluation context for the next update: every built-in plus
    /// every written cell under its address.
    ///
    /// Rebuilt on each call so it always reflects the committed cells.
    pub fn snapshot(&self) -> Context {
        let mut context = self.built_ins.clone();
        for (location, expression) in &self.cells {
            context.insert(location.to_string(), expression.clone());
        }
        context
    }

    fn rendered_at(&self, row: usize, column: usize) -> String {
        CellLocation::new(row, column)
            .and_then(|location| self.cells.get(&location))
            .unwrap_or(&self.default_expression)
            .render()
    }
}

impl SheetView for Sheet {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn value_at(&self, row: usize, column: usize) -> ViewElement {
        ViewElement::plain(self.rendered_at(row, column))
    }

    // Only the evaluated result is kept once a cell is written, unless it
    // could not be evaluated, so the formula is the stored expression too.
    fn formula_at(&self, row: usize, column: usize) -> ViewElement {
        ViewElement::plain(self.rendered_at(row, column))
    }
}
