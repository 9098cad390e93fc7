use log::{debug, warn};
use sheep_engine::engine::{CellLocation, EvalError, Expression};
use std::collections::HashSet;

use super::{Sheet, SheetUpdate};
use crate::error::{Result, SheetError};

impl Sheet {
    /// Parse `input` and write it to the cell at `(row, column)`.
    ///
    /// Fails only when the input cannot be parsed, the cell lies outside the
    /// grid, or resolving references loops. Formulas that cannot be reduced
    /// to a number are stored unevaluated.
    pub fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()> {
        let location = self.location(row, column)?;
        let parsed = self.parser.parse(input).map_err(|source| SheetError::Parse {
            input: input.to_string(),
            source,
        })?;
        self.update_location(location, parsed)
            .map_err(|err| match err {
                SheetError::CircularReference { .. } => SheetError::CircularReference {
                    input: input.to_string(),
                },
                other => other,
            })
    }

    /// Evaluate `expression` against the current cells and built-ins and
    /// store the result at `location`.
    pub fn update_location(&mut self, location: CellLocation, expression: Expression) -> Result<()> {
        let location = self.location(location.row(), location.column())?;
        let snapshot = self.snapshot();
        debug!(
            "updating {} with {} bindings in scope",
            location,
            snapshot.len()
        );

        let stored = match expression.evaluate(&snapshot) {
            Ok(value) => value,
            Err(EvalError::CircularReference(identifier)) => {
                warn!("circular reference through {} writing {}", identifier, location);
                return Err(SheetError::CircularReference {
                    input: expression.render(),
                });
            }
            Err(err) => {
                warn!("storing {} unevaluated at {}: {}", expression, location, err);
                expression
            }
        };
        self.cells.insert(location, stored);
        Ok(())
    }

    /// Every written cell that reads `location`, directly or through other
    /// cells.
    ///
    /// Only stored expressions are inspected: a cell whose formula was
    /// reduced to a constant when written no longer depends on anything.
    pub fn dependents_of(&self, location: &CellLocation) -> HashSet<CellLocation> {
        let mut dependents = HashSet::new();
        let mut to_process = vec![location.to_string()];
        let mut visited = HashSet::new();

        while let Some(address) = to_process.pop() {
            if !visited.insert(address.clone()) {
                continue;
            }
            for (cell, expression) in &self.cells {
                if expression.dependencies().contains(&address) {
                    dependents.insert(*cell);
                    to_process.push(cell.to_string());
                }
            }
        }

        dependents
    }
}

impl SheetUpdate for Sheet {
    fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()> {
        Sheet::update(self, row, column, input)
    }
}
