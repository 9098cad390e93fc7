use sheep_engine::engine::{CellLocation, Context, Expression, MAX_COLUMNS, Parser};

use super::Sheet;
use crate::error::{Result, SheetError};

/// Collects built-ins before fixing the dimensions of a new [`Sheet`].
pub struct SheetBuilder {
    parser: Box<dyn Parser>,
    default_expression: Expression,
    built_ins: Vec<(String, Expression)>,
}

impl SheetBuilder {
    pub fn new(parser: impl Parser + 'static, default_expression: Expression) -> Self {
        SheetBuilder {
            parser: Box::new(parser),
            default_expression,
            built_ins: Vec::new(),
        }
    }

    /// Bind `name` for every formula of the sheet. A later binding of the
    /// same name replaces an earlier one.
    pub fn include_built_in(mut self, name: impl Into<String>, expression: Expression) -> Self {
        self.built_ins.push((name.into(), expression));
        self
    }

    /// Create a sheet with no cells written.
    ///
    /// Built-in names must be identifiers the parser accepts and must not
    /// look like cell addresses, which would be shadowed by the cell.
    pub fn empty(self, rows: usize, columns: usize) -> Result<Sheet> {
        if columns > MAX_COLUMNS {
            return Err(SheetError::TooManyColumns(columns));
        }

        let mut built_ins = Context::new();
        for (name, expression) in self.built_ins {
            if name.is_empty() || !name.chars().all(char::is_alphanumeric) {
                return Err(SheetError::InvalidBuiltIn(name));
            }
            if CellLocation::parse(&name).is_some() {
                return Err(SheetError::BuiltInShadowsCell(name));
            }
            built_ins.insert(name, expression);
        }

        Ok(Sheet::new(
            self.parser,
            built_ins,
            self.default_expression,
            rows,
            columns,
        ))
    }
}
