//! Cell edits given on the command line or in an edit script.
//!
//! An edit is written `CELL: FORMULA`, for example `C3: A1 + 1`. Edit
//! scripts hold one edit per line; blank lines and lines starting with `#`
//! are skipped.

use sheep_engine::engine::CellLocation;
use std::io::BufRead;

use crate::error::{Result, SheepError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub location: CellLocation,
    pub formula: String,
}

impl Edit {
    /// Parse `CELL: FORMULA`. The formula may be empty.
    pub fn parse(text: &str) -> std::result::Result<Edit, String> {
        let (cell, formula) = text
            .split_once(':')
            .ok_or_else(|| format!("Expected CELL: FORMULA, got {:?}", text))?;
        let location = cell.trim().parse::<CellLocation>()?;
        Ok(Edit {
            location,
            formula: formula.trim().to_string(),
        })
    }
}

/// Read every edit from an edit script.
pub fn read_edits<R: BufRead>(reader: R) -> Result<Vec<Edit>> {
    let mut edits = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let edit = Edit::parse(trimmed).map_err(|message| SheepError::Parse {
            line: index + 1,
            message,
        })?;
        edits.push(edit);
    }
    Ok(edits)
}
