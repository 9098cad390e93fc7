//! Markdown table output of a sheet.

use sheep_core::SheetView;
use sheep_engine::engine::column_letter;
use std::io::Write;
use std::path::Path;

/// Write the grid to a markdown file
pub fn write_markdown(path: &Path, view: &dyn SheetView) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Sheet")?;
    writeln!(file)?;
    write_table(&mut file, view)
}

/// Write the grid as a markdown table, one row per sheet row.
pub fn write_table<W: Write>(w: &mut W, view: &dyn SheetView) -> std::io::Result<()> {
    let (rows, columns) = view.dimensions();

    // Header with column letters
    write!(w, "|   |")?;
    for column in 0..columns {
        let letter = column_letter(column).unwrap_or('?');
        write!(w, " {} |", letter)?;
    }
    writeln!(w)?;

    write!(w, "|---|")?;
    for _ in 0..columns {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in 0..rows {
        write!(w, "| {} |", row)?;
        for column in 0..columns {
            let element = view.value_at(row, column);
            write!(w, " {} |", escape_markdown(&element.text))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
