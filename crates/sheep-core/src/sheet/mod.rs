//! Sheet state and logic (UI-agnostic).
//!
//! Front ends talk to a sheet through two traits: [`SheetView`] to read what
//! each cell displays, and [`SheetUpdate`] to push edits.

mod builder;
mod display;
mod ops;
mod state;

pub use builder::SheetBuilder;
pub use display::DisplaySheet;
pub use state::Sheet;

use crate::error::Result;

/// Text shown for a cell together with its colours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewElement {
    pub text: String,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl ViewElement {
    /// Black text on a white background.
    pub fn plain(text: impl Into<String>) -> Self {
        ViewElement {
            text: text.into(),
            background: "white",
            foreground: "black",
        }
    }
}

/// Read access for rendering a sheet.
pub trait SheetView {
    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    /// What the cell displays.
    fn value_at(&self, row: usize, column: usize) -> ViewElement;

    /// What the cell shows while being edited.
    fn formula_at(&self, row: usize, column: usize) -> ViewElement;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }
}

/// Write access for editing a sheet.
pub trait SheetUpdate {
    fn update(&mut self, row: usize, column: usize, input: &str) -> Result<()>;
}
