//! sheep-core - UI-agnostic sheet store.

pub mod error;
pub mod sheet;

pub use error::{Result, SheetError};
pub use sheet::{DisplaySheet, Sheet, SheetBuilder, SheetUpdate, SheetView, ViewElement};

pub use sheep_engine::engine::{CellLocation, Expression};
