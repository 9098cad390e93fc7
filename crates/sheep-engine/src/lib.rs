//! sheep_engine - Formula expressions, parsing and cell addressing.

pub mod engine;
