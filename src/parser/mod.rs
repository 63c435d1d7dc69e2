//! Trace line parsing.
//!
//! This module handles:
//! - The `LineParser` contract shared by every strategy
//! - Pattern based parsing (default, whitespace tolerant)
//! - Fixed-column parsing with a configurable layout
//! - The parsed record type

pub mod columns;
pub mod grammar;
pub mod line;
pub mod record;

// Re-export main types
pub use crate::utils::error::ParseFailure;
pub use columns::{layout_to_toml, load_layout, ColumnLayout, ColumnParser, ColumnRange, RegisterOffsets};
pub use grammar::GrammarParser;
pub use line::{LineParser, ParseStrategy, ParsedLine};
pub use record::{TraceField, TraceRecord};
