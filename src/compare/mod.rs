//! Trace comparison.
//!
//! This module walks a reference trace and a trace under test in lockstep
//! and reports the first line where their compared fields disagree, any
//! lines that could not be parsed, and whether the traces differ in length.
//!
//! The comparison is pure: it takes already-read lines and returns a
//! [`ComparisonResult`]. Reading traces and printing reports happen elsewhere.
//!
//! # Example
//! ```ignore
//! use nes_trace_diff::compare::compare_with;
//! use nes_trace_diff::parser::ParseStrategy;
//!
//! let parser = ParseStrategy::Grammar.parser();
//! let result = compare_with(parser.as_ref(), &reference_lines, &test_lines);
//! ```

mod engine;
mod schema;

// Public API exports
pub use engine::{compare, compare_with, diff_records};
pub use schema::{
    ComparisonResult, DivergenceReport, FieldDiff, LengthMismatch, ParseErrorEntry, TraceSide,
};
