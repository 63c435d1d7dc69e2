//! NES Trace Diff
//!
//! Finds the first point where two NES emulator execution traces
//! disagree: a trusted reference log and a log from the emulator
//! under test.
//!
//! This crate provides the core implementation for the
//! `nes-trace-diff` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! nes-trace-diff compare --reference nestest.log --test mine.log
//! ```
//!
//! The comparison itself is pure and can be driven directly:
//!
//! ```ignore
//! use nes_trace_diff::compare::compare;
//!
//! let result = compare(&reference_lines, &test_lines);
//! assert!(result.is_clean());
//! ```

pub mod commands;
pub mod compare;
pub mod input;
pub mod output;
pub mod parser;
pub mod utils;
