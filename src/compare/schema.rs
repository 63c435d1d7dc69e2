//! Schema definitions for comparison results.
//!
//! Defines the structures that describe how two traces disagree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::TraceField;

/// Everything one comparison run found
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// First line whose compared fields differ (walk stops there)
    pub divergence: Option<DivergenceReport>,

    /// Set whenever the data line counts differ
    pub length_mismatch: Option<LengthMismatch>,

    /// Lines skipped because they did not parse
    pub parse_errors: Vec<ParseErrorEntry>,

    /// Number of lockstep positions visited
    pub lines_compared: usize,
}

impl ComparisonResult {
    pub fn has_divergence(&self) -> bool {
        self.divergence.is_some()
    }

    /// No divergence and equal lengths (parse errors do not count)
    pub fn is_clean(&self) -> bool {
        self.divergence.is_none() && self.length_mismatch.is_none()
    }

    /// One-line reason the run failed, `None` when clean
    pub fn failure_summary(&self) -> Option<String> {
        match (&self.divergence, &self.length_mismatch) {
            (Some(divergence), _) => Some(format!(
                "Traces diverged at line {}",
                divergence.line_number
            )),
            (None, Some(mismatch)) => Some(format!(
                "Trace lengths differ ({} vs {} lines)",
                mismatch.reference_lines, mismatch.test_lines
            )),
            (None, None) => None,
        }
    }
}

/// The first content divergence between the two traces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceReport {
    /// 1-based, header included, so never below 2
    pub line_number: usize,

    pub reference_line: String,
    pub test_line: String,

    /// Every differing field in comparison order
    pub field_diffs: Vec<FieldDiff>,
}

impl DivergenceReport {
    pub fn differs_in(&self, field: TraceField) -> bool {
        self.field_diffs.iter().any(|diff| diff.field == field)
    }
}

/// One field that differs between reference and test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: TraceField,
    pub reference: String,
    pub test: String,
}

impl FieldDiff {
    pub fn new(field: TraceField, reference: &str, test: &str) -> Self {
        Self {
            field,
            reference: reference.to_string(),
            test: test.to_string(),
        }
    }
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} vs {}", self.field, self.reference, self.test)
    }
}

/// Data line counts (header excluded) when they differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthMismatch {
    pub reference_lines: usize,
    pub test_lines: usize,
}

/// Which trace a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceSide {
    Reference,
    Test,
}

impl fmt::Display for TraceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSide::Reference => write!(f, "reference"),
            TraceSide::Test => write!(f, "test"),
        }
    }
}

/// A line that could not be parsed and was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseErrorEntry {
    pub line_number: usize,
    pub side: TraceSide,
    pub raw_line: String,
    pub reason: String,
}
