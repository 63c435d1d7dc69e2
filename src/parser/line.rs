//! The line parsing contract and strategy selection.

use super::columns::{ColumnLayout, ColumnParser};
use super::grammar::GrammarParser;
use super::record::TraceRecord;
use crate::utils::error::ParseFailure;

/// Outcome of parsing one line that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only input
    Blank,
    Record(TraceRecord),
}

impl ParsedLine {
    pub fn into_record(self) -> Option<TraceRecord> {
        match self {
            ParsedLine::Record(record) => Some(record),
            ParsedLine::Blank => None,
        }
    }
}

/// Turns one raw trace line into a [`TraceRecord`].
///
/// Implementations never panic on malformed input; they return a
/// [`ParseFailure`] carrying the line and its number instead.
pub trait LineParser {
    fn parse(&self, line: &str, line_number: usize) -> Result<ParsedLine, ParseFailure>;

    /// Short strategy name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Which parser to build
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParseStrategy {
    /// Whitespace tolerant pattern match (portable across emulators)
    #[default]
    Grammar,
    /// Fixed character offsets for one emulator's log layout
    Columns(ColumnLayout),
}

impl ParseStrategy {
    pub fn parser(&self) -> Box<dyn LineParser> {
        match self {
            ParseStrategy::Grammar => Box::new(GrammarParser::new()),
            ParseStrategy::Columns(layout) => Box::new(ColumnParser::new(layout.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParseStrategy::Grammar => GrammarParser::NAME,
            ParseStrategy::Columns(_) => ColumnParser::NAME,
        }
    }
}
