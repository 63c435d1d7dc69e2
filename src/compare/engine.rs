//! Core comparison engine.
//! Walks two traces in lockstep and stops at the first content divergence.

use log::{debug, warn};

use super::schema::{
    ComparisonResult, DivergenceReport, FieldDiff, LengthMismatch, ParseErrorEntry, TraceSide,
};
use crate::parser::{GrammarParser, LineParser, ParsedLine, TraceField, TraceRecord};
use crate::utils::config::{FIRST_DATA_LINE, HEADER_LINES};

/// Compare two traces with the default (pattern based) parser
///
/// # Arguments
/// * `reference` - Lines of the trusted trace, header included
/// * `test` - Lines of the trace under test, header included
///
/// # Example
/// ```ignore
/// let result = compare(&reference_lines, &test_lines);
/// if let Some(divergence) = &result.divergence {
///     println!("first divergence at line {}", divergence.line_number);
/// }
/// ```
pub fn compare<S: AsRef<str>>(reference: &[S], test: &[S]) -> ComparisonResult {
    compare_with(&GrammarParser::new(), reference, test)
}

/// Compare two traces with an explicit line parser
///
/// Blank lines are dropped and the remaining lines trimmed, then the
/// first line of each side is discarded as a banner. Line numbers count
/// from [`FIRST_DATA_LINE`] over what remains.
///
/// A line that fails to parse is recorded in `parse_errors` and skipped;
/// only a parsed pair with differing fields ends the walk. The length
/// check runs regardless of how the walk ended.
pub fn compare_with<S: AsRef<str>>(
    parser: &dyn LineParser,
    reference: &[S],
    test: &[S],
) -> ComparisonResult {
    let reference_data = data_lines(reference);
    let test_data = data_lines(test);

    debug!(
        "Comparing {} reference and {} test data lines using {} parser",
        reference_data.len(),
        test_data.len(),
        parser.name()
    );

    let mut result = ComparisonResult::default();

    for (offset, (ref_line, test_line)) in reference_data.iter().zip(&test_data).enumerate() {
        let line_number = offset + FIRST_DATA_LINE;
        result.lines_compared += 1;

        let ref_record = parse_side(parser, ref_line, line_number, TraceSide::Reference, &mut result);
        let test_record = parse_side(parser, test_line, line_number, TraceSide::Test, &mut result);

        let (Some(ref_record), Some(test_record)) = (ref_record, test_record) else {
            continue;
        };

        let field_diffs = diff_records(&ref_record, &test_record);
        if !field_diffs.is_empty() {
            debug!(
                "Divergence at line {} in {} field(s)",
                line_number,
                field_diffs.len()
            );
            result.divergence = Some(DivergenceReport {
                line_number,
                reference_line: ref_line.to_string(),
                test_line: test_line.to_string(),
                field_diffs,
            });
            break;
        }
    }

    if reference_data.len() != test_data.len() {
        debug!(
            "Trace lengths differ: reference={}, test={}",
            reference_data.len(),
            test_data.len()
        );
        result.length_mismatch = Some(LengthMismatch {
            reference_lines: reference_data.len(),
            test_lines: test_data.len(),
        });
    }

    result
}

/// Every compared field that differs, in comparison order
///
/// PPU state and the mnemonic are not compared.
pub fn diff_records(reference: &TraceRecord, test: &TraceRecord) -> Vec<FieldDiff> {
    TraceField::ALL
        .iter()
        .filter_map(|&field| {
            let (r, t) = (reference.field(field), test.field(field));
            (r != t).then(|| FieldDiff::new(field, r, t))
        })
        .collect()
}

/// Non-blank lines, trimmed, with the header dropped
fn data_lines<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .skip(HEADER_LINES)
        .collect()
}

/// Parse one side, recording a failure instead of propagating it
fn parse_side(
    parser: &dyn LineParser,
    line: &str,
    line_number: usize,
    side: TraceSide,
    result: &mut ComparisonResult,
) -> Option<TraceRecord> {
    let reason = match parser.parse(line, line_number) {
        Ok(ParsedLine::Record(record)) => return Some(record),
        Ok(ParsedLine::Blank) => "blank line".to_string(),
        Err(failure) => failure.reason,
    };

    warn!("Error parsing {} line {}: {}", side, line_number, reason);
    result.parse_errors.push(ParseErrorEntry {
        line_number,
        side,
        raw_line: line.to_string(),
        reason,
    });
    None
}
