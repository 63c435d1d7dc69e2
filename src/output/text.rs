//! Terminal output rendering for comparison results.

use colored::*;

use crate::compare::{ComparisonResult, DivergenceReport, LengthMismatch, ParseErrorEntry};

/// Render a human-readable report of a comparison for the terminal
pub fn render_text_report(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str(&render_parse_errors(&result.parse_errors));

    if let Some(divergence) = &result.divergence {
        out.push_str(&render_divergence(divergence));
    }

    if let Some(mismatch) = &result.length_mismatch {
        out.push_str(&render_length_mismatch(mismatch));
    }

    if result.is_clean() {
        out.push_str(&format!(
            "{} ({} lines compared)\n",
            "Traces match".green().bold(),
            result.lines_compared
        ));
    }

    out
}

fn render_parse_errors(errors: &[ParseErrorEntry]) -> String {
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!(
            "{} ({}): {}\n",
            format!("Error parsing line {}", error.line_number).yellow(),
            error.side,
            error.reason
        ));
    }
    out
}

fn render_divergence(divergence: &DivergenceReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(
        &format!("Divergence found at line {}:", divergence.line_number)
            .red()
            .bold()
            .to_string(),
    );
    out.push('\n');
    out.push_str(&format!("Reference: {}\n", divergence.reference_line));
    out.push_str(&format!("Test:      {}\n", divergence.test_line));
    out.push_str(&format!("\n{}\n", "Differences:".bold()));
    for diff in &divergence.field_diffs {
        out.push_str(&format!("{}\n", diff));
    }
    out
}

fn render_length_mismatch(mismatch: &LengthMismatch) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Log lengths differ:".yellow().bold()));
    out.push_str(&format!("Reference log: {} lines\n", mismatch.reference_lines));
    out.push_str(&format!("Test log: {} lines\n", mismatch.test_lines));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{FieldDiff, TraceSide};
    use crate::parser::TraceField;

    fn divergent_result() -> ComparisonResult {
        ComparisonResult {
            divergence: Some(DivergenceReport {
                line_number: 42,
                reference_line: "C9A6  18  CLC  A:9F X:00 Y:00 P:A5 SP:FB PPU: 5,293 CYC:666".to_string(),
                test_line: "C9A6  18  CLC  A:9F X:00 Y:00 P:A4 SP:FB PPU: 5,293 CYC:667".to_string(),
                field_diffs: vec![
                    FieldDiff::new(TraceField::P, "A5", "A4"),
                    FieldDiff::new(TraceField::Cyc, "666", "667"),
                ],
            }),
            length_mismatch: Some(LengthMismatch {
                reference_lines: 100,
                test_lines: 41,
            }),
            parse_errors: vec![ParseErrorEntry {
                line_number: 7,
                side: TraceSide::Test,
                raw_line: "junk".to_string(),
                reason: "line does not match trace format".to_string(),
            }],
            lines_compared: 41,
        }
    }

    #[test]
    fn test_render_divergence_lists_each_field() {
        let text = render_text_report(&divergent_result());

        assert!(text.contains("Divergence found at line 42:"));
        assert!(text.contains("Reference: C9A6"));
        assert!(text.contains("Test:      C9A6"));
        assert!(text.contains("P: A5 vs A4\n"));
        assert!(text.contains("CYC: 666 vs 667\n"));
    }

    #[test]
    fn test_render_length_mismatch() {
        let text = render_text_report(&divergent_result());

        assert!(text.contains("Reference log: 100 lines"));
        assert!(text.contains("Test log: 41 lines"));
        assert!(!text.contains("Traces match"));
    }

    #[test]
    fn test_render_parse_errors() {
        let text = render_text_report(&divergent_result());

        assert!(text.contains("Error parsing line 7"));
        assert!(text.contains("(test): line does not match trace format"));
    }

    #[test]
    fn test_render_clean_result() {
        let result = ComparisonResult {
            lines_compared: 8991,
            ..Default::default()
        };
        let text = render_text_report(&result);

        assert!(text.contains("Traces match"));
        assert!(text.contains("(8991 lines compared)"));
        assert!(!text.contains("Divergence"));
    }
}
