//! Compare command implementation.
//!
//! The compare command:
//! 1. Reads the reference trace
//! 2. Reads the test trace (file or interactive entry)
//! 3. Builds the selected line parser
//! 4. Compares the traces
//! 5. Prints the report and writes JSON if requested

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io;
use std::time::Instant;

use super::models::{CompareArgs, ParserKind, TestSource};
use crate::compare::{compare_with, ComparisonResult};
use crate::input::{collect_interactive, read_trace_file};
use crate::output::{render_text_report, write_report, ReportDocument};
use crate::parser::{load_layout, ColumnLayout, ParseStrategy};

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// Returns the comparison result; deciding whether a divergence is a
/// failing exit status is left to the caller.
///
/// # Errors
/// * Trace read failures
/// * Layout file errors
/// * Report write errors
pub fn execute_compare(args: CompareArgs) -> Result<ComparisonResult> {
    let start_time = Instant::now();

    info!("Reference trace: {}", args.reference.display());
    info!("Test trace: {}", args.test.describe());

    // Step 1: Read reference trace
    let reference = read_trace_file(&args.reference).with_context(|| {
        format!("Failed to read reference trace {}", args.reference.display())
    })?;

    // Step 2: Read test trace
    let test = match &args.test {
        TestSource::File(path) => read_trace_file(path)
            .with_context(|| format!("Failed to read test trace {}", path.display()))?,
        TestSource::Interactive => {
            let stdin = io::stdin();
            collect_interactive(stdin.lock(), &mut io::stderr(), &args.terminator)
                .context("Failed to read test trace from stdin")?
        }
    };

    // Step 3: Build parser
    let strategy = resolve_strategy(&args)?;
    let parser = strategy.parser();
    debug!("Using {} parser", parser.name());

    // Step 4: Compare
    let result = compare_with(parser.as_ref(), &reference, &test);

    if !result.parse_errors.is_empty() {
        warn!("{} line(s) could not be parsed", result.parse_errors.len());
    }

    // Step 5: Report
    if !args.quiet {
        print!("{}", render_text_report(&result));
    }

    if let Some(path) = &args.output_json {
        let report = ReportDocument::new(
            args.reference.display().to_string(),
            args.test.describe(),
            strategy.name(),
            result.clone(),
        );
        write_report(&report, path).context("Failed to write comparison report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    info!(
        "Compared {} lines in {:.2}s",
        result.lines_compared,
        start_time.elapsed().as_secs_f64()
    );

    Ok(result)
}

/// Build the parse strategy named by the arguments
///
/// **Public** - loads the layout file for the columns parser
pub fn resolve_strategy(args: &CompareArgs) -> Result<ParseStrategy> {
    match args.parser {
        ParserKind::Grammar => Ok(ParseStrategy::Grammar),
        ParserKind::Columns => {
            let layout = match &args.layout_file {
                Some(path) => load_layout(path)
                    .with_context(|| format!("Failed to load column layout {}", path.display()))?,
                None => ColumnLayout::default(),
            };
            Ok(ParseStrategy::Columns(layout))
        }
    }
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.reference.as_os_str().is_empty() {
        anyhow::bail!("Reference trace path cannot be empty");
    }

    if let TestSource::File(path) = &args.test {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Test trace path cannot be empty");
        }
    }

    if args.layout_file.is_some() && args.parser != ParserKind::Columns {
        anyhow::bail!("A column layout file requires the columns parser");
    }

    if args.test == TestSource::Interactive && args.terminator.trim().is_empty() {
        anyhow::bail!("Terminator cannot be empty");
    }

    Ok(())
}
