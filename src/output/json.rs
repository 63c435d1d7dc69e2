//! JSON report output writer.
//!
//! Writes comparison results, with the context they were produced in,
//! to JSON files with proper formatting.

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::compare::ComparisonResult;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Schema version for compatibility checking
    pub report_version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Where the reference trace came from
    pub reference_source: String,

    /// Where the test trace came from ("stdin" for interactive entry)
    pub test_source: String,

    /// Parser strategy used ("grammar" or "columns")
    pub strategy: String,

    pub result: ComparisonResult,
}

impl ReportDocument {
    pub fn new(
        reference_source: impl Into<String>,
        test_source: impl Into<String>,
        strategy: impl Into<String>,
        result: ComparisonResult,
    ) -> Self {
        Self {
            report_version: REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            reference_source: reference_source.into(),
            test_source: test_source.into(),
            strategy: strategy.into(),
            result,
        }
    }
}

/// Write a report to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &ReportDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;

    Ok(())
}

/// Read a report back from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: ReportDocument = serde_json::from_reader(file)?;

    Ok(report)
}

/// Validate that output path is writable
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
