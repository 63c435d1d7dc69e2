//! Report output.
//!
//! This module handles presenting comparison results:
//! - Human-readable terminal reports
//! - JSON report files

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report, ReportDocument};
pub use text::render_text_report;
