//! Trace acquisition.
//!
//! Produces the line sequences the comparator consumes:
//! - Trace files on disk
//! - Any buffered reader
//! - Interactive entry terminated by a marker line

pub mod reader;

// Re-export main functions
pub use reader::{collect_interactive, read_trace_file, read_trace_lines};
