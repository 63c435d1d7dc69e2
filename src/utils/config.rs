//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Number of leading banner lines dropped from each trace before comparison
pub const HEADER_LINES: usize = 1;

/// Line number given to the first data line (numbering is 1-based and
/// still counts the dropped header)
pub const FIRST_DATA_LINE: usize = HEADER_LINES + 1;

/// Line that ends interactive trace entry
pub const DEFAULT_TERMINATOR: &str = "END";

/// Path argument meaning "read the test trace from stdin"
pub const STDIN_MARKER: &str = "-";
