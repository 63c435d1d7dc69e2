use std::path::PathBuf;

use crate::utils::config::{DEFAULT_TERMINATOR, STDIN_MARKER};

/// Where the trace under test comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSource {
    File(PathBuf),
    /// Typed or pasted on stdin, ended by the terminator line
    Interactive,
}

impl TestSource {
    /// `None` or `-` means interactive entry
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != STDIN_MARKER => TestSource::File(path),
            _ => TestSource::Interactive,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TestSource::File(path) => path.display().to_string(),
            TestSource::Interactive => "stdin".to_string(),
        }
    }
}

/// Parser selection as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserKind {
    #[default]
    Grammar,
    Columns,
}

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Trusted reference trace
    pub reference: PathBuf,

    /// Trace under test
    pub test: TestSource,

    /// Line parser to use
    pub parser: ParserKind,

    /// TOML column layout (columns parser only)
    pub layout_file: Option<PathBuf>,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Line that ends interactive entry
    pub terminator: String,

    /// Suppress the terminal report
    pub quiet: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            reference: PathBuf::from("nestest.log"),
            test: TestSource::Interactive,
            parser: ParserKind::Grammar,
            layout_file: None,
            output_json: None,
            terminator: DEFAULT_TERMINATOR.to_string(),
            quiet: false,
        }
    }
}
