//! NES Trace Diff CLI
//!
//! Compares an emulator execution trace against a trusted reference
//! trace and reports the first divergence.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;

use nes_trace_diff::commands::{
    display_layout, display_version, execute_compare, validate_args, CompareArgs, ParserKind,
    TestSource,
};
use nes_trace_diff::utils::config::DEFAULT_TERMINATOR;

/// NES Trace Diff - find where two emulator traces diverge
#[derive(Parser, Debug)]
#[command(name = "nes-trace-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Line parser choices
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ParserArg {
    /// Token pattern, tolerant of spacing differences
    Grammar,
    /// Fixed character columns (see `layout`)
    Columns,
}

impl From<ParserArg> for ParserKind {
    fn from(arg: ParserArg) -> Self {
        match arg {
            ParserArg::Grammar => ParserKind::Grammar,
            ParserArg::Columns => ParserKind::Columns,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a test trace against a reference trace
    Compare {
        /// Reference (trusted) trace file
        #[arg(short, long, env = "NES_TRACE_REFERENCE")]
        reference: PathBuf,

        /// Test trace file; omit or pass '-' to paste it on stdin
        #[arg(short, long)]
        test: Option<PathBuf>,

        /// Line parser
        #[arg(short, long, value_enum, default_value = "grammar")]
        parser: ParserArg,

        /// Column layout TOML (columns parser only)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Line that ends interactive entry
        #[arg(long, default_value = DEFAULT_TERMINATOR)]
        terminator: String,

        /// Do not print the text report
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the default column layout as TOML
    Layout {
        /// Write the layout to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            reference,
            test,
            parser,
            layout,
            output,
            terminator,
            quiet,
        } => {
            let args = CompareArgs {
                reference,
                test: TestSource::from_arg(test),
                parser: parser.into(),
                layout_file: layout,
                output_json: output,
                terminator,
                quiet,
            };

            // Validate args first
            validate_args(&args)?;

            let result = execute_compare(args)?;
            if let Some(summary) = result.failure_summary() {
                anyhow::bail!(summary);
            }
        }

        Commands::Layout { output } => {
            display_layout(output.as_deref())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
