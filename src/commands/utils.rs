use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::parser::{layout_to_toml, ColumnLayout};
use crate::utils::config::REPORT_VERSION;

/// Print the default column layout, or write it to `output` as a
/// starting point for a custom layout file
pub fn display_layout(output: Option<&Path>) -> Result<()> {
    let toml_text =
        layout_to_toml(&ColumnLayout::default()).context("Failed to render column layout")?;

    match output {
        Some(path) => {
            fs::write(path, &toml_text)
                .with_context(|| format!("Failed to write layout to {}", path.display()))?;
            info!("✓ Layout written to: {}", path.display());
        }
        None => {
            println!("# Default column layout (half-open character offsets)");
            print!("{}", toml_text);
        }
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("NES Trace Diff v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Finds the first divergence between two NES emulator execution traces.");
}
