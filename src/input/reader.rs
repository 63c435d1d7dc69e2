//! Line producers for trace files, readers and interactive entry.

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::utils::error::InputError;

/// Read every line of a trace file
///
/// # Errors
/// * `InputError::InvalidPath` - Path is empty or names a directory
/// * `InputError::ReadFailed` - File cannot be opened or is not UTF-8
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(InputError::InvalidPath("Path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(InputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    debug!("Reading trace from: {}", path.display());
    let file = File::open(path)?;
    let lines = read_trace_lines(BufReader::new(file))?;
    debug!("Read {} lines from {}", lines.len(), path.display());

    Ok(lines)
}

/// Read every line from a buffered reader
pub fn read_trace_lines<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Collect trace lines typed or pasted by a user
///
/// Writes a short prompt to `prompt`, then gathers lines from `reader`
/// until end of input or a line equal to `terminator` (surrounding
/// whitespace ignored). The terminator itself is not returned.
pub fn collect_interactive<R: BufRead, W: Write>(
    reader: R,
    prompt: &mut W,
    terminator: &str,
) -> Result<Vec<String>, InputError> {
    writeln!(
        prompt,
        "Paste the test trace, then enter '{}' or end input (Ctrl-D):",
        terminator
    )?;
    prompt.flush()?;

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == terminator {
            debug!("Terminator received after {} lines", lines.len());
            break;
        }
        lines.push(line);
    }

    info!("Collected {} test trace lines", lines.len());
    Ok(lines)
}
