//! Fixed-column trace line parser and its layout configuration.
//!
//! Every field is read from a character window of the line. Windows are
//! a property of one emulator's log format, so they live in a
//! [`ColumnLayout`] that can be loaded from TOML:
//!
//! ```toml
//! address = { start = 0, end = 4 }
//! instruction = { start = 6, end = 14 }
//! command = { start = 15, end = 48 }
//! ppu = { start = 78, end = 86 }
//! cyc = { start = 90, end = 100 }
//!
//! [registers]
//! a = { start = 50, end = 52 }
//! x = { start = 55, end = 57 }
//! y = { start = 60, end = 62 }
//! p = { start = 65, end = 67 }
//! sp = { start = 71, end = 73 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::grammar::collapse_whitespace;
use super::line::{LineParser, ParsedLine};
use super::record::TraceRecord;
use crate::utils::error::{ConfigError, ParseFailure};

/// Half-open character window `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice `line` by character position, clamping the end to the line
    /// length.
    ///
    /// Returns `None` when the window starts past the end of the line.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        // Byte offset of the n-th character; n == char count maps to the end
        let byte_offset = |n: usize| {
            line.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(line.len()))
                .nth(n)
        };
        let start = byte_offset(self.start)?;
        let end = byte_offset(self.end).unwrap_or(line.len()).max(start);
        line.get(start..end)
    }
}

/// Windows of the five register values (the two hex digits, not the label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOffsets {
    pub a: ColumnRange,
    pub x: ColumnRange,
    pub y: ColumnRange,
    pub p: ColumnRange,
    pub sp: ColumnRange,
}

/// Character windows for every field of a trace line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub address: ColumnRange,
    pub instruction: ColumnRange,
    pub command: ColumnRange,
    pub ppu: ColumnRange,
    pub cyc: ColumnRange,
    pub registers: RegisterOffsets,
}

impl Default for ColumnLayout {
    /// nestest-style layout
    fn default() -> Self {
        Self {
            address: ColumnRange::new(0, 4),
            instruction: ColumnRange::new(6, 14),
            command: ColumnRange::new(15, 48),
            ppu: ColumnRange::new(78, 86),
            cyc: ColumnRange::new(90, 100),
            registers: RegisterOffsets {
                a: ColumnRange::new(50, 52),
                x: ColumnRange::new(55, 57),
                y: ColumnRange::new(60, 62),
                p: ColumnRange::new(65, 67),
                sp: ColumnRange::new(71, 73),
            },
        }
    }
}

impl ColumnLayout {
    /// Reject empty or inverted windows
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, range) in self.named_ranges() {
            if range.start >= range.end {
                return Err(ConfigError::InvalidRange {
                    field,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }

    fn named_ranges(&self) -> [(&'static str, ColumnRange); 10] {
        [
            ("address", self.address),
            ("instruction", self.instruction),
            ("command", self.command),
            ("ppu", self.ppu),
            ("cyc", self.cyc),
            ("registers.a", self.registers.a),
            ("registers.x", self.registers.x),
            ("registers.y", self.registers.y),
            ("registers.p", self.registers.p),
            ("registers.sp", self.registers.sp),
        ]
    }
}

/// Load and validate a column layout from a TOML file
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidRange` - If a window is empty or inverted
pub fn load_layout(path: impl AsRef<Path>) -> Result<ColumnLayout, ConfigError> {
    let path = path.as_ref();
    debug!("Loading column layout from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let layout: ColumnLayout = toml::from_str(&contents)?;
    layout.validate()?;
    Ok(layout)
}

/// Render a layout as TOML (the format `load_layout` reads)
pub fn layout_to_toml(layout: &ColumnLayout) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(layout)?)
}

/// Offset based parser. Fast and exact, but breaks on lines padded
/// differently from its layout.
#[derive(Debug, Clone)]
pub struct ColumnParser {
    layout: ColumnLayout,
}

impl ColumnParser {
    pub const NAME: &'static str = "columns";

    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    fn window<'a>(
        &self,
        line: &'a str,
        range: ColumnRange,
        field: &str,
        line_number: usize,
    ) -> Result<&'a str, ParseFailure> {
        range.slice(line).ok_or_else(|| {
            ParseFailure::new(
                line_number,
                line,
                format!("{} column {}..{} is out of range", field, range.start, range.end),
            )
        })
    }

    fn register(
        &self,
        line: &str,
        range: ColumnRange,
        field: &str,
        line_number: usize,
    ) -> Result<String, ParseFailure> {
        let value = self.window(line, range, field, line_number)?;
        if value.len() != 2 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseFailure::new(
                line_number,
                line,
                format!("register {} is not two hex digits: {:?}", field, value),
            ));
        }
        Ok(value.to_string())
    }
}

impl LineParser for ColumnParser {
    fn parse(&self, line: &str, line_number: usize) -> Result<ParsedLine, ParseFailure> {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            return Ok(ParsedLine::Blank);
        }
        let layout = &self.layout;

        let address = self
            .window(line_trimmed, layout.address, "address", line_number)?
            .trim();
        if address.is_empty() || !address.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseFailure::new(
                line_number,
                line,
                format!("address is not hexadecimal: {:?}", address),
            ));
        }

        let instruction = self.window(line_trimmed, layout.instruction, "instruction", line_number)?;
        let command = self.window(line_trimmed, layout.command, "command", line_number)?;

        let regs = &layout.registers;
        let a = self.register(line_trimmed, regs.a, "A", line_number)?;
        let x = self.register(line_trimmed, regs.x, "X", line_number)?;
        let y = self.register(line_trimmed, regs.y, "Y", line_number)?;
        let p = self.register(line_trimmed, regs.p, "P", line_number)?;
        let sp = self.register(line_trimmed, regs.sp, "SP", line_number)?;

        let ppu = self.window(line_trimmed, layout.ppu, "ppu", line_number)?;

        let cycle_text = self
            .window(line_trimmed, layout.cyc, "cyc", line_number)?
            .trim()
            .to_string();
        if cycle_text.is_empty() || !cycle_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseFailure::new(
                line_number,
                line,
                format!("cycle count is not decimal: {:?}", cycle_text),
            ));
        }
        let cycle_count = cycle_text.parse::<u64>().map_err(|e| {
            ParseFailure::new(line_number, line, format!("invalid cycle count: {}", e))
        })?;

        Ok(ParsedLine::Record(TraceRecord {
            address: address.to_string(),
            instruction: collapse_whitespace(instruction),
            mnemonic: command.trim().to_string(),
            a,
            x,
            y,
            p,
            sp,
            ppu: ppu.trim().to_string(),
            cycle_text,
            cycle_count,
        }))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
