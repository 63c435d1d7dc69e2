//! Pattern based trace line parser.
//!
//! Recognizes nestest-style lines by token order rather than by column
//! position, so emulators that pad their logs differently still parse:
//!
//! `C000  4C F5 C5  JMP $C5F5      A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7`

use std::sync::OnceLock;

use regex::Regex;

use super::line::{LineParser, ParsedLine};
use super::record::TraceRecord;
use crate::utils::error::ParseFailure;

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<address>[0-9A-Fa-f]{4})\s+",
            r"(?P<bytes>(?:[0-9A-Fa-f]{2}\s+)+)",
            r"(?P<mnemonic>\S.*?)\s+",
            r"A:(?P<a>[0-9A-Fa-f]{2})\s+",
            r"X:(?P<x>[0-9A-Fa-f]{2})\s+",
            r"Y:(?P<y>[0-9A-Fa-f]{2})\s+",
            r"P:(?P<p>[0-9A-Fa-f]{2})\s+",
            r"SP:(?P<sp>[0-9A-Fa-f]{2})\s+",
            r"PPU:(?P<ppu>.*?)\s*",
            r"CYC:(?P<cyc>[0-9]+)$",
        ))
        .expect("trace line pattern is valid")
    })
}

/// Default parser: tolerant of whitespace variation between tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrammarParser;

impl GrammarParser {
    pub const NAME: &'static str = "grammar";

    pub fn new() -> Self {
        Self
    }
}

impl LineParser for GrammarParser {
    fn parse(&self, line: &str, line_number: usize) -> Result<ParsedLine, ParseFailure> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(ParsedLine::Blank);
        }

        let caps = line_pattern()
            .captures(trimmed)
            .ok_or_else(|| ParseFailure::new(line_number, line, "line does not match trace format"))?;

        let cycle_text = caps["cyc"].to_string();
        let cycle_count = cycle_text.parse::<u64>().map_err(|e| {
            ParseFailure::new(line_number, line, format!("invalid cycle count: {}", e))
        })?;

        Ok(ParsedLine::Record(TraceRecord {
            address: caps["address"].to_string(),
            instruction: collapse_whitespace(&caps["bytes"]),
            mnemonic: caps["mnemonic"].trim().to_string(),
            a: caps["a"].to_string(),
            x: caps["x"].to_string(),
            y: caps["y"].to_string(),
            p: caps["p"].to_string(),
            sp: caps["sp"].to_string(),
            ppu: caps["ppu"].trim().to_string(),
            cycle_text,
            cycle_count,
        }))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Trim and join on single spaces ("4C  F5 C5 " -> "4C F5 C5")
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
