//! Structured form of one emulator trace line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One fully parsed trace line.
///
/// Register and cycle fields are kept as the exact text from the log so
/// that width and letter case take part in comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Program counter at fetch time (e.g. "C9A6")
    pub address: String,

    /// Opcode bytes separated by single spaces (e.g. "4C F5 C5")
    pub instruction: String,

    /// Disassembled instruction text
    pub mnemonic: String,

    pub a: String,
    pub x: String,
    pub y: String,
    pub p: String,
    pub sp: String,

    /// PPU dot/scanline counters, shown but never compared
    pub ppu: String,

    /// Cycle counter exactly as written in the log
    pub cycle_text: String,

    /// Numeric value of `cycle_text`
    pub cycle_count: u64,
}

impl TraceRecord {
    /// Text of a compared field
    pub fn field(&self, field: TraceField) -> &str {
        match field {
            TraceField::Address => &self.address,
            TraceField::Instruction => &self.instruction,
            TraceField::A => &self.a,
            TraceField::X => &self.x,
            TraceField::Y => &self.y,
            TraceField::P => &self.p,
            TraceField::Sp => &self.sp,
            TraceField::Cyc => &self.cycle_text,
        }
    }
}

/// Fields that take part in divergence detection, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraceField {
    Address,
    Instruction,
    A,
    X,
    Y,
    P,
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "CYC")]
    Cyc,
}

impl TraceField {
    /// Comparison order
    pub const ALL: [TraceField; 8] = [
        TraceField::Address,
        TraceField::Instruction,
        TraceField::A,
        TraceField::X,
        TraceField::Y,
        TraceField::P,
        TraceField::Sp,
        TraceField::Cyc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TraceField::Address => "Address",
            TraceField::Instruction => "Instruction",
            TraceField::A => "A",
            TraceField::X => "X",
            TraceField::Y => "Y",
            TraceField::P => "P",
            TraceField::Sp => "SP",
            TraceField::Cyc => "CYC",
        }
    }
}

impl fmt::Display for TraceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
