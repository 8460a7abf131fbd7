//! The ordered demonstration sections and their rendering.

use std::io::Write;

use tracing::{debug, instrument};

use crate::{
    calculator::compare_serial_vs_parallel,
    common::*,
    error::{Error, Result},
    presentation::{diagram, reference},
};

/// Payload sizes of the multi-byte comparison
static COMPARISON_BYTES: [u64; 2] = [1, 100];

static KEY_CONCEPTS: [&str; 6] = [
    "Parallel: Multiple bits simultaneously, multiple wires",
    "Serial: One bit at a time, single wire",
    "Parallel: Faster per clock, but limited by skew",
    "Serial: Fewer wires, better for long distance",
    "Modern trend: Serial interfaces dominate",
    "High-speed serial > low-speed parallel",
];

/// One section of the demo, numbered in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Parallel definition and diagram
    ParallelTransmission,
    /// Serial definition and diagram
    SerialTransmission,
    /// Time units for one byte
    ByteComparison,
    /// 1 and 100 bytes at 1 Mbps
    MultiByte,
    /// Common bus widths
    BusWidths,
    /// Advantages and disadvantages
    TradeOffs,
    /// Real interfaces
    RealWorld,
    /// Parallel to serial shift
    WhySerialWon,
    /// 1 MiB over several links
    SpeedCalculation,
}

impl Section {
    /// Every section, in the order they are printed.
    pub const ALL: [Section; 9] = [
        Section::ParallelTransmission,
        Section::SerialTransmission,
        Section::ByteComparison,
        Section::MultiByte,
        Section::BusWidths,
        Section::TradeOffs,
        Section::RealWorld,
        Section::WhySerialWon,
        Section::SpeedCalculation,
    ];

    /// Looks a section up by its 1-based number.
    pub fn from_number(number: u8) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
            .ok_or(Error::UnknownSection {
                number,
                max: Self::ALL.len() as u8,
            })
    }

    /// 1-based position in the demo.
    pub fn number(self) -> u8 {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .map_or(0, |i| i as u8 + 1)
    }

    /// Heading text.
    pub fn title(self) -> &'static str {
        match self {
            Self::ParallelTransmission => "Parallel Transmission",
            Self::SerialTransmission => "Serial Transmission",
            Self::ByteComparison => "Transmission Comparison (1 byte)",
            Self::MultiByte => "Multiple Byte Transmission",
            Self::BusWidths => "Parallel Bus Widths",
            Self::TradeOffs => "Trade-offs",
            Self::RealWorld => "Real-world Interfaces",
            Self::WhySerialWon => "Why Serial Won",
            Self::SpeedCalculation => "Speed Calculation",
        }
    }

    /// Writes the heading and body of this section.
    #[instrument(skip(out))]
    pub fn render(self, out: &mut impl Write) -> Result<()> {
        debug!(number = self.number(), "Rendering section");

        writeln!(out)?;
        writeln!(out, "--- Example {}: {} ---", self.number(), self.title())?;
        writeln!(out)?;

        match self {
            Self::ParallelTransmission => {
                writeln!(out, "Definition: Multiple bits transmitted simultaneously")?;
                writeln!(out, "over multiple wires (one wire per bit).")?;
                writeln!(out)?;
                diagram::parallel_diagram(out, DEMO_BYTE)
            }
            Self::SerialTransmission => {
                writeln!(out, "Definition: Bits transmitted one at a time")?;
                writeln!(out, "over a single wire.")?;
                writeln!(out)?;
                diagram::serial_diagram(out, DEMO_BYTE)
            }
            Self::ByteComparison => diagram::byte_timing(out, DEMO_BYTE),
            Self::MultiByte => {
                for (i, &bytes) in COMPARISON_BYTES.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                        writeln!(out)?;
                    }
                    let comparison = compare_serial_vs_parallel(bytes, DEFAULT_BIT_RATE)?;
                    write!(out, "{comparison}")?;
                }
                Ok(())
            }
            Self::BusWidths => reference::bus_widths(out),
            Self::TradeOffs => reference::trade_offs(out),
            Self::RealWorld => reference::interfaces(out),
            Self::WhySerialWon => reference::why_serial_won(out),
            Self::SpeedCalculation => reference::speed_scenarios(out),
        }
    }
}

fn banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    Ok(())
}

/// Writes the header, the given sections in order, and the key concepts.
pub fn render(out: &mut impl Write, sections: &[Section]) -> Result<()> {
    banner(out)?;
    writeln!(out, "CHAPTER 15: Transmission Methods")?;
    writeln!(out, "Serial vs Parallel Transmission")?;
    banner(out)?;

    for section in sections {
        section.render(out)?;
    }

    writeln!(out)?;
    banner(out)?;
    writeln!(out, "Key Concepts:")?;
    for concept in &KEY_CONCEPTS {
        writeln!(out, "- {concept}")?;
    }
    banner(out)?;

    out.flush()?;
    Ok(())
}
