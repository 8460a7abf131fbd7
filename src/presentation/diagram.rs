use std::io::Write;

use crate::{
    common::*,
    error::{Error, Result},
};

/// Checks that `byte` is eight `0`/`1` characters, most significant first.
pub fn parse_bits(byte: &str) -> Result<Vec<char>> {
    let bits: Vec<char> = byte.chars().collect();

    if bits.len() as u64 != BITS_PER_BYTE || bits.iter().any(|b| !matches!(b, '0' | '1')) {
        return Err(Error::InvalidBitPattern(byte.to_string()));
    }

    Ok(bits)
}

/// Draws one byte leaving on 8 wires at once.
pub fn parallel_diagram(out: &mut impl Write, byte: &str) -> Result<()> {
    let bits = parse_bits(byte)?;

    writeln!(out, "Parallel Transmission: {byte}")?;
    writeln!(out)?;
    writeln!(out, "All 8 bits transmitted simultaneously:")?;
    writeln!(out)?;

    for (i, bit) in bits.iter().enumerate() {
        let position = bits.len() - 1 - i;
        writeln!(out, "Bit {position} ─────────────────────► {bit}")?;
    }

    writeln!(out)?;
    writeln!(out, "{PARALLEL_WIRES} wires, 1 time unit")?;
    Ok(())
}

/// Draws one byte leaving on a single wire, one bit per time slot.
pub fn serial_diagram(out: &mut impl Write, byte: &str) -> Result<()> {
    let bits = parse_bits(byte)?;

    writeln!(out, "Serial Transmission: {byte}")?;
    writeln!(out)?;
    writeln!(out, "Bits transmitted one at a time:")?;
    writeln!(out)?;

    let mut timeline = String::from("Time: ");
    let mut wire = String::from("Wire: ");
    for (i, bit) in bits.iter().enumerate() {
        timeline.push_str(&format!("T{i} "));
        wire.push_str(&format!("{bit}  "));
    }

    writeln!(out, "{timeline}")?;
    writeln!(out, "{wire}")?;
    writeln!(out)?;
    writeln!(out, "{SERIAL_WIRES} wire, {} time units", bits.len())?;
    Ok(())
}

/// Time slots needed for one byte, side by side.
pub fn byte_timing(out: &mut impl Write, byte: &str) -> Result<()> {
    let bits = parse_bits(byte)?;
    let spaced: Vec<String> = bits.iter().map(char::to_string).collect();

    writeln!(out, "Parallel ({PARALLEL_WIRES} wires):")?;
    writeln!(out, "  T0: {}  ← All 8 bits at once", spaced.join(" "))?;
    writeln!(out, "  {}", "═".repeat(spaced.len() * 2 + 3))?;
    writeln!(out, "  Time units: 1")?;
    writeln!(out)?;

    writeln!(out, "Serial ({SERIAL_WIRES} wire):")?;
    for (i, bit) in bits.iter().enumerate() {
        writeln!(out, "  T{i}: {bit}")?;
    }
    writeln!(out, "  ═══")?;
    writeln!(out, "  Time units: {}", bits.len())?;
    Ok(())
}
