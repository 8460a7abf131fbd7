//! Static tables shown by the demo: bus widths, interfaces, trade-offs and
//! the 1 MiB speed scenarios.

use std::io::Write;

use crate::{calculator::compute_time, common::*, error::Result};

/// A parallel bus width and where it is used.
#[derive(Clone, Copy, Debug)]
pub struct BusWidth {
    /// Data lines
    pub bits: u32,
    /// Typical use
    pub application: &'static str,
}

/// A real-world interface.
#[derive(Clone, Copy, Debug)]
pub struct Interface {
    /// Common name
    pub name: &'static str,
    /// Width or signalling rate, as marketed
    pub rate: &'static str,
    /// Typical use
    pub usage: &'static str,
}

/// Sending a payload serially at a given rate.
#[derive(Clone, Copy, Debug)]
pub struct SpeedScenario {
    /// Printed heading
    pub description: &'static str,
    /// Payload in bits
    pub bits: u64,
    /// Link rate in bits per second
    pub bit_rate: f64,
}

/// Common parallel bus widths, narrowest first.
pub static BUS_WIDTHS: [BusWidth; 6] = [
    BusWidth {
        bits: 8,
        application: "Early computer buses (ISA)",
    },
    BusWidth {
        bits: 16,
        application: "PC expansion bus",
    },
    BusWidth {
        bits: 32,
        application: "PCI, modern memory buses",
    },
    BusWidth {
        bits: 64,
        application: "Modern CPU to memory",
    },
    BusWidth {
        bits: 128,
        application: "Graphics card memory",
    },
    BusWidth {
        bits: 256,
        application: "High-end GPU memory",
    },
];

/// Legacy parallel interfaces.
pub static PARALLEL_INTERFACES: [Interface; 4] = [
    Interface {
        name: "Parallel Port (LPT)",
        rate: "8 data lines",
        usage: "Printer connection",
    },
    Interface {
        name: "IDE/PATA",
        rate: "16-bit",
        usage: "Hard drives",
    },
    Interface {
        name: "PCI",
        rate: "32/64-bit",
        usage: "Expansion cards",
    },
    Interface {
        name: "Memory Bus",
        rate: "64-256 bit",
        usage: "RAM connection",
    },
];

/// Modern serial interfaces.
pub static SERIAL_INTERFACES: [Interface; 6] = [
    Interface {
        name: "USB",
        rate: "Up to 40 Gbps",
        usage: "Universal connection",
    },
    Interface {
        name: "SATA",
        rate: "6 Gbps",
        usage: "Hard drives/SSDs",
    },
    Interface {
        name: "PCIe",
        rate: "32 GT/s per lane",
        usage: "GPUs, NVMe SSDs",
    },
    Interface {
        name: "Ethernet",
        rate: "10 Gbps+",
        usage: "Networking",
    },
    Interface {
        name: "HDMI",
        rate: "48 Gbps",
        usage: "Video/audio",
    },
    Interface {
        name: "Thunderbolt",
        rate: "40 Gbps",
        usage: "High-speed peripherals",
    },
];

/// 1 MiB over a few links of very different speed.
pub static SPEED_SCENARIOS: [SpeedScenario; 3] = [
    SpeedScenario {
        description: "Send 1 MB over USB 2.0 (480 Mbps)",
        bits: MEBIBYTE_BITS,
        bit_rate: 480_000_000.0,
    },
    SpeedScenario {
        description: "Send 1 MB over USB 3.0 (5 Gbps)",
        bits: MEBIBYTE_BITS,
        bit_rate: 5_000_000_000.0,
    },
    SpeedScenario {
        description: "Send 1 MB over old parallel (2 Mbps)",
        bits: MEBIBYTE_BITS,
        bit_rate: 2_000_000.0,
    },
];

static PARALLEL_PROS: [&str; 3] = [
    "Faster (transmits multiple bits at once)",
    "Good for short distances",
    "Simple timing (no serialization needed)",
];

static PARALLEL_CONS: [&str; 5] = [
    "More wires required (expensive)",
    "Crosstalk between wires",
    "Skew: bits may arrive at different times",
    "Not practical for long distances",
    "More complex connectors",
];

static SERIAL_PROS: [&str; 5] = [
    "Fewer wires (cheaper)",
    "Suitable for long distances",
    "Less crosstalk",
    "Simpler cables and connectors",
    "Can achieve very high speeds",
];

static SERIAL_CONS: [&str; 3] = [
    "Slower per wire (one bit at a time)",
    "Requires serialization/deserialization",
    "More complex circuitry",
];

impl SpeedScenario {
    /// Serial transfer time in seconds.
    pub fn time(&self) -> Result<f64> {
        compute_time(self.bits, SERIAL_WIRES, self.bit_rate)
    }
}

/// `17.5 ms` below one second, `4.19 seconds` above.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{:.1} ms", seconds * 1000.0)
    } else {
        format!("{seconds:.2} seconds")
    }
}

/// Prints the bus width table.
pub fn bus_widths(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Common parallel bus widths:")?;
    writeln!(out, "Bits | Application")?;
    writeln!(out, "-----|----------------------------------")?;
    for width in &BUS_WIDTHS {
        writeln!(out, "{:4} | {}", width.bits, width.application)?;
    }
    writeln!(out)?;
    writeln!(out, "Wider bus = more data per clock cycle")?;
    writeln!(out, "But requires more physical wires!")?;
    Ok(())
}

fn checklist(out: &mut impl Write, title: &str, pros: &[&str], cons: &[&str]) -> Result<()> {
    writeln!(out, "{title}:")?;
    writeln!(out, "  Advantages:")?;
    for pro in pros {
        writeln!(out, "    ✓ {pro}")?;
    }
    writeln!(out, "  Disadvantages:")?;
    for con in cons {
        writeln!(out, "    ✗ {con}")?;
    }
    Ok(())
}

/// Prints advantages and disadvantages of both methods.
pub fn trade_offs(out: &mut impl Write) -> Result<()> {
    checklist(out, "Parallel Transmission", &PARALLEL_PROS, &PARALLEL_CONS)?;
    writeln!(out)?;
    checklist(out, "Serial Transmission", &SERIAL_PROS, &SERIAL_CONS)
}

/// Prints the legacy parallel and modern serial interfaces.
pub fn interfaces(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Parallel Interfaces (legacy):")?;
    for i in &PARALLEL_INTERFACES {
        writeln!(out, "  • {:20} {:12} - {}", i.name, i.rate, i.usage)?;
    }
    writeln!(out)?;
    writeln!(out, "Serial Interfaces (modern):")?;
    for i in &SERIAL_INTERFACES {
        writeln!(out, "  • {:20} {:15} - {}", i.name, i.rate, i.usage)?;
    }
    Ok(())
}

/// Prints why serial links replaced parallel ones.
pub fn why_serial_won(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Historical trend: Parallel → Serial")?;
    writeln!(out)?;
    writeln!(out, "Reasons:")?;
    writeln!(out, "  1. Clock Skew: At high speeds, parallel signals")?;
    writeln!(out, "     arrive at different times (skew)")?;
    writeln!(out)?;
    writeln!(out, "  2. Cost: Fewer wires = cheaper cables")?;
    writeln!(out)?;
    writeln!(out, "  3. Technology: Modern serial can be FASTER")?;
    writeln!(out, "     - USB 3.0: 5 Gbps")?;
    writeln!(out, "     - Old parallel port: 2 Mbps")?;
    writeln!(out, "     Serial is 2500x faster!")?;
    writeln!(out)?;
    writeln!(out, "  4. Distance: Serial works over longer cables")?;
    writeln!(out)?;
    writeln!(out, "  5. Scalability: Easier to increase serial speed")?;
    writeln!(out, "     than add more parallel wires")?;
    Ok(())
}

/// Prints the time each speed scenario takes.
pub fn speed_scenarios(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Transmission time comparison:")?;
    for scenario in &SPEED_SCENARIOS {
        writeln!(out)?;
        writeln!(out, "{}", scenario.description)?;
        writeln!(out, "  Time: {}", format_duration(scenario.time()?))?;
    }
    Ok(())
}
