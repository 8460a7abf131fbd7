/// 1Mbps per conductor, used by the multi-byte comparison
pub static DEFAULT_BIT_RATE: f64 = 1_000_000.0;

/// Wires on the parallel side of every comparison
pub static PARALLEL_WIRES: u32 = 8;

/// Wires on the serial side
pub static SERIAL_WIRES: u32 = 1;

/// Bits in one byte, and in one parallel transfer
pub static BITS_PER_BYTE: u64 = 8;

/// Byte drawn by the diagrams, most significant bit first
pub static DEMO_BYTE: &str = "10110101";

/// Payload of the speed scenarios: 1 MiB
pub static MEBIBYTE_BITS: u64 = 1024 * 1024 * 8;

/// Width of the `=` banners
pub static BANNER_WIDTH: usize = 60;
