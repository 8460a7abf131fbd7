//! Transmission time of serial and parallel links.
//!
//! The parallel model moves one fixed 8-bit unit per time slot: with more
//! than one wire the bit count is ignored and a single transfer takes one bit
//! time. Callers comparing whole payloads multiply by the number of bytes.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::{
    common::*,
    error::{Error, Result},
};

/// One transfer to be timed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionRequest {
    /// Bits in the transfer. Ignored for parallel links.
    pub bit_count: u64,
    /// 1 for serial, lane count for parallel
    pub wire_count: u32,
    /// Bits per second per conductor
    pub bit_rate: f64,
}

/// Outcome of [`TransmissionRequest::compute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionResult {
    /// Duration of the transfer in seconds
    pub total_time_seconds: f64,
}

impl TransmissionRequest {
    /// Creates a new request.
    pub fn new(bit_count: u64, wire_count: u32, bit_rate: f64) -> Self {
        Self {
            bit_count,
            wire_count,
            bit_rate,
        }
    }

    /// Times the transfer, see [`compute_time`].
    pub fn compute(&self) -> Result<TransmissionResult> {
        compute_time(self.bit_count, self.wire_count, self.bit_rate)
            .map(|total_time_seconds| TransmissionResult { total_time_seconds })
    }
}

/// Returns the transmission time in seconds.
///
/// Serial links send `bit_count` bits one after another. Parallel links send
/// one bit per wire in a single bit time, so `bit_count` should be the
/// per-transfer width (8) rather than the payload size.
pub fn compute_time(bit_count: u64, wire_count: u32, bit_rate: f64) -> Result<f64> {
    if !bit_rate.is_finite() || bit_rate <= 0.0 {
        return Err(Error::InvalidRate { rate: bit_rate });
    }
    if wire_count == 0 {
        return Err(Error::InvalidWireCount);
    }

    // Subnormal rates pass the check above but have no finite bit time
    let time_per_bit = 1.0 / bit_rate;
    if !time_per_bit.is_finite() {
        return Err(Error::InvalidRate { rate: bit_rate });
    }

    let total_time = if wire_count == SERIAL_WIRES {
        bit_count as f64 * time_per_bit
    } else {
        time_per_bit
    };
    if !total_time.is_finite() {
        return Err(Error::DurationOverflow {
            bit_count,
            rate: bit_rate,
        });
    }

    trace!(bit_count, wire_count, bit_rate, total_time, "Transmission time");
    Ok(total_time)
}

/// Serial against 8-wire parallel for the same payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Payload size in bytes
    pub data_bytes: u64,
    /// Payload size in bits
    pub total_bits: u64,
    /// Bits per second per conductor
    pub bit_rate: f64,
    /// Wires used by the serial link
    pub serial_wires: u32,
    /// Wires used by the parallel link
    pub parallel_wires: u32,
    /// Serial transfer time in seconds
    pub serial_time: f64,
    /// Parallel transfer time in seconds
    pub parallel_time: f64,
    /// Bits moved per serial time slot
    pub serial_bits_per_transfer: u64,
    /// Bits moved per parallel time slot
    pub parallel_bits_per_transfer: u64,
    /// `serial_time / parallel_time`
    pub speedup: f64,
    /// How many times more wires parallel needs
    pub wire_cost: u32,
}

/// Compares sending `data_bytes` serially and over 8 parallel wires.
///
/// The speedup is always 8.0 for a non-empty payload. Payloads whose bit
/// count does not fit in a `u64` are rejected.
#[instrument]
pub fn compare_serial_vs_parallel(data_bytes: u64, bit_rate: f64) -> Result<Comparison> {
    let total_bits = data_bytes
        .checked_mul(BITS_PER_BYTE)
        .ok_or(Error::PayloadTooLarge { data_bytes })?;

    let serial_time = compute_time(total_bits, SERIAL_WIRES, bit_rate)?;
    let parallel_time =
        compute_time(BITS_PER_BYTE, PARALLEL_WIRES, bit_rate)? * data_bytes as f64;

    let speedup = serial_time / parallel_time;
    debug!(serial_time, parallel_time, speedup, "Comparison computed");

    Ok(Comparison {
        data_bytes,
        total_bits,
        bit_rate,
        serial_wires: SERIAL_WIRES,
        parallel_wires: PARALLEL_WIRES,
        serial_time,
        parallel_time,
        serial_bits_per_transfer: 1,
        parallel_bits_per_transfer: BITS_PER_BYTE,
        speedup,
        wire_cost: PARALLEL_WIRES / SERIAL_WIRES,
    })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Transmitting {} bytes ({} bits) at {} bps:",
            self.data_bytes,
            self.total_bits,
            format_bit_rate(self.bit_rate)
        )?;
        writeln!(f)?;

        writeln!(f, "Serial Transmission:")?;
        writeln!(f, "  Wires:         {}", self.serial_wires)?;
        writeln!(f, "  Time:          {:.3} ms", self.serial_time * 1000.0)?;
        writeln!(f, "  Bits/transfer: {}", self.serial_bits_per_transfer)?;
        writeln!(f)?;

        writeln!(f, "Parallel Transmission:")?;
        writeln!(f, "  Wires:         {}", self.parallel_wires)?;
        writeln!(f, "  Time:          {:.3} ms", self.parallel_time * 1000.0)?;
        writeln!(f, "  Bits/transfer: {}", self.parallel_bits_per_transfer)?;
        writeln!(f)?;

        writeln!(f, "Speedup: {:.1}x faster", self.speedup)?;
        writeln!(f, "Cost: {}x more wires", self.wire_cost)
    }
}

/// Formats a bit rate with `,` between thousands, e.g. `1,000,000`.
pub fn format_bit_rate(bit_rate: f64) -> String {
    let whole = format!("{:.0}", bit_rate.trunc().abs());

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if bit_rate.is_sign_negative() {
        grouped.insert(0, '-');
    }

    let fraction = bit_rate.fract().abs();
    if fraction > 0.0 {
        // "0.25" -> ".25"
        let digits = fraction.to_string();
        grouped.push_str(digits.trim_start_matches('0'));
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test_log::test]
    fn test_serial_byte() {
        let time = compute_time(8, 1, 1_000_000.0).unwrap();
        assert_close(time, 8e-6);
    }

    #[test_log::test]
    fn test_parallel_byte() {
        let time = compute_time(8, 8, 1_000_000.0).unwrap();
        assert_close(time, 1e-6);
    }

    #[test_log::test]
    fn test_parallel_ignores_bit_count() {
        let one = compute_time(1, 8, 1_000_000.0).unwrap();
        let many = compute_time(1_000_000, 8, 1_000_000.0).unwrap();
        assert_eq!(one, many);

        // Any width above one wire takes a single bit time
        let wide = compute_time(64, 64, 1_000_000.0).unwrap();
        assert_eq!(one, wide);
    }

    #[test_log::test]
    fn test_zero_bits_serial() {
        assert_eq!(compute_time(0, 1, 1_000_000.0).unwrap(), 0.0);
    }

    #[test_log::test]
    fn test_invalid_rates() {
        for rate in [0.0, -1.0, -0.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(compute_time(8, 1, rate), Err(Error::InvalidRate { .. })),
                "rate {rate} should be rejected"
            );
            assert!(matches!(
                compute_time(8, 8, rate),
                Err(Error::InvalidRate { .. })
            ));
        }
    }

    #[test_log::test]
    fn test_subnormal_rate() {
        assert!(matches!(
            compute_time(8, 1, 1e-310),
            Err(Error::InvalidRate { .. })
        ));
        assert!(matches!(
            compute_time(8, 8, 1e-310),
            Err(Error::InvalidRate { .. })
        ));
        assert!(matches!(
            compare_serial_vs_parallel(1, 1e-310),
            Err(Error::InvalidRate { .. })
        ));
    }

    #[test_log::test]
    fn test_smallest_normal_rate() {
        // One bit time is finite, eight of them are not
        let bit_time = compute_time(8, 8, f64::MIN_POSITIVE).unwrap();
        assert!(bit_time.is_finite());

        assert!(matches!(
            compute_time(8, 1, f64::MIN_POSITIVE),
            Err(Error::DurationOverflow { bit_count: 8, .. })
        ));
        assert!(matches!(
            compare_serial_vs_parallel(1, f64::MIN_POSITIVE),
            Err(Error::DurationOverflow { .. })
        ));
    }

    #[test_log::test]
    fn test_tiny_rate_keeps_speedup() {
        let comparison = compare_serial_vs_parallel(1, 1e-300).unwrap();
        assert!(comparison.serial_time.is_finite());
        assert_eq!(comparison.speedup, 8.0);
    }

    #[test_log::test]
    fn test_largest_payload() {
        let max_bytes = u64::MAX / BITS_PER_BYTE;

        let comparison = compare_serial_vs_parallel(max_bytes, 1_000_000.0).unwrap();
        assert_eq!(comparison.total_bits, max_bytes * BITS_PER_BYTE);
        assert_eq!(comparison.speedup, 8.0);

        assert!(matches!(
            compare_serial_vs_parallel(max_bytes + 1, 1_000_000.0),
            Err(Error::PayloadTooLarge { data_bytes }) if data_bytes == max_bytes + 1
        ));
        assert!(matches!(
            compare_serial_vs_parallel(u64::MAX / 4, 1_000_000.0),
            Err(Error::PayloadTooLarge { .. })
        ));
    }

    #[test_log::test]
    fn test_zero_wires() {
        assert!(matches!(
            compute_time(8, 0, 1_000_000.0),
            Err(Error::InvalidWireCount)
        ));
    }

    #[test_log::test]
    fn test_request_compute() {
        let request = TransmissionRequest::new(8, 1, 1_000_000.0);
        assert_close(request.compute().unwrap().total_time_seconds, 8e-6);

        let request = TransmissionRequest::new(8, 8, 1_000_000.0);
        assert_close(request.compute().unwrap().total_time_seconds, 1e-6);

        let request = TransmissionRequest::new(8, 1, 0.0);
        assert!(request.compute().is_err());
    }

    #[test_log::test]
    fn test_compare_one_byte() {
        let comparison = compare_serial_vs_parallel(1, 1_000_000.0).unwrap();

        assert_eq!(comparison.total_bits, 8);
        assert_close(comparison.serial_time, 8e-6);
        assert_close(comparison.parallel_time, 1e-6);
        assert_eq!(comparison.speedup, 8.0);
        assert_eq!(comparison.serial_wires, 1);
        assert_eq!(comparison.parallel_wires, 8);
        assert_eq!(comparison.wire_cost, 8);
    }

    #[test_log::test]
    fn test_compare_hundred_bytes() {
        let comparison = compare_serial_vs_parallel(100, 1_000_000.0).unwrap();

        assert_eq!(comparison.total_bits, 800);
        assert_close(comparison.serial_time, 800e-6);
        assert_close(comparison.parallel_time, 100e-6);
        assert_eq!(comparison.speedup, 8.0);
    }

    #[test_log::test]
    fn test_compare_propagates_invalid_rate() {
        assert!(matches!(
            compare_serial_vs_parallel(100, 0.0),
            Err(Error::InvalidRate { .. })
        ));
    }

    #[test_log::test]
    fn test_comparison_report() {
        let report = compare_serial_vs_parallel(100, 1_000_000.0)
            .unwrap()
            .to_string();

        let expected = "\
Transmitting 100 bytes (800 bits) at 1,000,000 bps:

Serial Transmission:
  Wires:         1
  Time:          0.800 ms
  Bits/transfer: 1

Parallel Transmission:
  Wires:         8
  Time:          0.100 ms
  Bits/transfer: 8

Speedup: 8.0x faster
Cost: 8x more wires
";
        assert_eq!(report, expected);
    }

    #[test_log::test]
    fn test_one_byte_report_times() {
        let report = compare_serial_vs_parallel(1, 1_000_000.0)
            .unwrap()
            .to_string();

        assert!(report.contains("Transmitting 1 bytes (8 bits)"));
        assert!(report.contains("Time:          0.008 ms"));
        assert!(report.contains("Time:          0.001 ms"));
    }

    #[test_log::test]
    fn test_format_bit_rate() {
        assert_eq!(format_bit_rate(0.0), "0");
        assert_eq!(format_bit_rate(999.0), "999");
        assert_eq!(format_bit_rate(1_000.0), "1,000");
        assert_eq!(format_bit_rate(1_000_000.0), "1,000,000");
        assert_eq!(format_bit_rate(5_000_000_000.0), "5,000,000,000");
        assert_eq!(format_bit_rate(1_500.5), "1,500.5");
    }

    proptest! {
        #[test]
        fn prop_serial_time_is_bits_over_rate(bits in 0u64..1_000_000_000, rate in 1.0f64..1e12) {
            let time = compute_time(bits, 1, rate).unwrap();
            let expected = bits as f64 / rate;
            prop_assert!((time - expected).abs() <= expected * 1e-12);
        }

        #[test]
        fn prop_parallel_time_is_one_bit_time(bits in any::<u64>(), wires in 2u32..1024, rate in 1.0f64..1e12) {
            let time = compute_time(bits, wires, rate).unwrap();
            prop_assert_eq!(time, 1.0 / rate);
        }

        #[test]
        fn prop_speedup_is_eight(bytes in 1u64..1_000_000_000, rate in 1.0f64..1e12) {
            let comparison = compare_serial_vs_parallel(bytes, rate).unwrap();
            prop_assert_eq!(comparison.speedup, 8.0);
        }
    }
}
