//! Numeric formatting shared by every renderer.
//!
//! Addresses, sizes, and timing values appear in several artifacts at once.
//! Routing them through these helpers keeps the byte representation
//! identical across outputs.

/// Format a 32-bit value as exactly eight lowercase zero-padded hex digits.
pub fn hex8(value: u32) -> String {
    format!("{value:08x}")
}

/// Format a nanosecond quantity with exactly four decimal digits, rounded.
pub fn ns4(value: f64) -> String {
    format!("{value:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex8_zero_pads() {
        assert_eq!(hex8(0), "00000000");
        assert_eq!(hex8(0x20_0000), "00200000");
        assert_eq!(hex8(0xabcd), "0000abcd");
    }

    #[test]
    fn hex8_full_width() {
        assert_eq!(hex8(u32::MAX), "ffffffff");
        assert_eq!(hex8(0x8000_0000), "80000000");
    }

    #[test]
    fn hex8_is_lowercase() {
        assert_eq!(hex8(0xFFFF_FFE0), "ffffffe0");
    }

    #[test]
    fn ns4_four_decimals() {
        assert_eq!(ns4(1_000_000_000.0 / 27_000_000.0), "37.0370");
        assert_eq!(ns4(1_000_000_000.0 / 27_000_000.0 / 2.0), "18.5185");
        assert_eq!(ns4(0.0), "0.0000");
        assert_eq!(ns4(8.0), "8.0000");
    }

    #[test]
    fn ns4_rounds() {
        assert_eq!(ns4(1.23456), "1.2346");
        assert_eq!(ns4(1.23454), "1.2345");
    }
}
