//! Sized hexadecimal literals.
//!
//! Verilog writes a sized constant as `<width>'h<digits>`, where the width is
//! counted in bits. The number of printed digits is chosen independently, so
//! a 33-bit literal can be printed with 9 digits.

use core::fmt::{self, Write};

/// Format of a sized hex literal, e.g. `33'h0005C136C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLiteral {
    /// Bit width written in front of the `'h` tag.
    pub width: u32,
    /// Number of hex digits, zero-padded.
    pub digits: usize,
}

impl HexLiteral {
    /// Literal tagged with `width` bits and printed with `digits` hex digits.
    pub const fn new(width: u32, digits: usize) -> Self {
        Self { width, digits }
    }

    /// Largest value representable in `width` bits.
    #[inline]
    pub const fn max_value(&self) -> u64 {
        if self.width >= u64::BITS {
            u64::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Returns `true` if `value` can be written without exceeding `width` bits.
    #[inline]
    pub const fn fits(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Writes `value` as `<width>'h<digits>` with uppercase digits.
    pub fn write(&self, out: &mut impl Write, value: u64) -> fmt::Result {
        debug_assert!(
            self.fits(value),
            "{value:#X} does not fit in {} bits",
            self.width
        );

        write!(out, "{}'h{:0digits$X}", self.width, value, digits = self.digits)
    }
}
