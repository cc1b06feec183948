//! Mixing ratio table.
//!
//! Maps a level `v` in `0..=V_MAX` to a Q15 gain. The curve rises faster
//! than linear at the bottom and reaches full scale (`0x7FFF`) at `V_MAX`;
//! [`R_MAX`] and [`R`] control how strongly it bends.

use core::fmt;

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::layout::TableLayout;
use crate::literal::HexLiteral;

/// Ratio offset, sets how far the curve bends away from linear.
pub const R_MAX: f64 = 30.0;
/// Ratio added per level step.
pub const R: f64 = 1.0;
/// Level that maps to full scale.
pub const V_MAX: u8 = 30;

/// Levels `0..=V_MAX`.
pub const NUM_ENTRIES: usize = V_MAX as usize + 1;

const FULL_SCALE: f64 = 0x7fff as f64;

/// 16-bit literal printed with 4 digits.
pub const LITERAL: HexLiteral = HexLiteral::new(16, 4);
/// All entries on one line, no trailing newline.
pub const LAYOUT: TableLayout = TableLayout::single_line();

/// Gain for level `v` out of `v_max`, floored to an integer.
///
/// The expression is evaluated strictly left to right. Regrouping it (for
/// instance computing `v / v_max` first) moves some entries by one LSB.
///
/// # Panics
///
/// In debug builds, if `v_max` is 0 or `v` is above `v_max`. Release builds
/// saturate the result to `u16::MAX` instead.
#[inline]
pub fn mixing_table_entry(v: u8, v_max: u8) -> u16 {
    debug_assert!(v_max > 0 && v <= v_max, "level {v} out of range 0..={v_max}");

    let v = v as f64;
    let v_max = v_max as f64;
    let gain = FULL_SCALE * v / v_max * (R_MAX + R * v_max) / (R_MAX + R * v);
    debug_assert!(gain.is_finite());

    gain.floor() as u16
}

/// The full table for levels `0..=V_MAX`.
pub fn mixing_table() -> [u16; NUM_ENTRIES] {
    let table = core::array::from_fn(|v| mixing_table_entry(v as u8, V_MAX));
    log::debug!("mixing table: {} entries, r_max={}, r={}", NUM_ENTRIES, R_MAX, R);
    table
}

/// Writes the table exactly as the `mixing-table` program prints it.
pub fn render(out: &mut impl fmt::Write) -> fmt::Result {
    LAYOUT.write_table(out, LITERAL, mixing_table())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(mixing_table_entry(0, V_MAX), 0);
        assert_eq!(mixing_table_entry(V_MAX, V_MAX), 0x7fff);
    }

    #[test]
    fn evaluation_order() {
        // (0x7fff * 5 / 30) * 60 / 35 lands on 9362.0 exactly only in this order.
        assert_eq!(mixing_table_entry(5, V_MAX), 9362);
    }

    #[test]
    fn other_maximum() {
        assert_eq!(mixing_table_entry(10, 10), 0x7fff);
        assert_eq!(mixing_table_entry(0, 10), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn zero_maximum_is_rejected() {
        mixing_table_entry(0, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn level_above_maximum_is_rejected() {
        mixing_table_entry(200, 10);
    }
}
