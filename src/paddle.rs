//! Paddle time-offset table.
//!
//! Entry `x` is the time offset for step `x` of the paddle, a linear ramp
//! starting at [`BASE_TIME`] and advancing by [`T_PER_KO`] per step. Values
//! are in ticks of 100 ns and are printed as 33-bit literals.

use core::fmt;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::layout::TableLayout;
use crate::literal::HexLiteral;

/// Offset of entry 0, in ticks.
pub const BASE_TIME: f64 = 6034284.0;

/// Ticks added per table step.
pub const T_PER_KO: f64 = 4532214.0;

/// Number of entries in the table.
pub const TABLE_SIZE: usize = 1024;

/// One tick is 100 ns.
pub const NS_PER_TICK: u64 = 100;

/// 33-bit literal printed with 9 digits.
pub const LITERAL: HexLiteral = HexLiteral::new(33, 9);
/// 8 entries per line, each line opened by a tab.
pub const LAYOUT: TableLayout = TableLayout::grouped(8, "\t");

static TIME_OFFSETS: Once<[u64; TABLE_SIZE]> = Once::new();

/// Time offset of entry `x` in ticks, rounded half away from zero.
#[inline]
pub fn time_offset(x: u16) -> u64 {
    let value = BASE_TIME + (x as f64) * T_PER_KO;
    debug_assert!(value.is_finite() && value >= 0.0);

    value.round() as u64
}

/// The whole table. Computed on first use and cached.
pub fn time_offsets() -> &'static [u64; TABLE_SIZE] {
    TIME_OFFSETS.call_once(|| {
        let table: [u64; TABLE_SIZE] = core::array::from_fn(|x| time_offset(x as u16));
        log::debug!(
            "paddle table: {} entries, {} .. {} ticks",
            TABLE_SIZE,
            table[0],
            table[TABLE_SIZE - 1]
        );
        table
    })
}

/// Converts a table entry to nanoseconds.
#[inline]
pub fn ticks_to_ns(ticks: u64) -> u64 {
    ticks * NS_PER_TICK
}

/// Writes the table exactly as the `paddle-lut` program prints it.
pub fn render(out: &mut impl fmt::Write) -> fmt::Result {
    LAYOUT.write_table(out, LITERAL, time_offsets().iter().copied())
}
