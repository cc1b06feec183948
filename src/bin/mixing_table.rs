//! Prints the mixing ratio table as 16-bit Verilog literals.

mod common;

use hdl_luts::mixing;

fn main() -> std::io::Result<()> {
    common::run("mixing table", |out| mixing::render(out))
}
