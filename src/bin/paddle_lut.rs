//! Prints the paddle time-offset table as 33-bit Verilog literals.

mod common;

use hdl_luts::paddle;

fn main() -> std::io::Result<()> {
    common::run("paddle table", |out| paddle::render(out))
}
