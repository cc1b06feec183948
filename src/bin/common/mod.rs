//! Setup and output shared by the table programs.

use std::fmt;
use std::io::{self, ErrorKind, Write};

use simple_logger::SimpleLogger;

/// Renders a table and prints it on stdout.
///
/// Logs go to stderr at `Warn` unless `RUST_LOG` says otherwise.
pub fn run<F>(name: &str, render: F) -> io::Result<()>
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .ok();

    let table = hdl_luts::render_to_string(render);
    log::info!("{name} rendered, {} bytes", table.len());

    write_table(&mut io::stdout().lock(), &table)
}

/// Writes the whole table. A closed pipe ends the program quietly.
fn write_table(out: &mut impl Write, table: &str) -> io::Result<()> {
    match out.write_all(table.as_bytes()).and_then(|_| out.flush()) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early");
            Ok(())
        }
        result => result,
    }
}
