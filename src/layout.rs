//! Table layout.
//!
//! Every value is written as a literal followed by `", "`. Grouped tables
//! start each group, the first one included, with a newline and the line
//! prefix.

use core::fmt::{self, Write};

use crate::literal::HexLiteral;

/// How the entries of a table are split into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Values per line, `None` for a single line.
    pub per_line: Option<usize>,
    /// Written after the newline that opens each group.
    pub line_prefix: &'static str,
    pub trailing_newline: bool,
}

impl TableLayout {
    /// Everything on one line, nothing after the last entry.
    pub const fn single_line() -> Self {
        Self {
            per_line: None,
            line_prefix: "",
            trailing_newline: false,
        }
    }

    /// `per_line` entries per line, ended by a final newline.
    pub const fn grouped(per_line: usize, line_prefix: &'static str) -> Self {
        Self {
            per_line: Some(per_line),
            line_prefix,
            trailing_newline: true,
        }
    }

    /// Writes every value as `literal` followed by `", "`.
    pub fn write_table<I>(
        &self,
        out: &mut impl Write,
        literal: HexLiteral,
        values: I,
    ) -> fmt::Result
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        for (i, value) in values.into_iter().enumerate() {
            if let Some(n) = self.per_line {
                if n > 0 && i % n == 0 {
                    out.write_char('\n')?;
                    out.write_str(self.line_prefix)?;
                }
            }
            literal.write(out, value.into())?;
            out.write_str(", ")?;
        }

        if self.trailing_newline {
            out.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BYTE: HexLiteral = HexLiteral::new(8, 2);

    #[test]
    fn single_line() {
        let mut s = String::new();
        TableLayout::single_line()
            .write_table(&mut s, BYTE, [1u8, 2, 255])
            .unwrap();
        assert_eq!(s, "8'h01, 8'h02, 8'hFF, ");
    }

    #[test]
    fn grouped_opens_every_line() {
        let mut s = String::new();
        TableLayout::grouped(2, "\t")
            .write_table(&mut s, BYTE, [1u8, 2, 3])
            .unwrap();
        assert_eq!(s, "\n\t8'h01, 8'h02, \n\t8'h03, \n");
    }

    #[test]
    fn empty_table() {
        let mut s = String::new();
        TableLayout::grouped(8, "\t")
            .write_table(&mut s, BYTE, core::iter::empty::<u8>())
            .unwrap();
        assert_eq!(s, "\n");
    }
}
