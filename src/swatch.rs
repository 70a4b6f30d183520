// SPDX-License-Identifier: MIT
//
// Terminal swatches: a style target that paints each token as a block of
// 24-bit background color followed by its property name and value.
//
// Properties are collected through `StyleTarget` and rendered on demand to
// any `impl Write`, so the target itself never does I/O. Terminals have no
// alpha, so translucent colors are painted opaque; the printed value keeps
// the alpha digits.

use std::io::{self, Write};

use tint_color::Color;
use tint_theme::{StyleSheet, StyleTarget};

/// Width of the painted block, in cells.
const BLOCK: &str = "      ";

/// Foreground truecolor SGR (`38;2;R;G;B`).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Background truecolor SGR (`48;2;R;G;B`).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Collects published properties and paints them as terminal swatches.
#[derive(Debug, Clone, Default)]
pub struct SwatchBoard {
    sheet: StyleSheet,
}

impl SwatchBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sheet: StyleSheet::new(),
        }
    }

    #[cfg(test)]
    pub const fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Paint one line per property, in publish order.
    pub fn render(&self, w: &mut impl Write) -> io::Result<()> {
        let width = self.sheet.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        for (name, color) in self.sheet.iter() {
            bg(w, color)?;
            w.write_all(BLOCK.as_bytes())?;
            reset(w)?;
            write!(w, " {name:<width$}  ")?;
            fg(w, color)?;
            write!(w, "{}", color.to_hex())?;
            reset(w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

impl StyleTarget for SwatchBoard {
    fn set_property(&mut self, name: &str, color: Color) {
        self.sheet.set_property(name, color);
    }
}
