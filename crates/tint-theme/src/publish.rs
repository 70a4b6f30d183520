//! Publishing: pushing a derived palette to whatever renders it.
//!
//! A [`StyleTarget`] is anything that accepts named color properties: a
//! document root, a terminal swatch printer, or the in-memory
//! [`StyleSheet`] used by tests and the CLI. [`LivePublisher`] writes every
//! token as a `--name` property and keeps a stylesheet-like preview of the
//! last palette it saw.

use std::fmt::Write as _;

use tint_color::Color;
use tracing::trace;

use crate::palette::Palette;
use crate::token::Token;

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// A sink for named style properties.
pub trait StyleTarget {
    /// Set (or overwrite) one property. `name` carries the `--` prefix.
    fn set_property(&mut self, name: &str, color: Color);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_property(&mut self, name: &str, color: Color) {
        (**self).set_property(name, color);
    }
}

/// Ordered in-memory property map. Overwriting keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    props: Vec<(String, Color)>,
}

impl StyleSheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { props: Vec::new() }
    }

    /// The color currently set for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, c)| c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.props.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

impl StyleTarget for StyleSheet {
    fn set_property(&mut self, name: &str, color: Color) {
        if let Some(slot) = self.props.iter_mut().find(|(n, _)| n == name) {
            slot.1 = color;
        } else {
            self.props.push((name.to_owned(), color));
        }
    }
}

// ---------------------------------------------------------------------------
// Publishers
// ---------------------------------------------------------------------------

/// Receives every freshly derived palette.
pub trait Publish {
    fn publish(&mut self, palette: &Palette);
}

/// Plain closures are publishers, which keeps tests and one-off hooks light.
impl<F: FnMut(&Palette)> Publish for F {
    fn publish(&mut self, palette: &Palette) {
        self(palette);
    }
}

/// Writes each token to a [`StyleTarget`] and records a text preview.
#[derive(Debug, Clone, Default)]
pub struct LivePublisher<T> {
    target: T,
    preview: String,
    generation: u64,
}

impl<T: StyleTarget> LivePublisher<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            preview: String::new(),
            generation: 0,
        }
    }

    pub const fn target(&self) -> &T {
        &self.target
    }

    pub const fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Preview text of the last published palette (empty before the first).
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Number of palettes published so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: StyleTarget> Publish for LivePublisher<T> {
    fn publish(&mut self, palette: &Palette) {
        for (token, color) in palette.iter() {
            self.target.set_property(&token.property(), color);
        }
        self.preview = preview(palette);
        self.generation += 1;
        trace!(generation = self.generation, tokens = palette.len(), "published palette");
    }
}

/// Render the palette as a `:root { ... }` stylesheet block, one property
/// per line in token order.
#[must_use]
pub fn preview(palette: &Palette) -> String {
    let mut out = String::with_capacity(Token::COUNT * 40);
    out.push_str(":root {\n");
    for (token, color) in palette.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  {}: {};", token.property(), color.to_hex());
    }
    out.push('}');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
