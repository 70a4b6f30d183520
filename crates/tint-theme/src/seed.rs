//! Seed state: the handful of user choices everything else derives from.

use tint_color::Color;

use crate::palette::{derived_background, derived_secondary};

/// An optional seed color.
///
/// `Derived` is a decision, not a gap: it tells the pipeline to compute the
/// color from primary every time, so it keeps tracking primary. An
/// `Explicit` color stays put when primary changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedColor {
    Explicit(Color),
    #[default]
    Derived,
}

impl SeedColor {
    /// The explicit color, if any.
    #[must_use]
    pub const fn explicit(self) -> Option<Color> {
        match self {
            Self::Explicit(c) => Some(c),
            Self::Derived => None,
        }
    }

    /// Whether this seed is computed from primary.
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Derived)
    }

    /// The explicit color, or the derived one computed by `derive`.
    pub fn resolve(self, derive: impl FnOnce() -> Color) -> Color {
        match self {
            Self::Explicit(c) => c,
            Self::Derived => derive(),
        }
    }
}

impl From<Color> for SeedColor {
    fn from(color: Color) -> Self {
        Self::Explicit(color)
    }
}

impl From<Option<Color>> for SeedColor {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Self::Derived, Self::Explicit)
    }
}

/// Everything the user chose. Owned by the
/// [`ThemeController`](crate::ThemeController); the pipeline only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedState {
    pub primary: Color,
    pub secondary: SeedColor,
    pub background: SeedColor,
    pub is_dark: bool,
}

impl SeedState {
    /// Light-mode seed with secondary and background derived from `primary`.
    #[must_use]
    pub const fn new(primary: Color) -> Self {
        Self {
            primary,
            secondary: SeedColor::Derived,
            background: SeedColor::Derived,
            is_dark: false,
        }
    }

    #[must_use]
    pub fn with_secondary(self, secondary: impl Into<SeedColor>) -> Self {
        Self {
            secondary: secondary.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_background(self, background: impl Into<SeedColor>) -> Self {
        Self {
            background: background.into(),
            ..self
        }
    }

    #[must_use]
    pub const fn with_dark(self, is_dark: bool) -> Self {
        Self { is_dark, ..self }
    }

    /// The secondary color the pipeline will use.
    #[must_use]
    pub fn secondary_color(&self) -> Color {
        self.secondary.resolve(|| derived_secondary(self.primary))
    }

    /// The background color the pipeline will use.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background
            .resolve(|| derived_background(self.primary, self.is_dark))
    }
}

impl Default for SeedState {
    /// `#2020AA`, light mode, secondary and background derived.
    fn default() -> Self {
        Self::new(Color::rgb8(0x20, 0x20, 0xAA))
    }
}
