//! Palette derivation: the bridge from seed colors to concrete tokens.
//!
//! Every token has exactly one formula, written as a `match` arm in
//! [`Derivation::token`]; the compiler rejects a token without one. Shared
//! intermediates (background, card, sidebar, ...) are computed once up front
//! so the formulas read like the table they implement.
//!
//! | token | formula (`P` = primary, `R(x)` = readable fg on `x`) |
//! |---|---|
//! | `background` | explicit, else `P.with_lightness(dark ? 0.05 : 0.95)` |
//! | `foreground`, `background-foreground` | `R(background)` |
//! | `card` | `background.lighten(dark ? 5 : -5)` |
//! | `popover`, `primary` | `P` |
//! | `secondary` | explicit, else `P.complement()` |
//! | `muted` | `P.desaturate(30)` or `P.with_alpha(0.5)` |
//! | `muted-foreground` | `#AAAAAA` or `#666666`, whichever reads on `background` |
//! | `accent` | `P.saturate(40).lighten(30)` |
//! | `destructive` | `P.complement().darken(20)`, fg `P.complement().lighten(60)` |
//! | `border` / `input` / `ring` | `P.darken(10)` / `P.darken(5)` / `P.lighten(10)` |
//! | `chart-1..4` | `P.spin(72k)`, or `P`, `P.spin(90)`, `P.spin(180)`, `P.spin(270)` |
//! | `chart-5` | `P.saturate(30).lighten(30)` |
//! | `sidebar` | `background.with_lightness(dark ? 0.05 : 0.95)` |
//! | `sidebar-primary` | `P.saturate(20).lighten(10)` |
//! | `sidebar-accent` | `P.saturate(40)` |
//! | `sidebar-border` / `sidebar-ring` | `P.darken(10)` / `P.lighten(10)` |

use std::fmt;
use std::ops::Index;

use tint_color::Color;
use tracing::debug;

use crate::contrast::{ContrastResolver, DEFAULT_CANDIDATES};
use crate::seed::SeedState;
use crate::token::Token;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the low-emphasis `muted` token is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MutedPolicy {
    /// Primary with 30 points less saturation.
    #[default]
    Desaturate,
    /// Primary at 50% alpha.
    Translucent,
}

/// How `chart-1` through `chart-4` are spread around the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartPolicy {
    /// Rotations of 72°, 144°, 216°, 288°.
    #[default]
    EvenSpacing,
    /// Primary itself, then 90°, 180°, 270°.
    QuarterTurns,
}

impl MutedPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Desaturate => "desaturate",
            Self::Translucent => "translucent",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "desaturate" => Some(Self::Desaturate),
            "translucent" => Some(Self::Translucent),
            _ => None,
        }
    }
}

impl ChartPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EvenSpacing => "even",
            Self::QuarterTurns => "quarter",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "even" => Some(Self::EvenSpacing),
            "quarter" => Some(Self::QuarterTurns),
            _ => None,
        }
    }
}

/// Knobs for the formula variants. `Default` is the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeriveOptions {
    pub muted: MutedPolicy,
    pub chart: ChartPolicy,
    pub resolver: ContrastResolver,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One color per [`Token`], in wire order.
///
/// Built only by [`derive`]; there are no setters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Color; Token::COUNT],
}

impl Palette {
    /// The color for `token`.
    #[inline]
    #[must_use]
    pub const fn get(&self, token: Token) -> Color {
        self.colors[token.index()]
    }

    /// The token's value as a style string (`#rrggbb` or `#rrggbbaa`).
    #[must_use]
    pub fn hex(&self, token: Token) -> String {
        self.get(token).to_hex()
    }

    /// `(token, color)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, Color)> + '_ {
        Token::ALL.iter().map(|&t| (t, self.get(t)))
    }

    /// Always [`Token::COUNT`].
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; every palette is complete.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Index<Token> for Palette {
    type Output = Color;

    fn index(&self, token: Token) -> &Color {
        &self.colors[token.index()]
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(t, c)| (t.name(), c.to_hex())))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, color) in self.iter() {
            map.serialize_entry(token.name(), &color.to_hex())?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Secondary used when none is chosen: the complement of primary.
#[must_use]
pub fn derived_secondary(primary: Color) -> Color {
    primary.complement()
}

/// Background used when none is chosen: primary pushed to 5% (dark) or 95%
/// (light) lightness.
#[must_use]
pub fn derived_background(primary: Color, is_dark: bool) -> Color {
    primary.with_lightness(if is_dark { 0.05 } else { 0.95 })
}

/// Derive the full palette with the standard formula table.
#[must_use]
pub fn derive(seed: &SeedState) -> Palette {
    derive_with(seed, &DeriveOptions::default())
}

/// Derive the full palette with explicit formula options.
///
/// Pure and total: the same inputs always give a bit-identical palette.
#[must_use]
pub fn derive_with(seed: &SeedState, options: &DeriveOptions) -> Palette {
    debug!(
        primary = %seed.primary,
        secondary_derived = seed.secondary.is_derived(),
        background_derived = seed.background.is_derived(),
        is_dark = seed.is_dark,
        muted = options.muted.name(),
        chart = options.chart.name(),
        "deriving palette"
    );

    let d = Derivation::new(seed, options);
    Palette {
        colors: Token::ALL.map(|t| d.token(t)),
    }
}

/// Intermediates shared by several formulas.
struct Derivation {
    primary: Color,
    background: Color,
    card: Color,
    secondary: Color,
    accent: Color,
    sidebar: Color,
    sidebar_primary: Color,
    sidebar_accent: Color,
    muted: MutedPolicy,
    chart: ChartPolicy,
    resolver: ContrastResolver,
}

impl Derivation {
    fn new(seed: &SeedState, options: &DeriveOptions) -> Self {
        let p = seed.primary;
        let background = seed.background_color();
        Self {
            primary: p,
            background,
            card: background.lighten(if seed.is_dark { 5.0 } else { -5.0 }),
            secondary: seed.secondary_color(),
            accent: p.saturate(40.0).lighten(30.0),
            sidebar: background.with_lightness(if seed.is_dark { 0.05 } else { 0.95 }),
            sidebar_primary: p.saturate(20.0).lighten(10.0),
            sidebar_accent: p.saturate(40.0),
            muted: options.muted,
            chart: options.chart,
            resolver: options.resolver,
        }
    }

    /// Most readable of white/black on `bg`.
    fn fg(&self, bg: Color) -> Color {
        self.resolver.resolve(bg, &DEFAULT_CANDIDATES)
    }

    /// `chart-n` for n in 1..=4.
    fn chart(&self, n: u8) -> Color {
        let n = f64::from(n);
        match self.chart {
            ChartPolicy::EvenSpacing => self.primary.spin(72.0 * n),
            ChartPolicy::QuarterTurns => self.primary.spin(90.0 * (n - 1.0)),
        }
    }

    fn token(&self, token: Token) -> Color {
        let p = self.primary;
        match token {
            Token::Background => self.background,
            Token::BackgroundForeground | Token::Foreground => self.fg(self.background),
            Token::Card => self.card,
            Token::CardForeground => self.fg(self.card),
            Token::Popover | Token::Primary => p,
            Token::PopoverForeground | Token::PrimaryForeground => self.fg(p),
            Token::Secondary => self.secondary,
            Token::SecondaryForeground => self.fg(self.secondary),
            Token::Muted => match self.muted {
                MutedPolicy::Desaturate => p.desaturate(30.0),
                MutedPolicy::Translucent => p.with_alpha(0.5),
            },
            Token::MutedForeground => self.resolver.resolve(
                self.background,
                &[Color::rgb8(0xAA, 0xAA, 0xAA), Color::rgb8(0x66, 0x66, 0x66)],
            ),
            Token::Accent => self.accent,
            Token::AccentForeground => self.fg(self.accent),
            Token::Destructive => p.complement().darken(20.0),
            Token::DestructiveForeground => p.complement().lighten(60.0),
            Token::Border | Token::SidebarBorder => p.darken(10.0),
            Token::Input => p.darken(5.0),
            Token::Ring | Token::SidebarRing => p.lighten(10.0),
            Token::Chart1 => self.chart(1),
            Token::Chart2 => self.chart(2),
            Token::Chart3 => self.chart(3),
            Token::Chart4 => self.chart(4),
            Token::Chart5 => p.saturate(30.0).lighten(30.0),
            Token::Sidebar => self.sidebar,
            Token::SidebarForeground => self.fg(self.sidebar),
            Token::SidebarPrimary => self.sidebar_primary,
            Token::SidebarPrimaryForeground => self.fg(self.sidebar_primary),
            Token::SidebarAccent => self.sidebar_accent,
            // Resolved like every other foreground, not a fixed lightening
            // of primary, so it stays readable on light primaries.
            Token::SidebarAccentForeground => self.fg(self.sidebar_accent),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
