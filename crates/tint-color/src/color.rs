// SPDX-License-Identifier: MIT
//
// tint color system: sRGB storage with HSL transforms.
//
// A `Color` is four floats: red, green, blue and alpha, each in [0, 1].
// Transforms work in HSL because "a bit lighter" and "rotate the hue" are
// what a theme author means, and HSL states them directly:
//
//   Color (sRGB) → Hsl → edit one component → Hsl → Color (sRGB)
//
// Because each step re-derives HSL from the current RGB value, chains are
// order-sensitive (`saturate` then `lighten` is not `lighten` then
// `saturate`) and achromatic colors have no hue to rotate.
//
// Equality is defined on the 8-bit RGBA rendering, which is what every
// consumer ultimately sees.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseColorError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with alpha transparency.
///
/// All transforms take `self` by value and return a new color; `Color` is
/// `Copy`, so the receiver stays usable and nothing is shared.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let primary = Color::hex("#2020AA").unwrap();
///
/// let accent = primary.saturate(40.0).lighten(30.0);
/// let danger = primary.complement().darken(20.0);
/// let page = primary.with_lightness(0.95);
///
/// assert_eq!(primary.to_hex(), "#2020aa");
/// assert_ne!(accent, primary);
/// assert_ne!(danger, page);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

/// A color in HSL space.
///
/// - `h`: hue angle in degrees, `[0, 360)`
/// - `s`: saturation, `[0, 1]`
/// - `l`: lightness, `[0, 1]`
/// - `alpha`: opacity, `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from sRGB channels in `[0, 1]` (clamped).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB channels and alpha, all in `[0, 1]` (clamped).
    #[must_use]
    pub fn srgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            alpha: bound_alpha(alpha),
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit channels including alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            alpha: f64::from(a) / 255.0,
        }
    }

    /// Create an opaque color from HSL: hue in degrees, saturation and
    /// lightness in `[0, 1]`.
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Create a color from HSL plus alpha.
    #[must_use]
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self::from_hsl(Hsl { h, s, l, alpha })
    }

    /// Create a color from an [`Hsl`] record. Components are clamped; the
    /// hue wraps modulo 360.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, unit(hsl.s), unit(hsl.l));
        Self {
            r,
            g,
            b,
            alpha: bound_alpha(hsl.alpha),
        }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, with or without the
    /// `#`, in either case. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the input is empty, contains a non-hex
    /// digit, or has a digit count other than 3, 4, 6 or 8.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, alpha: 1.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, alpha: 1.0 };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, alpha: 0.0 };

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Red channel in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn red(self) -> f64 {
        self.r
    }

    /// Green channel in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn green(self) -> f64 {
        self.g
    }

    /// Blue channel in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.b
    }

    /// Alpha in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Whether this color renders fully opaque at 8-bit precision.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        to_u8(self.alpha) == u8::MAX
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha (clamped to `[0, 1]`; NaN means opaque).
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: bound_alpha(alpha),
            ..self
        }
    }

    // ─── HSL Transforms ──────────────────────────────────────────────────
    //
    // Amounts are percentages, as a theme author writes them: `lighten(10)`
    // adds 0.10 to HSL lightness. Results clamp at the ends of the range.

    /// Raise HSL lightness by `amount` percent.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: unit(hsl.l + percent(amount)),
            ..hsl
        })
    }

    /// Lower HSL lightness by `amount` percent.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: unit(hsl.l - percent(amount)),
            ..hsl
        })
    }

    /// Raise HSL saturation by `amount` percent.
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            s: unit(hsl.s + percent(amount)),
            ..hsl
        })
    }

    /// Lower HSL saturation by `amount` percent.
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            s: unit(hsl.s - percent(amount)),
            ..hsl
        })
    }

    /// Rotate the hue by `degrees` (signed, wraps modulo 360).
    ///
    /// Non-finite rotations leave the color unchanged.
    #[must_use]
    pub fn spin(self, degrees: f64) -> Self {
        if !degrees.is_finite() {
            return self;
        }
        self.map_hsl(|hsl| Hsl {
            h: normalize_hue(hsl.h + degrees),
            ..hsl
        })
    }

    /// The complementary color, `spin(180)`.
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.spin(180.0)
    }

    /// Replace HSL lightness with an absolute `ratio` in `[0, 1]`, keeping
    /// hue, saturation and alpha.
    #[must_use]
    pub fn with_lightness(self, ratio: f64) -> Self {
        self.map_hsl(|hsl| Hsl {
            l: unit(ratio),
            ..hsl
        })
    }

    fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl()))
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        Hsl {
            h,
            s,
            l,
            alpha: self.alpha,
        }
    }

    /// sRGB channels in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn to_srgb(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// 8-bit sRGB channels.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// 8-bit sRGBA channels.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, to_u8(self.alpha))
    }

    /// Hex string: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            let (r, g, b) = self.to_rgb8();
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            self.to_hex8()
        }
    }

    /// Hex string that always carries alpha: `#rrggbbaa`.
    #[must_use]
    pub fn to_hex8(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::Color;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Color::hex(&s).map_err(de::Error::custom)
        }
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────

/// Clamp to `[0, 1]`, mapping NaN to 0.
#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamp alpha to `[0, 1]`, mapping NaN to fully opaque.
#[inline]
fn bound_alpha(a: f64) -> f64 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

/// A percentage amount as a `[-1, 1]` delta. NaN is no change.
#[inline]
fn percent(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(-100.0, 100.0) / 100.0
    }
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert sRGB in `[0, 1]` to (hue degrees, saturation, lightness).
///
/// Achromatic inputs report hue 0 and saturation 0.
#[allow(clippy::float_cmp)] // `max` is bit-identical to one of the channels.
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (normalize_hue(h * 60.0), s, l)
}

/// Convert (hue degrees, saturation, lightness) to sRGB in `[0, 1]`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let h = if h.is_finite() { normalize_hue(h) / 360.0 } else { 0.0 };
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);

    (
        unit(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        unit(hue_to_rgb(p, q, h)),
        unit(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    let s = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if let Some(digit) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::Digit {
            input: input.to_string(),
            digit,
        });
    }

    // All ASCII from here on, so byte indexing is safe.
    let bytes = s.as_bytes();
    match bytes.len() {
        // #RGB
        3 => {
            let (r, g, b) = (nibble(bytes[0]), nibble(bytes[1]), nibble(bytes[2]));
            Ok(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let (r, g, b) = (nibble(bytes[0]), nibble(bytes[1]), nibble(bytes[2]));
            let a = nibble(bytes[3]);
            Ok(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => Ok(Color::rgb8(
            byte(&bytes[0..2]),
            byte(&bytes[2..4]),
            byte(&bytes[4..6]),
        )),
        // #RRGGBBAA
        8 => Ok(Color::rgba8(
            byte(&bytes[0..2]),
            byte(&bytes[2..4]),
            byte(&bytes[4..6]),
            byte(&bytes[6..8]),
        )),
        len => Err(ParseColorError::Length {
            input: input.to_string(),
            len,
        }),
    }
}

/// Value of an ASCII hex digit. Callers have already validated the input.
#[inline]
const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn byte(pair: &[u8]) -> u8 {
    nibble(pair[0]) << 4 | nibble(pair[1])
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn hue_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        if d > 180.0 { 360.0 - d } else { d }
    }

    fn primary() -> Color {
        Color::hex("#2020AA").unwrap()
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_short_with_alpha() {
        let color = Color::hex("#f808").unwrap();
        assert_eq!(color.to_rgba8(), (255, 136, 0, 136));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#ff000080").unwrap();
        assert!(approx_eq(color.alpha(), 128.0 / 255.0, 1e-9));
        assert!(!color.is_opaque());
    }

    #[test]
    fn hex_parsing_no_hash_and_whitespace() {
        let color = Color::hex("  00FF00 ").unwrap();
        assert_eq!(color.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn hex_parsing_errors() {
        assert_eq!(Color::hex(""), Err(ParseColorError::Empty));
        assert_eq!(Color::hex("#"), Err(ParseColorError::Empty));
        assert_eq!(
            Color::hex("#12345"),
            Err(ParseColorError::Length {
                input: "#12345".into(),
                len: 5
            })
        );
        assert_eq!(
            Color::hex("xyz"),
            Err(ParseColorError::Digit {
                input: "xyz".into(),
                digit: 'x'
            })
        );
        assert!(matches!(
            Color::hex("#ééé"),
            Err(ParseColorError::Digit { digit: 'é', .. })
        ));
    }

    #[test]
    fn from_str_matches_hex() {
        let parsed: Color = "#2020AA".parse().unwrap();
        assert_eq!(parsed, primary());
    }

    #[test]
    fn hex_roundtrip_lowercases() {
        let color = Color::hex("#C86432").unwrap();
        assert_eq!(color.to_hex(), "#c86432");
    }

    // ── Hex Output ───────────────────────────────────────────────────────

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(primary().to_hex(), "#2020aa");
        assert_eq!(primary().to_hex8(), "#2020aaff");
    }

    #[test]
    fn to_hex_keeps_alpha_when_translucent() {
        let half = primary().with_alpha(0.5);
        assert_eq!(half.to_hex(), "#2020aa80");
        assert_eq!(half.to_string(), "#2020aa80");
    }

    // ── HSL Conversions ──────────────────────────────────────────────────

    #[test]
    fn red_in_hsl() {
        let hsl = Color::rgb8(255, 0, 0).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-9));
        assert!(approx_eq(hsl.s, 1.0, 1e-9));
        assert!(approx_eq(hsl.l, 0.5, 1e-9));
    }

    #[test]
    fn primary_in_hsl() {
        let hsl = primary().to_hsl();
        assert!(approx_eq(hsl.h, 240.0, 1e-9), "hue {}", hsl.h);
        assert!(approx_eq(hsl.l, 202.0 / 510.0, 1e-9), "lightness {}", hsl.l);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_rgb8(), (255, 0, 0));
        assert_eq!(Color::hsl(120.0, 1.0, 0.5).to_rgb8(), (0, 255, 0));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5).to_rgb8(), (0, 0, 255));
        assert_eq!(Color::hsl(360.0, 1.0, 0.5).to_rgb8(), (255, 0, 0));
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let hsl = Color::rgb8(128, 128, 128).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-12));
        assert!(approx_eq(hsl.s, 0.0, 1e-12));
    }

    #[test]
    fn constructors_clamp() {
        assert_eq!(Color::srgb(2.0, -1.0, f64::NAN), Color::rgb8(255, 0, 0));
        assert_eq!(Color::hsl(0.0, 5.0, 0.5), Color::rgb8(255, 0, 0));
        assert_eq!(Color::hsl(-120.0, 1.0, 0.5), Color::rgb8(0, 0, 255));
    }

    // ── Transforms ───────────────────────────────────────────────────────

    #[test]
    fn lighten_raises_lightness() {
        let red = Color::hsl(0.0, 1.0, 0.5);
        assert_eq!(red.lighten(20.0).to_hex(), "#ff6666");
    }

    #[test]
    fn darken_lowers_lightness() {
        let red = Color::hsl(0.0, 1.0, 0.5);
        assert_eq!(red.darken(20.0).to_hex(), "#990000");
    }

    #[test]
    fn lighten_and_darken_clamp() {
        assert_eq!(Color::WHITE.lighten(50.0), Color::WHITE);
        assert_eq!(Color::BLACK.darken(10.0), Color::BLACK);
        assert_eq!(primary().lighten(1_000.0), Color::WHITE);
        assert_eq!(primary().darken(f64::INFINITY), Color::BLACK);
    }

    #[test]
    fn nan_amount_is_no_change() {
        assert_eq!(primary().lighten(f64::NAN), primary());
        assert_eq!(primary().spin(f64::NAN), primary());
    }

    #[test]
    fn saturate_and_desaturate() {
        let dusty = Color::hsl(0.0, 0.5, 0.5);
        assert_eq!(dusty.to_rgb8(), (191, 64, 64));
        assert_eq!(dusty.saturate(50.0).to_hex(), "#ff0000");
        assert_eq!(dusty.desaturate(100.0).to_rgb8(), (128, 128, 128));
    }

    #[test]
    fn spin_wraps() {
        let c = Color::hsl(350.0, 1.0, 0.5).spin(30.0);
        assert!(approx_eq(c.to_hsl().h, 20.0, 1e-9), "hue {}", c.to_hsl().h);
    }

    #[test]
    fn spin_negative_wraps() {
        let c = Color::hsl(10.0, 1.0, 0.5).spin(-30.0);
        assert!(approx_eq(c.to_hsl().h, 340.0, 1e-9), "hue {}", c.to_hsl().h);
    }

    #[test]
    fn complement_is_180_degrees() {
        let c = primary().complement();
        assert!(approx_eq(c.to_hsl().h, 60.0, 1e-9), "hue {}", c.to_hsl().h);
        assert_eq!(c, primary().spin(180.0));
    }

    #[test]
    fn spinning_gray_is_a_noop() {
        let gray = Color::rgb8(90, 90, 90);
        assert_eq!(gray.spin(123.0), gray);
    }

    #[test]
    fn transforms_leave_receiver_untouched() {
        let p = primary();
        let _ = p.lighten(30.0).saturate(20.0).spin(45.0);
        assert_eq!(p.to_hex(), "#2020aa");
    }

    #[test]
    fn transform_order_matters() {
        // Clamping at either end of the lightness range discards hue and
        // saturation, so the second step sees a different color.
        let c = Color::hsl(200.0, 0.8, 0.5);
        assert_eq!(c.lighten(60.0).darken(60.0).to_rgb8(), (102, 102, 102));
        assert_eq!(c.darken(60.0).lighten(60.0).to_rgb8(), (153, 153, 153));
    }

    #[test]
    fn with_lightness_keeps_hue_and_alpha() {
        let c = primary().with_alpha(0.25).with_lightness(0.95);
        let hsl = c.to_hsl();
        assert!(approx_eq(hsl.h, 240.0, 0.5), "hue {}", hsl.h);
        assert!(approx_eq(hsl.l, 0.95, 0.01), "lightness {}", hsl.l);
        assert_eq!(c.to_rgba8().3, 64);
    }

    #[test]
    fn with_alpha_clamps() {
        assert!(approx_eq(primary().with_alpha(1.5).alpha(), 1.0, 1e-12));
        assert!(approx_eq(primary().with_alpha(-1.0).alpha(), 0.0, 1e-12));
        assert!(approx_eq(primary().with_alpha(f64::NAN).alpha(), 1.0, 1e-12));
    }

    // ── Equality ─────────────────────────────────────────────────────────

    #[test]
    fn equality_is_on_8_bit_rgba() {
        assert_eq!(Color::srgb(0.5, 0.5, 0.5), Color::rgb8(128, 128, 128));
        assert_ne!(Color::rgb8(1, 2, 3), Color::rgba8(1, 2, 3, 254));
    }

    #[test]
    fn linearization_roundtrip() {
        for v in [0.0, 0.02, 0.04045, 0.2, 0.5, 0.9, 1.0] {
            assert!(approx_eq(linear_to_srgb(srgb_to_linear(v)), v, 1e-6), "{v}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&primary().with_alpha(0.5)).unwrap();
        assert_eq!(json, "\"#2020aa80\"");
        let back: Color = serde_json::from_str("\"#2020AA\"").unwrap();
        assert_eq!(back, primary());
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
                .prop_map(|(r, g, b, a)| Color::rgba8(r, g, b, a))
        }

        fn in_unit(c: Color) -> bool {
            let (r, g, b) = c.to_srgb();
            [r, g, b, c.alpha()].iter().all(|v| (0.0..=1.0).contains(v))
        }

        proptest! {
            #[test]
            fn double_spin_restores_color(c in any_color()) {
                let back = c.spin(180.0).spin(180.0);
                prop_assert_eq!(back.to_rgba8(), c.to_rgba8());
                let (before, after) = (c.to_hsl(), back.to_hsl());
                if before.s > 0.01 {
                    prop_assert!(hue_diff(before.h, after.h) < 1e-6,
                        "hue {} vs {}", before.h, after.h);
                }
            }

            #[test]
            fn transforms_stay_in_range(c in any_color(), amount in -300.0f64..300.0) {
                for out in [
                    c.lighten(amount),
                    c.darken(amount),
                    c.saturate(amount),
                    c.desaturate(amount),
                    c.spin(amount * 7.0),
                    c.with_lightness(amount / 100.0),
                    c.with_alpha(amount / 100.0),
                ] {
                    prop_assert!(in_unit(out), "{out:?} out of range");
                }
            }

            #[test]
            fn transforms_keep_alpha(c in any_color(), amount in -100.0f64..100.0) {
                prop_assert_eq!(c.lighten(amount).to_rgba8().3, c.to_rgba8().3);
                prop_assert_eq!(c.spin(amount).to_rgba8().3, c.to_rgba8().3);
            }

            #[test]
            fn hex8_parses_back(c in any_color()) {
                prop_assert_eq!(Color::hex(&c.to_hex8()).unwrap(), c);
                prop_assert_eq!(Color::hex(&c.to_hex()).unwrap(), c);
            }
        }
    }
}
