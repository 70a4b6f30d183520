//! WCAG contrast ratios and readable-foreground selection.
//!
//! Every `*-foreground` token is chosen here: given a background and a list
//! of candidate foregrounds, pick the candidate with the highest contrast.
//!
//! - Luminance and ratio follow WCAG 2.1 (sRGB linearization, then a
//!   weighted sum).
//! - The minimum ratio comes from a level/size policy; the engine runs at
//!   AA for large text, i.e. 3:1.
//! - Missing the minimum is not an error. Without the fallback knob the best
//!   candidate is returned anyway; with it, white/black get a second chance.

use tint_color::{Color, srgb_to_linear};
use tracing::trace;

/// Candidates used when the caller supplies none: pure white, then black.
pub const DEFAULT_CANDIDATES: [Color; 2] = [Color::WHITE, Color::BLACK];

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Alpha is ignored. Returns a value in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WcagLevel {
    #[default]
    Aa,
    Aaa,
}

/// Text size class. Large text gets the relaxed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    Small,
    #[default]
    Large,
}

impl WcagLevel {
    /// Short lowercase name (`aa`, `aaa`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aa => "aa",
            Self::Aaa => "aaa",
        }
    }

    /// Parse from a name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "aa" => Some(Self::Aa),
            "aaa" => Some(Self::Aaa),
            _ => None,
        }
    }
}

impl TextSize {
    /// Short lowercase name (`small`, `large`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    /// Parse from a name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// The outcome of a resolution: the chosen color and how well it scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readable {
    pub color: Color,
    pub ratio: f64,
    pub meets_minimum: bool,
}

/// Picks the most readable foreground for a background.
///
/// The default is the configuration the palette uses: AA, large text, no
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContrastResolver {
    pub level: WcagLevel,
    pub size: TextSize,
    /// When the best candidate misses the minimum, retry with white/black.
    pub include_fallback: bool,
}

impl ContrastResolver {
    /// Minimum contrast ratio for this level and text size.
    #[must_use]
    pub const fn min_ratio(self) -> f64 {
        match (self.level, self.size) {
            (WcagLevel::Aa, TextSize::Large) => 3.0,
            (WcagLevel::Aa, TextSize::Small) | (WcagLevel::Aaa, TextSize::Large) => 4.5,
            (WcagLevel::Aaa, TextSize::Small) => 7.0,
        }
    }

    /// The most readable candidate against `background`.
    ///
    /// An empty `candidates` slice means [`DEFAULT_CANDIDATES`].
    #[must_use]
    pub fn resolve(self, background: Color, candidates: &[Color]) -> Color {
        self.resolve_scored(background, candidates).color
    }

    /// Like [`resolve`](Self::resolve), but also reports the ratio and
    /// whether it met the minimum.
    ///
    /// Highest ratio wins; on an exact tie the earlier candidate is kept.
    #[must_use]
    pub fn resolve_scored(self, background: Color, candidates: &[Color]) -> Readable {
        let candidates = if candidates.is_empty() {
            &DEFAULT_CANDIDATES[..]
        } else {
            candidates
        };

        let best = self.best_of(background, candidates);
        if best.meets_minimum || !self.include_fallback {
            return best;
        }

        trace!(
            background = %background,
            best = %best.color,
            ratio = best.ratio,
            "no candidate meets the minimum; falling back to white/black"
        );
        self.best_of(background, &DEFAULT_CANDIDATES)
    }

    fn best_of(self, background: Color, candidates: &[Color]) -> Readable {
        let min = self.min_ratio();
        let mut best = Readable {
            color: candidates[0],
            ratio: contrast_ratio(background, candidates[0]),
            meets_minimum: false,
        };
        for &candidate in &candidates[1..] {
            let ratio = contrast_ratio(background, candidate);
            if ratio > best.ratio {
                best.color = candidate;
                best.ratio = ratio;
            }
        }
        best.meets_minimum = best.ratio >= min;
        best
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(hex("#ff0000"));
        assert!(approx_eq(lum, 0.2126, 0.001), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(hex("#00ff00"));
        assert!(approx_eq(lum, 0.7152, 0.001), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_ignores_alpha() {
        let c = hex("#336699");
        assert!(approx_eq(
            relative_luminance(c),
            relative_luminance(c.with_alpha(0.1)),
            1e-12
        ));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 0.01), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#2020aa");
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-12), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#cc334d");
        let b = hex("#1a1a66");
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    // ── Policy ──────────────────────────────────────────────────────

    #[test]
    fn default_policy_is_aa_large_best_effort() {
        let r = ContrastResolver::default();
        assert_eq!(r.level, WcagLevel::Aa);
        assert_eq!(r.size, TextSize::Large);
        assert!(!r.include_fallback);
        assert!(approx_eq(r.min_ratio(), 3.0, 1e-12));
    }

    #[test]
    fn thresholds_per_level_and_size() {
        let ratio = |level, size| {
            ContrastResolver {
                level,
                size,
                include_fallback: false,
            }
            .min_ratio()
        };
        assert!(approx_eq(ratio(WcagLevel::Aa, TextSize::Small), 4.5, 1e-12));
        assert!(approx_eq(ratio(WcagLevel::Aaa, TextSize::Large), 4.5, 1e-12));
        assert!(approx_eq(ratio(WcagLevel::Aaa, TextSize::Small), 7.0, 1e-12));
    }

    #[test]
    fn names_parse_back() {
        assert_eq!(WcagLevel::from_name("AAA"), Some(WcagLevel::Aaa));
        assert_eq!(TextSize::from_name(TextSize::Small.name()), Some(TextSize::Small));
        assert_eq!(WcagLevel::from_name("b"), None);
    }

    // ── Resolution ──────────────────────────────────────────────────

    #[test]
    fn white_background_picks_black() {
        let r = ContrastResolver::default();
        let picked = r.resolve(hex("#FFFFFF"), &[hex("#FFFFFF"), hex("#000000")]);
        assert_eq!(picked, Color::BLACK);
    }

    #[test]
    fn black_background_picks_white() {
        let r = ContrastResolver::default();
        let picked = r.resolve(hex("#000000"), &[hex("#FFFFFF"), hex("#000000")]);
        assert_eq!(picked, Color::WHITE);
    }

    #[test]
    fn empty_candidates_use_white_and_black() {
        let r = ContrastResolver::default();
        assert_eq!(r.resolve(hex("#101010"), &[]), Color::WHITE);
        assert_eq!(r.resolve(hex("#f0f0f0"), &[]), Color::BLACK);
    }

    #[test]
    fn exact_tie_keeps_first_candidate() {
        // Alpha does not affect luminance, so these two tie exactly.
        let first = hex("#00000080");
        let second = hex("#000000");
        let picked = ContrastResolver::default().resolve(Color::WHITE, &[first, second]);
        assert_eq!(picked, first);
    }

    #[test]
    fn best_effort_when_nothing_passes() {
        let r = ContrastResolver::default();
        let scored = r.resolve_scored(hex("#777777"), &[hex("#888888"), hex("#666666")]);
        assert_eq!(scored.color, hex("#666666"));
        assert!(!scored.meets_minimum);
        assert!(scored.ratio < 3.0, "ratio {}", scored.ratio);
    }

    #[test]
    fn fallback_retries_with_white_and_black() {
        let r = ContrastResolver {
            include_fallback: true,
            ..ContrastResolver::default()
        };
        let scored = r.resolve_scored(hex("#777777"), &[hex("#888888"), hex("#666666")]);
        assert_eq!(scored.color, Color::BLACK);
        assert!(scored.meets_minimum);
    }

    #[test]
    fn fallback_unused_when_candidate_passes() {
        let r = ContrastResolver {
            include_fallback: true,
            ..ContrastResolver::default()
        };
        let navy = hex("#000080");
        assert_eq!(r.resolve(Color::WHITE, &[navy]), navy);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb8(r, g, b))
        }

        proptest! {
            #[test]
            fn ratio_in_bounds(a in any_color(), b in any_color()) {
                let ratio = contrast_ratio(a, b);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio}");
            }

            #[test]
            fn resolved_is_a_candidate_and_maximal(
                bg in any_color(),
                candidates in proptest::collection::vec(any_color(), 1..6),
            ) {
                let picked = ContrastResolver::default().resolve_scored(bg, &candidates);
                prop_assert!(candidates.contains(&picked.color));
                for c in &candidates {
                    prop_assert!(contrast_ratio(bg, *c) <= picked.ratio);
                }
            }

            #[test]
            fn black_or_white_always_reaches_aa_large(bg in any_color()) {
                let picked = ContrastResolver::default().resolve_scored(bg, &[]);
                prop_assert!(picked.meets_minimum, "ratio {}", picked.ratio);
            }
        }
    }
}
