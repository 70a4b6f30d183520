//! Theme controller: owns the seeds and keeps the published palette current.
//!
//! Every operation is a single synchronous update: mutate the seed state,
//! derive a fresh palette from scratch, publish it. Nothing is patched
//! incrementally, so the published palette always matches the seeds.

use tint_color::Color;
use tracing::{debug, info};

use crate::palette::{DeriveOptions, Palette, derive_with, derived_secondary};
use crate::publish::Publish;
use crate::seed::{SeedColor, SeedState};

/// Seed state plus a publisher, with the last palette cached for reads.
#[derive(Debug)]
pub struct ThemeController<P> {
    seed: SeedState,
    options: DeriveOptions,
    palette: Palette,
    publisher: P,
}

impl<P: Publish> ThemeController<P> {
    /// Build a controller with the standard formulas and publish the initial
    /// palette.
    pub fn new(seed: SeedState, publisher: P) -> Self {
        Self::with_options(seed, DeriveOptions::default(), publisher)
    }

    /// Build a controller with explicit formula options and publish the
    /// initial palette.
    pub fn with_options(seed: SeedState, options: DeriveOptions, mut publisher: P) -> Self {
        let palette = derive_with(&seed, &options);
        publisher.publish(&palette);
        info!(primary = %seed.primary, is_dark = seed.is_dark, "theme controller ready");
        Self {
            seed,
            options,
            palette,
            publisher,
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    #[must_use]
    pub const fn seed(&self) -> &SeedState {
        &self.seed
    }

    #[must_use]
    pub const fn options(&self) -> &DeriveOptions {
        &self.options
    }

    /// The palette most recently published.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn publisher(&self) -> &P {
        &self.publisher
    }

    pub const fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.seed.is_dark
    }

    // ── Seed edits ──────────────────────────────────────────────

    pub fn set_primary(&mut self, primary: Color) {
        debug!(primary = %primary, "set primary");
        self.apply(|seed| seed.primary = primary);
    }

    /// `SeedColor::Derived` clears an explicit secondary.
    pub fn set_secondary(&mut self, secondary: SeedColor) {
        debug!(secondary = ?secondary, "set secondary");
        self.apply(|seed| seed.secondary = secondary);
    }

    /// `SeedColor::Derived` clears an explicit background.
    pub fn set_background(&mut self, background: SeedColor) {
        debug!(background = ?background, "set background");
        self.apply(|seed| seed.background = background);
    }

    pub fn set_dark_mode(&mut self, is_dark: bool) {
        debug!(is_dark, "set dark mode");
        self.apply(|seed| seed.is_dark = is_dark);
    }

    pub fn toggle_dark_mode(&mut self) {
        let is_dark = !self.seed.is_dark;
        self.set_dark_mode(is_dark);
    }

    /// Pin secondary to the current primary's complement. Unlike `Derived`,
    /// the pinned color stays put when primary changes later.
    pub fn regenerate_secondary_as_complement(&mut self) {
        let secondary = derived_secondary(self.seed.primary);
        debug!(secondary = %secondary, "regenerate secondary");
        self.apply(|seed| seed.secondary = SeedColor::Explicit(secondary));
    }

    /// Pin background to primary at 95% lightness (light) or 10% (dark).
    ///
    /// Deliberately a step lighter in dark mode than a `Derived` background.
    pub fn regenerate_background_from_primary(&mut self) {
        let lightness = if self.seed.is_dark { 0.10 } else { 0.95 };
        let background = self.seed.primary.with_lightness(lightness);
        debug!(background = %background, "regenerate background");
        self.apply(|seed| seed.background = SeedColor::Explicit(background));
    }

    /// Slider input: background becomes primary at `percent`% lightness.
    /// Out-of-range values are clamped to 0..=100.
    pub fn set_background_brightness(&mut self, percent: f64) {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        let background = self.seed.primary.with_lightness(percent / 100.0);
        debug!(percent, background = %background, "set background brightness");
        self.apply(|seed| seed.background = SeedColor::Explicit(background));
    }

    /// Swap formula options and republish.
    pub fn set_options(&mut self, options: DeriveOptions) {
        debug!(
            muted = options.muted.name(),
            chart = options.chart.name(),
            "set derive options"
        );
        self.options = options;
        self.refresh();
    }

    // ── Internal ────────────────────────────────────────────────

    fn apply(&mut self, edit: impl FnOnce(&mut SeedState)) {
        edit(&mut self.seed);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.palette = derive_with(&self.seed, &self.options);
        self.publisher.publish(&self.palette);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
