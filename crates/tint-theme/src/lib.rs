//! # tint-theme: seed colors in, a full interface palette out
//!
//! Derives a complete, internally consistent set of named color tokens from
//! a primary color, an optional secondary, an optional background, and a
//! dark/light flag. Change one seed, recompute, and every token follows.
//!
//! # Architecture
//!
//! ```text
//! SeedState (primary, secondary?, background?, is_dark)
//!     │
//!     ▼
//! palette.rs:    derive(): fixed formula per Token, pure and total
//!     │              │
//!     │              └── contrast.rs: pick the most readable foreground
//!     ▼
//! Palette:       one Color per Token, in wire order
//!     │
//!     ▼
//! publish.rs:    write `--token` properties to a StyleTarget + preview text
//!     ▲
//!     │
//! controller.rs: owns the seed, applies edits, re-derives, publishes
//! ```
//!
//! Derivation never fails and never caches: every edit produces a fresh
//! palette from the seeds alone.

pub mod contrast;
pub mod controller;
pub mod palette;
pub mod publish;
pub mod seed;
pub mod token;

pub use contrast::{ContrastResolver, Readable, TextSize, WcagLevel};
pub use controller::ThemeController;
pub use palette::{
    ChartPolicy, DeriveOptions, MutedPolicy, Palette, derive, derive_with, derived_background,
    derived_secondary,
};
pub use publish::{LivePublisher, Publish, StyleSheet, StyleTarget, preview};
pub use seed::{SeedColor, SeedState};
pub use token::Token;
