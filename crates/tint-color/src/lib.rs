// SPDX-License-Identifier: MIT
//
// tint-color: the color value underneath tint's theme engine.
//
// One small `Copy` type, `Color`, stored as sRGB with floating alpha and
// convertible to HSL and hex. Every transform (lighten, saturate, spin, ...)
// round-trips through HSL and hands back a fresh value, so chains like
// `primary.saturate(40).lighten(30)` read left to right and never alias.
//
// Parsing hex text is the only fallible entry point; everything after it is
// total. Numeric inputs outside their range are clamped, never rejected.

// Single-char names (r, g, b, h, s, l, p, q, t) are the color-math convention.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;

pub use color::{Color, Hsl, linear_to_srgb, srgb_to_linear};
pub use error::ParseColorError;
