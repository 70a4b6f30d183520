// SPDX-License-Identifier: MIT
//
// Parse errors for hex color input.
//
// Raw colors arrive as text from pickers, flags and seed files. This is the
// one place a color can fail to exist; once parsed, nothing downstream fails.

use thiserror::Error;

/// Why a string could not be turned into a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing but whitespace (or a lone `#`) was given.
    #[error("empty color string")]
    Empty,

    /// A character outside `0-9a-fA-F` appeared after the optional `#`.
    #[error("invalid hex digit {digit:?} in {input:?}")]
    Digit { input: String, digit: char },

    /// The digit count was not 3, 4, 6 or 8.
    #[error("invalid hex length {len} in {input:?}: expected 3, 4, 6 or 8 digits")]
    Length { input: String, len: usize },
}
