// SPDX-License-Identifier: MIT
//
// CLI errors and their exit codes.
//
//   0   success
//   2   argument parse error (clap, before our code runs)
//   11  I/O error (seed file, stdout, stdin)
//   12  input error (bad color, bad seed file, bad option value)
//   13  serialization error (JSON output)

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tint_color::ParseColorError;

/// Everything that can stop the `tint` binary, each with its own exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("{0}")]
    Input(String),

    #[error("cannot read seed file {}: {source}", path.display())]
    SeedFileRead { path: PathBuf, source: io::Error },

    #[error("malformed seed file {}: {source}", path.display())]
    SeedFileFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SeedFileRead { .. } | Self::Io(_) => 11,
            Self::Color(_) | Self::Input(_) | Self::SeedFileFormat { .. } => 12,
            Self::Serialization(_) => 13,
        }
    }
}
