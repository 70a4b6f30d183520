// SPDX-License-Identifier: MIT
//
// Seed configuration: a JSON seed file overlaid with command-line flags.
//
// The file gives a starting point, e.g.
//
//   {"primary": "#2020AA", "secondary": null, "background": null, "dark": false}
//
// and any flag that is present wins over the file. Missing keys and nulls
// mean "derive it".

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use tint_color::Color;
use tint_theme::{ChartPolicy, DeriveOptions, MutedPolicy, SeedColor, SeedState};
use tracing::debug;

use crate::error::CliError;

/// On-disk seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedFile {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub background: Option<Color>,
    pub dark: Option<bool>,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::SeedFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text).map_err(|source| CliError::SeedFileFormat {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded seed file");
        Ok(file)
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Seed and formula flags shared by `derive` and `session`.
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Primary color (hex, e.g. "#2020AA").
    #[arg(short, long)]
    pub primary: Option<String>,

    /// Secondary color; derived from primary when omitted.
    #[arg(short, long)]
    pub secondary: Option<String>,

    /// Background color; derived from primary when omitted.
    #[arg(short, long)]
    pub background: Option<String>,

    /// Start in dark mode.
    #[arg(short, long)]
    pub dark: bool,

    /// JSON seed file; flags override its values.
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Muted token policy (desaturate, translucent).
    #[arg(long, default_value = "desaturate")]
    pub muted: String,

    /// Chart hue spacing (even, quarter).
    #[arg(long, default_value = "even")]
    pub chart: String,
}

impl SeedArgs {
    /// Build the seed state: defaults, then the seed file, then flags.
    pub fn seed_state(&self) -> Result<SeedState, CliError> {
        let file = match &self.seed_file {
            Some(path) => SeedFile::load(path)?,
            None => SeedFile::default(),
        };
        self.merge(&file)
    }

    /// Overlay the flags on an already loaded seed file.
    pub fn merge(&self, file: &SeedFile) -> Result<SeedState, CliError> {
        let primary = match &self.primary {
            Some(hex) => Color::hex(hex)?,
            None => file.primary.unwrap_or(SeedState::default().primary),
        };
        let secondary = pick(self.secondary.as_deref(), file.secondary)?;
        let background = pick(self.background.as_deref(), file.background)?;
        let is_dark = self.dark || file.dark.unwrap_or(false);

        Ok(SeedState {
            primary,
            secondary,
            background,
            is_dark,
        })
    }

    pub fn options(&self) -> Result<DeriveOptions, CliError> {
        let muted = MutedPolicy::from_name(&self.muted)
            .ok_or_else(|| CliError::Input(format!("unknown muted policy: {}", self.muted)))?;
        let chart = ChartPolicy::from_name(&self.chart)
            .ok_or_else(|| CliError::Input(format!("unknown chart policy: {}", self.chart)))?;
        Ok(DeriveOptions {
            muted,
            chart,
            ..DeriveOptions::default()
        })
    }
}

fn pick(flag: Option<&str>, file: Option<Color>) -> Result<SeedColor, CliError> {
    Ok(match flag {
        Some(hex) => SeedColor::Explicit(Color::hex(hex)?),
        None => SeedColor::from(file),
    })
}
