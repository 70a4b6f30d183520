// SPDX-License-Identifier: MIT
//
// tint: derive a complete interface palette from a few seed colors.
//
// This binary wires the library crates to the command line:
//
//   tint-color → Color value, hex parsing, HSL transforms
//   tint-theme → contrast resolver, derivation pipeline, publisher, controller
//
// Subcommands:
//
//   derive    one-shot: seeds in, palette out (preview, JSON or swatches)
//   contrast  pick the most readable foreground for a background
//   session   line-driven editing of a live theme, republished on every edit
//
// Logs go to stderr, filtered by TINT_LOG (default "warn"), so stdout only
// ever carries the requested output.

mod config;
mod error;
mod session;
mod swatch;

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};
use tint_color::Color;
use tint_theme::{
    ContrastResolver, LivePublisher, Publish, TextSize, ThemeController, WcagLevel, derive_with,
    preview,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::SeedArgs;
use error::CliError;
use session::Session;
use swatch::SwatchBoard;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TINT_LOG";

#[derive(Parser)]
#[command(name = "tint", version, about = "Derive an interface color palette from seed colors")]
struct Cli {
    /// Machine-readable JSON output (and JSON errors).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the full palette once and print it.
    Derive {
        #[command(flatten)]
        seed: SeedArgs,

        /// Output format (preview, json, swatches).
        #[arg(short, long, default_value = "preview")]
        format: String,
    },
    /// Choose the most readable foreground for a background.
    Contrast {
        /// Background color (hex).
        background: String,

        /// Candidate foregrounds (hex); white and black when omitted.
        candidates: Vec<String>,

        /// WCAG level (aa, aaa).
        #[arg(long, default_value = "aa")]
        level: String,

        /// Text size (small, large).
        #[arg(long, default_value = "large")]
        size: String,

        /// Retry with white/black when no candidate meets the minimum.
        #[arg(long)]
        fallback: bool,
    },
    /// Edit a live theme with commands read from stdin.
    Session {
        #[command(flatten)]
        seed: SeedArgs,
    },
}

/// Output format for `derive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Preview,
    Json,
    Swatches,
}

impl Format {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "preview" | "css" => Some(Self::Preview),
            "json" => Some(Self::Json),
            "swatches" | "swatch" => Some(Self::Swatches),
            _ => None,
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Derive { seed, format } => {
            let format = if cli.json {
                Format::Json
            } else {
                Format::from_name(&format)
                    .ok_or_else(|| CliError::Input(format!("unknown format: {format}")))?
            };
            derive_cmd(&seed, format)
        }
        Command::Contrast {
            background,
            candidates,
            level,
            size,
            fallback,
        } => {
            let resolver = ContrastResolver {
                level: WcagLevel::from_name(&level)
                    .ok_or_else(|| CliError::Input(format!("unknown WCAG level: {level}")))?,
                size: TextSize::from_name(&size)
                    .ok_or_else(|| CliError::Input(format!("unknown text size: {size}")))?,
                include_fallback: fallback,
            };
            contrast_cmd(&background, &candidates, resolver, cli.json)
        }
        Command::Session { seed } => {
            let state = seed.seed_state()?;
            let options = seed.options()?;
            let controller = ThemeController::with_options(
                state,
                options,
                LivePublisher::new(SwatchBoard::new()),
            );
            info!("session started");
            let stdin = io::stdin();
            let mut session = Session::new(controller, io::stdout().lock());
            session.run(stdin.lock())
        }
    }
}

fn derive_cmd(seed: &SeedArgs, format: Format) -> Result<(), CliError> {
    let state = seed.seed_state()?;
    let options = seed.options()?;
    let palette = derive_with(&state, &options);

    let mut out = io::stdout().lock();
    match format {
        Format::Preview => writeln!(out, "{}", preview(&palette))?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&palette)?)?,
        Format::Swatches => {
            let mut publisher = LivePublisher::new(SwatchBoard::new());
            publisher.publish(&palette);
            publisher.target().render(&mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn contrast_cmd(
    background: &str,
    candidates: &[String],
    resolver: ContrastResolver,
    json: bool,
) -> Result<(), CliError> {
    let background = Color::hex(background)?;
    let candidates = candidates
        .iter()
        .map(|c| Color::hex(c))
        .collect::<Result<Vec<_>, _>>()?;
    let readable = resolver.resolve_scored(background, &candidates);

    let mut out = io::stdout().lock();
    if json {
        let report = serde_json::json!({
            "background": background,
            "color": readable.color,
            "ratio": readable.ratio,
            "meets_minimum": readable.meets_minimum,
            "level": resolver.level.name(),
            "size": resolver.size.name(),
            "min_ratio": resolver.min_ratio(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(
            out,
            "{}  {:.2}:1  {} (min {:.1}, {} {})",
            readable.color,
            readable.ratio,
            if readable.meets_minimum { "pass" } else { "fail" },
            resolver.min_ratio(),
            resolver.level.name(),
            resolver.size.name(),
        )?;
    }
    Ok(())
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("tint: {e}");
        }
        process::exit(e.exit_code());
    }
}
