// SPDX-License-Identifier: MIT
//
// Interactive session: line commands driving a live theme controller.
//
// Each stdin line is parsed into a `Command`; edits go to the controller,
// which re-derives and publishes to the terminal swatch board. After every
// edit the swatches and the `:root` preview are printed.
//
//   primary <hex>                      set primary
//   secondary <hex>|auto|complement    explicit / derived / pinned complement
//   background <hex>|auto|primary      explicit / derived / pinned tint
//   brightness <0-100>                 background = primary at that lightness
//   dark | light | toggle              mode
//   show | json                        print the current palette
//   help | quit
//
// Bad input is reported and the session keeps going.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tint_color::{Color, ParseColorError};
use tint_theme::{LivePublisher, SeedColor, ThemeController};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::swatch::SwatchBoard;

/// `<word> [<arg>]`, nothing else on the line.
static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<cmd>[A-Za-z]+|\?)(?:\s+(?P<arg>\S+))?\s*$").expect("valid command regex")
});

/// A plain decimal number, optionally with a fraction and a trailing `%`.
static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<num>[+-]?\d+(?:\.\d+)?)%?$").expect("valid percent regex")
});

const HELP: &str = "\
commands:
  primary <hex>                     set the primary color
  secondary <hex>|auto|complement   set, derive, or pin the secondary
  background <hex>|auto|primary     set, derive, or pin the background
  brightness <0-100>                background lightness from primary
  dark | light | toggle             switch mode
  show                              print swatches and preview
  json                              print the palette as JSON
  help                              this text
  quit                              leave the session";

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Primary(Color),
    Secondary(SeedColor),
    /// `secondary complement`, pinned to the current primary.
    RegenerateSecondary,
    Background(SeedColor),
    /// `background primary`, pinned to the current primary and mode.
    RegenerateBackground,
    Brightness(f64),
    Dark,
    Light,
    Toggle,
    Show,
    Json,
    Help,
    Quit,
}

/// Why a session line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0:?} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(String),

    #[error("`{0}` takes no argument")]
    UnexpectedArgument(String),

    #[error("{0}")]
    Color(#[from] ParseColorError),

    #[error("brightness must be a number from 0 to 100, got {0:?}")]
    Brightness(String),
}

/// Parse one line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let caps = COMMAND_RE
        .captures(trimmed)
        .ok_or_else(|| CommandError::Unknown(trimmed.to_string()))?;
    let cmd = caps["cmd"].to_ascii_lowercase();
    let arg = caps.name("arg").map(|m| m.as_str());

    let command = match (cmd.as_str(), arg) {
        ("primary", Some(hex)) => Command::Primary(Color::hex(hex)?),
        ("secondary", Some(a)) => match a.to_ascii_lowercase().as_str() {
            "auto" => Command::Secondary(SeedColor::Derived),
            "complement" => Command::RegenerateSecondary,
            _ => Command::Secondary(SeedColor::Explicit(Color::hex(a)?)),
        },
        ("background", Some(a)) => match a.to_ascii_lowercase().as_str() {
            "auto" => Command::Background(SeedColor::Derived),
            "primary" => Command::RegenerateBackground,
            _ => Command::Background(SeedColor::Explicit(Color::hex(a)?)),
        },
        ("brightness", Some(a)) => Command::Brightness(parse_percent(a)?),
        (name @ ("primary" | "secondary" | "background" | "brightness"), None) => {
            return Err(CommandError::MissingArgument(name.to_string()));
        }
        (name, None) => bare(name).ok_or_else(|| CommandError::Unknown(trimmed.to_string()))?,
        (name, Some(_)) => {
            return Err(match bare(name) {
                Some(_) => CommandError::UnexpectedArgument(name.to_string()),
                None => CommandError::Unknown(trimmed.to_string()),
            });
        }
    };
    Ok(Some(command))
}

/// Commands that take no argument, with their aliases.
fn bare(name: &str) -> Option<Command> {
    Some(match name {
        "dark" => Command::Dark,
        "light" => Command::Light,
        "toggle" => Command::Toggle,
        "show" => Command::Show,
        "json" => Command::Json,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    })
}

fn parse_percent(arg: &str) -> Result<f64, CommandError> {
    PERCENT_RE
        .captures(arg)
        .and_then(|caps| caps["num"].parse::<f64>().ok())
        .filter(|p| (0.0..=100.0).contains(p))
        .ok_or_else(|| CommandError::Brightness(arg.to_string()))
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A controller publishing to swatches, plus the output stream.
pub struct Session<W> {
    controller: ThemeController<LivePublisher<SwatchBoard>>,
    out: W,
}

impl<W: Write> Session<W> {
    pub const fn new(controller: ThemeController<LivePublisher<SwatchBoard>>, out: W) -> Self {
        Self { controller, out }
    }

    #[cfg(test)]
    pub const fn controller(&self) -> &ThemeController<LivePublisher<SwatchBoard>> {
        &self.controller
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), CliError> {
        self.show()?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(line = %line.trim(), error = %e, "rejected session command");
                    writeln!(self.out, "error: {e}")?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Apply one command. Edits republish and print the new palette.
    pub fn execute(&mut self, command: Command) -> Result<Flow, CliError> {
        debug!(?command, "session command");
        let c = &mut self.controller;
        match command {
            Command::Primary(color) => c.set_primary(color),
            Command::Secondary(seed) => c.set_secondary(seed),
            Command::RegenerateSecondary => c.regenerate_secondary_as_complement(),
            Command::Background(seed) => c.set_background(seed),
            Command::RegenerateBackground => c.regenerate_background_from_primary(),
            Command::Brightness(percent) => c.set_background_brightness(percent),
            Command::Dark => c.set_dark_mode(true),
            Command::Light => c.set_dark_mode(false),
            Command::Toggle => c.toggle_dark_mode(),
            Command::Show => {}
            Command::Json => {
                let json = serde_json::to_string_pretty(c.palette())?;
                writeln!(self.out, "{json}")?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        self.show()?;
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> Result<(), CliError> {
        let publisher = self.controller.publisher();
        publisher.target().render(&mut self.out)?;
        writeln!(self.out, "{}", publisher.preview())?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
