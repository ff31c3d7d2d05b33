//! Terminal output for the `basin` commands.
//!
//! Handlers describe what they want shown as a [`Line`] and hand it to
//! [`print`], which renders it for the current [`Mode`]. In JSON mode every
//! line becomes one `{"type": ..., "payload": ...}` object, so stdout stays
//! machine-readable; quiet mode keeps only warnings and errors.

use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Human-readable, coloured when the terminal supports it.
    #[default]
    Text,
    /// Text, but only warnings and errors.
    Quiet,
    /// One JSON object per line.
    Json,
}

impl Mode {
    /// Pick the mode for the global `--json` and `--quiet` flags. JSON wins.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Text,
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            Self::Text => 0,
            Self::Quiet => 1,
            Self::Json => 2,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Quiet,
            2 => Self::Json,
            _ => Self::Text,
        }
    }
}

static MODE: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide output mode.
pub fn set_mode(mode: Mode) {
    MODE.store(mode.to_bits(), Ordering::Relaxed);
}

/// Current output mode.
#[must_use]
pub fn mode() -> Mode {
    Mode::from_bits(MODE.load(Ordering::Relaxed))
}

/// Returns true in JSON mode.
#[must_use]
pub fn is_json() -> bool {
    mode() == Mode::Json
}

/// One piece of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A bold heading preceded by a blank line.
    Section(&'a str),
    /// A label and its value.
    Field(&'a str, String),
    Success(&'a str),
    Warning(&'a str),
    /// Written to stderr in every mode.
    Error(&'a str),
    Note(&'a str),
    /// Preformatted text such as a table. Not shown in JSON mode.
    Block(&'a str),
}

impl Line<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Field(..) => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Note(_) => "note",
            Self::Block(_) => "block",
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Section(title) => Some(json!({ "title": title })),
            Self::Field(label, value) => Some(json!({ "label": label, "value": value })),
            Self::Success(message)
            | Self::Warning(message)
            | Self::Error(message)
            | Self::Note(message) => Some(json!({ "message": message })),
            Self::Block(_) => None,
        }
    }

    fn stream(&self) -> Stream {
        match self {
            Self::Error(_) => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }

    fn text(&self) -> String {
        let out = self.stream();
        match self {
            Self::Section(title) => format!("\n{}", title.if_supports_color(out, |t| t.bold())),
            Self::Field(label, value) => {
                let label = format!("{label:<14}");
                format!("  {} {value}", label.if_supports_color(out, |t| t.dimmed()))
            }
            Self::Success(message) => {
                format!("  {} {message}", "✓".if_supports_color(out, |t| t.green()))
            }
            Self::Warning(message) => {
                format!("  {} {message}", "⚠".if_supports_color(out, |t| t.yellow()))
            }
            Self::Error(message) => {
                format!("  {} {message}", "×".if_supports_color(out, |t| t.red()))
            }
            Self::Note(message) => format!("  {}", message.if_supports_color(out, |t| t.dimmed())),
            Self::Block(content) => content
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Render for `mode`, or `None` if the line is not shown.
    fn render(&self, mode: Mode) -> Option<String> {
        match mode {
            Mode::Json => self.payload().map(|payload| envelope(self.kind(), payload)),
            Mode::Quiet if !matches!(self, Self::Warning(_) | Self::Error(_)) => None,
            Mode::Text | Mode::Quiet => Some(self.text()),
        }
    }
}

fn envelope(kind: &str, payload: Value) -> String {
    json!({ "type": kind, "payload": payload }).to_string()
}

/// Print `line` for the current mode.
pub fn print(line: Line<'_>) {
    let Some(rendered) = line.render(mode()) else {
        return;
    };
    match line.stream() {
        Stream::Stderr => eprintln!("{rendered}"),
        _ => println!("{rendered}"),
    }
}

/// Emit a command's structured result. Only produces output in JSON mode.
pub fn result(kind: &str, payload: Value) {
    if is_json() {
        println!("{}", envelope(kind, payload));
    }
}

/// Cyan text for amounts and identifiers; plain in JSON mode.
pub fn accent(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
}

/// Dimmed text for secondary detail; plain in JSON mode.
pub fn dim(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
}
