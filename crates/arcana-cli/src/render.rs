//! Terminal renderers for placed cards.
//!
//! Rendering is a display concern only; a renderer sees a finished
//! [`Placement`] and never touches the draw.

use std::io::{self, Write};

use clap::ValueEnum;
use colored::Colorize;

use arcana_core::{Placement, PositionLabel};

/// Inner width of a framed card, matching the fallback card art.
const FRAME_WIDTH: usize = 13;
/// Body rows of a framed card.
const FRAME_HEIGHT: usize = 7;

/// Writes one placed card to a terminal.
pub trait CardRenderer {
    /// Render `placement` to `out`.
    fn render(&self, out: &mut dyn Write, placement: &Placement) -> io::Result<()>;
}

/// How cards are drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    /// One line per card.
    Plain,
    /// Card art frames, turned upside down when reversed.
    Frame,
}

impl RenderStyle {
    /// Pick a style for the current terminal.
    pub fn detect() -> Self {
        match std::env::var("TERM_PROGRAM") {
            Ok(program) if program == "iTerm.app" => Self::Frame,
            _ => Self::Plain,
        }
    }

    /// The renderer for this style.
    pub fn renderer(self) -> Box<dyn CardRenderer> {
        match self {
            Self::Plain => Box::new(PlainRenderer),
            Self::Frame => Box::new(FrameRenderer),
        }
    }
}

/// `1. The Fool` / `Past: Three of Cups (Reversed)`.
pub struct PlainRenderer;

impl CardRenderer for PlainRenderer {
    fn render(&self, out: &mut dyn Write, placement: &Placement) -> io::Result<()> {
        let label = label_prefix(&placement.label);
        let card = placement.drawn.to_string();
        if placement.drawn.is_reversed() {
            writeln!(out, "  {} {}", label.bold(), card.yellow())
        } else {
            writeln!(out, "  {} {}", label.bold(), card)
        }
    }
}

/// Boxed card art with the card name inside.
pub struct FrameRenderer;

impl CardRenderer for FrameRenderer {
    fn render(&self, out: &mut dyn Write, placement: &Placement) -> io::Result<()> {
        writeln!(out, "{placement}")?;
        let mut lines = frame(&placement.drawn.card.to_string());
        if placement.drawn.is_reversed() {
            lines = rotate_half_turn(&lines);
        }
        for line in lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }
}

fn label_prefix(label: &PositionLabel) -> String {
    match label {
        PositionLabel::Ordinal(n) => format!("{n}."),
        PositionLabel::Named(name) => format!("{name}:"),
    }
}

/// Build the framed card: a border around `FRAME_HEIGHT` rows with the
/// wrapped text centered both ways.
fn frame(text: &str) -> Vec<String> {
    let wrapped = wrap(text, FRAME_WIDTH - 2);
    let top = FRAME_HEIGHT.saturating_sub(wrapped.len()) / 2;

    let mut lines = Vec::with_capacity(FRAME_HEIGHT + 2);
    lines.push(format!("┌{}┐", "─".repeat(FRAME_WIDTH)));
    for row in 0..FRAME_HEIGHT {
        let content = row
            .checked_sub(top)
            .and_then(|i| wrapped.get(i))
            .map(String::as_str)
            .unwrap_or("");
        lines.push(format!("│{}│", center(content, FRAME_WIDTH)));
    }
    lines.push(format!("└{}┘", "─".repeat(FRAME_WIDTH)));
    lines
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            let piece: String = chunk.iter().collect();
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 1 + piece.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Turn the card art upside down.
fn rotate_half_turn(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .rev()
        .map(|line| {
            line.chars()
                .rev()
                .map(|c| match c {
                    '┌' => '┘',
                    '┘' => '┌',
                    '┐' => '└',
                    '└' => '┐',
                    other => other,
                })
                .collect()
        })
        .collect()
}
