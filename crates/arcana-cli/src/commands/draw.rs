use std::io::{self, Write};

use colored::Colorize;

use arcana_core::{Reading, ReadingConfig, SpreadKind};

use crate::prompt;
use crate::render::RenderStyle;

/// Options for the `draw` command.
pub struct DrawOptions {
    pub spread: Option<String>,
    pub reversals: bool,
    pub seed: Option<u64>,
    pub question: Option<String>,
    pub style: Option<RenderStyle>,
    pub json: bool,
}

pub fn run(opts: DrawOptions) -> Result<(), String> {
    let (spread, allow_reversals, question) = match opts.spread {
        Some(spread) => (spread, opts.reversals, opts.question),
        None => {
            let stdin = io::stdin();
            let answers = prompt::ask(&mut stdin.lock(), &mut io::stderr())
                .map_err(|e| format!("failed to read answers: {e}"))?;
            (
                answers.spread,
                opts.reversals || answers.allow_reversals,
                opts.question.or(answers.question),
            )
        }
    };

    let kind = spread.parse::<SpreadKind>().map_err(|e| e.to_string())?;
    let mut config = ReadingConfig::default()
        .with_spread(kind)
        .with_reversals(allow_reversals);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    let mut reading = config.compose().map_err(|e| e.to_string())?;
    if let Some(question) = question.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        reading = reading.with_question(question);
    }

    if opts.json {
        let json = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let style = opts.style.unwrap_or_else(RenderStyle::detect);
    print_reading(&reading, style).map_err(|e| e.to_string())
}

fn print_reading(reading: &Reading, style: RenderStyle) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(question) = &reading.question {
        writeln!(out, "  {} {question}", "Question:".bold())?;
    }
    writeln!(out, "\n  {} ({})", "Your cards".bold(), reading.spread)?;

    let renderer = style.renderer();
    for placement in &reading.placements {
        renderer.render(&mut out, placement)?;
    }
    out.flush()
}
