//! CLI frontend for the Arcana tarot engine.

mod commands;
mod logging;
mod prompt;
mod render;

use std::process;

use clap::{Parser, Subcommand};

use commands::draw::DrawOptions;
use render::RenderStyle;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — draw tarot spreads in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log draw details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw cards and lay them out in a spread
    Draw {
        /// Spread to lay: single, three, five, celticCross (asks when omitted)
        #[arg(short, long)]
        spread: Option<String>,

        /// Let cards land reversed
        #[arg(short, long)]
        reversals: bool,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Question to show alongside the reading
        #[arg(short, long)]
        question: Option<String>,

        /// Output style (default: detected from the terminal)
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available spreads
    Spreads,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Draw {
            spread,
            reversals,
            seed,
            question,
            style,
            json,
        } => commands::draw::run(DrawOptions {
            spread,
            reversals,
            seed,
            question,
            style,
            json,
        }),
        Commands::Spreads => commands::spreads::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
