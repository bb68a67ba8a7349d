//! Command-line entry point: writes the strategy presentation.
//!
//! ```sh
//! pitch-deck
//! pitch-deck --output deck.pptx --charts-dir backtesting/charts/
//! pitch-deck --placeholders
//! ```

use clap::Parser;
use pitch_deck::deck::{self, DeckConfig, config};
use std::path::PathBuf;
use std::process;

/// Generate the FE571 basket pairs trading strategy presentation
#[derive(Parser, Debug)]
#[command(name = "pitch-deck", version)]
struct Args {
    /// Path of the .pptx file to write
    #[arg(short, long, value_name = "OUTPUT", default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory holding the exported chart images
    #[arg(long, value_name = "DIR", default_value = config::DEFAULT_CHARTS_DIR)]
    charts_dir: PathBuf,

    /// Render chart slides as "[INSERT: ...]" placeholders instead of embedding images
    #[arg(long)]
    placeholders: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DeckConfig::new(args.output, args.charts_dir).with_placeholders(args.placeholders);

    match deck::generate(&config) {
        Ok(slides) => {
            println!("Presentation saved to: {}", config.output().display());
            println!("Total slides: {}", slides);
        },
        Err(err) => {
            log::error!("generation failed: {}", err);
            process::exit(1);
        },
    }
}
