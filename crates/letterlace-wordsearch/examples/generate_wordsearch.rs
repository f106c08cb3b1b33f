//! Example demonstrating word-search generation.
//!
//! Generates a puzzle from words passed on the command line (or a built-in
//! sample list), prints the grid, the placed words, and the seed.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_wordsearch
//! cargo run --example generate_wordsearch -- --cols 15 --weighted GUITAR DRUMS BASS
//! cargo run --example generate_wordsearch -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use letterlace_core::{DifficultyTier, Direction, PuzzleSeed, WordEntry};
use letterlace_wordsearch::{WordSearchConfig, WordSearchGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of grid columns.
    #[arg(long, value_name = "COUNT", default_value_t = 12)]
    cols: usize,

    /// Number of grid rows (defaults to --cols).
    #[arg(long, value_name = "COUNT")]
    rows: Option<usize>,

    /// Restrict placement to forward-reading directions.
    #[arg(long)]
    forward_only: bool,

    /// Fill empty cells with English-frequency-weighted letters.
    #[arg(long)]
    weighted: bool,

    /// Seed as 64 hex chars; omit for a random puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Words to place (defaults to a sample list).
    #[arg(value_name = "WORD")]
    words: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed.as_deref().map(str::parse) {
        None => PuzzleSeed::random(),
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        }
    };

    let words: Vec<WordEntry> = if args.words.is_empty() {
        [
            "GUITAR", "DRUMS", "BASS", "RIFF", "AMP", "SOLO", "TUNE", "STAGE", "BAND", "TOUR",
            "SONG", "ROCK",
        ]
        .into_iter()
        .map(|word| WordEntry::new(word, "", "music", DifficultyTier::Medium))
        .collect()
    } else {
        args.words
            .iter()
            .map(|word| WordEntry::new(word.clone(), "", "custom", DifficultyTier::Medium))
            .collect()
    };

    let mut config = WordSearchConfig::new(args.cols).with_weighted_fill(args.weighted);
    if let Some(rows) = args.rows {
        config = config.with_rows(rows);
    }
    if args.forward_only {
        config = config.with_directions(Direction::FORWARD);
    }

    let generator = WordSearchGenerator::new(config);
    let puzzle = generator.generate_with_seed(&words, seed);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Grid:");
    print!("{}", puzzle.grid);
    println!();
    println!("Placed {} of {} words:", puzzle.placements.len(), words.len());
    for placement in &puzzle.placements {
        println!(
            "  {} at {} going {:?}",
            placement.word, placement.start, placement.direction
        );
    }
}
