//! Example demonstrating crossword generation.
//!
//! Generates a puzzle from words passed on the command line (or a built-in
//! sample list), prints the grid, the numbered clues, and the seed.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_crossword
//! cargo run --example generate_crossword -- --grid-size 11 GUITAR DRUMS BASS
//! cargo run --example generate_crossword -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use letterlace_core::{DifficultyTier, PuzzleSeed, WordEntry};
use letterlace_crossword::{ClueDirection, CrosswordConfig, CrosswordGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the square grid.
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    grid_size: usize,

    /// Stop retrying once this many words are placed.
    #[arg(long, value_name = "COUNT", default_value_t = 6)]
    min_words: usize,

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
        .map(|word| WordEntry::new(word, format!("Clue for {word}"), "music", DifficultyTier::Medium))
        .collect()
    } else {
        args.words
            .iter()
            .map(|word| {
                WordEntry::new(word.clone(), format!("Clue for {word}"), "custom", DifficultyTier::Medium)
            })
            .collect()
    };

    let generator = CrosswordGenerator::new(CrosswordConfig::new(args.grid_size, args.min_words));
    let puzzle = match generator.generate_with_seed(&words, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Grid ({} of {} words placed):", puzzle.placed_count, words.len());
    print!("{}", puzzle.grid);
    println!();
    for direction in ClueDirection::ALL {
        println!("{direction}:");
        for clue in puzzle.clues_in(direction) {
            println!("  {}. {} ({})", clue.number, clue.clue, clue.answer);
        }
        println!();
    }
}
