//! Benchmarks for word-search generation.
//!
//! Measures the complete generation process (placement plus letter fill)
//! over a fixed word list, using three fixed seeds so each run measures the
//! same cases while covering different placement orders.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use letterlace_core::{DifficultyTier, Direction, PuzzleSeed, WordEntry};
use letterlace_wordsearch::{WordSearchConfig, WordSearchGenerator};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn sample_words() -> Vec<WordEntry> {
    [
        "GUITAR", "DRUMS", "BASS", "RIFF", "AMP", "SOLO", "TUNE", "STAGE", "BAND", "TOUR",
        "SONG", "ROCK",
    ]
    .into_iter()
    .map(|word| WordEntry::new(word, "clue", "music", DifficultyTier::Medium))
    .collect()
}

fn bench_all_directions(c: &mut Criterion) {
    let generator = WordSearchGenerator::new(WordSearchConfig::new(12).with_weighted_fill(true));
    let words = sample_words();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("wordsearch_all_directions", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_forward_directions(c: &mut Criterion) {
    let config = WordSearchConfig::new(12).with_directions(Direction::FORWARD);
    let generator = WordSearchGenerator::new(config);
    let words = sample_words();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("wordsearch_forward_directions", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_all_directions,
        bench_forward_directions
);
criterion_main!(benches);
