use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use apriori_pairs::{mine, BasketFile};

/// Count frequent item pairs in a basket file with the two-pass A-Priori
/// algorithm, printing both the triangular-array and the triples view.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Basket file: one basket per line, whitespace-separated item ids
    input: PathBuf,

    /// Support threshold as a percentage of the basket count
    #[arg(value_parser = clap::value_parser!(u32).range(0..=100))]
    threshold: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = BasketFile::new(&args.input);
    let counts = mine(&source, args.threshold)
        .with_context(|| format!("mining {} failed", args.input.display()))?;

    println!("\nApproach 1: One dimensional triangular array\n");
    println!("PAIR  \tOCCURRENCES");
    for (a, b, count) in counts.triangular_entries() {
        println!("{},{}  \t{}", a, b, count);
    }

    println!("\nApproach 2: Keep triples with count\n");
    println!("PAIR  \tOCCURRENCES");
    for (a, b, count) in counts.sparse_entries() {
        println!("{},{}  \t{}", a, b, count);
    }

    Ok(())
}
