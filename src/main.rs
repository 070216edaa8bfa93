use std::io::{self, Write};

use anyhow::{Context, Result};
use bubble_sort::sorting::*;
use clap::Parser;

const SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Bubble sort a list of numbers, or run the built-in demo cases.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Numbers to sort. Without any, the demo cases are run
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Parse values as floats (NaN is rejected as incomparable)
    #[arg(long)]
    float: bool,

    /// Print passes, comparisons and swaps
    #[arg(long, conflicts_with = "float")]
    stats: bool,
}

fn demo_cases() -> Vec<Vec<i64>> {
    vec![
        vec![5, 2, 8, 6, 1, 9, 4],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![42],
        vec![],
    ]
}

fn parse_values<T>(raw: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.iter()
        .map(|s| s.parse::<T>().with_context(|| format!("invalid number {:?}", s)))
        .collect()
}

fn write_stats(out: &mut impl Write, stats: &SortStats) -> Result<()> {
    writeln!(
        out,
        "  passes: {}, comparisons: {}, swaps: {}, early exit: {}",
        stats.passes, stats.comparisons, stats.swaps, stats.early_exit
    )?;
    Ok(())
}

fn run_demo(cli: &Cli, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Original array: {:?}", SAMPLE)?;
    writeln!(out, "Sorted array:   {:?}", bubble_sorted(&SAMPLE))?;

    writeln!(out)?;
    writeln!(out, "More test cases:")?;
    for (i, case) in demo_cases().into_iter().enumerate() {
        let mut sorted = case.clone();
        let stats = bubble_sort_stats(&mut sorted);
        log::debug!("case {}: {:?}", i + 1, stats);
        writeln!(out, "Test {}: {:?} -> {:?}", i + 1, case, sorted)?;
        if cli.stats {
            write_stats(out, &stats)?;
        }
    }
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.values.is_empty() {
        log::info!("no values given, running demo cases");
        return run_demo(cli, out);
    }

    if cli.float {
        let mut values: Vec<f64> = parse_values(&cli.values)?;
        writeln!(out, "{:?}", values)?;
        try_bubble_sort(&mut values).context("sorting failed")?;
        writeln!(out, "{:?}", values)?;
    } else {
        let mut values: Vec<i64> = parse_values(&cli.values)?;
        writeln!(out, "{:?}", values)?;
        let stats = bubble_sort_stats(&mut values);
        writeln!(out, "{:?}", values)?;
        if cli.stats {
            write_stats(out, &stats)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
