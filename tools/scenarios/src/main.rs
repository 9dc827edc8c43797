//! Surge-scenario statistics.
//! From paired sample rows (reference variable first, then one column per
//! scenario variable) computes return-period probability buckets, the
//! conditional normal parameters of each scenario column at an observed
//! reference value, and a monotone-corrected conditional stage curve, with
//! optional seeded draws per column.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use surge_core::io::{load_series, save_text, TextData};
use surge_core::stats::{conditional_normal_parameters, make_non_decreasing, return_probability};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "scenarios", about = "Surge scenario statistics from paired sample series")]
struct Args {
    /// Whitespace-delimited sample rows: reference value first, then one
    /// value per scenario column.
    #[arg(short, long)]
    samples: String,

    /// Observed value of the reference variable.
    #[arg(short = 'x', long)]
    observed: f64,

    /// Number of return-period buckets.
    #[arg(short = 'n', long, default_value_t = 14)]
    buckets: usize,

    /// Increment between return periods.
    #[arg(short, long, default_value_t = 10.0)]
    increment: f64,

    /// Draws per scenario column (0 disables sampling).
    #[arg(short, long, default_value_t = 0)]
    draws: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory.
    #[arg(short, long, default_value = "data/scenarios")]
    output: String,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let rows = load_series(&args.samples).with_context(|| format!("loading {}", args.samples))?;
    if rows.is_empty() {
        bail!("{}: no sample rows", args.samples);
    }
    let width = rows[0].len();
    if width < 2 {
        bail!(
            "{}: need a reference column plus at least one scenario column",
            args.samples
        );
    }
    if let Some(bad) = rows.iter().position(|r| r.len() != width) {
        bail!(
            "{}: row {} has {} values, expected {width}",
            args.samples,
            bad + 1,
            rows[bad].len()
        );
    }

    // Column-major split: reference first, scenario columns after.
    let reference: Vec<f64> = rows.iter().map(|r| r[0]).collect();
    let columns: Vec<Vec<f64>> = (1..width)
        .map(|c| rows.iter().map(|r| r[c]).collect())
        .collect();

    eprintln!(
        "{} samples, {} scenario columns, reference observed at {}",
        rows.len(),
        columns.len(),
        args.observed
    );

    let probability = return_probability(args.buckets, args.increment);
    let params = conditional_normal_parameters(&columns, &reference, args.observed);
    let means: Vec<f64> = params.iter().map(|p| p.mean).collect();
    let stage_curve = make_non_decreasing(&means);

    eprintln!("\n{:<8} {:>12} {:>12} {:>12}", "Column", "CondMean", "CondStd", "Curve");
    for (i, (p, curve)) in params.iter().zip(&stage_curve).enumerate() {
        eprintln!("{:<8} {:>12.4} {:>12.4} {curve:>12.4}", i + 1, p.mean, p.std);
    }
    let bucket_sum: f64 = probability.iter().sum();
    eprintln!("\n{} return-period buckets (sum {bucket_sum:.6})", probability.len());

    let out_dir = Path::new(&args.output);
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", args.output))?;
    save_text(out_dir.join("return_probability.txt"), &TextData::Series(&probability))?;
    save_text(out_dir.join("stage_curve.txt"), &TextData::Series(&stage_curve))?;

    let mean_std: Vec<Vec<f64>> = params.iter().map(|p| vec![p.mean, p.std]).collect();
    save_text(out_dir.join("conditional.txt"), &TextData::Grid(&mean_std))?;

    if args.draws > 0 {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let draws: Vec<Vec<f64>> = params
            .iter()
            .map(|p| (0..args.draws).map(|_| p.sample(&mut rng)).collect())
            .collect();
        save_text(out_dir.join("draws.txt"), &TextData::Grid(&draws))?;
        eprintln!("{} draws per column -> draws.txt", args.draws);
    }

    eprintln!("Done. Outputs in {}.", args.output);
    Ok(())
}
