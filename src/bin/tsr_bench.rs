//! Compare tinyseries text size and speed against JSON for synthetic series.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;
use tinyseries::{compress, decompress};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeriesKind {
    /// Epoch seconds with random 0-599s steps, precision 0
    Timestamps,
    /// Random walk with 0-1000 steps, precision 3
    Floats,
    /// Slowly varying sensor readings, precision 1
    Sensor,
}

#[derive(Parser)]
#[command(name = "tsr-bench")]
#[command(about = "Benchmark tinyseries compression against JSON")]
struct Args {
    /// Series to generate (all kinds when omitted)
    #[arg(short, long, value_enum)]
    kind: Option<SeriesKind>,

    /// Number of values per series
    #[arg(short, long, default_value = "10000")]
    count: usize,

    /// Encode/decode iterations for timing
    #[arg(short, long, default_value = "100")]
    iterations: u32,

    /// RNG seed
    #[arg(long, default_value = "1")]
    seed: u64,
}

fn generate(kind: SeriesKind, count: usize, rng: &mut StdRng) -> (Vec<f64>, i32) {
    let mut series = Vec::with_capacity(count);
    match kind {
        SeriesKind::Timestamps => {
            let mut current = 946_684_800.0;
            for _ in 0..count {
                series.push(current);
                current += f64::from(rng.random_range(0..600u32));
            }
            (series, 0)
        }
        SeriesKind::Floats => {
            let mut current = 7825.670_970_456_586_5;
            for _ in 0..count {
                series.push(current);
                current += rng.random::<f64>() * 1000.0;
            }
            (series, 3)
        }
        SeriesKind::Sensor => {
            let mut current = 21.5;
            for _ in 0..count {
                series.push(current);
                current += rng.random_range(-0.3..=0.3);
            }
            (series, 1)
        }
    }
}

fn run(kind: SeriesKind, args: &Args, rng: &mut StdRng) -> Result<(), String> {
    let (series, precision) = generate(kind, args.count, rng);

    let json_size = serde_json::to_string(&series).map_err(|e| e.to_string())?.len();
    let text = compress(&series, precision).map_err(|e| e.to_string())?;
    let decoded = decompress(&text).map_err(|e| e.to_string())?;

    let bound = 0.5 / 10f64.powi(precision) + 1e-6;
    if let Some((i, (d, s))) = decoded
        .iter()
        .zip(series.iter())
        .enumerate()
        .find(|(_, (d, s))| (*d - *s).abs() > bound)
    {
        return Err(format!("{kind:?}: value {i} decoded as {d}, expected {s}"));
    }

    let start = Instant::now();
    for _ in 0..args.iterations {
        black_box(compress(black_box(&series), precision).map_err(|e| e.to_string())?);
    }
    let encode_time = start.elapsed();

    let start = Instant::now();
    for _ in 0..args.iterations {
        black_box(decompress(black_box(&text)).map_err(|e| e.to_string())?);
    }
    let decode_time = start.elapsed();

    let total = (series.len() as f64) * f64::from(args.iterations.max(1));
    let ratio = ((json_size as f64 - text.len() as f64) * 100.0) / json_size as f64;

    println!("=== {kind:?} ({} values, precision {precision}) ===", series.len());
    println!("  JSON:        {json_size} bytes");
    println!("  tinyseries:  {} bytes ({:.2} bytes/value)", text.len(), text.len() as f64 / series.len().max(1) as f64);
    println!("  Reduction:   {ratio:.2}%");
    println!("  Encode:      {:.1} M values/s", total / encode_time.as_secs_f64() / 1e6);
    println!("  Decode:      {:.1} M values/s", total / decode_time.as_secs_f64() / 1e6);

    Ok(())
}

fn main() {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![SeriesKind::Timestamps, SeriesKind::Floats, SeriesKind::Sensor],
    };

    for kind in kinds {
        if let Err(e) = run(kind, &args, &mut rng) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
