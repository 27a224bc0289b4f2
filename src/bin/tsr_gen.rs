//! Generate sample tinyseries text, or compress a CSV column.

use clap::Parser;
use rand::Rng;
use std::f64::consts::PI;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tinyseries::{compress_with, decompress, Precision};

#[derive(Parser)]
#[command(name = "tsr-gen")]
#[command(about = "Generate sample tinyseries compressed text")]
#[command(after_help = "CSV FORMAT:\n  \
    When using --csv, the file should contain one value per line, or\n  \
    timestamp,value pairs (the last column is used)\n  \
    - Lines starting with # are comments\n  \
    - Empty lines are skipped\n  \
    - A first line that does not parse as a number is treated as header\n\n\
PRECISION:\n  \
    0 to 10 decimal digits (default 3)")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Input CSV file (overrides random generation)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of values to generate (default: 288 = 24h at 5-min intervals)
    #[arg(short, long, default_value = "288")]
    values: usize,

    /// Decimal digits to keep
    #[arg(short, long, default_value = "3")]
    precision: i32,

    /// Include occasional large jumps
    #[arg(long)]
    spikes: bool,

    /// Base value of the generated signal
    #[arg(long, default_value = "22.0")]
    base: f64,
}

/// Read one value per line from a CSV file
fn read_csv(path: &PathBuf) -> Result<Vec<f64>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open CSV: {e}"))?;
    let reader = BufReader::new(file);
    let mut values = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = trimmed.rsplit(',').next().unwrap_or(trimmed).trim();
        match field.parse::<f64>() {
            Ok(value) => values.push(value),
            // Header line
            Err(_) if values.is_empty() && line_num == 0 => continue,
            Err(e) => {
                return Err(format!("Line {}: invalid value '{}': {}", line_num + 1, field, e));
            }
        }
    }

    Ok(values)
}

/// Generate a daily temperature-like curve with jitter
fn generate_values(args: &Args) -> Vec<f64> {
    let mut rng = rand::rng();
    let mut values = Vec::with_capacity(args.values);

    for i in 0..args.values {
        // 5-minute samples, min at 5am, max at 3pm
        let hour = (i as f64 * 300.0 / 3600.0) % 24.0;
        let variation = 4.0 * ((hour - 5.0) * PI / 12.0 - PI / 2.0).sin();
        let jitter: f64 = rng.random_range(-0.5..=0.5);

        let mut value = args.base + variation + jitter;

        // Occasional spike if enabled (roughly 2% chance)
        if args.spikes && rng.random_range(0..100) < 2 {
            value += rng.random_range(-10.0..=10.0);
        }

        values.push(value);
    }

    values
}

fn run(args: &Args) -> Result<(), String> {
    let precision = Precision::new(args.precision).map_err(|e| e.to_string())?;

    let (values, from_csv) = match &args.csv {
        Some(path) => {
            let values = read_csv(path)?;
            println!("Reading {} entries from CSV...", values.len());
            (values, true)
        }
        None => (generate_values(args), false),
    };

    let text = compress_with(&values, precision).map_err(|e| e.to_string())?;
    fs::write(&args.output, &text).map_err(|e| format!("Failed to write output: {e}"))?;

    // Sanity check that the file decodes back to the same number of values
    let decoded = decompress(&text).map_err(|e| e.to_string())?;
    if decoded.len() != values.len() {
        return Err(format!("decoded {} values, expected {}", decoded.len(), values.len()));
    }

    if from_csv {
        println!("Encoded {} values from CSV", values.len());
    } else {
        println!("Generated {} values", values.len());
    }
    println!("Output: {} ({} bytes, precision {precision})", args.output.display(), text.len());
    if !text.is_empty() {
        let json_size = serde_json::to_string(&decoded).map_err(|e| e.to_string())?.len();
        println!("Compression vs JSON: {:.1}x", json_size as f64 / text.len() as f64);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
