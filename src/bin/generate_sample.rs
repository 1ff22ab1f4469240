//! Writes a synthetic `combined_data.csv` so the explorer can be run
//! without the real index archive.

use std::f64::consts::PI;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(about = "Generate a synthetic VCI/TCI/VHI dataset")]
struct Cli {
    /// Output CSV path
    #[arg(long, default_value = "combined_data.csv")]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// First year to generate
    #[arg(long, default_value_t = 1982)]
    from_year: i32,

    /// Last year to generate (inclusive)
    #[arg(long, default_value_t = 2023)]
    to_year: i32,
}

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Week")]
    week: u32,
    area: u32,
    #[serde(rename = "SMN")]
    smn: f64,
    #[serde(rename = "SMT")]
    smt: f64,
    #[serde(rename = "VCI")]
    vci: f64,
    #[serde(rename = "TCI")]
    tci: f64,
    #[serde(rename = "VHI")]
    vhi: f64,
}

const AREAS: u32 = 27;
const WEEKS: u32 = 52;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Seasonal cycle peaking mid-summer, in `[0, 1]`.
fn season(week: u32) -> f64 {
    0.5 - 0.5 * (2.0 * PI * f64::from(week) / f64::from(WEEKS)).cos()
}

fn sample_row(rng: &mut SimpleRng, year: i32, week: u32, area: u32, drought: f64) -> Row {
    let s = season(week);
    let smn = (0.05 + 0.35 * s + rng.gauss(0.0, 0.02)).max(0.0);
    let smt = 260.0 + 35.0 * s + rng.gauss(0.0, 1.5) + f64::from(area % 5);
    let vci = (55.0 - drought * 30.0 + rng.gauss(0.0, 12.0)).clamp(0.0, 100.0);
    let tci = (50.0 - drought * 25.0 + rng.gauss(0.0, 15.0)).clamp(0.0, 100.0);
    let vhi = 0.5 * vci + 0.5 * tci;
    let round2 = |v: f64| (v * 100.0).round() / 100.0;
    Row {
        year,
        week,
        area,
        smn: (smn * 1000.0).round() / 1000.0,
        smt: round2(smt),
        vci: round2(vci),
        tci: round2(tci),
        vhi: round2(vhi),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.from_year > cli.to_year {
        bail!("--from-year {} is after --to-year {}", cli.from_year, cli.to_year);
    }

    let mut rng = SimpleRng::new(cli.seed);
    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    let mut rows = 0usize;
    for area in 1..=AREAS {
        for year in cli.from_year..=cli.to_year {
            // Some years are dry across the whole season.
            let drought = rng.next_f64().powi(3);
            for week in 1..=WEEKS {
                writer
                    .serialize(sample_row(&mut rng, year, week, area, drought))
                    .context("writing CSV row")?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} rows ({AREAS} areas, {}-{}) to {}",
        cli.from_year,
        cli.to_year,
        cli.output.display()
    );
    Ok(())
}
