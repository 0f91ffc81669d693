//! Writes a sample track (`inner.txt` / `outer.txt`) for trying the viewer.

use std::f64::consts::TAU;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "generate_track")]
#[command(about = "Generate inner/outer boundary files for a jittered oval track")]
struct Cli {
    /// Points per boundary
    #[arg(long, default_value_t = 400)]
    points: usize,
    /// Output directory
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Track width in map units
    #[arg(long, default_value_t = 0.0004)]
    width: f64,
    /// Noise seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Seeded splitmix64 stream used only for boundary jitter.
struct Jitter(u64);

impl Jitter {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[-amplitude, amplitude)`.
    fn sample(&mut self, amplitude: f64) -> f64 {
        (self.next_unit() * 2.0 - 1.0) * amplitude
    }
}

/// Centre line: an oval with a pinch, in lon/lat-like units.
fn centre_line(t: f64) -> (f64, f64) {
    let lon = 19.94 + 0.004 * t.cos() + 0.0008 * (2.0 * t).sin();
    let lat = 50.06 + 0.0025 * t.sin();
    (lon, lat)
}

/// Boundary at signed `offset` left of the centre line, closed (first point
/// repeated at the end).
fn boundary(points: usize, offset: f64, jitter: &mut Jitter) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = (0..points)
        .map(|i| {
            let t = i as f64 / points as f64 * TAU;
            let (x0, y0) = centre_line(t);
            let (x1, y1) = centre_line(t + 1e-4);
            let (dx, dy) = (x1 - x0, y1 - y0);
            let len = (dx * dx + dy * dy).sqrt();
            let (nx, ny) = (-dy / len, dx / len);
            let noise = jitter.sample(offset.abs() * 0.05);
            (x0 + nx * (offset + noise), y0 + ny * (offset + noise))
        })
        .collect();
    if let Some(&first) = out.first() {
        out.push(first);
    }
    out
}

fn write_boundary(path: &PathBuf, points: &[(f64, f64)]) -> Result<()> {
    let mut text = String::new();
    for (x, y) in points {
        writeln!(text, "{x:.8},{y:.8},0").context("formatting record")?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut jitter = Jitter(cli.seed);

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let half = cli.width / 2.0;
    for (name, offset) in [("inner.txt", half), ("outer.txt", -half)] {
        let path = cli.out_dir.join(name);
        let points = boundary(cli.points, offset, &mut jitter);
        write_boundary(&path, &points)?;
        log::info!("Wrote {} points to {}", points.len(), path.display());
    }

    println!(
        "Wrote inner.txt and outer.txt ({} points each) to {}",
        cli.points + 1,
        cli.out_dir.display()
    );
    Ok(())
}
