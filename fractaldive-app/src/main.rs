mod config;
mod error;
mod sink;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use fractaldive_explore::{DetailMetric, Discard, Explorer, SeededOffsets, Steering, TickOutcome};
use fractaldive_render::FrameGenerator;

use config::AppConfig;
use error::Result;
use sink::SnapshotSink;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    ColorVariety,
    Entropy,
    EdgeDensity,
}

/// Autonomously zoom into the Mandelbrot set, panning towards detail.
#[derive(Debug, Parser)]
#[command(name = "fractaldive", version, about)]
struct Args {
    /// JSON config file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Number of exploration ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Seed for probe offsets, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Pace ticks to this many frames per second instead of running flat out.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    fps: Option<u32>,

    /// Detail meter driving the explorer.
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,

    /// Drift towards the busiest tile of a 5×5 grid instead of probing.
    #[arg(long)]
    tile_grid: bool,

    /// Write presented frames as PNG snapshots into this directory.
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Keep one snapshot out of every N presented frames.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    snapshot_every: u64,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(metric) = self.metric {
            config.metric = match (metric, config.metric) {
                (MetricArg::ColorVariety, current @ DetailMetric::ColorVariety { .. }) => current,
                (MetricArg::ColorVariety, _) => DetailMetric::default(),
                (MetricArg::Entropy, _) => DetailMetric::Entropy,
                (MetricArg::EdgeDensity, _) => DetailMetric::EdgeDensity,
            };
        }
        if self.tile_grid && !matches!(config.explorer.steering, Steering::TileGrid { .. }) {
            config.explorer.steering = Steering::tile_grid();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Outcome counts for the end-of-run summary.
#[derive(Debug, Default)]
struct Tally {
    outcomes: BTreeMap<&'static str, u64>,
    presented: u64,
    underruns: u64,
}

impl Tally {
    fn record(&mut self, outcome: &TickOutcome) {
        *self.outcomes.entry(outcome.kind()).or_default() += 1;
        if outcome.presented() {
            self.presented += 1;
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);

    let viewport = config.viewport()?;
    let params = config.params()?;
    let palette = config.palette()?;
    let home = config.home.transform(&viewport)?;
    let generator = FrameGenerator::new(viewport, params, palette);
    let offsets = match config.seed {
        Some(seed) => SeededOffsets::new(seed),
        None => SeededOffsets::from_entropy(),
    };
    let metric = config.metric()?;
    let mut explorer = Explorer::new(config.explorer.clone(), home, generator, metric, offsets)?;

    let mut snapshots = match &args.snapshot_dir {
        Some(dir) => Some(SnapshotSink::new(dir, args.snapshot_every, params.max_iterations)?),
        None => None,
    };

    info!(
        width = viewport.width(),
        height = viewport.height(),
        max_iterations = params.max_iterations,
        metric = metric.name(),
        steering = ?config.explorer.steering,
        seed = ?config.seed,
        ticks = args.ticks,
        "Starting FractalDive"
    );

    match snapshots.as_mut() {
        Some(sink) => explorer.render_initial(sink),
        None => explorer.render_initial(&mut Discard),
    }

    let budget = args.fps.map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)));
    let mut tally = Tally {
        presented: 1,
        ..Default::default()
    };
    let started = Instant::now();
    let mut deadline = started;

    for tick in 1..=args.ticks {
        let outcome = match snapshots.as_mut() {
            Some(sink) => {
                sink.set_tick(tick);
                explorer.tick(sink)
            }
            None => explorer.tick(&mut Discard),
        };
        tally.record(&outcome);

        if let Some(budget) = budget {
            deadline += budget;
            let now = Instant::now();
            if now > deadline {
                tally.underruns += 1;
                warn!(
                    tick,
                    overrun_ms = (now - deadline).as_secs_f64() * 1000.0,
                    "Frame underrun"
                );
                deadline = now;
            } else {
                thread::sleep(deadline - now);
            }
        }
    }

    let view = explorer.view();
    info!(
        ticks = explorer.ticks(),
        presented = tally.presented,
        underruns = tally.underruns,
        outcomes = ?tally.outcomes,
        zoom = view.zoom(),
        center = %view.center(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "Exploration finished"
    );
    if let Some(sink) = &snapshots {
        info!(written = sink.written(), "Snapshots saved");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let args = Args::try_parse_from(["fractaldive"]).unwrap();
        assert_eq!(args.ticks, 600);
        assert_eq!(args.snapshot_every, 30);
        assert!(args.fps.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn cli_overrides_config() {
        let args = Args::try_parse_from([
            "fractaldive",
            "--width",
            "256",
            "--seed",
            "12",
            "--metric",
            "edge-density",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.width, 256);
        assert_eq!(config.height, 512);
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.metric, DetailMetric::EdgeDensity);
        assert_eq!(config.explorer.steering, Steering::Probe);
    }

    #[test]
    fn color_variety_flag_keeps_configured_weight() {
        let args = Args::try_parse_from(["fractaldive", "--metric", "color-variety"]).unwrap();
        let mut config = AppConfig::default();
        config.metric = DetailMetric::ColorVariety { variety_weight: 0.8 };
        args.apply(&mut config);
        assert_eq!(
            config.metric,
            DetailMetric::ColorVariety { variety_weight: 0.8 }
        );
    }

    #[test]
    fn tile_grid_flag_keeps_configured_grid() {
        let args = Args::try_parse_from(["fractaldive", "--tile-grid"]).unwrap();
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.explorer.steering, Steering::tile_grid());

        let custom = Steering::TileGrid {
            columns: 8,
            rows: 4,
            pan_divisor: 10,
        };
        config.explorer.steering = custom;
        args.apply(&mut config);
        assert_eq!(config.explorer.steering, custom);
    }

    #[test]
    fn invalid_metric_weight_fails_the_run() {
        let path = std::env::temp_dir().join(format!(
            "fractaldive_main_weight_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"metric": {"kind": "color_variety", "variety_weight": 3.0}}"#,
        )
        .unwrap();
        let args = Args::try_parse_from([
            "fractaldive",
            "--config",
            path.to_str().unwrap(),
            "--ticks",
            "1",
        ])
        .unwrap();
        let result = run(args);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(error::AppError::Explore(_))));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Args::try_parse_from(["fractaldive", "--fps", "0"]).is_err());
    }

    #[test]
    fn short_run_completes() {
        let args = Args::try_parse_from([
            "fractaldive",
            "--width",
            "32",
            "--height",
            "24",
            "--ticks",
            "5",
            "--seed",
            "1",
        ])
        .unwrap();
        assert!(run(args).is_ok());
    }

    #[test]
    fn short_tile_grid_run_completes() {
        let args = Args::try_parse_from([
            "fractaldive",
            "--width",
            "40",
            "--height",
            "30",
            "--ticks",
            "5",
            "--tile-grid",
        ])
        .unwrap();
        assert!(run(args).is_ok());
    }
}
