//! Calibration harness: map travel angle to realized movement speed.
//!
//! Sweeps destinations across a quarter-grid around a fixed start, runs a
//! few seeded trials per destination, and buckets measured-over-expected
//! cost by normalized slope. Output is one plain-text row per slope bucket
//! plus a JSON summary, for eyeballing regressions in the diagonal
//! correction.
//!
//! Usage: `slope_map [kind] [grid|trig] [resolution]`

use std::collections::BTreeMap;
use std::env;
use std::fs;

use anyhow::{Context, bail};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use prowl_core::{DistanceMetric, Position, SimConfig, normalized_slope};
use prowl_sim::trials::expected_course_cost;
use prowl_sim::{RunningStats, Session};

const SWEEP_EXTENT: i32 = 100;
const MIN_DISTANCE: i32 = 5;
const TRIALS_PER_DESTINATION: u64 = 3;
const RUN_SEED: u64 = 0x510e_caff;

#[derive(Serialize)]
struct Summary<'a> {
    kind: &'a str,
    metric: String,
    buckets: usize,
    samples: u32,
    worst_deviation: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let kind = args.first().map(String::as_str).unwrap_or("hound");
    let metric: DistanceMetric = match args.get(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("unknown metric `{raw}`, expected `grid` or `trig`"))?,
        None => DistanceMetric::Grid,
    };
    let resolution: usize = match args.get(2) {
        Some(raw) => raw.parse().context("resolution must be a positive integer")?,
        None => 4,
    };
    if resolution == 0 {
        bail!("resolution must be a positive integer");
    }

    let session = Session::new(SimConfig::new(metric), RUN_SEED);
    let start = Position::new(50, 50, 0);

    let mut buckets: BTreeMap<u32, RunningStats> = BTreeMap::new();
    let mut samples = 0u32;
    for x in (0..=SWEEP_EXTENT).step_by(resolution) {
        for y in (0..=SWEEP_EXTENT).step_by(resolution) {
            let destination = Position::new(x, y, 0);
            let distance = DistanceMetric::Grid.tile_distance(start, destination);
            // Very short courses are dominated by quantization noise.
            if distance < MIN_DISTANCE {
                continue;
            }
            let slope = normalized_slope(start, destination);
            let expected = expected_course_cost(metric, start, destination);
            let bucket = (slope * 100.0).round() as u32;
            for trial in 0..TRIALS_PER_DESTINATION {
                let course = (u64::from(destination.x.unsigned_abs()) << 32)
                    | (u64::from(destination.y.unsigned_abs()) << 8)
                    | trial;
                let moves = session.moves_to_destination(kind, start, destination, course)?;
                buckets
                    .entry(bucket)
                    .or_insert_with(RunningStats::new)
                    .add(f64::from(moves) / expected);
                samples += 1;
            }
        }
    }

    let mut rows = String::new();
    let mut worst = 0.0f64;
    for (bucket, stats) in &buckets {
        rows.push_str(&format!("{} {:.4}\n", bucket, stats.avg()));
        worst = worst.max((stats.avg() - 1.0).abs());
    }

    let data_path = format!("slope_map_{metric}_{kind}.txt");
    fs::write(&data_path, rows).with_context(|| format!("writing {data_path}"))?;

    let summary = Summary {
        kind,
        metric: metric.to_string(),
        buckets: buckets.len(),
        samples,
        worst_deviation: worst,
    };
    let summary_path = format!("slope_map_{metric}_{kind}.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("writing {summary_path}"))?;

    tracing::info!(
        kind,
        %metric,
        buckets = buckets.len(),
        samples,
        worst_deviation = worst,
        "slope map written"
    );
    Ok(())
}
