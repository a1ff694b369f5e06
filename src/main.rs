use std::collections::HashMap;
use std::{env, fs, process};

use anyhow::Context;
use nalgebra::Point2;

use liftcheck::config::Config;
use liftcheck::landmark::{LandmarkIdx, LandmarkSet};

fn main() -> anyhow::Result<()> {
    liftcheck::init_logger!();

    let mut args = env::args_os().skip(1);
    let Some(landmark_path) = args.next() else {
        eprintln!("usage: liftcheck <landmarks.json> [config.toml]");
        process::exit(1);
    };

    let config = match args.next() {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.to_string_lossy()))?,
        None => Config::default(),
    };
    log::debug!(
        "threshold {}°, aggregation {:?}",
        config.knee_threshold_deg,
        config.knee_aggregation,
    );

    let json = fs::read_to_string(&landmark_path)
        .with_context(|| format!("failed to read {}", landmark_path.to_string_lossy()))?;
    let positions: HashMap<LandmarkIdx, [f32; 2]> =
        serde_json::from_str(&json).context("failed to parse landmark file")?;

    let mut landmarks = LandmarkSet::new();
    for (idx, [x, y]) in positions {
        landmarks.set(idx, Point2::new(x, y));
    }

    let posture = config.evaluator().evaluate(&landmarks);
    if let Some(angle) = posture.knee_angle() {
        println!("Knee Angle: {angle:.1}");
    }
    println!("{posture}");

    Ok(())
}
