use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::info;

use ckd_scorer::{CkdScorer, PatientRecord, PredictionResponse, ScorerConfig};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let patient_path = PathBuf::from(
        args.next()
            .context("usage: ckd-scorer <patient.json> [model.json] [features.json]")?,
    );

    let config = match (args.next(), args.next()) {
        (Some(model), Some(features)) => ScorerConfig::new(model, features),
        _ => ScorerConfig::default(),
    };

    info!(
        "Loading artifacts: {} / {}",
        config.model_path.display(),
        config.features_path.display()
    );
    let start = Instant::now();
    let scorer = CkdScorer::from_artifacts(&config)?;
    info!("Scorer ready in {:?}", start.elapsed());

    let contents = std::fs::read_to_string(&patient_path)
        .with_context(|| format!("failed to read patient record {}", patient_path.display()))?;
    let patient: PatientRecord = serde_json::from_str(&contents)
        .with_context(|| format!("invalid patient record {}", patient_path.display()))?;

    let start = Instant::now();
    let result = scorer.predict(&patient)?;
    info!("Prediction completed in {:?}", start.elapsed());

    let response = PredictionResponse::from(&result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
