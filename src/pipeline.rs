//! Pipeline orchestration: the train, export and query operations.
//!
//! Each operation constructs everything it needs from scratch - features,
//! encoder, model, index - so runs never share state.

use crate::tracking::ExperimentTracker;
use anyhow::{Context, Result};
use medcast_core::{io, Value};
use medcast_features::{build_feature_pipeline, Encoder};
use medcast_index::{
    documents, similar_avg_cost, HashEmbedder, Scored, SimilarityIndex,
};
use medcast_model::{mae, rmse, select, train_test_split, Model, Strategy};
use std::path::{Path, PathBuf};
use tracing::info;

pub const PREDICTED_COLUMN: &str = "Predicted_Charges";
pub const SIMILAR_COST_COLUMN: &str = "Similar_Patients_Avg_Cost";
pub const EXPERIMENT_NAME: &str = "medical_cost_prediction";

#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub data: PathBuf,
    pub strategy: Strategy,
    pub seed: u64,
    pub test_fraction: f64,
    pub runs_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TrainReport {
    pub run_id: String,
    pub rmse: f64,
    pub mae: f64,
    pub n_train: usize,
    pub n_test: usize,
}

/// Fit the requested strategy on a seeded split and log the run.
pub fn train(options: &TrainOptions) -> Result<TrainReport> {
    info!(data = %options.data.display(), "Loading data");
    let mut frame = io::read_csv(&options.data)
        .with_context(|| format!("reading {}", options.data.display()))?;
    build_feature_pipeline(&mut frame)?;

    let encoder = Encoder::fit(&frame);
    let dataset = encoder.encode(&frame)?;

    let split = train_test_split(dataset.n_rows(), options.test_fraction, options.seed);
    let train_rows = select(&dataset.rows, &split.train);
    let train_targets = select(&dataset.target, &split.train);
    let test_rows = select(&dataset.rows, &split.test);
    let test_targets = select(&dataset.target, &split.test);

    info!(
        strategy = options.strategy.name(),
        n_train = train_rows.len(),
        n_test = test_rows.len(),
        "Training model"
    );
    let model = Model::fit(options.strategy, &train_rows, &train_targets, options.seed)?;

    let predictions = model.predict_batch(&test_rows);
    let rmse_value = rmse(&predictions, &test_targets);
    let mae_value = mae(&predictions, &test_targets);

    let tracker = ExperimentTracker::new(&options.runs_dir);
    let mut run = tracker.start_run(EXPERIMENT_NAME)?;
    run.log_param("model_type", options.strategy.name());
    run.log_param("data_path", options.data.display().to_string());
    run.log_param("seed", options.seed);
    if let Strategy::RandomForest { n_trees, max_depth } = options.strategy {
        run.log_param("n_estimators", n_trees as u64);
        run.log_param("max_depth", max_depth as u64);
    }
    run.log_metric("rmse", rmse_value);
    run.log_metric("mae", mae_value);
    run.log_model(&model)?;
    let run_id = run.id().to_string();
    run.finish()?;

    info!(rmse = rmse_value, mae = mae_value, %run_id, "Run complete");
    Ok(TrainReport {
        run_id,
        rmse: rmse_value,
        mae: mae_value,
        n_train: train_rows.len(),
        n_test: test_rows.len(),
    })
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub data: PathBuf,
    pub output: PathBuf,
    pub n_trees: usize,
    pub max_depth: usize,
    pub seed: u64,
    pub k: usize,
}

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub rows: usize,
    pub output: PathBuf,
}

/// Annotate every record with a model prediction and the mean charge of
/// its nearest neighbors, then write the combined table.
pub fn export(options: &ExportOptions) -> Result<ExportReport> {
    info!(data = %options.data.display(), "Loading data");
    let mut frame = io::read_csv(&options.data)
        .with_context(|| format!("reading {}", options.data.display()))?;

    // The export model is refit on the full table; derived feature columns
    // live on a working copy so the output keeps the source layout.
    let mut engineered = frame.clone();
    build_feature_pipeline(&mut engineered)?;
    let encoder = Encoder::fit(&engineered);
    let dataset = encoder.encode(&engineered)?;

    info!(rows = dataset.n_rows(), "Training export model");
    let strategy = Strategy::RandomForest {
        n_trees: options.n_trees,
        max_depth: options.max_depth,
    };
    let model = Model::fit(strategy, &dataset.rows, &dataset.target, options.seed)?;
    let predictions = model.predict_batch(&dataset.rows);

    info!("Building similarity index");
    let docs = documents(&frame);
    let index = SimilarityIndex::build(Box::new(HashEmbedder::default()), docs.clone())?;

    info!(k = options.k, "Generating insights");
    // One query per record: O(n*k). Acceptable at the hundreds-to-low-
    // thousands of rows this pipeline targets.
    let insights: Vec<f64> = docs
        .iter()
        .map(|doc| similar_avg_cost(&index, &doc.text, options.k))
        .collect();

    frame.set_column(
        PREDICTED_COLUMN,
        predictions.into_iter().map(Value::from).collect(),
    )?;
    frame.set_column(
        SIMILAR_COST_COLUMN,
        insights.into_iter().map(Value::from).collect(),
    )?;

    io::write_csv(&frame, &options.output)
        .with_context(|| format!("writing {}", options.output.display()))?;
    info!(output = %options.output.display(), rows = frame.n_rows(), "Export written");

    Ok(ExportReport {
        rows: frame.n_rows(),
        output: options.output.clone(),
    })
}

/// Build an index over the data file and run one free-text query.
pub fn query(data: &Path, text: &str, k: usize) -> Result<Vec<Scored>> {
    info!(data = %data.display(), "Building similarity index");
    let frame = io::read_csv(data).with_context(|| format!("reading {}", data.display()))?;
    let docs = documents(&frame);
    let index = SimilarityIndex::build(Box::new(HashEmbedder::default()), docs)?;
    Ok(index.search(text, k))
}
