//! File-backed experiment tracking.
//!
//! Each training run gets its own directory under
//! `<root>/<experiment>/<run-id>/` holding `meta.json`, `params.json`,
//! `metrics.json` and the serialized fitted model. Write-only: nothing in
//! the pipeline reads a run back. I/O failures propagate and terminate the
//! run like any other I/O error.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use medcast_model::Model;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_RUNS_DIR: &str = "runs";

/// Creates run directories under a fixed root.
pub struct ExperimentTracker {
    root: PathBuf,
}

#[derive(Serialize)]
struct RunMeta<'a> {
    run_id: &'a str,
    experiment: &'a str,
    started_at: DateTime<Utc>,
}

/// One in-flight training run. Parameters and metrics accumulate in
/// memory and are flushed by [`Run::finish`].
pub struct Run {
    id: String,
    dir: PathBuf,
    params: BTreeMap<String, serde_json::Value>,
    metrics: BTreeMap<String, f64>,
}

impl ExperimentTracker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn start_run(&self, experiment: &str) -> Result<Run> {
        let id = Uuid::new_v4().to_string();
        let dir = self.root.join(experiment).join(&id);
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating run directory {}", dir.display()))?;

        let meta = RunMeta {
            run_id: &id,
            experiment,
            started_at: Utc::now(),
        };
        write_json(&dir.join("meta.json"), &meta)?;

        Ok(Run {
            id,
            dir,
            params: BTreeMap::new(),
            metrics: BTreeMap::new(),
        })
    }
}

impl Run {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn log_param(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.params.insert(key.to_string(), value.into());
    }

    pub fn log_metric(&mut self, key: &str, value: f64) {
        self.metrics.insert(key.to_string(), value);
    }

    /// Persist the fitted model as a run artifact.
    pub fn log_model(&self, model: &Model) -> Result<()> {
        write_json(&self.dir.join("model.json"), model)
    }

    /// Flush accumulated parameters and metrics to disk.
    pub fn finish(self) -> Result<()> {
        write_json(&self.dir.join("params.json"), &self.params)?;
        write_json(&self.dir.join("metrics.json"), &self.metrics)?;
        Ok(())
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
