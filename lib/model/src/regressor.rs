//! Strategy selection and the fitted-model wrapper.

use crate::error::{ModelError, Result};
use crate::forest::{ForestModel, DEFAULT_MAX_DEPTH, DEFAULT_TREES};
use crate::linear::LinearModel;
use serde::{Deserialize, Serialize};

/// Which regression fit to run.
///
/// Parsed from the strategy names accepted on the command line; anything
/// unrecognised is a fatal configuration error with no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    Linear,
    RandomForest { n_trees: usize, max_depth: usize },
}

impl Strategy {
    /// Resolve a strategy name, attaching the forest hyperparameters when
    /// they apply.
    pub fn parse(name: &str, n_trees: usize, max_depth: usize) -> Result<Self> {
        match name {
            "linear" => Ok(Strategy::Linear),
            "random_forest" => Ok(Strategy::RandomForest { n_trees, max_depth }),
            other => Err(ModelError::UnknownStrategy(other.to_string())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::RandomForest { .. } => "random_forest",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::RandomForest {
            n_trees: DEFAULT_TREES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A fitted regression model of either strategy.
///
/// Created by [`Model::fit`], read-only afterwards; serialisable so the
/// tracker can persist it as a run artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    Linear(LinearModel),
    RandomForest(ForestModel),
}

impl Model {
    /// Fit `strategy` on the given design matrix. The seed only affects
    /// the forest's bootstrap sampling; the linear fit is closed-form.
    pub fn fit(strategy: Strategy, rows: &[Vec<f64>], targets: &[f64], seed: u64) -> Result<Self> {
        match strategy {
            Strategy::Linear => Ok(Model::Linear(LinearModel::fit(rows, targets)?)),
            Strategy::RandomForest { n_trees, max_depth } => Ok(Model::RandomForest(
                ForestModel::fit(rows, targets, n_trees, max_depth, seed)?,
            )),
        }
    }

    #[inline]
    pub fn predict(&self, row: &[f64]) -> f64 {
        match self {
            Model::Linear(m) => m.predict(row),
            Model::RandomForest(m) => m.predict(row),
        }
    }

    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}
