//! Random-forest regression: bagged variance-reduction trees.
//!
//! Each tree is grown on a bootstrap sample drawn from an rng derived from
//! the forest seed, so a fit is fully reproducible. Splits greedily
//! minimise the summed squared error of the two children; leaves predict
//! the mean target of their sample.

use crate::error::Result;
use crate::validate_design;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TREES: usize = 100;
pub const DEFAULT_MAX_DEPTH: usize = 10;

const MIN_SPLIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// One regression tree, nodes stored in an arena with the root last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn grow(rows: &[Vec<f64>], targets: &[f64], sample: Vec<usize>, max_depth: usize) -> Self {
        let mut nodes = Vec::new();
        build_node(&mut nodes, rows, targets, sample, 0, max_depth);
        Tree { nodes }
    }

    fn predict(&self, row: &[f64]) -> f64 {
        let mut at = self.nodes.len() - 1;
        loop {
            match &self.nodes[at] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(*feature).copied().unwrap_or(0.0);
                    at = if x <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

fn build_node(
    nodes: &mut Vec<Node>,
    rows: &[Vec<f64>],
    targets: &[f64],
    sample: Vec<usize>,
    depth: usize,
    max_depth: usize,
) -> usize {
    let mean = sample.iter().map(|&i| targets[i]).sum::<f64>() / sample.len() as f64;

    if depth < max_depth && sample.len() >= MIN_SPLIT {
        if let Some((feature, threshold)) = best_split(rows, targets, &sample) {
            let (left_sample, right_sample): (Vec<usize>, Vec<usize>) = sample
                .iter()
                .copied()
                .partition(|&i| rows[i][feature] <= threshold);
            // Midpoint thresholds can collapse onto a value under rounding;
            // an empty side means the split is vacuous.
            if !left_sample.is_empty() && !right_sample.is_empty() {
                let left = build_node(nodes, rows, targets, left_sample, depth + 1, max_depth);
                let right = build_node(nodes, rows, targets, right_sample, depth + 1, max_depth);
                nodes.push(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                });
                return nodes.len() - 1;
            }
        }
    }

    nodes.push(Node::Leaf { value: mean });
    nodes.len() - 1
}

/// Best `(feature, threshold)` by variance reduction, or `None` when every
/// feature is constant over the sample. Ties keep the first candidate in
/// feature-then-threshold order, so growth is deterministic.
fn best_split(rows: &[Vec<f64>], targets: &[f64], sample: &[usize]) -> Option<(usize, f64)> {
    let n_features = rows[sample[0]].len();
    let n = sample.len() as f64;
    let mut best: Option<(f64, usize, f64)> = None;

    for feature in 0..n_features {
        let mut pairs: Vec<(f64, f64)> = sample
            .iter()
            .map(|&i| (rows[i][feature], targets[i]))
            .collect();
        pairs.sort_by_key(|&(value, _)| OrderedFloat(value));

        let total: f64 = pairs.iter().map(|&(_, y)| y).sum();
        let mut left_sum = 0.0;
        for i in 1..pairs.len() {
            left_sum += pairs[i - 1].1;
            if pairs[i].0 <= pairs[i - 1].0 {
                continue;
            }
            let n_left = i as f64;
            let n_right = n - n_left;
            let right_sum = total - left_sum;
            // Minimising child SSE == maximising sum^2/n of both children.
            let score = left_sum * left_sum / n_left + right_sum * right_sum / n_right;
            if best.map_or(true, |(s, _, _)| score > s) {
                let threshold = (pairs[i - 1].0 + pairs[i].0) / 2.0;
                best = Some((score, feature, threshold));
            }
        }
    }

    best.map(|(_, feature, threshold)| (feature, threshold))
}

/// Fitted forest: the mean prediction over all trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    trees: Vec<Tree>,
}

impl ForestModel {
    pub fn fit(
        rows: &[Vec<f64>],
        targets: &[f64],
        n_trees: usize,
        max_depth: usize,
        seed: u64,
    ) -> Result<Self> {
        validate_design(rows, targets)?;
        let n = rows.len();
        let trees = (0..n_trees)
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(t as u64));
                let sample: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                Tree::grow(rows, targets, sample, max_depth)
            })
            .collect();
        Ok(ForestModel { trees })
    }

    #[inline]
    pub fn predict(&self, row: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    #[inline]
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
