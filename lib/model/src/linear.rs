//! Least-squares linear regression via the normal equations.
//!
//! A small ridge term on the diagonal keeps the system solvable when the
//! one-hot design matrix is collinear or has fewer rows than features.

use crate::error::{ModelError, Result};
use crate::validate_design;
use serde::{Deserialize, Serialize};

const RIDGE: f64 = 1e-6;
const PIVOT_EPSILON: f64 = 1e-12;

/// Fitted linear model: `y = intercept + coefficients . x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Solve `(X'X + ridge*I) beta = X'y` with an intercept column.
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Result<Self> {
        validate_design(rows, targets)?;
        let d = rows[0].len();
        let p = d + 1;

        let mut xtx = vec![vec![0.0f64; p]; p];
        let mut xty = vec![0.0f64; p];
        for (row, &y) in rows.iter().zip(targets) {
            for i in 0..p {
                let xi = if i == 0 { 1.0 } else { row[i - 1] };
                xty[i] += xi * y;
                for j in i..p {
                    let xj = if j == 0 { 1.0 } else { row[j - 1] };
                    xtx[i][j] += xi * xj;
                }
            }
        }
        for i in 0..p {
            xtx[i][i] += RIDGE;
            for j in 0..i {
                xtx[i][j] = xtx[j][i];
            }
        }

        let beta = solve(xtx, xty)?;
        Ok(LinearModel {
            intercept: beta[0],
            coefficients: beta[1..].to_vec(),
        })
    }

    #[inline]
    pub fn predict(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return Err(ModelError::SingularMatrix);
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}
