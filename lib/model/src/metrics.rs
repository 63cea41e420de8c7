//! Regression accuracy metrics over a held-out partition.

/// Root-mean-squared error. Empty inputs score 0.
#[must_use]
pub fn rmse(predictions: &[f64], targets: &[f64]) -> f64 {
    let n = predictions.len().min(targets.len());
    if n == 0 {
        return 0.0;
    }
    let sum_sq: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    (sum_sq / n as f64).sqrt()
}

/// Mean absolute error. Empty inputs score 0.
#[must_use]
pub fn mae(predictions: &[f64], targets: &[f64]) -> f64 {
    let n = predictions.len().min(targets.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t).abs())
        .sum();
    sum / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fit_scores_zero() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(rmse(&y, &y), 0.0);
        assert_eq!(mae(&y, &y), 0.0);
    }

    #[test]
    fn test_known_values() {
        let predictions = [2.0, 4.0];
        let targets = [1.0, 1.0];
        // errors: 1, 3
        assert!((mae(&predictions, &targets) - 2.0).abs() < 1e-12);
        assert!((rmse(&predictions, &targets) - (5.0f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(rmse(&[], &[]), 0.0);
        assert_eq!(mae(&[], &[]), 0.0);
    }
}
