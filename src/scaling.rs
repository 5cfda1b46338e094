//! Fitness scaling: an orthogonal transform from raw objective values to
//! the weights selection schemes actually draw against. The core ships the
//! two simplest schemes; sigma-truncation, power-law, and sharing are named
//! by the interface but left to external extension.

use crate::genome::FitnessOrdering;

pub trait ScalingScheme {
    /// Transforms raw scores into non-negative selection weights, one per
    /// input score, in the same order.
    fn scale(&self, scores: &[f64], ordering: FitnessOrdering) -> Vec<f64>;
}

/// Passes scores through unchanged, clamped at zero (selection weights
/// cannot be negative).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScaling;

impl ScalingScheme for NoScaling {
    fn scale(&self, scores: &[f64], ordering: FitnessOrdering) -> Vec<f64> {
        match ordering {
            FitnessOrdering::Maximize => scores.iter().map(|&s| s.max(0.0)).collect(),
            FitnessOrdering::Minimize => {
                let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                scores.iter().map(|&s| (max - s).max(0.0)).collect()
            }
        }
    }
}

/// Classic Goldberg linear scaling: picks `a, b` so the mean score keeps its
/// mean weight and the best score gets `multiplier` times the mean weight,
/// clamping negative results to zero the way the source does when the
/// linear fit would otherwise go negative.
#[derive(Debug, Clone, Copy)]
pub struct LinearScaling {
    pub multiplier: f64,
}

impl Default for LinearScaling {
    fn default() -> Self {
        LinearScaling { multiplier: 2.0 }
    }
}

impl ScalingScheme for LinearScaling {
    fn scale(&self, scores: &[f64], ordering: FitnessOrdering) -> Vec<f64> {
        if scores.is_empty() {
            return Vec::new();
        }
        let oriented: Vec<f64> = match ordering {
            FitnessOrdering::Maximize => scores.to_vec(),
            FitnessOrdering::Minimize => {
                let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                scores.iter().map(|&s| max - s).collect()
            }
        };
        let n = oriented.len() as f64;
        let mean = oriented.iter().sum::<f64>() / n;
        let max = oriented.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = oriented.iter().cloned().fold(f64::INFINITY, f64::min);

        if (max - mean).abs() < f64::EPSILON {
            return oriented.iter().map(|_| mean.max(0.0)).collect();
        }

        let mut a = (self.multiplier - 1.0) * mean / (max - mean);
        let mut b = mean * (max - self.multiplier * mean) / (max - mean);
        if min.mul_add(a, b) < 0.0 {
            a = mean / (mean - min);
            b = -min * mean / (mean - min);
        }
        oriented.iter().map(|&s| (a * s + b).max(0.0)).collect()
    }
}
