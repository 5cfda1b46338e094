//! Rank selection: draws using each genome's rank (1 = worst) rather than
//! its raw weight, so a single outlier score cannot dominate the wheel.

use crate::random::RandomSource;

pub fn select(weights: &[f64], rng: &mut RandomSource) -> usize {
    let n = weights.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| weights[a].partial_cmp(&weights[b]).unwrap());

    let mut rank_of = vec![0usize; n];
    for (rank, &idx) in order.iter().enumerate() {
        rank_of[idx] = rank + 1;
    }
    let rank_weights: Vec<f64> = rank_of.iter().map(|&r| r as f64).collect();

    super::roulette::select(&rank_weights, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_a_valid_index() {
        let weights = [5.0, 1.0, 3.0, 9.0];
        let mut rng = RandomSource::from_seed(41);
        for _ in 0..50 {
            let idx = select(&weights, &mut rng);
            assert!(idx < weights.len());
        }
    }
}
