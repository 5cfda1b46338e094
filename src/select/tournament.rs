//! Tournament selection: `k` independent uniform picks, the best wins.

use crate::random::RandomSource;

pub fn select(weights: &[f64], k: usize, rng: &mut RandomSource) -> usize {
    let k = k.max(1);
    let mut best = rng.uniform_range(0, weights.len() - 1);
    for _ in 1..k {
        let candidate = rng.uniform_range(0, weights.len() - 1);
        if weights[candidate] > weights[best] {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_k_favors_the_best_weight() {
        let weights = [1.0, 2.0, 3.0, 100.0, 4.0];
        let mut rng = RandomSource::from_seed(31);
        let mut wins = 0;
        for _ in 0..100 {
            if select(&weights, 4, &mut rng) == 3 {
                wins += 1;
            }
        }
        assert!(wins > 50, "best candidate should win most 4-way tournaments, won {wins}/100");
    }
}
