//! Roulette-wheel selection: a cumulative distribution over weights, picked
//! by binary search on a single uniform draw.

use crate::random::RandomSource;

pub fn select(weights: &[f64], rng: &mut RandomSource) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.uniform_range(0, weights.len() - 1);
    }

    let mut cumulative = Vec::with_capacity(weights.len());
    let mut running = 0.0;
    for &w in weights {
        running += w.max(0.0);
        cumulative.push(running);
    }

    let draw = rng.uniform_real() * total;
    match cumulative.binary_search_by(|probe| probe.partial_cmp(&draw).unwrap()) {
        Ok(idx) => idx,
        Err(idx) => idx.min(weights.len() - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_selects_a_zero_weight_over_many_draws() {
        let weights = [0.0, 1.0, 0.0, 0.0];
        let mut rng = RandomSource::from_seed(21);
        for _ in 0..200 {
            assert_eq!(select(&weights, &mut rng), 1);
        }
    }
}
