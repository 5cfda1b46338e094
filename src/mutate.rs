//! Point-mutation operators. The swap mutator works on any [`ArrayGenome<T>`];
//! the allele genome's flip mutator lives on `ArrayAlleleGenome` itself since
//! it needs each index's allele set.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::random::RandomSource;

/// Swaps elements at random. Sparse path (`p * len < 1`) considers every
/// index once with probability `p`; dense path performs exactly
/// `floor(p * len)` random swaps. Returns the number of swaps performed.
pub fn swap_mutate<T: Allele>(genome: &mut ArrayGenome<T>, p: f64, rng: &mut RandomSource) -> usize {
    let len = genome.len();
    if len < 2 {
        return 0;
    }
    let expected = p * len as f64;
    let mut count = 0;
    if expected < 1.0 {
        for i in 0..len {
            if rng.flip(p) {
                let j = rng.uniform_range(0, len - 1);
                genome.swap(i, j);
                count += 1;
            }
        }
    } else {
        let n = expected.floor() as usize;
        for _ in 0..n {
            let i = rng.uniform_range(0, len - 1);
            let j = rng.uniform_range(0, len - 1);
            genome.swap(i, j);
            count += 1;
        }
    }
    log::trace!("swap_mutate: {count} swap(s) on a genome of length {len}");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_probability_leaves_genome_untouched() {
        let mut g = ArrayGenome::fixed(vec![1, 2, 3, 4, 5]);
        let mut rng = RandomSource::from_seed(42);
        let count = swap_mutate(&mut g, 0.0, &mut rng);
        assert_eq!(count, 0);
        assert_eq!(g.genes(), &[1, 2, 3, 4, 5]);
    }
}
