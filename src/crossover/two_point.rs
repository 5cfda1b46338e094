//! Two-point crossover: an outer/middle/outer splice.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::{GaError, GaErrorKind, GaResult};
use crate::genome::ResizePolicy;
use crate::random::RandomSource;

fn two_sites(rng: &mut RandomSource, len: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let x = rng.uniform_range(0, len);
    let y = rng.uniform_range(0, len);
    if x <= y { (x, y) } else { (y, x) }
}

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    let mom_fixed = mom.resize_policy().is_fixed();
    let dad_fixed = dad.resize_policy().is_fixed();

    if mom_fixed != dad_fixed {
        // The variable-size child cannot be forced fixed; the source treats
        // this as simply producing no offspring rather than an error.
        return Ok(Vec::new());
    }

    if mom_fixed {
        if mom.len() != dad.len() {
            return Err(GaError::new(
                GaErrorKind::SameLengthRequired,
                "two_point",
                "cross",
                "fixed-size parents must have equal length",
            ));
        }
        let len = mom.len();
        let (a, b) = two_sites(rng, len);
        let mut sis = mom.genes()[0..a].to_vec();
        sis.extend_from_slice(&dad.genes()[a..b]);
        sis.extend_from_slice(&mom.genes()[b..len]);
        let mut bro = dad.genes()[0..a].to_vec();
        bro.extend_from_slice(&mom.genes()[a..b]);
        bro.extend_from_slice(&dad.genes()[b..len]);
        return Ok(vec![ArrayGenome::fixed(sis), ArrayGenome::fixed(bro)]);
    }

    let (ma, mb) = two_sites(rng, mom.len());
    let (da, db) = two_sites(rng, dad.len());
    let mut sis = mom.genes()[0..ma].to_vec();
    sis.extend_from_slice(&dad.genes()[da..db]);
    sis.extend_from_slice(&mom.genes()[mb..mom.len()]);
    let mut bro = dad.genes()[0..da].to_vec();
    bro.extend_from_slice(&mom.genes()[ma..mb]);
    bro.extend_from_slice(&dad.genes()[db..dad.len()]);

    let (lo, hi) = match mom.resize_policy() {
        ResizePolicy::Bounded(lo, hi) => (lo, hi),
        ResizePolicy::Fixed(n) => (n, n),
    };
    if sis.len() < lo || sis.len() > hi || bro.len() < lo || bro.len() > hi {
        return Err(GaError::new(
            GaErrorKind::BadResizeBehavior,
            "two_point",
            "cross",
            "resulting child length outside allowed range",
        ));
    }
    Ok(vec![ArrayGenome::bounded(sis, lo, hi), ArrayGenome::bounded(bro, lo, hi)])
}

/// Single-child form: orientation chosen by a random bit.
pub fn cross_one<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Option<ArrayGenome<T>>> {
    let children = cross(mom, dad, rng)?;
    if children.is_empty() {
        return Ok(None);
    }
    let idx = if rng.uniform_bit() { 0 } else { 1 };
    Ok(children.into_iter().nth(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_children_preserve_length() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6]);
        let dad = ArrayGenome::fixed(vec![7, 8, 9, 10, 11, 12]);
        let mut rng = RandomSource::from_seed(3);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert_eq!(children[0].len(), 6);
        assert_eq!(children[1].len(), 6);
    }

    #[test]
    fn mixed_behavior_yields_no_children() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3]);
        let dad = ArrayGenome::bounded(vec![1, 2, 3, 4], 2, 6);
        let mut rng = RandomSource::from_seed(4);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert!(children.is_empty());
    }
}
