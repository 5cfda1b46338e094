//! Single-point crossover: one cut per parent pair.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::{GaError, GaErrorKind, GaResult};
use crate::genome::ResizePolicy;
use crate::random::RandomSource;

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    let mom_fixed = mom.resize_policy().is_fixed();
    let dad_fixed = dad.resize_policy().is_fixed();
    if mom_fixed != dad_fixed {
        return Err(GaError::new(
            GaErrorKind::SameBehaviorRequired,
            "single_point",
            "cross",
            "both parents must share a resize behavior",
        ));
    }

    if mom_fixed {
        if mom.len() != dad.len() {
            return Err(GaError::new(
                GaErrorKind::SameLengthRequired,
                "single_point",
                "cross",
                "fixed-size parents must have equal length",
            ));
        }
        let len = mom.len();
        let s = rng.uniform_range(0, len);
        let mut sis = mom.genes()[0..s].to_vec();
        sis.extend_from_slice(&dad.genes()[s..len]);
        let mut bro = dad.genes()[0..s].to_vec();
        bro.extend_from_slice(&mom.genes()[s..len]);
        return Ok(vec![ArrayGenome::fixed(sis), ArrayGenome::fixed(bro)]);
    }

    let sm = rng.uniform_range(0, mom.len());
    let sd = rng.uniform_range(0, dad.len());
    let mut sis = mom.genes()[0..sm].to_vec();
    sis.extend_from_slice(&dad.genes()[sd..dad.len()]);
    let mut bro = dad.genes()[0..sd].to_vec();
    bro.extend_from_slice(&mom.genes()[sm..mom.len()]);

    let (lo, hi) = match mom.resize_policy() {
        ResizePolicy::Bounded(lo, hi) => (lo, hi),
        ResizePolicy::Fixed(n) => (n, n),
    };
    if sis.len() < lo || sis.len() > hi || bro.len() < lo || bro.len() > hi {
        return Err(GaError::new(
            GaErrorKind::BadResizeBehavior,
            "single_point",
            "cross",
            "resulting child length outside allowed range",
        ));
    }
    Ok(vec![ArrayGenome::bounded(sis, lo, hi), ArrayGenome::bounded(bro, lo, hi)])
}

/// Single-child form: as [`cross`], but the caller only wants one offspring;
/// which half leads is chosen by a random bit instead of always returning
/// both orientations.
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
    fn fixed_size_mismatch_reports_same_length() {
        let mom = ArrayGenome::fixed(vec![0; 10]);
        let dad = ArrayGenome::fixed(vec![0; 12]);
        let mut rng = RandomSource::from_seed(1);
        let result = cross(&mom, &dad, &mut rng);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, GaErrorKind::SameLengthRequired);
    }

    #[test]
    fn fixed_size_children_preserve_length() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5]);
        let dad = ArrayGenome::fixed(vec![6, 7, 8, 9, 10]);
        let mut rng = RandomSource::from_seed(2);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert_eq!(children[0].len(), 5);
        assert_eq!(children[1].len(), 5);
    }
}
