//! Partial-match crossover (PMX). Preserves the multiset of values: if both
//! parents are permutations of the same set, so are the children.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::{GaError, GaErrorKind, GaResult};
use crate::random::RandomSource;

fn two_cuts(rng: &mut RandomSource, len: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let x = rng.uniform_range(0, len);
    let y = rng.uniform_range(0, len);
    if x <= y { (x, y) } else { (y, x) }
}

fn find<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    slice.iter().position(|v| v == value)
}

/// Builds one child: start from `primary`, then for each index in `[a, b)`
/// locate where `secondary[i]`'s value currently sits in the child and swap
/// it into place.
fn pmx_child<T: Allele>(primary: &[T], secondary: &[T], a: usize, b: usize) -> Vec<T> {
    let mut child = primary.to_vec();
    for i in a..b {
        if let Some(j) = find(&child, &secondary[i]) {
            child.swap(i, j);
        }
    }
    child
}

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "pmx",
            "cross",
            "PMX requires parents of equal length",
        ));
    }
    let (a, b) = two_cuts(rng, mom.len());
    Ok(cross_with_cuts(mom, dad, a, b))
}

pub fn cross_with_cuts<T: Allele>(mom: &ArrayGenome<T>, dad: &ArrayGenome<T>, a: usize, b: usize) -> Vec<ArrayGenome<T>> {
    let sis = pmx_child(mom.genes(), dad.genes(), a, b);
    let bro = pmx_child(dad.genes(), mom.genes(), a, b);
    vec![ArrayGenome::fixed(sis), ArrayGenome::fixed(bro)]
}

/// Single-child form: which parent supplies the primary strand is chosen by
/// a random bit.
pub fn cross_one<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Option<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "pmx",
            "cross_one",
            "PMX requires parents of equal length",
        ));
    }
    let (a, b) = two_cuts(rng, mom.len());
    let child = if rng.uniform_bit() {
        pmx_child(mom.genes(), dad.genes(), a, b)
    } else {
        pmx_child(dad.genes(), mom.genes(), a, b)
    };
    Ok(Some(ArrayGenome::fixed(child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_permutations_of_the_parent_set() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let dad = ArrayGenome::fixed(vec![3, 7, 5, 1, 6, 8, 2, 4]);
        let children = cross_with_cuts(&mom, &dad, 3, 6);
        for child in &children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn unequal_length_reports_bad_parent_length() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3]);
        let dad = ArrayGenome::fixed(vec![1, 2, 3, 4]);
        let mut rng = RandomSource::from_seed(9);
        let result = cross(&mom, &dad, &mut rng);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, GaErrorKind::BadParentLength);
    }
}
