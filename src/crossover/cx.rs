//! Cycle crossover (CX). Follows the cycle of positions rooted at index 0
//! and keeps the primary parent's values there; everywhere else takes the
//! secondary parent's value.

use crate::allele::Allele;
use crate::bitstring::BitBuffer;
use crate::chromosome::array::ArrayGenome;
use crate::errors::{GaError, GaErrorKind, GaResult};
use crate::random::RandomSource;

fn cx_child<T: Allele>(primary: &[T], secondary: &[T]) -> Vec<T> {
    let len = primary.len();
    let mut child: Vec<Option<T>> = vec![None; len];
    let mut taken = BitBuffer::zeros(len);

    child[0] = Some(primary[0].clone());
    taken.set(0);
    let mut cur = 0;
    while secondary[cur] != primary[0] {
        let i = match primary.iter().position(|v| *v == secondary[cur]) {
            Some(i) => i,
            None => break,
        };
        child[i] = Some(primary[i].clone());
        taken.set(i);
        cur = i;
    }

    for i in 0..len {
        if !taken.test(i) {
            child[i] = Some(secondary[i].clone());
        }
    }

    child.into_iter().map(|g| g.expect("CX fills every position")).collect()
}

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    _rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "cx",
            "cross",
            "CX requires parents of equal length",
        ));
    }
    if mom.is_empty() {
        return Ok(vec![ArrayGenome::fixed(Vec::new()), ArrayGenome::fixed(Vec::new())]);
    }
    let sis = cx_child(mom.genes(), dad.genes());
    let bro = cx_child(dad.genes(), mom.genes());
    Ok(vec![ArrayGenome::fixed(sis), ArrayGenome::fixed(bro)])
}

/// Single-child form: which parent roots the cycle is chosen by a random
/// bit.
pub fn cross_one<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Option<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "cx",
            "cross_one",
            "CX requires parents of equal length",
        ));
    }
    if mom.is_empty() {
        return Ok(Some(ArrayGenome::fixed(Vec::new())));
    }
    let child = if rng.uniform_bit() {
        cx_child(mom.genes(), dad.genes())
    } else {
        cx_child(dad.genes(), mom.genes())
    };
    Ok(Some(ArrayGenome::fixed(child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_worked_cycle_example() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let dad = ArrayGenome::fixed(vec![8, 1, 2, 3, 4, 5, 6, 7]);
        let mut rng = RandomSource::from_seed(11);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert_eq!(children[0].genes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn children_are_permutations_of_the_parent_set() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let dad = ArrayGenome::fixed(vec![3, 7, 5, 1, 6, 8, 2, 4]);
        let mut rng = RandomSource::from_seed(12);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        for child in &children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }
}
