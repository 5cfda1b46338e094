//! Order crossover (OX). The child's window holds the *secondary* parent's
//! values verbatim; the remaining positions are filled by walking the
//! *primary* parent in order starting just after the window (wrapping),
//! skipping any value already placed in the window. Grounded on
//! `GA1DArrayGenome.hpp`'s `OrderCrossover`/`GA1DArrayIsHole`; shares the
//! same hole-tracking buffer as `cx.rs`'s cycle mask rather than polling
//! `Option::is_some()`.

use crate::allele::Allele;
use crate::bitstring::BitBuffer;
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

/// `window_source` supplies the child's `[a, b)` window verbatim;
/// `fill_source` supplies the rest, scanned in order starting at `b`
/// (wrapping), skipping any value already present in the window.
fn ox_child<T: Allele>(window_source: &[T], fill_source: &[T], a: usize, b: usize) -> Vec<T> {
    let len = window_source.len();
    let mut child: Vec<Option<T>> = vec![None; len];
    let mut filled = BitBuffer::zeros(len);
    for i in a..b {
        child[i] = Some(window_source[i].clone());
        filled.set(i);
    }
    let window = &window_source[a..b];

    let mut write = b % len;
    for k in 0..len {
        let idx = (b + k) % len;
        let value = &fill_source[idx];
        if window.iter().any(|v| v == value) {
            continue;
        }
        while filled.test(write) {
            write = (write + 1) % len;
        }
        child[write] = Some(value.clone());
        filled.set(write);
        write = (write + 1) % len;
    }

    child.into_iter().map(|g| g.expect("OX leaves no position unfilled for permutation parents")).collect()
}

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "ox",
            "cross",
            "OX requires parents of equal length",
        ));
    }
    let (a, b) = two_cuts(rng, mom.len());
    Ok(cross_with_cuts(mom, dad, a, b))
}

pub fn cross_with_cuts<T: Allele>(mom: &ArrayGenome<T>, dad: &ArrayGenome<T>, a: usize, b: usize) -> Vec<ArrayGenome<T>> {
    let sis = ox_child(dad.genes(), mom.genes(), a, b);
    let bro = ox_child(mom.genes(), dad.genes(), a, b);
    vec![ArrayGenome::fixed(sis), ArrayGenome::fixed(bro)]
}

/// Single-child form: orientation chosen by a random bit.
pub fn cross_one<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Option<ArrayGenome<T>>> {
    if mom.len() != dad.len() {
        return Err(GaError::new(
            GaErrorKind::BadParentLength,
            "ox",
            "cross_one",
            "OX requires parents of equal length",
        ));
    }
    let (a, b) = two_cuts(rng, mom.len());
    let child = if rng.uniform_bit() {
        ox_child(dad.genes(), mom.genes(), a, b)
    } else {
        ox_child(mom.genes(), dad.genes(), a, b)
    };
    Ok(Some(ArrayGenome::fixed(child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_permutations_of_the_parent_set() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let dad = ArrayGenome::fixed(vec![8, 2, 6, 7, 1, 5, 3, 4]);
        let children = cross_with_cuts(&mom, &dad, 2, 5);
        for child in &children {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn window_comes_from_the_secondary_parent() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6]);
        let dad = ArrayGenome::fixed(vec![6, 5, 4, 3, 2, 1]);
        let children = cross_with_cuts(&mom, &dad, 1, 4);
        // sis's window is dad's (secondary's); bro's window is mom's.
        assert_eq!(&children[0].genes()[1..4], &dad.genes()[1..4]);
        assert_eq!(&children[1].genes()[1..4], &mom.genes()[1..4]);
    }

    #[test]
    fn matches_worked_example() {
        let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6]);
        let dad = ArrayGenome::fixed(vec![6, 5, 4, 3, 2, 1]);
        let children = cross_with_cuts(&mom, &dad, 1, 4);
        assert_eq!(children[0].genes(), &[2, 5, 4, 3, 6, 1]);
    }
}
