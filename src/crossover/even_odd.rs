//! Even/odd crossover: `sis` takes mom's even-indexed genes and dad's
//! odd-indexed genes; `bro` is the complement. Deterministic given the
//! parents — no randomness is consulted.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::GaResult;
use crate::random::RandomSource;

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    _rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    if mom.len() == dad.len() {
        let len = mom.len();
        let mut sis = Vec::with_capacity(len);
        let mut bro = Vec::with_capacity(len);
        for i in 0..len {
            if i % 2 == 0 {
                sis.push(mom.gene(i).clone());
                bro.push(dad.gene(i).clone());
            } else {
                sis.push(dad.gene(i).clone());
                bro.push(mom.gene(i).clone());
            }
        }
        return Ok(vec![rebuild(mom, sis), rebuild(dad, bro)]);
    }

    let common = mom.len().min(dad.len());
    let mut sis = mom.genes().to_vec();
    let mut bro = dad.genes().to_vec();
    for i in 0..common {
        if i % 2 == 0 {
            sis[i] = mom.gene(i).clone();
            bro[i] = dad.gene(i).clone();
        } else {
            sis[i] = dad.gene(i).clone();
            bro[i] = mom.gene(i).clone();
        }
    }
    Ok(vec![rebuild(mom, sis), rebuild(dad, bro)])
}

fn rebuild<T: Allele>(template: &ArrayGenome<T>, genes: Vec<T>) -> ArrayGenome<T> {
    match template.resize_policy() {
        crate::genome::ResizePolicy::Fixed(_) => ArrayGenome::fixed(genes),
        crate::genome::ResizePolicy::Bounded(lo, hi) => ArrayGenome::bounded(genes, lo, hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length_alternates_by_parity() {
        let mom = ArrayGenome::fixed(vec!['A', 'B', 'C', 'D']);
        let dad = ArrayGenome::fixed(vec!['a', 'b', 'c', 'd']);
        let mut rng = RandomSource::from_seed(5);
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert_eq!(children[0].genes(), &['A', 'b', 'C', 'd']);
        assert_eq!(children[1].genes(), &['a', 'B', 'c', 'D']);
    }
}
