//! Uniform crossover: each position independently picked from one parent
//! or the other.

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::GaResult;
use crate::random::RandomSource;

pub fn cross<T: Allele>(
    mom: &ArrayGenome<T>,
    dad: &ArrayGenome<T>,
    rng: &mut RandomSource,
) -> GaResult<Vec<ArrayGenome<T>>> {
    if mom.len() == dad.len() {
        let len = mom.len();
        let mut sis_genes = Vec::with_capacity(len);
        let mut bro_genes = Vec::with_capacity(len);
        for i in 0..len {
            if rng.uniform_bit() {
                sis_genes.push(mom.gene(i).clone());
                bro_genes.push(dad.gene(i).clone());
            } else {
                sis_genes.push(dad.gene(i).clone());
                bro_genes.push(mom.gene(i).clone());
            }
        }
        let sis = rebuild(mom, sis_genes);
        let bro = rebuild(dad, bro_genes);
        return Ok(vec![sis, bro]);
    }

    let common = mom.len().min(dad.len());
    let mask_len = mom.len().max(dad.len());
    let mask: Vec<bool> = (0..mask_len).map(|_| rng.uniform_bit()).collect();

    let mut sis_genes = mom.genes().to_vec();
    let mut bro_genes = dad.genes().to_vec();
    for i in 0..common.min(sis_genes.len()) {
        sis_genes[i] = if mask[i] { mom.gene(i).clone() } else { dad.gene(i).clone() };
    }
    for i in 0..common.min(bro_genes.len()) {
        bro_genes[i] = if mask[i] { dad.gene(i).clone() } else { mom.gene(i).clone() };
    }
    let sis = rebuild(mom, sis_genes);
    let bro = rebuild(dad, bro_genes);
    Ok(vec![sis, bro])
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
    fn equal_length_children_swap_by_mask() {
        let mom = ArrayGenome::fixed(vec!['A', 'B', 'C', 'D', 'E']);
        let dad = ArrayGenome::fixed(vec!['a', 'b', 'c', 'd', 'e']);
        let mut rng = RandomSource::from_seed(7);
        // No seam to inject a fixed mask, so we check the invariant that
        // holds regardless of mask: every position comes from one parent,
        // and the two children are always complementary.
        let children = cross(&mom, &dad, &mut rng).unwrap();
        assert_eq!(children.len(), 2);
        for i in 0..5 {
            let from_mom = children[0].gene(i) == mom.gene(i);
            let from_dad = children[0].gene(i) == dad.gene(i);
            assert!(from_mom || from_dad);
            assert_ne!(children[0].gene(i), children[1].gene(i));
        }
    }
}
