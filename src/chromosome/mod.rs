//! The 1-D array genome family: a plain array genome and an array genome
//! constrained by per-index allele sets.

pub mod allele_array;
pub mod array;

pub use allele_array::ArrayAlleleGenome;
pub use array::ArrayGenome;
