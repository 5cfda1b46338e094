//! Gene values ("alleles") and the sets that constrain them.
//!
//! Grounded on the teacher crate's `allele.rs`: a narrow `Allele` trait most
//! element types already satisfy, plus a `RangeAllele` subtrait implemented
//! via a macro for the primitive numeric types so bounded allele sets work
//! without hand-writing arithmetic for every integer width.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::random::RandomSource;

/// Anything that can sit in a genome position and be told apart, printed,
/// and parsed back. Most `Copy` scalar and `String`-like types already
/// satisfy this; no manual impl is usually needed.
pub trait Allele: Clone + PartialEq + fmt::Debug + fmt::Display + FromStr + 'static {}

impl<T> Allele for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + FromStr + 'static {}

/// Alleles that additionally support interpolation and stepping, needed for
/// bounded (continuous/discrete-interval) allele sets.
pub trait RangeAllele: Allele + PartialOrd {
    fn ga_lerp(lo: &Self, hi: &Self, t: f64) -> Self;
    /// Number of distinct values between `lo` and `hi` (inclusive) at the
    /// given increment; `None` for a type with no meaningful increment
    /// count over floats.
    fn ga_step_count(lo: &Self, hi: &Self, increment: &Self) -> Option<u64>;
}

macro_rules! impl_range_allele_int {
    ($($t:ty),*) => {
        $(
            impl RangeAllele for $t {
                fn ga_lerp(lo: &Self, hi: &Self, t: f64) -> Self {
                    let span = (*hi as f64) - (*lo as f64);
                    (*lo as f64 + span * t).round() as $t
                }
                fn ga_step_count(lo: &Self, hi: &Self, increment: &Self) -> Option<u64> {
                    if *increment == 0 {
                        return None;
                    }
                    Some((((*hi - *lo) as i128) / (*increment as i128)).unsigned_abs() as u64 + 1)
                }
            }
        )*
    };
}

macro_rules! impl_range_allele_float {
    ($($t:ty),*) => {
        $(
            impl RangeAllele for $t {
                fn ga_lerp(lo: &Self, hi: &Self, t: f64) -> Self {
                    (*lo as f64 + ((*hi as f64) - (*lo as f64)) * t) as $t
                }
                fn ga_step_count(_lo: &Self, _hi: &Self, increment: &Self) -> Option<u64> {
                    if *increment == 0.0 {
                        None
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_range_allele_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
impl_range_allele_float!(f32, f64);

/// The domain of legal values for one gene position.
#[derive(Debug, Clone)]
pub enum AlleleSet<T: Allele> {
    /// A finite, explicitly listed domain.
    Enumerated(Vec<T>),
    /// A bounded interval `[lo, hi]`, optionally stepped by `increment`.
    Bounded { lo: T, hi: T, increment: Option<T> },
}

impl<T: Allele> AlleleSet<T> {
    pub fn enumerated(values: impl IntoIterator<Item = T>) -> Self {
        AlleleSet::Enumerated(values.into_iter().collect())
    }

    pub fn bounded(lo: T, hi: T) -> Self {
        AlleleSet::Bounded { lo, hi, increment: None }
    }

    pub fn bounded_with_increment(lo: T, hi: T, increment: T) -> Self {
        AlleleSet::Bounded { lo, hi, increment: Some(increment) }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialOrd,
    {
        match self {
            AlleleSet::Enumerated(values) => values.iter().any(|v| v == value),
            AlleleSet::Bounded { lo, hi, .. } => value >= lo && value <= hi,
        }
    }

    /// `None` for an unbounded-cardinality continuous set.
    pub fn size(&self) -> Option<usize>
    where
        T: RangeAllele,
    {
        match self {
            AlleleSet::Enumerated(values) => Some(values.len()),
            AlleleSet::Bounded { lo, hi, increment: Some(inc) } => {
                T::ga_step_count(lo, hi, inc).map(|n| n as usize)
            }
            AlleleSet::Bounded { increment: None, .. } => None,
        }
    }

    pub fn random_allele(&self, rng: &mut RandomSource) -> T
    where
        T: RangeAllele,
    {
        match self {
            AlleleSet::Enumerated(values) => {
                let idx = rng.uniform_range(0, values.len().saturating_sub(1));
                values[idx].clone()
            }
            AlleleSet::Bounded { lo, hi, .. } => {
                let t = rng.uniform_real();
                T::ga_lerp(lo, hi, t)
            }
        }
    }
}

/// A shared, copy-on-write handle to an allele set. Cloning a handle aliases
/// the underlying set; calling `make_mut` detaches it transparently the
/// moment another owner exists, replacing the source's manual refcounting.
pub type AlleleSetHandle<T> = Rc<AlleleSet<T>>;
