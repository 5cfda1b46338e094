//! A packed bit buffer used by the cycle-crossover "taken" mask and by the
//! order-crossover hole scan. Thin wrapper over `fixedbitset::FixedBitSet`
//! so both operators share one piece of bookkeeping instead of each rolling
//! their own `Vec<bool>`.

use fixedbitset::FixedBitSet;

#[derive(Debug, Clone)]
pub struct BitBuffer {
    bits: FixedBitSet,
}

impl BitBuffer {
    pub fn zeros(len: usize) -> Self {
        BitBuffer { bits: FixedBitSet::with_capacity(len) }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn set(&mut self, i: usize) {
        self.bits.insert(i);
    }

    pub fn clear(&mut self, i: usize) {
        self.bits.set(i, false);
    }

    pub fn test(&self, i: usize) -> bool {
        self.bits.contains(i)
    }

    pub fn set_range(&mut self, range: std::ops::Range<usize>) {
        for i in range {
            self.bits.insert(i);
        }
    }

    pub fn count_ones_in_range(&self, range: std::ops::Range<usize>) -> usize {
        (range).filter(|&i| self.bits.contains(i)).count()
    }

    /// First unset position at or after `from`, wrapping around the end of
    /// the buffer. Returns `None` only if every bit is set.
    pub fn first_unset_from(&self, from: usize) -> Option<usize> {
        let len = self.bits.len();
        if len == 0 {
            return None;
        }
        for k in 0..len {
            let i = (from + k) % len;
            if !self.bits.contains(i) {
                return Some(i);
            }
        }
        None
    }
}
