//! Symmetric relations over a dense id space, stored as a triangular bit
//! matrix rather than a hash set of unordered pairs.
//!
//! An unordered pair `{i, j}` with `i != j` is canonicalized to the index
//! `tri(i, j) = hi*(hi-1)/2 + lo`, where `lo = min(i,j)`, `hi = max(i,j)`.
//! This gives a bijection between unordered
//! pairs over `0..n` and `0..n*(n-1)/2`, so membership/insertion is a single
//! bit test/set and equality between two relations over the same universe is
//! a `FixedBitSet` equality check (used for the driver's level-off test).

use fixedbitset::FixedBitSet;
use std::marker::PhantomData;

fn tri(i: usize, j: usize) -> usize {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    hi * (hi.saturating_sub(1)) / 2 + lo
}

/// A symmetric boolean relation over `Id`s in `0..universe_size`.
#[derive(Clone, PartialEq, Eq)]
pub struct PairSet<Id> {
    bits: FixedBitSet,
    _id: PhantomData<Id>,
}

impl<Id: Copy + Into<usize>> PairSet<Id> {
    pub fn new(universe_size: usize) -> Self {
        let len = universe_size.saturating_mul(universe_size.saturating_sub(1)) / 2;
        PairSet {
            bits: FixedBitSet::with_capacity(len),
            _id: PhantomData,
        }
    }

    pub fn insert(&mut self, a: Id, b: Id) {
        let (a, b) = (a.into(), b.into());
        debug_assert_ne!(a, b, "pair set does not support self-pairs");
        self.bits.insert(tri(a, b));
    }

    pub fn contains(&self, a: Id, b: Id) -> bool {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return false;
        }
        self.bits.contains(tri(a, b))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ActionId;

    #[test]
    fn symmetric_membership() {
        let mut s: PairSet<ActionId> = PairSet::new(5);
        let a = ActionId::new(1);
        let b = ActionId::new(3);
        assert!(!s.contains(a, b));
        assert!(!s.contains(b, a));
        s.insert(a, b);
        assert!(s.contains(a, b));
        assert!(s.contains(b, a));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn no_self_mutex() {
        let s: PairSet<ActionId> = PairSet::new(5);
        let a = ActionId::new(2);
        assert!(!s.contains(a, a));
    }
}
