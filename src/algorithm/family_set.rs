use bitvec::prelude::*;

/// Fixed-size bitset of shape-family indices
///
/// The backtracking search keeps one per decision depth so that each family is
/// tried at most once per choice point: two pieces of the same family lead to
/// the same subtree.
#[derive(Clone, Debug)]
pub struct FamilySet {
    bits: BitVec,
}

impl FamilySet {
    /// Create a set able to hold families `0..family_count`
    pub fn new(family_count: usize) -> Self {
        Self {
            bits: bitvec![0; family_count],
        }
    }

    /// Insert a family, returning `true` if it was not already present
    ///
    /// Out-of-range indices are never stored and always report `true`.
    pub fn insert(&mut self, family: usize) -> bool {
        if family >= self.bits.len() {
            return true;
        }
        if self.contains(family) {
            return false;
        }
        self.bits.set(family, true);
        true
    }

    /// Test family membership
    pub fn contains(&self, family: usize) -> bool {
        self.bits.get(family).as_deref() == Some(&true)
    }

    /// Remove every family
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
