use crate::{
    offset::{OffsetGroup, NUM_NEIGHBOURS},
    point::Point,
    static_vec::{Id, StaticVec},
};

use std::fmt;

/// Identifies a permutation by its position in the enumeration order. Because slot 0 is the most
/// significant bit, this is also the permutation's bitmask.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PatternIndex(pub usize);

impl From<PatternIndex> for usize {
    fn from(index: PatternIndex) -> usize {
        index.0
    }
}

impl From<usize> for PatternIndex {
    fn from(other: usize) -> PatternIndex {
        PatternIndex(other)
    }
}

impl Id for PatternIndex {}

impl fmt::Display for PatternIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Enumerated permutations, indexed by `PatternIndex`.
pub type Permutations = StaticVec<PatternIndex, Permutation>;

/// Masks are stored in a `u32`; keep one bit of headroom so `1 << num_slots` never overflows.
pub const MAX_SLOTS: usize = 31;

/// Which of the neighbour slots are occupied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Permutation {
    mask: u32,
    num_slots: usize,
}

impl Permutation {
    /// Decodes the low `num_slots` bits of `index`, slot 0 taking the most significant of them.
    pub fn from_index(num_slots: usize, index: PatternIndex) -> Self {
        assert!(num_slots <= MAX_SLOTS, "At most {} slots are supported", MAX_SLOTS);
        let mask = (index.0 as u32) & ((1 << num_slots) - 1);

        Permutation { mask, num_slots }
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        slot < self.num_slots && (self.mask >> (self.num_slots - 1 - slot)) & 1 == 1
    }

    /// Slot values in slot order.
    pub fn slots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_slots).map(move |slot| self.is_occupied(slot))
    }

    pub fn occupied_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_slots).filter(move |slot| self.is_occupied(*slot))
    }

    /// The relative cells that are occupied in this permutation.
    pub fn occupied_offsets<'a>(
        &'a self,
        offsets: &'a OffsetGroup,
    ) -> impl Iterator<Item = Point> + 'a {
        debug_assert_eq!(offsets.num_offsets(), self.num_slots);

        offsets
            .iter()
            .filter(move |(id, _)| self.is_occupied(id.0))
            .map(|(_, offset)| *offset)
    }
}

/// Renders the slots as a binary string, e.g. `00000101`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for occupied in self.slots() {
            f.write_str(if occupied { "1" } else { "0" })?;
        }

        Ok(())
    }
}

/// All 256 occupancy patterns of the 8-neighbour ring.
pub fn generate_all() -> Permutations {
    generate_with_slots(NUM_NEIGHBOURS)
}

/// All `2^num_slots` occupancy patterns in binary counting order: index 0 has no slot occupied,
/// the last index has every slot occupied, and neighbouring indices differ in the last slot.
pub fn generate_with_slots(num_slots: usize) -> Permutations {
    assert!(num_slots <= MAX_SLOTS, "At most {} slots are supported", MAX_SLOTS);

    (0..1usize << num_slots)
        .map(|i| Permutation::from_index(num_slots, PatternIndex(i)))
        .collect()
}
