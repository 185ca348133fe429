//! Sparse cell index for owner lookups
//!
//! Maps every covered cell to the position of its claim in the store.
//! Filled incrementally as claims are appended; claims are never removed,
//! so entries are never invalidated.
use crate::region::{Cell, Region};
use std::collections::HashMap;

/// Sparse map from covered cell to claim position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellIndex {
    cells: HashMap<Cell, usize>,
}

impl CellIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every cell of `region` as owned by the claim at `position`
    pub fn insert(&mut self, region: &Region, position: usize) {
        self.cells.reserve(capacity_hint(region.area()));
        for cell in region.cells() {
            self.cells.insert(cell, position);
        }
    }

    /// Position of the claim covering `cell`
    pub fn owner(&self, cell: Cell) -> Option<usize> {
        self.cells.get(&cell).copied()
    }

    /// Lowest claim position whose cells intersect `region`
    ///
    /// Matches [`super::find_conflict`] on the same claims, since the lowest
    /// position is the first conflicting claim in store order.
    pub fn find_conflict(&self, region: &Region) -> Option<usize> {
        region.cells().filter_map(|cell| self.owner(cell)).min()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.len()
    }

    /// Move every entry of `other` into this index
    ///
    /// Positions in `other` must already be store positions.
    pub fn merge(&mut self, other: CellIndex) {
        self.cells.extend(other.cells);
    }
}

// Areas that do not fit a usize (wasm32) skip the up-front reservation.
fn capacity_hint(area: u64) -> usize {
    usize::try_from(area).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_owner() {
        let mut index = CellIndex::new();
        index.insert(&Region::new(0, 0, 2), 0);
        index.insert(&Region::new(0, 2, 1), 1);

        assert_eq!(index.owner(Cell::new(1, 1)), Some(0));
        assert_eq!(index.owner(Cell::new(0, 2)), Some(1));
        assert_eq!(index.owner(Cell::new(1, 2)), None);
        assert_eq!(index.occupied(), 5);
    }

    #[test]
    fn test_find_conflict_lowest_position() {
        let mut index = CellIndex::new();
        index.insert(&Region::new(0, 3, 3), 0);
        index.insert(&Region::new(0, 0, 3), 1);

        // Touches position 1 first in scan order, but position 0 is earlier in the store
        assert_eq!(index.find_conflict(&Region::new(0, 2, 2)), Some(0));
        assert_eq!(index.find_conflict(&Region::new(3, 0, 3)), None);
    }

    #[test]
    fn test_merge() {
        let mut index = CellIndex::new();
        index.insert(&Region::new(0, 0, 2), 0);

        let mut staged = CellIndex::new();
        staged.insert(&Region::new(2, 2, 1), 1);
        index.merge(staged);

        assert_eq!(index.owner(Cell::new(2, 2)), Some(1));
        assert_eq!(index.owner(Cell::new(1, 1)), Some(0));
        assert_eq!(index.occupied(), 5);
    }

    #[test]
    fn test_capacity_hint() {
        assert_eq!(capacity_hint(0), 0);
        assert_eq!(capacity_hint(2500), 2500);

        let huge = Region::new(0, 0, 1 << 17).area();
        #[cfg(target_pointer_width = "32")]
        assert_eq!(capacity_hint(huge), 0);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(capacity_hint(huge), 1 << 34);
    }
}
