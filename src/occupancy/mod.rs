//! Occupancy Resolver - pure queries over a list of claims
//!
//! These functions never mutate anything; they answer questions about a
//! snapshot of claims plus grid bounds:
//! - Is a region inside the grid?
//! - Does a region collide with an existing claim?
//! - Which claim covers a given cell, and where is its anchor?
//!
//! The free functions scan linearly in store order. [`CellIndex`] answers
//! the same per-cell questions through a sparse cell map that the store
//! keeps up to date as claims are appended.
mod index;

pub use index::CellIndex;

use crate::claim::Claim;
use crate::grid::Grid;
use crate::region::{Cell, Region};

/// What a renderer should draw at one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView<'a> {
    /// No claim covers the cell
    Free,

    /// The cell is the claim's anchor; draw its content here, once
    Anchor(&'a Claim),

    /// The cell is covered by a claim anchored elsewhere
    Covered { anchor: Cell, claim: &'a Claim },
}

impl<'a> CellView<'a> {
    pub fn claim(&self) -> Option<&'a Claim> {
        match self {
            CellView::Free => None,
            CellView::Anchor(claim) => Some(claim),
            CellView::Covered { claim, .. } => Some(claim),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, CellView::Free)
    }

    fn for_owner(cell: Cell, owner: Option<&'a Claim>) -> Self {
        match owner {
            None => CellView::Free,
            Some(claim) if claim.is_anchor(cell) => CellView::Anchor(claim),
            Some(claim) => CellView::Covered {
                anchor: claim.anchor(),
                claim,
            },
        }
    }
}

/// Check whether a region lies entirely on the grid
pub fn is_within_bounds(grid: &Grid, region: &Region) -> bool {
    region.size >= 1
        && region.row_end() <= u64::from(grid.height())
        && region.col_end() <= u64::from(grid.width())
}

/// Half-open axis-aligned overlap test
pub fn overlaps(a: &Region, b: &Region) -> bool {
    a.overlaps(b)
}

/// First claim, in store order, that overlaps `candidate`
pub fn find_conflict<'a>(candidate: &Region, existing: &'a [Claim]) -> Option<&'a Claim> {
    existing
        .iter()
        .find(|claim| overlaps(candidate, &claim.region))
}

/// Claim covering `cell`, if any
///
/// With non-overlapping claims at most one can match.
pub fn resolve_owner(cell: Cell, existing: &[Claim]) -> Option<&Claim> {
    existing.iter().find(|claim| claim.covers(cell))
}

/// Anchor cell of the claim covering `cell`, if any
pub fn resolve_anchor(cell: Cell, existing: &[Claim]) -> Option<Cell> {
    resolve_owner(cell, existing).map(Claim::anchor)
}

/// Renderer view of one cell
pub fn cell_view(cell: Cell, existing: &[Claim]) -> CellView<'_> {
    CellView::for_owner(cell, resolve_owner(cell, existing))
}

/// Renderer view of one cell, resolved through an index over `existing`
pub fn cell_view_indexed<'a>(cell: Cell, index: &CellIndex, existing: &'a [Claim]) -> CellView<'a> {
    CellView::for_owner(cell, index.owner(cell).and_then(|pos| existing.get(pos)))
}
