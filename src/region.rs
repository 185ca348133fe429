//! Cells and square regions
//!
//! Regions use half-open intervals: a region anchored at `(r, c)` with size
//! `s` covers rows `r..r + s` and columns `c..c + s`. Two regions whose edges
//! touch do not overlap.

use serde::{Deserialize, Serialize};

/// A single grid cell addressed by row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square block of `size × size` cells anchored at its top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Row of the top-left (anchor) cell
    pub anchor_row: u32,

    /// Column of the top-left (anchor) cell
    pub anchor_col: u32,

    /// Side length in cells
    pub size: u32,
}

impl Region {
    pub fn new(anchor_row: u32, anchor_col: u32, size: u32) -> Self {
        Self {
            anchor_row,
            anchor_col,
            size,
        }
    }

    /// Build a region from untrusted signed input
    ///
    /// Returns `None` for negative coordinates, a size below 1, or values
    /// that do not fit a cell index.
    pub fn from_signed(anchor_row: i64, anchor_col: i64, size: i64) -> Option<Self> {
        if size < 1 {
            return None;
        }
        Some(Self {
            anchor_row: u32::try_from(anchor_row).ok()?,
            anchor_col: u32::try_from(anchor_col).ok()?,
            size: u32::try_from(size).ok()?,
        })
    }

    /// Top-left cell
    pub fn anchor(&self) -> Cell {
        Cell::new(self.anchor_row, self.anchor_col)
    }

    /// One past the last covered row
    pub fn row_end(&self) -> u64 {
        u64::from(self.anchor_row) + u64::from(self.size)
    }

    /// One past the last covered column
    pub fn col_end(&self) -> u64 {
        u64::from(self.anchor_col) + u64::from(self.size)
    }

    /// Number of covered cells
    pub fn area(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }

    /// Axis-aligned intersection test over half-open intervals
    pub fn overlaps(&self, other: &Region) -> bool {
        u64::from(self.anchor_row) < other.row_end()
            && self.row_end() > u64::from(other.anchor_row)
            && u64::from(self.anchor_col) < other.col_end()
            && self.col_end() > u64::from(other.anchor_col)
    }

    /// Check whether the region covers a cell
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= self.anchor_row
            && u64::from(cell.row) < self.row_end()
            && cell.col >= self.anchor_col
            && u64::from(cell.col) < self.col_end()
    }

    /// Iterate every covered cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Region {
            anchor_row,
            anchor_col,
            size,
        } = *self;
        (0..size).flat_map(move |dr| {
            (0..size).map(move |dc| Cell::new(anchor_row + dr, anchor_col + dc))
        })
    }
}
