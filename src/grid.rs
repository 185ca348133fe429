//! Grid: the fixed-size board claims are placed on
//!
//! A grid is fixed when a store is created and never changes afterwards.
//! `cell_size` only matters to renderers; the engine works in cells.

use crate::error::{Result, WallError};
use crate::region::Cell;
use serde::{Deserialize, Serialize};

/// Default number of columns
pub const GRID_WIDTH: u32 = 250;

/// Default number of rows
pub const GRID_HEIGHT: u32 = 200;

/// Default rendered size of one cell, in pixels
pub const CELL_SIZE: u32 = 10;

/// Grid dimensions as they appear in serialized form, before validation
#[derive(Deserialize)]
struct RawGrid {
    width: u32,
    height: u32,
    cell_size: u32,
}

impl TryFrom<RawGrid> for Grid {
    type Error = WallError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::new(raw.width, raw.height, raw.cell_size)
    }
}

/// Immutable grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    /// Number of columns
    width: u32,

    /// Number of rows
    height: u32,

    /// Rendering unit (pixels per cell)
    cell_size: u32,
}

impl Grid {
    /// Create a grid, rejecting zero-sized dimensions
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WallError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if cell_size == 0 {
            return Err(WallError::InvalidConfig(
                "cell size must be positive".to_string(),
            ));
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of addressable cells
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Iterate every cell in row-major order (the renderer's scan order)
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    /// Pixel dimensions of the rendered grid
    pub fn pixel_size(&self) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(self.cell_size),
            u64::from(self.height) * u64::from(self.cell_size),
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = Grid::default();
        assert_eq!(grid.width(), 250);
        assert_eq!(grid.height(), 200);
        assert_eq!(grid.cell_count(), 50_000);
        assert_eq!(grid.pixel_size(), (2500, 2000));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Grid::new(0, 10, 10).is_err());
        assert!(Grid::new(10, 0, 10).is_err());
        assert!(Grid::new(10, 10, 0).is_err());
        assert!(Grid::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_deserialize_validates_dimensions() {
        let grid: Grid =
            serde_json::from_str(r#"{"width": 4, "height": 3, "cell_size": 10}"#).unwrap();
        assert_eq!(grid, Grid::new(4, 3, 10).unwrap());

        let zero = serde_json::from_str::<Grid>(r#"{"width": 0, "height": 3, "cell_size": 10}"#);
        assert!(zero.is_err());
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(2, 2, 1).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }
}
