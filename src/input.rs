//! Pointer input to grid coordinates.

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::pathing::PathError;
use crate::units::{CellPixels, ColumnsCount, RowsCount};


/// Maps a pointer offset, in pixels from the top left of a drawn maze, onto the cell under it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InputMapper {
    cell_pixels: CellPixels,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl InputMapper {
    /// None if cells would be zero pixels wide.
    pub fn new(cell_pixels: CellPixels, rows: RowsCount, columns: ColumnsCount) -> Option<InputMapper> {
        if cell_pixels.0 == 0 {
            None
        } else {
            Some(InputMapper { cell_pixels, rows, columns })
        }
    }

    pub fn for_grid(cell_pixels: CellPixels, grid: &Grid) -> Option<InputMapper> {
        InputMapper::new(cell_pixels, grid.rows(), grid.columns())
    }

    #[inline]
    pub fn cell_pixels(&self) -> CellPixels {
        self.cell_pixels
    }

    /// The cell under the offset `(x, y)`, None when the offset is off the maze.
    pub fn to_grid_coordinate(&self, x: f64, y: f64) -> Option<GridCoordinate> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }

        let side = f64::from(self.cell_pixels.0);
        let col = (x / side).floor();
        let row = (y / side).floor();
        if row >= self.rows.0 as f64 || col >= self.columns.0 as f64 {
            return None;
        }
        Some(GridCoordinate::new(row as u32, col as u32))
    }

    /// Solve from the cell under the pointer back to the root of the grid's distance labels.
    /// Ok(None) when the pointer is not over the maze.
    pub fn solve_at(&self, grid: &Grid, x: f64, y: f64) -> Result<Option<Vec<GridCoordinate>>, PathError> {
        match self.to_grid_coordinate(x, y) {
            Some(coord) => grid.find_path(coord).map(Some),
            None => Ok(None),
        }
    }
}
