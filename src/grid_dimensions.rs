use crate::cells::{CompassPrimary, GridCoordinate};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// Shape of a rectangular grid and the arithmetic between coordinates and the row-major
/// arena index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    /// Dimensions must be non-zero, `Grid::new` checks this before construction.
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> GridDimensions {
        GridDimensions { rows, columns }
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// (cells, interior edges) - the number of walls that could ever be opened.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        let (rows, cols) = (self.rows.0, self.columns.0);
        let interior_edges = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
        (cells_count, EdgesCount(interior_edges))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows.0 && (coord.col as usize) < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.columns.0 + coord.col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> GridCoordinate {
        let width = self.columns.0;
        GridCoordinate::new((index / width) as u32, (index % width) as u32)
    }

    /// The coordinate one step away in `direction`, None if that steps off the grid.
    pub fn offset_coordinate(&self,
                             coord: GridCoordinate,
                             direction: CompassPrimary)
                             -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }

        let (row, col) = (coord.row, coord.col);
        let offset = match direction {
            CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::East => col.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::West => col.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
        };
        offset.filter(|c| self.is_valid_coordinate(*c))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(rows: usize, cols: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(cols))
    }

    #[test]
    fn coordinate_index_conversion() {
        let d = dims(3, 4);
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(d.coordinate_to_index(gc(0, 0)), Some(0));
        assert_eq!(d.coordinate_to_index(gc(0, 3)), Some(3));
        assert_eq!(d.coordinate_to_index(gc(1, 0)), Some(4));
        assert_eq!(d.coordinate_to_index(gc(2, 3)), Some(11));
        assert_eq!(d.coordinate_to_index(gc(3, 0)), None);
        assert_eq!(d.coordinate_to_index(gc(0, 4)), None);
        assert_eq!(d.coordinate_to_index(gc(u32::MAX, u32::MAX)), None);

        for index in 0..12 {
            assert_eq!(d.coordinate_to_index(d.index_to_coordinate(index)), Some(index));
        }
    }

    #[test]
    fn offsets_at_boundaries() {
        let d = dims(2, 2);
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(d.offset_coordinate(gc(0, 0), CompassPrimary::North), None);
        assert_eq!(d.offset_coordinate(gc(0, 0), CompassPrimary::West), None);
        assert_eq!(d.offset_coordinate(gc(0, 0), CompassPrimary::South), Some(gc(1, 0)));
        assert_eq!(d.offset_coordinate(gc(0, 0), CompassPrimary::East), Some(gc(0, 1)));
        assert_eq!(d.offset_coordinate(gc(1, 1), CompassPrimary::South), None);
        assert_eq!(d.offset_coordinate(gc(1, 1), CompassPrimary::East), None);
        assert_eq!(d.offset_coordinate(gc(5, 5), CompassPrimary::North), None);
    }

    #[test]
    fn graph_size_counts_interior_edges() {
        assert_eq!(dims(1, 1).graph_size(), (NodesCount(1), EdgesCount(0)));
        assert_eq!(dims(1, 5).graph_size(), (NodesCount(5), EdgesCount(4)));
        assert_eq!(dims(2, 2).graph_size(), (NodesCount(4), EdgesCount(4)));
        assert_eq!(dims(3, 4).graph_size(), (NodesCount(12), EdgesCount(17)));
    }
}
