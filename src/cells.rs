use std::convert::From;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex};

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub col: u32,
}

impl GridCoordinate {
    pub fn new(row: u32, col: u32) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        GridCoordinate::new(row as u32, col as u32)
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(row_col_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Every direction, in the fixed order used for adjacency lists and path tie breaks.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    pub fn inverse(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    #[inline]
    fn wall_index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::South => 1,
            CompassPrimary::East => 2,
            CompassPrimary::West => 3,
        }
    }
}

/// Snapshot of the four wall flags of a cell, `true` meaning the wall is standing.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellWalls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

/// One room of the maze.
///
/// A cell never stores its neighbours, the owning `Grid` computes them from the cell's
/// position. Walls towards the grid boundary are always standing.
#[derive(Debug, Clone)]
pub struct Cell {
    coordinate: GridCoordinate,
    walls: [bool; 4],
    pub(crate) distance: Option<u32>,
}

impl Cell {
    pub(crate) fn new(coordinate: GridCoordinate) -> Cell {
        Cell {
            coordinate,
            walls: [true; 4],
            distance: None,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    /// Is there a wall on this side of the cell?
    #[inline]
    pub fn wall(&self, direction: CompassPrimary) -> bool {
        self.walls[direction.wall_index()]
    }

    #[inline]
    pub fn is_open(&self, direction: CompassPrimary) -> bool {
        !self.wall(direction)
    }

    pub fn walls(&self) -> CellWalls {
        CellWalls {
            north: self.wall(CompassPrimary::North),
            south: self.wall(CompassPrimary::South),
            east: self.wall(CompassPrimary::East),
            west: self.wall(CompassPrimary::West),
        }
    }

    /// Steps from the root of the last distance pass, `None` if the cell was not reached
    /// or no pass has run over the current walls.
    #[inline]
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    #[inline]
    pub fn has_distance(&self) -> bool {
        self.distance.is_some()
    }

    #[inline]
    pub(crate) fn set_wall(&mut self, direction: CompassPrimary, standing: bool) {
        self.walls[direction.wall_index()] = standing;
    }

    #[inline]
    pub(crate) fn close_all_walls(&mut self) {
        self.walls = [true; 4];
    }
}
