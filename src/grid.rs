use std::error::Error;
use std::fmt;
use std::slice;

use log::trace;
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary, GridCoordinate};
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::{BatchIter, CellIter};
use crate::pathing::DistanceSummary;
use crate::units::{ColumnsCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<GridCoordinate>; 4]>;


#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    InvalidDimensions { rows: usize, cols: usize },
    InvalidCoordinate(GridCoordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {}x{}, rows and columns must be at least 1", rows, cols)
            }
            GridError::InvalidCoordinate(coord) => write!(f, "coordinate {} is not on the grid", coord),
        }
    }
}

impl Error for GridError {}

/// A rectangular maze: a row-major arena of cells plus the record of the last distance pass.
///
/// Neighbours are derived from coordinates, so the only edge state is the pair of wall flags
/// either side of each interior edge, which `link` always updates together.
#[derive(Clone)]
pub struct Grid {
    dimensions: GridDimensions,
    pub(crate) cells: Vec<Cell>,
    pub(crate) last_distances: Option<DistanceSummary>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, links: {:?}, distances: {:?}",
               self.rows(), self.columns(), self.links_count(), self.last_distances)
    }
}

impl Grid {
    /// Allocate a `rows` x `cols` grid with every wall standing.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {

        let too_large = rows > u32::MAX as usize || cols > u32::MAX as usize ||
                        rows.checked_mul(cols).is_none();
        if rows == 0 || cols == 0 || too_large {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(cols));
        let NodesCount(cells_count) = dimensions.size();
        let mut cells = Vec::with_capacity(cells_count);
        cells.extend((0..cells_count).map(|index| Cell::new(dimensions.index_to_coordinate(index))));

        Ok(Grid {
            dimensions,
            cells,
            last_distances: None,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        self.dimensions.coordinate_to_index(coord)
    }

    #[inline]
    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> slice::Iter<Cell> {
        self.cells.iter()
    }

    /// The adjacent cell in `direction`. Boundaries and off grid coordinates give None.
    #[inline]
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        self.dimensions.offset_coordinate(coord, direction)
    }

    pub fn neighbours_at_directions(&self,
                                    coord: GridCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells to the North, South, East or West of a cell, linked by a passage or not.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Knock down the wall between a cell and its neighbour in `direction`.
    ///
    /// Returns false, changing nothing, when there is no neighbour that way. Any distance
    /// labels are discarded as they no longer describe the walls.
    pub fn link(&mut self, coord: GridCoordinate, direction: CompassPrimary) -> bool {

        let neighbour = match self.neighbour_at_direction(coord, direction) {
            Some(n) => n,
            None => return false,
        };
        let (a_index, b_index) = match (self.grid_coordinate_to_index(coord),
                                        self.grid_coordinate_to_index(neighbour)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        self.invalidate_distances();
        self.cells[a_index].set_wall(direction, false);
        self.cells[b_index].set_wall(direction.inverse(), false);
        trace!("linked {} {:?} to {}", coord, direction, neighbour);
        true
    }

    /// Cells reachable from `coord` through an open wall, in North, South, East, West order.
    /// None if the coordinate is not on the grid.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        let cell = self.cell(coord)?;
        let linked = CompassPrimary::ALL
            .iter()
            .filter(|dir| cell.is_open(**dir))
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect();
        Some(linked)
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        CompassPrimary::ALL
            .iter()
            .any(|dir| self.neighbour_at_direction(a, *dir) == Some(b) &&
                       self.is_neighbour_linked(a, *dir))
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.cell(coord).map_or(false, |cell| cell.is_open(direction))
    }

    /// Number of open passages, each counted once.
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }

    /// Every open passage once, from the cell with the lower index to its South or East neighbour.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            [CompassPrimary::South, CompassPrimary::East]
                .iter()
                .filter(|dir| self.is_neighbour_linked(coord, **dir))
                .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                .map(|neighbour| (coord, neighbour))
                .collect::<SmallVec<[(GridCoordinate, GridCoordinate); 2]>>()
        })
    }

    /// The passages as an undirected graph. Node indices are the row-major cell indices.
    pub fn links_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let (NodesCount(nodes), _) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, nodes.saturating_sub(1));
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// Stand every wall back up, the starting point of maze generation.
    pub fn reset_walls(&mut self) {
        self.invalidate_distances();
        for cell in &mut self.cells {
            cell.close_all_walls();
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::rows(self.dimensions)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::columns(self.dimensions)
    }

    pub(crate) fn invalidate_distances(&mut self) {
        if self.last_distances.take().is_some() {
            for cell in &mut self.cells {
                cell.distance = None;
            }
        }
    }
}


#[cfg(test)]
mod tests {

    use itertools::Itertools;
    use petgraph::algo::connected_components;

    use super::*;

    fn small_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).expect("valid grid dimensions")
    }

    // SmallVec has no direct comparison against array literals, compare as slices.
    macro_rules! assert_smallvec_eq {
        ($x:expr, $y:expr) => (assert_eq!(&*$x, &*$y))
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(Grid::new(0, 5).unwrap_err(), GridError::InvalidDimensions { rows: 0, cols: 5 });
        assert_eq!(Grid::new(5, 0).unwrap_err(), GridError::InvalidDimensions { rows: 5, cols: 0 });
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let g = small_grid(3, 4);
        assert_eq!(g.size(), 12);
        assert_eq!(g.rows(), RowsCount(3));
        assert_eq!(g.columns(), ColumnsCount(4));
        assert_eq!(g.links_count(), 0);
        for cell in g.cells() {
            assert!(CompassPrimary::ALL.iter().all(|dir| cell.wall(*dir)));
            assert!(!cell.has_distance());
        }
    }

    #[test]
    fn neighbour_cells() {
        let g = small_grid(10, 10);

        let check_expected_neighbours = |coord, expected_neighbours: &[GridCoordinate]| {
            let neighbours: Vec<GridCoordinate> = g.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<GridCoordinate> = expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };
        let gc = |r, c| GridCoordinate::new(r, c);

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(0, 1), gc(1, 0)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(8, 9), gc(9, 8)]);

        // sides
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(1, 1), gc(0, 2)]);
        check_expected_neighbours(gc(8, 9), &[gc(7, 9), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);

        // off the grid
        check_expected_neighbours(gc(10, 10), &[]);
    }

    #[test]
    fn neighbours_at_dirs() {
        let g = small_grid(2, 2);
        let gc = |r, c| GridCoordinate::new(r, c);

        let check_neighbours =
            |coord, dirs: &[CompassPrimary], neighbour_opts: &[Option<GridCoordinate>]| {
                assert_smallvec_eq!(g.neighbours_at_directions(coord, dirs), neighbour_opts);
            };
        check_neighbours(gc(0, 0), &[], &[]);
        check_neighbours(gc(0, 0), &[CompassPrimary::North], &[None]);
        check_neighbours(gc(0, 0),
                         &[CompassPrimary::West, CompassPrimary::North],
                         &[None, None]);
        check_neighbours(gc(0, 0),
                         &[CompassPrimary::East, CompassPrimary::South],
                         &[Some(gc(0, 1)), Some(gc(1, 0))]);
        check_neighbours(gc(1, 1),
                         &[CompassPrimary::West, CompassPrimary::North],
                         &[Some(gc(1, 0)), Some(gc(0, 1))]);
    }

    #[test]
    fn neighbour_symmetry() {
        let g = small_grid(4, 5);
        for coord in g.iter() {
            for dir in CompassPrimary::ALL.iter() {
                if let Some(n) = g.neighbour_at_direction(coord, *dir) {
                    assert_eq!(g.neighbour_at_direction(n, dir.inverse()), Some(coord));
                }
            }
        }
    }

    #[test]
    fn linking_cells() {
        let mut g = small_grid(4, 4);
        let a = GridCoordinate::new(1, 0);
        let b = GridCoordinate::new(2, 0);
        let c = GridCoordinate::new(3, 0);

        macro_rules! bi_check_linked {
            ($x:expr, $y:expr) => (g.is_linked($x, $y) && g.is_linked($y, $x))
        }

        assert!(!bi_check_linked!(a, b));
        assert!(g.links(a).unwrap().is_empty());

        assert!(g.link(a, CompassPrimary::South));
        assert!(bi_check_linked!(a, b));
        assert!(!bi_check_linked!(b, c));
        assert_smallvec_eq!(g.links(a).unwrap(), &[b]);
        assert_smallvec_eq!(g.links(b).unwrap(), &[a]);
        assert!(g.cell(a).unwrap().is_open(CompassPrimary::South));
        assert!(g.cell(b).unwrap().is_open(CompassPrimary::North));

        assert!(g.link(c, CompassPrimary::North));
        assert!(bi_check_linked!(b, c));
        assert!(!bi_check_linked!(a, c));
        // North before South
        assert_smallvec_eq!(g.links(b).unwrap(), &[a, c]);
        assert_eq!(g.links_count(), 2);

        // linking again changes nothing
        assert!(g.link(b, CompassPrimary::North));
        assert_eq!(g.links_count(), 2);
    }

    #[test]
    fn linked_order_is_north_south_east_west() {
        let mut g = small_grid(3, 3);
        let centre = GridCoordinate::new(1, 1);
        for dir in [CompassPrimary::West, CompassPrimary::East, CompassPrimary::South, CompassPrimary::North].iter() {
            assert!(g.link(centre, *dir));
        }
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_smallvec_eq!(g.links(centre).unwrap(), &[gc(0, 1), gc(2, 1), gc(1, 2), gc(1, 0)]);
    }

    #[test]
    fn no_links_across_boundaries() {
        let mut g = small_grid(2, 2);
        let corner = GridCoordinate::new(0, 0);
        assert!(!g.link(corner, CompassPrimary::North));
        assert!(!g.link(corner, CompassPrimary::West));
        assert!(g.cell(corner).unwrap().wall(CompassPrimary::North));
        assert!(g.cell(corner).unwrap().wall(CompassPrimary::West));
        assert!(!g.is_neighbour_linked(corner, CompassPrimary::North));
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn no_links_to_invalid_coordinates() {
        let mut g = small_grid(2, 2);
        let invalid = GridCoordinate::new(100, 100);
        assert!(!g.link(invalid, CompassPrimary::North));
        assert!(g.links(invalid).is_none());
        assert!(g.cell(invalid).is_none());
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn links_iteration_and_graph() {
        let mut g = small_grid(2, 2);
        let gc = |r, c| GridCoordinate::new(r, c);
        g.link(gc(0, 0), CompassPrimary::East);
        g.link(gc(0, 1), CompassPrimary::South);
        g.link(gc(1, 0), CompassPrimary::North);

        assert_eq!(g.iter_links().collect::<Vec<_>>(),
                   vec![(gc(0, 0), gc(1, 0)), (gc(0, 0), gc(0, 1)), (gc(0, 1), gc(1, 1))]);

        let graph = g.links_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(connected_components(&graph), 1);
        assert_eq!(graph[NodeIndex::new(3)], gc(1, 1));
    }

    #[test]
    fn reset_walls_closes_everything() {
        let mut g = small_grid(3, 3);
        for coord in g.iter().collect::<Vec<_>>() {
            g.link(coord, CompassPrimary::East);
        }
        assert_eq!(g.links_count(), 6);
        g.reset_walls();
        assert_eq!(g.links_count(), 0);
    }
}
