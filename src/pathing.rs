//! Breadth first distance labelling of a maze and shortest path reconstruction over those labels.
//!
//! Labels live on the cells of the grid that was searched. They describe the walls as they were
//! when `compute_distances` ran; linking or resetting walls drops them again, so a path is never
//! walked over stale distances.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use log::{debug, warn};

use crate::cells::{Cell, GridCoordinate};
use crate::grid::{Grid, GridError};


/// What a distance pass found: where it started and the first cell found at the greatest depth.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct DistanceSummary {
    pub root: GridCoordinate,
    pub farthest: GridCoordinate,
    pub max_distance: u32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum PathError {
    InvalidCoordinate(GridCoordinate),
    /// No distance pass has run since the walls last changed.
    DistancesNotComputed,
    /// The start cell was not reached by the last distance pass.
    Unreachable(GridCoordinate),
    /// No linked neighbour is closer to the root. The labels or the maze are broken.
    ReconstructionFailed { at: GridCoordinate, distance: u32 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PathError::InvalidCoordinate(coord) => write!(f, "coordinate {} is not on the grid", coord),
            PathError::DistancesNotComputed => {
                write!(f, "distances have not been computed for the current walls")
            }
            PathError::Unreachable(coord) => write!(f, "cell {} is not reachable from the root", coord),
            PathError::ReconstructionFailed { at, distance } => {
                write!(f,
                       "path reconstruction failed at {} (distance {}): no linked neighbour is closer to the root",
                       at,
                       distance)
            }
        }
    }
}

impl Error for PathError {}

impl Grid {
    /// Label every cell with its number of steps from `origin`.
    ///
    /// Cells are visited first in first out, so ties for the farthest cell go to whichever
    /// cell reached the maximum first. On a maze that is not connected the cells that could
    /// not be reached stay unlabelled.
    pub fn compute_distances(&mut self, origin: GridCoordinate) -> Result<DistanceSummary, GridError> {

        let origin_index = self.grid_coordinate_to_index(origin)
            .ok_or(GridError::InvalidCoordinate(origin))?;

        for cell in &mut self.cells {
            cell.distance = None;
        }
        self.cells[origin_index].distance = Some(0);

        let mut max_distance = 0;
        let mut farthest = origin;
        let mut labelled_count = 1;

        let mut frontier = VecDeque::with_capacity(self.size());
        frontier.push_back((origin, 0u32));

        while let Some((cell_coord, distance_to_cell)) = frontier.pop_front() {

            let links = self.links(cell_coord).unwrap_or_default();
            for link_coord in &links {

                let link_index = match self.grid_coordinate_to_index(*link_coord) {
                    Some(index) => index,
                    None => continue,
                };
                if self.cells[link_index].distance.is_some() {
                    continue;
                }

                let distance_to_link = distance_to_cell + 1;
                self.cells[link_index].distance = Some(distance_to_link);
                labelled_count += 1;
                if distance_to_link > max_distance {
                    max_distance = distance_to_link;
                    farthest = *link_coord;
                }
                frontier.push_back((*link_coord, distance_to_link));
            }
        }

        let summary = DistanceSummary {
            root: origin,
            farthest,
            max_distance,
        };
        self.last_distances = Some(summary);

        debug!("distances from {}: farthest {} at {}, {} of {} cells reached",
               origin, farthest, max_distance, labelled_count, self.size());
        Ok(summary)
    }

    /// The route from `from` down the distance labels to the root of the last distance pass,
    /// both ends included.
    ///
    /// Each step moves to the linked neighbour with the smallest distance below the current one,
    /// earlier directions in North, South, East, West order winning ties.
    pub fn find_path(&self, from: GridCoordinate) -> Result<Vec<GridCoordinate>, PathError> {

        let start_cell = self.cell(from).ok_or(PathError::InvalidCoordinate(from))?;
        if self.last_distances.is_none() {
            return Err(PathError::DistancesNotComputed);
        }
        let mut current_distance = start_cell.distance().ok_or(PathError::Unreachable(from))?;

        let mut path = Vec::with_capacity(current_distance as usize + 1);
        let mut current_coord = from;
        path.push(current_coord);

        while current_distance != 0 {

            let linked_neighbours = self.links(current_coord).unwrap_or_default();
            let closest_to_root = linked_neighbours
                .iter()
                .filter_map(|coord| {
                    self.cell(*coord)
                        .and_then(Cell::distance)
                        .map(|distance| (*coord, distance))
                })
                .filter(|&(_, distance)| distance < current_distance)
                .min_by_key(|&(_, distance)| distance);

            match closest_to_root {
                Some((closer_coord, closer_distance)) => {
                    current_coord = closer_coord;
                    current_distance = closer_distance;
                    path.push(current_coord);
                }
                None => {
                    warn!("no way down from {} at distance {}", current_coord, current_distance);
                    return Err(PathError::ReconstructionFailed {
                        at: current_coord,
                        distance: current_distance,
                    });
                }
            }
        }

        Ok(path)
    }

    /// Summary of the last distance pass, None once the walls have changed since.
    #[inline]
    pub fn last_distances(&self) -> Option<DistanceSummary> {
        self.last_distances
    }

    #[inline]
    pub fn distances_root(&self) -> Option<GridCoordinate> {
        self.last_distances.map(|summary| summary.root)
    }

    #[inline]
    pub fn max_distance(&self) -> Option<u32> {
        self.last_distances.map(|summary| summary.max_distance)
    }

    #[inline]
    pub fn farthest_cell(&self) -> Option<GridCoordinate> {
        self.last_distances.map(|summary| summary.farthest)
    }

    #[inline]
    pub fn distance_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.cell(coord).and_then(Cell::distance)
    }

    /// Every cell at the maximum distance of the last pass, in row-major order.
    pub fn farthest_cells(&self) -> Vec<GridCoordinate> {
        match self.max_distance() {
            Some(max) => {
                self.cells()
                    .filter(|cell| cell.distance() == Some(max))
                    .map(Cell::coordinate)
                    .collect()
            }
            None => vec![],
        }
    }

    /// Did the last distance pass reach every cell?
    pub fn is_fully_labelled(&self) -> bool {
        self.last_distances.is_some() && self.cells().all(Cell::has_distance)
    }
}

/// One of the longest shortest paths in a perfect maze.
///
/// The cell farthest from `origin` is one end. A second pass rooted there finds the other end,
/// and the path runs from that far end back to the root. The grid is left labelled from the
/// root. On a maze with loops or unreachable regions the result is just some long path.
pub fn longest_path(grid: &mut Grid, origin: GridCoordinate) -> Result<Vec<GridCoordinate>, PathError> {

    let first_pass = grid.compute_distances(origin)
        .map_err(|_| PathError::InvalidCoordinate(origin))?;

    let long_path_root = first_pass.farthest;
    let second_pass = grid.compute_distances(long_path_root)
        .map_err(|_| PathError::InvalidCoordinate(long_path_root))?;

    grid.find_path(second_pass.farthest)
}
