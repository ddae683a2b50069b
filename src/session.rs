use log::info;
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::generators::GeneratorAlgorithm;
use crate::grid::{Grid, GridError};
use crate::pathing::{DistanceSummary, PathError};


/// The two ends of one longest shortest path through the maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeEndpoints {
    pub start: GridCoordinate,
    pub exit: GridCoordinate,
    /// Steps from `start` to `exit`.
    pub length: u32,
}

/// Owns a maze and the random source that carves it.
///
/// Every change to the walls or the distance labels takes `&mut self`, and `regenerate` does
/// generation and both distance passes in one call, so readers only ever see a finished maze.
#[derive(Debug)]
pub struct MazeSession<R: Rng> {
    grid: Grid,
    algorithm: GeneratorAlgorithm,
    rng: R,
    endpoints: MazeEndpoints,
}

impl<R: Rng> MazeSession<R> {
    /// Create a `rows` x `cols` maze, ready to be solved towards its start point.
    pub fn new(rows: usize,
               cols: usize,
               algorithm: GeneratorAlgorithm,
               rng: R)
               -> Result<MazeSession<R>, GridError> {

        let grid = Grid::new(rows, cols)?;
        let origin = GridCoordinate::new(0, 0);
        let mut session = MazeSession {
            grid,
            algorithm,
            rng,
            endpoints: MazeEndpoints { start: origin, exit: origin, length: 0 },
        };
        session.regenerate()?;
        Ok(session)
    }

    /// Carve a fresh maze then label it from the start of its longest path.
    pub fn regenerate(&mut self) -> Result<MazeEndpoints, GridError> {

        self.grid.generate(self.algorithm, &mut self.rng);

        let first_pass = self.grid.compute_distances(GridCoordinate::new(0, 0))?;
        let second_pass = self.grid.compute_distances(first_pass.farthest)?;

        self.endpoints = MazeEndpoints {
            start: second_pass.root,
            exit: second_pass.farthest,
            length: second_pass.max_distance,
        };
        info!("{} maze: start {}, exit {}, {} steps apart",
              self.algorithm, self.endpoints.start, self.endpoints.exit, self.endpoints.length);
        Ok(self.endpoints)
    }

    /// Label the maze from a different root. Paths then lead to `root`.
    pub fn reroot(&mut self, root: GridCoordinate) -> Result<DistanceSummary, GridError> {
        self.grid.compute_distances(root)
    }

    /// The generator used by the next `regenerate`.
    pub fn set_algorithm(&mut self, algorithm: GeneratorAlgorithm) {
        self.algorithm = algorithm;
    }

    #[inline]
    pub fn algorithm(&self) -> GeneratorAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn endpoints(&self) -> MazeEndpoints {
        self.endpoints
    }

    /// Path from `from` to the current root of the distance labels.
    pub fn solve_from(&self, from: GridCoordinate) -> Result<Vec<GridCoordinate>, PathError> {
        self.grid.find_path(from)
    }
}
