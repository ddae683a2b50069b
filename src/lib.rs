//! **gridmaze** generates perfect mazes on rectangular grids, labels them with breadth first
//! distances and reconstructs shortest paths through them.
//!
//! ```
//! use gridmaze::cells::GridCoordinate;
//! use gridmaze::generators::GeneratorAlgorithm;
//! use gridmaze::grid::Grid;
//! use rand::SeedableRng;
//! use rand_xorshift::XorShiftRng;
//!
//! let mut rng = XorShiftRng::seed_from_u64(7);
//! let mut maze = Grid::new(8, 8).unwrap();
//! maze.generate(GeneratorAlgorithm::Sidewinder, &mut rng);
//!
//! let summary = maze.compute_distances(GridCoordinate::new(0, 0)).unwrap();
//! let path = maze.find_path(summary.farthest).unwrap();
//! assert_eq!(path.len() as u32, summary.max_distance + 1);
//! ```

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod input;
pub mod pathing;
pub mod session;
pub mod units;
