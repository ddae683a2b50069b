use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::CompassPrimary;
use crate::grid::Grid;


#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GeneratorAlgorithm {
    BinaryTree,
    Sidewinder,
}

impl fmt::Display for GeneratorAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            GeneratorAlgorithm::BinaryTree => "binary-tree",
            GeneratorAlgorithm::Sidewinder => "sidewinder",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GeneratorAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" | "binary-tree" | "binary_tree" => Ok(GeneratorAlgorithm::BinaryTree),
            "sidewinder" => Ok(GeneratorAlgorithm::Sidewinder),
            other => Err(format!("unknown maze generation algorithm '{}'", other)),
        }
    }
}

impl Grid {
    /// Stand every wall back up then carve a perfect maze with `algorithm`.
    pub fn generate<R: Rng>(&mut self, algorithm: GeneratorAlgorithm, rng: &mut R) {
        self.reset_walls();
        match algorithm {
            GeneratorAlgorithm::BinaryTree => binary_tree(self, rng),
            GeneratorAlgorithm::Sidewinder => sidewinder(self, rng),
        }
        debug!("generated {}x{} {} maze with {} passages",
               self.rows().0, self.columns().0, algorithm, self.links_count());
    }
}

/// Apply the binary tree maze generation algorithm to a grid with all walls standing.
///
/// Every cell carves a passage either North or East, picked at random from whichever of the
/// two has a neighbour. Only the north east corner has neither. The top row and the eastern
/// column always end up as unbroken corridors.
pub fn binary_tree<R: Rng>(grid: &mut Grid, rng: &mut R) {

    const NEIGHBOURS_TO_CHECK: [CompassPrimary; 2] = [CompassPrimary::North, CompassPrimary::East];

    for cell_coord in grid.iter() {

        let candidates = NEIGHBOURS_TO_CHECK
            .iter()
            .cloned()
            .filter(|dir| grid.neighbour_at_direction(cell_coord, *dir).is_some())
            .collect::<SmallVec<[CompassPrimary; 2]>>();

        let direction = match candidates.len() {
            0 => continue,
            1 => candidates[0],
            n => candidates[rng.gen_range(0..n)],
        };
        grid.link(cell_coord, direction);
    }
}

/// Apply the sidewinder maze generation algorithm to a grid with all walls standing.
///
/// The top row is carved into one corridor running East. Every other row is walked West to
/// East collecting a run of cells. After each cell a coin flip, or reaching the eastern edge,
/// closes the run: one random member of the run gets a passage North and the run starts
/// again. Otherwise the passage East is carved and the run grows.
pub fn sidewinder<R: Rng>(grid: &mut Grid, rng: &mut R) {

    for (row_index, row) in grid.iter_row().enumerate() {

        if row_index == 0 {
            for coord in &row {
                grid.link(*coord, CompassPrimary::East);
            }
            continue;
        }

        let mut run = SmallVec::<[_; 16]>::new();
        for coord in row {
            run.push(coord);

            let at_eastern_boundary = grid.neighbour_at_direction(coord, CompassPrimary::East)
                .is_none();
            let should_close_out = at_eastern_boundary || rng.gen::<bool>(); // coin flip

            if should_close_out {
                let run_member = run[rng.gen_range(0..run.len())];
                grid.link(run_member, CompassPrimary::North);
                run.clear();
            } else {
                grid.link(coord, CompassPrimary::East);
            }
        }
    }
}
