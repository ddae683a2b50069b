use std::fmt;

use fnv::FnvHashSet;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::{CoordinateSmallVec, Grid};
use crate::units::{ColumnsCount, RowsCount};


pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _grid: &Grid, _coord: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// Empty cell bodies, walls only.
#[derive(Debug, Copy, Clone)]
pub struct BlankDisplay;
impl GridDisplay for BlankDisplay {}

/// The distance label of each cell from the last distance pass over the grid.
#[derive(Debug, Copy, Clone)]
pub struct DistancesDisplay;
impl GridDisplay for DistancesDisplay {
    fn render_cell_body(&self, grid: &Grid, coord: GridCoordinate) -> String {
        if let Some(d) = grid.distance_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates =
            FnvHashSet::with_capacity_and_hasher(path.len(), Default::default());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, _: &Grid, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, _: &Grid, coord: GridCoordinate) -> String {

        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")
        } else if contains_coordinate(&self.end_coordinates) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// A grid paired with the display that fills in its cell bodies, ready for `{}` formatting.
pub struct GridView<'a> {
    grid: &'a Grid,
    display: &'a dyn GridDisplay,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid, display: &'a dyn GridDisplay) -> GridView<'a> {
        GridView { grid, display }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&GridView::new(self, &BlankDisplay), f)
    }
}

impl<'a> fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let grid = self.grid;
        let ColumnsCount(columns_count) = grid.columns();
        let RowsCount(rows_count) = grid.rows();

        // Start by special case rendering the text for the north most boundary
        let mut output = String::from(WALL_RD);
        if let Some(first_grid_row) = grid.iter_row().next() {
            for (index, coord) in first_grid_row.iter().enumerate() {
                output.push_str(WALL_LR_3);
                let is_east_open = grid.is_neighbour_linked(*coord, CompassPrimary::East);
                if is_east_open {
                    output.push_str(WALL_LR);
                } else {
                    let is_last_cell = index == (columns_count - 1);
                    if is_last_cell {
                        output.push_str(WALL_LD);
                    } else {
                        output.push_str(WALL_LRD);
                    }
                }
            }
        }
        output.push('\n');

        for (index_row, row) in grid.iter_row().enumerate() {

            let is_last_row = index_row == (rows_count - 1);

            // Starts of by special case rendering the west most boundary of the row
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell_coord) in row.into_iter().enumerate() {

                let render_cell_side = |direction, passage_clear_text, blocking_wall_text| {
                    if grid.is_neighbour_linked(cell_coord, direction) {
                        passage_clear_text
                    } else {
                        blocking_wall_text
                    }
                };
                let is_first_column = index_column == 0;
                let is_last_column = index_column == (columns_count - 1);
                let east_open = grid.is_neighbour_linked(cell_coord, CompassPrimary::East);
                let south_open = grid.is_neighbour_linked(cell_coord, CompassPrimary::South);

                // Each cell will simply use the southern wall of the cell above
                // it as its own northern wall, so we only need to worry about the cell’s body (room space),
                // its eastern boundary ('|'), and its southern boundary ('---+') minus the south west corner.
                let east_boundary = render_cell_side(CompassPrimary::East, " ", WALL_UD);

                row_middle_section_render.push_str(&self.display.render_cell_body(grid, cell_coord));
                row_middle_section_render.push_str(east_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if south_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                let south_boundary = render_cell_side(CompassPrimary::South, "   ", WALL_LR_3);
                row_bottom_section_render.push_str(south_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            grid.neighbour_at_direction(cell_coord, CompassPrimary::East)
                                .map_or(false,
                                        |c| grid.is_neighbour_linked(c, CompassPrimary::South));
                        let access_se_from_south =
                            grid.neighbour_at_direction(cell_coord, CompassPrimary::South)
                                .map_or(false,
                                        |c| grid.is_neighbour_linked(c, CompassPrimary::East));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}


#[cfg(test)]
mod tests {

    use smallvec::smallvec;

    use super::*;

    fn gc(row: u32, col: u32) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    #[test]
    fn single_closed_cell() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(format!("{}", g), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn open_passage_removes_the_wall() {
        let mut g = Grid::new(1, 2).unwrap();
        assert_eq!(format!("{}", g), "┌───┬───┐\n│   │   │\n└───┴───┘\n");
        g.link(gc(0, 0), CompassPrimary::East);
        assert_eq!(format!("{}", g), "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn two_by_two_tree() {
        let mut g = Grid::new(2, 2).unwrap();
        g.link(gc(0, 0), CompassPrimary::East);
        g.link(gc(0, 1), CompassPrimary::South);
        g.link(gc(0, 0), CompassPrimary::South);
        let expected = "┌───────┐\n\
                        │       │\n\
                        │   ╷   │\n\
                        │   │   │\n\
                        └───┴───┘\n";
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn distances_in_cell_bodies() {
        let mut g = Grid::new(1, 2).unwrap();
        g.link(gc(0, 0), CompassPrimary::East);
        g.compute_distances(gc(0, 0)).unwrap();
        let view = GridView::new(&g, &DistancesDisplay);
        assert_eq!(format!("{}", view), "┌───────┐\n│ 0   1 │\n└───────┘\n");
    }

    #[test]
    fn unlabelled_cells_render_blank() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(DistancesDisplay.render_cell_body(&g, gc(0, 0)), "   ");
    }

    #[test]
    fn path_and_end_point_bodies() {
        let g = Grid::new(1, 3).unwrap();
        let path = PathDisplay::new(&[gc(0, 0), gc(0, 1)]);
        assert_eq!(path.render_cell_body(&g, gc(0, 1)), " . ");
        assert_eq!(path.render_cell_body(&g, gc(0, 2)), "   ");

        let ends = StartEndPointsDisplay::new(smallvec![gc(0, 0)], smallvec![gc(0, 2)]);
        assert_eq!(ends.render_cell_body(&g, gc(0, 0)), " S ");
        assert_eq!(ends.render_cell_body(&g, gc(0, 2)), " E ");
        assert_eq!(ends.render_cell_body(&g, gc(0, 1)), "   ");
    }
}
