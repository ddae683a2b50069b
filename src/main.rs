use docopt::Docopt;
use error_chain::bail;
use gridmaze::{
    cells::GridCoordinate,
    generators::GeneratorAlgorithm,
    grid::{CoordinateSmallVec, Grid},
    grid_displays::{BlankDisplay, DistancesDisplay, GridDisplay, GridView, PathDisplay,
                    StartEndPointsDisplay},
    input::InputMapper,
    session::MazeSession,
    units::CellPixels,
};
use log::{info, warn};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use smallvec::smallvec;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Grid Mazes

Usage:
    gridmaze_driver -h | --help
    gridmaze_driver [binary | sidewinder] [--grid-size=<n> | --grid-width=<w> --grid-height=<h>] [--seed=<s>] [--show-distances | --show-path] [--mark-start-end] [--start-point-row=<sr> --start-point-col=<sc>] [--end-point-row=<er> --end-point-col=<ec>] [--click-x=<x> --click-y=<y>] [--cell-pixels=<p>] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help                Show this screen.
    --grid-size=<n>          The grid size is n * n.
    --grid-width=<w>         The grid width (columns) in a w*h grid [default: 20].
    --grid-height=<h>        The grid height (rows) in a w*h grid [default: 20].
    --seed=<s>               Seed for the maze generator. Random if not given.
    --show-distances         Show the distance from the start point to every cell.
    --show-path              Show the path from the end point to the start point.
    --mark-start-end         Mark the start point 'S' and end point 'E'.
    --start-point-row=<sr>   Row of the path start. The longest path start if not specified.
    --start-point-col=<sc>   Column of the path start.
    --end-point-row=<er>     Row of the path end. The cell furthest from the start if not specified.
    --end-point-col=<ec>     Column of the path end.
    --click-x=<x>            Pointer x offset in pixels, solves from the cell under the pointer.
    --click-y=<y>            Pointer y offset in pixels.
    --cell-pixels=<p>        Pixel size of one cell when mapping a pointer offset [default: 10].
    --text-out=<path>        Output file path for the text rendering of the maze.
    --save-edges=<path>      Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_binary: bool,
    cmd_sidewinder: bool,
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_show_distances: bool,
    flag_show_path: bool,
    flag_mark_start_end: bool,
    flag_start_point_row: Option<u32>,
    flag_start_point_col: Option<u32>,
    flag_end_point_row: Option<u32>,
    flag_end_point_col: Option<u32>,
    flag_click_x: Option<f64>,
    flag_click_y: Option<f64>,
    flag_cell_pixels: u32,
    flag_text_out: String,
    flag_save_edges: String,
}

// Error, ErrorKind, ResultExt (`chain_err`) and Result for the driver, with `?` conversions
// from the library and io errors.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Grid(::gridmaze::grid::GridError);
            Path(::gridmaze::pathing::PathError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let algorithm = if args.cmd_binary {
        GeneratorAlgorithm::BinaryTree
    } else {
        GeneratorAlgorithm::Sidewinder
    };
    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("generating {}x{} {} maze with seed {}", width, height, algorithm, seed);

    let mut session = MazeSession::new(height, width, algorithm, XorShiftRng::seed_from_u64(seed))?;

    let (start, end) = path_end_points(&args, &mut session)?;

    let click_path = if let (Some(x), Some(y)) = (args.flag_click_x, args.flag_click_y) {
        let mapper = InputMapper::for_grid(CellPixels(args.flag_cell_pixels), session.grid())
            .ok_or("Cell pixel size must be greater than zero.")?;
        let path = mapper.solve_at(session.grid(), x, y)?;
        match path {
            Some(ref p) => info!("clicked cell {} is {} steps from {}", p[0], p.len() - 1, start),
            None => warn!("click at ({}, {}) is outside the maze", x, y),
        }
        path
    } else {
        None
    };

    let grid = session.grid();
    let path = match click_path {
        Some(p) => p,
        None => grid.find_path(end)?,
    };

    let text = render_maze(grid, &args, start, end, &path);
    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(grid, &args.flag_save_edges)?;
    }

    Ok(())
}

/// Decide where a path starts and ends, leaving the grid labelled from the start.
///
/// Defaults to the longest path found when the session generated the maze, or the cell
/// furthest from a requested start point.
fn path_end_points(maze_args: &MazeArgs,
                   session: &mut MazeSession<XorShiftRng>)
                   -> Result<(GridCoordinate, GridCoordinate)> {

    let requested_start = match (maze_args.flag_start_point_row, maze_args.flag_start_point_col) {
        (Some(row), Some(col)) => Some(GridCoordinate::new(row, col)),
        _ => None,
    };
    let requested_end = match (maze_args.flag_end_point_row, maze_args.flag_end_point_col) {
        (Some(row), Some(col)) => Some(GridCoordinate::new(row, col)),
        _ => None,
    };

    let (start, furthest) = if let Some(start) = requested_start {
        let summary = session.reroot(start)
            .chain_err(|| "Provided invalid start coordinate.")?;
        (start, summary.farthest)
    } else {
        let endpoints = session.endpoints();
        (endpoints.start, endpoints.exit)
    };

    let end = requested_end.unwrap_or(furthest);
    if !session.grid().is_valid_coordinate(end) {
        bail!("Provided invalid end coordinate {}.", end);
    }
    Ok((start, end))
}

/// Wade through the driver arguments and decide what goes in the cell bodies:
/// distances, the path, start and end markers or nothing.
fn render_maze(maze_grid: &Grid,
               maze_args: &MazeArgs,
               start: GridCoordinate,
               end: GridCoordinate,
               path: &[GridCoordinate])
               -> String {

    let starts: CoordinateSmallVec = smallvec![start];
    let ends: CoordinateSmallVec = smallvec![path.first().cloned().unwrap_or(end)];

    let display: Box<dyn GridDisplay> = if maze_args.flag_show_distances {
        Box::new(DistancesDisplay)
    } else if maze_args.flag_show_path || maze_args.flag_click_x.is_some() {
        Box::new(PathDisplay::new(path))
    } else if maze_args.flag_mark_start_end {
        Box::new(StartEndPointsDisplay::new(starts, ends))
    } else {
        Box::new(BlankDisplay)
    };

    format!("{}", GridView::new(maze_grid, display.as_ref()))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let graph = maze_grid.links_graph();
    let mut graph_data = format!("{} {}\n", graph.node_count(), graph.edge_count());

    for edge in graph.edge_references() {
        let src_as_1_based_index = edge.source().index() + 1;
        let dst_as_1_based_index = edge.target().index() + 1;
        graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("saved {} passages to {}", graph.edge_count(), file_path);

    Ok(())
}
