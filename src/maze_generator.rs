//! Maze generation

use anyhow::{bail, ensure, Context};
use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::cell::{Cell, Direction};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::random::RandomRange;

/// Whether a filled `neighbor`, reached from a frontier cell through
/// `direction`, may be connected to
///
/// The finish must stay a dead end: nothing is ever attached to it through
/// its own west or south side, i.e. through the east or north side of the
/// cell being carved. West and south links are unrestricted.
pub fn finish_is_leaf_only(direction: Direction, neighbor: &Cell) -> bool {
    match direction {
        Direction::East | Direction::North => !neighbor.is_finish(),
        Direction::West | Direction::South => true,
    }
}

/// Perfect maze generator growing a random frontier from the start cell.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator backed by [StdRng], seeded from `seed` or from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_random(if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        })
    }
}

impl<R: RandomRange> MazeGenerator<R> {
    pub fn with_random(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze
    ///
    /// Starting from the bottom-left start cell, every iteration draws a
    /// random unfilled cell bordering the maze and links it to one random
    /// filled neighbor. Every cell ends up connected by exactly one path,
    /// and the finish is a dead end entered from its west or south side.
    ///
    /// Returns error if the dimensions are out of range, or if the grid
    /// state breaks an invariant of the algorithm.
    pub fn generate_maze(&mut self, width: usize, height: usize) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        let start = Self::locate_start(&grid)?;

        let seed_direction = match self.random.random_range(0, 1) {
            0 => Direction::East,
            _ => Direction::North,
        };
        debug!(
            "Generating {}x{} maze, start cell {} opens {:?}",
            width, height, start, seed_direction
        );
        let seeded = grid
            .carve(start, seed_direction)
            .context("Start cell has no neighbor to open")?;

        let mut frontier = Frontier::new();
        Self::register_neighbors(&grid, &mut frontier, start);
        Self::register_neighbors(&grid, &mut frontier, seeded);

        while let Some(current) = frontier.draw_random(&mut self.random) {
            if grid.cell(current).is_filled() {
                trace!("Skipping stale frontier cell {}", current);
                continue;
            }

            let eligible = Self::eligible_directions(&grid, current);
            ensure!(
                !eligible.is_empty(),
                "Frontier cell ({}, {}) has no filled neighbor to connect to",
                grid.cell(current).x(),
                grid.cell(current).y()
            );

            let direction = eligible[self.random.random_range(0, eligible.len() - 1)];
            let neighbor = grid.carve(current, direction)?;
            trace!("Carved {} -> {} ({:?})", current, neighbor, direction);

            Self::register_neighbors(&grid, &mut frontier, current);
        }

        debug!(
            "Generated {}x{} maze with {} passages",
            width,
            height,
            grid.passage_count()
        );
        Ok(grid)
    }

    fn locate_start(grid: &Grid) -> anyhow::Result<usize> {
        match grid.start_indices().as_slice() {
            [start] => Ok(*start),
            [] => bail!("Maze has no start cell"),
            starts => bail!("Maze has {} start cells, expected one", starts.len()),
        }
    }

    /// Offer the unfilled neighbors of a freshly filled cell to the frontier
    ///
    /// The finish never explores its surroundings.
    fn register_neighbors(grid: &Grid, frontier: &mut Frontier, index: usize) {
        if grid.cell(index).is_finish() {
            return;
        }
        for direction in Direction::ALL {
            if let Some(neighbor) = grid.neighbor(index, direction) {
                if !grid.cell(neighbor).is_filled() {
                    frontier.offer(neighbor);
                }
            }
        }
    }

    /// Directions from `index` leading to a filled cell it may connect to
    fn eligible_directions(grid: &Grid, index: usize) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                grid.neighbor(index, direction)
                    .map(|neighbor| grid.cell(neighbor))
                    .is_some_and(|neighbor| {
                        neighbor.is_filled() && finish_is_leaf_only(direction, neighbor)
                    })
            })
            .collect()
    }
}
