//! Carve perfect mazes by growing a random frontier
//!
//! A maze is a rectangle of cells where every cell is reachable from the
//! start in the bottom-left corner along exactly one path. The finish in
//! the top-right corner is always a dead end.
//!
//! # Examples
//! ```
//! use maze_carver::Maze;
//!
//! let maze = Maze::from_seed(3, 3, 2024).unwrap();
//! assert!(maze.cell_at(0, 2).is_start());
//! assert!(maze.cell_at(2, 0).is_finish());
//!
//! let text = maze.render();
//! assert_eq!(text.lines().count(), 9);
//! assert!(text.lines().next().unwrap().starts_with("###"));
//! println!("{}", text);
//! ```
//!
//! Regenerating keeps the dimensions that are not given:
//! ```
//! use maze_carver::Maze;
//!
//! let mut maze = Maze::from_seed(4, 6, 1).unwrap();
//! maze.regenerate(Some(8), None).unwrap();
//! assert_eq!((maze.width(), maze.height()), (8, 6));
//! assert!(maze.regenerate(Some(21), None).is_err());
//! ```

use std::fmt;

use rand::rngs::StdRng;

pub mod cell;
pub mod frontier;
pub mod grid;
pub mod maze_generator;
pub mod random;
pub mod render;

pub use cell::{Cell, Direction};
pub use grid::Grid;
pub use maze_generator::MazeGenerator;
pub use random::RandomRange;
pub use render::Glyphs;

/// Generated maze together with the generator that rebuilds it
pub struct Maze<R = StdRng> {
    grid: Grid,
    generator: MazeGenerator<R>,
}

impl Maze<StdRng> {
    /// Generate a maze from entropy
    ///
    /// Returns error if a dimension is outside `2..=20`.
    pub fn create(width: usize, height: usize) -> anyhow::Result<Self> {
        Self::with_generator(width, height, MazeGenerator::new(None))
    }

    /// Generate a reproducible maze
    ///
    /// Returns error if a dimension is outside `2..=20`.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> anyhow::Result<Self> {
        Self::with_generator(width, height, MazeGenerator::new(Some(seed)))
    }
}

impl<R: RandomRange> Maze<R> {
    /// Generate a maze drawing from the given random source
    pub fn with_random(width: usize, height: usize, random: R) -> anyhow::Result<Self> {
        Self::with_generator(width, height, MazeGenerator::with_random(random))
    }

    fn with_generator(
        width: usize,
        height: usize,
        mut generator: MazeGenerator<R>,
    ) -> anyhow::Result<Self> {
        let grid = generator.generate_maze(width, height)?;
        Ok(Self { grid, generator })
    }

    /// Replace the maze with a freshly generated one
    ///
    /// Omitted dimensions keep their current value. On error the current
    /// maze is left as it was.
    pub fn regenerate(
        &mut self,
        width: Option<usize>,
        height: Option<usize>,
    ) -> anyhow::Result<()> {
        let width = width.unwrap_or(self.grid.width());
        let height = height.unwrap_or(self.grid.height());
        self.grid = self.generator.generate_maze(width, height)?;
        Ok(())
    }
}

impl<R> Maze<R> {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell at `(x, y)`
    ///
    /// # Panics
    /// If the coordinates lie outside the maze.
    pub fn cell_at(&self, x: usize, y: usize) -> &Cell {
        self.grid.cell_at(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Draw the maze with [Glyphs::ASCII]
    pub fn render(&self) -> String {
        self.render_with(&Glyphs::ASCII)
    }

    pub fn render_with(&self, glyphs: &Glyphs) -> String {
        render::render(&self.grid, glyphs)
    }
}

impl<R> fmt::Display for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
