//! Fixed-size cell storage

use anyhow::{ensure, Context};

use crate::cell::{Cell, Direction};

/// Rectangular collection of cells, stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Smallest allowed width or height
    pub const MIN_DIMENSION: usize = 2;
    /// Largest allowed width or height
    pub const MAX_DIMENSION: usize = 20;

    /// Create a grid of unfilled cells
    ///
    /// The start is placed in the bottom-left corner `(0, height - 1)` and
    /// the finish in the top-right corner `(width - 1, 0)`.
    ///
    /// Returns error if either dimension is outside
    /// [Self::MIN_DIMENSION]..=[Self::MAX_DIMENSION].
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        Self::validate_dimension("width", width)?;
        Self::validate_dimension("height", height)?;

        let cells = (0..width * height)
            .map(|index| {
                let (x, y) = (index % width, index / width);
                let is_start = x == 0 && y == height - 1;
                let is_finish = x == width - 1 && y == 0;
                Cell::new(x, y, is_start, is_finish)
            })
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn validate_dimension(name: &str, value: usize) -> anyhow::Result<()> {
        ensure!(
            (Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&value),
            "Maze {} must be between {} and {}, got {}",
            name,
            Self::MIN_DIMENSION,
            Self::MAX_DIMENSION,
            value
        );
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a valid grid holds at least four cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of `(x, y)`
    ///
    /// # Panics
    /// If the coordinates lie outside the grid.
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Cell ({}, {}) is outside the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// Cell at `(x, y)`
    ///
    /// # Panics
    /// If the coordinates lie outside the grid. Use [Self::get] to probe.
    pub fn cell_at(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index_of(x, y)]
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(x + y * self.width)
        } else {
            None
        }
    }

    /// Cell at linear `index`
    ///
    /// # Panics
    /// If `index` is not below [Self::len].
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Index of the adjacent cell in `direction`, if it is inside the grid
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let cell = self.cells.get(index)?;
        let (dx, dy) = direction.offset();
        let x = cell.x().checked_add_signed(dx)?;
        let y = cell.y().checked_add_signed(dy)?;
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    /// Open the edge between cell `index` and its neighbor in `direction`
    ///
    /// Both cells get the matching opening. Returns the neighbor index.
    pub fn carve(&mut self, index: usize, direction: Direction) -> anyhow::Result<usize> {
        let other = self.neighbor(index, direction).with_context(|| {
            format!(
                "Cannot carve {:?} from cell {}: no neighbor in a {}x{} grid",
                direction, index, self.width, self.height
            )
        })?;
        self.cells[index].open_toward(direction);
        self.cells[other].open_toward(direction.opposite());
        Ok(other)
    }

    /// Indices of the cells flagged as start
    pub fn start_indices(&self) -> Vec<usize> {
        self.role_indices(Cell::is_start)
    }

    /// Indices of the cells flagged as finish
    pub fn finish_indices(&self) -> Vec<usize> {
        self.role_indices(Cell::is_finish)
    }

    fn role_indices(&self, has_role: fn(&Cell) -> bool) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| has_role(cell))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of open edges, each counted once
    ///
    /// Counting only east and south openings visits every edge exactly
    /// once, since carving is symmetric.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| usize::from(cell.east()) + usize::from(cell.south()))
            .sum()
    }
}
