//! Maze cells and compass directions

/// Side of a cell
///
/// [Direction::ALL] lists the sides in the order the generator scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    /// All four sides, in scanning order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Side facing this one across a shared edge
    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    /// Coordinate step `(dx, dy)`, with y growing downwards
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
        }
    }

    /// Bit of [Cell::wall_config] that is set when this side is a wall
    pub fn wall_bit(self) -> u8 {
        match self {
            Direction::East => 0x1,
            Direction::North => 0x2,
            Direction::West => 0x4,
            Direction::South => 0x8,
        }
    }
}

/// One position of the maze
///
/// Openings are only ever set through [crate::grid::Grid::carve], which
/// opens both cells sharing an edge at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    is_start: bool,
    is_finish: bool,
}

impl Cell {
    /// Fully walled cell at `(x, y)`
    pub(crate) fn new(x: usize, y: usize, is_start: bool, is_finish: bool) -> Self {
        Self {
            x,
            y,
            north: false,
            south: false,
            east: false,
            west: false,
            is_start,
            is_finish,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn north(&self) -> bool {
        self.north
    }

    pub fn south(&self) -> bool {
        self.south
    }

    pub fn east(&self) -> bool {
        self.east
    }

    pub fn west(&self) -> bool {
        self.west
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    /// Whether there is a passage through the given side
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::South => self.south,
        }
    }

    /// A cell is part of the maze as soon as any side is open
    pub fn is_filled(&self) -> bool {
        self.north || self.south || self.east || self.west
    }

    /// Number of open sides
    pub fn open_sides(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.is_open(direction))
            .count()
    }

    /// Bitmask of walled sides
    ///
    /// `0x1` east, `0x2` north, `0x4` west, `0x8` south. A fresh cell
    /// reads `0xF`.
    pub fn wall_config(&self) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&direction| !self.is_open(direction))
            .fold(0, |config, direction| config | direction.wall_bit())
    }

    pub(crate) fn open_toward(&mut self, direction: Direction) {
        match direction {
            Direction::East => self.east = true,
            Direction::North => self.north = true,
            Direction::West => self.west = true,
            Direction::South => self.south = true,
        }
    }
}
