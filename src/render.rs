//! Text rendering of a maze grid

use itertools::Itertools;

use crate::cell::Cell;
use crate::grid::Grid;

/// Characters used to draw a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub floor: char,
    pub start: char,
    pub finish: char,
}

impl Glyphs {
    /// Plain ASCII, one byte per glyph
    pub const ASCII: Glyphs = Glyphs {
        wall: '#',
        floor: ' ',
        start: 'S',
        finish: 'F',
    };

    /// Brick walls on grass
    pub const EMOJI: Glyphs = Glyphs {
        wall: '🟫',
        floor: '🟩',
        start: '🏃',
        finish: '❎',
    };

    fn side(&self, open: bool) -> char {
        if open {
            self.floor
        } else {
            self.wall
        }
    }

    fn center(&self, cell: &Cell) -> char {
        if cell.is_start() {
            self.start
        } else if cell.is_finish() {
            self.finish
        } else {
            self.floor
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ASCII
    }
}

/// Draw every cell as a 3x3 block
///
/// Block corners are always walls, edge midpoints show the cell openings
/// and the center marks the start or the finish. The result has
/// `height * 3` lines of `width * 3` glyphs, without a trailing newline.
pub fn render(grid: &Grid, glyphs: &Glyphs) -> String {
    (0..grid.height())
        .flat_map(|y| {
            let row = grid.row(y);
            [
                row.iter()
                    .flat_map(|cell| [glyphs.wall, glyphs.side(cell.north()), glyphs.wall])
                    .collect::<String>(),
                row.iter()
                    .flat_map(|cell| {
                        [
                            glyphs.side(cell.west()),
                            glyphs.center(cell),
                            glyphs.side(cell.east()),
                        ]
                    })
                    .collect::<String>(),
                row.iter()
                    .flat_map(|cell| [glyphs.wall, glyphs.side(cell.south()), glyphs.wall])
                    .collect::<String>(),
            ]
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use crate::cell::Direction;
    use crate::grid::Grid;
    use crate::render::{render, Glyphs};

    #[test]
    fn unfilled_grid_is_solid_wall() {
        let grid = Grid::new(2, 2).unwrap();

        let text = render(&grid, &Glyphs::ASCII);

        let expected = "
######
# ##F#
######
######
#S## #
######"
            .trim();
        assert_eq!(text, expected);
    }

    #[test]
    fn openings_become_floor() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.carve(2, Direction::East).unwrap();
        grid.carve(0, Direction::South).unwrap();
        grid.carve(1, Direction::West).unwrap();

        let text = render(&grid, &Glyphs::ASCII);

        let expected = "
######
#   F#
# ####
# ####
#S   #
######"
            .trim_start_matches('\n');
        assert_eq!(text, expected);
    }

    #[test]
    fn block_size_follows_grid() {
        let grid = Grid::new(7, 4).unwrap();

        let text = render(&grid, &Glyphs::EMOJI);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|line| line.chars().count() == 21));
        assert_eq!(text.chars().filter(|&c| c == '🏃').count(), 1);
        assert_eq!(text.chars().filter(|&c| c == '❎').count(), 1);
    }
}
