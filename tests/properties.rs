use std::collections::VecDeque;

use maze_carver::{Direction, Grid, Maze};
use proptest::prelude::*;

/// Cells reachable from the start through open edges
fn reachable_from_start(grid: &Grid) -> usize {
    let start = grid.start_indices()[0];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    while let Some(index) = queue.pop_front() {
        for direction in Direction::ALL {
            if !grid.cell(index).is_open(direction) {
                continue;
            }
            let next = grid
                .neighbor(index, direction)
                .expect("open side must lead to a neighbor");
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen.into_iter().filter(|&s| s).count()
}

fn check_perfect_maze(grid: &Grid) {
    let cells = grid.width() * grid.height();

    assert!(grid.cells().all(|cell| cell.is_filled()));
    assert_eq!(grid.passage_count(), cells - 1);
    assert_eq!(reachable_from_start(grid), cells);

    for index in 0..grid.len() {
        for direction in Direction::ALL {
            match grid.neighbor(index, direction) {
                Some(other) => assert_eq!(
                    grid.cell(index).is_open(direction),
                    grid.cell(other).is_open(direction.opposite())
                ),
                None => assert!(!grid.cell(index).is_open(direction)),
            }
        }
    }

    let finish = grid.cell_at(grid.width() - 1, 0);
    assert!(finish.is_finish());
    assert_eq!(finish.open_sides(), 1);
    assert!(finish.west() || finish.south());

    let start = grid.cell_at(0, grid.height() - 1);
    assert!(start.is_start());
    assert!(start.open_sides() >= 1);
}

proptest! {
    #[test]
    fn every_size_gives_a_spanning_tree(
        width in 2usize..=20,
        height in 2usize..=20,
        seed in any::<u64>(),
    ) {
        let maze = Maze::from_seed(width, height, seed).unwrap();
        check_perfect_maze(maze.grid());
    }

    #[test]
    fn render_matches_cells(width in 2usize..=20, height in 2usize..=20, seed in any::<u64>()) {
        let maze = Maze::from_seed(width, height, seed).unwrap();
        let rows = maze
            .render()
            .lines()
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        prop_assert_eq!(rows.len(), height * 3);
        for y in 0..height {
            for x in 0..width {
                let cell = maze.cell_at(x, y);
                let (row, col) = (y * 3, x * 3);
                prop_assert_eq!(rows[row].len(), width * 3);
                prop_assert_eq!(rows[row][col], '#');
                prop_assert_eq!(rows[row + 2][col + 2], '#');
                prop_assert_eq!(rows[row][col + 1] == ' ', cell.north());
                prop_assert_eq!(rows[row + 1][col + 2] == ' ', cell.east());
            }
        }
    }

    #[test]
    fn out_of_range_sizes_fail(size in prop_oneof![0usize..2, 21usize..100], other in 2usize..=20) {
        prop_assert!(Maze::create(size, other).is_err());
        prop_assert!(Maze::create(other, size).is_err());
    }
}

#[test]
fn boundary_sizes_succeed() {
    for size in [2, 20] {
        let maze = Maze::create(size, size).unwrap();
        check_perfect_maze(maze.grid());
    }
}

#[test]
fn regeneration_stays_perfect() {
    let mut maze = Maze::from_seed(20, 20, 11).unwrap();
    for (width, height) in [(Some(2), None), (None, Some(3)), (Some(17), Some(19))] {
        maze.regenerate(width, height).unwrap();
        check_perfect_maze(maze.grid());
    }
    assert_eq!((maze.width(), maze.height()), (17, 19));
}
