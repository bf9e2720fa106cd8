mod bfs;

pub use bfs::solve_bfs;

use crate::error::MazeError;
use crate::maze::{Coord, Grid};

/// Shortest route from `from` to `to`, both ends included.
///
/// Side-effect free and cheap enough to call on every frame of a live preview.
pub fn solve(grid: &Grid, from: Coord, to: Coord) -> Result<Vec<Coord>, MazeError> {
    solve_bfs(grid, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};
    use crate::maze::Direction;
    use std::collections::HashSet;

    /// Exhaustive shortest distance: tries every simple path with a depth-first search.
    fn brute_force_distance(grid: &Grid, from: Coord, to: Coord) -> Option<usize> {
        fn walk(
            grid: &Grid,
            at: Coord,
            to: Coord,
            depth: usize,
            on_path: &mut HashSet<Coord>,
            best: &mut Option<usize>,
        ) {
            if at == to {
                *best = Some(best.map_or(depth, |b| b.min(depth)));
                return;
            }
            for (next, _) in grid.open_neighbors(at) {
                if on_path.insert(next) {
                    walk(grid, next, to, depth + 1, on_path, best);
                    on_path.remove(&next);
                }
            }
        }

        let mut best = None;
        let mut on_path = HashSet::from([from]);
        walk(grid, from, to, 0, &mut on_path, &mut best);
        best
    }

    #[test]
    fn test_matches_exhaustive_search_on_carved_mazes() {
        for (seed, generator) in [(1, Generator::RecurBacktrack), (2, Generator::Prim)] {
            let mut grid = Grid::new(6, 5);
            generate_maze(&mut grid, generator, (0, 0), &mut get_rng(Some(seed)));
            let path = solve(&grid, (0, 0), (5, 4)).unwrap();
            assert_eq!(Some(path.len() - 1), brute_force_distance(&grid, (0, 0), (5, 4)));
        }
    }

    #[test]
    fn test_matches_exhaustive_search_with_cycles() {
        // A grid with a few walls knocked out has many routes of different lengths
        let mut grid = Grid::new(4, 4);
        generate_maze(&mut grid, Generator::Prim, (0, 0), &mut get_rng(Some(5)));
        grid.remove_wall((1, 1), Direction::East);
        grid.remove_wall((2, 2), Direction::South);
        grid.remove_wall((0, 2), Direction::East);
        for goal in [(3, 3), (3, 0), (0, 3), (2, 1)] {
            let path = solve(&grid, (0, 0), goal).unwrap();
            assert_eq!(Some(path.len() - 1), brute_force_distance(&grid, (0, 0), goal));
            // Every step moves to an adjacent cell through an open wall
            for pair in path.windows(2) {
                let dir = Direction::between(pair[0], pair[1]).unwrap();
                assert!(!grid.has_wall(pair[0], dir));
            }
        }
    }
}
