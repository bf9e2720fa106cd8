use rand::Rng;

use crate::maze::{Coord, Grid};

/// Randomized depth-first carving with an explicit stack.
///
/// Each step picks a random carvable neighbor of the cell on top of the stack, opens the wall
/// between them and continues from the neighbor. A cell is popped for good once it has no
/// carvable neighbors left, which is exactly when the recursive form would return.
pub fn recursive_backtrack<R: Rng>(grid: &mut Grid, start: Coord, rng: &mut R) {
    if grid.is_empty() || grid[start].protected {
        tracing::warn!("[generate] Start cell {:?} cannot be carved", start);
        return;
    }

    grid.carve(start);

    // The stack will keep only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        // Re-query every time: carving further down may have used up this cell's neighbors
        let neighbors = grid.neighbors_for_carving(cell);

        if !neighbors.is_empty() {
            let (neighbor, dir) = neighbors[rng.random_range(0..neighbors.len())];
            grid.carve(neighbor);
            grid.remove_wall(cell, dir);
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_spanning_tree};
    use crate::maze::Direction;

    #[test]
    fn test_recursive_backtrack() {
        let mut grid = Grid::new(7, 7);
        recursive_backtrack(&mut grid, (0, 0), &mut get_rng(Some(3)));
        // Every cell joins the tree on an unobstructed grid
        assert!(grid.coords().all(|c| grid[c].carved));
        assert_spanning_tree(&grid);
    }

    #[test]
    fn test_single_row_is_a_corridor() {
        let mut grid = Grid::new(5, 1);
        recursive_backtrack(&mut grid, (0, 0), &mut get_rng(Some(0)));
        for x in 0..4 {
            assert!(!grid.has_wall((x, 0), Direction::East));
        }
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1);
        recursive_backtrack(&mut grid, (0, 0), &mut get_rng(Some(0)));
        assert!(grid[(0, 0)].carved);
        assert_eq!(grid[(0, 0)].walls(), 0xF);
    }

    #[test]
    fn test_protected_start_is_left_alone() {
        let mut grid = Grid::new(3, 3);
        grid[(0, 0)].protected = true;
        recursive_backtrack(&mut grid, (0, 0), &mut get_rng(Some(0)));
        assert_eq!(grid.open_passages(), 0);
        assert!(grid.coords().all(|c| !grid[c].carved));
    }
}
