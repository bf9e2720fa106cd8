use rand::Rng;

use crate::maze::{Coord, Grid};

/// Randomized Prim's algorithm over the non-protected cells.
///
/// The frontier holds not-yet-carved cells next to the carved region, each tagged with the
/// direction it was first discovered in. A random frontier cell is carved and attached to the
/// tree through exactly one wall: the wall it was discovered through when it touches a single
/// carved cell, or a randomly chosen one when it touches several.
pub fn randomized_prim<R: Rng>(grid: &mut Grid, start: Coord, rng: &mut R) {
    if grid.is_empty() || grid[start].protected {
        tracing::warn!("[generate] Start cell {:?} cannot be carved", start);
        return;
    }

    grid.carve(start);

    // Tracks frontier membership so that each cell is queued at most once
    let mut in_frontier = vec![false; grid.len()];
    let mut frontier = grid.neighbors_for_carving(start);
    for &(coord, _) in &frontier {
        in_frontier[grid.ravel_index(coord)] = true;
    }

    while !frontier.is_empty() {
        // Randomly select a cell from the frontier
        let idx = rng.random_range(0..frontier.len());
        let (cell, discovered_dir) = frontier.swap_remove(idx);
        grid.carve(cell);

        for (coord, dir) in grid.neighbors_for_carving(cell) {
            let slot = &mut in_frontier[grid.ravel_index(coord)];
            if !*slot {
                *slot = true;
                frontier.push((coord, dir));
            }
        }

        let carved = grid.carved_neighbors(cell);
        debug_assert!(!carved.is_empty(), "frontier cell {cell:?} has no carved neighbor");
        match carved.as_slice() {
            [] => {}
            [(only, dir)] => {
                // The only carved neighbor is the cell that discovered this one
                debug_assert_eq!(*dir, discovered_dir.opposite());
                debug_assert_eq!(grid.neighbor(*only, discovered_dir), Some(cell));
                grid.remove_wall(cell, discovered_dir.opposite());
            }
            _ => {
                let (_, dir) = carved[rng.random_range(0..carved.len())];
                grid.remove_wall(cell, dir);
            }
        }
    }
}
