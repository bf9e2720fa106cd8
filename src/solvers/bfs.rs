use std::collections::VecDeque;

use crate::error::MazeError;
use crate::maze::{Coord, Grid};

/// Breadth-first shortest path from `start` to `goal` through open walls.
///
/// Neighbors are expanded north, east, south, west, so among several shortest paths the one
/// favouring that order wins. The search stops when `goal` is dequeued. Discovery marks and
/// parent links live in buffers local to this call; the grid is only read.
pub fn solve_bfs(grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<Coord>, MazeError> {
    let unreachable = MazeError::PathUnreachable {
        from: start,
        to: goal,
    };
    if !grid.is_in_bounds(start) || !grid.is_in_bounds(goal) {
        return Err(unreachable);
    }

    let mut discovered = vec![false; grid.len()];
    let mut parents: Vec<Option<Coord>> = vec![None; grid.len()];
    let mut queue = VecDeque::from([start]);
    discovered[grid.ravel_index(start)] = true;

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == goal {
            found = true;
            break;
        }

        for (neighbor, _) in grid.open_neighbors(current) {
            let idx = grid.ravel_index(neighbor);
            if !discovered[idx] {
                discovered[idx] = true;
                parents[idx] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    if !found {
        tracing::error!("[solve] Exit {:?} is unreachable from {:?}", goal, start);
        return Err(unreachable);
    }

    // Backtrack from the goal to build the path
    let mut path = vec![goal];
    let mut child = goal;
    while let Some(parent) = parents[grid.ravel_index(child)] {
        path.push(parent);
        child = parent;
    }
    path.reverse();
    tracing::debug!("[solve] Path of {} steps from {:?} to {:?}", path.len() - 1, start, goal);
    Ok(path)
}
