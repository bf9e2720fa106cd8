//! The fixed "42" shape stamped into the middle of the grid.
//!
//! Protected cells are never carved, so the shape shows up as a block of fully walled cells.

use super::{Coord, Grid};
use crate::error::MazeError;

/// Smallest width and height that can hold the pattern.
pub const MIN_PATTERN_SIZE: u16 = 9;

/// Cell offsets from the pattern origin, stroke by stroke.
const PATTERN_CELLS: [Coord; 22] = [
    // "4": left stem, crossbar, right stem
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (2, 4),
    (2, 5),
    (2, 6),
    // "2": top bar, right side, middle bar, left side, bottom bar
    (4, 0),
    (5, 0),
    (6, 0),
    (6, 1),
    (6, 2),
    (6, 3),
    (5, 3),
    (4, 3),
    (4, 4),
    (4, 5),
    (4, 6),
    (5, 6),
    (6, 6),
];

/// The constant shape template, relative to [`origin`].
pub fn offsets() -> &'static [Coord] {
    &PATTERN_CELLS
}

/// Anchor of the pattern: `(width / 2 - 3, height / 2 - 3)`.
/// Only meaningful for grids at least [`MIN_PATTERN_SIZE`] in both axes.
pub fn origin(width: u16, height: u16) -> Coord {
    (width / 2 - 3, height / 2 - 3)
}

/// Marks the pattern's cells as protected.
pub fn apply_pattern(grid: &mut Grid) -> Result<(), MazeError> {
    let (width, height) = (grid.width(), grid.height());
    if width < MIN_PATTERN_SIZE || height < MIN_PATTERN_SIZE {
        return Err(MazeError::PatternTooSmall { width, height });
    }

    let (ox, oy) = origin(width, height);
    for &(dx, dy) in offsets() {
        grid[(ox + dx, oy + dy)].protected = true;
    }
    tracing::debug!("[pattern] Protected {} cells at origin {:?}", offsets().len(), (ox, oy));
    Ok(())
}

/// Fails with [`MazeError::EntryExitInPattern`] if either endpoint landed on a protected cell.
pub fn check_endpoints(grid: &Grid, entry: Coord, exit: Coord) -> Result<(), MazeError> {
    match [entry, exit].into_iter().find(|&c| grid[c].protected) {
        Some(coord) => Err(MazeError::EntryExitInPattern { coord }),
        None => Ok(()),
    }
}
