pub mod cell;
mod grid;
pub mod pattern;

pub use cell::{Cell, Direction};
pub use grid::Grid;

/// `(x, y)` position of a cell: column then row, origin at the top-left corner.
pub type Coord = (u16, u16);
