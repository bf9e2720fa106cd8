//! Seeded maze generation with a fixed decorative pattern, breadth-first solving and a compact
//! hex export.

pub mod config;
pub mod encode;
pub mod error;
pub mod generators;
pub mod maze;
pub mod session;
pub mod solvers;

pub use error::{ConfigError, Error, MazeError};
pub use maze::{Cell, Coord, Direction, Grid};
pub use session::{Maze, MazeParams};
