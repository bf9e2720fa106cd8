use std::path::PathBuf;

use thiserror::Error;

use crate::maze::Coord;

/// Failures raised while building or solving a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The grid is below the minimum size needed by the decorative pattern.
    /// Recoverable: build again without the pattern.
    #[error("grid {width}x{height} is too small for the pattern (minimum {min}x{min})", min = crate::maze::pattern::MIN_PATTERN_SIZE)]
    PatternTooSmall { width: u16, height: u16 },
    /// Entry or exit sits on a protected cell. Recoverable: build again without the pattern.
    #[error("entry/exit point {coord:?} lies inside the pattern")]
    EntryExitInPattern { coord: Coord },
    /// The exit cannot be reached from the start. Generation itself is broken if this happens.
    #[error("no path from {from:?} to {to:?}")]
    PathUnreachable { from: Coord, to: Coord },
}

/// Failures raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration file format '{0}' (expected a .txt or .conf file)")]
    FileExtension(PathBuf),
    #[error("invalid configuration line '{0}' (expected KEY=VALUE)")]
    MalformedLine(String),
    #[error("missing mandatory configuration key: '{0}'")]
    MissingKey(&'static str),
    #[error("invalid '{key}' value '{value}' (expected a positive integer)")]
    InvalidInteger { key: &'static str, value: String },
    #[error("'{0}' must be a positive integer")]
    NonPositive(&'static str),
    #[error("'{key}' must be either \"True\" or \"False\" (case-sensitive), got '{value}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("invalid '{key}' coordinates '{value}' (expected two non-negative integers: x,y)")]
    InvalidCoord { key: &'static str, value: String },
    #[error("invalid output file '{0}' (expected a .txt file)")]
    OutputExtension(String),
    #[error("'ENTRY' and 'EXIT' cannot be the same cell")]
    EntryEqualsExit,
    #[error("'{key}' coordinates {coord:?} are out of maze bounds")]
    OutOfBounds { key: &'static str, coord: Coord },
}

/// Top-level error returned by [`crate::session::run`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("failed to write maze output: {0}")]
    Io(#[from] std::io::Error),
}
