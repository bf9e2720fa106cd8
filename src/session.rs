use std::path::PathBuf;

use rand::Rng;

use crate::encode;
use crate::error::{Error, MazeError};
use crate::generators::{FIXED_SEED, Generator, generate_maze, get_rng};
use crate::maze::{Coord, Grid, pattern};
use crate::solvers::solve;

/// Validated parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeParams {
    pub width: u16,
    pub height: u16,
    pub entry: Coord,
    pub exit: Coord,
    pub output_path: PathBuf,
    /// `true` selects the recursive backtracker, `false` Prim's algorithm.
    pub use_backtracker: bool,
    /// Seed the random source with [`FIXED_SEED`] instead of the OS.
    pub fixed_seed: bool,
    /// Try to stamp the decorative pattern into the grid.
    pub with_pattern: bool,
}

impl MazeParams {
    pub fn generator(&self) -> Generator {
        Generator::from_perfect_flag(self.use_backtracker)
    }

    pub fn rng(&self) -> rand::rngs::StdRng {
        get_rng(self.fixed_seed.then_some(FIXED_SEED))
    }
}

/// A generated and solved maze.
#[derive(Debug, Clone)]
pub struct Maze {
    pub params: MazeParams,
    pub grid: Grid,
    /// Entry to exit, both included.
    pub path: Vec<Coord>,
    /// Whether the pattern survived into the final grid.
    pub has_pattern: bool,
}

impl Maze {
    /// Builds a wholly new maze with the same parameters. `self` is left untouched, so a
    /// renderer may keep drawing it until the new one is ready.
    ///
    /// With `fixed_seed` set the random source is reseeded, so the rebuilt maze is identical;
    /// otherwise `rng` is used.
    pub fn regenerate<R: Rng>(&self, rng: &mut R) -> Result<Maze, MazeError> {
        if self.params.fixed_seed {
            build(&self.params, &mut self.params.rng())
        } else {
            build(&self.params, rng)
        }
    }

    /// Shortest route from `from` to this maze's exit.
    pub fn solve_from(&self, from: Coord) -> Result<Vec<Coord>, MazeError> {
        solve(&self.grid, from, self.params.exit)
    }

    /// The complete output file text.
    pub fn to_output(&self) -> String {
        encode::render_output(&self.grid, self.params.entry, self.params.exit, &self.path)
    }

    pub fn save(&self) -> std::io::Result<()> {
        encode::save(
            &self.params.output_path,
            &self.grid,
            self.params.entry,
            self.params.exit,
            &self.path,
        )
    }
}

/// Allocates a grid, stamps the pattern when asked for and carves it.
fn carve<R: Rng>(params: &MazeParams, with_pattern: bool, rng: &mut R) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(params.width, params.height);
    if with_pattern {
        pattern::apply_pattern(&mut grid)?;
        pattern::check_endpoints(&grid, params.entry, params.exit)?;
    }

    // Growth starts in the top-left corner unless the pattern covers it
    let start = if grid[(0, 0)].protected {
        params.entry
    } else {
        (0, 0)
    };
    generate_maze(&mut grid, params.generator(), start, rng);
    Ok(grid)
}

/// Generates and solves a maze.
///
/// Pattern failures ([`MazeError::PatternTooSmall`], [`MazeError::EntryExitInPattern`]) are
/// recovered from by starting over on a fresh grid without the pattern. An unreachable exit is
/// returned as an error.
pub fn build<R: Rng>(params: &MazeParams, rng: &mut R) -> Result<Maze, MazeError> {
    let (grid, has_pattern) = match carve(params, params.with_pattern, rng) {
        Ok(grid) => (grid, params.with_pattern),
        Err(
            err @ (MazeError::PatternTooSmall { .. } | MazeError::EntryExitInPattern { .. }),
        ) => {
            tracing::warn!("[session] {err}; generating the maze without the pattern");
            (carve(params, false, rng)?, false)
        }
        Err(err) => return Err(err),
    };

    let path = solve(&grid, params.entry, params.exit)?;
    tracing::info!(
        "[session] Generated {}x{} maze with {}, path length {}",
        params.width,
        params.height,
        params.generator(),
        path.len() - 1
    );
    Ok(Maze {
        params: params.clone(),
        grid,
        path,
        has_pattern,
    })
}

/// Runs one full generation: seeds the random source, builds the maze and writes the output file.
pub fn run(params: &MazeParams) -> Result<Maze, Error> {
    let mut rng = params.rng();
    let maze = build(params, &mut rng)?;
    maze.save()?;
    tracing::info!("[session] Maze written to {}", params.output_path.display());
    Ok(maze)
}
