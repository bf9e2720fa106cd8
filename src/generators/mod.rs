use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;
mod recur_backtrack;

pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;

use crate::maze::{Coord, Grid};

/// Seed used when a reproducible maze is requested.
pub const FIXED_SEED: u64 = 1;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Prim,
}

impl Generator {
    /// Maps the configuration's `PERFECT` flag: `true` selects the backtracker, `false` selects
    /// Prim. Both produce spanning trees; the flag name is kept for compatibility only.
    pub fn from_perfect_flag(perfect: bool) -> Self {
        if perfect {
            Generator::RecurBacktrack
        } else {
            Generator::Prim
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
        }
    }
}

/// Carves a spanning tree over the non-protected cells reachable from `start`.
/// Protected cells are left untouched.
pub fn generate_maze<R: Rng>(grid: &mut Grid, generator: Generator, start: Coord, rng: &mut R) {
    tracing::debug!(
        "[generate] {} on {}x{} grid from {:?}",
        generator,
        grid.width(),
        grid.height(),
        start
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, start, rng),
        Generator::Prim => randomized_prim(grid, start, rng),
    }
}
