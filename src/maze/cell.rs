use std::fmt;

/// One of the four cardinal directions a wall can face.
///
/// The declaration order is the order every neighbor scan uses, which keeps solver
/// tie-breaks deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in scan order: north, east, south, west.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The bit this direction occupies in a wall mask.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Letter used when serializing a path step.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Step from `coord` one cell in this direction.
    /// Returns `None` when the step would go below zero; the upper bound is checked by the grid.
    pub fn step(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match self {
            Direction::North => y.checked_sub(1).map(|ny| (x, ny)),
            Direction::East => x.checked_add(1).map(|nx| (nx, y)),
            Direction::South => y.checked_add(1).map(|ny| (x, ny)),
            Direction::West => x.checked_sub(1).map(|nx| (nx, y)),
        }
    }

    /// The direction leading from `from` to the orthogonally adjacent `to`, if they are adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(from) == Some(to))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single maze cell.
///
/// Walls are kept as a 4-bit mask (north=1, east=2, south=4, west=8, set bit = wall present).
/// `carved` marks membership in the spanning tree being grown, `protected` marks membership in
/// the decorative pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
    pub carved: bool,
    pub protected: bool,
}

impl Cell {
    /// Mask with all four walls present.
    pub const ALL_WALLS: u8 = 0b1111;

    /// A fresh cell with every wall standing.
    pub const WALLED: Cell = Cell {
        walls: Cell::ALL_WALLS,
        carved: false,
        protected: false,
    };

    pub fn walls(&self) -> u8 {
        self.walls
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls & dir.bit() != 0
    }

    /// Only the grid may open walls, so that both sides of a wall always change together.
    pub(super) fn open(&mut self, dir: Direction) {
        self.walls &= !dir.bit();
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}
