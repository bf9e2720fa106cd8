use super::Coord;
use super::cell::{Cell, Direction};

/// Rectangular array of cells, `width` columns by `height` rows, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Allocates a grid where every cell has all four walls and is neither carved nor protected.
    /// Callers guarantee `width > 0` and `height > 0`.
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Cell::WALLED; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// All coordinates in row-major order, top row first.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// The in-bounds neighbor of `coord` in direction `dir`.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        dir.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// In-bounds orthogonal neighbors tagged with the direction leading to them, in
    /// north, east, south, west order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|c| (c, dir)))
    }

    /// Neighbors a generator may grow into: in-bounds, not yet carved, not protected.
    pub fn neighbors_for_carving(&self, coord: Coord) -> Vec<(Coord, Direction)> {
        self.neighbors(coord)
            .filter(|&(c, _)| {
                let cell = &self[c];
                !cell.carved && !cell.protected
            })
            .collect()
    }

    /// Already carved neighbors of `coord`, i.e. the cells it could be attached to.
    pub fn carved_neighbors(&self, coord: Coord) -> Vec<(Coord, Direction)> {
        self.neighbors(coord)
            .filter(|&(c, _)| self[c].carved)
            .collect()
    }

    /// Neighbors reachable through an open wall. Passability is decided by wall state alone.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.neighbors(coord)
            .filter(move |&(_, dir)| !self[coord].has_wall(dir))
    }

    pub fn has_wall(&self, coord: Coord, dir: Direction) -> bool {
        self[coord].has_wall(dir)
    }

    /// Removes the wall between `coord` and its neighbor in `dir`, on both sides.
    /// Returns `false` if there is no such neighbor or the wall was already open.
    pub fn remove_wall(&mut self, coord: Coord, dir: Direction) -> bool {
        let Some(other) = self.neighbor(coord, dir) else {
            return false;
        };
        if !self[coord].has_wall(dir) {
            return false;
        }
        self[coord].open(dir);
        self[other].open(dir.opposite());
        true
    }

    /// Marks `coord` as part of the spanning tree.
    pub fn carve(&mut self, coord: Coord) {
        self[coord].carved = true;
    }

    /// Number of opened wall pairs. Every shared wall is counted once.
    pub fn open_passages(&self) -> usize {
        self.coords()
            .map(|c| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| self.neighbor(c, dir).is_some() && !self.has_wall(c, dir))
                    .count()
            })
            .sum()
    }

    /// Checks that every shared wall reads the same from both sides.
    pub fn walls_are_symmetric(&self) -> bool {
        self.coords().all(|c| {
            self.neighbors(c)
                .all(|(n, dir)| self.has_wall(c, dir) == self.has_wall(n, dir.opposite()))
        })
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
