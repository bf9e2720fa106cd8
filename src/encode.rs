//! Text export of a solved maze.
//!
//! Layout: `height` lines of `width` hex digits (one wall mask per cell, top row first), a blank
//! line, the entry as `x, y`, the exit as `x, y`, and the route as one letter per step.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::maze::{Cell, Coord, Direction, Grid};

/// The cell's wall mask as one uppercase hex digit: `0` is fully open, `F` fully walled.
pub fn encode_walls(cell: &Cell) -> char {
    char::from_digit(cell.walls() as u32, 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('F')
}

/// Parses a hex digit (either case) back into a wall mask.
pub fn decode_walls(digit: char) -> Option<u8> {
    digit.to_digit(16).map(|mask| mask as u8)
}

/// One direction letter per step of `path`.
/// Consecutive points must be adjacent; a non-adjacent pair produces no letter.
pub fn encode_path(path: &[Coord]) -> String {
    path.windows(2)
        .filter_map(|pair| {
            let dir = Direction::between(pair[0], pair[1]);
            debug_assert!(dir.is_some(), "{:?} and {:?} are not adjacent", pair[0], pair[1]);
            dir.map(Direction::letter)
        })
        .collect()
}

/// Builds the whole output text.
pub fn render_output(grid: &Grid, entry: Coord, exit: Coord, path: &[Coord]) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize + 32);
    for y in 0..grid.height() {
        out.extend((0..grid.width()).map(|x| encode_walls(&grid[(x, y)])));
        out.push('\n');
    }
    out.push('\n');
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}, {}", entry.0, entry.1);
    let _ = writeln!(out, "{}, {}", exit.0, exit.1);
    out.push_str(&encode_path(path));
    out.push('\n');
    out
}

pub fn write_output<W: Write>(
    writer: &mut W,
    grid: &Grid,
    entry: Coord,
    exit: Coord,
    path: &[Coord],
) -> std::io::Result<()> {
    writer.write_all(render_output(grid, entry, exit, path).as_bytes())?;
    writer.flush()
}

/// Creates (or truncates) `output` and writes the maze into it.
pub fn save(
    output: &Path,
    grid: &Grid,
    entry: Coord,
    exit: Coord,
    path: &[Coord],
) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(output)?);
    write_output(&mut file, grid, entry, exit, path)
}
