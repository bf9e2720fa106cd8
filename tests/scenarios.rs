use std::path::PathBuf;

use mazegen::encode::{encode_walls, render_output};
use mazegen::generators::{FIXED_SEED, Generator, generate_maze, get_rng};
use mazegen::maze::pattern::{apply_pattern, origin};
use mazegen::solvers::solve;
use mazegen::{Direction, Grid, MazeError, MazeParams, session};

fn params(width: u16, height: u16, exit: (u16, u16), use_backtracker: bool) -> MazeParams {
    MazeParams {
        width,
        height,
        entry: (0, 0),
        exit,
        output_path: PathBuf::from("unused.txt"),
        use_backtracker,
        fixed_seed: true,
        with_pattern: true,
    }
}

/// Splits the output text into its hex rows and trailing lines.
fn split_output(text: &str) -> (Vec<&str>, Vec<&str>) {
    let (grid, rest) = text.split_once("\n\n").expect("blank separator line");
    (grid.lines().collect(), rest.lines().collect())
}

#[test]
fn test_fixed_seed_backtracker_is_reproducible() {
    let p = MazeParams {
        with_pattern: false,
        ..params(6, 6, (5, 5), true)
    };
    let first = session::build(&p, &mut p.rng()).unwrap();
    let second = session::build(&p, &mut p.rng()).unwrap();

    let out_a = first.to_output();
    let out_b = second.to_output();
    let (rows_a, tail_a) = split_output(&out_a);
    let (rows_b, tail_b) = split_output(&out_b);
    assert_eq!(rows_a, rows_b);
    assert_eq!(tail_a, tail_b);
    assert_eq!(rows_a.len(), 6);
    assert!(rows_a.iter().all(|row| row.len() == 6));
    assert_eq!(tail_a[0], "0, 0");
    assert_eq!(tail_a[1], "5, 5");
    // Every letter is one step, so the path has at least the Manhattan distance
    assert!(tail_a[2].len() >= 10);
}

#[test]
fn test_fixed_seed_output_is_byte_identical_for_both_generators() {
    for use_backtracker in [true, false] {
        let p = params(14, 11, (13, 10), use_backtracker);
        let a = session::build(&p, &mut p.rng()).unwrap().to_output();
        let b = session::build(&p, &mut p.rng()).unwrap().to_output();
        assert_eq!(a, b);
    }
}

#[test]
fn test_pattern_cells_serialize_fully_walled() {
    let p = params(9, 9, (8, 8), true);
    let maze = session::build(&p, &mut p.rng()).unwrap();
    assert!(maze.has_pattern);

    let text = maze.to_output();
    let (rows, _) = split_output(&text);
    let (ox, oy) = origin(9, 9);
    for &(dx, dy) in mazegen::maze::pattern::offsets() {
        let (x, y) = (ox + dx, oy + dy);
        assert_eq!(rows[y as usize].as_bytes()[x as usize], b'F');
        assert_eq!(encode_walls(&maze.grid[(x, y)]), 'F');
    }
}

#[test]
fn test_small_grid_pattern_fallback() {
    let mut grid = Grid::new(5, 5);
    assert_eq!(
        apply_pattern(&mut grid),
        Err(MazeError::PatternTooSmall {
            width: 5,
            height: 5
        })
    );

    let p = params(5, 5, (4, 4), true);
    let maze = session::build(&p, &mut p.rng()).unwrap();
    assert!(!maze.has_pattern);
    assert_eq!(maze.grid.open_passages(), 24);
    assert!(maze.grid.walls_are_symmetric());
    assert!(maze.path.len() > 1);
}

#[test]
fn test_open_two_by_two_grid() {
    let mut grid = Grid::new(2, 2);
    grid.remove_wall((0, 0), Direction::East);
    grid.remove_wall((0, 0), Direction::South);
    grid.remove_wall((1, 0), Direction::South);
    grid.remove_wall((0, 1), Direction::East);

    let path = solve(&grid, (0, 0), (1, 1)).unwrap();
    assert_eq!(path.len() - 1, 2);
    // Both routes are two steps long; east is scanned before south
    assert_eq!(path, vec![(0, 0), (1, 0), (1, 1)]);
    assert_eq!(render_output(&grid, (0, 0), (1, 1), &path).lines().last(), Some("ES"));
}

#[test]
fn test_spanning_tree_without_pattern() {
    for generator in [Generator::RecurBacktrack, Generator::Prim] {
        for seed in [FIXED_SEED, 7, 99] {
            let mut grid = Grid::new(20, 13);
            generate_maze(&mut grid, generator, (0, 0), &mut get_rng(Some(seed)));
            assert!(grid.walls_are_symmetric());
            assert_eq!(grid.open_passages(), 20 * 13 - 1);
            // A tree connects every cell to the corner
            for target in [(19, 12), (19, 0), (0, 12), (10, 6)] {
                assert!(solve(&grid, (0, 0), target).is_ok());
            }
        }
    }
}

#[test]
fn test_run_writes_output_file() {
    let path = std::env::temp_dir().join(format!("mazegen-run-{}.txt", std::process::id()));
    let p = MazeParams {
        output_path: path.clone(),
        ..params(10, 10, (9, 9), false)
    };
    let maze = session::run(&p).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(written, maze.to_output());
}
