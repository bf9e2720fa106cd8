use std::path::PathBuf;
use std::time::Instant;

use mazegen::{MazeParams, session};

fn main() -> Result<(), mazegen::MazeError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    for use_backtracker in [true, false] {
        let params = MazeParams {
            width: u8::MAX as u16,
            height: u8::MAX as u16,
            entry: (0, 0),
            exit: (u8::MAX as u16 - 1, u8::MAX as u16 - 1),
            output_path: PathBuf::from("profile.txt"),
            use_backtracker,
            fixed_seed: true,
            with_pattern: true,
        };
        let mut rng = params.rng();
        let started = Instant::now();
        for _ in 0..num_iters {
            session::build(&params, &mut rng)?;
        }
        println!(
            "{}: {} iterations in {:?}",
            params.generator(),
            num_iters,
            started.elapsed()
        );
    }
    Ok(())
}
