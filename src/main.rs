use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mazegen::{config, session};

/// Generate a maze from a configuration file, solve it and write the result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (.txt or .conf) with KEY=VALUE lines
    config: PathBuf,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Installs the global subscriber. The returned guard must live until exit so buffered file
/// logs are flushed.
fn init_tracing(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();

    match &args.log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("mazegen.log"));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_tracing(&args);

    let result = config::load(&args.config)
        .map_err(mazegen::Error::from)
        .and_then(|params| session::run(&params));

    match result {
        Ok(maze) => {
            println!(
                "Maze written to {} ({} steps from {:?} to {:?})",
                maze.params.output_path.display(),
                maze.path.len() - 1,
                maze.params.entry,
                maze.params.exit
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
