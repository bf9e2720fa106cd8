//! `KEY=VALUE` configuration files.
//!
//! ```text
//! # comments and blank lines are ignored
//! WIDTH=20
//! HEIGHT=15
//! ENTRY=0,0
//! EXIT=19,14
//! OUTPUT_FILE=maze.txt
//! PERFECT=True
//! SEED=False
//! PATTERN=True
//! ```
//!
//! Every key except `PATTERN` is mandatory. `PATTERN` defaults to `True`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::maze::Coord;
use crate::session::MazeParams;

const CONFIG_EXTENSIONS: [&str; 2] = ["txt", "conf"];

/// Reads and validates a configuration file.
pub fn load(path: &Path) -> Result<MazeParams, ConfigError> {
    let has_valid_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext));
    if !has_valid_extension {
        return Err(ConfigError::FileExtension(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("[config] Loaded {}", path.display());
    parse(&text)
}

/// Validates configuration text.
pub fn parse(text: &str) -> Result<MazeParams, ConfigError> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.matches('=').count() != 1 {
            return Err(ConfigError::MalformedLine(line.to_string()));
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim(), value.trim());
        }
    }

    let get = |key: &'static str| values.get(key).copied().ok_or(ConfigError::MissingKey(key));

    let width = parse_dimension("WIDTH", get("WIDTH")?)?;
    let height = parse_dimension("HEIGHT", get("HEIGHT")?)?;
    let entry = parse_coord("ENTRY", get("ENTRY")?)?;
    let exit = parse_coord("EXIT", get("EXIT")?)?;

    let output = get("OUTPUT_FILE")?;
    if !output.ends_with(".txt") {
        return Err(ConfigError::OutputExtension(output.to_string()));
    }

    let use_backtracker = parse_bool("PERFECT", get("PERFECT")?)?;
    let fixed_seed = parse_bool("SEED", get("SEED")?)?;
    let with_pattern = match values.get("PATTERN") {
        Some(value) => parse_bool("PATTERN", value)?,
        None => true,
    };

    if entry == exit {
        return Err(ConfigError::EntryEqualsExit);
    }
    for (key, coord) in [("ENTRY", entry), ("EXIT", exit)] {
        if coord.0 >= width || coord.1 >= height {
            return Err(ConfigError::OutOfBounds { key, coord });
        }
    }

    Ok(MazeParams {
        width,
        height,
        entry,
        exit,
        output_path: PathBuf::from(output),
        use_backtracker,
        fixed_seed,
        with_pattern,
    })
}

fn parse_dimension(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    let n = value.parse::<i64>().map_err(|_| ConfigError::InvalidInteger {
        key,
        value: value.to_string(),
    })?;
    if n <= 0 {
        return Err(ConfigError::NonPositive(key));
    }
    u16::try_from(n).map_err(|_| ConfigError::InvalidInteger {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_coord(key: &'static str, value: &str) -> Result<Coord, ConfigError> {
    let invalid = || ConfigError::InvalidCoord {
        key,
        value: value.to_string(),
    };
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<u16>().map_err(|_| invalid())?;
    let y = y.trim().parse::<u16>().map_err(|_| invalid())?;
    Ok((x, y))
}
