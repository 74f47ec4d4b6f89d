use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Solve both parts of one day's puzzle")]
pub struct Args {
    /// Puzzle input, defaults to input.txt in the day's directory
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    /// Read example.txt from the day's directory instead
    pub example: bool,

    #[arg(short, long, action = ArgAction::Count)]
    /// Print diagnostics to stderr (-v for debug, -vv for trace)
    pub verbose: u8,
}

impl Args {
    pub fn input_path(&self, manifest_dir: &str) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None if self.example => Path::new(manifest_dir).join("example.txt"),
            None => Path::new(manifest_dir).join("input.txt"),
        }
    }
}

/// Parses the command line, sets up logging and reads the selected puzzle input.
///
/// Days call this as `common::input(env!("CARGO_MANIFEST_DIR"))` so the default
/// input is found regardless of the working directory.
pub fn input(manifest_dir: &str) -> anyhow::Result<String> {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = args.input_path(manifest_dir);
    debug!(path = %path.display(), "reading puzzle input");

    read_input(&path)
}

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("could not read puzzle input {}", path.display()))
}

/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// The input as lines, without the trailing empty line.
pub fn load_input(input: &str) -> Vec<&str> {
    input.lines().collect()
}

/// Splits the input into blocks of lines separated by blank lines.
pub fn parse_data_on_empty_rows(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = vec![];
    let mut block = vec![];

    for line in input.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                blocks.push(std::mem::take(&mut block));
            }
        } else {
            block.push(line);
        }
    }

    if !block.is_empty() {
        blocks.push(block);
    }

    blocks
}

/// All integer tokens in `s`, in order. A leading `-` is kept as a sign;
/// tokens that don't parse as `T` are skipped.
pub fn numbers<T: FromStr>(s: &str) -> Vec<T> {
    s.split(|c: char| !(c.is_ascii_digit() || c == '-'))
        .filter(|token| !token.is_empty() && *token != "-")
        .filter_map(|token| token.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_blocks() {
        let blocks = parse_data_on_empty_rows("a\nb\n\n\nc\n\nd\ne\n");
        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]]);
        assert!(parse_data_on_empty_rows("").is_empty());
    }

    #[test]
    fn drops_trailing_line() {
        assert_eq!(load_input("1abc2\ntreb7uchet\n"), vec!["1abc2", "treb7uchet"]);
    }

    #[test]
    fn finds_numbers() {
        assert_eq!(numbers::<i64>("Time:      7  15   30"), vec![7, 15, 30]);
        assert_eq!(numbers::<i64>("10 -3 seed-to-soil 4"), vec![10, -3, 4]);
        assert_eq!(numbers::<u8>("Card 1: 41 48 | 83"), vec![1, 41, 48, 83]);
    }

    #[test]
    fn resolves_default_paths() {
        let args = Args::parse_from(["day01"]);
        assert_eq!(args.input_path("/x/day01"), PathBuf::from("/x/day01/input.txt"));

        let args = Args::parse_from(["day01", "-e", "-vv"]);
        assert_eq!(args.input_path("/x/day01"), PathBuf::from("/x/day01/example.txt"));
        assert_eq!(args.verbose, 2);

        let args = Args::parse_from(["day01", "other.txt"]);
        assert_eq!(args.input_path("/x/day01"), PathBuf::from("other.txt"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = read_input(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
