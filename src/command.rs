//! Console commands and their parser.
//!
//! Parsing only checks syntax: it turns a line into a [`Command`] carrying
//! typed arguments. Whether a coordinate is on the board, or whether a game
//! is running at all, is decided by the shell when the command executes.

use crate::config::GameConfig;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;
use thiserror::Error;

/// A parsed console command. Coordinates are 1-indexed as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    New(GameConfig),
    Reveal { col: i64, row: i64 },
    Flag { col: i64, row: i64 },
    Unflag { col: i64, row: i64 },
    Quit,
}

/// Reasons a line could not be parsed. The `Display` text is shown to the
/// player as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No command given.")]
    Empty,
    #[error("Command not recognized.")]
    Unrecognized(String),
    #[error("Invalid argument(s).")]
    InvalidArguments,
}

/// Parse one input line. The command word is case-insensitive and
/// surrounding whitespace is ignored.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    match name.as_str() {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "new" => {
            let [mines, width, height] = parse_numbers::<usize, 3>(&args)?;
            Ok(Command::New(GameConfig::new(mines, width, height)))
        }
        "reveal" => {
            let [col, row] = parse_numbers::<i64, 2>(&args)?;
            Ok(Command::Reveal { col, row })
        }
        "flag" => {
            let [col, row] = parse_numbers::<i64, 2>(&args)?;
            Ok(Command::Flag { col, row })
        }
        "unflag" => {
            let [col, row] = parse_numbers::<i64, 2>(&args)?;
            Ok(Command::Unflag { col, row })
        }
        _ => Err(ParseError::Unrecognized(line.trim().to_string())),
    }
}

/// Parse exactly `N` integer arguments.
fn parse_numbers<T: FromStr + Copy + Default, const N: usize>(args: &[&str]) -> Result<[T; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::InvalidArguments);
    }
    let mut out = [T::default(); N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| ParseError::InvalidArguments)?;
    }
    Ok(out)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}
