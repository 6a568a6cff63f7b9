//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_command, render_board, Board, CellInfo, Command, GameConfig, GameEngine, GameError,
    GameStatus, Tile,
};

#[cfg(feature = "std")]
pub use crate::{Flow, Shell};
