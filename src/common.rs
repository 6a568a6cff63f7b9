//! Common types for Minesweeper: tile contents and engine errors.

use crate::grid::GridError;
use thiserror::Error;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// The cell holds a mine.
    Mine,
    /// The cell is safe; carries the number of mines among its neighbours.
    Safe(u8),
}

impl Tile {
    /// Returns true for [`Tile::Mine`].
    pub const fn is_mine(self) -> bool {
        matches!(self, Tile::Mine)
    }

    /// Adjacent mine count, or `None` for a mine.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Tile::Mine => None,
            Tile::Safe(n) => Some(n),
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Safe(0)
    }
}

/// What the engine knows about one cell.
///
/// `tile` is reported whether or not the cell has been revealed; callers
/// decide what to display based on `revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInfo {
    pub revealed: bool,
    pub tile: Tile,
}

/// Rejected new-game parameters, one variant per violated bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the width of a board must be greater than 0")]
    ZeroWidth,
    #[error("the height of a board must be greater than 0")]
    ZeroHeight,
    #[error("it is not possible to have {width} * {height} = {cells} tiles and {mines} mines")]
    TooManyMines {
        mines: usize,
        width: usize,
        height: usize,
        cells: usize,
    },
    #[error("a {width}x{height} board is too large (at most {max} tiles)", max = crate::config::MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// New-game parameters were rejected; nothing was allocated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// A move was attempted after the game ended.
    #[error("no game is in progress")]
    GameNotInProgress,
    /// The target tile was revealed by an earlier move.
    #[error("the tile at ({x}, {y}) has already been revealed")]
    AlreadyRevealed { x: usize, y: usize },
    /// Coordinates outside the board.
    #[error(transparent)]
    Grid(#[from] GridError),
}
