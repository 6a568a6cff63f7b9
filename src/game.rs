use crate::{
    board::Board,
    common::{CellInfo, GameError, Tile},
    config::GameConfig,
};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Returns true once the game has been won or lost.
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Core game logic for one game: the board plus win/loss bookkeeping.
///
/// Every new game is a fresh engine; the caller decides whether to replace
/// the previous one, so a rejected configuration never disturbs a running
/// game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    hidden_safe: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game with `mines` mines on a `width × height` board.
    pub fn new_game<R: Rng + ?Sized>(
        rng: &mut R,
        mines: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, GameError> {
        Self::with_config(rng, GameConfig::new(mines, width, height))
    }

    /// Start a game described by `config`.
    pub fn with_config<R: Rng + ?Sized>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        let board = Board::generate(rng, config)?;
        Ok(Self::from_board(board))
    }

    /// Start a game on a prepared board. Tiles already revealed on the board
    /// count as uncovered, so the game may start out won or lost.
    pub fn from_board(board: Board) -> Self {
        let hidden_safe = board.safe_count() - board.revealed_safe_count();
        let status = if board.revealed_mine_count() > 0 {
            GameStatus::Lost
        } else if hidden_safe == 0 && board.safe_count() > 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            board,
            hidden_safe,
            status,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn mine_count(&self) -> usize {
        self.board.mine_count()
    }

    /// Safe tiles still covered. Reaches zero exactly when the game is won.
    pub fn hidden_safe_count(&self) -> usize {
        self.hidden_safe
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn in_progress(&self) -> bool {
        !self.status.is_finished()
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Reveal the tile at `(x, y)` and update the game status.
    ///
    /// Only the targeted tile is uncovered. Returns [`Tile::Mine`] if it was a
    /// mine, otherwise its adjacent mine count.
    pub fn reveal_tile(&mut self, x: usize, y: usize) -> Result<Tile, GameError> {
        if !self.in_progress() {
            return Err(GameError::GameNotInProgress);
        }
        let tile = self.board.reveal(x, y)?;
        match tile {
            Tile::Mine => {
                log::debug!("mine hit at ({}, {})", x, y);
                self.game_over(false);
            }
            Tile::Safe(adjacent) => {
                self.hidden_safe -= 1;
                log::trace!(
                    "revealed ({}, {}) with {} adjacent, {} safe tiles left",
                    x,
                    y,
                    adjacent,
                    self.hidden_safe
                );
                if self.hidden_safe == 0 {
                    self.game_over(true);
                }
            }
        }
        Ok(tile)
    }

    /// Whether `(x, y)` holds a mine. Valid in any status.
    pub fn has_mine(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.board.has_mine(x, y)?)
    }

    /// Revealed flag and stored content of `(x, y)`, whether or not it has
    /// been revealed.
    pub fn cell_info(&self, x: usize, y: usize) -> Result<CellInfo, GameError> {
        Ok(self.board.cell_info(x, y)?)
    }

    fn game_over(&mut self, win: bool) {
        self.status = if win { GameStatus::Won } else { GameStatus::Lost };
        log::debug!("game over: {:?}", self.status);
    }
}
