//! Minefield layout: mine placement, adjacency counts and revealed state.

use crate::common::{CellInfo, ConfigError, GameError, Tile};
use crate::config::GameConfig;
use crate::grid::{Grid, GridError};
use core::fmt;
use rand::Rng;

/// A generated minefield together with the revealed mask.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Grid<Tile>,
    revealed: Grid<bool>,
    mine_count: usize,
}

impl Board {
    /// Place `config.mines` mines on distinct cells chosen uniformly at random,
    /// then compute the adjacency count of every safe cell.
    ///
    /// The configuration is validated before anything is allocated.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: GameConfig) -> Result<Self, ConfigError> {
        let cells = config.validate()?;
        let mut mines = Grid::filled(config.width, config.height, false);
        for index in rand::seq::index::sample(rng, cells, config.mines) {
            if let Some((x, y)) = mines.coords_of(index) {
                // sample() yields in-range, distinct indices
                let _ = mines.set(x, y, true);
            }
        }
        log::debug!(
            "placed {} mines on a {}x{} board",
            config.mines,
            config.width,
            config.height
        );
        Ok(Self::from_mask(mines))
    }

    /// Build a board with mines at exactly the given coordinates.
    ///
    /// Duplicate coordinates collapse into one mine.
    pub fn from_mines(width: usize, height: usize, mines: &[(usize, usize)]) -> Result<Self, GameError> {
        GameConfig::new(0, width, height).validate()?;
        let mut mask = Grid::filled(width, height, false);
        for &(x, y) in mines {
            mask.set(x, y, true)?;
        }
        Ok(Self::from_mask(mask))
    }

    fn from_mask(mask: Grid<bool>) -> Self {
        let mut tiles = Grid::filled(mask.width(), mask.height(), Tile::default());
        let mut mine_count = 0;
        for ((x, y), &is_mine) in mask.iter() {
            let tile = if is_mine {
                mine_count += 1;
                Tile::Mine
            } else {
                let adjacent = mask
                    .neighbors(x, y)
                    .filter(|&(nx, ny)| mask.get(nx, ny).copied().unwrap_or(false))
                    .count();
                // at most eight neighbours
                Tile::Safe(adjacent as u8)
            };
            if let Ok(cell) = tiles.get_mut(x, y) {
                *cell = tile;
            }
        }
        Board {
            revealed: Grid::filled(mask.width(), mask.height(), false),
            tiles,
            mine_count,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    /// Number of mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of cells without a mine.
    pub fn safe_count(&self) -> usize {
        self.tiles.len() - self.mine_count
    }

    /// Number of revealed cells that are not mines.
    pub fn revealed_safe_count(&self) -> usize {
        self.revealed
            .iter()
            .filter(|&((x, y), &revealed)| revealed && !self.has_mine(x, y).unwrap_or(true))
            .count()
    }

    /// Number of revealed cells holding a mine.
    pub fn revealed_mine_count(&self) -> usize {
        self.revealed
            .iter()
            .filter(|&((x, y), &revealed)| revealed && self.has_mine(x, y).unwrap_or(false))
            .count()
    }

    /// Returns true if `(x, y)` lies on the board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.tiles.contains(x, y)
    }

    /// Stored content of `(x, y)`, revealed or not.
    pub fn tile(&self, x: usize, y: usize) -> Result<Tile, GridError> {
        self.tiles.get(x, y).copied()
    }

    /// Whether `(x, y)` holds a mine.
    pub fn has_mine(&self, x: usize, y: usize) -> Result<bool, GridError> {
        Ok(self.tile(x, y)?.is_mine())
    }

    /// Whether `(x, y)` has been revealed.
    pub fn is_revealed(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.revealed.get(x, y).copied()
    }

    /// Revealed flag and stored content of `(x, y)`.
    pub fn cell_info(&self, x: usize, y: usize) -> Result<CellInfo, GridError> {
        Ok(CellInfo {
            revealed: self.is_revealed(x, y)?,
            tile: self.tile(x, y)?,
        })
    }

    /// Mark `(x, y)` revealed and return its content.
    pub fn reveal(&mut self, x: usize, y: usize) -> Result<Tile, GameError> {
        let tile = self.tile(x, y)?;
        if self.revealed.set(x, y, true)? {
            return Err(GameError::AlreadyRevealed { x, y });
        }
        Ok(tile)
    }

    /// Neighbours of `(x, y)` clipped to the board.
    pub fn neighbors(&self, x: usize, y: usize) -> crate::grid::Neighbors {
        self.tiles.neighbors(x, y)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}, {} mines", self.width(), self.height(), self.mine_count)?;
        for y in 0..self.height() {
            write!(f, "  ")?;
            for x in 0..self.width() {
                let ch = match self.tiles.get(x, y) {
                    Ok(Tile::Mine) => '*',
                    Ok(Tile::Safe(n)) => char::from(b'0' + n),
                    Err(_) => '?',
                };
                let mark = if self.is_revealed(x, y).unwrap_or(false) { '+' } else { ' ' };
                write!(f, "{}{}", ch, mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
