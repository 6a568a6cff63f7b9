use crate::common::ConfigError;

/// Environment variable holding the log level for the binaries.
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

/// Largest board accepted by a new game, in cells.
pub const MAX_CELLS: usize = 1 << 20;

/// Parameters of a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mines: usize,
    pub width: usize,
    pub height: usize,
}

impl GameConfig {
    pub const fn new(mines: usize, width: usize, height: usize) -> Self {
        Self {
            mines,
            width,
            height,
        }
    }

    /// Number of cells on the board, or `None` if `width * height` overflows.
    pub const fn total_cells(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Check every bound, reporting the first one violated.
    ///
    /// Returns the total number of cells on success.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.width < 1 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height < 1 {
            return Err(ConfigError::ZeroHeight);
        }
        let too_large = ConfigError::TooLarge {
            width: self.width,
            height: self.height,
        };
        let cells = self.total_cells().ok_or(too_large)?;
        if cells > MAX_CELLS {
            return Err(too_large);
        }
        if self.mines > cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                width: self.width,
                height: self.height,
                cells,
            });
        }
        Ok(cells)
    }
}
