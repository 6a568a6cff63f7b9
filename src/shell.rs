#![cfg(feature = "std")]

//! Interactive console session.
//!
//! The shell owns the current game and the player's flags, translates the
//! 1-indexed coordinates typed by the player into engine coordinates and
//! prints the board after every move.

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::Rng;

use crate::{
    command::{parse_command, Command, ParseError},
    common::{GameError, Tile},
    config::GameConfig,
    game::{GameEngine, GameStatus},
    grid::Grid,
    ui::{remaining_mines, render_board},
};

pub const BANNER: &str = "~~~ Minesweeper ~~~";

pub const HELP_TEXT: &str = "\
Commands:
  help                          Show this list of commands.
  new <mines> <width> <height>  Start a new game.
  reveal <col> <row>            Reveal the tile at column <col>, row <row>.
  flag <col> <row>              Flag a hidden tile.
  unflag <col> <row>            Remove a flag.
  quit                          Leave the game.";

pub const NO_GAME_MESSAGE: &str = "Please start a new game first.";
pub const VICTORY_MESSAGE: &str = "Victory!";
pub const DEFEAT_MESSAGE: &str = "You lose!";

/// Whether the console loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One console session: at most one live game plus its flags.
pub struct Shell<R: Rng> {
    rng: R,
    game: Option<GameEngine>,
    flags: Grid<bool>,
}

impl<R: Rng> Shell<R> {
    /// Create a shell with no game running.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            game: None,
            flags: Grid::filled(0, 0, false),
        }
    }

    /// The current game, if one was ever started.
    pub fn game(&self) -> Option<&GameEngine> {
        self.game.as_ref()
    }

    /// Flags placed in the current game.
    pub fn flags(&self) -> &Grid<bool> {
        &self.flags
    }

    /// Whether the tile at 1-indexed `(col, row)` carries a flag.
    pub fn is_flagged(&self, col: i64, row: i64) -> bool {
        self.to_engine_coords(col, row)
            .and_then(|(x, y)| self.flags.get(x, y).ok().copied())
            .unwrap_or(false)
    }

    /// Mines minus flags, or `None` without a game.
    pub fn remaining_mines(&self) -> Option<isize> {
        self.game.as_ref().map(|game| remaining_mines(game, &self.flags))
    }

    /// Replace the current game and clear all flags. On error nothing changes.
    pub fn new_game(&mut self, config: GameConfig) -> Result<(), GameError> {
        let game = GameEngine::with_config(&mut self.rng, config)?;
        self.flags = Grid::filled(game.width(), game.height(), false);
        self.game = Some(game);
        log::debug!(
            "new game: {} mines on {}x{}",
            config.mines,
            config.width,
            config.height
        );
        Ok(())
    }

    /// Reveal the tile at 1-indexed `(col, row)`.
    ///
    /// Returns `Ok(None)` when the coordinates are off the board or the tile
    /// is already revealed; the request is ignored in that case.
    pub fn reveal(&mut self, col: i64, row: i64) -> Result<Option<Tile>, GameError> {
        let coords = self.to_engine_coords(col, row);
        let game = self.active_game_mut()?;
        let Some((x, y)) = coords else {
            return Ok(None);
        };
        if game.cell_info(x, y)?.revealed {
            return Ok(None);
        }
        let tile = game.reveal_tile(x, y)?;
        let _ = self.flags.set(x, y, false);
        Ok(Some(tile))
    }

    /// Set or clear the flag on 1-indexed `(col, row)`.
    ///
    /// Returns whether a flag changed. Off-board and revealed tiles are
    /// ignored.
    pub fn set_flag(&mut self, col: i64, row: i64, flagged: bool) -> Result<bool, GameError> {
        let coords = self.to_engine_coords(col, row);
        let game = self.active_game_mut()?;
        let Some((x, y)) = coords else {
            return Ok(false);
        };
        if game.cell_info(x, y)?.revealed {
            return Ok(false);
        }
        Ok(self.flags.set(x, y, flagged)? != flagged)
    }

    /// Parse and execute one line of input.
    pub fn interpret<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        match parse_command(line) {
            Ok(command) => self.execute(command, out),
            Err(ParseError::Empty) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command, writing all player-facing output to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> std::io::Result<Flow> {
        match command {
            Command::Help => writeln!(out, "{}", HELP_TEXT)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::New(config) => match self.new_game(config) {
                Ok(()) => self.draw(out)?,
                Err(err) => {
                    writeln!(out, "{}", ParseError::InvalidArguments)?;
                    writeln!(out, "{}", err)?;
                }
            },
            Command::Reveal { col, row } => match self.reveal(col, row) {
                Ok(Some(_)) => {
                    match self.game.as_ref().map(GameEngine::status) {
                        Some(GameStatus::Won) => writeln!(out, "{}", VICTORY_MESSAGE)?,
                        Some(GameStatus::Lost) => writeln!(out, "{}", DEFEAT_MESSAGE)?,
                        _ => {}
                    }
                    self.draw(out)?;
                }
                Ok(None) => self.draw(out)?,
                Err(err) => self.report(err, out)?,
            },
            Command::Flag { col, row } => self.flag_command(col, row, true, out)?,
            Command::Unflag { col, row } => self.flag_command(col, row, false, out)?,
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;
        if self.game.is_some() {
            self.draw(out)?;
        } else {
            writeln!(out, "{}", HELP_TEXT)?;
        }
        loop {
            writeln!(out)?;
            write!(out, "> ")?;
            out.flush().context("failed to flush output")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("failed to read command")?;
            if read == 0 {
                writeln!(out)?;
                return Ok(());
            }
            writeln!(out)?;
            if self.interpret(&line, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn flag_command<W: Write>(&mut self, col: i64, row: i64, flagged: bool, out: &mut W) -> std::io::Result<()> {
        match self.set_flag(col, row, flagged) {
            Ok(_) => self.draw(out),
            Err(err) => self.report(err, out),
        }
    }

    fn report<W: Write>(&self, err: GameError, out: &mut W) -> std::io::Result<()> {
        match err {
            GameError::GameNotInProgress => writeln!(out, "{}", NO_GAME_MESSAGE),
            other => {
                // reveal() checks the tile first, so this is an engine bug
                log::warn!("unexpected engine error: {}", other);
                self.draw(out)
            }
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if let Some(game) = &self.game {
            write!(out, "{}", render_board(game, &self.flags))?;
        }
        Ok(())
    }

    fn active_game_mut(&mut self) -> Result<&mut GameEngine, GameError> {
        match self.game.as_mut() {
            Some(game) if game.in_progress() => Ok(game),
            _ => Err(GameError::GameNotInProgress),
        }
    }

    fn to_engine_coords(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(col.checked_sub(1)?).ok()?;
        let y = usize::try_from(row.checked_sub(1)?).ok()?;
        self.flags.contains(x, y).then_some((x, y))
    }
}
