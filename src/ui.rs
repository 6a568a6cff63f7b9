//! Text rendering of the board.
//!
//! ```text
//! Remaining Mines: 2
//!
//!        1   2   3   4
//!     ┌───┬───┬───┬───┐
//!   1 │   │ 1 │ F │   │
//!     ├───┼───┼───┼───┤
//!   2 │   │ 0 │   │   │
//!     └───┴───┴───┴───┘
//! ```

use crate::{
    common::Tile,
    game::{GameEngine, GameStatus},
    grid::Grid,
};
use alloc::string::String;
use core::fmt::{self, Write};

const GUTTER: &str = "    ";

/// Mines minus flags placed on covered tiles. Negative when the player has
/// placed more flags than there are mines.
pub fn remaining_mines(engine: &GameEngine, flags: &Grid<bool>) -> isize {
    let flagged = flags
        .iter()
        .filter(|&((x, y), &flag)| flag && !engine.board().is_revealed(x, y).unwrap_or(true))
        .count();
    engine.mine_count() as isize - flagged as isize
}

/// Symbol shown for `(x, y)`. A lost game discloses every tile.
fn cell_symbol(engine: &GameEngine, flags: &Grid<bool>, x: usize, y: usize) -> char {
    let Ok(info) = engine.cell_info(x, y) else {
        return '?';
    };
    if info.revealed || engine.status() == GameStatus::Lost {
        match info.tile {
            Tile::Mine => 'X',
            Tile::Safe(n) => char::from(b'0' + n),
        }
    } else if flags.get(x, y).copied().unwrap_or(false) {
        'F'
    } else {
        ' '
    }
}

fn write_rule(out: &mut String, width: usize, left: char, mid: char, right: char) -> fmt::Result {
    out.push_str(GUTTER);
    out.push(left);
    for x in 0..width {
        out.push_str("───");
        out.push(if x + 1 == width { right } else { mid });
    }
    writeln!(out)
}

fn write_board(out: &mut String, engine: &GameEngine, flags: &Grid<bool>) -> fmt::Result {
    writeln!(out, "Remaining Mines: {}", remaining_mines(engine, flags))?;
    writeln!(out)?;

    out.push_str(GUTTER);
    for col in 1..=engine.width() {
        write!(out, "{:>4}", col)?;
    }
    writeln!(out)?;

    write_rule(out, engine.width(), '┌', '┬', '┐')?;
    for y in 0..engine.height() {
        write!(out, "{:>3} │", y + 1)?;
        for x in 0..engine.width() {
            write!(out, " {} │", cell_symbol(engine, flags, x, y))?;
        }
        writeln!(out)?;
        if y + 1 < engine.height() {
            write_rule(out, engine.width(), '├', '┼', '┤')?;
        }
    }
    write_rule(out, engine.width(), '└', '┴', '┘')
}

/// Render the board as a bordered table with 1-indexed column and row labels.
pub fn render_board(engine: &GameEngine, flags: &Grid<bool>) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_board(&mut out, engine, flags);
    out
}
