//! Text rendering of a [`Board`] for terminals and logs.
//!
//! The grid is drawn with the top row (`y = height - 1`) first, one row per
//! line, each line prefixed with its row number and a header of column
//! numbers above. `X` marks the first player, `O` the second, `_` an empty
//! cell.

use crate::board::Board;
use crate::player::Player;
use colored::Colorize;
use std::fmt::{self, Write};

/// Width of one rendered cell, wide enough for two-digit column numbers
const CELL_WIDTH: usize = 3;

fn write_grid<W: Write>(
    board: &Board,
    out: &mut W,
    stone: impl Fn(Player) -> String,
) -> fmt::Result {
    let label_width = board.height().saturating_sub(1).to_string().len();

    write!(out, "{:label_width$} ", "")?;
    for x in 0..board.width() {
        write!(out, "{x:>w$}", w = CELL_WIDTH)?;
    }
    writeln!(out)?;

    for y in (0..board.height()).rev() {
        write!(out, "{y:>label_width$} ")?;
        for x in 0..board.width() {
            let cell = board.cell(y * board.width() + x);
            let symbol = match cell {
                Some(player) => stone(player),
                None => "_".to_string(),
            };
            write!(out, "{:>pad$}{}", "", symbol, pad = CELL_WIDTH - 1)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f, |player| player.symbol().to_string())
    }
}

/// Render the board with ANSI colours (`X` red, `O` blue) and a footer
/// naming the player to move.
pub fn render_colored(board: &Board) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_grid(board, &mut out, |player| {
        let symbol = player.symbol().to_string();
        match player {
            Player::First => symbol.red().bold().to_string(),
            Player::Second => symbol.blue().bold().to_string(),
        }
    });
    let _ = writeln!(
        out,
        "{} to move ({})",
        board.current_player(),
        board.current_player().symbol()
    );
    out
}
