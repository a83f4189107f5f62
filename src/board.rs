//! # N-in-a-row Board
//!
//! This module implements the board state machine for generalized Gomoku.
//! Players alternate placing stones on a `width x height` grid; the first
//! player to own `run_length` contiguous cells horizontally, vertically, or
//! diagonally wins. A full board with no such run is a tie.
//!
//! ## Cell indexing
//! Cells are addressed by a linear index `y * width + x`. The board keeps a
//! dense occupancy vector indexed by that value, plus the set of indices that
//! are still free. The two are complementary at all times: a cell is occupied
//! exactly when its index is absent from the legal-move set.
//!
//! ## Win detection
//! A run is found by walking forward from its first cell (the anchor). Each of
//! the four directions has its own anchor condition on `(x, y)`, and that
//! condition alone keeps the linear walk from wrapping across a row edge.

use crate::error::BoardError;
use crate::player::Player;
use std::collections::BTreeSet;
use tracing::debug;

/// Board geometry and win condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Contiguous stones needed to win
    pub run_length: usize,
}

impl BoardConfig {
    pub fn new(width: usize, height: usize, run_length: usize) -> Self {
        Self {
            width,
            height,
            run_length,
        }
    }

    /// Check that a run of `run_length` fits the board in both dimensions
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.run_length == 0 {
            return Err(BoardError::EmptyRun);
        }
        if self.width < self.run_length || self.height < self.run_length {
            return Err(BoardError::RunTooLong {
                width: self.width,
                height: self.height,
                run_length: self.run_length,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(15, 15, 5)
    }
}

/// Column/row coordinates of a cell; `y = 0` is the first row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Current game status as seen from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winner
    Win(Player),
    /// Board is full and nobody completed a run
    Tie,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game ended with one
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(*player),
            _ => None,
        }
    }
}

/// The four scan directions. Each run is discovered from its first cell only.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// Towards increasing x
    Horizontal,
    /// Towards increasing y
    Vertical,
    /// Increasing x and y
    Diagonal,
    /// Decreasing x, increasing y
    AntiDiagonal,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
    Direction::AntiDiagonal,
];

/// Board state for one game
///
/// Mutated only through [`Board::initialize`] and [`Board::apply_move`].
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    run_length: usize,
    /// Owner of each cell, indexed by linear cell index
    cells: Vec<Option<Player>>,
    /// Indices not yet occupied
    legal: BTreeSet<usize>,
    current_player: Player,
    last_move: Option<usize>,
}

impl Board {
    /// Create a board with validated geometry, ready to play with
    /// [`Player::First`] to move.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        if let Err(err) = config.validate() {
            debug!(?config, %err, "rejected board configuration");
            return Err(err);
        }
        let mut board = Self {
            width: config.width,
            height: config.height,
            run_length: config.run_length,
            cells: Vec::new(),
            legal: BTreeSet::new(),
            current_player: Player::First,
            last_move: None,
        };
        board.initialize(Player::First);
        Ok(board)
    }

    /// Clear the board and hand the first move to `starting_player`
    pub fn initialize(&mut self, starting_player: Player) {
        let area = self.area();
        self.cells.clear();
        self.cells.resize(area, None);
        self.legal = (0..area).collect();
        self.current_player = starting_player;
        self.last_move = None;
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height, self.run_length)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Total number of cells
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Coordinates of a cell index, `None` when the index is off the board
    #[inline]
    pub fn move_to_location(&self, mv: usize) -> Option<Location> {
        if mv >= self.area() {
            return None;
        }
        Some(Location::new(mv % self.width, mv / self.width))
    }

    /// Cell index of a location, `None` when the location is off the board
    #[inline]
    pub fn location_to_move(&self, location: Location) -> Option<usize> {
        if location.x >= self.width || location.y >= self.height {
            return None;
        }
        Some(location.y * self.width + location.x)
    }

    /// True iff `mv` is an unoccupied cell. Off-board indices are simply not legal.
    #[inline]
    pub fn is_legal(&self, mv: usize) -> bool {
        self.legal.contains(&mv)
    }

    /// Place the current player's stone at `mv` and pass the turn.
    ///
    /// The caller must check [`Board::is_legal`] first; no validation is done here.
    pub fn apply_move(&mut self, mv: usize) {
        debug_assert!(self.is_legal(mv), "apply_move called with illegal move {mv}");
        self.cells[mv] = Some(self.current_player);
        self.legal.remove(&mv);
        self.last_move = Some(mv);
        self.current_player = self.current_player.opponent();
    }

    /// Scan every occupied cell for a completed run and return its owner
    pub fn check_winner(&self) -> Option<Player> {
        // Alternating play needs at least n stones from the winner and n - 1
        // from the other side before any run can exist.
        if self.stone_count() < 2 * self.run_length - 1 {
            return None;
        }

        self.cells.iter().enumerate().find_map(|(anchor, cell)| {
            let player = (*cell)?;
            DIRECTIONS
                .iter()
                .any(|&dir| self.run_from(anchor, player, dir))
                .then_some(player)
        })
    }

    /// Terminal-state query: a win, a tie on a full board, or still in progress
    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            Some(player) => GameStatus::Win(player),
            None if self.legal.is_empty() => GameStatus::Tie,
            None => GameStatus::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_over()
    }

    /// Occupancy of every cell, indexed by linear cell index
    pub fn occupancy(&self) -> &[Option<Player>] {
        &self.cells
    }

    /// Owner of a single cell; `None` for empty or off-board cells
    pub fn cell(&self, mv: usize) -> Option<Player> {
        self.cells.get(mv).copied().flatten()
    }

    /// Free cells in ascending index order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.legal.iter().copied()
    }

    pub fn legal_move_count(&self) -> usize {
        self.legal.len()
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Most recently applied move, `None` before the first move
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.area() - self.legal.len()
    }

    /// Whether `anchor` starts a run of `player` stones in `dir`.
    ///
    /// The anchor condition guarantees the whole walk stays on the board and
    /// inside one row/column/diagonal, so the linear offsets never wrap.
    fn run_from(&self, anchor: usize, player: Player, dir: Direction) -> bool {
        let n = self.run_length;
        let (x, y) = (anchor % self.width, anchor / self.width);
        let fits_right = x + n <= self.width;
        let fits_left = x + 1 >= n;
        let fits_down = y + n <= self.height;

        let (fits, step) = match dir {
            Direction::Horizontal => (fits_right, 1),
            Direction::Vertical => (fits_down, self.width),
            Direction::Diagonal => (fits_right && fits_down, self.width + 1),
            Direction::AntiDiagonal => (fits_left && fits_down, self.width - 1),
        };

        fits && (1..n).all(|i| self.cells[anchor + i * step] == Some(player))
    }
}
