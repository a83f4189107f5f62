//! Error types for board configuration and self-play batches.
//!
//! An agent proposing an illegal move is not an error: the game loop turns
//! it into [`crate::GameOutcome::Forfeit`].

use derive_more::{Display, Error, From};

/// Board geometry that cannot host a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Width or height is zero
    #[display("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    /// Run length of zero
    #[display("run length must be at least 1")]
    EmptyRun,
    /// The board cannot fit a run in one of its dimensions
    #[display("a {width}x{height} board cannot fit a run of {run_length}")]
    RunTooLong {
        width: usize,
        height: usize,
        run_length: usize,
    },
}

/// Failure to set up a batch of self-play games
#[derive(Debug, Display, Error, From)]
pub enum ArenaError {
    /// The configured board is invalid
    #[display("invalid board configuration: {_0}")]
    Board(BoardError),
    /// Rayon could not build the dedicated thread pool
    #[display("failed to build thread pool: {_0}")]
    ThreadPool(rayon::ThreadPoolBuildError),
}
