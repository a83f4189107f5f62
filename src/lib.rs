//! # N-in-a-row Rule Engine
//!
//! Rules and a game loop for generalized Gomoku: two players alternate
//! placing stones on a `width x height` grid and the first to own
//! `run_length` contiguous cells in a row, column, or diagonal wins.
//!
//! ## Modules
//! - [`board`]: geometry, occupancy, legal moves, turn state and win detection
//! - [`game`]: the [`Agent`] contract and the [`GameLoop`] that drives two agents
//! - [`agents`]: a seeded uniform-random baseline agent
//! - [`arena`]: parallel batches of independent self-play games
//! - [`render`]: ASCII and ANSI-coloured board rendering
//! - [`encode`]: fixed-shape `f32` planes for learning components
//!
//! ## Example
//! ```
//! use gomoku::{Board, BoardConfig, GameLoop, Player, RandomAgent};
//!
//! let board = Board::new(BoardConfig::new(9, 9, 5)).unwrap();
//! let mut game = GameLoop::new(board);
//! let outcome = game.play(&mut RandomAgent::new(1), &mut RandomAgent::new(2), Player::First);
//! assert!(outcome.is_over());
//! println!("{}\n{}", game.board(), outcome);
//! ```

pub mod agents;
pub mod arena;
pub mod board;
pub mod encode;
pub mod error;
pub mod game;
pub mod player;
pub mod render;

pub use agents::RandomAgent;
pub use arena::{Arena, ArenaConfig, ArenaSummary};
pub use board::{Board, BoardConfig, GameStatus, Location};
pub use error::{ArenaError, BoardError};
pub use game::{Agent, GameLoop, GameOutcome};
pub use player::Player;
