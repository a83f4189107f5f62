//! # Self-Play Arena
//!
//! Runs batches of independent games in parallel. Every game gets its own
//! [`Board`] and its own pair of agents, built fresh from the game index, so
//! nothing is shared between games and no locking is involved. Results are
//! folded into an [`ArenaSummary`] once all games finish.
//!
//! Games run inside a dedicated rayon thread pool sized by
//! [`ArenaConfig::threads`]. Because agents are built from the game index
//! alone, a batch gives the same summary whatever the thread count.

use crate::agents::RandomAgent;
use crate::board::{Board, BoardConfig};
use crate::error::ArenaError;
use crate::game::{Agent, GameLoop, GameOutcome};
use crate::player::Player;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Add;
use tracing::info;

/// Batch settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Geometry shared by every game in the batch
    pub board: BoardConfig,
    /// Number of games to play
    pub games: usize,
    /// Worker threads. If 0, rayon will use the default.
    pub threads: usize,
    /// Base seed for agents built by [`Arena::run_random`]
    pub seed: u64,
    /// Give the first move to [`Player::Second`] in odd-numbered games
    pub alternate_start: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            games: 100,
            threads: 0,
            seed: 0,
            alternate_start: true,
        }
    }
}

/// Tally of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaSummary {
    pub games: usize,
    /// Wins indexed by player id
    pub wins: [usize; 2],
    pub ties: usize,
    /// Forfeits indexed by the offending player's id
    pub forfeits: [usize; 2],
    /// Moves applied across all games
    pub total_moves: usize,
}

impl ArenaSummary {
    fn single(outcome: GameOutcome, moves: usize) -> Self {
        let mut summary = Self {
            games: 1,
            total_moves: moves,
            ..Default::default()
        };
        match outcome {
            GameOutcome::Win(player) => summary.wins[player.index()] += 1,
            GameOutcome::Tie => summary.ties += 1,
            GameOutcome::Forfeit { offender, .. } => summary.forfeits[offender.index()] += 1,
        }
        summary
    }

    /// Average number of moves per game
    pub fn mean_game_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

impl Add for ArenaSummary {
    type Output = ArenaSummary;

    fn add(self, other: ArenaSummary) -> ArenaSummary {
        ArenaSummary {
            games: self.games + other.games,
            wins: [self.wins[0] + other.wins[0], self.wins[1] + other.wins[1]],
            ties: self.ties + other.ties,
            forfeits: [
                self.forfeits[0] + other.forfeits[0],
                self.forfeits[1] + other.forfeits[1],
            ],
            total_moves: self.total_moves + other.total_moves,
        }
    }
}

/// Parallel runner for batches of games
pub struct Arena {
    config: ArenaConfig,
    pool: ThreadPool,
}

impl Arena {
    /// Validate the board geometry and build the worker pool
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.board.validate()?;
        let pool_builder = ThreadPoolBuilder::new();
        let pool = if config.threads > 0 {
            pool_builder.num_threads(config.threads).build()?
        } else {
            pool_builder.build()?
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Player that moves first in game `index`
    pub fn starting_player(&self, index: usize) -> Player {
        if self.config.alternate_start && index % 2 == 1 {
            Player::Second
        } else {
            Player::First
        }
    }

    /// Play the batch. `make_agents(i)` builds the `(first, second)` agents
    /// for game `i`.
    pub fn run<A, B, F>(&self, make_agents: F) -> Result<ArenaSummary, ArenaError>
    where
        A: Agent,
        B: Agent,
        F: Fn(usize) -> (A, B) + Sync,
    {
        let board = Board::new(self.config.board)?;

        let summary = self.pool.install(|| {
            (0..self.config.games)
                .into_par_iter()
                .map(|index| {
                    let (mut first, mut second) = make_agents(index);
                    let mut game = GameLoop::new(board.clone());
                    let outcome = game.play(&mut first, &mut second, self.starting_player(index));
                    ArenaSummary::single(outcome, game.moves().len())
                })
                .reduce(ArenaSummary::default, |a, b| a + b)
        });

        info!(
            games = summary.games,
            first_wins = summary.wins[0],
            second_wins = summary.wins[1],
            ties = summary.ties,
            forfeits = summary.forfeits[0] + summary.forfeits[1],
            mean_length = summary.mean_game_length(),
            "arena batch finished"
        );
        Ok(summary)
    }

    /// Play the batch with seeded [`RandomAgent`]s on both sides
    pub fn run_random(&self) -> Result<ArenaSummary, ArenaError> {
        let seed = self.config.seed;
        self.run(|index| {
            let base = seed.wrapping_add(2 * index as u64);
            (RandomAgent::new(base), RandomAgent::new(base.wrapping_add(1)))
        })
    }
}
