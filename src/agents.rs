//! Baseline agents.
//!
//! [`RandomAgent`] picks uniformly among the legal moves. It is the opponent
//! used for self-play batches and smoke tests; it carries no heuristics.

use crate::board::Board;
use crate::game::Agent;
use crate::player::Player;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform-random player with a reproducible move stream
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: Xoshiro256PlusPlus,
    player: Option<Player>,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            player: None,
        }
    }

    /// The player assigned by the last game, if any
    pub fn player(&self) -> Option<Player> {
        self.player
    }
}

impl Agent for RandomAgent {
    fn set_player_index(&mut self, player: Player) {
        self.player = Some(player);
    }

    fn get_action(&mut self, board: &Board) -> usize {
        let available = board.legal_move_count();
        if available == 0 {
            // Nothing to play; an off-board index makes the loop end the game.
            return board.area();
        }
        let pick = self.rng.random_range(0..available);
        board.legal_moves().nth(pick).unwrap_or(board.area())
    }
}
