//! # Game Loop
//!
//! Drives two externally supplied agents against a [`Board`] until the game
//! ends. The loop owns no rules of its own: it asks the agent whose turn it
//! is for a move, applies it if the board says it is legal, and stops as soon
//! as the board reports a terminal state.
//!
//! An illegal proposal (occupied cell, off-board index) ends the game at once
//! with [`GameOutcome::Forfeit`]. The offending agent gets no second try and
//! the board is left exactly as it was before the proposal.

use crate::board::{Board, GameStatus};
use crate::player::Player;
use std::fmt;
use tracing::{debug, instrument, trace, warn};

/// A move source for one side of the game
pub trait Agent {
    /// Told once per game which player this agent controls
    fn set_player_index(&mut self, player: Player);
    /// Propose a cell index for the player to move on `board`
    fn get_action(&mut self, board: &Board) -> usize;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn set_player_index(&mut self, player: Player) {
        (**self).set_player_index(player)
    }

    fn get_action(&mut self, board: &Board) -> usize {
        (**self).get_action(board)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player completed a run
    Win(Player),
    /// The board filled up with no run
    Tie,
    /// An agent proposed an illegal move
    Forfeit {
        /// Player whose agent proposed the move
        offender: Player,
        /// The rejected cell index
        proposed: usize,
    },
}

impl GameOutcome {
    /// A reported outcome always describes a finished game
    pub fn is_over(&self) -> bool {
        true
    }

    /// The winning player; `None` for a tie or a forfeit
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    pub fn is_forfeit(&self) -> bool {
        matches!(self, GameOutcome::Forfeit { .. })
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Tie => write!(f, "Tie"),
            GameOutcome::Forfeit { offender, proposed } => {
                write!(f, "{} forfeits with illegal move {}", offender, proposed)
            }
        }
    }
}

/// Runs games between two agents on a board it owns
#[derive(Debug, Clone)]
pub struct GameLoop {
    board: Board,
    moves: Vec<usize>,
}

impl GameLoop {
    pub fn new(board: Board) -> Self {
        Self {
            moves: Vec::with_capacity(board.area()),
            board,
        }
    }

    /// The board, as left by the last game
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied in the last game, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Play one game to completion. `first` controls [`Player::First`],
    /// `second` controls [`Player::Second`], and `starting_player` moves first.
    #[instrument(
        skip_all,
        fields(
            width = self.board.width(),
            height = self.board.height(),
            run = self.board.run_length(),
            start = %starting_player,
        )
    )]
    pub fn play<A, B>(&mut self, first: &mut A, second: &mut B, starting_player: Player) -> GameOutcome
    where
        A: Agent + ?Sized,
        B: Agent + ?Sized,
    {
        self.board.initialize(starting_player);
        self.moves.clear();
        first.set_player_index(Player::First);
        second.set_player_index(Player::Second);

        let outcome = loop {
            let player = self.board.current_player();
            let mv = match player {
                Player::First => first.get_action(&self.board),
                Player::Second => second.get_action(&self.board),
            };

            if !self.board.is_legal(mv) {
                warn!(%player, proposed = mv, "agent proposed an illegal move");
                break GameOutcome::Forfeit {
                    offender: player,
                    proposed: mv,
                };
            }

            self.board.apply_move(mv);
            self.moves.push(mv);
            trace!(%player, mv, "applied move");

            match self.board.status() {
                GameStatus::InProgress => {}
                GameStatus::Win(winner) => break GameOutcome::Win(winner),
                GameStatus::Tie => break GameOutcome::Tie,
            }
        };

        debug!(%outcome, moves = self.moves.len(), "game finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use std::collections::VecDeque;

    /// Plays a fixed list of moves, then proposes an off-board index
    struct ScriptedAgent {
        script: VecDeque<usize>,
        assigned: Option<Player>,
    }

    impl ScriptedAgent {
        fn new(moves: &[usize]) -> Self {
            Self {
                script: moves.iter().copied().collect(),
                assigned: None,
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn set_player_index(&mut self, player: Player) {
            self.assigned = Some(player);
        }

        fn get_action(&mut self, board: &Board) -> usize {
            assert_eq!(Some(board.current_player()), self.assigned);
            self.script.pop_front().unwrap_or(usize::MAX)
        }
    }

    fn game_loop(width: usize, height: usize, run_length: usize) -> GameLoop {
        GameLoop::new(Board::new(BoardConfig::new(width, height, run_length)).unwrap())
    }

    #[test]
    fn test_agents_learn_their_player_index() {
        let mut game = game_loop(3, 3, 3);
        let mut first = ScriptedAgent::new(&[0, 1, 2]);
        let mut second = ScriptedAgent::new(&[3, 4]);
        game.play(&mut first, &mut second, Player::First);
        assert_eq!(first.assigned, Some(Player::First));
        assert_eq!(second.assigned, Some(Player::Second));
    }

    #[test]
    fn test_win_stops_the_loop() {
        let mut game = game_loop(5, 5, 3);
        let mut first = ScriptedAgent::new(&[0, 1, 2, 24]);
        let mut second = ScriptedAgent::new(&[5, 6, 20]);

        let outcome = game.play(&mut first, &mut second, Player::First);
        assert_eq!(outcome, GameOutcome::Win(Player::First));
        assert_eq!(outcome.winner(), Some(Player::First));
        assert_eq!(game.moves(), &[0, 5, 1, 6, 2]);
        // Unused script entries were never requested.
        assert_eq!(first.script, VecDeque::from(vec![24]));
        assert_eq!(second.script, VecDeque::from(vec![20]));
    }

    #[test]
    fn test_second_player_can_start_and_win() {
        let mut game = game_loop(4, 4, 3);
        let mut first = ScriptedAgent::new(&[12, 13]);
        let mut second = ScriptedAgent::new(&[0, 4, 8]);

        let outcome = game.play(&mut first, &mut second, Player::Second);
        assert_eq!(outcome, GameOutcome::Win(Player::Second));
        assert_eq!(game.moves(), &[0, 12, 4, 13, 8]);
    }

    #[test]
    fn test_full_board_is_tie() {
        let mut game = game_loop(3, 3, 3);
        let mut first = ScriptedAgent::new(&[0, 2, 3, 7, 8]);
        let mut second = ScriptedAgent::new(&[1, 4, 5, 6]);

        let outcome = game.play(&mut first, &mut second, Player::First);
        assert_eq!(outcome, GameOutcome::Tie);
        assert!(outcome.is_over());
        assert_eq!(outcome.winner(), None);
        assert_eq!(game.board().legal_move_count(), 0);
    }

    #[test]
    fn test_occupied_move_forfeits_without_mutation() {
        let mut game = game_loop(5, 5, 4);
        let mut first = ScriptedAgent::new(&[12, 13]);
        let mut second = ScriptedAgent::new(&[12]);

        let outcome = game.play(&mut first, &mut second, Player::First);
        assert_eq!(
            outcome,
            GameOutcome::Forfeit {
                offender: Player::Second,
                proposed: 12
            }
        );
        assert_eq!(outcome.winner(), None);
        assert!(outcome.is_forfeit());

        let board = game.board();
        assert_eq!(board.stone_count(), 1);
        assert_eq!(board.cell(12), Some(Player::First));
        assert_eq!(board.current_player(), Player::Second);
        assert_eq!(board.last_move(), Some(12));
    }

    #[test]
    fn test_off_board_move_forfeits() {
        let mut game = game_loop(3, 3, 3);
        let mut first = ScriptedAgent::new(&[9]);
        let mut second = ScriptedAgent::new(&[]);

        let outcome = game.play(&mut first, &mut second, Player::First);
        assert_eq!(
            outcome,
            GameOutcome::Forfeit {
                offender: Player::First,
                proposed: 9
            }
        );
        assert_eq!(game.board().stone_count(), 0);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_replay_reinitializes_board() {
        let mut game = game_loop(3, 3, 3);
        let mut first = ScriptedAgent::new(&[0, 1, 2]);
        let mut second = ScriptedAgent::new(&[3, 4]);
        game.play(&mut first, &mut second, Player::First);

        let mut first = ScriptedAgent::new(&[8]);
        let mut second = ScriptedAgent::new(&[]);
        let outcome = game.play(&mut first, &mut second, Player::First);
        assert!(outcome.is_forfeit());
        assert_eq!(game.moves(), &[8]);
        assert_eq!(game.board().stone_count(), 1);
    }

    #[test]
    fn test_boxed_agents() {
        let mut game = game_loop(3, 3, 3);
        let mut first: Box<dyn Agent> = Box::new(ScriptedAgent::new(&[0, 1, 2]));
        let mut second: Box<dyn Agent> = Box::new(ScriptedAgent::new(&[3, 4]));
        let outcome = game.play(&mut first, &mut second, Player::First);
        assert_eq!(outcome, GameOutcome::Win(Player::First));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Win(Player::Second).to_string(), "Player 1 wins");
        assert_eq!(
            GameOutcome::Forfeit {
                offender: Player::First,
                proposed: 40
            }
            .to_string(),
            "Player 0 forfeits with illegal move 40"
        );
    }
}
