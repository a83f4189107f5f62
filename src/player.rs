//! # Player Identities
//!
//! The two sides of an N-in-a-row game. Player ids are `0` and `1`; the
//! numeric form is what rendering and tensor encoding collaborators see.

use std::fmt;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    /// Player id 0, drawn as `X`
    First,
    /// Player id 1, drawn as `O`
    Second,
}

impl Player {
    /// Both players in id order
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Numeric player id (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Player for a numeric id, `None` for anything other than 0 or 1
    #[inline]
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// The other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Single-character stone symbol used by the renderers
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index())
    }
}
