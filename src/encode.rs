//! Fixed-shape numeric encoding of a board for learning components.
//!
//! The output is `PLANES x height x width` values, plane-major, each plane
//! row-major by cell index (`y * width + x`):
//!
//! | plane | contents                                              |
//! |-------|-------------------------------------------------------|
//! | 0     | stones of the player to move                          |
//! | 1     | stones of the opponent                                |
//! | 2     | the last move (all zero before the first move)        |
//! | 3     | all ones when an even number of stones has been played |
//!
//! Only public [`Board`] accessors are used.

use crate::board::Board;

/// Number of feature planes
pub const PLANES: usize = 4;

/// Encode `board` from the perspective of its current player
pub fn encode_planes(board: &Board) -> Vec<f32> {
    let area = board.area();
    let mut planes = vec![0.0f32; PLANES * area];
    let me = board.current_player();

    for (mv, cell) in board.occupancy().iter().enumerate() {
        match cell {
            Some(player) if *player == me => planes[mv] = 1.0,
            Some(_) => planes[area + mv] = 1.0,
            None => {}
        }
    }

    if let Some(last) = board.last_move() {
        planes[2 * area + last] = 1.0;
    }

    if board.stone_count() % 2 == 0 {
        planes[3 * area..].fill(1.0);
    }

    planes
}
