//! Rook move generation: orthogonal rays stopped by the first occupant.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{cast_rays, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(position: &Position, rook: &Piece, out: &mut Vec<Square>) {
    cast_rays(position, rook, &ORTHOGONAL_DIRECTIONS, out);
}
