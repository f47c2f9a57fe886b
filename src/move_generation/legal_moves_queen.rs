use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{
    cast_rays, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub fn generate_queen_moves(position: &Position, queen: &Piece, out: &mut Vec<Square>) {
    cast_rays(position, queen, &ORTHOGONAL_DIRECTIONS, out);
    cast_rays(position, queen, &DIAGONAL_DIRECTIONS, out);
}
