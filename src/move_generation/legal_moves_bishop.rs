use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{cast_rays, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(position: &Position, bishop: &Piece, out: &mut Vec<Square>) {
    cast_rays(position, bishop, &DIAGONAL_DIRECTIONS, out);
}
