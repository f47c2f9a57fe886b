//! Attack oracle: which squares a side threatens and whether a king is in
//! check. Built entirely on attack-mode generation.

use crate::game_state::chess_types::{Color, PieceId, Square};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::attacked_squares;

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position.board.king(color).and_then(|king| king.square())
}

/// A side without a king on the board (relaxed rules after a capture) is
/// never in check.
#[inline]
pub fn is_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    position
        .board
        .active_pieces(attacker_color)
        .any(|piece| attacked_squares(position, piece).contains(&square))
}

pub fn attackers_to_square(
    position: &Position,
    square: Square,
    attacker_color: Color,
) -> Vec<PieceId> {
    position
        .board
        .active_pieces(attacker_color)
        .filter(|piece| attacked_squares(position, piece).contains(&square))
        .map(|piece| piece.id)
        .collect()
}
