//! Legality filter.
//!
//! A candidate is legal when, after applying it to a copy of the position,
//! the mover's king is not attacked. Simulating each candidate handles pins,
//! blocked checks, discovered checks and en-passant rank exposure uniformly.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Keep the candidates of piece `id` that do not leave its own king attacked.
pub fn filter_legal(position: &Position, id: PieceId, candidates: Vec<Square>) -> Vec<Square> {
    let color = position.board.piece(id).color;
    candidates
        .into_iter()
        .filter(|&to| {
            let mut simulated = position.clone();
            // Promotion choice cannot affect the mover's own king safety.
            apply_move(&mut simulated, id, to, PieceKind::Queen).is_ok()
                && !is_in_check(&simulated, color)
        })
        .collect()
}

/// Destinations of piece `id`, optionally with self-check moves removed.
pub fn legal_destinations(position: &Position, id: PieceId, filter_self_check: bool) -> Vec<Square> {
    let candidates = pseudo_legal_moves(position, id);
    if filter_self_check {
        filter_legal(position, id, candidates)
    } else {
        candidates
    }
}

/// Whether any piece of `color` has at least one destination.
pub fn has_any_legal_move(position: &Position, color: Color, filter_self_check: bool) -> bool {
    position
        .board
        .active_pieces(color)
        .any(|piece| !legal_destinations(position, piece.id, filter_self_check).is_empty())
}
