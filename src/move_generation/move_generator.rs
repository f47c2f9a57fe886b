//! Per-kind dispatch for pseudo-legal move and attack generation.
//!
//! Pseudo-legal moves follow each kind's movement pattern and occupancy
//! rules but ignore whether the mover's own king is left attacked; see
//! `legal_move_filter` for that step.

use crate::game_state::chess_types::{PieceId, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::GenerationMode;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_for_piece(
    position: &Position,
    piece: &Piece,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    if piece.is_captured() {
        return;
    }
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, piece, mode, out),
        PieceKind::Knight => generate_knight_moves(position, piece, out),
        PieceKind::Bishop => generate_bishop_moves(position, piece, out),
        PieceKind::Rook => generate_rook_moves(position, piece, out),
        PieceKind::Queen => generate_queen_moves(position, piece, out),
        PieceKind::King => generate_king_moves(position, piece, mode, out),
    }
}

/// Pseudo-legal destinations of one piece.
pub fn pseudo_legal_moves(position: &Position, id: PieceId) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_for_piece(position, position.board.piece(id), GenerationMode::Moves, &mut out);
    out
}

/// Squares one piece threatens.
pub fn attacked_squares(position: &Position, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_for_piece(position, piece, GenerationMode::Attacks, &mut out);
    out
}
