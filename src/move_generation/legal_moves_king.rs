//! King move generation, castling included.
//!
//! Castling is offered as the two-square king destination only. It requires
//! an unmoved king holding the matching castling flag, an unmoved friendly
//! rook in the corner, empty squares strictly between them, and neither the
//! king's square nor the square it crosses under attack. Whether the landing
//! square is attacked is left to the legality filter, so relaxed rules may
//! still castle into an attacked square.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_steps, GenerationMode, KING_OFFSETS};

pub fn generate_king_moves(
    position: &Position,
    king: &Piece,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    push_steps(position, king, &KING_OFFSETS, out);

    if mode == GenerationMode::Moves {
        generate_castling_moves(position, king, out);
    }
}

fn generate_castling_moves(position: &Position, king: &Piece, out: &mut Vec<Square>) {
    if !king.is_unmoved() || !(king.allow_castle_kingside || king.allow_castle_queenside) {
        return;
    }
    let Some(from) = king.square() else {
        return;
    };
    let enemy = king.color.opposite();

    // Cannot castle out of check.
    if is_square_attacked(position, from, enemy) {
        return;
    }

    let sides = [
        (king.allow_castle_kingside, KINGSIDE_ROOK_COLUMN, 1i8),
        (king.allow_castle_queenside, QUEENSIDE_ROOK_COLUMN, -1i8),
    ];
    for (allowed, rook_column, step) in sides {
        if !allowed {
            continue;
        }
        let Ok(rook_square) = Square::new(from.row(), rook_column) else {
            continue;
        };
        let rook_ready = position.board.piece_at(rook_square).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && rook.is_unmoved()
        });
        if !rook_ready || !path_is_clear(position, from, rook_square) {
            continue;
        }

        let (Some(crossing), Some(landing)) = (from.offset(0, step), from.offset(0, 2 * step))
        else {
            continue;
        };
        if is_square_attacked(position, crossing, enemy) {
            continue;
        }
        out.push(landing);
    }
}

/// Squares strictly between `a` and `b` on the same row are all empty.
fn path_is_clear(position: &Position, a: Square, b: Square) -> bool {
    let (low, high) = if a.column() < b.column() {
        (a.column(), b.column())
    } else {
        (b.column(), a.column())
    };
    ((low + 1)..high).all(|column| {
        Square::new(a.row(), column).is_ok_and(|square| position.board.is_empty_square(square))
    })
}

/// Rook vector for a castling king move, `None` if `from -> to` is not a
/// two-column king hop.
pub fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    if from.row() != to.row() || from.column().abs_diff(to.column()) != 2 {
        return None;
    }
    let (rook_column, step) = if to.column() > from.column() {
        (KINGSIDE_ROOK_COLUMN, 1)
    } else {
        (QUEENSIDE_ROOK_COLUMN, -1)
    };
    let rook_from = Square::new(from.row(), rook_column).ok()?;
    let rook_to = from.offset(0, step)?;
    Some((rook_from, rook_to))
}
