//! Pawn move generation.
//!
//! Single and double advances, diagonal captures and en-passant captures.
//! Promotion is not a separate destination; the kind rewrite happens when
//! the move is applied.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{PieceId, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::GenerationMode;

pub fn generate_pawn_moves(
    position: &Position,
    pawn: &Piece,
    mode: GenerationMode,
    out: &mut Vec<Square>,
) {
    let Some(from) = pawn.square() else {
        return;
    };
    let forward = pawn.color.forward();
    let board = &position.board;

    if mode == GenerationMode::Moves {
        if let Some(one_step) = from.offset(forward, 0) {
            if board.is_empty_square(one_step) {
                out.push(one_step);

                if from.row() == pawn_start_row(pawn.color) {
                    if let Some(two_step) = from.offset(2 * forward, 0) {
                        if board.is_empty_square(two_step) {
                            out.push(two_step);
                        }
                    }
                }
            }
        }
    }

    let en_passant = en_passant_capture(position, pawn).map(|(to, _)| to);
    for d_column in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_column) else {
            continue;
        };
        match mode {
            GenerationMode::Attacks => out.push(to),
            GenerationMode::Moves => {
                let enemy_on_target = board
                    .piece_at(to)
                    .is_some_and(|occupant| occupant.color != pawn.color);
                if enemy_on_target || en_passant == Some(to) {
                    out.push(to);
                }
            }
        }
    }
}

/// The en-passant capture available to `pawn`, if any: the landing square
/// and the pawn that gets removed.
pub fn en_passant_capture(position: &Position, pawn: &Piece) -> Option<(Square, PieceId)> {
    let from = pawn.square()?;
    let victim = position.board.piece(position.en_passant_target?);
    let victim_square = victim.square()?;

    if victim.kind != PieceKind::Pawn
        || victim.color == pawn.color
        || victim_square.row() != from.row()
        || victim_square.column().abs_diff(from.column()) != 1
    {
        return None;
    }

    let landing = Square::new(
        (from.row() as i8 + pawn.color.forward()) as u8,
        victim_square.column(),
    )
    .ok()?;
    position
        .board
        .is_empty_square(landing)
        .then_some((landing, victim.id))
}
