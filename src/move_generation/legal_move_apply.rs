//! Board edits for one move, shared by simulation and commit.
//!
//! `apply_move` performs every special-case edit a move implies: the rook
//! hop for castling, removal of an en-passant victim, promotion rewrite,
//! castling-right revocation, the en-passant window and the side to move.
//! It trusts that `to` came from move generation and only guards the board
//! invariants; rule checking belongs to the caller.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_row, promotion_row, KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
use crate::game_state::move_description::{MoveDescription, MoveTypes, MoveVector};
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_king::castling_rook_squares;

/// Whether moving `id` to `to` lands a pawn on its promotion row.
pub fn is_promotion_move(position: &Position, id: PieceId, to: Square) -> bool {
    let piece = position.board.piece(id);
    piece.kind == PieceKind::Pawn && to.row() == promotion_row(piece.color)
}

pub fn apply_move(
    position: &mut Position,
    id: PieceId,
    to: Square,
    promotion: PieceKind,
) -> Result<MoveDescription, ChessErrors> {
    let piece = *position.board.piece(id);
    let from = piece
        .square()
        .ok_or_else(|| ChessErrors::InvalidBoardEdit(format!("piece {id:?} is captured")))?;
    let board = &mut position.board;

    let mut move_type = MoveTypes::Regular;
    let mut captured = None;

    let castling = if piece.kind == PieceKind::King {
        castling_rook_squares(from, to)
    } else {
        None
    };

    if let Some((rook_from, rook_to)) = castling {
        let rook_id = board
            .id_at(rook_from)
            .ok_or(ChessErrors::EmptySquare(rook_from))?;
        board.relocate(rook_id, rook_to)?;
        board.piece_mut(rook_id).move_count += 1;
        move_type = MoveTypes::Castling(MoveVector {
            piece: rook_id,
            from: rook_from,
            to: rook_to,
        });
    } else if piece.kind == PieceKind::Pawn
        && from.column() != to.column()
        && board.is_empty_square(to)
    {
        let victim_square = Square::new(from.row(), to.column())?;
        let victim = board
            .id_at(victim_square)
            .ok_or(ChessErrors::EmptySquare(victim_square))?;
        board.capture(victim)?;
        captured = Some((victim, board.piece(victim).kind));
        move_type = MoveTypes::EnPassant;
    } else if let Some(occupant) = board.id_at(to) {
        let occupant_piece = *board.piece(occupant);
        if occupant_piece.color == piece.color {
            return Err(ChessErrors::InvalidBoardEdit(format!(
                "{to} holds a friendly piece"
            )));
        }
        board.capture(occupant)?;
        captured = Some((occupant, occupant_piece.kind));
        if occupant_piece.kind == PieceKind::Rook {
            revoke_castling_for_corner(board, occupant_piece.color, to);
        }
    }

    board.relocate(id, to)?;
    let moved = board.piece_mut(id);
    moved.move_count += 1;

    match piece.kind {
        PieceKind::King => {
            moved.allow_castle_kingside = false;
            moved.allow_castle_queenside = false;
        }
        PieceKind::Pawn if to.row() == promotion_row(piece.color) => {
            moved.kind = promotion;
            move_type = MoveTypes::Promote(promotion);
        }
        PieceKind::Pawn if from.row().abs_diff(to.row()) == 2 => {
            move_type = MoveTypes::DoubleStep;
        }
        PieceKind::Rook => revoke_castling_for_corner(board, piece.color, from),
        _ => {}
    }

    position.en_passant_target = (move_type == MoveTypes::DoubleStep).then_some(id);
    position.side_to_move = piece.color.opposite();

    Ok(MoveDescription {
        vector: MoveVector {
            piece: id,
            from,
            to,
        },
        kind: piece.kind,
        color: piece.color,
        move_type,
        captured,
    })
}

/// A rook leaving (or captured on) its corner costs its king that side.
fn revoke_castling_for_corner(board: &mut Board, color: Color, corner: Square) {
    if corner.row() != back_row(color) {
        return;
    }
    let Some(king_id) = board.king(color).map(|king| king.id) else {
        return;
    };
    let king = board.piece_mut(king_id);
    match corner.column() {
        KINGSIDE_ROOK_COLUMN => king.allow_castle_kingside = false,
        QUEENSIDE_ROOK_COLUMN => king.allow_castle_queenside = false,
        _ => {}
    }
}
