//! Helpers shared by the per-kind generators: direction tables, ray casting
//! and fixed-offset stepping.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// What a generator is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Every pseudo-legal destination, castling and pawn advances included.
    Moves,
    /// Only squares the piece threatens. Pawn advances and castling are
    /// excluded and pawn diagonals are reported whether or not they hold a
    /// piece.
    Attacks,
}

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Whether `piece` may end its move on `square`: empty or enemy-occupied.
#[inline]
pub fn is_enterable(position: &Position, piece: &Piece, square: Square) -> bool {
    !matches!(
        position.board.piece_at(square),
        Some(occupant) if occupant.color == piece.color
    )
}

/// Walk each direction until blocked. A friendly piece stops the ray without
/// being added; an enemy piece is added and then stops the ray.
pub fn cast_rays(position: &Position, piece: &Piece, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    let Some(from) = piece.square() else {
        return;
    };

    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_column) {
            match position.board.piece_at(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Fixed single-step offsets, each independently valid when enterable.
pub fn push_steps(position: &Position, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    let Some(from) = piece.square() else {
        return;
    };

    for &(d_row, d_column) in offsets {
        if let Some(to) = from.offset(d_row, d_column) {
            if is_enterable(position, piece, to) {
                out.push(to);
            }
        }
    }
}
