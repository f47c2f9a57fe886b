//! Record of a move after it has been applied to a position.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};

/// One piece travelling from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveVector {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Distinguishes regular moves from moves with special board edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTypes {
    /// A regular move or regular capture.
    Regular,
    /// Pawn advanced two rows and became the en-passant target.
    DoubleStep,
    /// En-passant capture. `MoveDescription::captured` holds the victim.
    EnPassant,
    /// Castling. Payload: the rook's vector.
    Castling(MoveVector),
    /// Pawn rewritten to the given kind on the last row.
    Promote(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub vector: MoveVector,
    /// Kind of the moving piece before the move.
    pub kind: PieceKind,
    pub color: Color,
    pub move_type: MoveTypes,
    pub captured: Option<(PieceId, PieceKind)>,
}

impl MoveDescription {
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn long_algebraic(&self) -> String {
        let base = format!("{}{}", self.vector.from, self.vector.to);
        match self.move_type {
            MoveTypes::Promote(kind) => format!("{base}{}", kind.to_char()),
            _ => base,
        }
    }

    #[inline]
    pub fn captured_king(&self) -> bool {
        matches!(self.captured, Some((_, PieceKind::King)))
    }
}
