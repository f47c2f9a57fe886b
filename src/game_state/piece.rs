use crate::game_state::chess_types::{Color, PieceId, PieceKind, Placement, Square};

/// One piece on (or captured from) the board.
///
/// `kind` changes only through promotion; `color` never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub placement: Placement,
    /// Committed moves made by this piece.
    pub move_count: u32,
    /// Only meaningful on an unmoved king.
    pub allow_castle_kingside: bool,
    pub allow_castle_queenside: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            id,
            kind,
            color,
            placement: Placement::OnBoard(square),
            move_count: 0,
            allow_castle_kingside: false,
            allow_castle_queenside: false,
        }
    }

    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.placement.square()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        matches!(self.placement, Placement::Captured)
    }

    #[inline]
    pub fn is_unmoved(&self) -> bool {
        self.move_count == 0
    }
}
