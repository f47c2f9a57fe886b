//! 8x8 grid plus the piece arena it indexes into.
//!
//! The board is a pure structural container with no rules. Every edit keeps
//! the grid and the pieces' own placements in agreement: a square's occupant,
//! if any, is the piece whose placement names that square. Pieces are never
//! removed from the arena; capture only flips their placement.

use std::fmt;

use arrayvec::ArrayVec;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::MAX_PIECES;
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Placement, Square};
use crate::game_state::piece::Piece;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    pieces: ArrayVec<Piece, MAX_PIECES>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a new piece to the arena and the grid.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, ChessErrors> {
        if self.id_at(square).is_some() {
            return Err(ChessErrors::SquareOccupied(square));
        }
        let id = PieceId(self.pieces.len() as u8);
        self.pieces
            .try_push(Piece::new(id, kind, color, square))
            .map_err(|_| ChessErrors::TooManyPieces)?;
        self.grid[square.row() as usize][square.column() as usize] = Some(id);
        Ok(id)
    }

    #[inline]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.row() as usize][square.column() as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).map(|id| &self.pieces[id.index()])
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.id_at(square).is_none()
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// All pieces ever placed, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces of `color` still on the board.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.color == color && !p.is_captured())
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.active_pieces(color).find(|p| p.kind == PieceKind::King)
    }

    /// Move a piece to an empty square. Rule-agnostic.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> Result<(), ChessErrors> {
        let from = self
            .piece(id)
            .square()
            .ok_or_else(|| ChessErrors::InvalidBoardEdit(format!("piece {id:?} is captured")))?;
        if let Some(occupant) = self.id_at(to) {
            if occupant != id {
                return Err(ChessErrors::SquareOccupied(to));
            }
        }
        self.grid[from.row() as usize][from.column() as usize] = None;
        self.grid[to.row() as usize][to.column() as usize] = Some(id);
        self.piece_mut(id).placement = Placement::OnBoard(to);
        Ok(())
    }

    /// Take a piece off the grid and mark it captured.
    pub(crate) fn capture(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let square = self
            .piece(id)
            .square()
            .ok_or_else(|| ChessErrors::InvalidBoardEdit(format!("piece {id:?} already captured")))?;
        self.grid[square.row() as usize][square.column() as usize] = None;
        self.piece_mut(id).placement = Placement::Captured;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
