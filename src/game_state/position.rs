//! Rule-relevant slice of a game: placement, side to move and the pawn that
//! may be captured en passant.
//!
//! `Position` is what the legality filter clones to simulate a move. Cloning
//! is a fixed-size copy of the grid and piece arena.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceId};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    /// Set only right after a pawn double step; cleared by the next move.
    pub en_passant_target: Option<PieceId>,
}

impl Position {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            en_passant_target: None,
        }
    }

    pub fn starting() -> Result<Self, ChessErrors> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }
}
