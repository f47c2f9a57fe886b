//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting setup, back and pawn rows,
//! castling geometry and clock defaults.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fifteen minutes per side.
pub const DEFAULT_CLOCK_MS: u64 = 15 * 60 * 1000;

/// Upper bound on pieces a board arena holds.
pub const MAX_PIECES: usize = 32;

pub const KING_START_COLUMN: u8 = 4;
pub const KINGSIDE_ROOK_COLUMN: u8 = 7;
pub const QUEENSIDE_ROOK_COLUMN: u8 = 0;

#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    back_row(color.opposite())
}
