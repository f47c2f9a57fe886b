//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `Square` used by setup, protocol and test helpers.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquareText(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquareText(square.to_owned()));
    }

    Square::new(rank - b'1', file - b'a')
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.row(), a1.column()), (0, 0));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.row(), h8.column()), (7, 7));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(
            square_to_algebraic(Square::new(3, 4).expect("e4 is valid")),
            "e4"
        );
    }

    #[test]
    fn malformed_square_text_is_rejected() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "11"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidSquareText(bad.to_owned()))
            );
        }
    }
}
