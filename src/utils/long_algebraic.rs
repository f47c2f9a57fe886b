//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! This is the move format spoken by the xboard front-end and printed for
//! move history. Parsing is purely syntactic; legality is decided by
//! `Game::commit`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for CoordinateMove {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate_move(s)
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, ChessErrors> {
    let text = text.trim();
    let invalid = || ChessErrors::InvalidCoordinateMove(text.to_owned());

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if kind.is_promotion_choice() => Some(kind),
            _ => return Err(invalid()),
        },
    };

    Ok(CoordinateMove {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv: CoordinateMove = "e2e4".parse().expect("e2e4 should parse");
        assert_eq!(mv.from, algebraic_to_square("e2").expect("valid square"));
        assert_eq!(mv.to, algebraic_to_square("e4").expect("valid square"));
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_string(), "e2e4");

        let promo = parse_coordinate_move("e7e8N").expect("promotion should parse");
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn rejects_malformed_moves() {
        for bad in ["", "e2", "e2e9", "e2e4k", "e2e4p", "e2e4qq", "z2e4"] {
            assert!(
                matches!(
                    parse_coordinate_move(bad),
                    Err(ChessErrors::InvalidCoordinateMove(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
