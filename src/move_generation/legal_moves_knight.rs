use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{push_steps, KNIGHT_OFFSETS};

/// Knight moves are identical in move and attack generation.
pub fn generate_knight_moves(position: &Position, knight: &Piece, out: &mut Vec<Square>) {
    push_steps(position, knight, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn corner_knight_has_two_jumps() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let knight = position
            .board
            .piece_at(algebraic_to_square("a1").expect("valid square"))
            .expect("knight on a1");
        let mut out = Vec::new();
        generate_knight_moves(&position, knight, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn starting_knight_skips_friendly_squares() {
        let position = Position::starting().expect("start position");
        let knight = position
            .board
            .piece_at(algebraic_to_square("g1").expect("valid square"))
            .expect("knight on g1");
        let mut out = Vec::new();
        generate_knight_moves(&position, knight, &mut out);
        out.sort();
        let names: Vec<String> = out.iter().map(|sq| sq.to_string()).collect();
        assert_eq!(names, ["f3", "h3"]);
    }
}
