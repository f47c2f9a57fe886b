//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the xboard
//! session's diagnostic output.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Render the board to a Unicode string, White's back rank at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for column in 0..8u8 {
            let glyph = Square::new(row, column)
                .ok()
                .and_then(|square| board.piece_at(square))
                .map_or('·', |piece| piece_to_unicode(piece.color, piece.kind));
            out.push(glyph);

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
