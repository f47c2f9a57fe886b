//! FEN-to-Position setup parser.
//!
//! Reads the board layout, side to move and castling fields. En-passant and
//! move-counter fields are accepted but ignored: a freshly set up position
//! has no en-passant target and every piece starts with a zero move count.
//! Setups with a pawn on a back rank, or with the side not to move already
//! in check, are rejected.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_row, KINGSIDE_ROOK_COLUMN, KING_START_COLUMN, QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_in_check;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidSetup("missing board layout".to_owned()))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next().unwrap_or("-");

    let mut board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(&mut board, castling_part)?;

    for color in [Color::White, Color::Black] {
        let kings = board
            .active_pieces(color)
            .filter(|p| p.kind == PieceKind::King)
            .count();
        if kings > 1 {
            return Err(ChessErrors::InvalidSetup(format!("{color} has {kings} kings")));
        }
    }

    let on_back_rank = |square: Square| square.row() == 0 || square.row() == 7;
    if let Some(pawn) = board
        .pieces()
        .find(|p| p.kind == PieceKind::Pawn && p.square().is_some_and(on_back_rank))
    {
        return Err(ChessErrors::InvalidSetup(format!(
            "{} pawn on a back rank",
            pawn.color
        )));
    }

    let position = Position::new(board, side_to_move);
    if is_in_check(&position, side_to_move.opposite()) {
        return Err(ChessErrors::InvalidSetup(format!(
            "{} is in check but not to move",
            side_to_move.opposite()
        )));
    }

    Ok(position)
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidSetup(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut column = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidSetup(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                column += empty_count as u8;
                if column > 8 {
                    return Err(ChessErrors::InvalidSetup(format!(
                        "rank '{rank_str}' has too many files"
                    )));
                }
                continue;
            }

            let kind = PieceKind::from_char(ch).ok_or_else(|| {
                ChessErrors::InvalidSetup(format!("invalid piece character '{ch}'"))
            })?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.place(kind, color, Square::new(row, column)?)?;
            column += 1;
        }

        if column != 8 {
            return Err(ChessErrors::InvalidSetup(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidSetup(format!(
            "invalid side to move '{side_part}'"
        ))),
    }
}

/// Castling letters become flags on the matching king, provided the king
/// stands on its home square.
fn apply_castling_rights(board: &mut Board, castling_part: &str) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, kingside, rook_column) = match ch {
            'K' => (Color::White, true, KINGSIDE_ROOK_COLUMN),
            'Q' => (Color::White, false, QUEENSIDE_ROOK_COLUMN),
            'k' => (Color::Black, true, KINGSIDE_ROOK_COLUMN),
            'q' => (Color::Black, false, QUEENSIDE_ROOK_COLUMN),
            _ => {
                return Err(ChessErrors::InvalidSetup(format!(
                    "invalid castling character '{ch}'"
                )))
            }
        };

        let home = Square::new(back_row(color), KING_START_COLUMN)?;
        let rook_home = Square::new(back_row(color), rook_column)?;
        let Some(king_id) = board
            .king(color)
            .filter(|king| king.square() == Some(home))
            .map(|king| king.id)
        else {
            continue;
        };
        let rook_in_place = board
            .piece_at(rook_home)
            .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
        if !rook_in_place {
            continue;
        }

        let king = board.piece_mut(king_id);
        if kingside {
            king.allow_castle_kingside = true;
        } else {
            king.allow_castle_queenside = true;
        }
    }

    Ok(())
}
