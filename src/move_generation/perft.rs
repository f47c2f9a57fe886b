//! Perft node counting over the engine's own legal-move surface.
//!
//! Each promotion destination counts once per promotion choice, matching
//! the usual reference tables.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceId, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move, is_promotion_move};
use crate::move_generation::legal_move_filter::legal_destinations;

pub fn perft(position: &Position, depth: u8) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }

    let movers: Vec<PieceId> = position
        .board
        .active_pieces(position.side_to_move)
        .map(|piece| piece.id)
        .collect();

    let mut nodes = 0u64;
    for id in movers {
        for to in legal_destinations(position, id, true) {
            let choices: &[PieceKind] = if is_promotion_move(position, id, to) {
                &PieceKind::PROMOTION_CHOICES
            } else {
                &[PieceKind::Queen]
            };
            for &promotion in choices {
                if depth == 1 {
                    nodes += 1;
                    continue;
                }
                let mut next = position.clone();
                apply_move(&mut next, id, to, promotion)?;
                nodes += perft(&next, depth - 1)?;
            }
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn run(fen: &str, expected: &[u64]) {
        let position = Position::from_fen(fen).expect("FEN should parse");
        for (depth, nodes) in expected.iter().enumerate() {
            let counted = perft(&position, depth as u8 + 1).expect("perft should succeed");
            assert_eq!(counted, *nodes, "{fen} at depth {}", depth + 1);
        }
    }

    #[test]
    fn perft_start_position() {
        run(STARTING_POSITION_FEN, &[20, 400, 8902]);
    }

    #[test]
    fn perft_kiwipete() {
        run(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[48, 2039],
        );
    }

    #[test]
    fn perft_rook_endgame() {
        run("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812]);
    }

    #[test]
    fn perft_promotions() {
        run(
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
            &[6, 264],
        );
    }
}
