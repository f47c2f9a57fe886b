//! Read-only view of a game for rendering front-ends.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
use crate::game_state::game::{Game, GamePhase};
use crate::game_state::move_description::MoveDescription;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub move_count: u32,
    /// Filled only for the side to move while the game is active.
    pub legal_destinations: Vec<Square>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub pieces: Vec<PieceView>,
    pub captured: Vec<(PieceId, PieceKind, Color)>,
    pub current_color: Color,
    pub phase: GamePhase,
    pub game_started: bool,
    pub in_check: bool,
    /// Squares of the pieces giving check to the side to move.
    pub checkers: Vec<Square>,
    pub check_mate: bool,
    pub stale_mate: bool,
    pub time_out: bool,
    pub king_capture: bool,
    pub winner: Option<Color>,
    pub white_clock_ms: u64,
    pub black_clock_ms: u64,
    /// Whether a side's time is currently running.
    pub clock_running: bool,
    pub relaxed_rules: bool,
    pub en_passant_target: Option<Square>,
    pub moves_played: usize,
    pub last_move: Option<MoveDescription>,
}

impl Game {
    /// Consistent copy of everything a client needs to draw the game.
    /// Clocks are reported as last observed; call `tick_clock` first for
    /// fresh values.
    pub fn snapshot(&self) -> GameSnapshot {
        let current_color = self.current_color();
        let active = self.is_active();
        let mut pieces = Vec::new();
        let mut captured = Vec::new();

        for piece in self.board().pieces() {
            match piece.square() {
                Some(square) => {
                    let legal_destinations = if active && piece.color == current_color {
                        self.legal_moves(square, true)
                    } else {
                        Vec::new()
                    };
                    pieces.push(PieceView {
                        id: piece.id,
                        kind: piece.kind,
                        color: piece.color,
                        square,
                        move_count: piece.move_count,
                        legal_destinations,
                    });
                }
                None => captured.push((piece.id, piece.kind, piece.color)),
            }
        }

        GameSnapshot {
            pieces,
            captured,
            current_color,
            phase: self.phase(),
            game_started: self.is_started(),
            in_check: self.in_check(),
            checkers: self.checkers(),
            check_mate: self.check_mate(),
            stale_mate: self.stale_mate(),
            time_out: self.time_out(),
            king_capture: self.king_capture(),
            winner: self.winner(),
            white_clock_ms: self.remaining_ms(Color::White),
            black_clock_ms: self.remaining_ms(Color::Black),
            clock_running: self.clock.is_running(),
            relaxed_rules: self.options().is_relaxed(),
            en_passant_target: self.en_passant_target(),
            moves_played: self.history().len(),
            last_move: self.last_move().copied(),
        }
    }
}
