//! The `Game` aggregate: position, status, clocks, options and history.
//!
//! Construction and read-only queries live here; the state machine that
//! mutates a game (commit, state re-evaluation, clock ticks) lives in
//! `game_flow`. A `Game` has no internal synchronization; a host serving
//! several callers keeps one instance per game behind a single lock or a
//! single owning task.

use chrono::{DateTime, Utc};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::clock::Clock;
use crate::game_state::game_options::GameOptions;
use crate::game_state::move_description::MoveDescription;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::is_promotion_move;
use crate::move_generation::legal_move_checks::{attackers_to_square, is_in_check, king_square};
use crate::move_generation::legal_move_filter::legal_destinations;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::CoordinateMove;

/// Lifecycle of a game. The four terminal phases are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Started,
    CheckMate,
    StaleMate,
    TimeOut,
    KingCapture,
}

impl GamePhase {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GamePhase::CheckMate | GamePhase::StaleMate | GamePhase::TimeOut | GamePhase::KingCapture
        )
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) position: Position,
    pub(crate) phase: GamePhase,
    pub(crate) in_check: bool,
    pub(crate) winner: Option<Color>,
    pub(crate) clock: Clock,
    pub(crate) options: GameOptions,
    pub(crate) history: Vec<MoveDescription>,
}

impl Game {
    /// Standard initial position, not yet started.
    pub fn new_game(options: GameOptions) -> Self {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse");
        Self::from_position(position, options)
    }

    pub fn from_fen(fen: &str, options: GameOptions) -> Result<Self, ChessErrors> {
        Ok(Self::from_position(parse_fen(fen)?, options))
    }

    pub fn from_position(position: Position, options: GameOptions) -> Self {
        let in_check = is_in_check(&position, position.side_to_move);
        Self {
            position,
            phase: GamePhase::NotStarted,
            in_check,
            winner: None,
            clock: Clock::new(options.initial_clock_ms),
            options,
            history: Vec::new(),
        }
    }

    /// Begin play now. See `start_at`.
    pub fn start(&mut self) {
        self.start_at(Utc::now());
    }

    /// `NotStarted -> Started`: starts the clock of the side to move and
    /// evaluates the position, which may already be terminal for a custom
    /// setup. Has no effect once the game has started.
    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.phase = GamePhase::Started;
        self.clock.resume(now);
        self.update_state();
    }

    /// Destinations of the piece on `square`. Empty when the square is
    /// empty. `include_check_filter` removes self-check moves; it is ignored
    /// under relaxed rules, where self-check is always allowed. This query
    /// does not depend on whose turn it is or on the game phase.
    pub fn legal_moves(&self, square: Square, include_check_filter: bool) -> Vec<Square> {
        let Some(piece) = self.position.board.piece_at(square) else {
            return Vec::new();
        };
        let filter = include_check_filter && !self.options.is_relaxed();
        legal_destinations(&self.position, piece.id, filter)
    }

    /// `legal_moves` addressed by row and column.
    pub fn legal_moves_at(
        &self,
        row: u8,
        column: u8,
        include_check_filter: bool,
    ) -> Result<Vec<Square>, ChessErrors> {
        Ok(self.legal_moves(Square::new(row, column)?, include_check_filter))
    }

    /// Every move available to the side to move under the game's rules.
    /// Promotions are listed once per promotion choice.
    pub fn legal_move_list(&self) -> Vec<CoordinateMove> {
        let color = self.current_color();
        let filter = !self.options.is_relaxed();
        let mut moves = Vec::new();
        for piece in self.position.board.active_pieces(color) {
            let Some(from) = piece.square() else {
                continue;
            };
            for to in legal_destinations(&self.position, piece.id, filter) {
                if is_promotion_move(&self.position, piece.id, to) {
                    moves.extend(PieceKind::PROMOTION_CHOICES.iter().map(|&kind| {
                        CoordinateMove {
                            from,
                            to,
                            promotion: Some(kind),
                        }
                    }));
                } else {
                    moves.push(CoordinateMove {
                        from,
                        to,
                        promotion: None,
                    });
                }
            }
        }
        moves
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.position, color)
    }

    /// Squares of the pieces giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        let color = self.current_color();
        let Some(king) = king_square(&self.position, color) else {
            return Vec::new();
        };
        attackers_to_square(&self.position, king, color.opposite())
            .into_iter()
            .filter_map(|id| self.position.board.piece(id).square())
            .collect()
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn current_color(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// Started and not yet over.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Started
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn check_mate(&self) -> bool {
        self.phase == GamePhase::CheckMate
    }

    #[inline]
    pub fn stale_mate(&self) -> bool {
        self.phase == GamePhase::StaleMate
    }

    #[inline]
    pub fn time_out(&self) -> bool {
        self.phase == GamePhase::TimeOut
    }

    #[inline]
    pub fn king_capture(&self) -> bool {
        self.phase == GamePhase::KingCapture
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Square of the pawn that may currently be captured en passant.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.position
            .en_passant_target
            .and_then(|id| self.position.board.piece(id).square())
    }

    #[inline]
    pub fn remaining_ms(&self, color: Color) -> u64 {
        self.clock.remaining_ms(color)
    }

    #[inline]
    pub fn clock_started_at(&self) -> Option<DateTime<Utc>> {
        self.clock.started_at()
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[inline]
    pub fn history(&self) -> &[MoveDescription] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveDescription> {
        self.history.last()
    }
}
