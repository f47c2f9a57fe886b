//! Committing moves and advancing clocks.
//!
//! A commit re-derives the legal destinations of the moving piece instead of
//! trusting an earlier query, applies the move to a copy of the position and
//! only swaps the copy in once every check has passed.

use chrono::{DateTime, Utc};

use crate::chess_errors::CommitRejection;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game::{Game, GamePhase};
use crate::game_state::move_description::MoveDescription;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::{apply_move, is_promotion_move};

impl Game {
    /// Commit a move now. See `commit_at`.
    pub fn commit(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveDescription, CommitRejection> {
        self.commit_at(from, to, promotion, Utc::now())
    }

    /// Move the piece on `from` to `to` at wall-clock time `now`.
    ///
    /// The move is validated against the current state first; a rejection
    /// leaves the game, clocks included, unchanged. A valid move then
    /// observes the clock exactly as `tick_clock_at(now)` would. If that
    /// expires a clock the game is over and the commit is refused with
    /// `GameNotActive`.
    ///
    /// `promotion` defaults to a queen and is only accepted on a move that
    /// lands a pawn on its last row.
    pub fn commit_at(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        now: DateTime<Utc>,
    ) -> Result<MoveDescription, CommitRejection> {
        let piece = self.validate_commit(from, to, promotion)?;

        let mut next = self.position.clone();
        let record = apply_move(
            &mut next,
            piece.id,
            to,
            promotion.unwrap_or(PieceKind::Queen),
        )
        .map_err(|_| CommitRejection::IllegalDestination(to))?;

        self.tick_clock_at(now);
        if !self.is_active() {
            return Err(CommitRejection::GameNotActive);
        }

        self.position = next;
        self.history.push(record);

        if record.captured_king() {
            self.phase = GamePhase::KingCapture;
            self.winner = Some(piece.color);
            self.in_check = false;
            self.clock.stop();
            return Ok(record);
        }

        // The mover was charged up to `now` above; the opponent's time runs from here.
        self.clock.resume(now);
        self.update_state();
        Ok(record)
    }

    /// Every check a commit makes before touching the game.
    fn validate_commit(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Piece, CommitRejection> {
        if !self.is_active() {
            return Err(CommitRejection::GameNotActive);
        }

        let piece = *self
            .position
            .board
            .piece_at(from)
            .ok_or(CommitRejection::EmptySquare(from))?;
        if piece.color != self.current_color() {
            return Err(CommitRejection::NotYourTurn);
        }
        if let Some(kind) = promotion {
            if !kind.is_promotion_choice() {
                return Err(CommitRejection::InvalidPromotionChoice(kind));
            }
        }
        if !self.legal_moves(from, true).contains(&to) {
            return Err(CommitRejection::IllegalDestination(to));
        }
        if let Some(kind) = promotion {
            if !is_promotion_move(&self.position, piece.id, to) {
                return Err(CommitRejection::InvalidPromotionChoice(kind));
            }
        }
        Ok(piece)
    }

    /// Observe the clock now. See `tick_clock_at`.
    pub fn tick_clock(&mut self) {
        self.tick_clock_at(Utc::now());
    }

    /// Charge the side to move for the time elapsed since the clock last
    /// resumed. When a clock reaches zero the game ends on time and the
    /// other side wins. Does nothing unless the game is started and active.
    pub fn tick_clock_at(&mut self, now: DateTime<Utc>) {
        if !self.is_active() {
            return;
        }
        if let Some(expired) = self.clock.charge(self.current_color(), now) {
            self.phase = GamePhase::TimeOut;
            self.winner = Some(expired.opposite());
            self.clock.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::chess_errors::CommitRejection;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game::{Game, GamePhase};
    use crate::game_state::game_options::GameOptions;
    use crate::game_state::move_description::MoveTypes;
    use crate::utils::algebraic::algebraic_to_square;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000)
            .single()
            .expect("fixed timestamp is valid")
    }

    fn at(ms: i64) -> DateTime<Utc> {
        t0() + Duration::milliseconds(ms)
    }

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn started(fen: &str, options: GameOptions) -> Game {
        let mut game = Game::from_fen(fen, options).expect("FEN should parse");
        game.start_at(t0());
        game
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (i, (from, to)) in moves.iter().enumerate() {
            game.commit_at(sq(from), sq(to), None, at(100 * (i as i64 + 1)))
                .unwrap_or_else(|e| panic!("{from}{to} should be legal: {e}"));
        }
    }

    #[test]
    fn opening_pawn_double_step() {
        let mut game = Game::new_game(GameOptions::default());
        game.start_at(t0());
        let e2 = sq("e2");
        let e4 = sq("e4");
        assert!(game.legal_moves(e2, true).contains(&e4));

        let record = game.commit_at(e2, e4, None, at(500)).expect("e2e4 is legal");
        assert_eq!(record.move_type, MoveTypes::DoubleStep);
        let pawn = game.board().piece_at(e4).expect("pawn on e4");
        assert_eq!(pawn.move_count, 1);
        assert_eq!(game.en_passant_target(), Some(e4));
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new_game(GameOptions::default());
        game.start_at(t0());
        play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
        assert!(game.check_mate());
        assert!(game.in_check());
        assert!(!game.stale_mate());
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(
            game.commit_at(sq("e2"), sq("e3"), None, at(1_000)),
            Err(CommitRejection::GameNotActive)
        );
    }

    #[test]
    fn kingside_castling_relocates_rook() {
        let mut game = started(
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1",
            GameOptions::default(),
        );
        let e1 = sq("e1");
        let g1 = sq("g1");
        assert!(game.legal_moves(e1, true).contains(&g1));

        let rook = game.board().id_at(sq("h1")).expect("rook on h1");
        game.commit_at(e1, g1, None, at(100)).expect("castling is legal");
        assert_eq!(game.board().id_at(sq("f1")), Some(rook));
        assert!(game.board().is_empty_square(sq("h1")));
        let king = game.board().piece_at(g1).expect("king on g1");
        assert_eq!(king.move_count, 1);
        assert_eq!(game.board().piece(rook).move_count, 1);
    }

    #[test]
    fn relaxed_king_capture_ends_the_game() {
        let fen = "3r3k/8/8/8/8/8/8/4K3 w - - 0 1";
        let (e1, d1, d8) = (sq("e1"), sq("d1"), sq("d8"));

        let mut standard = started(fen, GameOptions::default());
        assert_eq!(
            standard.commit_at(e1, d1, None, at(100)),
            Err(CommitRejection::IllegalDestination(d1))
        );

        let mut relaxed = started(fen, GameOptions::blitz_relaxed(5));
        relaxed.commit_at(e1, d1, None, at(100)).expect("self-check allowed");
        assert!(relaxed.is_in_check(Color::White));
        assert!(relaxed.is_active());

        let record = relaxed.commit_at(d8, d1, None, at(200)).expect("king capture");
        assert!(record.captured_king());
        assert!(relaxed.king_capture());
        assert!(!relaxed.check_mate());
        assert_eq!(relaxed.winner(), Some(Color::Black));
        assert_eq!(relaxed.phase(), GamePhase::KingCapture);
    }

    #[test]
    fn stalemate_after_commit() {
        let mut game = started("7k/8/8/6Q1/8/8/8/K7 w - - 0 1", GameOptions::default());
        game.commit_at(sq("g5"), sq("g6"), None, at(100)).expect("queen move");
        assert!(game.stale_mate());
        assert!(!game.check_mate());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn en_passant_window_closes_after_one_move() {
        let mut game = Game::new_game(GameOptions::default());
        game.start_at(t0());
        play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
        assert_eq!(game.en_passant_target(), Some(sq("d5")));

        // A different pawn move still clears the window.
        let mut declined = game.clone();
        declined
            .commit_at(sq("a2"), sq("a3"), None, at(1_000))
            .expect("a2a3 is legal");
        assert_eq!(declined.en_passant_target(), None);

        let record = game
            .commit_at(sq("e5"), sq("d6"), None, at(1_000))
            .expect("en passant is legal");
        assert_eq!(record.move_type, MoveTypes::EnPassant);
        assert!(game.board().is_empty_square(sq("d5")));
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn rejections_leave_the_game_unchanged() {
        let mut game = Game::new_game(GameOptions::default());
        assert_eq!(
            game.commit_at(sq("e2"), sq("e4"), None, at(0)),
            Err(CommitRejection::GameNotActive)
        );

        game.start_at(t0());
        let before = format!("{game:?}");
        let white_ms = game.remaining_ms(Color::White);
        let started_at = game.clock_started_at();

        let rejected = [
            (("e7", "e5", None), CommitRejection::NotYourTurn),
            (("e2", "e5", None), CommitRejection::IllegalDestination(sq("e5"))),
            (("e4", "e5", None), CommitRejection::EmptySquare(sq("e4"))),
            (
                ("e2", "e4", Some(PieceKind::Queen)),
                CommitRejection::InvalidPromotionChoice(PieceKind::Queen),
            ),
            (
                ("e2", "e4", Some(PieceKind::King)),
                CommitRejection::InvalidPromotionChoice(PieceKind::King),
            ),
        ];
        for (i, ((from, to, promotion), expected)) in rejected.into_iter().enumerate() {
            let now = at(5_000 * (i as i64 + 1));
            assert_eq!(game.commit_at(sq(from), sq(to), promotion, now), Err(expected));
        }

        assert_eq!(format!("{game:?}"), before);
        assert_eq!(game.remaining_ms(Color::White), white_ms);
        assert_eq!(game.clock_started_at(), started_at);
        assert!(game.history().is_empty());

        // The first accepted move is charged for all the time spent above.
        game.commit_at(sq("e2"), sq("e4"), None, at(30_000))
            .expect("e2e4 is legal");
        assert_eq!(game.remaining_ms(Color::White), white_ms - 30_000);
    }

    #[test]
    fn promotion_choice_is_validated() {
        let fen = "7k/P7/8/8/8/8/8/K7 w - - 0 1";
        let (a7, a8) = (sq("a7"), sq("a8"));

        let mut game = started(fen, GameOptions::default());
        assert_eq!(
            game.commit_at(a7, a8, Some(PieceKind::King), at(100)),
            Err(CommitRejection::InvalidPromotionChoice(PieceKind::King))
        );
        game.commit_at(a7, a8, Some(PieceKind::Rook), at(100))
            .expect("rook promotion");
        assert_eq!(game.board().piece_at(a8).map(|p| p.kind), Some(PieceKind::Rook));

        let mut default_choice = started(fen, GameOptions::default());
        default_choice.commit_at(a7, a8, None, at(100)).expect("promotion");
        assert_eq!(
            default_choice.board().piece_at(a8).map(|p| p.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn move_count_invariant_holds_over_a_game() {
        let mut game = Game::new_game(GameOptions::default());
        game.start_at(t0());
        let moves = [("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5"), ("g1", "f3")];
        for (i, (from, to)) in moves.iter().enumerate() {
            let before: Vec<u32> = game.board().pieces().map(|p| p.move_count).collect();
            let captured_before = game.board().pieces().filter(|p| p.is_captured()).count();
            game.commit_at(sq(from), sq(to), None, at(100 * (i as i64 + 1)))
                .expect("scripted move is legal");
            let after: Vec<u32> = game.board().pieces().map(|p| p.move_count).collect();
            let bumped: u32 = before.iter().zip(&after).map(|(b, a)| a - b).sum();
            assert_eq!(bumped, 1);
            let captured_after = game.board().pieces().filter(|p| p.is_captured()).count();
            assert!(captured_after - captured_before <= 1);
        }
    }

    #[test]
    fn clock_charges_mover_and_times_out() {
        let mut game = Game::new_game(GameOptions {
            initial_clock_ms: 1_000,
            ..GameOptions::default()
        });
        game.start_at(t0());
        game.commit_at(sq("e2"), sq("e4"), None, at(300)).expect("e2e4");
        assert_eq!(game.remaining_ms(Color::White), 700);
        assert_eq!(game.remaining_ms(Color::Black), 1_000);

        game.tick_clock_at(at(800));
        assert_eq!(game.remaining_ms(Color::Black), 500);

        // Ticks never add time back.
        game.tick_clock_at(at(600));
        assert_eq!(game.remaining_ms(Color::Black), 500);

        game.tick_clock_at(at(5_000));
        assert!(game.time_out());
        assert_eq!(game.winner(), Some(Color::White));
        assert_eq!(game.remaining_ms(Color::Black), 0);

        // Frozen once over.
        game.tick_clock_at(at(9_000));
        assert_eq!(game.remaining_ms(Color::White), 700);
    }

    #[test]
    fn expired_clock_rejects_the_commit() {
        let mut game = Game::new_game(GameOptions {
            initial_clock_ms: 1_000,
            ..GameOptions::default()
        });
        game.start_at(t0());
        assert_eq!(
            game.commit_at(sq("e2"), sq("e4"), None, at(2_000)),
            Err(CommitRejection::GameNotActive)
        );
        assert!(game.time_out());
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.board().piece_at(sq("e2")).is_some());
    }
}
