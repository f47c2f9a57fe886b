//! Check, checkmate and stalemate evaluation for the side to move.

use crate::game_state::game::{Game, GamePhase};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_filter::has_any_legal_move;

impl Game {
    /// Re-evaluate the side to move. Checkmate and stalemate share the
    /// "no legal move" test and differ only by whether the side is attacked,
    /// so a position is never reported as both. Terminal phases are never
    /// left, and only a started game can become terminal here.
    pub fn update_state(&mut self) {
        if self.phase.is_terminal() {
            return;
        }

        let color = self.current_color();
        self.in_check = is_in_check(&self.position, color);

        if self.phase != GamePhase::Started {
            return;
        }

        let filter = !self.options.is_relaxed();
        if has_any_legal_move(&self.position, color, filter) {
            return;
        }

        if self.in_check {
            self.phase = GamePhase::CheckMate;
            self.winner = Some(color.opposite());
        } else {
            self.phase = GamePhase::StaleMate;
            self.winner = None;
        }
        self.clock.stop();
    }
}
