//! Move sources that play one side of a game.
//!
//! A source only proposes moves; every proposal still goes through
//! `Game::commit`, so an external engine process can later sit behind the
//! same trait without any special handling in the rule engine.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game::Game;
use crate::utils::long_algebraic::CoordinateMove;

pub trait MoveSource: Send {
    fn name(&self) -> &str;

    /// Called whenever the session starts a fresh game.
    fn new_game(&mut self) {}

    /// Propose a move for the side to move, `None` when there is nothing to play.
    fn choose_move(&mut self, game: &Game) -> Option<CoordinateMove>;
}

/// Picks uniformly among the moves the game currently allows.
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoveSource {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &Game) -> Option<CoordinateMove> {
        if !game.is_active() {
            return None;
        }
        game.legal_move_list().choose(&mut self.rng).copied()
    }
}
