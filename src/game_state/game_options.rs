//! Game creation options: starting clock and rule mode.
//!
//! Options can be built directly, from the presets, or adjusted by name the
//! way a protocol front-end forwards `option NAME=VALUE` commands.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::DEFAULT_CLOCK_MS;

/// Which legality rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleMode {
    /// Moves that leave the mover's king attacked are filtered out.
    #[default]
    Standard,
    /// Self-check is allowed; capturing a king ends the game.
    Relaxed,
}

impl FromStr for RuleMode {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleMode::Standard),
            "relaxed" | "blitz" => Ok(RuleMode::Relaxed),
            _ => Err(ChessErrors::InvalidOption {
                name: "rules".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMode::Standard => write!(f, "standard"),
            RuleMode::Relaxed => write!(f, "relaxed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub initial_clock_ms: u64,
    pub rule_mode: RuleMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_clock_ms: DEFAULT_CLOCK_MS,
            rule_mode: RuleMode::Standard,
        }
    }
}

impl GameOptions {
    pub fn standard(minutes: u64) -> Self {
        Self {
            initial_clock_ms: minutes.saturating_mul(60_000),
            rule_mode: RuleMode::Standard,
        }
    }

    pub fn blitz_relaxed(minutes: u64) -> Self {
        Self {
            initial_clock_ms: minutes.saturating_mul(60_000),
            rule_mode: RuleMode::Relaxed,
        }
    }

    #[inline]
    pub fn is_relaxed(&self) -> bool {
        self.rule_mode == RuleMode::Relaxed
    }

    /// Set one option by name. Recognized names: `clock_ms`, `clock_minutes`
    /// and `rules`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        let clock_ms = match name.trim().to_ascii_lowercase().as_str() {
            "clock_ms" => value.trim().parse::<u64>().map_err(|_| invalid())?,
            "clock_minutes" => value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid())?
                .saturating_mul(60_000),
            "rules" => {
                self.rule_mode = value.parse::<RuleMode>().map_err(|_| invalid())?;
                return Ok(());
            }
            _ => return Err(invalid()),
        };

        // A zero clock would end the game on the first observation.
        if clock_ms == 0 {
            return Err(invalid());
        }
        self.initial_clock_ms = clock_ms;
        Ok(())
    }
}
