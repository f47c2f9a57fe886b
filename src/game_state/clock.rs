//! Per-side countdown clocks.
//!
//! The clock is cooperative: it only changes when observed through
//! `charge`, which subtracts the wall-clock time elapsed since the last
//! resumption from the running side. Remaining time never increases.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    remaining_ms: [u64; 2],
    started_at: Option<DateTime<Utc>>,
}

impl Clock {
    pub fn new(initial_ms: u64) -> Self {
        Self {
            remaining_ms: [initial_ms; 2],
            started_at: None,
        }
    }

    #[inline]
    pub fn remaining_ms(&self, color: Color) -> u64 {
        self.remaining_ms[color.index()]
    }

    #[inline]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Restart the running interval at `now`, never moving it backwards.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        self.started_at = Some(match self.started_at {
            Some(previous) if previous > now => previous,
            _ => now,
        });
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Charge `running` for the time elapsed since the last resumption and
    /// restart the interval at `now`. A `now` earlier than the resumption
    /// point charges nothing and keeps the later resumption point.
    /// Returns the color whose clock is at zero, if any.
    pub fn charge(&mut self, running: Color, now: DateTime<Utc>) -> Option<Color> {
        if let Some(started_at) = self.started_at {
            let elapsed_ms = (now - started_at).num_milliseconds();
            if elapsed_ms > 0 {
                let slot = &mut self.remaining_ms[running.index()];
                *slot = slot.saturating_sub(elapsed_ms as u64);
                self.started_at = Some(now);
            }
        }
        self.expired()
    }

    pub fn expired(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|color| self.remaining_ms(*color) == 0)
    }
}
