//! Cached engine state
//!
//! [`RogueResult`] holds the most recent snapshot. It is only written by
//! [`RogueResult::refresh`], which swaps in a complete snapshot, so readers
//! never observe a mix of old and new fields.

use std::fmt;

use ndarray::Array3;
use rg_core::{Engine, Snapshot, Status, Tile};

use crate::error::{EnvError, Result};
use crate::session::GameSession;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RogueResult {
    snapshot: Snapshot,
}

impl RogueResult {
    /// Fetch the session's current snapshot and replace the cache with it.
    ///
    /// On failure the previous snapshot is kept untouched.
    pub fn refresh<E: Engine>(&mut self, session: &GameSession<E>) -> Result<()> {
        self.snapshot = session.snapshot()?;
        Ok(())
    }

    pub fn screen(&self) -> &[Vec<u8>] {
        &self.snapshot.screen
    }

    pub fn status(&self) -> &Status {
        &self.snapshot.status
    }

    pub fn status_text(&self) -> &str {
        &self.snapshot.status_text
    }

    pub fn feature_map(&self) -> &Array3<f32> {
        &self.snapshot.feature_map
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Gold counter. An engine that omits it breaks the adapter contract.
    pub fn gold(&self) -> Result<i64> {
        self.snapshot
            .status_int("gold")
            .ok_or(EnvError::MissingStatusField("gold"))
    }

    /// Whether the engine reports the episode as finished
    pub fn is_done(&self) -> bool {
        self.snapshot.status_flag("game_over")
    }

    /// Screen interpreted through the symbol table; unknown glyphs read as `None`
    pub fn tiles(&self) -> Vec<Vec<Tile>> {
        self.screen()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| Tile::from_byte(*b).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// `(row, column)` of the player glyph
    pub fn player_position(&self) -> Option<(usize, usize)> {
        let glyph = Tile::Player.byte();
        self.screen().iter().enumerate().find_map(|(y, row)| {
            row.iter().position(|b| *b == glyph).map(|x| (y, x))
        })
    }

    /// Screen rows followed by the status line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RogueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.screen() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        write!(f, "{}", self.status_text())
    }
}
