//! Engine configuration payload

use rg_core::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 256;

/// Configuration accepted by [`DungeonEngine`](crate::DungeonEngine), as JSON.
///
/// Every field is optional in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DungeonConfig {
    pub width: usize,
    pub height: usize,
    /// Used when no seed is given at construction
    pub seed: Option<u64>,
    /// Only draw cells the player has been next to
    pub hide_dungeon: bool,
    pub gold_piles: usize,
    /// Fixed pile size; random per level when unset
    pub gold_amount: Option<u32>,
    pub traps: usize,
    pub trap_damage: i32,
    pub max_hp: i32,
    /// Descending below this level ends the game
    pub max_depth: Option<u32>,
    /// 1-in-N passage cells start hidden; 0 disables
    pub hidden_rate: u32,
    /// Fixed level drawn with symbol-table glyphs. Overrides `width`/`height`.
    pub layout: Option<Vec<String>>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            seed: None,
            hide_dungeon: true,
            gold_piles: 4,
            gold_amount: None,
            traps: 0,
            trap_damage: 3,
            max_hp: 12,
            max_depth: None,
            hidden_rate: 0,
            layout: None,
        }
    }
}

impl DungeonConfig {
    /// Parse and validate a payload. `None` yields the defaults.
    pub fn from_payload(payload: Option<&str>) -> EngineResult<Self> {
        let config = match payload {
            Some(text) => serde_json::from_str(text)
                .map_err(|e| EngineError::InvalidConfig(e.to_string()))?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Screen size as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        match &self.layout {
            Some(rows) => (
                rows.len(),
                rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
            ),
            None => (self.height, self.width),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        let (height, width) = self.dimensions();
        if self.layout.is_none() {
            for (name, value) in [("width", width), ("height", height)] {
                if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
                    return Err(EngineError::InvalidConfig(format!(
                        "{name} must be between {MIN_SIZE} and {MAX_SIZE}, got {value}"
                    )));
                }
            }
        } else if height == 0 || width == 0 || height > MAX_SIZE || width > MAX_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "layout must be between 1x1 and {MAX_SIZE}x{MAX_SIZE}, got {height}x{width}"
            )));
        }
        if self.max_hp <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "max_hp must be positive, got {}",
                self.max_hp
            )));
        }
        if self.trap_damage < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "trap_damage must not be negative, got {}",
                self.trap_damage
            )));
        }
        if self.max_depth == Some(0) {
            return Err(EngineError::InvalidConfig("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}
