//! Observable engine state

use ndarray::Array3;
use serde_json::{Map, Value};

/// Status fields reported by an engine, keyed by name.
///
/// `gold` is the only field the adapter depends on; everything else is
/// engine-defined.
pub type Status = Map<String, Value>;

/// Screen dimensions as `(height, width)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenSize {
    pub height: usize,
    pub width: usize,
}

impl ScreenSize {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl From<ScreenSize> for (usize, usize) {
    fn from(size: ScreenSize) -> Self {
        (size.height, size.width)
    }
}

/// The atomic four-field state tuple returned by [`Engine::prev`](crate::Engine::prev)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Dungeon view, one byte row per display row
    pub screen: Vec<Vec<u8>>,
    pub status: Status,
    /// Human-readable status line
    pub status_text: String,
    /// Machine-consumable encoding of the dungeon, `(channel, row, column)`
    pub feature_map: Array3<f32>,
}

impl Snapshot {
    /// Integer status field, if present
    pub fn status_int(&self, key: &str) -> Option<i64> {
        self.status.get(key).and_then(Value::as_i64)
    }

    /// Boolean status field; absent fields read as `false`
    pub fn status_flag(&self, key: &str) -> bool {
        self.status.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}
