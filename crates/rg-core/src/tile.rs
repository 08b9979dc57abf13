//! Tile codes and their display glyphs.
//!
//! The ordering of [`Tile`] is the engine's tile-code enumeration and must stay
//! in lockstep with [`SYMBOLS`]. Index 0 is always the empty/unknown glyph.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Display glyph for each tile code, indexed by `Tile as usize`.
pub const SYMBOLS: [u8; Tile::COUNT] = [
    b' ', b'@', b'#', b'.', b'-', b'%', b'+', b'^', b'!', b'?', b']', b')', b'/', b'*', b':', b'=',
    b',',
];

/// Tile category drawn on the dungeon screen
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    None = 0,
    Player = 1,
    Passage = 2,
    Floor = 3,
    Wall = 4,
    Stair = 5,
    Door = 6,
    Trap = 7,
    Potion = 8,
    Scroll = 9,
    Armor = 10,
    Weapon = 11,
    Wand = 12,
    Gold = 13,
    Food = 14,
    Ring = 15,
    Amulet = 16,
}

impl Tile {
    /// Glyph used to draw this tile
    pub const fn byte(self) -> u8 {
        SYMBOLS[self as usize]
    }

    /// Interpret a screen byte. Unknown bytes yield `None`.
    pub fn from_byte(byte: u8) -> Option<Tile> {
        Tile::iter().find(|tile| tile.byte() == byte)
    }

    /// Tile for a code in the engine's enumeration
    pub fn from_code(code: usize) -> Option<Tile> {
        Tile::iter().nth(code)
    }

    /// Items lying on the floor
    pub const fn is_item(self) -> bool {
        (self as u8) >= Tile::Potion as u8
    }

    /// Feature-map channel for this tile; the empty tile has none.
    pub const fn channel(self) -> Option<usize> {
        match self {
            Tile::None => None,
            t => Some(t as usize - 1),
        }
    }

    /// Number of feature-map channels
    pub const CHANNELS: usize = Tile::COUNT - 1;
}
