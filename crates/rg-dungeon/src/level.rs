//! A single dungeon level: terrain, items and the player's arrival point

use std::collections::HashMap;

use rg_core::{EngineError, EngineResult, Tile};

use crate::config::DungeonConfig;
use crate::field::{CellAttr, Coord, Field};
use crate::maze::{MazeRange, dig_maze};
use crate::rng::GameRng;

/// Something lying on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Gold(u32),
    /// Decorative object; drawn but never picked up
    Other(Tile),
}

impl Item {
    pub fn tile(&self) -> Tile {
        match self {
            Item::Gold(_) => Tile::Gold,
            Item::Other(tile) => *tile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub depth: u32,
    pub field: Field,
    pub items: HashMap<Coord, Item>,
    pub start: Coord,
}

impl Level {
    /// Build the level for `depth`, either from the configured layout or as a maze.
    pub fn generate(config: &DungeonConfig, depth: u32, rng: &mut GameRng) -> EngineResult<Level> {
        let mut level = match &config.layout {
            Some(rows) => Self::from_layout(rows, config, depth, rng)?,
            None => Self::maze(config, depth, rng)?,
        };
        if !config.hide_dungeon {
            level.field.reveal_all();
        }
        Ok(level)
    }

    fn from_layout(
        rows: &[String],
        config: &DungeonConfig,
        depth: u32,
        rng: &mut GameRng,
    ) -> EngineResult<Level> {
        let (height, width) = config.dimensions();
        let mut field = Field::new(width, height);
        let mut items = HashMap::new();
        let mut start = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cd = Coord::new(x as i32, y as i32);
                let tile = u8::try_from(ch)
                    .ok()
                    .and_then(Tile::from_byte)
                    .ok_or_else(|| {
                        EngineError::InvalidConfig(format!("unknown glyph {ch:?} in layout at {x},{y}"))
                    })?;
                let surface = match tile {
                    Tile::Player => {
                        if start.replace(cd).is_some() {
                            return Err(EngineError::InvalidConfig(
                                "layout places the player more than once".into(),
                            ));
                        }
                        Tile::Floor
                    }
                    Tile::Gold => {
                        items.insert(cd, Item::Gold(gold_amount(config, depth, rng)));
                        Tile::Floor
                    }
                    t if t.is_item() => {
                        items.insert(cd, Item::Other(t));
                        Tile::Floor
                    }
                    t => t,
                };
                if let Some(cell) = field.get_mut(cd) {
                    cell.surface = surface;
                }
            }
        }

        let start = start
            .ok_or_else(|| EngineError::InvalidConfig("layout has no player start '@'".into()))?;
        Ok(Level {
            depth,
            field,
            items,
            start,
        })
    }

    fn maze(config: &DungeonConfig, depth: u32, rng: &mut GameRng) -> EngineResult<Level> {
        let mut field = Field::new(config.width, config.height);
        // junctions sit on odd coordinates so the outer ring stays rock
        let range = MazeRange {
            left: 1,
            top: 1,
            right: ((config.width as i32 - 2) - 1) | 1,
            bottom: ((config.height as i32 - 2) - 1) | 1,
        };
        dig_maze(range, rng, |cd| {
            if let Some(cell) = field.get_mut(cd) {
                cell.surface = Tile::Passage;
            }
        });

        let mut free = field.coords_of(Tile::Passage);
        let mut take = |rng: &mut GameRng| -> Option<Coord> {
            (!free.is_empty()).then(|| free.swap_remove(rng.index(free.len())))
        };

        let start = take(rng).ok_or_else(|| EngineError::Fatal("maze has no passages".into()))?;
        if let Some(cd) = take(rng) {
            set_surface(&mut field, cd, Tile::Stair);
        }

        let mut items = HashMap::new();
        for _ in 0..config.gold_piles {
            let Some(cd) = take(rng) else { break };
            items.insert(cd, Item::Gold(gold_amount(config, depth, rng)));
        }
        for _ in 0..config.traps {
            let Some(cd) = take(rng) else { break };
            set_surface(&mut field, cd, Tile::Trap);
        }
        if config.hidden_rate > 0 {
            for cd in take_all(&mut free) {
                if rng.one_in(config.hidden_rate) {
                    if let Some(cell) = field.get_mut(cd) {
                        cell.attr.insert(CellAttr::HIDDEN);
                    }
                }
            }
        }

        Ok(Level {
            depth,
            field,
            items,
            start,
        })
    }

    /// Glyph shown at `cd`, ignoring the player
    pub fn tile_at(&self, cd: Coord) -> Tile {
        match self.field.get(cd) {
            Some(cell) if cell.is_drawn() => self
                .items
                .get(&cd)
                .map(Item::tile)
                .unwrap_or(cell.surface),
            _ => Tile::None,
        }
    }
}

fn set_surface(field: &mut Field, cd: Coord, surface: Tile) {
    if let Some(cell) = field.get_mut(cd) {
        cell.surface = surface;
    }
}

fn take_all(free: &mut Vec<Coord>) -> Vec<Coord> {
    let mut all = std::mem::take(free);
    all.sort_by_key(|cd| (cd.y, cd.x));
    all
}

fn gold_amount(config: &DungeonConfig, depth: u32, rng: &mut GameRng) -> u32 {
    config
        .gold_amount
        .unwrap_or_else(|| rng.rnd(50 + 10 * depth) + 2)
}
