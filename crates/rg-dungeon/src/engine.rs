//! Turn resolution and snapshot production

use ndarray::Array3;
use rg_core::{Engine, EngineResult, KeyCode, ScreenSize, Snapshot, Status, Tile};
use serde_json::json;

use crate::config::DungeonConfig;
use crate::field::{CellAttr, Coord, Direction};
use crate::level::{Item, Level};
use crate::rng::GameRng;

/// Player state for the running episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: Coord,
    pub hp: i32,
    pub max_hp: i32,
    pub gold: u64,
}

/// In-process reference engine.
///
/// `reset` always regenerates from `seed`, so the same seed replays the same
/// episode. `set_seed` only changes what the next `reset` uses.
#[derive(Debug, Clone)]
pub struct DungeonEngine {
    config: DungeonConfig,
    seed: u64,
    rng: GameRng,
    level: Level,
    player: Player,
    turns: u64,
    dead: bool,
    game_over: bool,
    message: String,
}

impl DungeonEngine {
    pub fn new(seed: Option<u64>, config: DungeonConfig) -> EngineResult<Self> {
        config.validate()?;
        let seed = seed.or(config.seed).unwrap_or_else(rand::random);
        let mut rng = GameRng::new(seed);
        let level = Level::generate(&config, 1, &mut rng)?;
        let mut engine = Self {
            player: Player {
                pos: level.start,
                hp: config.max_hp,
                max_hp: config.max_hp,
                gold: 0,
            },
            config,
            seed,
            rng,
            level,
            turns: 0,
            dead: false,
            game_over: false,
            message: String::new(),
        };
        engine.look_around();
        tracing::debug!(seed, "dungeon engine ready");
        Ok(engine)
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Seed the next `reset` will use
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn try_move(&mut self, dir: Direction) {
        let target = self.player.pos.step(dir, 1);
        let passable = self
            .level
            .field
            .get(target)
            .is_some_and(|cell| cell.is_passable());
        if !passable {
            self.message.clear();
            return;
        }

        self.player.pos = target;
        self.turns += 1;
        self.message.clear();

        if let Some(Item::Gold(amount)) = self.level.items.get(&target).copied() {
            self.level.items.remove(&target);
            self.player.gold += u64::from(amount);
            self.message = format!("you found {amount} gold pieces");
        }

        let on_trap = self
            .level
            .field
            .get(target)
            .is_some_and(|cell| cell.surface == Tile::Trap);
        if on_trap {
            self.player.hp -= self.config.trap_damage;
            self.message = format!("a trap hits you for {}", self.config.trap_damage);
            if self.player.hp <= 0 {
                self.player.hp = 0;
                self.dead = true;
                self.game_over = true;
                self.message = "you were killed by a trap".into();
            }
        }

        self.look_around();
    }

    fn descend(&mut self) -> EngineResult<()> {
        let on_stairs = self
            .level
            .field
            .get(self.player.pos)
            .is_some_and(|cell| cell.surface == Tile::Stair);
        if !on_stairs {
            self.message = "there is no staircase here".into();
            return Ok(());
        }

        self.turns += 1;
        let depth = self.level.depth + 1;
        if self.config.max_depth.is_some_and(|max| depth > max) {
            self.game_over = true;
            self.message = "you escaped the dungeon".into();
            return Ok(());
        }

        self.level = Level::generate(&self.config, depth, &mut self.rng)?;
        self.player.pos = self.level.start;
        self.message = format!("welcome to level {depth}");
        self.look_around();
        Ok(())
    }

    fn search(&mut self) {
        self.turns += 1;
        let mut found = false;
        for cd in self.player.pos.neighbors() {
            if let Some(cell) = self.level.field.get_mut(cd) {
                if cell.is_hidden() {
                    cell.attr.remove(CellAttr::HIDDEN);
                    found = true;
                }
            }
        }
        self.message = if found {
            "you found a hidden passage".into()
        } else {
            String::new()
        };
        self.look_around();
    }

    /// Mark the player's cell and its neighbours as seen
    fn look_around(&mut self) {
        let pos = self.player.pos;
        for cd in std::iter::once(pos).chain(pos.neighbors()) {
            if let Some(cell) = self.level.field.get_mut(cd) {
                cell.attr.insert(CellAttr::SEEN);
            }
        }
    }

    fn tile_at(&self, cd: Coord) -> Tile {
        if cd == self.player.pos {
            Tile::Player
        } else {
            self.level.tile_at(cd)
        }
    }

    fn screen(&self) -> Vec<Vec<u8>> {
        let (width, height) = (self.level.field.width(), self.level.field.height());
        (0..height as i32)
            .map(|y| {
                (0..width as i32)
                    .map(|x| self.tile_at(Coord::new(x, y)).byte())
                    .collect()
            })
            .collect()
    }

    fn feature_map(&self) -> Array3<f32> {
        let (width, height) = (self.level.field.width(), self.level.field.height());
        let mut map = Array3::zeros((Tile::CHANNELS, height, width));
        for cd in self.level.field.coords() {
            if let Some(channel) = self.tile_at(cd).channel() {
                map[[channel, cd.y as usize, cd.x as usize]] = 1.0;
            }
        }
        map
    }

    fn status(&self) -> Status {
        let value = json!({
            "level": self.level.depth,
            "gold": self.player.gold,
            "hp": self.player.hp,
            "max_hp": self.player.max_hp,
            "turns": self.turns,
            "dead": self.dead,
            "game_over": self.game_over,
        });
        match value {
            serde_json::Value::Object(map) => map,
            _ => Status::new(),
        }
    }

    fn status_text(&self) -> String {
        format!(
            "Level:{:>2}  Gold:{:<6} Hp:{:>2}({:>2})  Turns:{}",
            self.level.depth, self.player.gold, self.player.hp, self.player.max_hp, self.turns
        )
    }
}

impl Engine for DungeonEngine {
    fn build(seed: Option<u64>, config: Option<&str>) -> EngineResult<Self> {
        Self::new(seed, DungeonConfig::from_payload(config)?)
    }

    fn reset(&mut self) -> EngineResult<()> {
        self.rng = GameRng::new(self.seed);
        self.level = Level::generate(&self.config, 1, &mut self.rng)?;
        self.player = Player {
            pos: self.level.start,
            hp: self.config.max_hp,
            max_hp: self.config.max_hp,
            gold: 0,
        };
        self.turns = 0;
        self.dead = false;
        self.game_over = false;
        self.message.clear();
        self.look_around();
        Ok(())
    }

    fn react(&mut self, key: KeyCode) -> EngineResult<()> {
        if self.game_over {
            return Ok(());
        }
        match char::from_u32(key) {
            Some('>') => self.descend()?,
            Some('s') => self.search(),
            Some(ch) => match Direction::from_key(ch) {
                Some(dir) => self.try_move(dir),
                None => tracing::trace!(key, "ignoring unknown key"),
            },
            None => tracing::trace!(key, "ignoring invalid key code"),
        }
        Ok(())
    }

    fn prev(&self) -> EngineResult<Snapshot> {
        Ok(Snapshot {
            screen: self.screen(),
            status: self.status(),
            status_text: self.status_text(),
            feature_map: self.feature_map(),
        })
    }

    fn screen_size(&self) -> ScreenSize {
        let (height, width) = self.config.dimensions();
        ScreenSize::new(height, width)
    }

    fn set_seed(&mut self, seed: u64) -> EngineResult<()> {
        self.seed = seed;
        Ok(())
    }
}
