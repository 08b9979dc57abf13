//! rg-dungeon: a small in-process dungeon engine
//!
//! Implements [`rg_core::Engine`] with just enough rules to exercise the
//! environment adapter end to end:
//!
//! - `config`: JSON configuration payload
//! - `rng`: seeded RNG, one seed per episode
//! - `field`: grid cells and movement directions
//! - `maze`: depth-first maze digging
//! - `level`: level generation, either a maze or a fixed layout
//! - `engine`: turn resolution and snapshot production

pub mod config;
pub mod engine;
pub mod field;
pub mod level;
pub mod maze;
pub mod rng;

pub use config::DungeonConfig;
pub use engine::{DungeonEngine, Player};
pub use field::{Coord, Direction};
pub use level::{Item, Level};
pub use rng::GameRng;
