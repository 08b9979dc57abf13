use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use rg_core::{Engine, Tile};
use rg_dungeon::{Coord, DungeonConfig, DungeonEngine, GameRng, Level};

/// Cells reachable from the start by walking over passable cells
fn reachable(level: &Level) -> HashSet<Coord> {
    let mut seen = HashSet::from([level.start]);
    let mut queue = VecDeque::from([level.start]);
    while let Some(cd) = queue.pop_front() {
        for next in cd.neighbors() {
            let passable = level.field.get(next).is_some_and(|c| c.is_passable());
            if passable && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn maze_is_connected(seed in any::<u64>(), width in 5usize..60, height in 5usize..30) {
        let config = DungeonConfig { width, height, gold_piles: 3, traps: 1, ..Default::default() };
        let level = Level::generate(&config, 1, &mut GameRng::new(seed)).unwrap();
        let reachable = reachable(&level);

        for tile in [Tile::Passage, Tile::Stair, Tile::Trap] {
            for cd in level.field.coords_of(tile) {
                prop_assert!(reachable.contains(&cd), "{:?} at {:?} unreachable", tile, cd);
            }
        }
        for cd in level.items.keys() {
            prop_assert!(reachable.contains(cd));
        }
    }

    #[test]
    fn screen_matches_screen_size(seed in any::<u64>(), width in 5usize..60, height in 5usize..30) {
        let payload = format!(r#"{{"width": {width}, "height": {height}}}"#);
        let engine = DungeonEngine::build(Some(seed), Some(&payload)).unwrap();
        let size = engine.screen_size();
        let snapshot = engine.prev().unwrap();

        prop_assert_eq!((size.height, size.width), (height, width));
        prop_assert_eq!(snapshot.screen.len(), height);
        prop_assert!(snapshot.screen.iter().all(|row| row.len() == width));
        prop_assert_eq!(snapshot.feature_map.dim(), (Tile::CHANNELS, height, width));
    }
}

#[test]
fn hidden_dungeon_reveals_around_player() {
    let engine = DungeonEngine::build(Some(4), Some(r#"{"width": 21, "height": 11}"#)).unwrap();
    let snapshot = engine.prev().unwrap();
    let drawn = snapshot
        .screen
        .iter()
        .flatten()
        .filter(|b| **b != b' ')
        .count();

    // the player plus at most eight neighbours
    assert!((1..=9).contains(&drawn), "{drawn} cells drawn");
}

#[test]
fn seed_from_config_used_when_not_given() {
    let a = DungeonEngine::build(None, Some(r#"{"seed": 17, "hide_dungeon": false}"#)).unwrap();
    let b = DungeonEngine::build(Some(17), Some(r#"{"hide_dungeon": false}"#)).unwrap();
    assert_eq!(a.prev().unwrap(), b.prev().unwrap());
}

#[test]
fn different_seeds_different_levels() {
    let payload = Some(r#"{"hide_dungeon": false}"#);
    let a = DungeonEngine::build(Some(1), payload).unwrap();
    let b = DungeonEngine::build(Some(2), payload).unwrap();
    assert_ne!(a.prev().unwrap().screen, b.prev().unwrap().screen);
}
