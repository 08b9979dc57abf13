//! Maze digging
//!
//! Depth-first walk over odd coordinates: each step carves two cells in a
//! random cardinal direction, backtracking when no undug neighbour is left.

use std::collections::HashSet;

use crate::field::{Coord, Direction};
use crate::rng::GameRng;

/// Inclusive rectangle the maze is dug in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeRange {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl MazeRange {
    pub fn contains(&self, cd: Coord) -> bool {
        cd.x >= self.left && cd.x <= self.right && cd.y >= self.top && cd.y <= self.bottom
    }

    pub fn upper_left(&self) -> Coord {
        Coord::new(self.left, self.top)
    }
}

/// Dig a maze inside `range`, calling `register` once for every carved coordinate.
pub fn dig_maze<F>(range: MazeRange, rng: &mut GameRng, mut register: F)
where
    F: FnMut(Coord),
{
    let start = range.upper_left();
    let mut used = HashSet::new();
    used.insert(start);
    register(start);

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let candidates: Vec<Direction> = Direction::cardinal()
            .filter(|dir| {
                let next = current.step(*dir, 2);
                range.contains(next) && !used.contains(&next)
            })
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let dir = candidates[rng.index(candidates.len())];
        for cd in [current.step(dir, 1), current.step(dir, 2)] {
            if used.insert(cd) {
                register(cd);
            }
        }
        stack.push(current.step(dir, 2));
    }
}
