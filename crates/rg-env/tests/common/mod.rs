//! Scripted engine for driving the adapter without the dungeon engine.

#![allow(dead_code)]

use ndarray::Array3;
use rg_core::{Engine, EngineError, EngineResult, KeyCode, ScreenSize, Snapshot, Status};
use serde_json::json;

/// Behaviour knobs, read from the JSON payload
#[derive(Debug, Clone, Default)]
pub struct Script {
    /// Fail the n-th `react` call (1-based)
    pub fail_on_react: Option<usize>,
    /// Leave `gold` out of the status
    pub omit_gold: bool,
    /// Fail every `reset` call
    pub fail_on_reset: bool,
    /// Gold reported before the first key
    pub initial_gold: i64,
    /// Gold jumps to this value after any key
    pub gold_after_react: Option<i64>,
}

/// Engine whose state is the list of keys applied so far.
///
/// `$` adds 10 gold, `-` loses 5, every other key is just recorded.
#[derive(Debug)]
pub struct ScriptedEngine {
    pub script: Script,
    pub seed: u64,
    pub applied: Vec<KeyCode>,
    pub gold: i64,
    pub reacts: usize,
    pub resets: usize,
    pub seeds_at_reset: Vec<u64>,
}

impl Engine for ScriptedEngine {
    fn build(seed: Option<u64>, config: Option<&str>) -> EngineResult<Self> {
        let mut script = Script::default();
        if let Some(text) = config {
            let value: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
            script.fail_on_react = value["fail_on_react"].as_u64().map(|n| n as usize);
            script.omit_gold = value["omit_gold"].as_bool().unwrap_or(false);
            script.fail_on_reset = value["fail_on_reset"].as_bool().unwrap_or(false);
            script.initial_gold = value["initial_gold"].as_i64().unwrap_or(0);
            script.gold_after_react = value["gold_after_react"].as_i64();
        }
        Ok(Self {
            gold: script.initial_gold,
            script,
            seed: seed.unwrap_or(0),
            applied: Vec::new(),
            reacts: 0,
            resets: 0,
            seeds_at_reset: Vec::new(),
        })
    }

    fn reset(&mut self) -> EngineResult<()> {
        if self.script.fail_on_reset {
            return Err(EngineError::Fatal("scripted reset failure".into()));
        }
        self.applied.clear();
        self.gold = self.script.initial_gold;
        self.resets += 1;
        self.seeds_at_reset.push(self.seed);
        Ok(())
    }

    fn react(&mut self, key: KeyCode) -> EngineResult<()> {
        self.reacts += 1;
        if self.script.fail_on_react == Some(self.reacts) {
            return Err(EngineError::Fatal(format!("scripted failure on react {}", self.reacts)));
        }
        self.applied.push(key);
        match char::from_u32(key) {
            Some('$') => self.gold += 10,
            Some('-') => self.gold -= 5,
            _ => {}
        }
        if let Some(gold) = self.script.gold_after_react {
            self.gold = gold;
        }
        Ok(())
    }

    fn prev(&self) -> EngineResult<Snapshot> {
        let keys: String = self.applied.iter().filter_map(|k| char::from_u32(*k)).collect();
        let mut status = Status::new();
        if !self.script.omit_gold {
            status.insert("gold".into(), json!(self.gold));
        }
        status.insert("keys".into(), json!(self.applied.len()));
        Ok(Snapshot {
            screen: vec![keys.clone().into_bytes()],
            status,
            status_text: format!("Gold:{} Keys:{}", self.gold, keys),
            feature_map: Array3::from_elem((1, 1, 1), self.applied.len() as f32),
        })
    }

    fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(1, 80)
    }

    fn set_seed(&mut self, seed: u64) -> EngineResult<()> {
        self.seed = seed;
        Ok(())
    }
}
