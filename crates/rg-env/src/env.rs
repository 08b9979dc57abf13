//! The environment adapter
//!
//! [`RogueEnv`] composes the action translator, the game session and the
//! result cache into the `reset`/`step` protocol:
//!
//! 1. read gold from the cache
//! 2. decode the action (nothing has touched the engine yet)
//! 3. apply each key in order, without rollback on failure
//! 4. refresh the cache from the engine
//! 5. reward is the gold delta

use ndarray::Array3;
use rg_core::{Engine, EngineError, ScreenSize, Status};
use rg_dungeon::DungeonEngine;

use crate::action::{self, Action};
use crate::config::ConfigSource;
use crate::error::{EnvError, Result};
use crate::result::RogueResult;
use crate::session::GameSession;

/// Where the episode stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodePhase {
    /// Constructed or reset; no step taken yet
    #[default]
    Ready,
    /// At least one step taken since the last reset
    Stepping,
}

/// What one `step` produced
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome<'a> {
    pub feature_map: &'a Array3<f32>,
    /// Gold gained (negative when gold was lost)
    pub reward: i64,
    pub done: bool,
    pub result: &'a RogueResult,
}

#[derive(Debug)]
pub struct RogueEnv<E: Engine = DungeonEngine> {
    session: GameSession<E>,
    result: RogueResult,
    phase: EpisodePhase,
    steps: u64,
}

impl RogueEnv<DungeonEngine> {
    /// Environment over the built-in dungeon engine
    pub fn new(seed: Option<u64>, source: ConfigSource) -> Result<Self> {
        Self::with_source(seed, source)
    }
}

impl<E: Engine> RogueEnv<E> {
    pub fn with_source(seed: Option<u64>, source: ConfigSource) -> Result<Self> {
        let payload = source.into_payload()?;
        Self::with_payload(seed, payload.as_deref())
    }

    pub fn with_payload(seed: Option<u64>, payload: Option<&str>) -> Result<Self> {
        Self::from_session(GameSession::new(seed, payload)?)
    }

    /// Wrap a session, populating the cache before returning.
    pub fn from_session(session: GameSession<E>) -> Result<Self> {
        let mut result = RogueResult::default();
        result.refresh(&session)?;
        let size = session.screen_size();
        tracing::info!(
            height = size.height,
            width = size.width,
            "environment ready"
        );
        Ok(Self {
            session,
            result,
            phase: EpisodePhase::Ready,
            steps: 0,
        })
    }

    /// Start a new episode. A seed set with [`seed`](Self::seed) takes effect here.
    pub fn reset(&mut self) -> Result<()> {
        self.session.reset()?;
        self.result.refresh(&self.session)?;
        self.phase = EpisodePhase::Ready;
        self.steps = 0;
        tracing::debug!("episode reset");
        Ok(())
    }

    /// Apply an action and report the resulting observation and reward.
    pub fn step(&mut self, action: impl Into<Action>) -> Result<StepOutcome<'_>> {
        let action = action.into();
        let gold_before = self.result.gold()?;
        let keys = action::decode(&action).inspect_err(|err| {
            tracing::warn!(?action, %err, "rejected action");
        })?;

        for key in &keys {
            self.session.react(*key)?;
        }
        self.result.refresh(&self.session)?;

        let gold_after = self.result.gold()?;
        let reward = gold_after.checked_sub(gold_before).ok_or_else(|| {
            EnvError::EngineFatal(EngineError::Fatal(format!(
                "gold moved from {gold_before} to {gold_after}, delta overflows"
            )))
        })?;
        let done = self.result.is_done();
        self.phase = EpisodePhase::Stepping;
        self.steps += 1;
        tracing::debug!(keys = keys.len(), reward, done, "step");

        Ok(StepOutcome {
            feature_map: self.result.feature_map(),
            reward,
            done,
            result: &self.result,
        })
    }

    /// Seed for the next episode. The running episode is unaffected.
    pub fn seed(&mut self, seed: u64) {
        self.session.set_seed(seed);
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.session.screen_size()
    }

    /// Cached screen rows followed by the status line
    pub fn render(&self) -> String {
        self.result.render()
    }

    pub fn get_screen(&self) -> &[Vec<u8>] {
        self.result.screen()
    }

    pub fn status(&self) -> &Status {
        self.result.status()
    }

    pub fn status_text(&self) -> &str {
        self.result.status_text()
    }

    pub fn feature_map(&self) -> &Array3<f32> {
        self.result.feature_map()
    }

    pub fn result(&self) -> &RogueResult {
        &self.result
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken since the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn session(&self) -> &GameSession<E> {
        &self.session
    }
}
