//! Game session: the single owner of the engine
//!
//! Every engine side effect goes through here. The engine is held by value
//! and never cloned or shared.

use rg_core::{Engine, KeyCode, ScreenSize, Snapshot};

use crate::error::{EnvError, Result};

#[derive(Debug)]
pub struct GameSession<E: Engine> {
    engine: E,
    size: ScreenSize,
    /// Seed consumed by the next `reset`
    pending_seed: Option<u64>,
}

impl<E: Engine> GameSession<E> {
    /// Build the engine from an optional seed and configuration payload.
    pub fn new(seed: Option<u64>, config: Option<&str>) -> Result<Self> {
        let engine = E::build(seed, config).map_err(EnvError::EngineInit)?;
        Ok(Self::from_engine(engine))
    }

    /// Take ownership of an already built engine.
    pub fn from_engine(engine: E) -> Self {
        let size = engine.screen_size();
        Self {
            engine,
            size,
            pending_seed: None,
        }
    }

    /// Start a new episode, applying any pending seed first.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(seed) = self.pending_seed.take() {
            self.engine.set_seed(seed).map_err(EnvError::EngineFatal)?;
        }
        self.engine.reset().map_err(EnvError::EngineFatal)?;
        self.size = self.engine.screen_size();
        Ok(())
    }

    pub fn react(&mut self, key: KeyCode) -> Result<()> {
        self.engine.react(key).map_err(EnvError::EngineFatal)
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.engine.prev().map_err(EnvError::EngineFatal)
    }

    /// Record a seed for the next `reset`. The running episode is unaffected.
    pub fn set_seed(&mut self, seed: u64) {
        self.pending_seed = Some(seed);
    }

    pub fn pending_seed(&self) -> Option<u64> {
        self.pending_seed
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.size
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
