//! rg-env: reinforcement-learning environment over a turn-based dungeon engine
//!
//! The adapter sits between a stateful engine and a pull-based training loop:
//!
//! - `action`: numeric and symbolic actions decoded to native key codes
//! - `session`: sole owner of the engine handle, deferred seeding
//! - `result`: cached snapshot, the only state read between engine calls
//! - `env`: the `reset`/`step` protocol and gold-delta reward
//! - `config`: configuration sources turned into the engine payload
//!
//! ```no_run
//! use rg_env::{ConfigSource, RogueEnv};
//!
//! let mut env = RogueEnv::new(Some(42), ConfigSource::Default)?;
//! let outcome = env.step("hh>")?;
//! println!("{}\nreward: {}", outcome.result, outcome.reward);
//! # Ok::<(), rg_env::EnvError>(())
//! ```

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod result;
pub mod session;

pub use action::{ACTION_COUNT, ACTION_KEYS, Action, ActionMeaning, action_meanings, decode};
pub use config::ConfigSource;
pub use env::{EpisodePhase, RogueEnv, StepOutcome};
pub use error::{ConfigError, EnvError, Result};
pub use result::RogueResult;
pub use session::GameSession;

pub use rg_core::{Engine, EngineError, KeyCode, SYMBOLS, ScreenSize, Snapshot, Status, Tile};
