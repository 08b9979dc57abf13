//! rg-core: shared vocabulary between simulation engines and the environment adapter
//!
//! This crate contains no game rules and no I/O. It defines:
//!
//! - [`Engine`]: the capability every dungeon simulation must provide
//! - [`Snapshot`]: the atomic four-field state an engine reports
//! - [`tile`]: the display symbol table shared by engines and the adapter
//! - [`EngineError`]: the failures an engine may surface

pub mod error;
pub mod snapshot;
pub mod tile;

pub use error::{EngineError, EngineResult};
pub use snapshot::{ScreenSize, Snapshot, Status};
pub use tile::{SYMBOLS, Tile};

/// Native key code understood by an engine: the character code of a primitive key.
pub type KeyCode = u32;

/// Trait for turn-based dungeon simulations driven by the environment adapter.
///
/// Implementations own all game rules, generation and randomness. The adapter
/// only relies on the operations below and on the shape of [`Snapshot`].
pub trait Engine {
    /// Create an engine from an optional seed and an opaque configuration payload.
    ///
    /// A malformed payload must be reported as [`EngineError::InvalidConfig`].
    fn build(seed: Option<u64>, config: Option<&str>) -> EngineResult<Self>
    where
        Self: Sized;

    /// Discard the running episode and regenerate from the current seed.
    fn reset(&mut self) -> EngineResult<()>;

    /// Apply one primitive input.
    fn react(&mut self, key: KeyCode) -> EngineResult<()>;

    /// Current observable state, reflecting every `reset`/`react` so far.
    fn prev(&self) -> EngineResult<Snapshot>;

    /// Screen dimensions as `(height, width)`.
    fn screen_size(&self) -> ScreenSize;

    /// Seed used by the next `reset`. Must not affect the running episode.
    fn set_seed(&mut self, seed: u64) -> EngineResult<()>;
}
