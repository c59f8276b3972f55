//! Per-scene state: created at start-up, mutated only by its own frame tick
//! and its own event listeners.

pub mod showcase;
pub mod snow;

pub use showcase::ShowcaseScene;
pub use snow::SnowScene;
