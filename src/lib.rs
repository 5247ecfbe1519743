//! Property-based test fixtures for Cookie Factory game state.
//!
//! [`generators::game_state_arbitrary`] is the entry point: a proptest
//! strategy yielding `GameState` values with every field inside the game's
//! ranges. [`sampler::FixtureSampler`] draws from it with an explicit seed,
//! and [`corpus::Corpus`] exports a reproducible batch as JSON.

pub mod bounds;
pub mod corpus;
pub mod error;
pub mod generators;
pub mod sampler;
pub mod state;

pub use bounds::{FieldBounds, FixtureBounds, FixtureConfig};
pub use corpus::Corpus;
pub use error::{FixtureError, Result};
pub use generators::{consistent_game_state_arbitrary, game_state_arbitrary, game_state_within};
pub use sampler::FixtureSampler;
pub use state::{create_game_state, BuildingKind, GameState};
