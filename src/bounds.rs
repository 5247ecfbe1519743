//! Per-field bounds for generated game states, plus the fixture config.
//!
//! Defaults match the ranges the game itself uses:
//! cookies in `0..=2_000_000_000`, owned buildings in `0..=200`,
//! free buildings in `0..=10`.

use std::ops::RangeInclusive;

use proptest::test_runner::{Config as ProptestConfig, RngAlgorithm};
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};
use crate::state::{GameState, FIELD_COUNT};

pub const MAX_COOKIES: u32 = 2_000_000_000;
pub const MAX_OWNED: u32 = 200;
pub const MAX_FREE: u32 = 10;

/// Cases per property when neither the config nor `PROPTEST_CASES` says otherwise.
pub const DEFAULT_CASES: u32 = 256;

/// Inclusive integer range for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: u32,
    pub max: u32,
}

impl FieldBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Both ends at `value`; the field always generates exactly `value`.
    pub const fn exact(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Intersection with `outer`. Inverted when the two ranges are disjoint.
    pub fn clamped_to(&self, outer: FieldBounds) -> Self {
        Self {
            min: self.min.max(outer.min),
            max: self.max.min(outer.max),
        }
    }

    /// Range strategy over the bounds. Shrinks toward `min`.
    pub fn strategy(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Bounds for every `GameState` field, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureBounds {
    pub cookies: FieldBounds,

    pub cursors: FieldBounds,
    pub grandmas: FieldBounds,
    pub farms: FieldBounds,
    pub mines: FieldBounds,
    pub factories: FieldBounds,
    pub banks: FieldBounds,

    pub free_cursors: FieldBounds,
    pub free_grandmas: FieldBounds,
    pub free_farms: FieldBounds,
    pub free_mines: FieldBounds,
    pub free_factories: FieldBounds,
    pub free_banks: FieldBounds,
}

impl Default for FixtureBounds {
    fn default() -> Self {
        let owned = FieldBounds::new(0, MAX_OWNED);
        let free = FieldBounds::new(0, MAX_FREE);
        Self {
            cookies: FieldBounds::new(0, MAX_COOKIES),
            cursors: owned,
            grandmas: owned,
            farms: owned,
            mines: owned,
            factories: owned,
            banks: owned,
            free_cursors: free,
            free_grandmas: free,
            free_farms: free,
            free_mines: free,
            free_factories: free,
            free_banks: free,
        }
    }
}

impl FixtureBounds {
    /// Pin every field to the matching value of `state`.
    pub fn pinned(state: &GameState) -> Self {
        Self {
            cookies: FieldBounds::exact(state.cookies),
            cursors: FieldBounds::exact(state.cursors),
            grandmas: FieldBounds::exact(state.grandmas),
            farms: FieldBounds::exact(state.farms),
            mines: FieldBounds::exact(state.mines),
            factories: FieldBounds::exact(state.factories),
            banks: FieldBounds::exact(state.banks),
            free_cursors: FieldBounds::exact(state.free_cursors),
            free_grandmas: FieldBounds::exact(state.free_grandmas),
            free_farms: FieldBounds::exact(state.free_farms),
            free_mines: FieldBounds::exact(state.free_mines),
            free_factories: FieldBounds::exact(state.free_factories),
            free_banks: FieldBounds::exact(state.free_banks),
        }
    }

    /// Bounds in `GameState::FIELD_NAMES` order.
    pub fn to_array(&self) -> [FieldBounds; FIELD_COUNT] {
        [
            self.cookies,
            self.cursors,
            self.grandmas,
            self.farms,
            self.mines,
            self.factories,
            self.banks,
            self.free_cursors,
            self.free_grandmas,
            self.free_farms,
            self.free_mines,
            self.free_factories,
            self.free_banks,
        ]
    }

    /// Lower bound of every field, as a state.
    pub fn min_state(&self) -> GameState {
        GameState::from_array(self.to_array().map(|b| b.min))
    }

    /// Upper bound of every field, as a state.
    pub fn max_state(&self) -> GameState {
        GameState::from_array(self.to_array().map(|b| b.max))
    }

    pub fn validate(&self) -> Result<()> {
        for (field, b) in GameState::FIELD_NAMES.into_iter().zip(self.to_array()) {
            if b.min > b.max {
                return Err(FixtureError::InvertedBounds {
                    field,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        Ok(())
    }

    /// First field of `state` outside its bounds, as `(name, value)`.
    pub fn first_violation(&self, state: &GameState) -> Option<(&'static str, u32)> {
        GameState::FIELD_NAMES
            .into_iter()
            .zip(self.to_array())
            .zip(state.to_array())
            .find(|((_, b), v)| !b.contains(*v))
            .map(|((name, _), v)| (name, v))
    }

    pub fn contains(&self, state: &GameState) -> bool {
        self.first_violation(state).is_none()
    }

    /// Narrow every field to its intersection with `outer`.
    pub fn clamped_to(&self, outer: &FixtureBounds) -> Self {
        let ranges = self.to_array();
        let outer = outer.to_array();
        let [
            cookies,
            cursors,
            grandmas,
            farms,
            mines,
            factories,
            banks,
            free_cursors,
            free_grandmas,
            free_farms,
            free_mines,
            free_factories,
            free_banks,
        ]: [FieldBounds; FIELD_COUNT] = std::array::from_fn(|i| ranges[i].clamped_to(outer[i]));
        Self {
            cookies,
            cursors,
            grandmas,
            farms,
            mines,
            factories,
            banks,
            free_cursors,
            free_grandmas,
            free_farms,
            free_mines,
            free_factories,
            free_banks,
        }
    }
}

/// Fixture generation settings, usually read from a TOML file.
///
/// ```toml
/// seed = 7
/// cases = 64
///
/// [bounds]
/// cookies = { min = 0, max = 1000000 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub seed: u64,
    pub cases: u32,
    pub bounds: FixtureBounds,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cases: DEFAULT_CASES,
            bounds: FixtureBounds::default(),
        }
    }
}

impl FixtureConfig {
    /// Parse and validate a TOML config. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FixtureConfig = toml::from_str(content)?;
        config.bounds.validate()?;
        tracing::debug!(
            seed = config.seed,
            cases = config.cases,
            "loaded fixture config"
        );
        Ok(config)
    }

    /// `ProptestConfig` for property tests over these fixtures.
    /// `PROPTEST_CASES` overrides `cases` when it parses.
    pub fn proptest_config(&self) -> ProptestConfig {
        let cases = cases_from(std::env::var("PROPTEST_CASES").ok(), self.cases);
        ProptestConfig {
            cases,
            rng_algorithm: RngAlgorithm::ChaCha,
            ..ProptestConfig::default()
        }
    }
}

/// Case count from an optional env value, falling back when absent or unparsable.
/// Zero is kept as-is, matching what `Corpus::generate` draws.
fn cases_from(var: Option<String>, fallback: u32) -> u32 {
    var.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(fallback)
}
