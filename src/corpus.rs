//! Seed corpus: a reproducible batch of fixtures exported as JSON.
//!
//! ## Versioning
//!
//! - `CORPUS_VERSION`: current format. Bump it when adding fields.
//! - `MIN_COMPATIBLE_VERSION`: oldest format still readable. Only bump it on a
//!   breaking change (a field removed or its meaning changed). Older corpora at
//!   or above this version load with missing fields defaulted.

use serde::{Deserialize, Serialize};

use crate::bounds::{FixtureBounds, FixtureConfig};
use crate::error::{FixtureError, Result};
use crate::generators::game_state_within;
use crate::sampler::FixtureSampler;
use crate::state::GameState;

pub const CORPUS_VERSION: u32 = 1;
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// A batch of fixtures drawn from one seed, with the bounds used to draw them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub version: u32,
    #[serde(default)]
    pub seed: u64,
    /// Bounds the fixtures were drawn within.
    #[serde(default)]
    pub bounds: FixtureBounds,
    #[serde(default)]
    pub fixtures: Vec<GameState>,
}

impl Corpus {
    /// Draw `config.cases` fixtures from a sampler seeded with `config.seed`.
    pub fn generate(config: &FixtureConfig) -> Result<Self> {
        let strategy = game_state_within(config.bounds)?;
        let mut sampler = FixtureSampler::new(config.seed);
        let fixtures = (0..config.cases)
            .map(|_| sampler.sample(&strategy))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            seed = config.seed,
            count = fixtures.len(),
            "generated fixture corpus"
        );
        Ok(Self {
            version: CORPUS_VERSION,
            seed: config.seed,
            bounds: config.bounds,
            fixtures,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a corpus, rejecting unsupported versions and out-of-bounds fixtures.
    ///
    /// A fixture must sit inside both the stored bounds and the game ranges.
    pub fn from_json(json: &str) -> Result<Self> {
        let corpus: Corpus = serde_json::from_str(json)?;

        if corpus.version < MIN_COMPATIBLE_VERSION || corpus.version > CORPUS_VERSION {
            tracing::warn!(version = corpus.version, "rejected corpus version");
            return Err(FixtureError::IncompatibleVersion {
                found: corpus.version,
                min: MIN_COMPATIBLE_VERSION,
                max: CORPUS_VERSION,
            });
        }

        corpus.bounds.validate()?;
        // Stored bounds may only narrow the game ranges, never widen them.
        let allowed = corpus.bounds.clamped_to(&FixtureBounds::default());
        allowed.validate()?;
        for (index, state) in corpus.fixtures.iter().enumerate() {
            if let Some((field, value)) = allowed.first_violation(state) {
                tracing::warn!(index, field, value, "rejected out-of-bounds fixture");
                return Err(FixtureError::OutOfBounds {
                    index,
                    field,
                    value,
                });
            }
        }

        tracing::debug!(
            seed = corpus.seed,
            count = corpus.fixtures.len(),
            "loaded fixture corpus"
        );
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
