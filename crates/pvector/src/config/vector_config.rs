//! Settings for random vector sources and vector formatting

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::{Vector3, DEFAULT_DISPLAY_PRECISION};
use crate::foundation::random::{SamplingMode, VectorRng};

/// Random unit vector settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed; `None` seeds from entropy
    ///
    /// Written as a signed 64-bit integer so every seed fits in TOML; seeds
    /// above `i64::MAX` appear negative in the file.
    #[serde(with = "seed_bits")]
    pub seed: Option<u64>,

    /// Sampling strategy for random directions
    pub sampling: SamplingMode,
}

/// Stores a `u64` seed as the `i64` with the same bits
mod seed_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_possible_wrap)]
    pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match seed {
            Some(seed) => serializer.serialize_some(&(*seed as i64)),
            None => serializer.serialize_none(),
        }
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.map(|seed| seed as u64))
    }
}

impl RandomConfig {
    /// Build a random vector source from these settings
    #[must_use]
    pub fn rng(&self) -> VectorRng {
        let rng = match self.seed {
            Some(seed) => VectorRng::seeded(seed),
            None => VectorRng::from_entropy(),
        };
        rng.with_mode(self.sampling)
    }
}

/// Human-readable formatting settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places per component
    ///
    /// Bounded by `u16` because the formatter rejects larger precisions;
    /// out-of-range values fail to parse.
    pub precision: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl DisplayConfig {
    /// Format a vector as `{x, y, z}` with the configured precision
    #[must_use]
    pub fn format(&self, vector: &Vector3) -> String {
        format!("{:.*}", usize::from(self.precision), vector)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    /// Random unit vector settings
    pub random: RandomConfig,

    /// Formatting settings
    pub display: DisplayConfig,
}

impl Config for VectorConfig {}

impl VectorConfig {
    /// Shortcut for `self.random.rng()`
    #[must_use]
    pub fn rng(&self) -> VectorRng {
        self.random.rng()
    }
}
