//! Random unit vectors
//!
//! Random directions are always drawn from a caller-supplied random source,
//! either any [`rand::Rng`] passed to [`Vector3::random2d`] /
//! [`Vector3::random3d`], or a seedable [`VectorRng`] that also remembers the
//! [`SamplingMode`]. There is no process-wide generator here.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::math::{constants::TAU, Vector3};

/// How random unit vectors are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Uniform over the unit circle (2D) or unit sphere (3D)
    #[default]
    Uniform,

    /// Each component drawn from `[0, 1)`, then normalized.
    ///
    /// Only yields directions in the positive quadrant (octant in 3D) and
    /// favours the diagonal. Kept so sketches built on it reproduce.
    Legacy,
}

impl Vector3 {
    /// Unit vector in the XY plane with a uniformly random heading
    pub fn random2d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.gen_range(0.0..TAU))
    }

    /// Unit vector uniformly distributed over the sphere.
    ///
    /// Uses Archimedes' method: a uniform height in `[-1, 1]` and a uniform
    /// azimuth give a uniform point on the sphere.
    pub fn random3d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let azimuth = rng.gen_range(0.0..TAU);
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let planar = (1.0 - z * z).sqrt();
        let (sin, cos) = azimuth.sin_cos();
        Self::new(planar * cos, planar * sin, z)
    }

    /// 2D unit vector using [`SamplingMode::Legacy`]
    pub fn random2d_legacy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        normalize_draw(Self::new(rng.gen(), rng.gen(), 0.0))
    }

    /// 3D unit vector using [`SamplingMode::Legacy`]
    pub fn random3d_legacy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        normalize_draw(Self::new(rng.gen(), rng.gen(), rng.gen()))
    }
}

fn normalize_draw(draw: Vector3) -> Vector3 {
    if draw.mag_sq() == 0.0 {
        log::warn!("Legacy sampling drew the zero vector, returning it unnormalized");
    }
    draw.normalize()
}

/// Seedable source of random unit vectors
#[derive(Debug, Clone)]
pub struct VectorRng {
    rng: StdRng,
    mode: SamplingMode,
}

impl VectorRng {
    /// Deterministic generator; the same seed always yields the same vectors
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Seeding vector RNG with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
            mode: SamplingMode::default(),
        }
    }

    /// Generator seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        log::debug!("Seeding vector RNG from entropy");
        Self {
            rng: StdRng::from_entropy(),
            mode: SamplingMode::default(),
        }
    }

    /// Builder pattern: Set sampling mode
    #[must_use]
    pub fn with_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current sampling mode
    #[must_use]
    pub const fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// Random 2D unit vector (z = 0)
    pub fn random2d(&mut self) -> Vector3 {
        match self.mode {
            SamplingMode::Uniform => Vector3::random2d(&mut self.rng),
            SamplingMode::Legacy => Vector3::random2d_legacy(&mut self.rng),
        }
    }

    /// Random 3D unit vector
    pub fn random3d(&mut self) -> Vector3 {
        match self.mode {
            SamplingMode::Uniform => Vector3::random3d(&mut self.rng),
            SamplingMode::Legacy => Vector3::random3d_legacy(&mut self.rng),
        }
    }
}
