//! # pvector
//!
//! A p5.js-style 3D vector for sketches and game logic.
//!
//! ## Features
//!
//! - **Vector3**: `Copy` value type with `f64` components
//! - **Pure and in-place forms**: `v.rotate(a)` returns a new vector, `v.rotate_mut(a)` updates `v`
//! - **Angles**: unsigned angle between vectors, signed full-circle headings, rotation
//! - **Random directions**: uniform 2D/3D unit vectors from an injected or seeded RNG
//! - **Configuration**: TOML/RON settings for seeds, sampling and formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use pvector::prelude::*;
//!
//! let mut velocity = vector![3.0, 4.0];
//! velocity.limit_mut(2.5);
//! assert_eq!(velocity, vector![1.5, 2.0]);
//!
//! let position = vector![10.0, 10.0] + velocity * 2.0;
//! assert_eq!(position.to_string(), "{13.00, 14.00, 0.00}");
//!
//! let mut rng = VectorRng::seeded(42);
//! let wander = rng.random2d();
//! assert!((wander.mag() - 1.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod foundation;

pub use foundation::math::{Vector3, VectorError};
pub use foundation::random::{SamplingMode, VectorRng};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, VectorConfig},
        foundation::{
            math::{constants, Vector3, VectorError},
            random::{SamplingMode, VectorRng},
        },
        vector,
    };
}
