//! Foundation module - Core utilities and types
//!
//! This module provides the building blocks of the crate:
//! - Vector type and math helpers
//! - Random unit vector sources
//! - Logging utilities

pub mod math;
pub mod random;
pub mod logging;
