//! Math utilities and types
//!
//! Provides [`Vector3`], a p5.js-style 3D vector used for positions,
//! velocities and directions in sketches and game logic.
//!
//! ## Conventions
//!
//! - Components are `f64` and never validated; NaN and infinity propagate.
//! - Equality is tolerant: two vectors are equal when every axis differs by
//!   less than [`EQUALITY_EPSILON`]. Both [`Vector3::equals`] and `==` use it.
//! - Angles are radians. Positive angles turn from +X towards -Y, which reads
//!   as clockwise on a Y-up plot. [`Vector3::heading`], [`Vector3::rotate`] and
//!   [`Vector3::from_angle`] all share this sense.
//! - Every transforming operation comes as a pure method returning a new
//!   value and a `_mut` (or `set_`) method that updates the receiver.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Absolute per-axis tolerance used by vector equality
pub const EQUALITY_EPSILON: f64 = 1e-9;

/// Decimal places used by `Display` when the formatter gives no precision
pub const DEFAULT_DISPLAY_PRECISION: u16 = 2;

/// Vector construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// More components were supplied than a 3D vector holds
    #[error("Too many components: a vector takes at most 3, got {count}")]
    TooManyComponents {
        /// Number of components supplied
        count: usize,
    },
}

/// Build a [`Vector3`] from zero to three components.
///
/// Missing trailing components default to zero, so `vector![]` is the zero
/// vector, `vector![x]` is `{x, 0, 0}` and `vector![x, y]` is `{x, y, 0}`.
/// Passing more than three components is a compile error.
///
/// ```
/// use pvector::vector;
///
/// let v = vector![1.2, 7.9];
/// assert_eq!(v, pvector::Vector3::new(1.2, 7.9, 0.0));
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::foundation::math::Vector3::zero()
    };
    ($x:expr $(,)?) => {
        $crate::foundation::math::Vector3::new($x, 0.0, 0.0)
    };
    ($x:expr, $y:expr $(,)?) => {
        $crate::foundation::math::Vector3::new($x, $y, 0.0)
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::foundation::math::Vector3::new($x, $y, $z)
    };
}

/// 3D vector with `f64` components
///
/// A plain value type: it is `Copy`, owns no resources and is safe to share
/// between threads for reading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f64,

    /// Y component
    pub y: f64,

    /// Z component
    pub z: f64,
}

impl Vector3 {
    /// Create a vector from all three components
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a vector from up to three components, zero-filling the rest.
    ///
    /// # Errors
    /// Returns [`VectorError::TooManyComponents`] for slices longer than 3.
    pub fn from_components(components: &[f64]) -> Result<Self, VectorError> {
        match *components {
            [] => Ok(Self::zero()),
            [x] => Ok(Self::new(x, 0.0, 0.0)),
            [x, y] => Ok(Self::new(x, y, 0.0)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::TooManyComponents {
                count: components.len(),
            }),
        }
    }

    /// Overwrite all three components from up to three values.
    ///
    /// Components not covered by `components` are reset to zero, so
    /// `set(&[5.0])` after `set(&[1.0, 2.0, 3.0])` leaves `{5, 0, 0}`.
    ///
    /// # Errors
    /// Returns [`VectorError::TooManyComponents`] for slices longer than 3;
    /// the vector is left untouched in that case.
    pub fn set(&mut self, components: &[f64]) -> Result<(), VectorError> {
        *self = Self::from_components(components)?;
        Ok(())
    }

    /// Independent copy of this vector
    #[must_use]
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Squared magnitude
    #[must_use]
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Dot product
    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    #[must_use]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance between the points described by two vectors
    #[must_use]
    pub fn dist(&self, other: Self) -> f64 {
        (*self - other).mag()
    }

    /// Tolerant equality: every axis differs by less than [`EQUALITY_EPSILON`]
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EQUALITY_EPSILON
            && (self.y - other.y).abs() < EQUALITY_EPSILON
            && (self.z - other.z).abs() < EQUALITY_EPSILON
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector normalizes to itself rather than to NaN.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    /// Scale this vector to unit length in place
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Copy of this vector with its magnitude capped at `max`
    #[must_use]
    pub fn limit(&self, max: f64) -> Self {
        if self.mag() <= max {
            *self
        } else {
            self.normalize() * max
        }
    }

    /// Cap the magnitude of this vector at `max`
    pub fn limit_mut(&mut self, max: f64) {
        *self = self.limit(max);
    }

    /// Copy of this vector rescaled to magnitude `mag`
    #[must_use]
    pub fn with_mag(&self, mag: f64) -> Self {
        self.normalize() * mag
    }

    /// Rescale this vector to magnitude `mag`
    pub fn set_mag(&mut self, mag: f64) {
        *self = self.with_mag(mag);
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so nearly parallel vectors do not
    /// produce NaN. The result is NaN when either vector has zero length.
    #[must_use]
    pub fn angle_between(&self, other: Self) -> f64 {
        let cosine = self.dot(other) / (self.mag() * other.mag());
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Heading of the XY projection, in `[0, 2π)`.
    ///
    /// Measured from +X with positive angles turning towards -Y, so
    /// `{5, -5}` has heading π/4 and `{5, 5}` has heading 7π/4.
    #[must_use]
    pub fn heading(&self) -> f64 {
        utils::wrap_angle((-self.y).atan2(self.x))
    }

    /// Copy of this vector with the XY projection turned to `angle`.
    ///
    /// The projection keeps its length and Z is untouched.
    #[must_use]
    pub fn with_heading(&self, angle: f64) -> Self {
        let planar = self.x.hypot(self.y);
        let (sin, cos) = (-angle).sin_cos();
        Self::new(cos * planar, sin * planar, self.z)
    }

    /// Turn the XY projection of this vector to `angle`
    pub fn set_heading(&mut self, angle: f64) {
        *self = self.with_heading(angle);
    }

    /// Copy of this vector with the XY projection rotated by `angle`.
    ///
    /// Z is untouched, so the magnitude is preserved.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = (-angle).sin_cos();
        Self::new(
            cos * self.x - sin * self.y,
            sin * self.x + cos * self.y,
            self.z,
        )
    }

    /// Rotate the XY projection of this vector by `angle`
    pub fn rotate_mut(&mut self, angle: f64) {
        *self = self.rotate(angle);
    }

    /// Unit vector in the XY plane pointing at `angle`
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        Self::from_angle_with_length(angle, 1.0)
    }

    /// Vector of the given length in the XY plane pointing at `angle`
    #[must_use]
    pub fn from_angle_with_length(angle: f64, length: f64) -> Self {
        let (sin, cos) = (-angle).sin_cos();
        Self::new(cos * length, sin * length, 0.0)
    }

    /// Linear interpolation towards `target`; `amount` 0 gives `self`, 1 gives `target`
    #[must_use]
    pub fn lerp(&self, target: Self, amount: f64) -> Self {
        *self + (target - *self) * amount
    }

    /// Move this vector towards `target` by `amount`
    pub fn lerp_mut(&mut self, target: Self, amount: f64) {
        *self = self.lerp(target, amount);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(usize::from(DEFAULT_DISPLAY_PRECISION));
        write!(
            f,
            "{{{:.*}, {:.*}, {:.*}}}",
            precision, self.x, precision, self.y, precision, self.z
        )
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl Rem<f64> for Vector3 {
    type Output = Self;
    fn rem(self, divisor: f64) -> Self {
        Self::new(self.x % divisor, self.y % divisor, self.z % divisor)
    }
}

impl Rem for Vector3 {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self {
        Self::new(self.x % divisor.x, self.y % divisor.y, self.z % divisor.z)
    }
}

impl RemAssign<f64> for Vector3 {
    fn rem_assign(&mut self, divisor: f64) {
        *self = *self % divisor;
    }
}

impl RemAssign for Vector3 {
    fn rem_assign(&mut self, divisor: Self) {
        *self = *self % divisor;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f64 = PI * 0.25;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    #[must_use]
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    #[must_use]
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Wrap an angle into `[0, 2π)`
    #[must_use]
    pub fn wrap_angle(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(constants::TAU);
        // rem_euclid can round tiny negatives up to exactly TAU
        if wrapped >= constants::TAU {
            0.0
        } else {
            wrapped
        }
    }
}
