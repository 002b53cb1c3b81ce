//! # Cartesian Vector Module
//!
//! Fixed-size vector types used by every geometric routine in the crate.
//!
//! ## Conventions
//!
//! `Cartesian3` stores a point or direction in a right-handed frame:
//! - **X-axis**: latitude 0°, longitude 0°
//! - **Y-axis**: latitude 0°, longitude 90°
//! - **Z-axis**: the north pole (latitude 90°)
//!
//! `PlanePoint` stores the two coordinates of a point on a projection plane,
//! measured in the tangent frame of that plane's pole (see
//! [`crate::projection::TangentFrame`]).
//!
//! Arithmetic is component-wise and spelled out with operators, while the
//! products that are easy to confuse with each other (`dot`, `cross`) are
//! named methods.
//!
//! ## Examples
//!
//! ```rust
//! use spherekit::coordinates::cartesian::Cartesian3;
//!
//! let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
//! let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x_axis.dot(&y_axis), 0.0);
//! assert_eq!(x_axis.cross(&y_axis), Cartesian3::new(0.0, 0.0, 1.0));
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional point or direction
///
/// Components are plain `f64` values with no implied normalisation, so the
/// same type carries points on the unit sphere, points inside it, and the
/// intermediate vectors of the projection formulas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward latitude 0°, longitude 0°)
    pub x: f64,
    /// Y-component (toward latitude 0°, longitude 90°)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// The origin
    pub const ZERO: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherekit::coordinates::cartesian::Cartesian3;
    ///
    /// let p = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(p.x, 1.0);
    /// assert_eq!(p.y, 2.0);
    /// assert_eq!(p.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a vector from an `[x, y, z]` array
    pub const fn from_array(xyz: [f64; 3]) -> Self {
        Cartesian3 {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Returns the components as an `[x, y, z]` array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`, evaluated with `hypot` so that no
    /// intermediate square overflows or underflows for finite components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherekit::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Cartesian3::new(0.0, 0.0, 1e200).magnitude(), 1e200);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Squared magnitude, `self · self`
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` for the zero vector and for vectors with non-finite
    /// components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherekit::coordinates::cartesian::Cartesian3;
    ///
    /// let unit = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert!(Cartesian3::ZERO.normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product, `x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherekit::coordinates::cartesian::Cartesian3;
    ///
    /// let a = Cartesian3::new(1.0, 2.0, 3.0);
    /// let b = Cartesian3::new(4.0, -5.0, 6.0);
    /// assert_eq!(a.dot(&b), 12.0);
    /// ```
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, following the right-hand rule
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// The magnitude of the result is the area of the parallelogram spanned by
    /// the two vectors, which is what the circumcircle formulas divide by.
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean distance to another point, `|self - other|`
    pub fn distance(&self, other: &Cartesian3) -> f64 {
        (*self - *other).magnitude()
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherekit::coordinates::cartesian::Cartesian3;
    ///
    /// let v = Cartesian3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(v.norm_squared(), 14.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(xyz: [f64; 3]) -> Self {
        Cartesian3::from_array(xyz)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Mul<Cartesian3> for f64 {
    type Output = Cartesian3;

    fn mul(self, vector: Cartesian3) -> Cartesian3 {
        vector * self
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

/// Two-dimensional point on a projection plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanePoint {
    /// Coordinate along the first tangent-frame axis
    pub x: f64,
    /// Coordinate along the second tangent-frame axis
    pub y: f64,
}

impl PlanePoint {
    /// Creates a new plane point
    pub const fn new(x: f64, y: f64) -> Self {
        PlanePoint { x, y }
    }

    /// Squared distance from the tangent point, `x² + y²`
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for PlanePoint {
    fn from(xy: [f64; 2]) -> Self {
        PlanePoint::new(xy[0], xy[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Cartesian3::new(0.0, 0.0, -2.0).magnitude(), 2.0);
        assert_eq!(Cartesian3::ZERO.magnitude(), 0.0);
        assert_eq!(Cartesian3::new(1.0, 2.0, 2.0).magnitude_squared(), 9.0);
    }

    #[test]
    fn test_magnitude_at_extreme_scales() {
        // Squaring these components overflows or underflows
        assert_relative_eq!(Cartesian3::new(3e200, 4e200, 0.0).magnitude(), 5e200, max_relative = 1e-15);
        assert_relative_eq!(Cartesian3::new(0.0, 3e-200, -4e-200).magnitude(), 5e-200, max_relative = 1e-15);
        assert!(Cartesian3::new(1e-200, 0.0, 0.0).magnitude() > 0.0);

        let unit = Cartesian3::new(0.0, 1e300, 1e300).normalize().unwrap();
        assert_relative_eq!(unit.y, 0.5_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(unit.z, 0.5_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_normalize() {
        let normalized = Cartesian3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(normalized.magnitude(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(normalized.y, 0.6, epsilon = 1e-15);
        assert_relative_eq!(normalized.z, 0.8, epsilon = 1e-15);

        assert!(Cartesian3::ZERO.normalize().is_none());
        assert!(Cartesian3::new(f64::NAN, 0.0, 1.0).normalize().is_none());
        assert!(Cartesian3::new(f64::INFINITY, 0.0, 0.0).normalize().is_none());
    }

    #[rstest]
    #[case([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])]
    #[case([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0])]
    #[case([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])]
    #[case([1.0, -1.0, 0.0], [0.0, 1.0, -1.0], [1.0, 1.0, 1.0])]
    fn test_cross_product(#[case] a: [f64; 3], #[case] b: [f64; 3], #[case] expected: [f64; 3]) {
        let a = Cartesian3::from(a);
        let b = Cartesian3::from(b);
        let cross = a.cross(&b);
        assert_eq!(cross, Cartesian3::from(expected));
        // The result is orthogonal to both factors
        assert_eq!(cross.dot(&a), 0.0);
        assert_eq!(cross.dot(&b), 0.0);
    }

    #[test]
    fn test_dot_product() {
        let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
        assert_eq!(x_axis.dot(&Cartesian3::new(0.0, 5.0, -2.0)), 0.0);
        assert_eq!(x_axis.dot(&Cartesian3::new(2.0, 0.0, 0.0)), 2.0);
        assert_eq!(x_axis.dot(&-x_axis), -1.0);
    }

    #[test]
    fn test_distance() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Cartesian3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Cartesian3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Cartesian3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Cartesian3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();
        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Cartesian3::from(vec), coord);

        // nalgebra's cross product agrees with ours
        let other = Cartesian3::new(-2.0, 0.5, 4.0);
        let expected = Cartesian3::from_vector3(vec.cross(&other.to_vector3()));
        assert_eq!(coord.cross(&other), expected);
    }

    #[test]
    fn test_array_conversions() {
        let coord = Cartesian3::from_array([0.25, -0.5, 0.75]);
        assert_eq!(coord.to_array(), [0.25, -0.5, 0.75]);
        assert_eq!(PlanePoint::from([3.0, 4.0]).magnitude_squared(), 25.0);
    }

    #[test]
    fn test_finiteness() {
        assert!(Cartesian3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Cartesian3::new(1.0, f64::NAN, 3.0).is_finite());
        assert!(PlanePoint::new(0.0, 0.0).is_finite());
        assert!(!PlanePoint::new(f64::NEG_INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Cartesian3::new(1.0, 0.0, -1.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":0.0,"z":-1.0}"#);

        let point: PlanePoint = serde_json::from_str(r#"{"x":0.5,"y":2.0}"#).unwrap();
        assert_eq!(point, PlanePoint::new(0.5, 2.0));
    }
}
