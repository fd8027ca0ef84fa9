//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color triple in
//! Carmine is a projection into this space, so the Bézier and blending math in the color map
//! generators is written once here instead of once per color space.

use std::ops::{Add, Div, Mul, Sub};

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. In Carmine, any [`Color`]
/// that converts to and from a `Coord` will match its components with these axes in the order of the
/// letters in its name: for example, `CIELUVColor` maps to a coordinate such that `l` is on the
/// x-axis, `u` is on the y-axis, and `v` is on the z-axis.
///
/// Components are `f32`: the color map algorithms are specified in single precision, and byte
/// output is reproducible only if every intermediate step rounds the same way.
///
/// [`Color`]: ../color/trait.Color.html
///
/// # Examples
/// ```
/// # use carmine::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // componentwise addition and subtraction
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalar multiplication works from either side
/// let prod = 2. * point_1; // the point (2, 16, 14)
/// assert_eq!(prod, point_1 * 2.);
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(sum.x, 8.);
/// assert_eq!(diff.y, 6.);
/// assert_eq!(quot.z, 3.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f32,
    /// The second axis.
    pub y: f32,
    /// The third axis.
    pub z: f32,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// This is a perfect analogue to numbers: for any Coords c1, c2, and c3, c1 + c2 = c3 implies
/// c3 - c2 = c1 and c3 - c1 = c2, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

// scalar on the left, which is how the curve formulas read
impl Mul<Coord> for f32 {
    type Output = Coord;
    fn mul(self, rhs: Coord) -> Coord {
        Coord {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}

impl Div<f32> for Coord {
    type Output = Coord;
    fn div(self, rhs: f32) -> Coord {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Coord {
    /// The midpoint between two 3D points, computed as `0.5 * (self + other)`.
    /// # Example
    /// ```
    /// # use carmine::coord::Coord;
    /// let point1 = Coord{x: 0.25, y: 0., z: 1.};
    /// let point2 = Coord{x: 0.75, y: 1., z: 1.};
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-6);
    /// assert!((mid.y - 0.5).abs() <= 1e-6);
    /// assert!((mid.z - 1.).abs() <= 1e-6);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        0.5 * (*self + *other)
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`. Computed as
    /// `(1 - t) * self + t * other`, in that order. Values of `t` outside of [0, 1] extrapolate.
    /// # Example
    /// ```
    /// # use carmine::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-6);
    /// assert!((mid.y - 0.2).abs() <= 1e-6);
    /// assert!((mid.z - 1.).abs() <= 1e-6);
    /// ```
    pub fn lerp(&self, other: &Coord, t: f32) -> Coord {
        (1.0 - t) * (*self) + t * (*other)
    }

    /// The Euclidean distance between two 3D points. In CIELUV this is the classic (if dated)
    /// ΔE*uv color difference, which is good enough to compare two color map entries.
    /// # Example
    /// ```
    /// # use carmine::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-6);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Coord{x: 10., y: -4., z: 3.};
        let b = Coord{x: 50., y: 12., z: -9.};
        assert_eq!(a.lerp(&b, 0.), a);
        assert_eq!(a.lerp(&b, 1.), b);
        assert_eq!(a.lerp(&b, 0.5), a.midpoint(&b));
    }
}
