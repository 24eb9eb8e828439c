//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color type in
//! this crate projects into a `Coord` for the linear-algebra stages of conversion and for distance,
//! so that all of that math happens once, in `f64`, and in one place.

use num::{Num, NumCast};
use std::ops::{Add, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A 3x3 matrix stored row-major, used for the fixed linear stages of color conversion.
pub type Mat3 = [[f64; 3]; 3];

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. Any color that converts to and from a `Coord`
/// matches its components with these axes in the order of the letters in its name: for example,
/// `OklabColor` maps to a coordinate such that `l` is on the x-axis, `a` is on the y-axis, and `b`
/// is on the z-axis.
///
/// # Examples
/// ```
/// # use colorjourney::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalar multiplication only works with the scalar on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
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

// Scalars that can't be represented as f64 scale to NaN rather than panicking.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Applies a row-major 3x3 matrix to this point, treating it as a column vector.
    /// # Example
    /// ```
    /// # use colorjourney::coord::Coord;
    /// let swap = [[0., 1., 0.], [1., 0., 0.], [0., 0., 2.]];
    /// let p = Coord{x: 1., y: 2., z: 3.}.transform(&swap);
    /// assert_eq!(p, Coord{x: 2., y: 1., z: 6.});
    /// ```
    pub fn transform(&self, m: &Mat3) -> Coord {
        Coord {
            x: m[0][0] * self.x + m[0][1] * self.y + m[0][2] * self.z,
            y: m[1][0] * self.x + m[1][1] * self.y + m[1][2] * self.z,
            z: m[2][0] * self.x + m[2][1] * self.y + m[2][2] * self.z,
        }
    }
    /// Applies `f` to each axis independently.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
    /// Linear interpolation: 0 gives `self`, 1 gives `other`, and anything in between moves along
    /// the segment connecting them. Weights outside of [0, 1] extrapolate.
    /// # Example
    /// ```
    /// # use colorjourney::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, weight: f64) -> Coord {
        *self + (*other - *self) * weight
    }
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. In OKLab this *is* the perceptual distance used
    /// throughout the crate; in other projections (RGB, or the cylindrical LCh form where hue
    /// wraps) it has no perceptual meaning.
    /// # Example
    /// ```
    /// # use colorjourney::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}
