//! Points sampled on an ellipse, optionally rotated at random, and scaled
//! into a target bounding box.
pub mod ellipse;
pub mod error;

pub use crate::ellipse::{fit_to_box, generate, generate_with_angle, generate_with_rng,
                         rotate_points, sample, EllipseSpec, RotationAngle};
pub use crate::error::{EllipseError, Result};

use std::ops::{Add, Mul, Sub};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(self) -> f64 {
        self.0
    }

    pub fn y(self) -> f64 {
        self.1
    }

    /// Euclidean distance.
    pub fn dist(self, other: Point) -> f64 {
        ((self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)).sqrt()
    }

    /// Rotate counter-clockwise about the origin by `phi` radians.
    pub fn rotate(self, phi: f64) -> Point {
        let (s, c) = phi.sin_cos();
        self.rotate_sin_cos(s, c)
    }

    fn rotate_sin_cos(self, s: f64, c: f64) -> Point {
        let Point(x, y) = self;
        Point(x * c - y * s, x * s + y * c)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point(self.0 * k, self.1 * k)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point(x, y)
    }
}

/// Axis-aligned target rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// The fields are not checked on construction; [`BoundingBox::validate`] is
/// called by the sampler before any point is fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> BoundingBox {
        BoundingBox { x_min, x_max, y_min, y_max }
    }

    /// The rectangle spanned by two opposite corners given in any order.
    pub fn from_corners(p0: Point, p1: Point) -> BoundingBox {
        BoundingBox {
            x_min: p0.0.min(p1.0),
            x_max: p0.0.max(p1.0),
            y_min: p0.1.min(p1.1),
            y_max: p0.1.max(p1.1),
        }
    }

    /// The unit square `[0, 1] × [0, 1]`.
    pub fn unit() -> BoundingBox {
        BoundingBox::new(0., 1., 0., 1.)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Point {
        Point((self.x_max + self.x_min) / 2., (self.y_max + self.y_min) / 2.)
    }

    /// Check if the point is within the box, edges included.
    pub fn contains(&self, p: Point) -> bool {
        let Point(x, y) = p;
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    /// Fails unless both sides have positive, finite length.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if finite && self.x_max > self.x_min && self.y_max > self.y_min {
            Ok(())
        } else {
            Err(EllipseError::InvalidBoundingBox {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_from_corners() {
        let b = BoundingBox::from_corners(Point(3., -2.), Point(-1., 4.));
        assert_eq!(b, BoundingBox::new(-1., 3., -2., 4.));
        assert_eq!(b.center(), Point(1., 1.));
        assert_eq!((b.width(), b.height()), (4., 6.));
    }

    #[test]
    fn test_validate() {
        assert!(BoundingBox::unit().validate().is_ok());
        assert!(BoundingBox::new(1., 1., 0., 1.).validate().is_err());
        assert!(BoundingBox::new(0., 1., 2., 1.).validate().is_err());
        assert!(BoundingBox::new(0., ::std::f64::NAN, 0., 1.).validate().is_err());
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = Point(2., 0.).rotate(PI / 2.);
        assert_abs_diff_eq!(p.0, 0., epsilon = 1e-12);
        assert_abs_diff_eq!(p.1, 2., epsilon = 1e-12);
    }

    #[test]
    fn test_ops() {
        assert_eq!(Point(1., 2.) + Point(3., 4.), Point(4., 6.));
        assert_eq!(Point(1., 2.) - Point(3., 4.), Point(-2., -2.));
        assert_eq!(Point(1., 2.) * 0.5, Point(0.5, 1.));
        assert_eq!(Point(0., 0.).dist(Point(3., 4.)), 5.);
    }
}
