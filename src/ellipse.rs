//! Sampling of points on an axis-aligned ellipse and fitting them into a
//! bounding box.
//!
//! The pipeline is `sample -> rotate_points -> fit_to_box`; every stage
//! returns a fresh sequence and leaves its input untouched.
use crate::error::{EllipseError, Result};
use crate::{BoundingBox, Point};
use rand::distributions::Distribution;
use rand::Rng;
use std::f64::consts::PI;
use tracing::{debug, trace};

const TWO_PI: f64 = 2. * PI;

/// The uniform distribution of rotation angles on `[0, 2π)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationAngle;

impl Distribution<f64> for RotationAngle {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        TWO_PI * rng.gen::<f64>()
    }
}

/// An ellipse centered at the origin with its major axis along `x`, and the
/// number of points to sample on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseSpec {
    semi_major: f64,
    semi_minor: f64,
    n: usize,
    rotate: bool,
}

impl EllipseSpec {
    /// Fails with `InvalidPointCount` if `n == 0`, and with
    /// `InvalidAxisLength` unless both semi-axes are positive and finite.
    pub fn new(n: usize, semi_major: f64, semi_minor: f64, rotate: bool) -> Result<EllipseSpec> {
        if n == 0 {
            return Err(EllipseError::InvalidPointCount(n));
        }
        check_axes(semi_major, semi_minor)?;
        Ok(EllipseSpec {
            semi_major,
            semi_minor,
            n,
            rotate,
        })
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn rotate(&self) -> bool {
        self.rotate
    }

    /// Iterator over the `n` points `(a cos θ_i, b sin θ_i)`, `θ_i = 2πi/n`,
    /// counter-clockwise from `(a, 0)`.
    pub fn points(&self) -> ParametricPoints {
        ParametricPoints { spec: *self, i: 0 }
    }
}

fn check_axes(semi_major: f64, semi_minor: f64) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v > 0.;
    if ok(semi_major) && ok(semi_minor) {
        Ok(())
    } else {
        Err(EllipseError::InvalidAxisLength {
            semi_major,
            semi_minor,
        })
    }
}

/// Points evenly spaced in the parametric angle of an ellipse.
#[derive(Debug, Clone)]
pub struct ParametricPoints {
    spec: EllipseSpec,
    i: usize,
}

impl Iterator for ParametricPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let EllipseSpec { semi_major, semi_minor, n, .. } = self.spec;
        if self.i >= n {
            return None;
        }
        let theta = TWO_PI * self.i as f64 / n as f64;
        self.i += 1;
        let (s, c) = theta.sin_cos();
        Some(Point(semi_major * c, semi_minor * s))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let k = self.spec.n - self.i;
        (k, Some(k))
    }
}

impl ExactSizeIterator for ParametricPoints {}

/// Sample the unfitted ellipse.
pub fn sample(spec: &EllipseSpec) -> Vec<Point> {
    spec.points().collect()
}

/// Rotate all points rigidly about the origin by the same angle `phi`.
pub fn rotate_points(ps: &[Point], phi: f64) -> Vec<Point> {
    let (s, c) = phi.sin_cos();
    ps.iter().map(|p| p.rotate_sin_cos(s, c)).collect()
}

/// Uniformly scale the points so that an ellipse with semi-axes
/// `semi_major`, `semi_minor` fits into `bbox`, then move them to its center.
///
/// The scale comes from the given semi-axes, not from the extent of `ps`, so
/// a rotated ellipse is only approximately fitted and may stick out of the
/// box.
pub fn fit_to_box(ps: &[Point], semi_major: f64, semi_minor: f64, bbox: &BoundingBox) -> Result<Vec<Point>> {
    check_axes(semi_major, semi_minor)?;
    bbox.validate()?;

    let x_scale = bbox.width() / (2. * semi_major);
    let y_scale = bbox.height() / (2. * semi_minor);
    let scale = x_scale.min(y_scale);
    let center = bbox.center();
    debug!(x_scale, y_scale, scale, "fitting ellipse to box");

    Ok(ps.iter().map(|&p| p * scale + center).collect())
}

/// Generate the fitted ellipse, rotated by `angle` if one is given.
///
/// `spec.rotate()` is ignored; the caller decides on the angle.
pub fn generate_with_angle(spec: &EllipseSpec, angle: Option<f64>, bbox: &BoundingBox) -> Result<Vec<Point>> {
    bbox.validate()?;

    let mut ps = sample(spec);
    trace!(n = ps.len(), "sampled ellipse");
    if let Some(phi) = angle {
        debug!(phi, "rotating ellipse");
        ps = rotate_points(&ps, phi);
    }
    fit_to_box(&ps, spec.semi_major, spec.semi_minor, bbox)
}

/// Generate the fitted ellipse, drawing one rotation angle from `rng` if
/// `spec.rotate()` is set. Nothing is drawn otherwise.
pub fn generate_with_rng<R: Rng + ?Sized>(spec: &EllipseSpec, bbox: &BoundingBox, rng: &mut R) -> Result<Vec<Point>> {
    // validate before drawing so that a failed call does not advance `rng`
    bbox.validate()?;
    let angle = if spec.rotate {
        Some(RotationAngle.sample(rng))
    } else {
        None
    };
    generate_with_angle(spec, angle, bbox)
}

/// Generate `n` points on an ellipse with semi-axes `semi_major`,
/// `semi_minor`, optionally rotated by a random angle, fitted into
/// `[x_min, x_max] × [y_min, y_max]`.
///
/// The rotation angle is drawn from `rand::thread_rng()`.
///
/// # Errors
///
/// `InvalidPointCount` if `n == 0`, `InvalidAxisLength` if a semi-axis is not
/// positive, `InvalidBoundingBox` if the box has zero or negative width or
/// height. The checks happen in this order, before anything is computed.
#[allow(clippy::too_many_arguments)]
pub fn generate(n: usize,
                semi_major: f64,
                semi_minor: f64,
                rotate: bool,
                x_min: f64,
                x_max: f64,
                y_min: f64,
                y_max: f64)
                -> Result<Vec<Point>> {
    let spec = EllipseSpec::new(n, semi_major, semi_minor, rotate)?;
    let bbox = BoundingBox::new(x_min, x_max, y_min, y_max);
    generate_with_rng(&spec, &bbox, &mut rand::thread_rng())
}
