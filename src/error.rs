//! Errors raised when the sampler is handed inputs it cannot fit.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EllipseError>;

/// Precondition violations, detected before any point is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EllipseError {
    #[error("invalid point count: {0} (need at least one point)")]
    InvalidPointCount(usize),

    #[error("invalid axis length: semi-major {semi_major}, semi-minor {semi_minor} (both must be positive)")]
    InvalidAxisLength { semi_major: f64, semi_minor: f64 },

    #[error("invalid bounding box: x in [{x_min}, {x_max}], y in [{y_min}, {y_max}]")]
    InvalidBoundingBox {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}
