//! Elliptic curves `y^2 + xy = x^3 + ax^2 + b` over GF(2^m)

pub mod binary;
pub mod params;
pub mod point;

pub use binary::BinaryCurve;
pub use params::DomainParams;
pub use point::CurvePoint;

use crate::field::FieldError;

/// Error types for curve operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Points belong to different curves")]
    CurveMismatch,

    #[error("Modulus is not an irreducible polynomial")]
    ReducibleModulus,

    #[error("Curve is singular (b = 0)")]
    SingularCurve,

    #[error("Point does not satisfy the curve equation")]
    PointNotOnCurve,

    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    #[error("Invalid domain parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for curve operations
pub type CurveResult<T> = Result<T, CurveError>;
