//! binecc: arithmetic over binary fields GF(2^m) and the group law of
//! elliptic curves `y^2 + xy = x^3 + ax^2 + b` defined over them.
//!
//! The library is layered bottom-up: bit-polynomial primitives, field
//! elements bound to their modulus, then curve descriptors and points.

pub mod arithmetic;
pub mod curve;
pub mod field;
pub mod util;

// Re-export commonly used types
pub use curve::{BinaryCurve, CurveError, CurvePoint, CurveResult, DomainParams};
pub use field::{FieldElement, FieldError, FieldResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
