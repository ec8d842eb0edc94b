//! Binary field elements
//!
//! This module binds a bit-polynomial value to the irreducible polynomial
//! defining its field, so curve formulas can be written as field arithmetic.

pub mod element;

pub use element::FieldElement;

/// Error types for field operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Field elements belong to different fields")]
    FieldMismatch,

    #[error("Element has no inverse under this modulus")]
    NotInvertible,

    #[error("Modulus must have degree at least 1")]
    InvalidModulus,
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;
