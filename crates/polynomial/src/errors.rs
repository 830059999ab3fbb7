//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Building a polynomial from bytes and evaluating it are total; only the
/// checked and converting operations report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Externally supplied coefficients do not cover the byte alphabet
    #[error("Invalid coefficient count: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A term or the running sum is not representable in the element type
    #[error("Arithmetic overflow at the degree {degree} term")]
    Overflow { degree: usize },

    /// A coefficient does not fit the requested element type
    #[error("Coefficient of degree {degree} is not representable as {target}")]
    ConversionError {
        degree: usize,
        target: &'static str,
    },
}
