// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Byte Polynomial Library
//!
//! Builds a polynomial from the byte-frequency histogram of a byte sequence and
//! evaluates it at a point.
//!
//! ## Features
//!
//! - Generic over every primitive integer and float through [`Coefficient`].
//! - Histogram construction: the coefficient of degree `i` counts byte `i`.
//! - Evaluation by ascending power accumulation, with a checked variant that reports overflow.
//! - Conversion between element types: lossless widening and checked narrowing.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Overflow
//!
//! Arithmetic follows the element type. Fixed-width integers wrap, both while
//! counting bytes and while evaluating; floats round. Use
//! [`Polynomial::checked_evaluate`] to detect integer overflow instead.
//!
//! ```
//! use bytepoly_polynomial::Polynomial;
//!
//! let poly = Polynomial::<i64>::from_bytes([1u8, 2, 3, 2, 3, 3]);
//! assert_eq!(poly.evaluate(2), 34);
//! ```

pub mod coefficient;
pub mod errors;
pub mod histogram;
pub mod polynomial;

pub use coefficient::Coefficient;
pub use errors::PolynomialError;
pub use histogram::{byte_histogram, ALPHABET_SIZE};
pub use polynomial::Polynomial;
