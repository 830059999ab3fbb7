//! Byte-histogram polynomial construction and evaluation.

use crate::coefficient::Coefficient;
use crate::errors::PolynomialError;
use crate::histogram::{byte_histogram, ALPHABET_SIZE};
use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial with exactly [`ALPHABET_SIZE`] coefficients in ascending order
/// of degree.
///
/// The coefficient of degree `i` is associated with byte value `i`. When built
/// with [`Polynomial::from_bytes`] it is the number of occurrences of that
/// byte. The polynomial is represented as:
/// `a_0 + a_1 * x + ... + a_255 * x^255`
///
/// A polynomial is immutable once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<T>",
        into = "Vec<T>",
        bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
    )
)]
pub struct Polynomial<T: Coefficient> {
    /// Coefficients in ascending order (lowest degree first).
    coefficients: Vec<T>,
}

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            let rendered = coeff.to_string();
            let (negative, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rendered.as_str()),
            };

            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            if degree == 0 || magnitude != "1" {
                write!(f, "{magnitude}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Builds the byte-frequency polynomial of a byte sequence.
    ///
    /// The coefficient of degree `i` counts the occurrences of byte `i`. An empty
    /// sequence yields the zero polynomial. Integer counts wrap once they exceed
    /// the element type's maximum.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The byte sequence, owned or borrowed.
    pub fn from_bytes<I>(bytes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<u8>,
    {
        Self {
            coefficients: byte_histogram(bytes),
        }
    }

    /// Creates a polynomial from externally supplied coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients in ascending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidLength` unless exactly [`ALPHABET_SIZE`]
    /// coefficients are given.
    pub fn from_coefficients(coefficients: Vec<T>) -> Result<Self, PolynomialError> {
        if coefficients.len() != ALPHABET_SIZE {
            return Err(PolynomialError::InvalidLength {
                expected: ALPHABET_SIZE,
                actual: coefficients.len(),
            });
        }
        Ok(Self { coefficients })
    }

    /// Creates the polynomial whose coefficients are all zero.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![T::zero(); ALPHABET_SIZE],
        }
    }

    /// Returns the coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the coefficient associated with a byte value.
    pub fn coefficient(&self, byte: u8) -> T {
        self.coefficients[usize::from(byte)]
    }

    /// Consumes the polynomial, returning its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Checks if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Returns the highest degree with a non-zero coefficient.
    ///
    /// The zero polynomial has no degree.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Evaluates the polynomial at a given point.
    ///
    /// Accumulates `result += a_i * x^i` for every degree in ascending order while
    /// carrying `x^i` forward, so all [`ALPHABET_SIZE`] terms are visited for any
    /// `x`. Fixed-width integers wrap on overflow, floats round.
    ///
    /// For floats, once `x^i` overflows to infinity every later zero
    /// coefficient contributes `0 * inf`, which is NaN. A point whose high
    /// powers overflow the float type therefore evaluates to NaN even for a
    /// sparse histogram.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: T) -> T {
        let mut result = T::zero();
        let mut power = T::one();
        for &coeff in &self.coefficients {
            result = result.accumulate(coeff.scale(power));
            power = power.scale(x);
        }
        result
    }

    /// Evaluates the polynomial at a given point, rejecting intermediate overflow.
    ///
    /// Visits the same terms as [`Polynomial::evaluate`]. A power of `x` that is
    /// not representable is only an error once a non-zero coefficient needs it,
    /// so a sparse histogram can be evaluated at points whose high powers
    /// overflow.
    ///
    /// Overflow is detected per term and per partial sum, not on the final
    /// value: a polynomial whose terms cancel back into range, or whose single
    /// term is `i64::MIN` reached through `-(2^63)`, is still rejected even though
    /// [`Polynomial::evaluate`] returns the exact value. `Ok` always means the
    /// result is exact.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Overflow` with the degree of the first term whose
    /// power, product, or addition to the running sum overflows.
    pub fn checked_evaluate(&self, x: T) -> Result<T, PolynomialError> {
        let mut result = T::zero();
        let mut power = Some(T::one());
        for (degree, &coeff) in self.coefficients.iter().enumerate() {
            if !coeff.is_zero() {
                let term = power
                    .and_then(|p| coeff.checked_scale(p))
                    .ok_or(PolynomialError::Overflow { degree })?;
                result = result
                    .checked_accumulate(term)
                    .ok_or(PolynomialError::Overflow { degree })?;
            }
            power = power.and_then(|p| p.checked_scale(x));
        }
        Ok(result)
    }

    /// Converts every coefficient into a wider element type.
    ///
    /// The conversion is lossless, so it cannot fail.
    pub fn widen<U>(&self) -> Polynomial<U>
    where
        U: Coefficient + From<T>,
    {
        Polynomial {
            coefficients: self
                .coefficients
                .iter()
                .map(|&c| <U as From<T>>::from(c))
                .collect(),
        }
    }

    /// Converts every coefficient into another element type.
    ///
    /// Floats converted to integers are truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ConversionError` for the first coefficient that
    /// is out of range for `U` (or is NaN when converting to an integer).
    pub fn try_convert<U: Coefficient>(&self) -> Result<Polynomial<U>, PolynomialError> {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(degree, &c)| {
                <U as num_traits::NumCast>::from(c).ok_or(PolynomialError::ConversionError {
                    degree,
                    target: U::NAME,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial { coefficients })
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_coefficients(coefficients)
    }
}

impl<T: Coefficient> From<[T; ALPHABET_SIZE]> for Polynomial<T> {
    fn from(coefficients: [T; ALPHABET_SIZE]) -> Self {
        Self {
            coefficients: coefficients.to_vec(),
        }
    }
}

impl<T: Coefficient> From<Polynomial<T>> for Vec<T> {
    fn from(polynomial: Polynomial<T>) -> Self {
        polynomial.into_coefficients()
    }
}

impl<T: Coefficient> FromIterator<u8> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_bytes(iter)
    }
}

impl<'a, T: Coefficient> FromIterator<&'a u8> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        Self::from_bytes(iter)
    }
}
