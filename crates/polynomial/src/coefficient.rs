// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Numeric element types usable as polynomial coefficients.

use num_traits::{NumCast, One, Zero};
use std::fmt::{Debug, Display};

/// A primitive numeric type that can serve as a polynomial coefficient and
/// evaluation point.
///
/// The trait is implemented for every primitive integer and for `f32`/`f64`.
/// Arithmetic follows the element type's own rules, made explicit:
///
/// - Fixed-width integers wrap (two's complement) on overflow, in debug and
///   release builds alike.
/// - Floating point values round, and may saturate to infinity. A product of
///   zero and infinity is NaN, which then propagates through any sum.
///
/// The `checked_*` variants report integer overflow as `None` instead of
/// wrapping. Floating point arithmetic never fails.
pub trait Coefficient:
    Copy + PartialEq + Debug + Display + Zero + One + NumCast + Send + Sync + 'static
{
    /// Name of the element type, used in error messages.
    const NAME: &'static str;

    /// Adds `rhs` with the element type's overflow semantics.
    fn accumulate(self, rhs: Self) -> Self;

    /// Multiplies by `rhs` with the element type's overflow semantics.
    fn scale(self, rhs: Self) -> Self;

    /// Adds `rhs`, returning `None` if the sum is not representable.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Multiplies by `rhs`, returning `None` if the product is not representable.
    fn checked_scale(self, rhs: Self) -> Option<Self>;

    /// Adds the multiplicative identity.
    fn increment(self) -> Self {
        self.accumulate(Self::one())
    }
}

macro_rules! impl_integer_coefficient {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coefficient for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn scale(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn checked_scale(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_coefficient {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coefficient for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn scale(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_scale(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_integer_coefficient!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_coefficient!(f32, f64);
