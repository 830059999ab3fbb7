// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Byte-frequency histograms.

use crate::coefficient::Coefficient;
use std::borrow::Borrow;

/// Number of distinct byte values, and so the number of coefficients of every
/// byte-histogram polynomial.
pub const ALPHABET_SIZE: usize = 1 << u8::BITS;

/// Counts the occurrences of every byte value.
///
/// The returned vector always has [`ALPHABET_SIZE`] entries; entry `i` holds the
/// number of times byte `i` occurs in `bytes`. Counts are accumulated with the
/// element type's addition, so an integer count wraps once it exceeds the
/// type's maximum (e.g. 300 equal bytes counted as `u8` yield 44).
///
/// # Arguments
///
/// * `bytes` - The byte sequence, either owned (`u8`) or borrowed (`&u8`) items.
pub fn byte_histogram<T, I>(bytes: I) -> Vec<T>
where
    T: Coefficient,
    I: IntoIterator,
    I::Item: Borrow<u8>,
{
    let mut counts = vec![T::zero(); ALPHABET_SIZE];
    for byte in bytes {
        let slot = &mut counts[usize::from(*byte.borrow())];
        *slot = slot.increment();
    }
    counts
}
