/*
 *
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementation of the Elias–Fano representation of monotone sequences.

A [`EliasFanoMonotoneLongBigList`] is built with an
[`EliasFanoMonotoneBuilder`]: create the builder with the sequence length
`n` and an upper bound `u`, [`push`](EliasFanoMonotoneBuilder::push) the
`n` values in non-decreasing order, then
[`build`](EliasFanoMonotoneBuilder::build) it.

*/

use crate::error::BuildError;
use crate::fast::elias_fano_low_bits;
use anyhow::Result;

use super::bit_field_vec::BitFieldVec;
use crate::bits::BitVector;
use crate::rank_sel::SimpleSelect;

/// How many ones to sample per select inventory entry. The upper-bits
/// array of a monotone Elias–Fano list has density close to 1/2, so a
/// fairly sparse inventory (every 2^10 ones) already gives a short linear
/// scan.
pub(crate) const SELECT_LOG2_ONES_PER_INVENTORY: u32 = 10;

/// A sequential builder for [`EliasFanoMonotoneLongBigList`].
pub struct EliasFanoMonotoneBuilder {
    u: u64,
    n: usize,
    l: u32,
    low_bits: BitFieldVec,
    high_bits: BitVector,
    last_value: u64,
    count: usize,
}

impl EliasFanoMonotoneBuilder {
    /// Creates a builder for a monotone Elias–Fano list holding `n` values
    /// smaller than `u`.
    pub fn new(n: usize, u: u64) -> Self {
        let l = elias_fano_low_bits(n, u);
        let high_bits_len = n + (u >> l) as usize + 1;
        Self {
            u,
            n,
            l,
            low_bits: BitFieldVec::new(l, n),
            high_bits: BitVector::zeroed(high_bits_len),
            last_value: 0,
            count: 0,
        }
    }

    /// Adds the next value, which must be `>=` the previously pushed value
    /// and `< u`.
    pub fn push(&mut self, value: u64) -> Result<()> {
        if self.count == self.n {
            return Err(BuildError::InvalidInput(format!(
                "too many values pushed to EliasFanoMonotoneBuilder: expected {}",
                self.n
            ))
            .into());
        }
        if value >= self.u {
            return Err(BuildError::InvalidInput(format!(
                "value too large: {value} >= {}",
                self.u
            ))
            .into());
        }
        if value < self.last_value {
            return Err(BuildError::InvalidInput(format!(
                "values given to EliasFanoMonotoneBuilder are not monotone: {value} < {}",
                self.last_value
            ))
            .into());
        }
        // SAFETY: the checks above establish the preconditions.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// # Safety
    /// `value` must be `< u` and `>=` the last value pushed, and this
    /// method must not be called more than `n` times.
    pub unsafe fn push_unchecked(&mut self, value: u64) {
        let low = value & ((1u64 << self.l) - 1);
        self.low_bits.set(self.count, low);

        let high = (value >> self.l) as usize + self.count;
        self.high_bits.set(high, true);

        self.count += 1;
        self.last_value = value;
    }

    /// Consumes the builder, building the select index over the upper-bits
    /// array.
    ///
    /// # Panics
    /// Panics if fewer than `n` values were pushed.
    pub fn build(self) -> EliasFanoMonotoneLongBigList {
        assert_eq!(
            self.count, self.n,
            "EliasFanoMonotoneBuilder::build called with {} of {} values pushed",
            self.count, self.n
        );
        log::trace!(
            "sealing EliasFanoMonotoneLongBigList: n={} u={} l={}",
            self.n,
            self.u,
            self.l
        );
        let select_upper = SimpleSelect::new(self.high_bits, SELECT_LOG2_ONES_PER_INVENTORY);
        EliasFanoMonotoneLongBigList {
            u: self.u,
            n: self.n,
            l: self.l,
            low_bits: self.low_bits,
            select_upper,
        }
    }
}

/// A compressed list of a non-decreasing sequence of `u64`s, built with
/// the Elias–Fano representation of monotone sequences.
///
/// Each value `v[i]` is split into `ℓ = max(0, ⌊log₂(u/n)⌋)` low bits,
/// packed contiguously in a [`BitFieldVec`], and a high part `v[i] >> ℓ`
/// encoded as a unary run in a bit vector of length `n + u >> ℓ + 1`: a
/// 1-bit at position `(v[i] >> ℓ) + i`. This guarantees exactly `n`
/// 1-bits, and the number of 0-bits before the `i`-th 1-bit equals
/// `v[i] >> ℓ`, so `get` needs only a single `select₁` plus a fixed-width
/// extraction.
///
/// # Examples
///
/// ```rust
/// use effano::dict::elias_fano_monotone::EliasFanoMonotoneBuilder;
///
/// let mut efb = EliasFanoMonotoneBuilder::new(5, 16);
/// for v in [0u64, 3, 7, 7, 15] {
///     efb.push(v).unwrap();
/// }
/// let ef = efb.build();
/// assert_eq!(ef.get(0), 0);
/// assert_eq!(ef.get(2), 7);
/// assert_eq!(ef.get(4), 15);
/// ```
#[derive(Debug, Clone)]
pub struct EliasFanoMonotoneLongBigList {
    u: u64,
    n: usize,
    l: u32,
    low_bits: BitFieldVec,
    select_upper: SimpleSelect,
}

impl EliasFanoMonotoneLongBigList {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The declared upper bound on the stored values.
    #[inline(always)]
    pub fn upper_bound(&self) -> u64 {
        self.u
    }

    /// The number of low bits each value is split into.
    #[inline(always)]
    pub fn low_bit_width(&self) -> u32 {
        self.l
    }

    /// Returns the value at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> u64 {
        assert!(i < self.n, "index {i} out of bounds (len = {})", self.n);
        // SAFETY: just checked.
        unsafe { self.get_unchecked(i) }
    }

    /// # Safety
    /// `i` must be smaller than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize) -> u64 {
        let pos = self.select_upper.select_unchecked(i);
        let upper = (pos - i) as u64;
        let low = self.low_bits.get_unchecked(i);
        (upper << self.l) | low
    }

    /// Reference to the select index over the upper-bits array; used by
    /// [`super::elias_fano_indexed::EliasFanoIndexedMonotoneLongBigList`]
    /// to build its zero-select structure over the same words.
    #[inline(always)]
    pub fn select_upper(&self) -> &SimpleSelect {
        &self.select_upper
    }

    /// Reference to the packed low bits array.
    #[inline(always)]
    pub fn low_bits(&self) -> &BitFieldVec {
        &self.low_bits
    }
}
