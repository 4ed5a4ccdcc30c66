/*
 *
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

An [`EliasFanoMonotoneLongBigList`] enriched with a select-zero index over
its upper-bits array, giving predecessor/successor-style queries in O(1)
time plus the cost of one `select₀`.

This composes rather than inherits: [`EliasFanoIndexedMonotoneLongBigList`]
owns the underlying [`EliasFanoMonotoneLongBigList`] and builds its
zero-select structure over a copy of the same upper-bits words (the
teacher's C-style pointer sharing between the two layers is replaced here
by plain ownership, since a build-once, read-many structure has no need
for the aliasing).

Every query returns a [`Hit`] record carrying both the value and its
index, rather than mutating a shared `current_index` field. This is the
one piece of the original design this crate intentionally does not
reproduce (see the crate's design notes): query-local mutable state is the
only thread-unsafe corner of the whole family, and returning a small
struct removes it at no runtime cost.

*/

use super::elias_fano_monotone::EliasFanoMonotoneBuilder;
use super::elias_fano_monotone::EliasFanoMonotoneLongBigList;
use crate::rank_sel::SimpleSelectZero;
use anyhow::Result;

/// How many zeros to sample per select-zero inventory entry.
const SELECT_ZERO_LOG2_ONES_PER_INVENTORY: u32 = 10;

/// The outcome of a predecessor/successor-family query: the value found,
/// paired with the index in the sequence that realized it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub value: u64,
    pub index: usize,
}

/// A sequential builder for [`EliasFanoIndexedMonotoneLongBigList`],
/// identical in use to [`EliasFanoMonotoneBuilder`].
pub struct EliasFanoIndexedMonotoneBuilder {
    inner: EliasFanoMonotoneBuilder,
}

impl EliasFanoIndexedMonotoneBuilder {
    pub fn new(n: usize, u: u64) -> Self {
        Self {
            inner: EliasFanoMonotoneBuilder::new(n, u),
        }
    }

    pub fn push(&mut self, value: u64) -> Result<()> {
        self.inner.push(value)
    }

    pub fn build(self) -> EliasFanoIndexedMonotoneLongBigList {
        EliasFanoIndexedMonotoneLongBigList::new(self.inner.build())
    }
}

/// An [`EliasFanoMonotoneLongBigList`] with predecessor/successor support.
///
/// # Examples
///
/// ```rust
/// use effano::dict::elias_fano_indexed::EliasFanoIndexedMonotoneBuilder;
///
/// let mut efb = EliasFanoIndexedMonotoneBuilder::new(5, 16);
/// for v in [0u64, 3, 7, 7, 15] {
///     efb.push(v).unwrap();
/// }
/// let ef = efb.build();
/// let hit = ef.successor(4).unwrap();
/// assert_eq!(hit.value, 7);
/// assert_eq!(hit.index, 2);
/// assert_eq!(ef.predecessor(7).unwrap().value, 3);
/// assert_eq!(ef.weak_predecessor(7).unwrap().value, 7);
/// assert!(!ef.contains(8));
/// ```
#[derive(Debug, Clone)]
pub struct EliasFanoIndexedMonotoneLongBigList {
    ef: EliasFanoMonotoneLongBigList,
    select_upper_zero: SimpleSelectZero,
    first_element: Option<u64>,
    last_element: Option<u64>,
}

impl EliasFanoIndexedMonotoneLongBigList {
    /// Wraps an already-built monotone list with a zero-select index.
    pub fn new(ef: EliasFanoMonotoneLongBigList) -> Self {
        let upper_bits = ef.select_upper().bit_vector().clone();
        let select_upper_zero =
            SimpleSelectZero::new(upper_bits, SELECT_ZERO_LOG2_ONES_PER_INVENTORY);
        let first_element = if ef.is_empty() { None } else { Some(ef.get(0)) };
        let last_element = if ef.is_empty() {
            None
        } else {
            Some(ef.get(ef.len() - 1))
        };
        Self {
            ef,
            select_upper_zero,
            first_element,
            last_element,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ef.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ef.is_empty()
    }

    /// Returns the value at index `i`. Equivalent to
    /// [`EliasFanoMonotoneLongBigList::get`].
    #[inline(always)]
    pub fn get(&self, i: usize) -> u64 {
        self.ef.get(i)
    }

    #[inline(always)]
    pub fn first_element(&self) -> Option<u64> {
        self.first_element
    }

    #[inline(always)]
    pub fn last_element(&self) -> Option<u64> {
        self.last_element
    }

    #[inline(always)]
    fn low_mask(&self) -> u64 {
        let l = self.ef.low_bit_width();
        if l == 0 {
            0
        } else {
            (1u64 << l) - 1
        }
    }

    /// The smallest `v[j] >= lower_bound`, or `None` if no such element
    /// exists.
    pub fn successor(&self, lower_bound: u64) -> Option<Hit> {
        let last = self.last_element?;
        if lower_bound > last {
            return None;
        }
        let l = self.ef.low_bit_width();
        let q = lower_bound >> l;
        let upper_bits = self.ef.select_upper().bit_vector();

        let pos = if q == 0 {
            0
        } else {
            self.select_upper_zero.select_zero((q - 1) as usize)? + 1
        };
        let mut j = pos - q as usize;
        let mut p = pos;

        loop {
            while !upper_bits.bit_at(p) {
                p += 1;
            }
            let candidate = ((p - j) as u64) << l | self.ef.low_bits().get(j);
            if candidate >= lower_bound {
                return Some(Hit {
                    value: candidate,
                    index: j,
                });
            }
            j += 1;
            p += 1;
        }
    }

    /// The smallest `v[j] > lower_bound`, or `None` if no such element
    /// exists.
    pub fn strict_successor(&self, lower_bound: u64) -> Option<Hit> {
        let last = self.last_element?;
        if lower_bound >= last {
            return None;
        }
        let l = self.ef.low_bit_width();
        let q = lower_bound >> l;
        let upper_bits = self.ef.select_upper().bit_vector();

        let pos = if q == 0 {
            0
        } else {
            self.select_upper_zero.select_zero((q - 1) as usize)? + 1
        };
        let mut j = pos - q as usize;
        let mut p = pos;

        loop {
            while !upper_bits.bit_at(p) {
                p += 1;
            }
            let candidate = ((p - j) as u64) << l | self.ef.low_bits().get(j);
            if candidate > lower_bound {
                return Some(Hit {
                    value: candidate,
                    index: j,
                });
            }
            j += 1;
            p += 1;
        }
    }

    /// The largest `v[j] < upper_bound`, or `None` if no such element
    /// exists.
    pub fn predecessor(&self, upper_bound: u64) -> Option<Hit> {
        let first = self.first_element?;
        if upper_bound <= first {
            return None;
        }
        let last = self.last_element.unwrap();
        if upper_bound > last {
            return Some(Hit {
                value: last,
                index: self.ef.len() - 1,
            });
        }
        let l = self.ef.low_bit_width();
        let thresh = upper_bound & self.low_mask();
        let q = upper_bound >> l;
        let upper_bits = self.ef.select_upper().bit_vector();

        let mut pos = self.select_upper_zero.select_zero(q as usize)? - 1;
        let mut r = pos - q as usize;

        loop {
            if !upper_bits.bit_at(pos) {
                break;
            }
            if self.ef.low_bits().get(r) < thresh {
                break;
            }
            r -= 1;
            pos -= 1;
        }

        let p = self.ef.select_upper().select(r)?;
        let value = ((p - r) as u64) << l | self.ef.low_bits().get(r);
        Some(Hit { value, index: r })
    }

    /// The largest `v[j] <= upper_bound`, or `None` if no such element
    /// exists.
    pub fn weak_predecessor(&self, upper_bound: u64) -> Option<Hit> {
        let first = self.first_element?;
        if upper_bound < first {
            return None;
        }
        let last = self.last_element.unwrap();
        if upper_bound >= last {
            return Some(Hit {
                value: last,
                index: self.ef.len() - 1,
            });
        }
        let l = self.ef.low_bit_width();
        let thresh = upper_bound & self.low_mask();
        let q = upper_bound >> l;
        let upper_bits = self.ef.select_upper().bit_vector();

        let mut pos = self.select_upper_zero.select_zero(q as usize)? - 1;
        let mut r = pos - q as usize;

        loop {
            if !upper_bits.bit_at(pos) {
                break;
            }
            if self.ef.low_bits().get(r) <= thresh {
                break;
            }
            r -= 1;
            pos -= 1;
        }

        let p = self.ef.select_upper().select(r)?;
        let value = ((p - r) as u64) << l | self.ef.low_bits().get(r);
        Some(Hit { value, index: r })
    }

    /// `true` iff `x` occurs in the sequence.
    pub fn contains(&self, x: u64) -> bool {
        self.successor(x).is_some_and(|hit| hit.value == x)
    }

    /// The index of the first occurrence of `x`, or `None` if it is not
    /// present.
    pub fn index_of(&self, x: u64) -> Option<usize> {
        self.successor(x)
            .and_then(|hit| (hit.value == x).then_some(hit.index))
    }
}
