/*
 *
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

A two-bucket compressed list: values below a chosen threshold ("small")
are packed at a narrow fixed width, values at or above it ("large") at
the full width the largest value needs, and a [`Rank9`]-accelerated
marker bit vector routes each index to its bucket.

The threshold is chosen to minimize total bit usage: the optimum can
always be found by scanning every candidate cut point once the input is
sorted. If no cut beats storing everything at the full width, the list
degenerates to a single uniform-width bucket with no marker at all.

*/

use dsi_progress_logger::ProgressLog;

use super::bit_field_vec::BitFieldVec;
use crate::bits::BitVector;
use crate::fast::msb_unchecked;
use crate::rank_sel::Rank9;

#[inline(always)]
fn bit_length(value: u64) -> u32 {
    if value == 0 {
        0
    } else {
        msb_unchecked(value) + 1
    }
}

/// A sequential builder for [`TwoSizesLongBigList`].
#[derive(Default)]
pub struct TwoSizesLongBigListBuilder {
    values: Vec<u64>,
}

impl TwoSizesLongBigListBuilder {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    pub fn build(self) -> TwoSizesLongBigList {
        self.build_with_progress(&mut dsi_progress_logger::no_logging![])
    }

    /// Builds the list, reporting the threshold sweep's progress through
    /// `pl`.
    pub fn build_with_progress(self, pl: &mut impl ProgressLog) -> TwoSizesLongBigList {
        let n = self.values.len();
        if n == 0 {
            return TwoSizesLongBigList::Uniform {
                values: BitFieldVec::new(0, 0),
            };
        }

        let max_value = *self.values.iter().max().unwrap();
        let w = bit_length(max_value).max(1);
        log::debug!("sweeping TwoSizesLongBigList threshold over {n} values, w={w}");

        let mut sorted = self.values.clone();
        sorted.sort_unstable();

        // The baseline is "no split": every value at the full width w,
        // with no marker bit at all. This is cheaper than any split whose
        // cost is dominated by the per-value marker-bit tax, which is why
        // it is the degenerate case when it wins the sweep below.
        let mut best_s = w;
        let mut best_cost = n as u64 * w as u64;

        pl.start("Sweeping TwoSizesLongBigList threshold...");
        for s in 1..w {
            let threshold = 1u64 << s;
            let count_lt = sorted.partition_point(|&v| v < threshold) as u64;
            let count_ge = n as u64 - count_lt;
            // Each cost is recomputed from the sorted cut point rather than
            // updated incrementally from the previous s, so there is no
            // running total whose exact divisibility by s needs tracking.
            let cost_small = count_lt * (s as u64 + 1);
            let cost_large = count_ge * w as u64;
            if cost_small + cost_large < best_cost {
                best_cost = cost_small + cost_large;
                best_s = s;
            }
            pl.light_update();
        }
        pl.done();

        log::debug!("TwoSizesLongBigList threshold sweep chose s={best_s} (w={w})");

        if best_s == w {
            let mut values = BitFieldVec::new(w, n);
            for (i, &v) in self.values.iter().enumerate() {
                values.set(i, v);
            }
            return TwoSizesLongBigList::Uniform { values };
        }

        let s = best_s;
        let threshold = 1u64 << s;
        let count_lt = sorted.partition_point(|&v| v < threshold);
        let count_ge = n - count_lt;

        let mut small = BitFieldVec::new(s, count_lt);
        let mut large = BitFieldVec::new(w, count_ge);
        let mut marker = BitVector::zeroed(n);
        let mut small_idx = 0usize;
        let mut large_idx = 0usize;
        for (i, &v) in self.values.iter().enumerate() {
            if v >= threshold {
                marker.set(i, true);
                large.set(large_idx, v);
                large_idx += 1;
            } else {
                small.set(small_idx, v);
                small_idx += 1;
            }
        }
        debug_assert_eq!(small_idx, count_lt);
        debug_assert_eq!(large_idx, count_ge);

        TwoSizesLongBigList::Split {
            small,
            large,
            rank: Rank9::new(marker),
            width_small: s,
        }
    }
}

/// A compressed list of non-negative longs, bucketed into a narrow "small"
/// and a full-width "large" width.
///
/// # Examples
///
/// ```rust
/// use effano::dict::two_sizes::TwoSizesLongBigListBuilder;
///
/// let mut tsb = TwoSizesLongBigListBuilder::new();
/// for v in [1u64, 1_000_000, 2, 3, 999_999] {
///     tsb.push(v);
/// }
/// let ts = tsb.build();
/// assert_eq!((0..5).map(|i| ts.get(i)).collect::<Vec<_>>(), vec![1, 1_000_000, 2, 3, 999_999]);
/// ```
#[derive(Debug, Clone)]
pub enum TwoSizesLongBigList {
    /// The optimal cut coincided with the full width: every value is
    /// stored at width `values.bit_width()` with no marker.
    Uniform { values: BitFieldVec },
    /// Values below `2^width_small` live in `small` at that width; the
    /// rest live in `large` at the full width, routed by `rank`.
    Split {
        small: BitFieldVec,
        large: BitFieldVec,
        rank: Rank9,
        width_small: u32,
    },
}

impl TwoSizesLongBigList {
    pub fn len(&self) -> usize {
        match self {
            TwoSizesLongBigList::Uniform { values } => values.len(),
            TwoSizesLongBigList::Split { rank, .. } => rank.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn get(&self, i: usize) -> u64 {
        match self {
            TwoSizesLongBigList::Uniform { values } => values.get(i),
            TwoSizesLongBigList::Split {
                small, large, rank, ..
            } => {
                assert!(i < rank.len(), "index {i} out of bounds (len = {})", rank.len());
                if rank.bit_vector().bit_at(i) {
                    large.get(rank.rank(i))
                } else {
                    small.get(i - rank.rank(i))
                }
            }
        }
    }
}
