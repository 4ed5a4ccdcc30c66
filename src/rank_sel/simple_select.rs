/*
 *
 * SPDX-FileCopyrightText: 2024 Michele Andreata
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::bits::BitVector;
use crate::fast::select_in_word;

/// Number of sub-inventory samples per top-level inventory entry.
const SUB_SAMPLES: usize = 8;

/// A constant-time select₁ structure over a [`BitVector`], using Vigna's
/// broadword two-level inventory technique.
///
/// A top-level inventory samples the bit position of one out of every
/// `2^log2_ones_per_inventory` ones; each top-level block is further
/// divided into [`SUB_SAMPLES`] equal sub-quanta, each recording the exact
/// bit position of its first one. A query looks up the sub-inventory entry
/// closest to (and not after) the target rank, then finishes with a short
/// linear, word-at-a-time scan using in-word select.
///
/// # Examples
///
/// ```rust
/// use effano::bits::BitVector;
/// use effano::rank_sel::SimpleSelect;
///
/// let mut bits = BitVector::new();
/// for b in [1u64, 0, 1, 1, 0, 1, 0, 1] {
///     bits.append(b, 1);
/// }
/// let select = SimpleSelect::new(bits, 3);
/// assert_eq!(select.select(0), Some(0));
/// assert_eq!(select.select(1), Some(2));
/// assert_eq!(select.select(4), Some(7));
/// assert_eq!(select.select(5), None);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleSelect {
    bits: BitVector,
    /// Absolute bit position of the first one of sub-quantum `i`, for
    /// `i` in `0..num_sub_quanta`. The very last entry is a sentinel equal
    /// to `bits.len()`.
    subinventory: Vec<usize>,
    num_ones: usize,
    ones_per_sub_quantum: usize,
}

impl SimpleSelect {
    /// Builds a select structure over `bits`, sampling a top-level
    /// inventory entry every `2^log2_ones_per_inventory` ones (subdivided
    /// into [`SUB_SAMPLES`] finer samples). A smaller value trades space
    /// for speed; choose it from the bit vector's expected density, as the
    /// teacher's own doc comments recommend.
    pub fn new(bits: BitVector, log2_ones_per_inventory: u32) -> Self {
        let ones_per_inventory = 1usize << log2_ones_per_inventory;
        let ones_per_sub_quantum = (ones_per_inventory / SUB_SAMPLES).max(1);

        let num_ones: usize = bits.words().iter().map(|w| w.count_ones() as usize).sum();
        let num_sub_quanta = num_ones.div_ceil(ones_per_sub_quantum);
        log::debug!(
            "building SimpleSelect over {} bits, {num_ones} ones, {num_sub_quanta} sub-quanta",
            bits.len()
        );

        let mut subinventory = Vec::with_capacity(num_sub_quanta + 1);
        let mut past_ones = 0usize;
        let mut next_quantum = 0usize;

        for (i, &word) in bits.words().iter().enumerate() {
            let ones_in_word = word.count_ones() as usize;
            while past_ones + ones_in_word > next_quantum {
                let in_word_index = select_in_word(word, next_quantum - past_ones);
                let index = i * u64::BITS as usize + in_word_index;
                subinventory.push(index);
                next_quantum += ones_per_sub_quantum;
            }
            past_ones += ones_in_word;
        }
        debug_assert_eq!(num_ones, past_ones);
        subinventory.push(bits.len());

        Self {
            bits,
            subinventory,
            num_ones,
            ones_per_sub_quantum,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn num_ones(&self) -> usize {
        self.num_ones
    }

    /// Returns a reference to the underlying bit vector.
    #[inline(always)]
    pub fn bit_vector(&self) -> &BitVector {
        &self.bits
    }

    /// Raw 64-bit words of the underlying bit vector, exposed so clients
    /// needing tight sequential scans (e.g. the indexed monotone list) can
    /// read them directly without an extra indirection.
    #[inline(always)]
    pub fn bits(&self) -> &[u64] {
        self.bits.words()
    }

    /// Returns the position of the `rank`-th 1-bit (0-indexed), or `None`
    /// if there are fewer than `rank + 1` ones.
    #[inline(always)]
    pub fn select(&self, rank: usize) -> Option<usize> {
        if rank >= self.num_ones {
            None
        } else {
            // SAFETY: rank < num_ones was just checked.
            Some(unsafe { self.select_unchecked(rank) })
        }
    }

    /// # Safety
    /// `rank` must be smaller than [`SimpleSelect::num_ones`].
    #[inline(always)]
    pub unsafe fn select_unchecked(&self, rank: usize) -> usize {
        let quantum_index = rank / self.ones_per_sub_quantum;
        let rank_at_pos = quantum_index * self.ones_per_sub_quantum;
        let pos = self.subinventory[quantum_index];
        self.select_from_hint(rank, pos, rank_at_pos)
    }

    /// Linear scan starting at bit position `pos`, which is known to have
    /// rank `rank_at_pos`.
    #[inline(always)]
    fn select_from_hint(&self, rank: usize, pos: usize, rank_at_pos: usize) -> usize {
        let mut word_index = pos / u64::BITS as usize;
        let bit_index = pos % u64::BITS as usize;
        let mut residual = rank - rank_at_pos;
        let mut word = (self.bits.words()[word_index] >> bit_index) << bit_index;
        loop {
            let bit_count = word.count_ones() as usize;
            if residual < bit_count {
                break;
            }
            word_index += 1;
            word = self.bits.words()[word_index];
            residual -= bit_count;
        }
        word_index * u64::BITS as usize + select_in_word(word, residual)
    }
}
