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

const SUB_SAMPLES: usize = 8;

/// A constant-time select₀ structure over a [`BitVector`].
///
/// Conceptually the same broadword inventory technique as [`SimpleSelect`]
/// applied to the complement of the bit vector: in practice the underlying
/// words are never actually complemented, every `count_ones` test is
/// simply read as a `count_zeros` test instead.
///
/// [`SimpleSelect`]: super::SimpleSelect
///
/// # Examples
///
/// ```rust
/// use effano::bits::BitVector;
/// use effano::rank_sel::SimpleSelectZero;
///
/// let mut bits = BitVector::new();
/// for b in [1u64, 0, 1, 1, 0, 1, 0, 1] {
///     bits.append(b, 1);
/// }
/// let select = SimpleSelectZero::new(bits, 3);
/// assert_eq!(select.select_zero(0), Some(1));
/// assert_eq!(select.select_zero(1), Some(4));
/// assert_eq!(select.select_zero(2), Some(6));
/// assert_eq!(select.select_zero(3), None);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleSelectZero {
    bits: BitVector,
    subinventory: Vec<usize>,
    num_zeros: usize,
    zeros_per_sub_quantum: usize,
}

impl SimpleSelectZero {
    pub fn new(bits: BitVector, log2_zeros_per_inventory: u32) -> Self {
        let zeros_per_inventory = 1usize << log2_zeros_per_inventory;
        let zeros_per_sub_quantum = (zeros_per_inventory / SUB_SAMPLES).max(1);

        let len = bits.len();
        let num_ones: usize = bits.words().iter().map(|w| w.count_ones() as usize).sum();
        let num_zeros = len - num_ones;
        let num_sub_quanta = num_zeros.div_ceil(zeros_per_sub_quantum);
        log::debug!(
            "building SimpleSelectZero over {len} bits, {num_zeros} zeros, {num_sub_quanta} sub-quanta"
        );

        let mut subinventory = Vec::with_capacity(num_sub_quanta + 1);
        let mut past_zeros = 0usize;
        let mut next_quantum = 0usize;

        for (i, &raw_word) in bits.words().iter().enumerate() {
            let word = !raw_word;
            let zeros_in_word = word.count_ones() as usize;
            while past_zeros + zeros_in_word > next_quantum {
                let in_word_index = select_in_word(word, next_quantum - past_zeros);
                let index = i * u64::BITS as usize + in_word_index;
                if index >= len {
                    break;
                }
                subinventory.push(index);
                next_quantum += zeros_per_sub_quantum;
            }
            past_zeros += zeros_in_word;
        }
        subinventory.push(len);

        Self {
            bits,
            subinventory,
            num_zeros,
            zeros_per_sub_quantum,
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
    pub fn num_zeros(&self) -> usize {
        self.num_zeros
    }

    #[inline(always)]
    pub fn bit_vector(&self) -> &BitVector {
        &self.bits
    }

    /// Returns the position of the `rank`-th 0-bit (0-indexed), or `None`
    /// if there are fewer than `rank + 1` zeros.
    #[inline(always)]
    pub fn select_zero(&self, rank: usize) -> Option<usize> {
        if rank >= self.num_zeros {
            None
        } else {
            // SAFETY: rank < num_zeros was just checked.
            Some(unsafe { self.select_zero_unchecked(rank) })
        }
    }

    /// # Safety
    /// `rank` must be smaller than [`SimpleSelectZero::num_zeros`].
    #[inline(always)]
    pub unsafe fn select_zero_unchecked(&self, rank: usize) -> usize {
        let quantum_index = rank / self.zeros_per_sub_quantum;
        let rank_at_pos = quantum_index * self.zeros_per_sub_quantum;
        let pos = self.subinventory[quantum_index];
        self.select_zero_from_hint(rank, pos, rank_at_pos)
    }

    #[inline(always)]
    fn select_zero_from_hint(&self, rank: usize, pos: usize, rank_at_pos: usize) -> usize {
        let mut word_index = pos / u64::BITS as usize;
        let bit_index = pos % u64::BITS as usize;
        let mut residual = rank - rank_at_pos;
        let mut word = (!self.bits.words()[word_index] >> bit_index) << bit_index;
        loop {
            let bit_count = word.count_ones() as usize;
            if residual < bit_count {
                break;
            }
            word_index += 1;
            word = !self.bits.words()[word_index];
            residual -= bit_count;
        }
        word_index * u64::BITS as usize + select_in_word(word, residual)
    }
}
