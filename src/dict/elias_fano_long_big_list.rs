/*
 *
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

A compressed list of arbitrary (non-monotone) non-negative longs.

Each value is shifted by a constant offset so it is always `>= 1`, giving
it a well-defined most-significant bit; that bit is left implicit and the
remaining low bits are packed contiguously into a single [`BitVector`].
The cumulative bit offsets ("borders") of each value are themselves stored
as a monotone Elias–Fano list, so random access costs one border-list
lookup (itself O(1)) plus a fixed-width bit extraction.

*/

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dsi_progress_logger::{no_logging, ProgressLog};
use tempfile::NamedTempFile;

use super::elias_fano_monotone::{EliasFanoMonotoneBuilder, EliasFanoMonotoneLongBigList};
use crate::bits::BitVector;
use crate::error::BuildError;
use crate::fast::msb_unchecked;

enum BorderSink {
    InMemory(Vec<u64>),
    /// The `NamedTempFile` is kept alive (rather than `keep()`-ed into a
    /// bare path) so its `Drop` impl deletes the file on every exit path,
    /// including an early `?` out of construction. No explicit
    /// `remove_file` call needs remembering on each branch.
    Offline {
        writer: BufWriter<NamedTempFile>,
    },
}

impl BorderSink {
    fn push(&mut self, value: u64) -> Result<()> {
        match self {
            BorderSink::InMemory(v) => v.push(value),
            BorderSink::Offline { writer } => {
                writer
                    .write_all(&value.to_ne_bytes())
                    .map_err(|e| BuildError::IoFailure(e.to_string()))?;
            }
        }
        Ok(())
    }
}

/// A sequential builder for [`EliasFanoLongBigList`].
///
/// Values must each be `>= lower_bound`; they need not be sorted.
pub struct EliasFanoLongBigListBuilder {
    lower_bound: i64,
    bits: BitVector,
    borders: BorderSink,
    n: usize,
    running_total: u64,
    max_border: u64,
}

impl EliasFanoLongBigListBuilder {
    /// Creates an in-memory builder. The borders accumulator lives in a
    /// plain `Vec`; appropriate for inputs whose border array comfortably
    /// fits in memory.
    pub fn new(lower_bound: i64) -> Self {
        Self {
            lower_bound,
            bits: BitVector::new(),
            borders: BorderSink::InMemory(vec![0]),
            n: 0,
            running_total: 0,
            max_border: 0,
        }
    }

    /// Creates a builder that streams borders to a temporary file instead
    /// of materializing them in memory, replaying the file into the
    /// Elias–Fano border list at [`EliasFanoLongBigListBuilder::build`]
    /// time. Useful when `n` is large enough that the raw border array
    /// itself would be a significant allocation.
    pub fn new_offline(lower_bound: i64) -> Result<Self> {
        let tmp = NamedTempFile::new()
            .map_err(|e| BuildError::IoFailure(e.to_string()))
            .context("creating offline borders tempfile")?;
        let mut writer = BufWriter::new(tmp);
        writer
            .write_all(&0u64.to_ne_bytes())
            .map_err(|e| BuildError::IoFailure(e.to_string()))?;
        Ok(Self {
            lower_bound,
            bits: BitVector::new(),
            borders: BorderSink::Offline { writer },
            n: 0,
            running_total: 0,
            max_border: 0,
        })
    }

    /// Appends the next value. `value` must be `>= lower_bound`; values
    /// need not be sorted relative to each other.
    pub fn push(&mut self, value: i64) -> Result<()> {
        if value < self.lower_bound {
            return Err(BuildError::InvalidInput(format!(
                "value {} is below the configured lower bound {}",
                value, self.lower_bound
            ))
            .into());
        }
        let shifted_wide = value as i128 - self.lower_bound as i128 + 1;
        if shifted_wide > u64::MAX as i128 {
            return Err(BuildError::CapacityExceeded(format!(
                "value {} is too far above lower bound {} to represent",
                value, self.lower_bound
            ))
            .into());
        }
        let shifted = shifted_wide as u64;
        let m = msb_unchecked(shifted);
        self.bits.append(shifted, m);
        self.running_total += m as u64;
        self.borders.push(self.running_total)?;
        self.max_border = self.max_border.max(self.running_total);
        self.n += 1;
        Ok(())
    }

    /// Seals the list, building the Elias–Fano border index.
    pub fn build(self) -> Result<EliasFanoLongBigList> {
        self.build_with_progress(&mut no_logging![])
    }

    /// Seals the list, reporting progress on the border-replay pass
    /// through `pl`.
    pub fn build_with_progress(self, pl: &mut impl ProgressLog) -> Result<EliasFanoLongBigList> {
        let n = self.n;
        let u = self.max_border + 1;
        log::debug!("sealing EliasFanoLongBigList borders: n={n} max_border={}", self.max_border);
        let mut builder = EliasFanoMonotoneBuilder::new(n + 1, u);

        pl.start("Sealing EliasFanoLongBigList borders...");
        match self.borders {
            BorderSink::InMemory(borders) => {
                for b in borders {
                    builder.push(b)?;
                    pl.light_update();
                }
            }
            BorderSink::Offline { mut writer } => {
                writer
                    .flush()
                    .map_err(|e| BuildError::IoFailure(e.to_string()))?;
                let tmp = writer
                    .into_inner()
                    .map_err(|e| BuildError::IoFailure(e.to_string()))?;
                replay_offline_borders(tmp.path(), n + 1, &mut builder, pl)?;
                // `tmp` is dropped here (or, on an early `?` above, when
                // this function returns), deleting the backing file via
                // `NamedTempFile`'s own `Drop` impl.
            }
        }
        pl.done();

        Ok(EliasFanoLongBigList {
            lower_bound: self.lower_bound,
            bits: self.bits,
            borders: builder.build(),
            len: n,
        })
    }
}

fn replay_offline_borders(
    path: &Path,
    count: usize,
    builder: &mut EliasFanoMonotoneBuilder,
    pl: &mut impl ProgressLog,
) -> Result<()> {
    let file = File::open(path).map_err(|e| BuildError::IoFailure(e.to_string()))?;
    let mut reader = BufReader::new(file);
    let mut buf = [0u8; 8];
    for _ in 0..count {
        reader
            .read_exact(&mut buf)
            .map_err(|e| BuildError::IoFailure(e.to_string()))?;
        builder.push(u64::from_ne_bytes(buf))?;
        pl.light_update();
    }
    Ok(())
}

/// A compressed list of arbitrary (non-monotone) non-negative longs.
///
/// # Examples
///
/// ```rust
/// use effano::dict::elias_fano_long_big_list::EliasFanoLongBigListBuilder;
///
/// let mut efb = EliasFanoLongBigListBuilder::new(0);
/// for v in [5i64, 0, 12, 3, 5] {
///     efb.push(v).unwrap();
/// }
/// let ef = efb.build().unwrap();
/// assert_eq!((0..5).map(|i| ef.get(i)).collect::<Vec<_>>(), vec![5, 0, 12, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct EliasFanoLongBigList {
    lower_bound: i64,
    bits: BitVector,
    borders: EliasFanoMonotoneLongBigList,
    len: usize,
}

impl EliasFanoLongBigList {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    /// Returns the value at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn get(&self, i: usize) -> i64 {
        assert!(i < self.len, "index {i} out of bounds (len = {})", self.len);
        let from = self.borders.get(i) as usize;
        let to = self.borders.get(i + 1) as usize;
        let width = (to - from) as u32;
        let shifted = if width == 0 {
            1
        } else {
            (1u64 << width) | self.bits.get_bits(from, to)
        };
        shifted as i64 + self.lower_bound - 1
    }

    /// Decodes `length` consecutive values starting at `start_index` into
    /// `dest[dest_offset..dest_offset + length]`, amortizing the border
    /// lookups across the run rather than repeating them per element.
    ///
    /// # Panics
    /// Panics if the requested range is out of bounds.
    pub fn get_bulk(&self, start_index: usize, dest: &mut [i64], dest_offset: usize, length: usize) {
        assert!(start_index + length <= self.len);
        assert!(dest_offset + length <= dest.len());
        if length == 0 {
            return;
        }
        let mut from = self.borders.get(start_index) as usize;
        for k in 0..length {
            let to = self.borders.get(start_index + k + 1) as usize;
            let width = (to - from) as u32;
            let shifted = if width == 0 {
                1
            } else {
                (1u64 << width) | self.bits.get_bits(from, to)
            };
            dest[dest_offset + k] = shifted as i64 + self.lower_bound - 1;
            from = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_scenario() {
        let mut efb = EliasFanoLongBigListBuilder::new(0);
        for v in [5i64, 0, 12, 3, 5] {
            efb.push(v).unwrap();
        }
        let ef = efb.build().unwrap();
        assert_eq!(
            (0..5).map(|i| ef.get(i)).collect::<Vec<_>>(),
            vec![5, 0, 12, 3, 5]
        );
    }

    #[test]
    fn test_negative_lower_bound() {
        let mut efb = EliasFanoLongBigListBuilder::new(-10);
        for v in [-10i64, -3, 0, 7, -10] {
            efb.push(v).unwrap();
        }
        let ef = efb.build().unwrap();
        assert_eq!(
            (0..5).map(|i| ef.get(i)).collect::<Vec<_>>(),
            vec![-10, -3, 0, 7, -10]
        );
    }

    #[test]
    fn test_rejects_below_lower_bound() {
        let mut efb = EliasFanoLongBigListBuilder::new(5);
        assert!(efb.push(4).is_err());
    }

    #[test]
    fn test_empty() {
        let efb = EliasFanoLongBigListBuilder::new(0);
        let ef = efb.build().unwrap();
        assert!(ef.is_empty());
    }

    #[test]
    fn test_get_bulk_matches_get() {
        let mut efb = EliasFanoLongBigListBuilder::new(0);
        let values = [5i64, 0, 12, 3, 5, 100, 1, 0, 64, 9];
        for &v in &values {
            efb.push(v).unwrap();
        }
        let ef = efb.build().unwrap();
        let mut dest = vec![0i64; values.len()];
        ef.get_bulk(0, &mut dest, 0, values.len());
        assert_eq!(dest, values);
    }

    #[test]
    fn test_offline_matches_in_memory() {
        let values = [5i64, 0, 12, 3, 5, 1000, 1];

        let mut online = EliasFanoLongBigListBuilder::new(0);
        for &v in &values {
            online.push(v).unwrap();
        }
        let online = online.build().unwrap();

        let mut offline = EliasFanoLongBigListBuilder::new_offline(0).unwrap();
        for &v in &values {
            offline.push(v).unwrap();
        }
        let offline = offline.build().unwrap();

        for i in 0..values.len() {
            assert_eq!(online.get(i), offline.get(i));
        }
    }

    #[test]
    fn test_random_round_trip() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(11);
        for n in [0usize, 1, 2, 50, 500] {
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..1_000_000)).collect();
            let mut efb = EliasFanoLongBigListBuilder::new(0);
            for &v in &values {
                efb.push(v).unwrap();
            }
            let ef = efb.build().unwrap();
            for (i, &v) in values.iter().enumerate() {
                assert_eq!(ef.get(i), v);
            }
        }
    }
}
