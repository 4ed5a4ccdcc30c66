/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Succinct sequence types built on [`crate::bits`] and [`crate::rank_sel`].

pub mod bit_field_vec;
pub mod elias_fano_indexed;
pub mod elias_fano_long_big_list;
pub mod elias_fano_monotone;
pub mod two_sizes;

pub use bit_field_vec::BitFieldVec;
pub use elias_fano_indexed::{EliasFanoIndexedMonotoneBuilder, EliasFanoIndexedMonotoneLongBigList, Hit};
pub use elias_fano_long_big_list::{EliasFanoLongBigList, EliasFanoLongBigListBuilder};
pub use elias_fano_monotone::{EliasFanoMonotoneBuilder, EliasFanoMonotoneLongBigList};
pub use two_sizes::{TwoSizesLongBigList, TwoSizesLongBigListBuilder};
