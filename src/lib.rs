/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Succinct immutable sequences of non-negative integers based on the
//! Elias–Fano representation of monotone sequences.
//!
//! Three families cover the whole space of inputs:
//!
//! - [`dict::EliasFanoMonotoneLongBigList`] and its indexed extension
//!   [`dict::EliasFanoIndexedMonotoneLongBigList`] for non-decreasing
//!   sequences, the latter adding predecessor/successor-style queries.
//! - [`dict::EliasFanoLongBigList`] for arbitrary (non-monotone)
//!   sequences, via a prefix-sum border trick.
//! - [`dict::TwoSizesLongBigList`] for sequences dominated by a narrow
//!   range of values with a few outliers, via a two-width bucket split.
//!
//! Every structure is build-once, query-many: construction consumes a
//! finite input and materializes packed bit arrays plus whatever
//! rank/select index the structure needs; queries afterwards never
//! allocate and never fail except via documented out-of-bounds
//! preconditions.

#![deny(unconditional_recursion)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("`target_pointer_width` must be 64");

pub mod bits;
pub mod dict;
pub mod error;
pub mod fast;
pub mod rank_sel;

pub mod prelude {
    pub use crate::bits::*;
    pub use crate::dict::*;
    pub use crate::error::*;
    pub use crate::rank_sel::*;
}
