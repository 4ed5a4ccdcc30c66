/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Low-level bit-sequence storage.

pub mod bit_vector;
pub use bit_vector::BitVector;
