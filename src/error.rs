/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Construction-time error kinds.

Query operations never fail once a structure has been built: an
out-of-bounds index is an undefined-behavior precondition violation (the
caller's responsibility, see the `*_unchecked` methods throughout the
crate), not a recoverable error. Construction, on the other hand, can
fail for a handful of well-defined reasons, collected here so call sites
can match on them instead of inspecting `anyhow::Error` messages.

*/

use std::fmt;

/// The fatal, construction-time error kinds described in the crate's
/// error-handling design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An input value was below the declared lower bound, or a monotone
    /// constructor received a decreasing pair.
    InvalidInput(String),
    /// The requested structure would need more bits than can be addressed.
    CapacityExceeded(String),
    /// An I/O failure occurred during offline construction.
    IoFailure(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            BuildError::CapacityExceeded(msg) => write!(f, "capacity exceeded: {msg}"),
            BuildError::IoFailure(msg) => write!(f, "I/O failure: {msg}"),
        }
    }
}

impl std::error::Error for BuildError {}
