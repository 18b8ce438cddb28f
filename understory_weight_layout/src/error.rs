// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by a layout pass.

use crate::types::Weight;

/// Why a [`WeightLayout::prepare`](crate::WeightLayout::prepare) call was rejected.
///
/// Both kinds are detected before the grid is touched; a failed pass leaves the
/// layout exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// An item is wider than the grid or taller than [`Weight::MAX_HEIGHT`].
    #[error("item {index} has weight {weight:?}, which does not fit {columns} column(s)")]
    InvalidWeight {
        /// Index of the first offending item.
        index: usize,
        /// The weight after clamping.
        weight: Weight,
        /// Column count of the pass.
        columns: usize,
    },
    /// The layout parameters cannot describe a grid.
    #[error("inconsistent layout parameters: {reason}")]
    InconsistentParameters {
        /// Which constraint was violated.
        reason: &'static str,
    },
}
