// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diffing a new weight sequence against cached placements.
//!
//! Placements depend on everything packed before them, so a pass only ever
//! has one divergence point: the first index whose weight changed, or the
//! first removed index when the sequence got shorter. Everything before it is
//! reused; everything from it on is re-packed.
//!
//! A divergence close to the front of the sequence would re-pack most items
//! anyway, so it is cheaper to throw the whole grid away. The cutoff is
//! [`RESET_THRESHOLD`].

use crate::types::Weight;

/// Fraction of the cached sequence within which a change triggers a full reset.
///
/// A change at index `i` resets when `i < floor(cached_len * RESET_THRESHOLD)`;
/// otherwise only the suffix from `i` is rolled back.
pub const RESET_THRESHOLD: f64 = 0.2;

/// What a call to [`WeightLayout::prepare`](crate::WeightLayout::prepare) did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Weights and parameters matched the previous pass; nothing was touched.
    Unchanged,
    /// Every placement was reused; frames were re-projected for new parameters.
    Reprojected,
    /// The cached prefix was reused and items from `from` on were appended.
    Appended {
        /// First newly packed item.
        from: usize,
    },
    /// Placements from `from` on were freed and re-packed.
    RolledBack {
        /// First re-packed item.
        from: usize,
    },
    /// The grid was cleared and every item re-packed.
    Reset,
}

/// Outcome of diffing weights against the placement cache.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Plan {
    /// Same sequence.
    Reuse,
    /// Same prefix, more items.
    Append { from: usize },
    /// Diverges at `from`, late enough to keep the prefix.
    RollBack { from: usize },
    /// Diverges too early to be worth keeping anything.
    Reset,
}

/// Decides how to bring `cached` up to date with `weights`.
pub(crate) fn plan(
    cached: impl IntoIterator<Item = Weight>,
    cached_len: usize,
    weights: &[Weight],
    reset_threshold: f64,
) -> Plan {
    let changed = cached
        .into_iter()
        .zip(weights)
        .position(|(old, &new)| old != new);
    let divergence = match changed {
        Some(index) => index,
        None if weights.len() < cached_len => weights.len(),
        None if weights.len() > cached_len => return Plan::Append { from: cached_len },
        None => return Plan::Reuse,
    };
    if divergence < reset_cutoff(cached_len, reset_threshold) {
        Plan::Reset
    } else {
        Plan::RollBack { from: divergence }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The cutoff is floored on purpose; a negative product saturates to zero."
)]
fn reset_cutoff(cached_len: usize, reset_threshold: f64) -> usize {
    (cached_len as f64 * reset_threshold) as usize
}
