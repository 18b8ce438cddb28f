// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered record of where each item was packed.

use alloc::vec::Vec;

use crate::grid::OccupationGrid;
use crate::types::{Placement, Weight};

/// Placements in item order; entry `i` belongs to item `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementCache {
    placements: Vec<Placement>,
}

impl PlacementCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Number of cached placements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The placement of item `index`, if cached.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// All placements in item order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    /// The cached weight of every item, in order.
    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.placements.iter().map(|p| p.weight)
    }

    /// Appends the placement of the next item.
    pub fn push(&mut self, placement: Placement) {
        debug_assert_eq!(
            placement.index,
            self.placements.len(),
            "placements must be appended in item order"
        );
        self.placements.push(placement);
    }

    /// Drops every placement.
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Frees the grid cells of every placement from `index` on and truncates
    /// the cache to `index` entries.
    ///
    /// Afterwards the grid's cursor sits at or above the highest freed row and
    /// trailing empty rows are gone, so packing can resume at `index` as if the
    /// dropped items had never been placed.
    pub fn roll_back(&mut self, index: usize, grid: &mut OccupationGrid) {
        if index >= self.placements.len() {
            return;
        }
        let mut lowest_row = grid.first_vacant_row();
        for placement in &self.placements[index..] {
            grid.clear_rect(placement.origin, placement.weight);
            lowest_row = lowest_row.min(placement.origin.row);
        }
        grid.lower_first_vacant_row(lowest_row);
        grid.trim_trailing_vacant_rows(grid.first_vacant_row());
        self.placements.truncate(index);
    }
}
