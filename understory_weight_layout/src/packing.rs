// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-fit placement over an [`OccupationGrid`].
//!
//! Candidates are scanned row-major from the first vacant row: top to bottom,
//! then left to right. The first vacant rectangle of the requested weight wins.
//! There is no backtracking and no attempt to minimize height or
//! fragmentation. When nothing fits, one row is appended and the scan repeats.

use crate::grid::OccupationGrid;
use crate::types::{GridPoint, Weight};

impl OccupationGrid {
    /// Packs `weight` into the first vacant rectangle and marks it occupied.
    ///
    /// Returns `None`, leaving the grid untouched, when `weight` is wider than
    /// the grid or taller than [`Weight::MAX_HEIGHT`]. Rows are appended as
    /// needed, so any other weight fits.
    pub fn place(&mut self, weight: Weight) -> Option<GridPoint> {
        let weight = weight.clamped();
        if !weight.fits(self.columns()) {
            return None;
        }
        // Every retry appends a row, and an item of height `h` always fits once
        // `h` fresh rows sit below all existing content.
        loop {
            if let Some(origin) = self.first_fit(weight) {
                self.mark_rect(origin, weight);
                self.recompute_first_vacant_row(self.first_vacant_row());
                return Some(origin);
            }
            self.push_row();
        }
    }

    /// The first candidate origin whose rectangle is entirely vacant.
    ///
    /// A candidate is a vacant cell with room for the item's width to its
    /// right and enough allocated rows below it for the item's height; rows
    /// are never grown speculatively here.
    fn first_fit(&self, weight: Weight) -> Option<GridPoint> {
        let rows = self.row_count();
        let columns = self.columns();
        if weight.height > rows {
            return None;
        }
        let last_origin_row = rows - weight.height;
        let last_origin_column = columns - weight.width;
        (self.first_vacant_row()..=last_origin_row)
            .flat_map(|row| (0..=last_origin_column).map(move |column| GridPoint::new(row, column)))
            .filter(|origin| self.is_vacant(origin.row, origin.column))
            .find(|&origin| self.rect_is_vacant(origin, weight))
    }
}
