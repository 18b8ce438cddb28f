// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Growable boolean occupancy grid.
//!
//! The grid has a fixed number of columns and grows along the scroll axis by
//! appending rows. Rows are only removed from the tail, after a rollback has
//! freed them.
//!
//! The grid also tracks a *first vacant row* cursor: every row strictly above
//! it is fully occupied. The cursor may understate the true first vacant row,
//! never overstate it, so searches can start there without missing a slot.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::types::{GridPoint, Weight};

/// Inline capacity of a row; typical grids have a handful of columns.
type Row = SmallVec<[bool; 8]>;

/// A row-major boolean occupancy grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupationGrid {
    columns: usize,
    rows: Vec<Row>,
    first_vacant_row: usize,
}

impl OccupationGrid {
    /// Creates an empty grid with `columns` columns and no rows.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            first_vacant_row: 0,
        }
    }

    /// Drops every row and switches to `columns` columns.
    pub fn reset(&mut self, columns: usize) {
        self.columns = columns;
        self.rows.clear();
        self.first_vacant_row = 0;
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of allocated rows.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Lowest row that may still hold a vacant cell.
    ///
    /// Equals [`row_count`](Self::row_count) when every allocated row is full.
    #[inline]
    #[must_use]
    pub const fn first_vacant_row(&self) -> usize {
        self.first_vacant_row
    }

    /// Appends one all-vacant row.
    pub fn push_row(&mut self) {
        self.rows.push(SmallVec::from_elem(false, self.columns));
    }

    /// Whether the cell is free.
    ///
    /// Rows past the end of the grid are implicitly vacant; columns past the
    /// edge never are.
    #[must_use]
    pub fn is_vacant(&self, row: usize, column: usize) -> bool {
        if column >= self.columns {
            return false;
        }
        self.rows.get(row).is_none_or(|r| !r[column])
    }

    /// Whether every cell of the rectangle exists and is free.
    #[must_use]
    pub fn rect_is_vacant(&self, origin: GridPoint, weight: Weight) -> bool {
        let end_column = origin.column + weight.width;
        let end_row = origin.row + weight.height;
        if end_column > self.columns || end_row > self.rows.len() {
            return false;
        }
        self.rows[origin.row..end_row]
            .iter()
            .all(|row| row[origin.column..end_column].iter().all(|&cell| !cell))
    }

    /// Marks every cell of the rectangle occupied.
    ///
    /// The rectangle must lie inside the grid and be vacant.
    pub fn mark_rect(&mut self, origin: GridPoint, weight: Weight) {
        debug_assert!(
            self.rect_is_vacant(origin, weight),
            "marking a rectangle that is out of bounds or already occupied: {origin:?} {weight:?}"
        );
        self.fill(origin, weight, true);
    }

    /// Marks every cell of the rectangle vacant.
    ///
    /// Does not move the cursor; see [`lower_first_vacant_row`](Self::lower_first_vacant_row).
    pub fn clear_rect(&mut self, origin: GridPoint, weight: Weight) {
        self.fill(origin, weight, false);
    }

    fn fill(&mut self, origin: GridPoint, weight: Weight, value: bool) {
        let end_column = (origin.column + weight.width).min(self.columns);
        let end_row = (origin.row + weight.height).min(self.rows.len());
        if origin.column >= end_column {
            return;
        }
        for row in self.rows.iter_mut().take(end_row).skip(origin.row) {
            row[origin.column..end_column].fill(value);
        }
    }

    /// Moves the cursor down to `row` if it currently sits below it.
    pub fn lower_first_vacant_row(&mut self, row: usize) {
        self.first_vacant_row = self.first_vacant_row.min(row);
    }

    /// Sets the cursor to the first row at or after `from` with a vacant cell.
    pub fn recompute_first_vacant_row(&mut self, from: usize) {
        self.first_vacant_row = self
            .rows
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, row)| row.iter().any(|&cell| !cell))
            .map_or(self.rows.len(), |(index, _)| index);
    }

    /// Removes trailing all-vacant rows whose index is at least `not_below`.
    pub fn trim_trailing_vacant_rows(&mut self, not_below: usize) {
        while self.rows.len() > not_below
            && self
                .rows
                .last()
                .is_some_and(|row| row.iter().all(|&cell| !cell))
        {
            self.rows.pop();
        }
        self.first_vacant_row = self.first_vacant_row.min(self.rows.len());
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::OccupationGrid;
    use crate::types::{GridPoint, Weight};

    #[test]
    fn rows_past_the_end_are_implicitly_vacant() {
        let mut grid = OccupationGrid::new(2);
        assert!(grid.is_vacant(5, 1));
        assert!(!grid.is_vacant(0, 2));
        grid.push_row();
        grid.mark_rect(GridPoint::new(0, 0), Weight::UNIT);
        assert!(!grid.is_vacant(0, 0));
        assert!(grid.is_vacant(0, 1));
    }

    #[test]
    fn rect_vacancy_requires_allocated_rows() {
        let mut grid = OccupationGrid::new(3);
        grid.push_row();
        assert!(grid.rect_is_vacant(GridPoint::new(0, 1), Weight::new(2, 1)));
        assert!(!grid.rect_is_vacant(GridPoint::new(0, 0), Weight::new(1, 2)));
        assert!(!grid.rect_is_vacant(GridPoint::new(0, 2), Weight::new(2, 1)));
    }

    #[test]
    fn mark_and_clear_are_inverse() {
        let mut grid = OccupationGrid::new(3);
        grid.push_row();
        grid.push_row();
        grid.mark_rect(GridPoint::new(0, 1), Weight::new(2, 2));
        assert_eq!(grid.occupied_cells(), 4);
        grid.clear_rect(GridPoint::new(0, 1), Weight::new(2, 2));
        assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn cursor_skips_full_rows() {
        let mut grid = OccupationGrid::new(2);
        for _ in 0..3 {
            grid.push_row();
        }
        grid.mark_rect(GridPoint::new(0, 0), Weight::new(2, 2));
        grid.recompute_first_vacant_row(0);
        assert_eq!(grid.first_vacant_row(), 2);

        grid.mark_rect(GridPoint::new(2, 0), Weight::new(2, 1));
        grid.recompute_first_vacant_row(2);
        assert_eq!(grid.first_vacant_row(), 3);

        grid.lower_first_vacant_row(1);
        assert_eq!(grid.first_vacant_row(), 1);
        grid.lower_first_vacant_row(2);
        assert_eq!(grid.first_vacant_row(), 1);
    }

    #[test]
    fn trimming_stops_at_occupied_rows_and_floor() {
        let mut grid = OccupationGrid::new(2);
        for _ in 0..4 {
            grid.push_row();
        }
        grid.mark_rect(GridPoint::new(1, 0), Weight::UNIT);
        grid.recompute_first_vacant_row(0);

        grid.trim_trailing_vacant_rows(3);
        assert_eq!(grid.row_count(), 3);

        grid.trim_trailing_vacant_rows(0);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.first_vacant_row(), 0);

        grid.clear_rect(GridPoint::new(1, 0), Weight::UNIT);
        grid.trim_trailing_vacant_rows(0);
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.first_vacant_row(), 0);
    }
}
