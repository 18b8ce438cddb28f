// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell-space primitives: weights, grid points, and placements.

/// Size of an item in grid cells.
///
/// Both dimensions are at least one cell. [`Weight::new`] clamps zero to one,
/// and the layout re-applies the same clamp to any weight it is handed, so a
/// hand-built `Weight { width: 0, height: 0 }` degenerates to a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Weight {
    /// Number of columns spanned.
    pub width: usize,
    /// Number of rows spanned.
    pub height: usize,
}

impl Weight {
    /// A single cell.
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    /// Tallest item the grid accepts, in rows.
    ///
    /// Packing grows the grid one row per retry, so an unbounded height would
    /// allocate without limit.
    pub const MAX_HEIGHT: usize = 1 << 16;

    /// Creates a weight, clamping each dimension to at least one cell.
    #[inline]
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Returns this weight with both dimensions clamped to at least one cell.
    #[inline]
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Whether the weight can be packed into a grid of `columns` columns.
    #[inline]
    #[must_use]
    pub const fn fits(self, columns: usize) -> bool {
        self.width <= columns && self.height <= Self::MAX_HEIGHT
    }

    /// Number of cells covered.
    #[inline]
    #[must_use]
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A cell coordinate in the occupation grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Row index, growing along the scroll axis.
    pub row: usize,
    /// Column index, `0..columns`.
    pub column: usize,
}

impl GridPoint {
    /// Creates a grid point.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Where a single item was packed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the item in the host's sequence.
    pub index: usize,
    /// Top-left cell of the item's rectangle.
    pub origin: GridPoint,
    /// Size of the rectangle in cells.
    pub weight: Weight,
}

impl Placement {
    /// One past the last row covered.
    #[inline]
    #[must_use]
    pub const fn end_row(&self) -> usize {
        self.origin.row + self.weight.height
    }

    /// One past the last column covered.
    #[inline]
    #[must_use]
    pub const fn end_column(&self) -> usize {
        self.origin.column + self.weight.width
    }

    /// Whether the two placements share at least one cell.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.origin.row < other.end_row()
            && other.origin.row < self.end_row()
            && self.origin.column < other.end_column()
            && other.origin.column < self.end_column()
    }
}
