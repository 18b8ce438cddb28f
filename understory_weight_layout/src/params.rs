// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied layout parameters.

use kurbo::{Insets, Size};

use crate::LayoutError;

/// Direction in which content grows and scrolls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Rows stack downward; columns run along x.
    #[default]
    Vertical,
    /// Rows stack rightward; columns run along y.
    Horizontal,
}

impl ScrollAxis {
    /// Length of `size` along the fixed (non-scrolling) axis.
    #[inline]
    #[must_use]
    pub fn fixed_length(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }
}

/// Geometry of one layout pass.
///
/// `columns` and `item_spacing` define the grid itself; changing either between
/// passes discards every cached placement. `fixed_axis_extent` and
/// `scroll_axis` only affect how placements are projected to pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParameters {
    /// Number of grid columns across the fixed axis. Must be at least one.
    pub columns: usize,
    /// Gap between adjacent cells, in pixels.
    pub item_spacing: f64,
    /// Axis along which rows are appended.
    pub scroll_axis: ScrollAxis,
    /// Pixel length available across the fixed axis.
    pub fixed_axis_extent: f64,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            columns: 1,
            item_spacing: 0.0,
            scroll_axis: ScrollAxis::Vertical,
            fixed_axis_extent: 0.0,
        }
    }
}

impl LayoutParameters {
    /// Vertical layout with no spacing.
    #[must_use]
    pub fn new(columns: usize, fixed_axis_extent: f64) -> Self {
        Self {
            columns,
            fixed_axis_extent,
            ..Self::default()
        }
    }

    /// Returns a copy with the given spacing.
    #[must_use]
    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    /// Returns a copy with the given scroll axis.
    #[must_use]
    pub fn with_scroll_axis(mut self, scroll_axis: ScrollAxis) -> Self {
        self.scroll_axis = scroll_axis;
        self
    }

    /// Returns a copy with the given fixed-axis extent.
    #[must_use]
    pub fn with_fixed_axis_extent(mut self, fixed_axis_extent: f64) -> Self {
        self.fixed_axis_extent = fixed_axis_extent;
        self
    }

    /// Fixed-axis length left in `viewport` once `insets` on that axis are removed.
    #[must_use]
    pub fn fixed_axis_extent_for(viewport: Size, insets: Insets, axis: ScrollAxis) -> f64 {
        let inset = match axis {
            ScrollAxis::Vertical => insets.x0 + insets.x1,
            ScrollAxis::Horizontal => insets.y0 + insets.y1,
        };
        (axis.fixed_length(viewport) - inset).max(0.0)
    }

    /// Checks that the parameters describe a usable grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::InconsistentParameters {
                reason: "column count must be at least 1",
            });
        }
        if !self.fixed_axis_extent.is_finite() || self.fixed_axis_extent < 0.0 {
            return Err(LayoutError::InconsistentParameters {
                reason: "fixed-axis extent must be finite and non-negative",
            });
        }
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(LayoutError::InconsistentParameters {
                reason: "item spacing must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Pixel length of a single cell.
    ///
    /// The fixed extent is shared by `columns` cells and `columns - 1` gaps.
    /// Spacing that eats the whole extent yields zero-sized cells.
    #[must_use]
    pub fn item_dimension(&self) -> f64 {
        let columns = self.columns.max(1) as f64;
        ((self.fixed_axis_extent - columns * self.item_spacing + self.item_spacing) / columns)
            .max(0.0)
    }

    /// Whether `other` keeps the same cell grid, so cached placements stay valid.
    #[inline]
    #[must_use]
    pub fn same_grid(&self, other: &Self) -> bool {
        self.columns == other.columns && self.item_spacing == other.item_spacing
    }
}
