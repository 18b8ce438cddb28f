// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`WeightLayout`] engine: diff, pack, and project in one pass.

use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size};
use tracing::{debug, trace};

use crate::LayoutError;
use crate::cache::PlacementCache;
use crate::frames::{Frame, FrameProjector};
use crate::grid::OccupationGrid;
use crate::params::LayoutParameters;
use crate::planner::{PassKind, Plan, RESET_THRESHOLD, plan};
use crate::types::{Placement, Weight};

/// Incremental first-fit layout of weighted items.
///
/// The engine owns its occupancy grid, placement cache, and frame cache; no
/// state is shared between instances. Calls are expected to be serialized:
/// run [`prepare`](Self::prepare) to completion, then query frames.
#[derive(Clone, Debug)]
pub struct WeightLayout {
    grid: OccupationGrid,
    cache: PlacementCache,
    projector: FrameProjector,
    params: Option<LayoutParameters>,
    reset_threshold: f64,
    last_pass: Option<PassKind>,
    // Reused between passes to hold the pulled weights.
    scratch: Vec<Weight>,
}

impl Default for WeightLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightLayout {
    /// Creates an empty layout using [`RESET_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: OccupationGrid::default(),
            cache: PlacementCache::new(),
            projector: FrameProjector::new(),
            params: None,
            reset_threshold: RESET_THRESHOLD,
            last_pass: None,
            scratch: Vec::new(),
        }
    }

    /// Returns a layout that resets when a change lands within the first
    /// `reset_threshold` fraction of the cached items.
    ///
    /// `0.0` never resets (always rolls back); `1.0` resets on any change to
    /// an existing item. Values outside that range are clamped to it, and NaN
    /// falls back to [`RESET_THRESHOLD`].
    #[must_use]
    pub fn with_reset_threshold(mut self, reset_threshold: f64) -> Self {
        self.reset_threshold = if reset_threshold.is_nan() {
            RESET_THRESHOLD
        } else {
            reset_threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Lays out `weights` under `params`.
    ///
    /// Equivalent to [`prepare_with`](Self::prepare_with) over the slice.
    pub fn prepare(
        &mut self,
        weights: &[Weight],
        params: LayoutParameters,
    ) -> Result<PassKind, LayoutError> {
        self.prepare_with(weights.len(), params, |index| weights.get(index).copied())
    }

    /// Lays out `len` items whose weights are pulled from `weight_for_item`.
    ///
    /// Each weight is requested exactly once, in index order. `None` stands for
    /// a missing weight source and is laid out as a single cell.
    ///
    /// On error nothing is modified: parameters and every weight are checked
    /// before the grid is touched.
    pub fn prepare_with<F>(
        &mut self,
        len: usize,
        params: LayoutParameters,
        mut weight_for_item: F,
    ) -> Result<PassKind, LayoutError>
    where
        F: FnMut(usize) -> Option<Weight>,
    {
        params.validate()?;

        let mut weights = core::mem::take(&mut self.scratch);
        weights.clear();
        weights.reserve(len);
        for index in 0..len {
            let weight = weight_for_item(index).unwrap_or(Weight::UNIT).clamped();
            if !weight.fits(params.columns) {
                self.scratch = weights;
                return Err(LayoutError::InvalidWeight {
                    index,
                    weight,
                    columns: params.columns,
                });
            }
            weights.push(weight);
        }

        let result = self.run_pass(&weights, params);
        self.scratch = weights;
        result
    }

    fn run_pass(
        &mut self,
        weights: &[Weight],
        params: LayoutParameters,
    ) -> Result<PassKind, LayoutError> {
        let kind = match self.params {
            None => {
                self.reset_grid(params.columns);
                self.pack_from(0, weights)?;
                PassKind::Appended { from: 0 }
            }
            Some(previous) if !previous.same_grid(&params) => {
                self.reset_grid(params.columns);
                self.pack_from(0, weights)?;
                PassKind::Reset
            }
            Some(previous) => match plan(
                self.cache.weights(),
                self.cache.len(),
                weights,
                self.reset_threshold,
            ) {
                Plan::Reuse if previous == params => {
                    debug!(
                        pass = ?PassKind::Unchanged,
                        items = weights.len(),
                        "weight layout prepared"
                    );
                    self.last_pass = Some(PassKind::Unchanged);
                    return Ok(PassKind::Unchanged);
                }
                Plan::Reuse => PassKind::Reprojected,
                Plan::Append { from } => {
                    self.pack_from(from, weights)?;
                    PassKind::Appended { from }
                }
                Plan::RollBack { from } => {
                    self.cache.roll_back(from, &mut self.grid);
                    self.pack_from(from, weights)?;
                    PassKind::RolledBack { from }
                }
                Plan::Reset => {
                    self.reset_grid(params.columns);
                    self.pack_from(0, weights)?;
                    PassKind::Reset
                }
            },
        };

        self.params = Some(params);
        self.projector.rebuild(self.cache.as_slice(), &params);
        self.last_pass = Some(kind);
        debug!(
            pass = ?kind,
            items = weights.len(),
            rows = self.grid.row_count(),
            "weight layout prepared"
        );
        Ok(kind)
    }

    fn reset_grid(&mut self, columns: usize) {
        self.grid.reset(columns);
        self.cache.clear();
    }

    fn pack_from(&mut self, from: usize, weights: &[Weight]) -> Result<(), LayoutError> {
        debug_assert_eq!(self.cache.len(), from, "packing must resume after the cache");
        for (index, &weight) in weights.iter().enumerate().skip(from) {
            let origin = self
                .grid
                .place(weight)
                .ok_or(LayoutError::InvalidWeight {
                    index,
                    weight,
                    columns: self.grid.columns(),
                })?;
            trace!(index, row = origin.row, column = origin.column, ?weight, "placed item");
            self.cache.push(Placement {
                index,
                origin,
                weight,
            });
        }
        Ok(())
    }

    /// Drops every cached placement and frame.
    ///
    /// The next [`prepare`](Self::prepare) packs from scratch.
    pub fn invalidate(&mut self) {
        self.reset_grid(self.grid.columns());
        self.projector.clear();
        self.params = None;
        self.last_pass = None;
    }

    /// Whether a viewport resized to `bounds` (minus `insets`) changes the
    /// fixed-axis extent of the last pass.
    ///
    /// Hosts typically call [`prepare`](Self::prepare) again with updated
    /// parameters when this returns `true`. Placements survive such a change;
    /// only frames are re-projected.
    #[must_use]
    pub fn should_invalidate_for_bounds_change(&self, bounds: Size, insets: Insets) -> bool {
        self.params.is_some_and(|params| {
            LayoutParameters::fixed_axis_extent_for(bounds, insets, params.scroll_axis)
                != params.fixed_axis_extent
        })
    }

    /// Size of the laid-out content.
    ///
    /// The fixed axis reports the configured extent, the scroll axis the far
    /// edge of the deepest frame. Zero when there are no items.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.projector.content_extent()
    }

    /// Frames overlapping `rect`, in item order.
    pub fn frames_intersecting(&self, rect: Rect) -> impl Iterator<Item = &Frame> + '_ {
        self.projector.frames_intersecting(rect)
    }

    /// All frames, in item order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        self.projector.frames()
    }

    /// The frame of item `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.projector.frames().get(index)
    }

    /// The placement of item `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.cache.get(index)
    }

    /// All placements, in item order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        self.cache.as_slice()
    }

    /// Number of laid-out items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if no items are laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of grid rows in use.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    /// Parameters of the last successful pass.
    #[must_use]
    pub fn parameters(&self) -> Option<&LayoutParameters> {
        self.params.as_ref()
    }

    /// What the last successful [`prepare`](Self::prepare) did.
    #[must_use]
    pub fn last_pass(&self) -> Option<PassKind> {
        self.last_pass
    }

    /// The occupancy grid backing the current placements.
    #[must_use]
    pub fn grid(&self) -> &OccupationGrid {
        &self.grid
    }
}
