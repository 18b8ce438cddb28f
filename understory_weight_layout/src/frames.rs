// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of grid placements into pixel frames.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::params::{LayoutParameters, ScrollAxis};
use crate::types::Placement;

/// Pixel rectangle of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Index of the item in the host's sequence.
    pub index: usize,
    /// Rectangle in content coordinates.
    pub rect: Rect,
}

/// Cache of frames for the most recent pass, plus the content extent.
///
/// Frames are never patched in place; [`rebuild`](Self::rebuild) replaces the
/// whole list.
#[derive(Clone, Debug, Default)]
pub struct FrameProjector {
    frames: Vec<Frame>,
    content_extent: Size,
}

impl FrameProjector {
    /// Creates an empty projector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames: Vec::new(),
            content_extent: Size::ZERO,
        }
    }

    /// Pixel rectangle covered by `placement` under `params`.
    ///
    /// Rows advance along the scroll axis and columns across the fixed axis,
    /// each cell taking `item_dimension` plus one `item_spacing` gutter.
    #[must_use]
    pub fn frame_for(placement: &Placement, params: &LayoutParameters) -> Rect {
        let dimension = params.item_dimension();
        let stride = params.item_spacing + dimension;
        let along = placement.origin.row as f64 * stride;
        let across = placement.origin.column as f64 * stride;
        let along_size = dimension + placement.weight.height.saturating_sub(1) as f64 * stride;
        let across_size = dimension + placement.weight.width.saturating_sub(1) as f64 * stride;
        match params.scroll_axis {
            ScrollAxis::Vertical => {
                Rect::from_origin_size((across, along), (across_size, along_size))
            }
            ScrollAxis::Horizontal => {
                Rect::from_origin_size((along, across), (along_size, across_size))
            }
        }
    }

    /// Replaces every frame with the projection of `placements`.
    pub fn rebuild(&mut self, placements: &[Placement], params: &LayoutParameters) {
        self.frames.clear();
        self.frames.extend(placements.iter().map(|placement| Frame {
            index: placement.index,
            rect: Self::frame_for(placement, params),
        }));

        if self.frames.is_empty() {
            self.content_extent = Size::ZERO;
            return;
        }
        self.content_extent = match params.scroll_axis {
            ScrollAxis::Vertical => Size::new(
                params.fixed_axis_extent,
                self.frames.iter().fold(0.0, |max, f| f64::max(max, f.rect.y1)),
            ),
            ScrollAxis::Horizontal => Size::new(
                self.frames.iter().fold(0.0, |max, f| f64::max(max, f.rect.x1)),
                params.fixed_axis_extent,
            ),
        };
    }

    /// Drops every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.content_extent = Size::ZERO;
    }

    /// All frames in item order.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Size of the laid-out content; zero when there are no frames.
    #[inline]
    #[must_use]
    pub const fn content_extent(&self) -> Size {
        self.content_extent
    }

    /// Frames whose interior overlaps `rect`, in item order.
    ///
    /// This is a linear scan. Frames that only touch `rect` along an edge are
    /// not reported.
    pub fn frames_intersecting(&self, rect: Rect) -> impl Iterator<Item = &Frame> + '_ {
        let rect = rect.abs();
        self.frames
            .iter()
            .filter(move |frame| interiors_overlap(&frame.rect, &rect))
    }
}

fn interiors_overlap(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::FrameProjector;
    use crate::params::{LayoutParameters, ScrollAxis};
    use crate::types::{GridPoint, Placement, Weight};

    fn placement(index: usize, row: usize, column: usize, weight: Weight) -> Placement {
        Placement {
            index,
            origin: GridPoint::new(row, column),
            weight,
        }
    }

    #[test]
    fn spans_include_inner_gutters() {
        // 3 columns over 320px with 10px gaps: 100px cells, 110px stride.
        let params = LayoutParameters::new(3, 320.0).with_item_spacing(10.0);
        let rect = FrameProjector::frame_for(&placement(0, 1, 1, Weight::new(2, 2)), &params);
        assert_eq!(rect, Rect::new(110.0, 110.0, 320.0, 320.0));
    }

    #[test]
    fn horizontal_axis_transposes_frames() {
        let params = LayoutParameters::new(2, 200.0).with_scroll_axis(ScrollAxis::Horizontal);
        let p = placement(0, 3, 1, Weight::new(1, 2));
        assert_eq!(
            FrameProjector::frame_for(&p, &params),
            Rect::new(300.0, 100.0, 500.0, 200.0)
        );

        let mut projector = FrameProjector::new();
        projector.rebuild(&[p], &params);
        assert_eq!(projector.content_extent(), Size::new(500.0, 200.0));
    }

    #[test]
    fn content_extent_tracks_the_deepest_frame() {
        let params = LayoutParameters::new(2, 100.0);
        let mut projector = FrameProjector::new();
        projector.rebuild(
            &[
                placement(0, 0, 0, Weight::new(1, 3)),
                placement(1, 0, 1, Weight::UNIT),
            ],
            &params,
        );
        assert_eq!(projector.content_extent(), Size::new(100.0, 150.0));

        projector.rebuild(&[], &params);
        assert_eq!(projector.content_extent(), Size::ZERO);
        assert!(projector.frames().is_empty());
    }

    #[test]
    fn intersection_keeps_item_order_and_skips_touching_edges() {
        let params = LayoutParameters::new(2, 100.0);
        let mut projector = FrameProjector::new();
        projector.rebuild(
            &[
                placement(0, 0, 0, Weight::UNIT),
                placement(1, 0, 1, Weight::UNIT),
                placement(2, 1, 0, Weight::new(2, 1)),
            ],
            &params,
        );
        let hits = |rect: Rect| {
            projector
                .frames_intersecting(rect)
                .map(|f| f.index)
                .collect::<Vec<_>>()
        };
        assert_eq!(hits(Rect::new(60.0, 40.0, 80.0, 60.0)), [1, 2]);
        assert_eq!(hits(Rect::new(0.0, 0.0, 100.0, 50.0)), [0, 1]);
        assert_eq!(hits(Rect::new(0.0, 100.0, 100.0, 120.0)), Vec::<usize>::new());
        assert_eq!(hits(Rect::new(80.0, 60.0, 60.0, 40.0)), [1, 2]);
        assert_eq!(hits(Rect::new(25.0, 75.0, 25.0, 75.0)), [2]);
    }
}
