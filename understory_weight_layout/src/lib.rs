// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_weight_layout --heading-base-level=0

//! Understory Weight Layout: incremental first-fit packing of weighted grid items.
//!
//! This crate positions a sequence of items whose sizes are given in whole grid
//! cells ("weights") inside a fixed number of columns, and turns the result into
//! pixel frames. It is the geometry core of an "explore"-style mosaic grid: a
//! few large tiles mixed with many small ones, packed top to bottom without gaps
//! wherever a tile fits.
//!
//! The core concepts are:
//!
//! - [`Weight`]: an item's size in cells (`width × height`, each at least one).
//! - [`OccupationGrid`]: a growable boolean grid with a first-vacant-row cursor.
//!   [`OccupationGrid::place`] performs the first-fit search: the topmost, then
//!   leftmost, vacant rectangle of the requested weight wins, and rows are
//!   appended one at a time when nothing fits.
//! - [`PlacementCache`]: the ordered record of where each item landed, used to
//!   diff the next pass.
//! - [`FrameProjector`]: maps placements to [`kurbo::Rect`] frames given
//!   [`LayoutParameters`] and answers viewport queries.
//! - [`WeightLayout`]: the engine tying these together. Each
//!   [`WeightLayout::prepare`] call reuses the placements of the unchanged
//!   prefix, rolls back and re-packs everything after the first changed item,
//!   or throws the grid away when the change lands within the first
//!   [`RESET_THRESHOLD`] of the sequence.
//!
//! This crate deliberately does **not** know about views, cells, data sources, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Supplying item weights on demand (by slice or through a callback).
//! - Calling [`WeightLayout::prepare`] whenever weights or geometry change.
//! - Realizing views for the frames returned by [`WeightLayout::frames_intersecting`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_weight_layout::{LayoutParameters, PassKind, Weight, WeightLayout};
//!
//! // Three 100px columns.
//! let params = LayoutParameters::new(3, 300.0);
//! let mut weights = vec![
//!     Weight::new(2, 2),
//!     Weight::new(1, 1),
//!     Weight::new(1, 1),
//!     Weight::new(3, 1),
//! ];
//!
//! let mut layout = WeightLayout::new();
//! layout.prepare(&weights, params).unwrap();
//!
//! // The two small tiles fill the column beside the large one.
//! assert_eq!(layout.frame(1).unwrap().rect, Rect::new(200.0, 0.0, 300.0, 100.0));
//! assert_eq!(layout.frame(2).unwrap().rect, Rect::new(200.0, 100.0, 300.0, 200.0));
//! assert_eq!(layout.content_extent(), Size::new(300.0, 300.0));
//!
//! // Only frames overlapping the viewport are returned, in item order.
//! let visible: Vec<usize> = layout
//!     .frames_intersecting(Rect::new(0.0, 150.0, 300.0, 250.0))
//!     .map(|frame| frame.index)
//!     .collect();
//! assert_eq!(visible, [0, 2, 3]);
//!
//! // Appending reuses every existing placement.
//! weights.push(Weight::new(1, 1));
//! assert_eq!(layout.prepare(&weights, params), Ok(PassKind::Appended { from: 4 }));
//! ```
//!
//! ## Pull-based weights
//!
//! Hosts that look weights up lazily can use [`WeightLayout::prepare_with`]. Each
//! weight is requested exactly once per pass; `None` lays the item out as a
//! single cell.
//!
//! ```rust
//! use understory_weight_layout::{LayoutParameters, ScrollAxis, Weight, WeightLayout};
//!
//! let params = LayoutParameters::new(2, 200.0)
//!     .with_item_spacing(8.0)
//!     .with_scroll_axis(ScrollAxis::Horizontal);
//!
//! let mut layout = WeightLayout::new();
//! layout
//!     .prepare_with(5, params, |index| (index % 2 == 0).then_some(Weight::new(1, 2)))
//!     .unwrap();
//! assert_eq!(layout.len(), 5);
//! // Horizontal layouts keep the fixed extent on the y axis.
//! assert_eq!(layout.content_extent().height, 200.0);
//! ```
//!
//! Items wider than the grid are rejected with [`LayoutError::InvalidWeight`]
//! before anything is modified.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod error;
mod frames;
mod grid;
mod layout;
mod packing;
mod params;
mod planner;
mod types;

pub use cache::PlacementCache;
pub use error::LayoutError;
pub use frames::{Frame, FrameProjector};
pub use grid::OccupationGrid;
pub use layout::WeightLayout;
pub use params::{LayoutParameters, ScrollAxis};
pub use planner::{PassKind, RESET_THRESHOLD};
pub use types::{GridPoint, Placement, Weight};
