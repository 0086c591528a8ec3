// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_connector --heading-base-level=0

//! Understory Connector: geometry helpers for diagram connectors.
//!
//! This crate collects the small pieces of 2D math a diagram or blueprint
//! editor needs to route, measure and draw straight connector lines between
//! shapes:
//! - Distance from a point to a finite segment ([`point_to_segment_distance`]).
//! - Orthogonal snapping of a free point toward a target ([`axis_align`]).
//! - Segment orientation ([`is_horizontal`], [`segment_orientation`]).
//! - Clamping a point into a segment's extent ([`clamp_to_segment_bounds`]).
//! - SVG-style path data for connector point lists ([`connector_path_data`]).
//! - Picking the connector segment nearest to a point ([`nearest_segment`]).
//!
//! Points and segments are [`kurbo::Point`] and [`kurbo::Line`]. Every
//! function is pure: inputs are taken by value and adjusted copies are
//! returned, so there is nothing to alias and nothing to lock.
//!
//! It does **not** own shapes, connectors, or any rendering backend. Callers
//! keep their own diagram model and feed the resulting path data to whatever
//! renderer they use.
//!
//! ## Snapping a connector bend point
//!
//! ```rust
//! use kurbo::{Line, Point};
//! use understory_connector::{axis_align, clamp_to_segment_bounds, point_to_segment_distance};
//!
//! // Snap a dragged bend point so the connector leg toward the port is orthogonal.
//! let port = Point::new(100.0, 40.0);
//! let dragged = Point::new(30.0, 47.0);
//! let bend = axis_align(dragged, port);
//! assert_eq!(bend, Point::new(30.0, 40.0));
//!
//! // Keep an anchor on the edge of a shape.
//! let edge = Line::new((0.0, 0.0), (50.0, 0.0));
//! let anchor = clamp_to_segment_bounds(Point::new(80.0, 0.0), edge);
//! assert_eq!(anchor, Point::new(50.0, 0.0));
//!
//! // Measure how far the cursor is from a connector leg.
//! let d = point_to_segment_distance(Point::new(25.0, 3.0), edge.p0, edge.p1);
//! assert_eq!(d, 3.0);
//! ```
//!
//! ## Path data
//!
//! Connector point lists are interpreted pairwise: each consecutive pair of
//! points is an independent segment, written as its own move/line fragment.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_connector::{connector_path_data, polyline_path_data};
//!
//! let pts = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(3.0, 3.0),
//! ];
//! assert_eq!(connector_path_data(&pts), "M0,0L1,1M2,2L3,3");
//! assert_eq!(polyline_path_data(&pts), "M0,0L1,1L2,2L3,3");
//! ```
//!
//! ## Design notes
//!
//! - Horizontal detection uses exact floating-point equality. Callers that
//!   intend a horizontal segment must supply identical y-coordinates.
//! - Non-finite coordinates are not validated; NaN propagates through.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod align;
mod bounds;
mod distance;
mod hit;
mod path;

pub use align::{Axis, alignment_axis, axis_align};
pub use bounds::{clamp_to_segment_bounds, is_horizontal, segment_orientation};
pub use distance::{
    distance_sq, nearest_point_on_segment, point_to_segment_distance,
    point_to_segment_distance_sq,
};
pub use hit::{SegmentHit, SegmentHitParams, nearest_segment};
pub use path::{
    connector_bez_path, connector_path_data, connector_segments, polyline_path_data,
    svg_path_data,
};
