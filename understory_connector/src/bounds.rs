// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment orientation and clamping along a segment's extent.

use kurbo::{Line, Point};

use crate::Axis;

/// Whether both endpoints of `segment` have the same y-coordinate.
///
/// This is an exact floating-point comparison with no tolerance. A segment
/// whose y-coordinates differ by rounding error is not horizontal, so callers
/// that mean "horizontal" must supply identical values.
#[must_use]
#[inline]
pub fn is_horizontal(segment: Line) -> bool {
    segment.p0.y == segment.p1.y
}

/// The orientation of `segment`, treating anything not horizontal as vertical.
#[must_use]
pub fn segment_orientation(segment: Line) -> Axis {
    if is_horizontal(segment) {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Clamps `point` into the extent of `segment` along the segment's axis.
///
/// For a horizontal segment the x-coordinate is limited to the segment's x
/// range; otherwise the y-coordinate is limited to its y range. The other
/// coordinate is never changed. A degenerate segment clamps to its single
/// value on that axis.
///
/// The input is not modified; the clamped point is returned.
#[must_use]
pub fn clamp_to_segment_bounds(point: Point, segment: Line) -> Point {
    let Line { p0, p1 } = segment;
    match segment_orientation(segment) {
        Axis::Horizontal => Point::new(clamp_between(point.x, p0.x, p1.x), point.y),
        Axis::Vertical => Point::new(point.x, clamp_between(point.y, p0.y, p1.y)),
    }
}

/// Limits `v` to the closed range spanned by `a` and `b`, in either order.
///
/// Unlike `f64::clamp` this does not panic on NaN bounds.
fn clamp_between(v: f64, a: f64, b: f64) -> f64 {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}
