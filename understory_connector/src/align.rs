// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthogonal snapping of a free point toward a target.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Point;

/// A drawing axis.
///
/// Used both for the line a point was snapped onto ([`alignment_axis`]) and for
/// the orientation of a segment ([`crate::segment_orientation`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Parallel to the x axis: constant y.
    Horizontal,
    /// Parallel to the y axis: constant x.
    Vertical,
}

/// Which of `target`'s lines [`axis_align`] moves `point` onto.
///
/// Returns [`Axis::Vertical`] when the horizontal gap is strictly smaller than
/// the vertical one, and [`Axis::Horizontal`] otherwise. Equal gaps resolve to
/// [`Axis::Horizontal`].
#[must_use]
pub fn alignment_axis(point: Point, target: Point) -> Axis {
    let x_diff = (point.x - target.x).abs();
    let y_diff = (point.y - target.y).abs();
    if x_diff < y_diff {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Snaps `point` so it shares one coordinate with `target`.
///
/// The axis needing the smaller adjustment wins (see [`alignment_axis`]):
/// either the x-coordinate is replaced by `target.x`, or the y-coordinate by
/// `target.y`. The other coordinate is kept.
///
/// The input is not modified; the snapped point is returned.
///
/// ```rust
/// use kurbo::Point;
/// use understory_connector::axis_align;
///
/// let origin = Point::ORIGIN;
/// assert_eq!(axis_align(origin, Point::new(5.0, 1.0)), Point::new(0.0, 1.0));
/// assert_eq!(axis_align(origin, Point::new(1.0, 5.0)), Point::new(1.0, 0.0));
/// // Ties snap onto the target's horizontal line.
/// assert_eq!(axis_align(origin, Point::new(3.0, 3.0)), Point::new(0.0, 3.0));
/// ```
#[must_use]
pub fn axis_align(point: Point, target: Point) -> Point {
    match alignment_axis(point, target) {
        Axis::Vertical => Point::new(target.x, point.y),
        Axis::Horizontal => Point::new(point.x, target.y),
    }
}
