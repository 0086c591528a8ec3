// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-to-segment distance.
//!
//! Distances are computed in squared form and only the final result is passed
//! through a square root.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::Point;

/// Squared Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance_sq(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}

/// The point of the segment `end1..end2` closest to `pt`.
///
/// `pt` is projected on the infinite line through the endpoints, and the
/// projection parameter is clamped to `[0, 1]` so the result stays on the
/// segment. A degenerate segment (`end1 == end2`) yields `end1`.
#[must_use]
pub fn nearest_point_on_segment(pt: Point, end1: Point, end2: Point) -> Point {
    let l2 = distance_sq(end1, end2);
    if l2 == 0.0 {
        return end1;
    }
    let dir = end2 - end1;
    let t = ((pt - end1).dot(dir) / l2).clamp(0.0, 1.0);
    end1 + t * dir
}

/// Squared distance from `pt` to the segment `end1..end2`.
#[must_use]
pub fn point_to_segment_distance_sq(pt: Point, end1: Point, end2: Point) -> f64 {
    distance_sq(pt, nearest_point_on_segment(pt, end1, end2))
}

/// Shortest Euclidean distance from `pt` to the finite segment `end1..end2`.
///
/// Always non-negative for finite input. When the endpoints coincide this is
/// the distance to that single point.
///
/// ```rust
/// use kurbo::Point;
/// use understory_connector::point_to_segment_distance;
///
/// let d = point_to_segment_distance(
///     Point::new(-3.0, 4.0),
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
/// );
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
pub fn point_to_segment_distance(pt: Point, end1: Point, end2: Point) -> f64 {
    point_to_segment_distance_sq(pt, end1, end2).sqrt()
}
