// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking the connector segment closest to a point.
//!
//! This is a geometry query only. Routing pointer events to the picked
//! connector is left to the caller.

use kurbo::{Line, Point};

use crate::point_to_segment_distance;

/// Parameters for [`nearest_segment`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHitParams {
    /// Largest distance, in the caller's coordinate units, that still counts
    /// as a hit.
    pub tolerance: f64,
}

impl SegmentHitParams {
    /// Tolerance used by [`Default`].
    pub const DEFAULT_TOLERANCE: f64 = 4.0;

    /// Parameters with the given tolerance.
    #[must_use]
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for SegmentHitParams {
    fn default() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE)
    }
}

/// A segment picked by [`nearest_segment`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    /// Position of the segment in the input sequence.
    pub index: usize,
    /// Distance from the query point to the segment.
    pub distance: f64,
}

/// Finds the segment closest to `pt` within `params.tolerance`.
///
/// Returns `None` when no segment is close enough. When several segments are
/// equally close, the first one wins.
///
/// ```rust
/// use kurbo::{Line, Point};
/// use understory_connector::{SegmentHitParams, nearest_segment};
///
/// let legs = [
///     Line::new((0.0, 0.0), (100.0, 0.0)),
///     Line::new((100.0, 0.0), (100.0, 50.0)),
/// ];
/// let hit = nearest_segment(Point::new(98.0, 30.0), legs, &SegmentHitParams::default());
/// assert_eq!(hit.map(|h| h.index), Some(1));
/// ```
pub fn nearest_segment(
    pt: Point,
    segments: impl IntoIterator<Item = Line>,
    params: &SegmentHitParams,
) -> Option<SegmentHit> {
    let mut best: Option<SegmentHit> = None;
    for (index, seg) in segments.into_iter().enumerate() {
        let distance = point_to_segment_distance(pt, seg.p0, seg.p1);
        if distance > params.tolerance {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(SegmentHit { index, distance });
        }
    }
    best
}
