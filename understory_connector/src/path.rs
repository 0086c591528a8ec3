// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG-style path data for connector point lists.
//!
//! The output uses the compact form `M0,0L1,1`: one command letter followed by
//! comma-separated coordinates, no whitespace, and coordinates written in the
//! shortest decimal form that round-trips (`1`, `0.5`, `-2.25`).

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, Line, PathEl, Point};

/// Splits a connector point list into independent two-point segments.
///
/// Points are taken pairwise: `(points[0], points[1])`, `(points[2],
/// points[3])`, and so on. A trailing unpaired point is ignored.
pub fn connector_segments(points: &[Point]) -> impl Iterator<Item = Line> {
    points
        .chunks_exact(2)
        .map(|pair| Line::new(pair[0], pair[1]))
}

/// Builds a [`BezPath`] with one move/line fragment per pair of points.
///
/// See [`connector_segments`] for how points are paired.
#[must_use]
pub fn connector_bez_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for seg in connector_segments(points) {
        path.move_to(seg.p0);
        path.line_to(seg.p1);
    }
    path
}

/// Path data drawing each pair of points as its own segment.
///
/// This is *not* a polyline through all points: `[a, b, c, d]` becomes
/// `M a L b M c L d`, with no connection between `b` and `c`. Use
/// [`polyline_path_data`] for a continuous line. An empty slice gives an
/// empty string.
///
/// ```rust
/// use kurbo::Point;
/// use understory_connector::connector_path_data;
///
/// let connector = [Point::new(10.0, 20.0), Point::new(10.0, 42.5)];
/// assert_eq!(connector_path_data(&connector), "M10,20L10,42.5");
/// assert_eq!(connector_path_data(&[]), "");
/// ```
#[must_use]
pub fn connector_path_data(points: &[Point]) -> String {
    svg_path_data(&connector_bez_path(points))
}

/// Path data for one continuous polyline through all `points`.
///
/// An empty slice gives an empty string; a single point gives a lone move.
#[must_use]
pub fn polyline_path_data(points: &[Point]) -> String {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    svg_path_data(&path)
}

/// Serializes a [`BezPath`] in the compact connector path format.
///
/// Quadratic and cubic segments are written as `Q` and `C` commands so that
/// arbitrary kurbo paths can share the same output format.
#[must_use]
pub fn svg_path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p);
            }
            PathEl::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p);
            }
            PathEl::QuadTo(p1, p2) => {
                d.push('Q');
                write_point(&mut d, p1);
                d.push(',');
                write_point(&mut d, p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                d.push('C');
                write_point(&mut d, p1);
                d.push(',');
                write_point(&mut d, p2);
                d.push(',');
                write_point(&mut d, p3);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn write_point(out: &mut String, p: Point) {
    write_coord(out, p.x);
    out.push(',');
    write_coord(out, p.y);
}

fn write_coord(out: &mut String, v: f64) {
    // Negative zero prints as "-0".
    if v == 0.0 {
        out.push('0');
    } else {
        let _ = write!(out, "{v}");
    }
}
