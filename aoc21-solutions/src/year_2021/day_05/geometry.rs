//! Exact intersection geometry for hydrothermal vent lines.
//!
//! Vent lines are segments between integer grid points, restricted to
//! horizontal, vertical and 45-degree orientations. Intersections are exact:
//! a crossing is reported only at an integer grid point, and collinear
//! overlaps enumerate every shared grid point.

use thiserror::Error;

/// An integer grid point.
///
/// The derived ordering is lexicographic by `x`, then `y`; segment
/// canonicalization and [`dedupe_points`] both rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Slope class of a segment, fixed at construction.
///
/// Coordinates are screen-style (`y` grows downward); `Rising` means both
/// coordinates increase together along the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Only slopes 0, infinity, +1 and -1 are representable.
    #[error("unsupported slope for segment ({0},{1}) -> ({2},{3})")]
    UnsupportedOrientation(i64, i64, i64, i64),
}

/// A vent line between two grid points.
///
/// Endpoints are canonicalized at construction so `from` precedes `to` in
/// point order; segments given in either endpoint order compare equal. The
/// orientation is classified once here and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: Point,
    to: Point,
    orientation: Orientation,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        let orientation = if from.x == to.x {
            Orientation::Vertical
        } else if from.y == to.y {
            Orientation::Horizontal
        } else if to.y - from.y == to.x - from.x {
            Orientation::Rising
        } else if from.y - to.y == to.x - from.x {
            Orientation::Falling
        } else {
            return Err(GeometryError::UnsupportedOrientation(a.x, a.y, b.x, b.y));
        };
        Ok(Self {
            from,
            to,
            orientation,
        })
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Horizontal or vertical.
    pub fn is_axis_aligned(&self) -> bool {
        matches!(
            self.orientation,
            Orientation::Horizontal | Orientation::Vertical
        )
    }

    /// Coefficients `(a, b, c)` of the carrier line equation `a*x + b*y = c`.
    fn line_equation(&self) -> (i64, i64, i64) {
        let Point { x, y } = self.from;
        match self.orientation {
            Orientation::Horizontal => (0, 1, y),
            Orientation::Vertical => (1, 0, x),
            Orientation::Rising => (-1, 1, y - x),
            Orientation::Falling => (1, 1, y + x),
        }
    }

    /// Whether `point` lies on this segment: on the carrier line and within
    /// the bounding interval on both axes.
    pub fn contains(&self, point: Point) -> bool {
        let (a, b, c) = self.line_equation();
        a * point.x + b * point.y == c
            && between(self.from.x, point.x, self.to.x)
            && between(self.from.y, point.y, self.to.y)
    }

    /// Every integer grid point of the segment, `from` through `to`.
    pub fn points(&self) -> Vec<Point> {
        let Segment { from, to, .. } = *self;
        match self.orientation {
            Orientation::Horizontal => (from.x..=to.x).map(|x| Point { x, y: from.y }).collect(),
            Orientation::Vertical => (from.y..=to.y).map(|y| Point { x: from.x, y }).collect(),
            Orientation::Rising => (0..=to.x - from.x)
                .map(|step| Point {
                    x: from.x + step,
                    y: from.y + step,
                })
                .collect(),
            Orientation::Falling => (0..=to.x - from.x)
                .map(|step| Point {
                    x: from.x + step,
                    y: from.y - step,
                })
                .collect(),
        }
    }

    /// Exact intersection with `other`: empty, a single crossing point, or
    /// the shared grid points of a collinear overlap.
    ///
    /// A segment never intersects an identical copy of itself. Segments that
    /// merely share an endpoint need no special case: the shared endpoint
    /// satisfies both bounding intervals, so it falls out of the crossing
    /// solve (or the overlap enumeration when collinear).
    pub fn intersections(&self, other: &Segment) -> Vec<Point> {
        if self == other {
            return Vec::new();
        }
        if self.orientation == other.orientation {
            // Parallel: either collinear with a possible overlap, or nothing.
            if self.line_equation() == other.line_equation() {
                return self
                    .points()
                    .into_iter()
                    .filter(|point| other.contains(*point))
                    .collect();
            }
            return Vec::new();
        }
        self.crossing(other).into_iter().collect()
    }

    /// Candidate crossing of two non-parallel segments: solve the pair of
    /// carrier line equations, keep the solution only if it is integral and
    /// inside both bounding intervals.
    fn crossing(&self, other: &Segment) -> Option<Point> {
        let (a1, b1, c1) = self.line_equation();
        let (a2, b2, c2) = other.line_equation();
        // Distinct orientations guarantee a nonzero determinant.
        let det = a1 * b2 - a2 * b1;
        let x_num = c1 * b2 - c2 * b1;
        let y_num = a1 * c2 - a2 * c1;
        if x_num % det != 0 || y_num % det != 0 {
            return None;
        }
        let point = Point {
            x: x_num / det,
            y: y_num / det,
        };
        (self.contains(point) && other.contains(point)).then_some(point)
    }
}

/// Inclusive interval test accepting either ordering of the bounds.
pub fn between(bound1: i64, middle: i64, bound2: i64) -> bool {
    (bound1 <= middle && middle <= bound2) || (bound2 <= middle && middle <= bound1)
}

/// Sort and collapse duplicate points.
///
/// Idempotent; the result order follows the point order, not the input
/// order, so any permutation of the input dedupes to the same sequence.
pub fn dedupe_points(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_unstable();
    points.dedup();
    points
}
