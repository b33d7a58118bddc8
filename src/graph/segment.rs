use geo::{Bearing, Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// The attributes of a directed road edge.
///
/// `length` is in metres; a segment is only walkable when it is strictly
/// positive. `bearing` is the compass heading in degrees, `0` when the
/// source did not provide one.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub length: f64,
    pub bearing: f64,
}

impl Segment {
    pub fn new(length: f64) -> Self {
        Self {
            length,
            bearing: 0.0,
        }
    }

    pub fn with_bearing(self, bearing: f64) -> Self {
        Self { bearing, ..self }
    }

    /// Derives the segment joining two positions: the great-circle
    /// length and the initial bearing, normalised to `[0, 360)`.
    pub fn between(source: Point, target: Point) -> Self {
        Self {
            length: Haversine.distance(source, target),
            bearing: Haversine.bearing(source, target).rem_euclid(360.0),
        }
    }

    /// Zero, negative and NaN lengths are never walked.
    #[inline]
    pub fn traversable(&self) -> bool {
        self.length > 0.0
    }
}
