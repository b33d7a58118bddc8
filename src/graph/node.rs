use geo::{Distance, Euclidean, Point};
use rstar::{Envelope, AABB};

use crate::graph::Entry;

/// A road network node: an identifier implementing [Entry], its
/// position as `(lng, lat)`, and an elevation in metres.
///
/// Elevation is `0` unless given, matching sources which omit it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
    pub elevation: f64,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a given `position` and `id`, at zero elevation.
    pub fn new(position: Point, id: E) -> Self {
        Self {
            id,
            position,
            elevation: 0.0,
        }
    }

    pub fn with_elevation(self, elevation: f64) -> Self {
        Self { elevation, ..self }
    }
}

impl<E> rstar::PointDistance for Node<E>
where
    E: Entry,
{
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.position, *point).powi(2)
    }
}

impl<E> rstar::RTreeObject for Node<E>
where
    E: Entry,
{
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}
