use geo_traits::CoordTrait;
use rstar::{PointDistance, RTreeObject, AABB};

use crate::coord::Coordinate;

impl CoordTrait for Coordinate {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.shape().into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        assert!(
            n < self.dimension(),
            "ordinate {n} out of range for {}",
            self.shape()
        );
        self.get(n)
    }

    fn x(&self) -> Self::T {
        Coordinate::x(self)
    }

    fn y(&self) -> Self::T {
        Coordinate::y(self)
    }
}

impl CoordTrait for &Coordinate {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.shape().into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        (*self).nth_or_panic(n)
    }

    fn x(&self) -> Self::T {
        Coordinate::x(self)
    }

    fn y(&self) -> Self::T {
        Coordinate::y(self)
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(value: geo::Coord) -> Self {
        Coordinate::new(value.x, value.y)
    }
}

impl From<geo::Point> for Coordinate {
    fn from(value: geo::Point) -> Self {
        value.0.into()
    }
}

impl From<&Coordinate> for geo::Coord {
    fn from(value: &Coordinate) -> Self {
        geo::coord! { x: value.x(), y: value.y() }
    }
}

impl From<Coordinate> for geo::Coord {
    fn from(value: Coordinate) -> Self {
        (&value).into()
    }
}

impl From<&Coordinate> for geo::Point {
    fn from(value: &Coordinate) -> Self {
        geo::Point(value.into())
    }
}

impl RTreeObject for Coordinate {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x(), self.y()])
    }
}

impl PointDistance for Coordinate {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x() - point[0];
        let dy = self.y() - point[1];
        dx * dx + dy * dy
    }
}

/// Copy any [`CoordTrait`] value into an owned [`Coordinate`] of the matching shape.
///
/// `Unknown(n)` dimensions are read as `n` spatial ordinates.
pub fn coordinate_from_trait(coord: &impl CoordTrait<T = f64>) -> Coordinate {
    match coord.dim() {
        geo_traits::Dimensions::Xy => Coordinate::new(coord.x(), coord.y()),
        geo_traits::Dimensions::Xyz => {
            Coordinate::new_xyz(coord.x(), coord.y(), coord.nth_or_panic(2))
        }
        geo_traits::Dimensions::Xym => {
            Coordinate::new_xym(coord.x(), coord.y(), coord.nth_or_panic(2))
        }
        geo_traits::Dimensions::Xyzm => Coordinate::new_xyzm(
            coord.x(),
            coord.y(),
            coord.nth_or_panic(2),
            coord.nth_or_panic(3),
        ),
        geo_traits::Dimensions::Unknown(n) => {
            let mut out = crate::coordinates::create(n.max(2), 0);
            for i in 0..n.max(2) {
                // in range by construction
                let _ = out.set(i, coord.nth_or_panic(i));
            }
            out
        }
    }
}

#[cfg(test)]
mod test {
    use rstar::RTree;

    use super::*;
    use crate::coord::Shape;

    #[test]
    fn trait_view_reports_shape() {
        let c = Coordinate::new_xym(1.0, 2.0, 3.0);
        assert_eq!(CoordTrait::dim(&c), geo_traits::Dimensions::Xym);
        assert_eq!(CoordTrait::nth(&&c, 2), Some(3.0));
        assert_eq!(CoordTrait::nth(&c, 3), None);

        let extended = Coordinate::empty(Shape::new(5, 2));
        assert_eq!(
            CoordTrait::dim(&extended),
            geo_traits::Dimensions::Unknown(5)
        );
    }

    #[test]
    fn from_trait_round_trip() {
        for c in crate::test::coords::one_of_each() {
            let copied = coordinate_from_trait(&&c);
            assert_eq!(copied.dimension(), c.dimension());
            assert_eq!(copied.x(), c.x());
        }
    }

    #[test]
    fn geo_conversions() {
        let c: Coordinate = geo::coord! { x: 1.0, y: 2.0 }.into();
        assert_eq!(c, Coordinate::new(1.0, 2.0));

        let back: geo::Coord = Coordinate::new_xyz(3.0, 4.0, 5.0).into();
        assert_eq!(back, geo::coord! { x: 3.0, y: 4.0 });
    }

    #[test]
    fn rtree_holds_coordinates() {
        let tree = RTree::bulk_load(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new_xyz(5.0, 5.0, 1.0),
            Coordinate::new(10.0, 10.0),
        ]);
        let nearest = tree.nearest_neighbor(&[4.0, 4.0]).unwrap();
        assert_eq!(nearest.z(), 1.0);
    }
}
