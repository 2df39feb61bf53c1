//! Shape introspection and shape-directed construction of [`Coordinate`]s.

use crate::coord::{Coordinate, ExtendedCoord, Shape};
use crate::error::Result;

/// A coordinate at the origin with the given shape.
///
/// XY, XYZ, XYM and XYZM get their own variants; every other valid shape is extended.
///
/// # Panics
///
/// - if `dimension - measures < 2`
pub fn create(dimension: usize, measures: usize) -> Coordinate {
    Coordinate::empty(Shape::new(dimension, measures))
}

/// A coordinate at the origin with the given shape.
///
/// # Errors
///
/// - if `dimension - measures < 2`
pub fn try_create(dimension: usize, measures: usize) -> Result<Coordinate> {
    match (dimension, measures) {
        (2, 0) | (3, 0) | (3, 1) | (4, 1) => Ok(Coordinate::empty(Shape::new_unchecked(
            dimension, measures,
        ))),
        _ => Ok(Coordinate::Extended(ExtendedCoord::try_new(
            dimension, measures,
        )?)),
    }
}

/// Total ordinate count of `coord`, or 2 when there is no coordinate.
pub fn dimension_of(coord: Option<&Coordinate>) -> usize {
    coord.map_or(2, Coordinate::dimension)
}

/// Measure count of `coord`, or 0 when there is no coordinate.
pub fn measures_of(coord: Option<&Coordinate>) -> usize {
    coord.map_or(0, Coordinate::measures)
}

/// `dimension - measures`.
pub fn spatial_dimension(coord: Option<&Coordinate>) -> usize {
    dimension_of(coord) - measures_of(coord)
}

pub fn has_z(coord: Option<&Coordinate>) -> bool {
    spatial_dimension(coord) > 2
}

pub fn has_m(coord: Option<&Coordinate>) -> bool {
    measures_of(coord) > 0
}

/// The smallest shape able to hold every coordinate in `coords`; XY when empty.
pub fn max_shape<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Shape {
    coords
        .into_iter()
        .fold(Shape::XY, |acc, c| acc.union(&c.shape()))
}
