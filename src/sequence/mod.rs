//! Fixed-length, mutable sequences of same-shaped coordinates.
//!
//! [`CoordinateSequence`] is the contract geometry objects program against. Three layouts
//! implement it:
//!
//! - [`CoordinateArraySequence`]: one [`Coordinate`] value per position.
//! - [`InterleavedCoordSequence`]: a single buffer laid out as `xyzxyzxyz`.
//! - [`SeparatedCoordSequence`]: one buffer per ordinate, `xxx`, `yyy`, `zzz`.
//!
//! [`CoordSequence`] abstracts over the three.

mod array;
mod combined;
mod comparator;
mod factory;
mod interleaved;
mod separated;
pub mod sequences;

pub use array::CoordinateArraySequence;
pub use combined::CoordSequence;
pub use comparator::{compare_ordinate, CoordinateSequenceComparator};
pub use factory::{
    CoordSequenceFactory, CoordinateArraySequenceFactory, CoordinateSequenceFactory,
    InterleavedCoordSequenceFactory, SeparatedCoordSequenceFactory, SequenceLayout,
};
pub use interleaved::InterleavedCoordSequence;
pub use separated::SeparatedCoordSequence;

use crate::coord::{Coordinate, Shape};
use crate::error::{GeoCoordError, Result};
use crate::ordinate::{Ordinate, NULL_ORDINATE};

/// A fixed-length, mutable sequence of coordinates that all share one [`Shape`].
///
/// Ordinate reads are lenient: an `ordinate_index` at or beyond the dimension yields
/// [`NULL_ORDINATE`]. Writes are strict and fail instead. Positions are not lenient in either
/// direction; reading a position `>= len()` panics, writing one is an error.
pub trait CoordinateSequence {
    /// The number of coordinates.
    fn len(&self) -> usize;

    /// The number of ordinates in each coordinate.
    fn dimension(&self) -> usize;

    /// How many of the trailing ordinates are measures.
    fn measures(&self) -> usize;

    /// The ordinate at `ordinate_index` of the coordinate at position `i`.
    ///
    /// # Panics
    ///
    /// - if `i >= len()`
    fn ordinate(&self, i: usize, ordinate_index: usize) -> f64;

    /// Overwrite the ordinate at `ordinate_index` of the coordinate at position `i`.
    ///
    /// # Errors
    ///
    /// - if `i >= len()` or `ordinate_index >= dimension()`
    fn set_ordinate(&mut self, i: usize, ordinate_index: usize, value: f64) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shape(&self) -> Shape {
        Shape::new_unchecked(self.dimension(), self.measures())
    }

    /// Number of spatial ordinates, X and Y included.
    fn spatial(&self) -> usize {
        self.dimension() - self.measures()
    }

    fn has_z(&self) -> bool {
        self.spatial() > 2
    }

    fn has_m(&self) -> bool {
        self.measures() > 0
    }

    /// The named ordinate of the coordinate at position `i`, or [`NULL_ORDINATE`] if this
    /// sequence does not carry it.
    fn named_ordinate(&self, i: usize, ordinate: Ordinate) -> f64 {
        self.shape()
            .index_of(ordinate)
            .map_or(NULL_ORDINATE, |index| self.ordinate(i, index))
    }

    fn x(&self, i: usize) -> f64 {
        self.ordinate(i, 0)
    }

    fn y(&self, i: usize) -> f64 {
        self.ordinate(i, 1)
    }

    fn z(&self, i: usize) -> f64 {
        self.named_ordinate(i, Ordinate::Z)
    }

    fn m(&self, i: usize) -> f64 {
        self.named_ordinate(i, Ordinate::M)
    }

    /// A fresh coordinate of this sequence's shape.
    fn create_coordinate(&self) -> Coordinate {
        Coordinate::empty(self.shape())
    }

    /// An owned copy of the coordinate at position `i`.
    ///
    /// # Panics
    ///
    /// - if `i >= len()`
    fn coordinate(&self, i: usize) -> Coordinate {
        let mut coord = self.create_coordinate();
        self.coordinate_into(i, &mut coord);
        coord
    }

    /// Copy the coordinate at position `i` into `dest`, matching ordinates by name and keeping
    /// the shape of `dest`.
    ///
    /// # Panics
    ///
    /// - if `i >= len()`
    fn coordinate_into(&self, i: usize, dest: &mut Coordinate) {
        let dest_shape = dest.shape();
        for (index, ordinate) in dest_shape.ordinates().enumerate() {
            let value = self.named_ordinate(i, ordinate);
            // index < dest dimension, so this cannot fail
            let _ = dest.set(index, value);
        }
    }

    /// Overwrite position `i` with `coord`, matching ordinates by name. Ordinates `coord` does
    /// not carry become [`NULL_ORDINATE`].
    fn set_coordinate(&mut self, i: usize, coord: &Coordinate) -> Result<()> {
        let shape = self.shape();
        for (index, ordinate) in shape.ordinates().enumerate() {
            self.set_ordinate(i, index, coord.ordinate(ordinate))?;
        }
        Ok(())
    }

    fn to_coordinate_array(&self) -> Vec<Coordinate> {
        (0..self.len()).map(|i| self.coordinate(i)).collect()
    }

    /// The 2D bounding rectangle of every coordinate with finite X and Y.
    fn envelope(&self) -> Option<geo::Rect> {
        let mut bounds: Option<(geo::Coord, geo::Coord)> = None;
        for i in 0..self.len() {
            let (x, y) = (self.x(i), self.y(i));
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            bounds = Some(match bounds {
                None => (geo::coord! { x: x, y: y }, geo::coord! { x: x, y: y }),
                Some((min, max)) => (
                    geo::coord! { x: min.x.min(x), y: min.y.min(y) },
                    geo::coord! { x: max.x.max(x), y: max.y.max(y) },
                ),
            });
        }
        bounds.map(|(min, max)| geo::Rect::new(min, max))
    }
}

pub(crate) fn check_position(i: usize, len: usize) -> Result<()> {
    if i >= len {
        return Err(GeoCoordError::InvalidArgument(format!(
            "position {i} out of range for sequence of length {len}"
        )));
    }

    Ok(())
}

pub(crate) fn check_ordinate_index(ordinate_index: usize, dimension: usize) -> Result<()> {
    if ordinate_index >= dimension {
        return Err(GeoCoordError::OrdinateOutOfRange {
            index: ordinate_index,
            dimension,
        });
    }

    Ok(())
}
