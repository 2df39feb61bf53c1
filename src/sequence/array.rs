use crate::coord::{Coordinate, Shape};
use crate::coordinates;
use crate::error::Result;
use crate::ordinate::NULL_ORDINATE;
use crate::sequence::sequences::is_equal;
use crate::sequence::{check_ordinate_index, check_position, CoordinateSequence};

/// A coordinate sequence backed by a `Vec` of [`Coordinate`] values.
///
/// Every stored coordinate has the sequence's shape.
#[derive(Debug, Clone)]
pub struct CoordinateArraySequence {
    coords: Vec<Coordinate>,
    shape: Shape,
}

impl CoordinateArraySequence {
    /// A sequence of `len` coordinates at the origin, other ordinates absent.
    pub fn new(len: usize, shape: Shape) -> Self {
        Self {
            coords: vec![Coordinate::empty(shape); len],
            shape,
        }
    }

    /// Copy `coords` into a sequence whose shape is the largest shape among them.
    pub fn from_coords(coords: &[Coordinate]) -> Self {
        Self::from_coords_with_shape(coords, coordinates::max_shape(coords))
    }

    /// Copy `coords` into a sequence of `shape`, matching ordinates by name.
    pub fn from_coords_with_shape(coords: &[Coordinate], shape: Shape) -> Self {
        let coords = coords
            .iter()
            .map(|c| {
                if c.shape() == shape {
                    c.clone()
                } else {
                    Coordinate::with_shape_of(c, shape)
                }
            })
            .collect();
        Self { coords, shape }
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl CoordinateSequence for CoordinateArraySequence {
    fn len(&self) -> usize {
        self.coords.len()
    }

    fn dimension(&self) -> usize {
        self.shape.dimension()
    }

    fn measures(&self) -> usize {
        self.shape.measures()
    }

    fn shape(&self) -> Shape {
        self.shape
    }

    fn ordinate(&self, i: usize, ordinate_index: usize) -> f64 {
        let coord = &self.coords[i];
        if ordinate_index < self.shape.dimension() {
            coord.get(ordinate_index)
        } else {
            NULL_ORDINATE
        }
    }

    fn set_ordinate(&mut self, i: usize, ordinate_index: usize, value: f64) -> Result<()> {
        check_position(i, self.coords.len())?;
        check_ordinate_index(ordinate_index, self.shape.dimension())?;
        self.coords[i].set(ordinate_index, value)
    }

    fn coordinate(&self, i: usize) -> Coordinate {
        self.coords[i].clone()
    }

    fn to_coordinate_array(&self) -> Vec<Coordinate> {
        self.coords.clone()
    }
}

impl From<Vec<Coordinate>> for CoordinateArraySequence {
    fn from(value: Vec<Coordinate>) -> Self {
        let shape = coordinates::max_shape(&value);
        if value.iter().all(|c| c.shape() == shape) {
            Self {
                coords: value,
                shape,
            }
        } else {
            Self::from_coords_with_shape(&value, shape)
        }
    }
}

impl PartialEq for CoordinateArraySequence {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}
