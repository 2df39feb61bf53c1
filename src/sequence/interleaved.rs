use crate::coord::{Coordinate, Shape};
use crate::error::{GeoCoordError, Result};
use crate::ordinate::NULL_ORDINATE;
use crate::sequence::sequences::is_equal;
use crate::sequence::{check_ordinate_index, check_position, CoordinateSequence};

/// A coordinate sequence stored interleaved in a single buffer, e.g. `xyzxyzxyz`.
#[derive(Debug, Clone)]
pub struct InterleavedCoordSequence {
    coords: Vec<f64>,
    shape: Shape,
}

fn check(coords: &[f64], shape: Shape) -> Result<()> {
    if coords.len() % shape.dimension() != 0 {
        return Err(GeoCoordError::General(format!(
            "buffer of {} values is not a multiple of dimension {}",
            coords.len(),
            shape.dimension()
        )));
    }

    Ok(())
}

impl InterleavedCoordSequence {
    /// A sequence of `len` coordinates at the origin, other ordinates absent.
    pub fn new(len: usize, shape: Shape) -> Self {
        let empty = Coordinate::empty(shape);
        let template: Vec<f64> = (0..shape.dimension()).map(|j| empty.get(j)).collect();
        let mut coords = Vec::with_capacity(len * template.len());
        for _ in 0..len {
            coords.extend_from_slice(&template);
        }
        Self { coords, shape }
    }

    /// Construct a new InterleavedCoordSequence from a flat buffer
    ///
    /// # Errors
    ///
    /// - if the buffer length is not a multiple of the shape's dimension
    pub fn try_new(coords: Vec<f64>, shape: Shape) -> Result<Self> {
        check(&coords, shape)?;
        Ok(Self { coords, shape })
    }

    /// Copy `coords` into a sequence of `shape`, matching ordinates by name.
    pub fn from_coords_with_shape(coords: &[Coordinate], shape: Shape) -> Self {
        let mut values = Vec::with_capacity(coords.len() * shape.dimension());
        for coord in coords {
            values.extend(shape.ordinates().map(|ordinate| coord.ordinate(ordinate)));
        }
        Self {
            coords: values,
            shape,
        }
    }

    /// The raw interleaved values.
    pub fn values(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_values(self) -> Vec<f64> {
        self.coords
    }
}

impl CoordinateSequence for InterleavedCoordSequence {
    fn len(&self) -> usize {
        self.coords.len() / self.shape.dimension()
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
        let dim = self.shape.dimension();
        assert!(i < self.len(), "position {i} out of range");
        if ordinate_index < dim {
            self.coords[i * dim + ordinate_index]
        } else {
            NULL_ORDINATE
        }
    }

    fn set_ordinate(&mut self, i: usize, ordinate_index: usize, value: f64) -> Result<()> {
        let dim = self.shape.dimension();
        check_position(i, self.len())?;
        check_ordinate_index(ordinate_index, dim)?;
        self.coords[i * dim + ordinate_index] = value;
        Ok(())
    }
}

impl PartialEq for InterleavedCoordSequence {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}
