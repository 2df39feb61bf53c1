use crate::coord::{Coordinate, Shape};
use crate::error::{GeoCoordError, Result};
use crate::ordinate::NULL_ORDINATE;
use crate::sequence::sequences::is_equal;
use crate::sequence::{check_ordinate_index, check_position, CoordinateSequence};

/// A coordinate sequence stored as one buffer per ordinate: `xxx`, `yyy`, and so on.
#[derive(Debug, Clone)]
pub struct SeparatedCoordSequence {
    buffers: Vec<Vec<f64>>,
    shape: Shape,
}

fn check(buffers: &[Vec<f64>], shape: Shape) -> Result<()> {
    if buffers.len() != shape.dimension() {
        return Err(GeoCoordError::General(format!(
            "expected {} ordinate buffers for {shape}; got {}",
            shape.dimension(),
            buffers.len()
        )));
    }

    let len = buffers[0].len();
    if buffers.iter().any(|buffer| buffer.len() != len) {
        return Err(GeoCoordError::General(
            "all ordinate buffers must have the same length".to_string(),
        ));
    }

    Ok(())
}

impl SeparatedCoordSequence {
    /// A sequence of `len` coordinates at the origin, other ordinates absent.
    pub fn new(len: usize, shape: Shape) -> Self {
        let empty = Coordinate::empty(shape);
        let buffers = (0..shape.dimension())
            .map(|j| vec![empty.get(j); len])
            .collect();
        Self { buffers, shape }
    }

    /// Construct a new SeparatedCoordSequence from one buffer per ordinate
    ///
    /// # Errors
    ///
    /// - if the number of buffers differs from the shape's dimension
    /// - if the buffers have different lengths
    pub fn try_new(buffers: Vec<Vec<f64>>, shape: Shape) -> Result<Self> {
        check(&buffers, shape)?;
        Ok(Self { buffers, shape })
    }

    /// Copy `coords` into a sequence of `shape`, matching ordinates by name.
    pub fn from_coords_with_shape(coords: &[Coordinate], shape: Shape) -> Self {
        let buffers = shape
            .ordinates()
            .map(|ordinate| coords.iter().map(|c| c.ordinate(ordinate)).collect())
            .collect();
        Self { buffers, shape }
    }

    /// The buffer holding ordinate `ordinate_index` of every coordinate.
    pub fn buffer(&self, ordinate_index: usize) -> Option<&[f64]> {
        self.buffers.get(ordinate_index).map(Vec::as_slice)
    }
}

impl CoordinateSequence for SeparatedCoordSequence {
    fn len(&self) -> usize {
        self.buffers[0].len()
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
        assert!(i < self.len(), "position {i} out of range");
        self.buffers
            .get(ordinate_index)
            .map_or(NULL_ORDINATE, |buffer| buffer[i])
    }

    fn set_ordinate(&mut self, i: usize, ordinate_index: usize, value: f64) -> Result<()> {
        check_position(i, self.len())?;
        check_ordinate_index(ordinate_index, self.shape.dimension())?;
        self.buffers[ordinate_index][i] = value;
        Ok(())
    }
}

impl PartialEq for SeparatedCoordSequence {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sequence::InterleavedCoordSequence;

    #[test]
    fn rejects_mismatched_buffers() {
        assert!(SeparatedCoordSequence::try_new(vec![vec![0.0], vec![1.0]], Shape::XYZ).is_err());
        assert!(
            SeparatedCoordSequence::try_new(vec![vec![0.0, 1.0], vec![1.0]], Shape::XY).is_err()
        );
    }

    #[test]
    fn buffers_per_ordinate() -> Result<()> {
        let seq = SeparatedCoordSequence::try_new(
            vec![vec![0., 1., 2.], vec![3., 4., 5.], vec![6., 7., 8.]],
            Shape::XYM,
        )?;
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.coordinate(1), Coordinate::new_xym(1., 4., 7.));
        assert!(seq.z(1).is_nan());
        assert_eq!(seq.buffer(2), Some(&[6., 7., 8.][..]));
        Ok(())
    }

    #[test]
    fn matches_interleaved_layout() -> Result<()> {
        let coords = crate::test::coords::square_ring_xyz();
        let separated = SeparatedCoordSequence::from_coords_with_shape(&coords, Shape::XYZ);
        let interleaved = InterleavedCoordSequence::from_coords_with_shape(&coords, Shape::XYZ);
        assert!(crate::sequence::sequences::is_equal(&separated, &interleaved));
        Ok(())
    }
}
