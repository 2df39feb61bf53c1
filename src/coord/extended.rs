use serde::{Deserialize, Serialize};

use crate::coord::Shape;
use crate::error::{GeoCoordError, Result};
use crate::ordinate::NULL_ORDINATE;

/// A coordinate whose shape is not one of XY, XYZ, XYM or XYZM.
///
/// Spatial ordinates beyond X and Y live in `spatial` (so `spatial[0]` is Z), measures live in
/// `measures`. The shape is fixed at construction, and is never one of the four shapes that
/// have their own [`Coordinate`](crate::Coordinate) variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawExtendedCoord")]
pub struct ExtendedCoord {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) spatial: Box<[f64]>,
    pub(crate) measures: Box<[f64]>,
}

#[derive(Deserialize)]
struct RawExtendedCoord {
    x: f64,
    y: f64,
    spatial: Box<[f64]>,
    measures: Box<[f64]>,
}

impl TryFrom<RawExtendedCoord> for ExtendedCoord {
    type Error = GeoCoordError;

    fn try_from(value: RawExtendedCoord) -> Result<Self> {
        let coord = Self {
            x: value.x,
            y: value.y,
            spatial: value.spatial,
            measures: value.measures,
        };
        check(coord.shape())?;
        Ok(coord)
    }
}

fn check(shape: Shape) -> Result<()> {
    if matches!(
        (shape.dimension(), shape.measures()),
        (2, 0) | (3, 0) | (3, 1) | (4, 1)
    ) {
        return Err(GeoCoordError::InvalidShape(format!(
            "{shape} has its own coordinate variant"
        )));
    }

    Ok(())
}

impl ExtendedCoord {
    /// Construct a new ExtendedCoord at the origin, with every other ordinate absent.
    ///
    /// # Panics
    ///
    /// - if `dimension - measures < 2`
    /// - if the shape is XY, XYZ, XYM or XYZM
    pub fn new(dimension: usize, measures: usize) -> Self {
        Self::try_new(dimension, measures).unwrap()
    }

    /// Construct a new ExtendedCoord at the origin, with every other ordinate absent.
    ///
    /// # Errors
    ///
    /// - if `dimension - measures < 2`
    /// - if the shape is XY, XYZ, XYM or XYZM
    pub fn try_new(dimension: usize, measures: usize) -> Result<Self> {
        let shape = Shape::try_new(dimension, measures)?;
        check(shape)?;
        Ok(Self::with_shape(shape))
    }

    /// Callers guarantee `shape` is not one of the four variant shapes.
    pub(crate) fn with_shape(shape: Shape) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spatial: vec![NULL_ORDINATE; shape.spatial() - 2].into_boxed_slice(),
            measures: vec![NULL_ORDINATE; shape.measures()].into_boxed_slice(),
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::from_parts(2 + self.spatial.len(), self.measures.len())
    }

    pub fn dimension(&self) -> usize {
        2 + self.spatial.len() + self.measures.len()
    }

    pub fn measures(&self) -> usize {
        self.measures.len()
    }

    /// Spatial ordinates beyond X and Y.
    pub fn extra_spatial(&self) -> &[f64] {
        &self.spatial
    }

    pub fn measure_values(&self) -> &[f64] {
        &self.measures
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&f64> {
        match index {
            0 => Some(&self.x),
            1 => Some(&self.y),
            i if i - 2 < self.spatial.len() => self.spatial.get(i - 2),
            i => self.measures.get(i - 2 - self.spatial.len()),
        }
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut f64> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            i if i - 2 < self.spatial.len() => self.spatial.get_mut(i - 2),
            i => {
                let offset = i - 2 - self.spatial.len();
                self.measures.get_mut(offset)
            }
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.slot(index).copied().unwrap_or(NULL_ORDINATE)
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let dimension = self.dimension();
        match self.slot_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GeoCoordError::OrdinateOutOfRange { index, dimension }),
        }
    }
}
