use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{GeoCoordError, Result};
use crate::ordinate::{Ordinate, Slot};

/// The `(dimension, measures)` pair describing which ordinates a coordinate carries.
///
/// X and Y always occupy ordinate indices 0 and 1. Further spatial ordinates follow, then the
/// measures occupy the trailing `measures` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    dimension: usize,
    measures: usize,
}

/// The serialized form of a [`Shape`], validated before it becomes one.
#[derive(Deserialize)]
struct RawShape {
    dimension: usize,
    measures: usize,
}

impl TryFrom<RawShape> for Shape {
    type Error = GeoCoordError;

    fn try_from(value: RawShape) -> Result<Self> {
        Shape::try_new(value.dimension, value.measures)
    }
}

fn check(dimension: usize, measures: usize) -> Result<()> {
    if dimension < measures || dimension - measures < 2 {
        return Err(GeoCoordError::InvalidShape(format!(
            "dimension {dimension} with {measures} measures leaves fewer than 2 spatial ordinates"
        )));
    }

    Ok(())
}

impl Shape {
    pub const XY: Shape = Shape::new_unchecked(2, 0);
    pub const XYZ: Shape = Shape::new_unchecked(3, 0);
    pub const XYM: Shape = Shape::new_unchecked(3, 1);
    pub const XYZM: Shape = Shape::new_unchecked(4, 1);

    /// Construct a new Shape
    ///
    /// # Panics
    ///
    /// - if `dimension - measures < 2`
    pub fn new(dimension: usize, measures: usize) -> Self {
        check(dimension, measures).unwrap();
        Self {
            dimension,
            measures,
        }
    }

    /// Construct a new Shape
    ///
    /// # Errors
    ///
    /// - if `dimension - measures < 2`
    pub fn try_new(dimension: usize, measures: usize) -> Result<Self> {
        check(dimension, measures)?;
        Ok(Self {
            dimension,
            measures,
        })
    }

    pub(crate) const fn new_unchecked(dimension: usize, measures: usize) -> Self {
        Self {
            dimension,
            measures,
        }
    }

    /// Build a shape from a spatial ordinate count and a measure count.
    ///
    /// Spatial counts below 2 are raised to 2.
    pub fn from_parts(spatial: usize, measures: usize) -> Self {
        Self::new_unchecked(spatial.max(2) + measures, measures)
    }

    /// Total number of ordinates.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of trailing ordinates that are measures.
    pub fn measures(&self) -> usize {
        self.measures
    }

    /// Number of spatial ordinates, X and Y included.
    pub fn spatial(&self) -> usize {
        self.dimension - self.measures
    }

    pub fn has_z(&self) -> bool {
        self.spatial() > 2
    }

    pub fn has_m(&self) -> bool {
        self.measures > 0
    }

    /// The smallest shape able to hold every ordinate of both `self` and `other`.
    pub fn union(&self, other: &Shape) -> Shape {
        Shape::from_parts(
            self.spatial().max(other.spatial()),
            self.measures.max(other.measures),
        )
    }

    /// Whether every ordinate of `other` also belongs to `self`.
    pub fn contains(&self, other: &Shape) -> bool {
        self.spatial() >= other.spatial() && self.measures >= other.measures
    }

    /// The positional index of `ordinate` in coordinates of this shape, if they carry it.
    pub fn index_of(&self, ordinate: Ordinate) -> Option<usize> {
        match ordinate.slot()? {
            Slot::Spatial(i) if i < self.spatial() => Some(i),
            Slot::Measure(i) if i < self.measures => Some(self.spatial() + i),
            _ => None,
        }
    }

    /// The ordinate stored at positional `index`, if `index < dimension`.
    pub fn ordinate_at(&self, index: usize) -> Option<Ordinate> {
        if index < self.spatial() {
            Some(Ordinate::from_spatial_index(index))
        } else if index < self.dimension {
            Some(Ordinate::from_measure_index(index - self.spatial()))
        } else {
            None
        }
    }

    /// Iterate over the ordinates of this shape in index order.
    pub fn ordinates(self) -> impl Iterator<Item = Ordinate> {
        (0..self.dimension).filter_map(move |i| self.ordinate_at(i))
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::XY
    }
}

impl TryFrom<(i64, i64)> for Shape {
    type Error = GeoCoordError;

    fn try_from((dimension, measures): (i64, i64)) -> Result<Self> {
        let dimension = usize::try_from(dimension).map_err(|_| {
            GeoCoordError::InvalidShape(format!("dimension must be non-negative; got {dimension}"))
        })?;
        let measures = usize::try_from(measures).map_err(|_| {
            GeoCoordError::InvalidShape(format!("measures must be non-negative; got {measures}"))
        })?;
        Shape::try_new(dimension, measures)
    }
}

impl From<Shape> for geo_traits::Dimensions {
    fn from(value: Shape) -> Self {
        match (value.dimension, value.measures) {
            (2, 0) => geo_traits::Dimensions::Xy,
            (3, 0) => geo_traits::Dimensions::Xyz,
            (3, 1) => geo_traits::Dimensions::Xym,
            (4, 1) => geo_traits::Dimensions::Xyzm,
            (dimension, _) => geo_traits::Dimensions::Unknown(dimension),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.dimension, self.measures) {
            (2, 0) => write!(f, "XY"),
            (3, 0) => write!(f, "XYZ"),
            (3, 1) => write!(f, "XYM"),
            (4, 1) => write!(f, "XYZM"),
            (dimension, measures) => write!(f, "D{dimension}M{measures}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_too_few_spatial() {
        assert!(Shape::try_new(2, 1).is_err());
        assert!(Shape::try_new(1, 0).is_err());
        assert!(Shape::try_new(3, 4).is_err());
        assert!(Shape::try_new(5, 3).is_ok());
    }

    #[test]
    fn rejects_negative() {
        assert!(Shape::try_from((-1, 0)).is_err());
        assert!(Shape::try_from((3, -1)).is_err());
        assert_eq!(Shape::try_from((4, 1)).unwrap(), Shape::XYZM);
    }

    #[test]
    fn index_layout() {
        let shape = Shape::new(5, 2);
        assert_eq!(shape.index_of(Ordinate::X), Some(0));
        assert_eq!(shape.index_of(Ordinate::Z), Some(2));
        assert_eq!(shape.index_of(Ordinate::M), Some(3));
        assert_eq!(shape.index_of(Ordinate::Measure(2)), Some(4));
        assert_eq!(shape.index_of(Ordinate::Spatial(4)), None);
        assert_eq!(shape.ordinate_at(3), Some(Ordinate::M));
        assert_eq!(shape.ordinate_at(5), None);

        assert_eq!(Shape::XYM.index_of(Ordinate::Z), None);
        assert_eq!(Shape::XYM.index_of(Ordinate::M), Some(2));
    }

    #[test]
    fn union_of_z_and_m() {
        assert_eq!(Shape::XYZ.union(&Shape::XYM), Shape::XYZM);
        assert!(Shape::XYZM.contains(&Shape::XYM));
        assert!(!Shape::XYZ.contains(&Shape::XYM));
    }

    #[test]
    fn ordinates_outlive_the_shape() {
        let ordinates: Vec<Ordinate> = Shape::new(5, 2).ordinates().collect();
        assert_eq!(
            ordinates,
            vec![
                Ordinate::X,
                Ordinate::Y,
                Ordinate::Z,
                Ordinate::M,
                Ordinate::Measure(2)
            ]
        );
    }

    #[test]
    fn deserialize_validates() {
        let shape: Shape = serde_json::from_str(r#"{"dimension":5,"measures":2}"#).unwrap();
        assert_eq!(shape, Shape::new(5, 2));
        assert_eq!(
            serde_json::to_string(&Shape::XYM).unwrap(),
            r#"{"dimension":3,"measures":1}"#
        );

        assert!(serde_json::from_str::<Shape>(r#"{"dimension":2,"measures":3}"#).is_err());
        assert!(serde_json::from_str::<Shape>(r#"{"dimension":1,"measures":0}"#).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Shape::XYZM.to_string(), "XYZM");
        assert_eq!(Shape::new(5, 2).to_string(), "D5M2");
    }
}
