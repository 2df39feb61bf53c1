use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::coord::{ExtendedCoord, Shape};
use crate::error::{GeoCoordError, Result};
use crate::ordinate::{Ordinate, NULL_ORDINATE};
use crate::sequence::compare_ordinate;

/// A single point's ordinates.
///
/// The four common shapes are stored inline; any other shape uses [`ExtendedCoord`]. The
/// variant *is* the shape: [`XYM`](Coordinate::XYM) always has dimension 3 with one measure, and
/// so on.
///
/// Reads are lenient and writes are strict: [`get`](Coordinate::get) and
/// [`ordinate`](Coordinate::ordinate) return [`NULL_ORDINATE`] for anything this coordinate does
/// not carry, while [`set`](Coordinate::set) and [`set_ordinate`](Coordinate::set_ordinate) fail
/// with [`GeoCoordError::OrdinateOutOfRange`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Coordinate {
    XY { x: f64, y: f64 },
    XYZ { x: f64, y: f64, z: f64 },
    XYM { x: f64, y: f64, m: f64 },
    XYZM { x: f64, y: f64, z: f64, m: f64 },
    Extended(ExtendedCoord),
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate::XY { x, y }
    }

    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinate::XYZ { x, y, z }
    }

    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Coordinate::XYM { x, y, m }
    }

    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Coordinate::XYZM { x, y, z, m }
    }

    /// A coordinate of the given shape at the origin, with every other ordinate absent.
    pub fn empty(shape: Shape) -> Self {
        match (shape.dimension(), shape.measures()) {
            (2, 0) => Coordinate::new(0.0, 0.0),
            (3, 0) => Coordinate::new_xyz(0.0, 0.0, NULL_ORDINATE),
            (3, 1) => Coordinate::new_xym(0.0, 0.0, NULL_ORDINATE),
            (4, 1) => Coordinate::new_xyzm(0.0, 0.0, NULL_ORDINATE, NULL_ORDINATE),
            _ => Coordinate::Extended(ExtendedCoord::with_shape(shape)),
        }
    }

    /// Build a coordinate of `shape` from the ordinates of `other`, matched by name.
    pub fn with_shape_of(other: &Coordinate, shape: Shape) -> Self {
        let mut coord = Coordinate::empty(shape);
        coord.assign_from(other);
        coord
    }

    pub fn shape(&self) -> Shape {
        match self {
            Coordinate::XY { .. } => Shape::XY,
            Coordinate::XYZ { .. } => Shape::XYZ,
            Coordinate::XYM { .. } => Shape::XYM,
            Coordinate::XYZM { .. } => Shape::XYZM,
            Coordinate::Extended(c) => c.shape(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.shape().dimension()
    }

    pub fn measures(&self) -> usize {
        self.shape().measures()
    }

    pub fn x(&self) -> f64 {
        match self {
            Coordinate::XY { x, .. }
            | Coordinate::XYZ { x, .. }
            | Coordinate::XYM { x, .. }
            | Coordinate::XYZM { x, .. } => *x,
            Coordinate::Extended(c) => c.x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Coordinate::XY { y, .. }
            | Coordinate::XYZ { y, .. }
            | Coordinate::XYM { y, .. }
            | Coordinate::XYZM { y, .. } => *y,
            Coordinate::Extended(c) => c.y,
        }
    }

    /// Elevation, or [`NULL_ORDINATE`] if this shape has none.
    pub fn z(&self) -> f64 {
        self.ordinate(Ordinate::Z)
    }

    /// First measure, or [`NULL_ORDINATE`] if this shape has none.
    pub fn m(&self) -> f64 {
        self.ordinate(Ordinate::M)
    }

    pub fn set_x(&mut self, value: f64) {
        match self {
            Coordinate::XY { x, .. }
            | Coordinate::XYZ { x, .. }
            | Coordinate::XYM { x, .. }
            | Coordinate::XYZM { x, .. } => *x = value,
            Coordinate::Extended(c) => c.x = value,
        }
    }

    pub fn set_y(&mut self, value: f64) {
        match self {
            Coordinate::XY { y, .. }
            | Coordinate::XYZ { y, .. }
            | Coordinate::XYM { y, .. }
            | Coordinate::XYZM { y, .. } => *y = value,
            Coordinate::Extended(c) => c.y = value,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut f64> {
        match (self, index) {
            (Coordinate::XY { x, .. }, 0)
            | (Coordinate::XYZ { x, .. }, 0)
            | (Coordinate::XYM { x, .. }, 0)
            | (Coordinate::XYZM { x, .. }, 0) => Some(x),
            (Coordinate::XY { y, .. }, 1)
            | (Coordinate::XYZ { y, .. }, 1)
            | (Coordinate::XYM { y, .. }, 1)
            | (Coordinate::XYZM { y, .. }, 1) => Some(y),
            (Coordinate::XYZ { z, .. }, 2) | (Coordinate::XYZM { z, .. }, 2) => Some(z),
            (Coordinate::XYM { m, .. }, 2) | (Coordinate::XYZM { m, .. }, 3) => Some(m),
            (Coordinate::Extended(c), i) => c.slot_mut(i),
            _ => None,
        }
    }

    /// The ordinate at positional `index`, or [`NULL_ORDINATE`] if `index >= dimension`.
    pub fn get(&self, index: usize) -> f64 {
        match (self, index) {
            (_, 0) => self.x(),
            (_, 1) => self.y(),
            (Coordinate::XYZ { z, .. }, 2) | (Coordinate::XYZM { z, .. }, 2) => *z,
            (Coordinate::XYM { m, .. }, 2) | (Coordinate::XYZM { m, .. }, 3) => *m,
            (Coordinate::Extended(c), i) => c.get(i),
            _ => NULL_ORDINATE,
        }
    }

    /// Overwrite the ordinate at positional `index`.
    ///
    /// # Errors
    ///
    /// - if `index >= dimension`
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

    /// The named ordinate, or [`NULL_ORDINATE`] if this shape does not carry it.
    pub fn ordinate(&self, ordinate: Ordinate) -> f64 {
        self.shape()
            .index_of(ordinate)
            .map_or(NULL_ORDINATE, |i| self.get(i))
    }

    /// Overwrite the named ordinate.
    ///
    /// # Errors
    ///
    /// - if this shape does not carry `ordinate`
    pub fn set_ordinate(&mut self, ordinate: Ordinate, value: f64) -> Result<()> {
        let shape = self.shape();
        match shape.index_of(ordinate) {
            Some(i) => self.set(i, value),
            None => Err(GeoCoordError::OrdinateOutOfRange {
                index: shape.dimension(),
                dimension: shape.dimension(),
            }),
        }
    }

    /// A new coordinate of the same variant (and shape) holding the given values.
    ///
    /// Values this variant cannot hold are dropped; ordinates that are not given are absent.
    pub fn create(&self, x: f64, y: f64, z: f64, m: f64) -> Coordinate {
        match self {
            Coordinate::XY { .. } => Coordinate::new(x, y),
            Coordinate::XYZ { .. } => Coordinate::new_xyz(x, y, z),
            Coordinate::XYM { .. } => Coordinate::new_xym(x, y, m),
            Coordinate::XYZM { .. } => Coordinate::new_xyzm(x, y, z, m),
            Coordinate::Extended(c) => {
                let mut created = ExtendedCoord::with_shape(c.shape());
                created.x = x;
                created.y = y;
                if let Some(slot) = created.spatial.first_mut() {
                    *slot = z;
                }
                if let Some(slot) = created.measures.first_mut() {
                    *slot = m;
                }
                Coordinate::Extended(created)
            }
        }
    }

    /// Overwrite this coordinate's ordinates from `other`, keeping this coordinate's shape.
    ///
    /// Ordinates are matched by name: the n-th spatial ordinate and the k-th measure of `other`
    /// land in the n-th spatial ordinate and k-th measure here. Anything `other` lacks becomes
    /// [`NULL_ORDINATE`].
    pub fn assign_from(&mut self, other: &Coordinate) {
        let shape = self.shape();
        for (i, ordinate) in shape.ordinates().enumerate() {
            if let Some(slot) = self.slot_mut(i) {
                *slot = other.ordinate(ordinate);
            }
        }
    }

    /// Whether X and Y are finite.
    pub fn is_valid(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Whether X and Y each differ by no more than `tolerance`.
    pub fn equals_2d_with_tolerance(&self, other: &Coordinate, tolerance: f64) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }

    /// 2D equality plus Z equality, where two absent Z values are equal.
    pub fn equals_3d(&self, other: &Coordinate) -> bool {
        self.equals_2d(other) && nan_eq(self.z(), other.z())
    }

    /// Whether the Z values differ by no more than `tolerance`. Two absent Z values are equal.
    pub fn equal_in_z(&self, other: &Coordinate, tolerance: f64) -> bool {
        let (a, b) = (self.z(), other.z());
        (a.is_nan() && b.is_nan()) || (a - b).abs() <= tolerance
    }

    pub fn distance_2d(&self, other: &Coordinate) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }

    /// Euclidean distance including elevation. NaN if either Z is absent.
    pub fn distance_3d(&self, other: &Coordinate) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Order by X, then Y. NaN sorts before every number.
    pub fn compare_xy(&self, other: &Coordinate) -> Ordering {
        compare_ordinate(self.x(), other.x()).then_with(|| compare_ordinate(self.y(), other.y()))
    }
}

fn nan_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Bits of `value` with every NaN and both zeros collapsed, for hashing.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        NULL_ORDINATE.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinate {
    /// X and Y compare by value. Every other ordinate either side carries compares by name,
    /// with two absent values equal and absent vs. present unequal.
    fn eq(&self, other: &Self) -> bool {
        if !self.equals_2d(other) {
            return false;
        }
        let union = self.shape().union(&other.shape());
        union
            .ordinates()
            .skip(2)
            .all(|ordinate| nan_eq(self.ordinate(ordinate), other.ordinate(ordinate)))
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x()).hash(state);
        canonical_bits(self.y()).hash(state);
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::new(0.0, 0.0)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}", self.x(), self.y())?;
        let shape = self.shape();
        for ordinate in shape.ordinates().skip(2) {
            let value = self.ordinate(ordinate);
            if ordinate.is_measure() {
                write!(f, ", m={value}")?;
            } else {
                write!(f, ", {value}")?;
            }
        }
        write!(f, ")")
    }
}
