use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, Shape};
use crate::coordinates;
use crate::ordinate::Ordinates;
use crate::sequence::{
    CoordSequence, CoordinateArraySequence, CoordinateSequence, InterleavedCoordSequence,
    SeparatedCoordSequence,
};

/// Builds coordinate sequences of a requested shape.
///
/// A factory never fails: when asked for a shape beyond its [`ordinates`](Self::ordinates) it
/// returns the closest shape it supports instead. Callers must check the shape of what they get
/// back.
pub trait CoordinateSequenceFactory {
    type Sequence: CoordinateSequence;

    /// The ordinates this factory's sequences can hold. Always includes X and Y.
    fn ordinates(&self) -> Ordinates;

    /// A sequence of `size` coordinates with at most the requested shape.
    fn create(&self, size: usize, dimension: usize, measures: usize) -> Self::Sequence;

    /// A sequence holding copies of `coords`, shaped to fit the largest coordinate among them.
    ///
    /// `None` and an empty slice both give an empty sequence.
    fn create_from_coords(&self, coords: Option<&[Coordinate]>) -> Self::Sequence;

    /// A copy of `seq`, or an empty XY sequence when there is none.
    fn create_from_sequence<S>(&self, seq: Option<&S>) -> Self::Sequence
    where
        S: CoordinateSequence + ?Sized,
    {
        match seq {
            None => self.create(0, 2, 0),
            Some(seq) if seq.is_empty() => self.create(0, seq.dimension(), seq.measures()),
            Some(seq) => self.create_from_coords(Some(seq.to_coordinate_array().as_slice())),
        }
    }

    /// A sequence of `size` coordinates with `dimension` ordinates and no measures.
    fn create_with_dimension(&self, size: usize, dimension: usize) -> Self::Sequence {
        self.create(size, dimension, 0)
    }

    /// A sequence of `size` coordinates carrying the requested ordinates this factory supports.
    fn create_with_ordinates(&self, size: usize, ordinates: Ordinates) -> Self::Sequence {
        let shape = (ordinates & self.ordinates()).shape();
        self.create(size, shape.dimension(), shape.measures())
    }
}

/// Reduce a requested shape to what `ordinates` can hold.
///
/// Measures are capped first, then the spatial ordinates are held between 2 and the supported
/// maximum.
pub(crate) fn clamp_shape(ordinates: Ordinates, dimension: usize, measures: usize) -> Shape {
    let max = ordinates.max_shape();
    let measures_clamped = measures.min(max.measures());
    let spatial = dimension.saturating_sub(measures).clamp(2, max.spatial());
    let shape = Shape::from_parts(spatial, measures_clamped);

    if shape.dimension() != dimension || shape.measures() != measures {
        log::debug!(
            "clamped requested shape (dimension {dimension}, measures {measures}) to {shape} \
             for ordinates {ordinates:?}"
        );
    }
    shape
}

fn clamp_coords_shape(ordinates: Ordinates, coords: &[Coordinate]) -> Shape {
    let wanted = coordinates::max_shape(coords);
    clamp_shape(ordinates, wanted.dimension(), wanted.measures())
}

/// Creates [`CoordinateArraySequence`]s. Supports up to XYZM unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateArraySequenceFactory {
    ordinates: Ordinates,
}

impl CoordinateArraySequenceFactory {
    pub fn new(ordinates: Ordinates) -> Self {
        Self {
            ordinates: ordinates | Ordinates::XY,
        }
    }
}

impl Default for CoordinateArraySequenceFactory {
    fn default() -> Self {
        Self::new(Ordinates::XYZM)
    }
}

impl CoordinateSequenceFactory for CoordinateArraySequenceFactory {
    type Sequence = CoordinateArraySequence;

    fn ordinates(&self) -> Ordinates {
        self.ordinates
    }

    fn create(&self, size: usize, dimension: usize, measures: usize) -> Self::Sequence {
        CoordinateArraySequence::new(size, clamp_shape(self.ordinates, dimension, measures))
    }

    fn create_from_coords(&self, coords: Option<&[Coordinate]>) -> Self::Sequence {
        let coords = coords.unwrap_or_default();
        let shape = clamp_coords_shape(self.ordinates, coords);
        CoordinateArraySequence::from_coords_with_shape(coords, shape)
    }
}

/// Creates [`InterleavedCoordSequence`]s. Supports every ordinate unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterleavedCoordSequenceFactory {
    ordinates: Ordinates,
}

impl InterleavedCoordSequenceFactory {
    pub fn new(ordinates: Ordinates) -> Self {
        Self {
            ordinates: ordinates | Ordinates::XY,
        }
    }
}

impl Default for InterleavedCoordSequenceFactory {
    fn default() -> Self {
        Self::new(Ordinates::ALL)
    }
}

impl CoordinateSequenceFactory for InterleavedCoordSequenceFactory {
    type Sequence = InterleavedCoordSequence;

    fn ordinates(&self) -> Ordinates {
        self.ordinates
    }

    fn create(&self, size: usize, dimension: usize, measures: usize) -> Self::Sequence {
        InterleavedCoordSequence::new(size, clamp_shape(self.ordinates, dimension, measures))
    }

    fn create_from_coords(&self, coords: Option<&[Coordinate]>) -> Self::Sequence {
        let coords = coords.unwrap_or_default();
        let shape = clamp_coords_shape(self.ordinates, coords);
        InterleavedCoordSequence::from_coords_with_shape(coords, shape)
    }
}

/// Creates [`SeparatedCoordSequence`]s. Supports every ordinate unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeparatedCoordSequenceFactory {
    ordinates: Ordinates,
}

impl SeparatedCoordSequenceFactory {
    pub fn new(ordinates: Ordinates) -> Self {
        Self {
            ordinates: ordinates | Ordinates::XY,
        }
    }
}

impl Default for SeparatedCoordSequenceFactory {
    fn default() -> Self {
        Self::new(Ordinates::ALL)
    }
}

impl CoordinateSequenceFactory for SeparatedCoordSequenceFactory {
    type Sequence = SeparatedCoordSequence;

    fn ordinates(&self) -> Ordinates {
        self.ordinates
    }

    fn create(&self, size: usize, dimension: usize, measures: usize) -> Self::Sequence {
        SeparatedCoordSequence::new(size, clamp_shape(self.ordinates, dimension, measures))
    }

    fn create_from_coords(&self, coords: Option<&[Coordinate]>) -> Self::Sequence {
        let coords = coords.unwrap_or_default();
        let shape = clamp_coords_shape(self.ordinates, coords);
        SeparatedCoordSequence::from_coords_with_shape(coords, shape)
    }
}

/// The permitted sequence layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceLayout {
    /// One [`Coordinate`] value per position.
    Array,

    /// A single `xyzxyz` buffer.
    #[default]
    Interleaved,

    /// One buffer per ordinate.
    Separated,
}

/// A factory for any [`SequenceLayout`], producing [`CoordSequence`]s.
///
/// This is the type to configure once and share, e.g. as an application's default factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordSequenceFactory {
    Array(CoordinateArraySequenceFactory),
    Interleaved(InterleavedCoordSequenceFactory),
    Separated(SeparatedCoordSequenceFactory),
}

impl CoordSequenceFactory {
    pub fn new(layout: SequenceLayout, ordinates: Ordinates) -> Self {
        match layout {
            SequenceLayout::Array => {
                CoordSequenceFactory::Array(CoordinateArraySequenceFactory::new(ordinates))
            }
            SequenceLayout::Interleaved => {
                CoordSequenceFactory::Interleaved(InterleavedCoordSequenceFactory::new(ordinates))
            }
            SequenceLayout::Separated => {
                CoordSequenceFactory::Separated(SeparatedCoordSequenceFactory::new(ordinates))
            }
        }
    }

    pub fn layout(&self) -> SequenceLayout {
        match self {
            CoordSequenceFactory::Array(_) => SequenceLayout::Array,
            CoordSequenceFactory::Interleaved(_) => SequenceLayout::Interleaved,
            CoordSequenceFactory::Separated(_) => SequenceLayout::Separated,
        }
    }
}

impl Default for CoordSequenceFactory {
    fn default() -> Self {
        SequenceLayout::default().into()
    }
}

impl From<SequenceLayout> for CoordSequenceFactory {
    /// The factory for `layout` with that layout's default ordinates.
    fn from(value: SequenceLayout) -> Self {
        match value {
            SequenceLayout::Array => CoordSequenceFactory::Array(Default::default()),
            SequenceLayout::Interleaved => CoordSequenceFactory::Interleaved(Default::default()),
            SequenceLayout::Separated => CoordSequenceFactory::Separated(Default::default()),
        }
    }
}

impl CoordinateSequenceFactory for CoordSequenceFactory {
    type Sequence = CoordSequence;

    fn ordinates(&self) -> Ordinates {
        match self {
            CoordSequenceFactory::Array(f) => f.ordinates(),
            CoordSequenceFactory::Interleaved(f) => f.ordinates(),
            CoordSequenceFactory::Separated(f) => f.ordinates(),
        }
    }

    fn create(&self, size: usize, dimension: usize, measures: usize) -> Self::Sequence {
        match self {
            CoordSequenceFactory::Array(f) => f.create(size, dimension, measures).into(),
            CoordSequenceFactory::Interleaved(f) => f.create(size, dimension, measures).into(),
            CoordSequenceFactory::Separated(f) => f.create(size, dimension, measures).into(),
        }
    }

    fn create_from_coords(&self, coords: Option<&[Coordinate]>) -> Self::Sequence {
        match self {
            CoordSequenceFactory::Array(f) => f.create_from_coords(coords).into(),
            CoordSequenceFactory::Interleaved(f) => f.create_from_coords(coords).into(),
            CoordSequenceFactory::Separated(f) => f.create_from_coords(coords).into(),
        }
    }
}
