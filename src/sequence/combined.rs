use crate::coord::{Coordinate, Shape};
use crate::error::Result;
use crate::sequence::sequences::is_equal;
use crate::sequence::{
    CoordinateArraySequence, CoordinateSequence, InterleavedCoordSequence, SeparatedCoordSequence,
};

/// A coordinate sequence in any of the supported layouts.
///
/// Equality compares coordinates, not layouts: an interleaved and a separated sequence holding
/// the same values are equal.
#[derive(Debug, Clone)]
pub enum CoordSequence {
    Array(CoordinateArraySequence),
    Interleaved(InterleavedCoordSequence),
    Separated(SeparatedCoordSequence),
}

impl CoordinateSequence for CoordSequence {
    fn len(&self) -> usize {
        match self {
            CoordSequence::Array(s) => s.len(),
            CoordSequence::Interleaved(s) => s.len(),
            CoordSequence::Separated(s) => s.len(),
        }
    }

    fn dimension(&self) -> usize {
        match self {
            CoordSequence::Array(s) => s.dimension(),
            CoordSequence::Interleaved(s) => s.dimension(),
            CoordSequence::Separated(s) => s.dimension(),
        }
    }

    fn measures(&self) -> usize {
        match self {
            CoordSequence::Array(s) => s.measures(),
            CoordSequence::Interleaved(s) => s.measures(),
            CoordSequence::Separated(s) => s.measures(),
        }
    }

    fn shape(&self) -> Shape {
        match self {
            CoordSequence::Array(s) => s.shape(),
            CoordSequence::Interleaved(s) => s.shape(),
            CoordSequence::Separated(s) => s.shape(),
        }
    }

    fn ordinate(&self, i: usize, ordinate_index: usize) -> f64 {
        match self {
            CoordSequence::Array(s) => s.ordinate(i, ordinate_index),
            CoordSequence::Interleaved(s) => s.ordinate(i, ordinate_index),
            CoordSequence::Separated(s) => s.ordinate(i, ordinate_index),
        }
    }

    fn set_ordinate(&mut self, i: usize, ordinate_index: usize, value: f64) -> Result<()> {
        match self {
            CoordSequence::Array(s) => s.set_ordinate(i, ordinate_index, value),
            CoordSequence::Interleaved(s) => s.set_ordinate(i, ordinate_index, value),
            CoordSequence::Separated(s) => s.set_ordinate(i, ordinate_index, value),
        }
    }

    fn coordinate(&self, i: usize) -> Coordinate {
        match self {
            CoordSequence::Array(s) => s.coordinate(i),
            CoordSequence::Interleaved(s) => s.coordinate(i),
            CoordSequence::Separated(s) => s.coordinate(i),
        }
    }
}

impl PartialEq for CoordSequence {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}

impl From<CoordinateArraySequence> for CoordSequence {
    fn from(value: CoordinateArraySequence) -> Self {
        Self::Array(value)
    }
}

impl From<InterleavedCoordSequence> for CoordSequence {
    fn from(value: InterleavedCoordSequence) -> Self {
        Self::Interleaved(value)
    }
}

impl From<SeparatedCoordSequence> for CoordSequence {
    fn from(value: SeparatedCoordSequence) -> Self {
        Self::Separated(value)
    }
}
