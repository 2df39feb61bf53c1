//! Named ordinates and ordinate capability masks.

use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::coord::Shape;

/// The value stored for an ordinate that was not recorded.
///
/// Reading an ordinate a coordinate does not carry also yields this value.
pub const NULL_ORDINATE: f64 = f64::NAN;

/// Identifies one ordinate of a coordinate by name rather than by position.
///
/// `Spatial(n)` and `Measure(n)` are 1-based: `Spatial(1)`, `Spatial(2)` and `Spatial(3)` name
/// the same ordinates as [`X`](Ordinate::X), [`Y`](Ordinate::Y) and [`Z`](Ordinate::Z), and
/// `Measure(1)` is [`M`](Ordinate::M). Equality and hashing follow that aliasing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Ordinate {
    X,
    Y,
    /// Elevation, the third spatial ordinate.
    Z,
    /// The first measure.
    M,
    Spatial(usize),
    Measure(usize),
}

/// Where a named ordinate lives relative to the spatial and measure groups, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Slot {
    Spatial(usize),
    Measure(usize),
}

impl Ordinate {
    /// The ordinate at 0-based position `index` within the spatial group.
    pub fn from_spatial_index(index: usize) -> Self {
        match index {
            0 => Ordinate::X,
            1 => Ordinate::Y,
            2 => Ordinate::Z,
            n => Ordinate::Spatial(n + 1),
        }
    }

    /// The ordinate at 0-based position `index` within the measure group.
    pub fn from_measure_index(index: usize) -> Self {
        match index {
            0 => Ordinate::M,
            n => Ordinate::Measure(n + 1),
        }
    }

    /// Whether this ordinate is spatial (as opposed to a measure).
    pub fn is_spatial(&self) -> bool {
        matches!(self.slot(), Some(Slot::Spatial(_)))
    }

    /// Whether this ordinate is a measure.
    pub fn is_measure(&self) -> bool {
        matches!(self.slot(), Some(Slot::Measure(_)))
    }

    /// `None` for the degenerate `Spatial(0)` / `Measure(0)`, which name nothing.
    pub(crate) fn slot(&self) -> Option<Slot> {
        match *self {
            Ordinate::X => Some(Slot::Spatial(0)),
            Ordinate::Y => Some(Slot::Spatial(1)),
            Ordinate::Z => Some(Slot::Spatial(2)),
            Ordinate::M => Some(Slot::Measure(0)),
            Ordinate::Spatial(n) => n.checked_sub(1).map(Slot::Spatial),
            Ordinate::Measure(n) => n.checked_sub(1).map(Slot::Measure),
        }
    }
}

impl PartialEq for Ordinate {
    fn eq(&self, other: &Self) -> bool {
        self.slot() == other.slot()
    }
}

impl Eq for Ordinate {}

impl Hash for Ordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot().hash(state)
    }
}

bitflags! {
    /// A set of ordinates, used to describe what a coordinate sequence implementation can store.
    ///
    /// The low 16 bits are the spatial ordinates `Spatial(1)..=Spatial(16)`, the high 16 bits
    /// the measures `Measure(1)..=Measure(16)`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Ordinates: u32 {
        const X = 1;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const M = 1 << 16;

        const XY = Self::X.bits() | Self::Y.bits();
        const XYZ = Self::XY.bits() | Self::Z.bits();
        const XYM = Self::XY.bits() | Self::M.bits();
        const XYZM = Self::XYZ.bits() | Self::M.bits();

        const ALL_SPATIAL = 0x0000_FFFF;
        const ALL_MEASURES = 0xFFFF_0000;
        const ALL = Self::ALL_SPATIAL.bits() | Self::ALL_MEASURES.bits();
    }
}

const MAX_GROUP: usize = 16;

impl Ordinates {
    /// The largest shape whose ordinates are all members of this set.
    ///
    /// Spatial ordinates and measures are counted from the first one upward until the first gap,
    /// and X,Y are always assumed present.
    pub fn max_shape(&self) -> Shape {
        let spatial = (self.bits() & 0xFFFF).trailing_ones().max(2) as usize;
        let measures = (self.bits() >> 16).trailing_ones() as usize;
        Shape::new_unchecked(spatial + measures, measures)
    }

    /// The smallest set containing every ordinate of `shape`.
    ///
    /// Shapes with more than 16 spatial ordinates or 16 measures saturate.
    pub fn from_shape(shape: Shape) -> Self {
        let spatial = shape.spatial().min(MAX_GROUP);
        let measures = shape.measures().min(MAX_GROUP);
        let spatial_bits = ((1u64 << spatial) - 1) as u32;
        let measure_bits = (((1u64 << measures) - 1) as u32) << 16;
        Self::from_bits_truncate(spatial_bits | measure_bits) | Self::XY
    }

    /// The number of spatial ordinates and measures in this set, as a shape.
    ///
    /// Unlike [`max_shape`](Self::max_shape) this counts every member, gaps included.
    pub fn shape(&self) -> Shape {
        let spatial = (self.bits() & 0xFFFF).count_ones().max(2) as usize;
        let measures = (self.bits() >> 16).count_ones() as usize;
        Shape::new_unchecked(spatial + measures, measures)
    }
}

impl From<Ordinate> for Ordinates {
    fn from(value: Ordinate) -> Self {
        match value.slot() {
            Some(Slot::Spatial(i)) if i < MAX_GROUP => Ordinates::from_bits_truncate(1 << i),
            Some(Slot::Measure(i)) if i < MAX_GROUP => {
                Ordinates::from_bits_truncate(1 << (16 + i))
            }
            _ => Ordinates::empty(),
        }
    }
}

impl Default for Ordinates {
    fn default() -> Self {
        Ordinates::XY
    }
}
