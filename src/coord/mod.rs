//! Single coordinates of any shape.
//!
//! A [`Coordinate`] is a closed set of variants, one per common shape (XY, XYZ, XYM, XYZM) plus
//! [`ExtendedCoord`] for everything else. The variant determines the [`Shape`], so the common
//! shapes carry no dimension bookkeeping and never allocate.

mod coordinate;
mod extended;
mod interop;
mod shape;

pub(crate) use coordinate::canonical_bits;
pub use coordinate::Coordinate;
pub use extended::ExtendedCoord;
pub use interop::coordinate_from_trait;
pub use shape::Shape;
