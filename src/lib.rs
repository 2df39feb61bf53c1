//! Coordinates of variable dimensionality for geometry libraries.
//!
//! A [`Coordinate`] holds X and Y plus any number of further spatial ordinates (Z first) and
//! measures (M first). The common shapes XY, XYZ, XYM and XYZM are stored inline; anything else
//! uses an [`ExtendedCoord`].
//!
//! Geometries hold their vertices in a [`CoordinateSequence`](sequence::CoordinateSequence),
//! built by a [`CoordinateSequenceFactory`](sequence::CoordinateSequenceFactory) that reduces
//! any shape it cannot hold to the closest one it can.
//!
//! ```
//! use geocoord::sequence::{CoordinateSequence, CoordinateSequenceFactory, CoordSequenceFactory};
//! use geocoord::{Coordinate, Ordinates, Shape};
//!
//! let factory = CoordSequenceFactory::default();
//! let seq = factory.create_from_coords(Some(&[
//!     Coordinate::new_xyz(0.0, 0.0, 1.0),
//!     Coordinate::new_xym(1.0, 0.0, 2.0),
//! ][..]));
//! assert_eq!(seq.shape(), Shape::XYZM);
//! assert!(seq.m(0).is_nan());
//!
//! let planar = factory.create_with_ordinates(2, Ordinates::XY);
//! assert_eq!(planar.dimension(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use coord::{coordinate_from_trait, Coordinate, ExtendedCoord, Shape};
pub use eq::{CoordinateEquality, CoordinateEqualityComparer, PerOrdinateEqualityComparer};
pub use error::{GeoCoordError, Result};
pub use list::CoordinateList;
pub use ordinate::{Ordinate, Ordinates, NULL_ORDINATE};

pub mod coord;
pub mod coordinates;
pub mod eq;
pub mod error;
pub mod list;
pub mod ordinate;
pub mod sequence;
