//! Tolerance-aware coordinate equality.
//!
//! Both comparers hash on X and Y only. That hash is consistent with
//! [`equals`](CoordinateEquality::equals), but not with
//! [`equals_with_tolerance`](CoordinateEquality::equals_with_tolerance) for a positive tolerance:
//! equality within a tolerance is not transitive, so it must not be used to key hash maps.

use std::hash::{Hash, Hasher};

use crate::coord::{canonical_bits, Coordinate};

/// An equality relation over coordinates with an optional tolerance.
pub trait CoordinateEquality {
    /// Whether `a` and `b` are equal within `tolerance`.
    fn equals_with_tolerance(&self, a: &Coordinate, b: &Coordinate, tolerance: f64) -> bool;

    /// Whether `a` and `b` are exactly equal.
    fn equals(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.equals_with_tolerance(a, b, 0.0)
    }

    /// Feed X and Y of `coord` into `state`.
    fn hash_into<H: Hasher>(&self, coord: &Coordinate, state: &mut H) {
        canonical_bits(coord.x()).hash(state);
        canonical_bits(coord.y()).hash(state);
    }

    /// A hash code for `coord` matching [`equals`](Self::equals).
    fn hash_code(&self, coord: &Coordinate) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash_into(coord, &mut hasher);
        hasher.finish()
    }
}

/// Equality by planar distance: coordinates are equal when their 2D distance is within the
/// tolerance. A zero tolerance compares X and Y exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoordinateEqualityComparer;

impl CoordinateEquality for CoordinateEqualityComparer {
    fn equals_with_tolerance(&self, a: &Coordinate, b: &Coordinate, tolerance: f64) -> bool {
        if a.equals_2d(b) {
            return true;
        }
        tolerance > 0.0 && a.distance_2d(b) <= tolerance
    }
}

/// Equality per ordinate: X, Y, Z and M must each lie within the tolerance.
///
/// An ordinate absent from both coordinates matches. An ordinate present in only one never
/// matches, whatever the tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PerOrdinateEqualityComparer;

impl PerOrdinateEqualityComparer {
    fn distance(a: f64, b: f64) -> f64 {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => 0.0,
            // infinities of the same sign
            (false, false) if a == b => 0.0,
            (false, false) => (a - b).abs(),
            _ => f64::INFINITY,
        }
    }
}

impl CoordinateEquality for PerOrdinateEqualityComparer {
    fn equals_with_tolerance(&self, a: &Coordinate, b: &Coordinate, tolerance: f64) -> bool {
        [
            (a.x(), b.x()),
            (a.y(), b.y()),
            (a.z(), b.z()),
            (a.m(), b.m()),
        ]
        .into_iter()
        .all(|(a, b)| Self::distance(a, b) <= tolerance)
    }
}
