use std::cmp::Ordering;

use crate::sequence::CoordinateSequence;

/// Compare two ordinate values.
///
/// Numbers compare as usual. NaN sorts before every number and equals NaN, which makes this a
/// total order over `f64` (with `-0.0 == 0.0`).
pub fn compare_ordinate(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// A lexicographic total order over coordinate sequences.
///
/// Sequences of lower dimension sort first. Otherwise coordinates are compared position by
/// position, ordinate by ordinate, and when one sequence is a prefix of the other the shorter
/// sorts first.
///
/// A dimension limit restricts the comparison to the first `limit` ordinates; when it applies,
/// differing dimensions are no longer a tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateSequenceComparator {
    dimension_limit: Option<usize>,
}

impl CoordinateSequenceComparator {
    /// A comparator using every ordinate the two sequences share.
    pub fn new() -> Self {
        Self::default()
    }

    /// A comparator looking at no more than `limit` ordinates.
    pub fn with_dimension_limit(limit: usize) -> Self {
        Self {
            dimension_limit: Some(limit),
        }
    }

    pub fn dimension_limit(&self) -> Option<usize> {
        self.dimension_limit
    }

    pub fn compare<A, B>(&self, s1: &A, s2: &B) -> Ordering
    where
        A: CoordinateSequence + ?Sized,
        B: CoordinateSequence + ?Sized,
    {
        let dim1 = s1.dimension();
        let dim2 = s2.dimension();

        let mut min_dim = dim1.min(dim2);
        let mut dim_limited = false;
        if let Some(limit) = self.dimension_limit {
            if limit <= min_dim {
                min_dim = limit;
                dim_limited = true;
            }
        }

        if !dim_limited {
            match dim1.cmp(&dim2) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        let size1 = s1.len();
        let size2 = s2.len();
        for i in 0..size1.min(size2) {
            match self.compare_coordinate(s1, s2, i, min_dim) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        size1.cmp(&size2)
    }

    /// Compare the coordinates at position `i` of both sequences over their first `dimension`
    /// ordinates.
    pub fn compare_coordinate<A, B>(&self, s1: &A, s2: &B, i: usize, dimension: usize) -> Ordering
    where
        A: CoordinateSequence + ?Sized,
        B: CoordinateSequence + ?Sized,
    {
        for d in 0..dimension {
            match compare_ordinate(s1.ordinate(i, d), s2.ordinate(i, d)) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::coord::Shape;
    use crate::sequence::InterleavedCoordSequence;

    fn seq(values: Vec<f64>, shape: Shape) -> InterleavedCoordSequence {
        InterleavedCoordSequence::try_new(values, shape).unwrap()
    }

    #[test]
    fn nan_sorts_first() {
        assert_eq!(compare_ordinate(f64::NAN, f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(compare_ordinate(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(compare_ordinate(1.0, f64::NAN), Ordering::Greater);
        assert_eq!(compare_ordinate(-0.0, 0.0), Ordering::Equal);
        assert_eq!(compare_ordinate(1.0, 2.0), Ordering::Less);
    }

    #[test]
    fn lower_dimension_first() {
        let xy = seq(vec![5., 5.], Shape::XY);
        let xyz = seq(vec![0., 0., 0.], Shape::XYZ);
        let cmp = CoordinateSequenceComparator::new();
        assert_eq!(cmp.compare(&xy, &xyz), Ordering::Less);
        assert_eq!(cmp.compare(&xyz, &xy), Ordering::Greater);
    }

    #[test]
    fn dimension_limit_ignores_extra_ordinates() {
        let xy = seq(vec![0., 0.], Shape::XY);
        let xyz = seq(vec![0., 0., 9.], Shape::XYZ);
        let cmp = CoordinateSequenceComparator::with_dimension_limit(2);
        assert_eq!(cmp.compare(&xy, &xyz), Ordering::Equal);

        let a = seq(vec![0., 0., 1.], Shape::XYZ);
        let b = seq(vec![0., 0., 2.], Shape::XYZ);
        assert_eq!(cmp.compare(&a, &b), Ordering::Equal);
        assert_eq!(
            CoordinateSequenceComparator::new().compare(&a, &b),
            Ordering::Less
        );
    }

    #[test]
    fn limit_above_shared_dimension_still_orders_by_dimension() {
        let xy = seq(vec![5., 5.], Shape::XY);
        let xyz = seq(vec![0., 0., 0.], Shape::XYZ);
        let cmp = CoordinateSequenceComparator::with_dimension_limit(3);
        assert_eq!(cmp.compare(&xy, &xyz), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        let short = seq(vec![0., 0., 1., 1.], Shape::XY);
        let long = seq(vec![0., 0., 1., 1., 2., 2.], Shape::XY);
        let cmp = CoordinateSequenceComparator::new();
        assert_eq!(cmp.compare(&short, &long), Ordering::Less);
        assert_eq!(cmp.compare(&long, &short), Ordering::Greater);
        assert_eq!(cmp.compare(&long, &long.clone()), Ordering::Equal);
    }

    #[test]
    fn first_difference_decides() {
        let a = seq(vec![0., 0., 1., 9.], Shape::XY);
        let b = seq(vec![0., 0., 2., 0.], Shape::XY);
        assert_eq!(
            CoordinateSequenceComparator::new().compare(&a, &b),
            Ordering::Less
        );
    }

    fn ordinate() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(f64::NAN),
            Just(-1.0),
            Just(0.0),
            Just(1.0),
            (-3i8..3).prop_map(f64::from),
        ]
    }

    fn sequence() -> impl Strategy<Value = InterleavedCoordSequence> {
        prop_oneof![Just(Shape::XY), Just(Shape::XYZ), Just(Shape::XYM), Just(Shape::XYZM)]
            .prop_flat_map(|shape| {
                (0usize..4).prop_flat_map(move |len| {
                    prop::collection::vec(ordinate(), len * shape.dimension())
                        .prop_map(move |values| seq(values, shape))
                })
            })
    }

    fn comparator() -> impl Strategy<Value = CoordinateSequenceComparator> {
        prop_oneof![
            Just(CoordinateSequenceComparator::new()),
            (0usize..5).prop_map(CoordinateSequenceComparator::with_dimension_limit),
        ]
    }

    proptest! {
        #[test]
        fn total_order(cmp in comparator(), a in sequence(), b in sequence(), c in sequence()) {
            prop_assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
            prop_assert_eq!(cmp.compare(&a, &b), cmp.compare(&b, &a).reverse());

            let ab = cmp.compare(&a, &b);
            let bc = cmp.compare(&b, &c);
            if ab != Ordering::Greater && bc != Ordering::Greater {
                prop_assert_ne!(cmp.compare(&a, &c), Ordering::Greater);
            }
            if ab == Ordering::Equal && bc == Ordering::Equal {
                prop_assert_eq!(cmp.compare(&a, &c), Ordering::Equal);
            }
        }
    }
}
