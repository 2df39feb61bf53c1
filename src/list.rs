//! A growable list of coordinates that can drop repeated points as they arrive.

use crate::coord::Coordinate;
use crate::sequence::CoordinateSequence;

/// An ordered, growable list of [`Coordinate`]s.
///
/// Every adding method takes an `allow_repeated` flag. When it is `false` a coordinate that is
/// 2D-equal to its would-be neighbour is skipped, so a list built only with `false` never holds
/// two consecutive coordinates with the same X and Y. Only X and Y take part in that check, even
/// for coordinates carrying Z or M.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateList {
    coords: Vec<Coordinate>,
}

impl CoordinateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Coordinate> {
        self.coords.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coords.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Remove and return the coordinate at position `i`.
    ///
    /// # Panics
    ///
    /// - if `i >= len()`
    pub fn remove(&mut self, i: usize) -> Coordinate {
        self.coords.remove(i)
    }

    /// Append a copy of `coord`. Returns whether it was added.
    pub fn add(&mut self, coord: &Coordinate, allow_repeated: bool) -> bool {
        if !allow_repeated {
            if let Some(last) = self.coords.last() {
                if last.equals_2d(coord) {
                    log::trace!("skipped repeated coordinate {coord}");
                    return false;
                }
            }
        }
        self.coords.push(coord.clone());
        true
    }

    /// Insert a copy of `coord` at position `i`. Returns whether it was inserted.
    ///
    /// Without `allow_repeated`, the coordinate is skipped when it is 2D-equal to the element
    /// before or the element at the insertion point. Positions past `len()` insert nothing.
    pub fn insert(&mut self, i: usize, coord: &Coordinate, allow_repeated: bool) -> bool {
        if i > self.coords.len() {
            log::trace!("skipped insert at position {i} of a list of {}", self.coords.len());
            return false;
        }
        if !allow_repeated {
            let before = i.checked_sub(1).and_then(|prev| self.coords.get(prev));
            let after = self.coords.get(i);
            let repeats = |c: &Coordinate| c.equals_2d(coord);
            if before.is_some_and(repeats) || after.is_some_and(repeats) {
                log::trace!("skipped repeated coordinate {coord} at position {i}");
                return false;
            }
        }
        self.coords.insert(i, coord.clone());
        true
    }

    /// Add every coordinate of `coords`, last to first unless `forward`. Returns whether any was
    /// added.
    pub fn add_slice(
        &mut self,
        coords: &[Coordinate],
        allow_repeated: bool,
        forward: bool,
    ) -> bool {
        if forward {
            self.add_all(coords, allow_repeated)
        } else {
            self.add_all(coords.iter().rev(), allow_repeated)
        }
    }

    /// Add the coordinates from `start` to `end`, both inclusive. When `start > end` they are
    /// added in reverse order. Returns whether any was added; a range reaching past the end of
    /// `coords` adds nothing.
    pub fn add_slice_range(
        &mut self,
        coords: &[Coordinate],
        allow_repeated: bool,
        start: usize,
        end: usize,
    ) -> bool {
        let (low, high, forward) = if start <= end {
            (start, end, true)
        } else {
            (end, start, false)
        };
        match coords.get(low..=high) {
            Some(range) => self.add_slice(range, allow_repeated, forward),
            None => {
                log::trace!("skipped range {start}..={end} of {} coordinates", coords.len());
                false
            }
        }
    }

    /// Add every coordinate produced by `coords`, in order. Returns whether any was added.
    pub fn add_all<'a, I>(&mut self, coords: I, allow_repeated: bool) -> bool
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut changed = false;
        for coord in coords {
            changed |= self.add(coord, allow_repeated);
        }
        changed
    }

    /// Add every coordinate of `seq`, in order.
    pub fn add_sequence<S>(&mut self, seq: &S, allow_repeated: bool)
    where
        S: CoordinateSequence + ?Sized,
    {
        for i in 0..seq.len() {
            self.add(&seq.coordinate(i), allow_repeated);
        }
    }

    /// Append a copy of the first coordinate unless the list is empty or already closed in 2D.
    pub fn close_ring(&mut self) {
        if let (Some(first), Some(last)) = (self.coords.first(), self.coords.last()) {
            if !first.equals_2d(last) {
                let first = first.clone();
                self.coords.push(first);
            }
        }
    }

    pub fn to_coordinate_array(&self) -> Vec<Coordinate> {
        self.coords.clone()
    }

    /// The coordinates last to first. The list itself is left as is.
    pub fn to_coordinate_array_reversed(&self) -> Vec<Coordinate> {
        self.coords.iter().rev().cloned().collect()
    }
}

impl From<Vec<Coordinate>> for CoordinateList {
    /// Wrap `coords` as is; repeated points are kept.
    fn from(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }
}

impl From<CoordinateList> for Vec<Coordinate> {
    fn from(value: CoordinateList) -> Self {
        value.coords
    }
}

impl IntoIterator for CoordinateList {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateList {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::coord::Shape;
    use crate::sequence::InterleavedCoordSequence;
    use crate::test::coords;

    fn xy(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn add_suppresses_2d_repeats() {
        let mut list = CoordinateList::new();
        assert!(list.add(&Coordinate::new_xyz(1., 1., 5.), false));
        assert!(!list.add(&Coordinate::new_xyz(1., 1., 9.), false));
        assert!(list.add(&xy(1., 1.), true));
        assert!(list.add(&xy(2., 1.), false));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).map(Coordinate::z), Some(5.));
    }

    #[test]
    fn insert_checks_both_neighbours() {
        let mut list = CoordinateList::from(vec![xy(0., 0.), xy(2., 2.)]);
        assert!(!list.insert(1, &xy(0., 0.), false));
        assert!(!list.insert(1, &xy(2., 2.), false));
        assert!(list.insert(1, &xy(1., 1.), false));
        assert!(list.insert(0, &xy(0., 0.), true));
        assert_eq!(
            list.to_coordinate_array(),
            vec![xy(0., 0.), xy(0., 0.), xy(1., 1.), xy(2., 2.)]
        );
    }

    #[test]
    fn add_slice_range_directions() {
        let input = vec![xy(0., 0.), xy(1., 0.), xy(2., 0.), xy(3., 0.)];

        let mut forward = CoordinateList::new();
        forward.add_slice_range(&input, false, 1, 2);
        assert_eq!(forward.as_slice(), &input[1..=2]);

        let mut backward = CoordinateList::new();
        backward.add_slice_range(&input, false, 3, 1);
        assert_eq!(
            backward.to_coordinate_array(),
            vec![xy(3., 0.), xy(2., 0.), xy(1., 0.)]
        );
    }

    #[test]
    fn out_of_range_positions_add_nothing() {
        let input = vec![xy(0., 0.), xy(1., 0.)];
        let mut list = CoordinateList::from(input.clone());
        assert!(!list.insert(3, &xy(5., 5.), false));
        assert!(!list.insert(3, &xy(5., 5.), true));
        assert!(list.insert(2, &xy(5., 5.), false));

        assert!(!list.add_slice_range(&input, true, 0, 2));
        assert!(!list.add_slice_range(&input, true, 2, 0));
        assert!(!list.add_slice_range(&[], true, 0, 0));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_slice_reversed() {
        let mut list = CoordinateList::new();
        list.add_slice(&[xy(0., 0.), xy(0., 0.), xy(1., 1.)], false, false);
        assert_eq!(list.to_coordinate_array(), vec![xy(1., 1.), xy(0., 0.)]);
    }

    #[test]
    fn add_all_and_sequence() {
        let mut list = CoordinateList::new();
        assert!(list.add_all(&coords::square_ring_xyz(), false));
        assert!(!list.add_all(&[xy(0., 0.)], false));

        let seq =
            InterleavedCoordSequence::from_coords_with_shape(&coords::square_ring_xyz(), Shape::XYZ);
        let mut from_seq = CoordinateList::new();
        from_seq.add_sequence(&seq, false);
        assert_eq!(from_seq, list);
    }

    #[test]
    fn close_ring() {
        let mut list = CoordinateList::from(vec![xy(0., 0.), xy(1., 0.), xy(1., 1.)]);
        list.close_ring();
        let closed = vec![xy(0., 0.), xy(1., 0.), xy(1., 1.), xy(0., 0.)];
        assert_eq!(list.to_coordinate_array(), closed);
        list.close_ring();
        assert_eq!(list.to_coordinate_array(), closed);

        let mut empty = CoordinateList::new();
        empty.close_ring();
        assert!(empty.is_empty());
    }

    #[test]
    fn reversed_snapshot_leaves_list() {
        let list = CoordinateList::from(vec![xy(0., 0.), xy(1., 0.)]);
        assert_eq!(list.to_coordinate_array_reversed(), vec![xy(1., 0.), xy(0., 0.)]);
        assert_eq!(list.get(0), Some(&xy(0., 0.)));
    }

    #[test]
    fn clone_is_deep() {
        let mut list = CoordinateList::from(coords::one_of_each());
        let copy = list.clone();
        list.remove(0);
        assert_eq!(copy.len(), list.len() + 1);
        assert_eq!(copy.iter().next(), Some(&coords::one_of_each()[0]));
    }

    #[derive(Debug, Clone)]
    enum Entry {
        Add(f64, f64),
        Insert(usize, f64, f64),
        Slice(Vec<(f64, f64)>, bool),
        Range(Vec<(f64, f64)>, usize, usize),
    }

    fn point() -> impl Strategy<Value = (f64, f64)> {
        (0i8..3, 0i8..3).prop_map(|(x, y)| (f64::from(x), f64::from(y)))
    }

    fn entry() -> impl Strategy<Value = Entry> {
        prop_oneof![
            point().prop_map(|(x, y)| Entry::Add(x, y)),
            (0usize..8, point()).prop_map(|(i, (x, y))| Entry::Insert(i, x, y)),
            (prop::collection::vec(point(), 0..6), any::<bool>())
                .prop_map(|(points, forward)| Entry::Slice(points, forward)),
            (prop::collection::vec(point(), 1..6), 0usize..6, 0usize..6)
                .prop_map(|(points, start, end)| Entry::Range(points, start, end)),
        ]
    }

    fn to_coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
        points.iter().map(|&(x, y)| xy(x, y)).collect()
    }

    proptest! {
        #[test]
        fn never_holds_consecutive_repeats(entries in prop::collection::vec(entry(), 0..20)) {
            let mut list = CoordinateList::new();
            for entry in entries {
                match entry {
                    Entry::Add(x, y) => {
                        list.add(&xy(x, y), false);
                    }
                    Entry::Insert(i, x, y) => {
                        list.insert(i, &xy(x, y), false);
                    }
                    Entry::Slice(points, forward) => {
                        list.add_slice(&to_coords(&points), false, forward);
                    }
                    Entry::Range(points, start, end) => {
                        list.add_slice_range(&to_coords(&points), false, start, end);
                    }
                }
            }
            let coords = list.as_slice();
            for pair in coords.windows(2) {
                prop_assert!(!pair[0].equals_2d(&pair[1]));
            }
        }
    }
}
