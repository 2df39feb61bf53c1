//! Operations over whole coordinate sequences.

use std::cmp::Ordering;

use crate::error::{GeoCoordError, Result};
use crate::ordinate::NULL_ORDINATE;
use crate::sequence::{compare_ordinate, CoordinateSequence, CoordinateSequenceFactory};

/// Reverse the coordinates of `seq` in place.
pub fn reverse<S>(seq: &mut S) -> Result<()>
where
    S: CoordinateSequence + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return Ok(());
    }
    let dim = seq.dimension();
    let last = len - 1;
    for i in 0..len / 2 {
        for d in 0..dim {
            let front = seq.ordinate(i, d);
            let back = seq.ordinate(last - i, d);
            seq.set_ordinate(i, d, back)?;
            seq.set_ordinate(last - i, d, front)?;
        }
    }
    Ok(())
}

/// Copy the coordinate at `src_pos` of `src` to `dest_pos` of `dest`.
///
/// Ordinates are matched by name. Ordinates of `dest` that `src` lacks become
/// [`NULL_ORDINATE`].
pub fn copy_coord<A, B>(src: &A, src_pos: usize, dest: &mut B, dest_pos: usize) -> Result<()>
where
    A: CoordinateSequence + ?Sized,
    B: CoordinateSequence + ?Sized,
{
    let src_shape = src.shape();
    let dest_shape = dest.shape();
    for (index, ordinate) in dest_shape.ordinates().enumerate() {
        let value = src_shape
            .index_of(ordinate)
            .map_or(NULL_ORDINATE, |i| src.ordinate(src_pos, i));
        dest.set_ordinate(dest_pos, index, value)?;
    }
    Ok(())
}

/// Copy `len` coordinates starting at `src_pos` of `src` to `dest` starting at `dest_pos`.
///
/// # Errors
///
/// - if either range runs past the end of its sequence
pub fn copy_coords<A, B>(
    src: &A,
    src_pos: usize,
    dest: &mut B,
    dest_pos: usize,
    len: usize,
) -> Result<()>
where
    A: CoordinateSequence + ?Sized,
    B: CoordinateSequence + ?Sized,
{
    if src_pos + len > src.len() || dest_pos + len > dest.len() {
        return Err(GeoCoordError::InvalidArgument(format!(
            "cannot copy {len} coordinates from position {src_pos} of {} to position {dest_pos} \
             of {}",
            src.len(),
            dest.len()
        )));
    }
    for i in 0..len {
        copy_coord(src, src_pos + i, dest, dest_pos + i)?;
    }
    Ok(())
}

fn is_closed<S>(seq: &S) -> bool
where
    S: CoordinateSequence + ?Sized,
{
    let last = seq.len() - 1;
    seq.x(0) == seq.x(last) && seq.y(0) == seq.y(last)
}

/// Whether `seq` is empty, or has at least 4 coordinates with the first and last 2D-equal.
pub fn is_ring<S>(seq: &S) -> bool
where
    S: CoordinateSequence + ?Sized,
{
    match seq.len() {
        0 => true,
        1..=3 => false,
        _ => is_closed(seq),
    }
}

/// Check that `seq` can form a ring.
///
/// # Errors
///
/// - if `seq` is non-empty and its first and last coordinates differ in X or Y
/// - if `seq` has 1 to 3 coordinates
pub fn validate_ring<S>(seq: &S) -> Result<()>
where
    S: CoordinateSequence + ?Sized,
{
    let len = seq.len();
    if len == 0 {
        return Ok(());
    }
    if !is_closed(seq) {
        return Err(GeoCoordError::InvalidArgument(
            "points of the ring do not form a closed line".to_string(),
        ));
    }
    if len < 4 {
        return Err(GeoCoordError::InvalidArgument(format!(
            "invalid number of points in ring (found {len} - must be 0 or >= 4)"
        )));
    }
    Ok(())
}

/// A copy of `seq` made into a valid ring by `factory`.
///
/// Open sequences get the first coordinate appended; sequences too short to be a ring are
/// padded with copies of the first coordinate up to 4. Empty and already valid sequences are
/// copied unchanged.
pub fn ensure_valid_ring<F, S>(factory: &F, seq: &S) -> Result<F::Sequence>
where
    F: CoordinateSequenceFactory + ?Sized,
    S: CoordinateSequence + ?Sized,
{
    let len = seq.len();
    if len == 0 {
        return Ok(factory.create_from_sequence(Some(seq)));
    }
    if len <= 3 {
        return closed_ring(factory, seq, 4);
    }
    if is_closed(seq) {
        return Ok(factory.create_from_sequence(Some(seq)));
    }
    closed_ring(factory, seq, len + 1)
}

fn closed_ring<F, S>(factory: &F, seq: &S, size: usize) -> Result<F::Sequence>
where
    F: CoordinateSequenceFactory + ?Sized,
    S: CoordinateSequence + ?Sized,
{
    let mut ring = factory.create(size, seq.dimension(), seq.measures());
    let len = seq.len();
    copy_coords(seq, 0, &mut ring, 0, len)?;
    for i in len..size {
        copy_coord(seq, 0, &mut ring, i)?;
    }
    Ok(ring)
}

/// A copy of `seq` grown to `size` coordinates, padded with copies of its last coordinate.
///
/// Sequences already at least `size` long are copied unchanged.
pub fn extend<F, S>(factory: &F, seq: &S, size: usize) -> Result<F::Sequence>
where
    F: CoordinateSequenceFactory + ?Sized,
    S: CoordinateSequence + ?Sized,
{
    let len = seq.len();
    if len >= size {
        return Ok(factory.create_from_sequence(Some(seq)));
    }
    let mut extended = factory.create(size, seq.dimension(), seq.measures());
    copy_coords(seq, 0, &mut extended, 0, len)?;
    if len > 0 {
        for i in len..size {
            copy_coord(seq, len - 1, &mut extended, i)?;
        }
    }
    Ok(extended)
}

/// Whether both sequences have the same length and the same values over the ordinates they
/// share, with NaN equal to NaN.
pub fn is_equal<A, B>(a: &A, b: &B) -> bool
where
    A: CoordinateSequence + ?Sized,
    B: CoordinateSequence + ?Sized,
{
    if a.len() != b.len() {
        return false;
    }
    let dim = a.dimension().min(b.dimension());
    (0..a.len()).all(|i| {
        (0..dim).all(|d| compare_ordinate(a.ordinate(i, d), b.ordinate(i, d)) == Ordering::Equal)
    })
}

/// Rotate `seq` in place so the coordinate at `first` comes first.
///
/// With `ensure_ring` the closing coordinate is excluded from the rotation and rewritten to
/// match the new first coordinate.
pub fn scroll<S>(seq: &mut S, first: usize, ensure_ring: bool) -> Result<()>
where
    S: CoordinateSequence + ?Sized,
{
    if first == 0 {
        return Ok(());
    }
    let len = seq.len();
    if first >= len {
        return Err(GeoCoordError::InvalidArgument(format!(
            "cannot scroll to position {first} of a sequence of length {len}"
        )));
    }

    let snapshot = seq.to_coordinate_array();
    let last = if ensure_ring { len - 1 } else { len };
    for j in 0..last {
        seq.set_coordinate(j, &snapshot[(first + j) % last])?;
    }
    if ensure_ring {
        let head = seq.coordinate(0);
        seq.set_coordinate(len - 1, &head)?;
    }
    Ok(())
}

/// The position of the coordinate with the smallest X, then Y, in `seq`.
pub fn min_coordinate_index<S>(seq: &S) -> Option<usize>
where
    S: CoordinateSequence + ?Sized,
{
    min_coordinate_index_in(seq, 0, seq.len())
}

/// The position of the coordinate with the smallest X, then Y, among positions `from..to`.
pub fn min_coordinate_index_in<S>(seq: &S, from: usize, to: usize) -> Option<usize>
where
    S: CoordinateSequence + ?Sized,
{
    (from..to.min(seq.len())).min_by(|&i, &j| {
        compare_ordinate(seq.x(i), seq.x(j)).then_with(|| compare_ordinate(seq.y(i), seq.y(j)))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Coordinate, Shape};
    use crate::sequence::{
        CoordinateArraySequence, CoordinateArraySequenceFactory, InterleavedCoordSequence,
        InterleavedCoordSequenceFactory, SeparatedCoordSequence,
    };
    use crate::test::coords;

    fn xy(values: &[(f64, f64)]) -> CoordinateArraySequence {
        values
            .iter()
            .map(|&(x, y)| Coordinate::new(x, y))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn reverse_in_place() -> Result<()> {
        let mut seq = InterleavedCoordSequence::try_new(
            vec![0., 0., 1., 1., 1., 2., 2., 2., 3.],
            Shape::XYZ,
        )?;
        reverse(&mut seq)?;
        assert_eq!(seq.values(), &[2., 2., 3., 1., 1., 2., 0., 0., 1.]);
        Ok(())
    }

    #[test]
    fn copy_coord_matches_names() -> Result<()> {
        let src = CoordinateArraySequence::from(vec![Coordinate::new_xym(1., 2., 3.)]);
        let mut dest = SeparatedCoordSequence::new(1, Shape::XYZM);
        copy_coord(&src, 0, &mut dest, 0)?;
        assert!(dest.z(0).is_nan());
        assert_eq!(dest.m(0), 3.);
        Ok(())
    }

    #[test]
    fn copy_coords_checks_range() {
        let src = xy(&[(0., 0.), (1., 1.)]);
        let mut dest = InterleavedCoordSequence::new(2, Shape::XY);
        assert!(matches!(
            copy_coords(&src, 1, &mut dest, 0, 2),
            Err(GeoCoordError::InvalidArgument(_))
        ));
        assert!(copy_coords(&src, 0, &mut dest, 0, 2).is_ok());
        assert_eq!(dest.x(1), 1.);
    }

    #[test]
    fn ring_checks() {
        assert!(is_ring(&xy(&[])));
        assert!(!is_ring(&xy(&[(0., 0.), (1., 0.), (0., 0.)])));
        let square = CoordinateArraySequence::from(coords::square_ring_xyz());
        assert!(is_ring(&square));
        assert!(validate_ring(&square).is_ok());
        assert!(!is_ring(&xy(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])));
    }

    #[test]
    fn validate_ring_rejects_open_and_short() {
        assert!(validate_ring(&xy(&[])).is_ok());
        assert!(matches!(
            validate_ring(&xy(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])),
            Err(GeoCoordError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_ring(&xy(&[(0., 0.), (1., 0.), (0., 0.)])),
            Err(GeoCoordError::InvalidArgument(_))
        ));
    }

    #[test]
    fn ensure_valid_ring_closes() -> Result<()> {
        let factory = CoordinateArraySequenceFactory::default();

        let open = xy(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
        let ring = ensure_valid_ring(&factory, &open)?;
        assert_eq!(ring.len(), 5);
        assert!(validate_ring(&ring).is_ok());

        let short = xy(&[(0., 0.), (1., 0.)]);
        let ring = ensure_valid_ring(&factory, &short)?;
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.coordinate(2), Coordinate::new(0., 0.));
        assert!(validate_ring(&ring).is_ok());

        let closed = CoordinateArraySequence::from(coords::square_ring_xyz());
        let ring = ensure_valid_ring(&factory, &closed)?;
        assert!(is_equal(&ring, &closed));
        Ok(())
    }

    #[test]
    fn extend_pads_with_last() -> Result<()> {
        let factory = InterleavedCoordSequenceFactory::default();
        let seq = xy(&[(0., 0.), (5., 6.)]);
        let extended = extend(&factory, &seq, 4)?;
        assert_eq!(extended.len(), 4);
        assert_eq!(extended.x(3), 5.);
        assert_eq!(extended.y(2), 6.);

        let same = extend(&factory, &seq, 1)?;
        assert_eq!(same.len(), 2);
        Ok(())
    }

    #[test]
    fn is_equal_nan_aware() {
        let a = CoordinateArraySequence::from(vec![Coordinate::new_xyz(0., 0., f64::NAN)]);
        let b = InterleavedCoordSequence::from_coords_with_shape(
            &[Coordinate::new_xyz(0., 0., f64::NAN)],
            Shape::XYZ,
        );
        assert!(is_equal(&a, &b));
        let c = InterleavedCoordSequence::from_coords_with_shape(
            &[Coordinate::new_xyz(0., 0., 1.)],
            Shape::XYZ,
        );
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn scroll_ring() -> Result<()> {
        let mut ring = xy(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)]);
        scroll(&mut ring, 2, true)?;
        let expected = xy(&[(1., 1.), (0., 1.), (0., 0.), (1., 0.), (1., 1.)]);
        assert!(is_equal(&ring, &expected));
        assert!(is_ring(&ring));
        Ok(())
    }

    #[test]
    fn scroll_open() -> Result<()> {
        let mut seq = xy(&[(0., 0.), (1., 0.), (2., 0.)]);
        scroll(&mut seq, 1, false)?;
        assert!(is_equal(&seq, &xy(&[(1., 0.), (2., 0.), (0., 0.)])));
        assert!(scroll(&mut seq, 3, false).is_err());
        Ok(())
    }

    #[test]
    fn min_index() {
        let seq = xy(&[(3., 0.), (1., 5.), (1., 2.), (4., 4.)]);
        assert_eq!(min_coordinate_index(&seq), Some(2));
        assert_eq!(min_coordinate_index_in(&seq, 3, 4), Some(3));
        assert_eq!(min_coordinate_index(&xy(&[])), None);
    }
}
