//! Point primitives: the centroid of a point set and the distance between two points.

use crate::{KMeansError, Primitive, Result};

/// Per-dimension arithmetic mean of `points`.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] if `points` is empty, or if the points do not all share the
/// dimension of the first point.
pub fn centroid<T: Primitive, P: AsRef<[T]>>(points: &[P]) -> Result<Vec<T>> {
    let first = points.first()
        .ok_or_else(|| KMeansError::invalid("cannot calculate the centroid of an empty point set"))?;
    let dims = first.as_ref().len();

    let mut mean = vec![T::zero(); dims];
    for (idx, p) in points.iter().enumerate() {
        let p = p.as_ref();
        if p.len() != dims {
            return Err(KMeansError::invalid(format!(
                "point {} has dimension {}, expected {}", idx, p.len(), dims)));
        }
        mean.iter_mut().zip(p.iter()).for_each(|(m, v)| *m += *v);
    }
    let cnt = T::from_count(points.len());
    mean.iter_mut().for_each(|m| *m = *m / cnt);
    Ok(mean)
}

/// Euclidean distance normalized by the dimension: `sqrt(sum((a_i - b_i)^2) / D)`.
///
/// For a fixed dimension this only rescales the plain euclidean distance, so it never changes
/// which center is nearest.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] if `a` and `b` differ in dimension, or are zero-dimensional.
pub fn distance<T: Primitive>(a: &[T], b: &[T]) -> Result<T> {
    if a.len() != b.len() {
        return Err(KMeansError::invalid(format!(
            "dimension mismatch: {} vs {}", a.len(), b.len())));
    }
    if a.is_empty() {
        return Err(KMeansError::invalid("distance between zero-dimensional points"));
    }
    Ok(rms_distance(a, b))
}

/// [`distance`] without the precondition checks. Callers validate dimensions up front.
#[inline(always)]
pub(crate) fn rms_distance<T: Primitive>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let sqsum: T = a.iter().zip(b.iter())
        .map(|(&av, &bv)| av - bv)
        .map(|d| d * d)
        .sum();
    (sqsum / T::from_count(a.len())).sqrt()
}

/// Check that every point in `points` has dimension `dims`.
pub(crate) fn check_dims<T, P: AsRef<[T]>>(points: &[P], dims: usize, what: &str) -> Result<()> {
    match points.iter().position(|p| p.as_ref().len() != dims) {
        Some(idx) => Err(KMeansError::invalid(format!(
            "{} {} has dimension {}, expected {}", what, idx, points[idx].as_ref().len(), dims))),
        None => Ok(()),
    }
}
