//! The two halves of a Lloyd iteration: assigning points to their nearest center, and moving the
//! centers onto the centroids of their groups.

use crate::geometry::{self, check_dims, rms_distance};
use crate::{KMeansError, Primitive, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Map every point to the index of its nearest center.
///
/// If multiple centers share the minimal distance, the one with the lowest index wins, which keeps
/// the result deterministic for a fixed center ordering. Points are processed in parallel, each
/// point's scan over the centers is sequential.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] if `centers` is empty or any point or center differs in
/// dimension from the first center.
pub fn assign_points<T, P, C>(points: &[P], centers: &[C]) -> Result<Vec<usize>>
        where T: Primitive, P: AsRef<[T]> + Sync, C: AsRef<[T]> + Sync {
    let dims = centers.first()
        .ok_or_else(|| KMeansError::invalid("cannot assign points without any centers"))?
        .as_ref().len();
    if dims == 0 {
        return Err(KMeansError::invalid("centers must have at least one dimension"));
    }
    check_dims(centers, dims, "center")?;
    check_dims(points, dims, "point")?;
    Ok(assign_validated(points, centers))
}

/// [`assign_points`] for inputs whose dimensions were already validated, `centers` non-empty.
pub(crate) fn assign_validated<T, P, C>(points: &[P], centers: &[C]) -> Vec<usize>
        where T: Primitive, P: AsRef<[T]> + Sync, C: AsRef<[T]> + Sync {
    points.par_iter()
        .map(|p| nearest_center(p.as_ref(), centers).0)
        .collect()
}

/// Index of, and distance to, the nearest center. `centers` must be non-empty.
pub(crate) fn nearest_center<T: Primitive, C: AsRef<[T]>>(point: &[T], centers: &[C]) -> (usize, T) {
    let mut best = (0, T::infinity());
    for (idx, c) in centers.iter().enumerate() {
        let dist = rms_distance(point, c.as_ref());
        // strict comparison: earlier centers win ties
        if dist < best.1 {
            best = (idx, dist);
        }
    }
    best
}

/// Recompute the centers as the centroids of the groups in `assignment`.
///
/// Only labels that actually occur in `assignment` produce a center, so the output can hold fewer
/// centers than the previous iteration did. The output is ordered by ascending label. Callers have
/// to reassign against the returned list before using the labels again.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] if `assignment` is empty or its length differs from `points`.
pub fn update_centers<T, P>(points: &[P], assignment: &[usize]) -> Result<Vec<Vec<T>>>
        where T: Primitive, P: AsRef<[T]> + Sync {
    check_assignment(points, assignment)?;

    let mut groups: BTreeMap<usize, Vec<&[T]>> = BTreeMap::new();
    for (p, &label) in points.iter().zip(assignment.iter()) {
        groups.entry(label).or_default().push(p.as_ref());
    }
    let groups: Vec<Vec<&[T]>> = groups.into_values().collect();
    groups.par_iter()
        .map(|members| geometry::centroid(members))
        .collect()
}

/// Fixed-k variant of [`update_centers`].
///
/// `assignment` must have been calculated against `centers`. Every label in `0..centers.len()`
/// that has no members is re-seeded: the point with the greatest distance to its current center,
/// taken from a group with more than one member, is moved into the empty group (lowest point index
/// on equal distance). The output always holds `centers.len()` centers, in label order.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] on the preconditions of [`update_centers`], if a label is out of
/// range of `centers`, or if there are fewer points than centers.
pub fn update_centers_reseeding<T, P, C>(points: &[P], assignment: &[usize], centers: &[C]) -> Result<Vec<Vec<T>>>
        where T: Primitive, P: AsRef<[T]> + Sync, C: AsRef<[T]> + Sync {
    check_assignment(points, assignment)?;
    let k = centers.len();
    if let Some(idx) = assignment.iter().position(|&label| label >= k) {
        return Err(KMeansError::invalid(format!(
            "label {} of point {} does not reference one of the {} centers", assignment[idx], idx, k)));
    }
    if points.len() < k {
        return Err(KMeansError::invalid(format!("cannot fill {} groups with {} points", k, points.len())));
    }
    let dims = centers[0].as_ref().len();
    check_dims(centers, dims, "center")?;
    check_dims(points, dims, "point")?;

    let mut assignment = assignment.to_vec();
    let mut frequency = vec![0usize; k];
    assignment.iter().for_each(|&label| frequency[label] += 1);

    if frequency.contains(&0) {
        let centroid_distances: Vec<T> = points.par_iter()
            .zip(assignment.par_iter())
            .map(|(p, &label)| rms_distance(p.as_ref(), centers[label].as_ref()))
            .collect();

        for empty in 0..k {
            if frequency[empty] != 0 {
                continue;
            }
            // k <= points.len() guarantees there is a group with more than one member
            let mut donor: Option<(usize, T)> = None;
            for (idx, &label) in assignment.iter().enumerate() {
                if frequency[label] > 1 && donor.map_or(true, |(_, best)| centroid_distances[idx] > best) {
                    donor = Some((idx, centroid_distances[idx]));
                }
            }
            let (sample_id, dist) = donor
                .ok_or_else(|| KMeansError::invalid("no group has a member to spare for an empty group"))?;
            log::warn!("group {} is empty, re-seeding it with point {} (distance {:e})", empty, sample_id, dist);
            frequency[assignment[sample_id]] -= 1;
            frequency[empty] += 1;
            assignment[sample_id] = empty;
        }
    }

    let mut groups: Vec<Vec<&[T]>> = vec![Vec::new(); k];
    for (p, &label) in points.iter().zip(assignment.iter()) {
        groups[label].push(p.as_ref());
    }
    groups.par_iter()
        .map(|members| geometry::centroid(members))
        .collect()
}

fn check_assignment<P>(points: &[P], assignment: &[usize]) -> Result<()> {
    if assignment.is_empty() {
        return Err(KMeansError::invalid("cannot update centers from an empty assignment"));
    }
    if assignment.len() != points.len() {
        return Err(KMeansError::invalid(format!(
            "assignment has {} labels for {} points", assignment.len(), points.len())));
    }
    Ok(())
}
