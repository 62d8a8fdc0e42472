use crate::geometry::{self, rms_distance};
use crate::{KMeansError, Primitive, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Final grouping of a clustering run: every label mapped to the points assigned to it.
///
/// Labels are indices into the center list the assignment was calculated against. Only labels
/// with at least one member appear, and members keep their dataset order.
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering<T: Primitive> {
    groups: BTreeMap<usize, Vec<Vec<T>>>
}
impl<T: Primitive> Clustering<T> {
    /// Regroup `points` by their label in `assignments`.
    ///
    /// ## Errors
    /// [`KMeansError::InvalidArgument`] if the two sequences differ in length.
    pub fn from_assignments<P: AsRef<[T]>>(points: &[P], assignments: &[usize]) -> Result<Self> {
        if points.len() != assignments.len() {
            return Err(KMeansError::invalid(format!(
                "assignment has {} labels for {} points", assignments.len(), points.len())));
        }
        let mut groups: BTreeMap<usize, Vec<Vec<T>>> = BTreeMap::new();
        for (p, &label) in points.iter().zip(assignments.iter()) {
            groups.entry(label).or_default().push(p.as_ref().to_vec());
        }
        Ok(Self { groups })
    }

    /// Amount of (non-empty) groups.
    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Members of the group with the given label.
    pub fn get(&self, label: usize) -> Option<&[Vec<T>]> {
        self.groups.get(&label).map(|g| g.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().cloned()
    }

    /// Iterate over `(label, members)` in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Vec<T>])> {
        self.groups.iter().map(|(&label, g)| (label, g.as_slice()))
    }

    pub fn groups(&self) -> &BTreeMap<usize, Vec<Vec<T>>> { &self.groups }

    pub fn into_groups(self) -> BTreeMap<usize, Vec<Vec<T>>> { self.groups }

    /// Total inertia of this clustering. See [`cost`].
    pub fn cost(&self) -> Result<T> { cost(self) }
}
impl<T: Primitive> From<BTreeMap<usize, Vec<Vec<T>>>> for Clustering<T> {
    fn from(groups: BTreeMap<usize, Vec<Vec<T>>>) -> Self { Self { groups } }
}

/// Sum of the distances from every point to the centroid of its group.
///
/// Each group's centroid is recalculated from its members. Groups are evaluated in parallel, their
/// partial sums are added in label order.
///
/// ## Errors
/// [`KMeansError::InvalidArgument`] if a group is empty or its members differ in dimension.
pub fn cost<T: Primitive>(clustering: &Clustering<T>) -> Result<T> {
    let groups: Vec<(&usize, &Vec<Vec<T>>)> = clustering.groups.iter().collect();
    let partial_sums = groups.par_iter()
        .map(|&(label, members)| -> Result<T> {
            if members.is_empty() {
                return Err(KMeansError::invalid(format!("group {} has no members", label)));
            }
            let center = geometry::centroid(members.as_slice())?;
            Ok(members.iter().map(|m| rms_distance(m, &center)).sum::<T>())
        })
        .collect::<Result<Vec<T>>>()?;
    Ok(partial_sums.into_iter().sum())
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn regroups_by_label() {
        let points = vec![vec![0.0f64, 0.0], vec![0.0, 1.0], vec![10.0, 0.0], vec![10.0, 1.0]];
        let clustering = Clustering::from_assignments(&points, &[1, 0, 1, 0]).unwrap();
        assert_eq!(clustering.len(), 2);
        assert_eq!(clustering.get(0).unwrap(), &[vec![0.0, 1.0], vec![10.0, 1.0]]);
        assert_eq!(clustering.get(1).unwrap(), &[vec![0.0, 0.0], vec![10.0, 0.0]]);
        assert_eq!(clustering.get(2), None);
        assert_eq!(clustering.labels().collect::<Vec<_>>(), vec![0, 1]);

        assert!(Clustering::from_assignments(&points, &[0, 1]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn cost_of_two_separated_pairs() {
        let points = vec![vec![0.0f64, 0.0], vec![0.0, 1.0], vec![10.0, 0.0], vec![10.0, 1.0]];
        let clustering = Clustering::from_assignments(&points, &[0, 0, 1, 1]).unwrap();
        // every point is sqrt(0.25 / 2) away from its centroid
        assert_abs_diff_eq!(cost(&clustering).unwrap(), 4.0 * 0.125f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(clustering.cost().unwrap(), 1.4142135623730951, epsilon = 1e-12);
    }

    #[test]
    fn cost_is_zero_only_for_coincident_members() {
        let clustering = Clustering::from_assignments(&[[5.0f32, 5.0], [5.0, 5.0], [1.0, 2.0]], &[0, 0, 3]).unwrap();
        assert_eq!(cost(&clustering).unwrap(), 0.0);

        let clustering = Clustering::from_assignments(&[[5.0f32, 5.0], [5.0, 5.5]], &[0, 0]).unwrap();
        assert!(cost(&clustering).unwrap() > 0.0);
    }

    #[test]
    fn cost_rejects_empty_groups() {
        let mut groups = BTreeMap::new();
        groups.insert(0usize, vec![vec![1.0f64]]);
        groups.insert(1usize, vec![]);
        let clustering = Clustering::from(groups);
        assert!(cost(&clustering).unwrap_err().is_invalid_argument());
    }
}
