use crate::geometry::check_dims;
use crate::{KMeans, KMeansError, Primitive, Result};

#[inline(always)]
pub fn calculate<T: Primitive>(kmean: &KMeans<T>, k: usize, computed: Vec<Vec<T>>) -> Result<Vec<Vec<T>>> {
    if computed.len() != k {
        return Err(KMeansError::invalid(format!("initialized with {} centroids, but k is {}", computed.len(), k)));
    }
    check_dims(&computed, kmean.sample_dims, "initial centroid")?;
    Ok(computed)
}
