use crate::{KMeans, KMeansConfig, KMeansError, Primitive, Result};
use rand::seq::index;
use std::ops::DerefMut;

#[inline(always)] pub fn calculate<T: Primitive>(kmean: &KMeans<T>, k: usize, config: &KMeansConfig<'_, T>) -> Result<Vec<Vec<T>>> {
	if k == 0 || k > kmean.sample_cnt {
		return Err(KMeansError::invalid(format!("cannot sample {} distinct centers from {} samples", k, kmean.sample_cnt)));
	}
	let chosen = index::sample(config.rnd.borrow_mut().deref_mut(), kmean.sample_cnt, k);
	log::debug!("sampled initial centers {:?}", chosen);
	Ok(chosen.into_iter()
		.map(|idx| kmean.samples[idx * kmean.sample_dims..(idx + 1) * kmean.sample_dims].to_vec())
		.collect())
}
