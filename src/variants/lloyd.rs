use crate::assignment::{assign_validated, update_centers, update_centers_reseeding};
use crate::geometry::check_dims;
use crate::{AbortStrategy, EmptyGroupPolicy, KMeans, KMeansConfig, KMeansError, KMeansState, Primitive, Result, Status};

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    fn update_centroids(samples: &[&[T]], state: &KMeansState<T>, policy: EmptyGroupPolicy) -> Result<Vec<Vec<T>>> {
        match policy {
            EmptyGroupPolicy::Drop => {
                let centroids = update_centers(samples, &state.assignments)?;
                if centroids.len() < state.centroids.len() {
                    log::warn!("{} of {} groups are empty and were dropped",
                        state.centroids.len() - centroids.len(), state.centroids.len());
                }
                Ok(centroids)
            },
            EmptyGroupPolicy::Reseed => update_centers_reseeding(samples, &state.assignments, &state.centroids)
        }
    }

    pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T>, usize, &KMeansConfig<'c, T>) -> Result<Vec<Vec<T>>> {
        if k == 0 || k > data.sample_cnt {
            return Err(KMeansError::invalid(format!("k must be in 1..={}, got {}", data.sample_cnt, k)));
        }
        if let AbortStrategy::MaxIterations { max_iter: 0 } = config.abort_strategy {
            return Err(KMeansError::invalid("iteration limit has to be at least 1"));
        }

        let centroids = init(data, k, config)?;
        if centroids.len() != k {
            return Err(KMeansError::invalid(format!("initialization produced {} centroids for k = {}", centroids.len(), k)));
        }
        check_dims(&centroids, data.sample_dims, "initial centroid")?;

        // Initial assignment and notify subscriber
        let samples = data.rows();
        let assignments = assign_validated(&samples, &centroids);
        let mut state = KMeansState::new(k, centroids, assignments);
        (config.init_done)(&state);
        let mut abort_strategy = config.abort_strategy.create_logic();

        let mut iteration = 0;
        loop {
            iteration += 1;
            let centroids = Self::update_centroids(&samples, &state, config.empty_groups)?;
            let assignments = assign_validated(&samples, &centroids);
            let changed = state.assignments.iter().zip(assignments.iter())
                .filter(|(prev, next)| prev != next)
                .count();
            state.centroids = centroids;
            state.assignments = assignments;
            state.iterations = iteration;
            log::debug!("iteration {}: {} labels changed, {} centroids", iteration, changed, state.centroids.len());

            // Notify subscriber about finished iteration
            (config.iteration_done)(&state, iteration, changed);
            if changed == 0 {
                log::info!("converged after {} iterations with {} clusters", iteration, state.centroids.len());
                state.status = Status::Converged;
                break;
            }
            if !abort_strategy.next(iteration) {
                log::warn!("no fixpoint after {} iterations, {} labels still changing", iteration, changed);
                state.status = Status::IterationLimit;
                break;
            }
        }
        Ok(state)
    }
}
