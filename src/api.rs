use crate::{AbortStrategy, Clustering, KMeansError, Primitive, Result};
use crate::geometry::check_dims;
use std::cell::RefCell;
use rand::prelude::*;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, usize);

/// What to do with groups that lost all of their members during an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyGroupPolicy {
    /// Drop the group. The following iterations run with fewer centers than requested, and labels
    /// are renumbered to the surviving groups (in ascending order of their previous label).
    #[default]
    Drop,
    /// Keep the amount of centers fixed at k, by moving the point that is farthest away from its
    /// center (and not alone in its group) into the empty group.
    Reseed
}

/// This is a structure holding various configuration options for a k-means calculation, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initial assignment was calculated
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration
    /// - **changed**: Amount of samples whose label changed in this iteration
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator used by the randomized initialization methods
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy,
    pub(crate) empty_groups: EmptyGroupPolicy
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            abort_strategy: AbortStrategy::Fixpoint,
            empty_groups: EmptyGroupPolicy::Drop
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("abort_strategy", &self.abort_strategy)
            .field("empty_groups", &self.empty_groups)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the initial assignment, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used to pick initial centers.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Shorthand for [`KMeansConfigBuilder::random_generator`] with a [`StdRng`] seeded from **seed**.
    pub fn seed(self, seed: u64) -> Self {
        self.random_generator(StdRng::seed_from_u64(seed))
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::Fixpoint`]
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Set how groups without members are handled.
    /// ## Default
    /// [`EmptyGroupPolicy::Drop`]
    pub fn empty_groups(mut self, policy: EmptyGroupPolicy) -> Self {
        self.config.empty_groups = policy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// Phase of a k-means calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The calculation is still running (only observable from within the callbacks).
    Iterating,
    /// The last iteration left the assignment unchanged.
    Converged,
    /// The [`AbortStrategy`] stopped the calculation before the assignment reached a fixpoint.
    /// The state holds the latest centroids and the assignment calculated against them.
    IterationLimit
}

/// Data-structure storing the current state during calculation, as well as the final result,
/// as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable.
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **centroids**: Current cluster centers. With [`EmptyGroupPolicy::Drop`], this may hold less than **k** centers
/// - **assignments**: Vector mapping each sample to the index of its nearest centroid
/// - **iterations**: Amount of update/assign iterations that were calculated
/// - **status**: Whether the calculation converged
#[derive(Clone, Debug, PartialEq)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub centroids: Vec<Vec<T>>,
    pub assignments: Vec<usize>,
    pub iterations: usize,
    pub status: Status
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(k: usize, centroids: Vec<Vec<T>>, assignments: Vec<usize>) -> Self {
        Self { k, centroids, assignments, iterations: 0, status: Status::Iterating }
    }

    pub fn is_converged(&self) -> bool { self.status == Status::Converged }

    /// Amount of samples assigned to each centroid.
    pub fn centroid_frequency(&self) -> Vec<usize> {
        let mut frequency = vec![0usize; self.centroids.len()];
        self.assignments.iter().for_each(|&a| frequency[a] += 1);
        frequency
    }
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples will be the type used internally for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure. Sample dimensions are validated once, here.
///
/// ## Supported initialization methods
/// - Random-Sample [`KMeans::init_random_sample`]
/// - Precomputed [`KMeans::init_precomputed`]
#[derive(Clone, Debug)]
pub struct KMeans<T: Primitive> {
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
    pub(crate) samples: Vec<T>
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    pub fn new(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self> {
        if sample_cnt == 0 || sample_dims == 0 {
            return Err(KMeansError::invalid(format!(
                "need at least one sample with at least one dimension, got {}x{}", sample_cnt, sample_dims)));
        }
        if samples.len() != sample_cnt * sample_dims {
            return Err(KMeansError::invalid(format!(
                "{} values do not form {} samples of dimension {}", samples.len(), sample_cnt, sample_dims)));
        }
        Ok(Self { sample_cnt, sample_dims, samples })
    }

    /// Create a new instance from a list of points, which all have to share the same dimension.
    pub fn from_points<P: AsRef<[T]>>(points: &[P]) -> Result<Self> {
        let sample_dims = points.first()
            .ok_or_else(|| KMeansError::invalid("cannot cluster an empty point set"))?
            .as_ref().len();
        check_dims(points, sample_dims, "point")?;
        let samples = points.iter().flat_map(|p| p.as_ref().iter().cloned()).collect();
        Self::new(samples, points.len(), sample_dims)
    }

    pub fn sample_cnt(&self) -> usize { self.sample_cnt }
    pub fn sample_dims(&self) -> usize { self.sample_dims }

    /// The sample at position **idx**.
    pub fn sample(&self, idx: usize) -> Option<&[T]> {
        self.samples.chunks_exact(self.sample_dims).nth(idx)
    }

    /// All samples, in dataset order.
    pub fn rows(&self) -> Vec<&[T]> {
        self.samples.chunks_exact(self.sample_dims).collect()
    }

    /// Group this instance's samples by the assignments of **state**.
    pub fn clustering(&self, state: &KMeansState<T>) -> Result<Clustering<T>> {
        Clustering::from_assignments(&self.rows(), &state.assignments)
    }

    /// Lloyd's k-means algorithm: alternately move each centroid to the mean of its samples and
    /// reassign every sample to its nearest centroid, until the assignment does not change anymore
    /// (or the configured [`AbortStrategy`] stops the calculation).
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for (`1 <= k <= sample_cnt`)
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Example
    /// ```rust
    /// use lloyd_kmeans::*;
    ///
    /// let samples = vec![0.0f64, 0.0, 0.0, 1.0, 10.0, 0.0, 10.0, 1.0];
    /// let kmean = KMeans::new(samples, 4, 2).unwrap();
    /// let conf = KMeansConfig::build().seed(1337).build();
    /// let result = kmean.kmeans_lloyd(2, KMeans::init_random_sample, &conf).unwrap();
    ///
    /// assert!(result.is_converged());
    /// println!("Centroids: {:?}", result.centroids);
    /// println!("Cluster-Assignments: {:?}", result.assignments);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T>, usize, &KMeansConfig<'c, T>) -> Result<Vec<Vec<T>>> {
        crate::variants::Lloyd::calculate(self, k, init, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method selects k distinct samples (sampling without replacement) as initial centroids,
    /// using the random generator of the passed [`KMeansConfig`].
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample(kmean: &KMeans<T>, k: usize, config: &KMeansConfig<'_, T>) -> Result<Vec<Vec<T>>> {
        crate::inits::randomsample::calculate(kmean, k, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given **centroids** as initial centroids. There have to be exactly k of them, each
    /// with the dimension of the samples.
    pub fn init_precomputed(centroids: Vec<Vec<T>>) -> impl for<'c> FnOnce(&KMeans<T>, usize, &KMeansConfig<'c, T>) -> Result<Vec<Vec<T>>> {
        move |kmean: &KMeans<T>, k: usize, _: &KMeansConfig<'_, T>| crate::inits::precomputed::calculate(kmean, k, centroids)
    }
}


/// Cluster **points**, starting from **initial_centers**, until the assignment reaches a fixpoint.
///
/// This runs [`KMeans::kmeans_lloyd`] with [`KMeans::init_precomputed`] and the default
/// [`KMeansConfig`], and regroups the final assignment.
///
/// ## Example
/// ```rust
/// use lloyd_kmeans::*;
///
/// let points = [[0.0f64, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
/// let clustering = run_clustering(&points, &[[0.0, 0.0], [10.0, 0.0]]).unwrap();
///
/// assert_eq!(clustering.get(0).unwrap(), &[vec![0.0, 0.0], vec![0.0, 1.0]]);
/// assert!((cost(&clustering).unwrap() - 1.4142135).abs() < 1e-6);
/// ```
pub fn run_clustering<T, P, C>(points: &[P], initial_centers: &[C]) -> Result<Clustering<T>>
        where T: Primitive, P: AsRef<[T]>, C: AsRef<[T]> {
    let kmean = KMeans::from_points(points)?;
    let centers: Vec<Vec<T>> = initial_centers.iter().map(|c| c.as_ref().to_vec()).collect();
    let state = kmean.kmeans_lloyd(centers.len(), KMeans::init_precomputed(centers), &KMeansConfig::default())?;
    kmean.clustering(&state)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_validation() {
        assert!(KMeans::<f64>::new(vec![], 0, 2).unwrap_err().is_invalid_argument());
        assert!(KMeans::new(vec![1.0f64, 2.0, 3.0], 2, 2).unwrap_err().is_invalid_argument());
        assert!(KMeans::new(vec![1.0f64, 2.0], 2, 0).unwrap_err().is_invalid_argument());

        let empty: Vec<Vec<f32>> = vec![];
        assert!(KMeans::from_points(&empty).unwrap_err().is_invalid_argument());
        assert!(KMeans::from_points(&[vec![1.0f32, 2.0], vec![3.0]]).unwrap_err().is_invalid_argument());
        assert!(KMeans::from_points(&[Vec::<f32>::new()]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn dataset_rows() {
        let kmean = KMeans::from_points(&[[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        assert_eq!(kmean.sample_cnt(), 3);
        assert_eq!(kmean.sample_dims(), 2);
        assert_eq!(kmean.sample(1), Some(&[3.0, 4.0][..]));
        assert_eq!(kmean.sample(3), None);
        assert_eq!(kmean.rows(), vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
    }

    #[test]
    fn centroid_frequency_counts_assignments() {
        let state = KMeansState::new(3, vec![vec![0.0f64]; 3], vec![2, 0, 2, 2]);
        assert_eq!(state.centroid_frequency(), vec![1, 0, 3]);
        assert_eq!(state.status, Status::Iterating);
        assert!(!state.is_converged());
    }

    #[test]
    fn config_builder() {
        let conf: KMeansConfig<'_, f64> = KMeansConfig::build()
            .abort_strategy(AbortStrategy::MaxIterations { max_iter: 5 })
            .empty_groups(EmptyGroupPolicy::Reseed)
            .seed(7)
            .build();
        assert_eq!(conf.abort_strategy, AbortStrategy::MaxIterations { max_iter: 5 });
        assert_eq!(conf.empty_groups, EmptyGroupPolicy::Reseed);

        let conf: KMeansConfig<'_, f32> = KMeansConfig::default();
        assert_eq!(conf.abort_strategy, AbortStrategy::Fixpoint);
        assert_eq!(conf.empty_groups, EmptyGroupPolicy::Drop);
    }

    #[test]
    fn run_clustering_separated_pairs() {
        let points = vec![vec![0.0f64, 0.0], vec![0.0, 1.0], vec![10.0, 0.0], vec![10.0, 1.0]];
        let clustering = run_clustering(&points, &[vec![0.0, 0.0], vec![10.0, 0.0]]).unwrap();
        assert_eq!(clustering.len(), 2);
        assert_eq!(clustering.get(0).unwrap(), &[vec![0.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(clustering.get(1).unwrap(), &[vec![10.0, 0.0], vec![10.0, 1.0]]);
    }

    #[test]
    fn run_clustering_rejects_bad_centers() {
        let points = vec![vec![0.0f64, 0.0], vec![0.0, 1.0]];
        let no_centers: Vec<Vec<f64>> = vec![];
        assert!(run_clustering(&points, &no_centers).unwrap_err().is_invalid_argument());
        assert!(run_clustering(&points, &[vec![0.0f64]]).unwrap_err().is_invalid_argument());
        // more centers than points
        let centers = vec![vec![0.0f64, 0.0]; 3];
        assert!(run_clustering(&points, &centers).unwrap_err().is_invalid_argument());
    }
}
