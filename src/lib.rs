//! # lloyd_kmeans - API documentation
//!
//! Small rust library for k-means clustering with Lloyd's algorithm.
//!
//! ## Design target
//! Starting from an initial set of centers, every sample is assigned to its nearest center and
//! every center is moved onto the centroid of its samples, until the assignment of samples to
//! centers does not change anymore (a fixpoint). Given the same initial centers, a run is fully
//! deterministic: ties are always resolved in favor of the lower center index, and parallel
//! evaluation (via rayon) never changes a result.
//!
//! Distances are euclidean distances normalized by the sample dimension
//! (`sqrt(sum((a_i - b_i)^2) / D)`). This does not change which center is nearest, but keeps
//! distances and costs comparable between datasets of differing dimension.
//!
//! ## Supported centroid initializations
//! - Random-Sample (k distinct samples, drawn with the configured random generator): [`KMeans::init_random_sample`]
//! - Precomputed (caller-supplied centers): [`KMeans::init_precomputed`]
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use lloyd_kmeans::*;
//!
//! let (sample_cnt, sample_dims, k) = (2000, 8, 4);
//!
//! // Generate some random data
//! let mut samples = vec![0.0f64;sample_cnt * sample_dims];
//! samples.iter_mut().for_each(|v| *v = rand::random());
//!
//! // Calculate kmeans, using random samples as initial centers
//! let kmean = KMeans::new(samples, sample_cnt, sample_dims).unwrap();
//! let conf = KMeansConfig::build()
//!     .abort_strategy(AbortStrategy::MaxIterations { max_iter: 500 })
//!     .build();
//! let result = kmean.kmeans_lloyd(k, KMeans::init_random_sample, &conf).unwrap();
//!
//! println!("Centroids: {:?}", result.centroids);
//! println!("Cluster-Assignments: {:?}", result.assignments);
//! println!("Cost: {}", kmean.clustering(&result).unwrap().cost().unwrap());
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct, which takes over the sample data and validates
//! it once. Calling [`KMeans::kmeans_lloyd`] does not mutate it; the state (and finally the result) of
//! a calculation is stored in a new [`KMeansState`]. [`KMeans::clustering`] groups the samples by
//! the final assignment into a [`Clustering`], whose [`cost`] is the sum of all sample distances to
//! their group's centroid.
//!
//! For callers that already hold their points and initial centers, [`run_clustering`] does all
//! of this in one call. The building blocks of an iteration are available on their own as well:
//! [`centroid`], [`distance`], [`assign_points`] and [`update_centers`].
//!
//! If an iteration leaves a group without samples, that group is dropped by default, so a result
//! may hold less than k centroids. See [`EmptyGroupPolicy`] for the alternative.

#[cfg(test)] mod helpers;
mod primitive;
mod error;
mod geometry;
mod assignment;
mod clustering;
mod api;
mod variants;
mod inits;
mod abort_strategy;
pub mod dataset;

pub use abort_strategy::AbortStrategy;
pub use api::{run_clustering, EmptyGroupPolicy, KMeans, KMeansConfig, KMeansConfigBuilder, KMeansState, Status};
pub use api::{InitDoneCallbackFn, IterationDoneCallbackFn};
pub use assignment::{assign_points, update_centers, update_centers_reseeding};
pub use clustering::{cost, Clustering};
pub use error::{KMeansError, Result};
pub use geometry::{centroid, distance};
pub use primitive::Primitive;
