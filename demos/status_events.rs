use lloyd_kmeans::*;

fn main() {
    let (sample_cnt, sample_dims, k) = (20000, 16, 8);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

	let conf = KMeansConfig::build()
		.init_done(&|s| println!("Initialization completed with {} centroids.", s.centroids.len()))
		.iteration_done(&|s, nr, changed|
			println!("Iteration {} - {} labels changed | {} centroids", nr, changed, s.centroids.len()))
        .abort_strategy(AbortStrategy::MaxIterations { max_iter: 250 })
        .empty_groups(EmptyGroupPolicy::Reseed)
        .seed(1337)
		.build();

    let kmean = KMeans::new(samples, sample_cnt, sample_dims).expect("valid dataset");
    let result = kmean.kmeans_lloyd(k, KMeans::init_random_sample, &conf).expect("valid k");

    println!("Status: {:?} after {} iterations", result.status, result.iterations);
    println!("Cluster sizes: {:?}", result.centroid_frequency());
}
