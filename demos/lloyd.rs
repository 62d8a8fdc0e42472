use lloyd_kmeans::*;

fn main() {
    let (sample_cnt, sample_dims, k) = (20000, 16, 4);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());

    // Calculate kmeans, using k random samples as initial centers
    let kmean = KMeans::new(samples, sample_cnt, sample_dims).expect("valid dataset");
    let result = kmean.kmeans_lloyd(k, KMeans::init_random_sample, &KMeansConfig::default()).expect("valid k");
    let clustering = kmean.clustering(&result).expect("matching assignment");

    println!("Centroids: {:?}", result.centroids);
    println!("Iterations: {} ({:?})", result.iterations, result.status);
    println!("Cluster sizes: {:?}", result.centroid_frequency());
    println!("Cost: {}", clustering.cost().expect("non-empty groups"));
}
