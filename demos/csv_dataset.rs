use lloyd_kmeans::*;

/// Usage: `cargo run --example csv_dataset -- <points.csv> <k> [seed]`
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/data/blobs.csv".to_string());
    let k: usize = args.next().and_then(|v| v.parse().ok()).unwrap_or(3);
    let seed: u64 = args.next().and_then(|v| v.parse().ok()).unwrap_or(1);

    let points: Vec<Vec<f64>> = dataset::load_csv(&path)?;
    let kmean = KMeans::from_points(&points)?;
    let conf = KMeansConfig::build().seed(seed).build();
    let result = kmean.kmeans_lloyd(k, KMeans::init_random_sample, &conf)?;
    let clustering = kmean.clustering(&result)?;

    for (label, members) in clustering.iter() {
        println!("cluster {} ({} points): centroid {:?}", label, members.len(), centroid(members)?);
    }
    println!("Cost: {:.4}", cost(&clustering)?);
    Ok(())
}
