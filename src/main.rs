use rand::rngs::SmallRng;
use rand::SeedableRng;
use starmap::dataset::{
    generate_dataset, knapsack_report, parse_dataset, render_dataset, shortest_path_report,
    spanning_tree_report,
};
use starmap::{knapsack, minimum_spanning_tree, shortest_paths, StarMap};
use std::{env, fs, process};

const DEFAULT_DATASET: &str = "dataset.txt";
const KNAPSACK_CAPACITY: usize = 800;
const GENERATED_STARS: usize = 20;
const GENERATED_EXTRA_ROUTES: usize = 35;
const GENERATOR_SEED: u64 = 1211202025;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_DATASET));

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            let mut rng = SmallRng::seed_from_u64(GENERATOR_SEED);
            let (stars, routes) =
                generate_dataset(&mut rng, GENERATED_STARS, GENERATED_EXTRA_ROUTES);
            let rendered = render_dataset(&stars, &routes);
            fs::write(&path, &rendered).expect("Unable to write dataset file");
            println!("Generated dataset saved to {path}");
            rendered
        }
    };

    let (stars, routes) = parse_dataset(&contents).unwrap_or_else(|error| {
        eprintln!("Error reading dataset: {error}");
        process::exit(1);
    });
    let map = StarMap::build(stars, routes).unwrap_or_else(|error| {
        eprintln!("Invalid dataset: {error}");
        process::exit(1);
    });

    let results = shortest_paths(&map, 0).expect("map has at least one star");
    fs::write(
        "shortest_paths.txt",
        shortest_path_report(&map, 0, &results),
    )
    .expect("Unable to write file");
    println!("Result is saved to shortest_paths.txt");

    let tree = minimum_spanning_tree(&map);
    fs::write(
        "minimum_spanning_tree.txt",
        spanning_tree_report(&map, &tree),
    )
    .expect("Unable to write file");
    println!("MST saved to minimum_spanning_tree.txt");

    let solution = knapsack(map.stars(), KNAPSACK_CAPACITY).expect("map has at least one star");
    fs::write(
        "knapsack_result.txt",
        knapsack_report(map.stars(), &solution),
    )
    .expect("Unable to write file");
    println!("Result saved to knapsack_result.txt");
}
