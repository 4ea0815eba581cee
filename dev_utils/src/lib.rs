use metro_router::{kochi, Network, WeightVector, DEFAULT_WEIGHTS};

// Common example data for the demos, benchmarks and integration tests.

pub fn build_example_network() -> Network {
    kochi::build_network().unwrap()
}

pub fn get_example_origin() -> &'static str {
    "Aluva"
}

pub fn get_example_weights() -> WeightVector {
    DEFAULT_WEIGHTS
}

pub fn get_example_scenario() -> (Network, &'static str, WeightVector) {
    (build_example_network(), get_example_origin(), get_example_weights())
}

pub fn station_name(i: usize) -> String {
    format!("S{i}")
}

/// A seeded random network: a bidirectional chain through every station (so everything is
/// reachable from everywhere) plus `extra` random directed shortcuts.
pub fn build_random_network(seed: u64, num_stations: usize, extra: usize) -> Network {
    assert!(num_stations >= 2, "Random networks need at least two stations.");
    fastrand::seed(seed);
    let mut network = Network::new();
    for i in 1..num_stations {
        let (time, distance, cost) = random_attributes();
        network.add_bidirectional(&station_name(i - 1), &station_name(i), time, distance, cost).unwrap();
    }
    for _ in 0..extra {
        let from = fastrand::usize(..num_stations);
        let to = fastrand::usize(..num_stations);
        if from == to {
            continue;
        }
        let (time, distance, cost) = random_attributes();
        network.add_connection(&station_name(from), &station_name(to), time, distance, cost).unwrap();
    }
    network
}

fn random_attributes() -> (f64, f64, f64) {
    let time = 1.0 + fastrand::f64() * 9.0;
    let distance = 0.5 + fastrand::f64() * 3.0;
    let cost = (fastrand::u32(1..=20) as f64) * 2.5;
    (time, distance, cost)
}
