use metro_router::{rank, Network, NetworkTable, RouteOptimizer, DEFAULT_WEIGHTS};

const TABLE: &str = r#"{
    "lines": [
        {
            "name": "Green Line",
            "stations": ["Harbour", "Market", "Museum", "University"],
            "default_travel_time": 3.0,
            "default_distance": 1.5,
            "default_cost": 4.0,
            "overrides": [{ "from": "Market", "to": "Museum", "travel_time": 6.0 }]
        },
        {
            "name": "Express",
            "stations": ["Harbour", "University"],
            "default_travel_time": 5.0,
            "default_distance": 4.0,
            "default_cost": 20.0
        }
    ]
}"#;

// Load a network from a JSON table instead of the built-in reference line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let network = Network::from_table(&NetworkTable::from_json_str(TABLE)?)?;
    network.print_stats();

    let optimizer = RouteOptimizer::new(&network);
    let routes = optimizer.optimize("Harbour", DEFAULT_WEIGHTS)?;
    for route in rank(&routes) {
        println!("{route}");
    }

    Ok(())
}
