use metro_router::weights::{COST_FOCUS, FEWER_STOPS, TIME_FOCUS};
use metro_router::{Network, NetworkTable, RouteOptimizer, WeightVector};

// A slow cheap line with intermediate stops, and a fast expensive express between its ends.
const TABLE: &str = r#"{
    "lines": [
        {
            "name": "Green Line",
            "stations": ["Harbour", "Market", "Museum", "University"],
            "default_travel_time": 3.0,
            "default_distance": 1.5,
            "default_cost": 4.0,
            "overrides": [{ "from": "Museum", "to": "Market", "travel_time": 6.0 }]
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

fn network() -> Network {
    Network::from_table(&NetworkTable::from_json_str(TABLE).unwrap()).unwrap()
}

fn best_path(network: &Network, weights: WeightVector) -> Vec<String> {
    let routes = RouteOptimizer::new(network).optimize("Harbour", weights).unwrap();
    routes["University"].path.iter().map(|s| s.to_string()).collect()
}

#[test_log::test]
fn cost_focus_takes_the_cheap_line() {
    let network = network();
    assert_eq!(best_path(&network, COST_FOCUS), ["Harbour", "Market", "Museum", "University"]);

    let routes = RouteOptimizer::new(&network).optimize("Harbour", COST_FOCUS).unwrap();
    let route = &routes["University"];
    assert_eq!((route.total_cost, route.total_time, route.total_stops), (12.0, 12.0, 3));
}

#[test_log::test]
fn time_and_stop_focus_take_the_express() {
    let network = network();
    assert_eq!(best_path(&network, TIME_FOCUS), ["Harbour", "University"]);
    assert_eq!(best_path(&network, FEWER_STOPS), ["Harbour", "University"]);
}

#[test_log::test]
fn shifting_weight_flips_the_choice() {
    let network = network();
    let mut previous_cheap = true;
    let mut flips = 0;
    for step in 0..=10 {
        let w_cost = step as f64 / 10.0;
        let w_time = 1.0 - w_cost;
        let cheap = best_path(&network, WeightVector::new(w_cost, w_time, 0.0)).len() == 4;
        if step > 0 && cheap != previous_cheap {
            flips += 1;
        }
        previous_cheap = cheap;
    }
    // Pure time weighting picks the express, pure cost the line; the choice changes exactly once.
    assert!(previous_cheap);
    assert_eq!(flips, 1);
}
