use metro_router::RouteOptimizer;

use dev_utils::get_example_scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (network, origin, weights) = get_example_scenario();
    network.print_stats();

    let optimizer = RouteOptimizer::new(&network);
    let routes = optimizer.optimize(origin, weights)?;

    if let Some(route) = routes.get("M.G Road") {
        println!("{route}");
    } else {
        println!("No route found.");
    }

    Ok(())
}
