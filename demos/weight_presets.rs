use strum::IntoEnumIterator;

use metro_router::{Preset, RouteOptimizer, RouteTable};

use dev_utils::{build_example_network, get_example_origin};

// Compare how each preset ranks the routes from the same origin.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let network = build_example_network();
    let optimizer = RouteOptimizer::new(&network);
    let origin = get_example_origin();

    for preset in Preset::iter() {
        let routes = optimizer.optimize(origin, preset.weights())?;
        println!("Preset: {preset}");
        print!("{}", RouteTable::new(origin, &routes));
        println!();
    }

    Ok(())
}
