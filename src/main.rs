use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use metro_router::{kochi, utils, Network, NetworkTable, Preset, RouteOptimizer, RouteTable, WeightVector, DEFAULT_WEIGHTS};

#[derive(Parser, Debug)]
#[command(
    name = "metro-router",
    version,
    about = "Find the best metro routes from a station under a blend of cost, time and stops"
)]
struct Args {
    /// JSON network table to load instead of the built-in Kochi Metro Blue Line
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Starting station (name, fragment or number). Omit to plan routes interactively
    #[arg(short, long)]
    from: Option<String>,

    /// Named weighting: balanced, cost-focus, time-focus or fewer-stops
    #[arg(short, long, conflicts_with_all = ["cost", "time", "stops"])]
    preset: Option<Preset>,

    /// Cost weight (0-1)
    #[arg(long, requires_all = ["time", "stops"])]
    cost: Option<f64>,

    /// Time weight (0-1)
    #[arg(long, requires_all = ["cost", "stops"])]
    time: Option<f64>,

    /// Stops weight (0-1)
    #[arg(long, requires_all = ["cost", "time"])]
    stops: Option<f64>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn weights(&self) -> WeightVector {
        match (self.preset, self.cost, self.time, self.stops) {
            (Some(preset), ..) => preset.weights(),
            (None, Some(cost), Some(time), Some(stops)) => WeightVector::new(cost, time, stops),
            _ => DEFAULT_WEIGHTS,
        }
    }
}

fn load_network(path: Option<&PathBuf>) -> Result<Network> {
    let Some(path) = path else {
        return Ok(kochi::build_network()?);
    };
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let table = NetworkTable::from_json_reader(BufReader::new(file))?;
    Ok(Network::from_table(&table)?)
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed.");
        }
        Ok(line.trim().to_owned())
    }

    fn display_stations(&mut self, network: &Network) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "STATIONS")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        for (i, name) in utils::sorted_station_names(network).into_iter().enumerate() {
            let zone = network
                .get_station_idx(name)
                .and_then(|idx| network.get_station(idx).zone.as_deref())
                .unwrap_or("-");
            writeln!(self.output, "{:2}. {name:20} ({zone})", i + 1)?;
        }
        Ok(())
    }

    fn get_station<'a>(&mut self, network: &'a Network) -> Result<&'a str> {
        loop {
            let query = self.prompt("Enter your starting station: ")?;
            match utils::resolve_station(network, &query) {
                Ok(station) => return Ok(station),
                Err(e) => writeln!(self.output, "{e} Please try again.")?,
            }
        }
    }

    // Closed input ends the session; only unparsable or invalid weights are asked for again.
    fn get_weights(&mut self) -> Result<WeightVector> {
        writeln!(self.output)?;
        writeln!(self.output, "Optimisation preferences (weights should sum to 1.0):")?;
        writeln!(
            self.output,
            "Default: Cost={}, Time={}, Stops={}",
            DEFAULT_WEIGHTS.cost, DEFAULT_WEIGHTS.time, DEFAULT_WEIGHTS.stops
        )?;
        if self.prompt("Use default weights? (y/n): ")?.eq_ignore_ascii_case("y") {
            return Ok(DEFAULT_WEIGHTS);
        }
        loop {
            let cost = self.prompt("Cost weight (0-1): ")?;
            let time = self.prompt("Time weight (0-1): ")?;
            let stops = self.prompt("Stops weight (0-1): ")?;
            match parse_weights(&cost, &time, &stops) {
                Ok(weights) => return Ok(weights),
                Err(e) => writeln!(self.output, "{e} Please try again.")?,
            }
        }
    }

    fn plan(&mut self, optimizer: &RouteOptimizer, origin: &str, weights: WeightVector) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Optimising routes from {origin}...")?;
        writeln!(self.output, "Weights - Cost: {}, Time: {}, Stops: {}", weights.cost, weights.time, weights.stops)?;
        let routes = optimizer.optimize(origin, weights)?;
        writeln!(self.output)?;
        write!(self.output, "{}", RouteTable::new(origin, &routes))?;
        Ok(())
    }

    fn run(&mut self, optimizer: &RouteOptimizer) -> Result<()> {
        let network = optimizer.network();
        writeln!(self.output, "METRO ROUTE OPTIMISER")?;
        loop {
            self.display_stations(network)?;
            writeln!(self.output)?;
            let origin = self.get_station(network)?;
            let weights = self.get_weights()?;
            self.plan(optimizer, origin, weights)?;

            writeln!(self.output)?;
            if !self.prompt("Would you like to plan another route? (y/n): ")?.eq_ignore_ascii_case("y") {
                break;
            }
        }
        writeln!(self.output, "Thank you for using the metro route optimiser!")?;
        Ok(())
    }
}

fn parse_weights(cost: &str, time: &str, stops: &str) -> Result<WeightVector> {
    let weights = WeightVector::new(cost.parse()?, time.parse()?, stops.parse()?);
    weights.validate()?;
    Ok(weights)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let network = load_network(args.network.as_ref())?;
    network.print_stats();
    let optimizer = RouteOptimizer::new(&network);
    let mut console = Console::new(stdin().lock(), stdout().lock());

    if let Some(query) = &args.from {
        let weights = args.weights();
        weights.validate()?;
        let origin = utils::resolve_station(&network, query)?;
        return console.plan(&optimizer, origin, weights);
    }

    console.run(&optimizer)
}
