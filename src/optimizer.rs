use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use crate::network::{Currency, Minutes, Network, StationIndex};
use crate::route::{RouteResult, Routes};
use crate::utils;
use crate::weights::WeightVector;

pub type Score = f64;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("Station '{0}' not found in the network.")]
    UnknownStation(String),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NormalizationError {
    #[error("The {name} divisor ({value}) must be a positive number.")]
    NotPositive { name: &'static str, value: f64 },
}

/// Divisors that bring accumulated cost, time and stop count onto comparable scales before the
/// weights blend them. The defaults suit a single metro line of around two dozen stations; larger
/// networks need divisors matching their typical totals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub cost: Currency,
    pub time: Minutes,
    pub stops: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Self { cost: 100.0, time: 60.0, stops: 25.0 }
    }
}

impl Normalization {
    /// Every divisor must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), NormalizationError> {
        for (name, value) in [("cost", self.cost), ("time", self.time), ("stops", self.stops)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(NormalizationError::NotPositive { name, value });
            }
        }
        Ok(())
    }

    pub fn score(&self, weights: &WeightVector, cost: Currency, time: Minutes, stops: u32) -> Score {
        weights.cost * (cost / self.cost)
            + weights.time * (time / self.time)
            + weights.stops * (stops as f64 / self.stops)
    }
}

// Running totals for one station. Unreached stations keep the infinite score.
#[derive(Clone)]
struct Label {
    score: Score,
    cost: Currency,
    time: Minutes,
    stops: u32,
    predecessor: Option<StationIndex>,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            score: Score::INFINITY,
            cost: Currency::INFINITY,
            time: Minutes::INFINITY,
            stops: u32::MAX,
            predecessor: None,
        }
    }
}

impl Label {
    fn origin() -> Self {
        Self { score: 0., cost: 0., time: 0., stops: 0, predecessor: None }
    }

    fn is_reached(&self) -> bool { self.score.is_finite() }
}

// Min-heap entry: BinaryHeap is a max-heap, so the ordering is reversed.
// Equal scores fall back to the station index so runs are reproducible.
struct FrontierEntry {
    score: Score,
    station: StationIndex,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score).then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for FrontierEntry {}

/// Finds the best route from one origin to every reachable station under a weighted blend of
/// monetary cost, travel time and number of stops.
///
/// The optimiser only reads the network it is bound to, so one instance can serve any number of
/// queries, including from several threads at once.
pub struct RouteOptimizer<'a> {
    network: &'a Network,
    normalization: Normalization,
}

impl<'a> RouteOptimizer<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network, normalization: Normalization::default() }
    }

    pub fn with_normalization(network: &'a Network, normalization: Normalization) -> Result<Self, NormalizationError> {
        normalization.validate()?;
        Ok(Self { network, normalization })
    }

    pub fn network(&self) -> &'a Network { self.network }

    pub fn normalization(&self) -> &Normalization { &self.normalization }

    pub fn optimize_with(&self, origin: &str, w_cost: f64, w_time: f64, w_stops: f64) -> Result<Routes<'a>, RouteError> {
        self.optimize(origin, WeightVector::new(w_cost, w_time, w_stops))
    }

    /// Runs the weighted relaxation from `origin`.
    ///
    /// Weights are used as given. Checking that they sum to 1.0 is left to whoever collected them
    /// (see [`WeightVector::validate`]).
    pub fn optimize(&self, origin: &str, weights: WeightVector) -> Result<Routes<'a>, RouteError> {
        let start = self
            .network
            .get_station_idx(origin)
            .ok_or_else(|| RouteError::UnknownStation(origin.to_owned()))?;

        let labels = self.relax(start, &weights);

        let mut routes = HashMap::new();
        for (station, label) in labels.iter().enumerate() {
            let station = station as StationIndex;
            if station == start || !label.is_reached() {
                continue;
            }
            let Some(path) = self.reconstruct_path(&labels, start, station) else {
                log::warn!(
                    "Predecessors of {} do not lead back to {origin}; treating it as unreachable.",
                    self.network.get_station_name(station)
                );
                continue;
            };
            let destination = self.network.get_station_name(station);
            routes.insert(destination, RouteResult {
                destination,
                path,
                total_cost: utils::round_to(label.cost, 2),
                total_time: utils::round_to(label.time, 2),
                total_stops: label.stops,
                composite_score: utils::round_to(label.score, 4),
            });
        }

        log::debug!(
            "Optimised from {origin} (cost {}, time {}, stops {}): {} of {} stations reachable.",
            weights.cost,
            weights.time,
            weights.stops,
            routes.len(),
            self.network.num_stations().saturating_sub(1)
        );
        Ok(routes)
    }

    // Dijkstra over the composite score with lazy deletion: a station may sit in the frontier
    // several times, only its first extraction counts.
    fn relax(&self, start: StationIndex, weights: &WeightVector) -> Vec<Label> {
        let num_stations = self.network.num_stations();
        let mut labels = vec![Label::default(); num_stations];
        let mut settled = vec![false; num_stations];
        labels[start as usize] = Label::origin();

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry { score: 0., station: start });

        while let Some(FrontierEntry { station, .. }) = frontier.pop() {
            let current = station as usize;
            if settled[current] {
                continue;
            }
            settled[current] = true;

            let (cost, time, stops) = (labels[current].cost, labels[current].time, labels[current].stops);
            for connection in self.network.get_connections(station) {
                let neighbour = connection.destination as usize;
                if settled[neighbour] {
                    continue;
                }

                let new_cost = cost + connection.cost;
                let new_time = time + connection.travel_time;
                let new_stops = stops + 1;
                let new_score = self.normalization.score(weights, new_cost, new_time, new_stops);

                if new_score < labels[neighbour].score {
                    labels[neighbour] = Label {
                        score: new_score,
                        cost: new_cost,
                        time: new_time,
                        stops: new_stops,
                        predecessor: Some(station),
                    };
                    frontier.push(FrontierEntry { score: new_score, station: connection.destination });
                }
            }
        }

        labels
    }

    fn reconstruct_path(&self, labels: &[Label], start: StationIndex, end: StationIndex) -> Option<Vec<&'a str>> {
        let mut path = vec![self.network.get_station_name(end)];
        let mut current = end;
        // A path never visits more stations than exist.
        for _ in 0..labels.len() {
            if current == start {
                path.reverse();
                return Some(path);
            }
            current = labels[current as usize].predecessor?;
            path.push(self.network.get_station_name(current));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::weights::{COST_FOCUS, DEFAULT_WEIGHTS, FEWER_STOPS, TIME_FOCUS};

    // Two ways from A to D: three cheap slow hops, or one expensive fast hop.
    fn two_routes_network() -> Network {
        let mut network = Network::new();
        network.add_bidirectional("A", "B", 10.0, 1.0, 1.0).unwrap();
        network.add_bidirectional("B", "C", 10.0, 1.0, 1.0).unwrap();
        network.add_bidirectional("C", "D", 10.0, 1.0, 1.0).unwrap();
        network.add_bidirectional("A", "D", 5.0, 3.0, 50.0).unwrap();
        network
    }

    #[test]
    fn test_unknown_origin() {
        let network = two_routes_network();
        let optimizer = RouteOptimizer::new(&network);
        let err = optimizer.optimize_with("NotAStation", 0.3, 0.4, 0.3).unwrap_err();
        assert_eq!(err, RouteError::UnknownStation("NotAStation".to_string()));
        assert_eq!(err.to_string(), "Station 'NotAStation' not found in the network.");
    }

    #[test]
    fn test_origin_excluded_from_results() {
        let network = two_routes_network();
        let routes = RouteOptimizer::new(&network).optimize("A", DEFAULT_WEIGHTS).unwrap();
        assert_eq!(routes.len(), 3);
        assert!(!routes.contains_key("A"));
    }

    #[test]
    fn test_cost_weight_prefers_cheap_route() {
        let network = two_routes_network();
        let optimizer = RouteOptimizer::new(&network);

        let routes = optimizer.optimize("A", COST_FOCUS).unwrap();
        assert_eq!(routes["D"].path, vec!["A", "B", "C", "D"]);
        assert_eq!(routes["D"].total_cost, 3.0);
        assert_eq!(routes["D"].total_time, 30.0);

        let routes = optimizer.optimize_with("A", 1.0, 0.0, 0.0).unwrap();
        assert_eq!(routes["D"].path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_time_and_stops_weights_prefer_fast_route() {
        let network = two_routes_network();
        let optimizer = RouteOptimizer::new(&network);

        for weights in [TIME_FOCUS, FEWER_STOPS, WeightVector::new(0.0, 1.0, 0.0), WeightVector::new(0.0, 0.0, 1.0)] {
            let routes = optimizer.optimize("A", weights).unwrap();
            assert_eq!(routes["D"].path, vec!["A", "D"], "{weights:?}");
            assert_eq!(routes["D"].total_cost, 50.0);
            assert_eq!(routes["D"].total_stops, 1);
        }
    }

    #[test]
    fn test_composite_score() {
        let network = two_routes_network();
        let routes = RouteOptimizer::new(&network).optimize("A", DEFAULT_WEIGHTS).unwrap();
        // One hop to B: 0.3 * 1/100 + 0.4 * 10/60 + 0.3 * 1/25
        assert_relative_eq!(routes["B"].composite_score, 0.0817, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_normalization() {
        let network = two_routes_network();
        // Make cost dominate even with a time-heavy weighting.
        let normalization = Normalization { cost: 1.0, ..Default::default() };
        let optimizer = RouteOptimizer::with_normalization(&network, normalization).unwrap();
        let routes = optimizer.optimize("A", TIME_FOCUS).unwrap();
        assert_eq!(routes["D"].path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_zero_or_negative_divisor_rejected() {
        let mut network = Network::new();
        network.add_connection("A", "B", 1.0, 1.0, 0.0).unwrap();

        let zero_cost = Normalization { cost: 0.0, ..Default::default() };
        assert_eq!(
            RouteOptimizer::with_normalization(&network, zero_cost).err(),
            Some(NormalizationError::NotPositive { name: "cost", value: 0.0 })
        );
        let negative_time = Normalization { time: -60.0, ..Default::default() };
        assert_eq!(
            negative_time.validate(),
            Err(NormalizationError::NotPositive { name: "time", value: -60.0 })
        );
        let infinite_stops = Normalization { stops: f64::INFINITY, ..Default::default() };
        assert!(infinite_stops.validate().is_err());
        assert!(Normalization { stops: f64::NAN, ..Default::default() }.validate().is_err());

        // Accepted divisors keep a free connection reachable.
        let optimizer = RouteOptimizer::with_normalization(&network, Normalization::default()).unwrap();
        let routes = optimizer.optimize("A", DEFAULT_WEIGHTS).unwrap();
        assert_eq!(routes["B"].path, vec!["A", "B"]);
        assert_eq!(routes["B"].total_cost, 0.0);
    }

    #[test]
    fn test_unreachable_stations_absent() {
        let mut network = two_routes_network();
        network.add_connection("X", "Y", 1.0, 1.0, 1.0).unwrap();
        // Only leads into the component, never out of it.
        network.add_connection("Z", "A", 1.0, 1.0, 1.0).unwrap();
        let routes = RouteOptimizer::new(&network).optimize("A", DEFAULT_WEIGHTS).unwrap();
        for station in ["X", "Y", "Z"] {
            assert!(!routes.contains_key(station));
        }

        let routes = RouteOptimizer::new(&network).optimize("Y", DEFAULT_WEIGHTS).unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_parallel_connection_lower_score_wins() {
        let mut network = Network::new();
        network.add_connection("A", "B", 2.0, 1.0, 9.0).unwrap();
        network.add_connection("A", "B", 2.0, 1.0, 4.0).unwrap();
        let routes = RouteOptimizer::new(&network).optimize("A", DEFAULT_WEIGHTS).unwrap();
        assert_eq!(routes["B"].total_cost, 4.0);
    }

    #[test]
    fn test_weights_not_renormalised() {
        let network = two_routes_network();
        let optimizer = RouteOptimizer::new(&network);
        let unit = optimizer.optimize("A", DEFAULT_WEIGHTS).unwrap();
        let doubled = optimizer.optimize_with("A", 0.6, 0.8, 0.6).unwrap();
        assert_relative_eq!(doubled["B"].composite_score, 2. * unit["B"].composite_score, epsilon = 1e-3);
        assert_eq!(doubled["B"].path, unit["B"].path);
    }

    #[test]
    fn test_display_rounding() {
        let mut network = Network::new();
        network.add_connection("A", "B", 1.0 / 3.0, 1.0, 10.0 / 3.0).unwrap();
        let routes = RouteOptimizer::new(&network).optimize("A", DEFAULT_WEIGHTS).unwrap();
        assert_eq!(routes["B"].total_cost, 3.33);
        assert_eq!(routes["B"].total_time, 0.33);
        // 0.3 * 0.0333.. + 0.4 * 0.00555.. + 0.3 * 0.04 = 0.024222..
        assert_eq!(routes["B"].composite_score, 0.0242);
    }

    #[test]
    fn test_reconstruct_path_rejects_broken_chain() {
        let network = two_routes_network();
        let optimizer = RouteOptimizer::new(&network);
        let mut labels = vec![Label::default(); network.num_stations()];
        labels[0] = Label::origin();
        // B points at C, C points at B: a cycle that never reaches A.
        labels[1].predecessor = Some(2);
        labels[2].predecessor = Some(1);
        assert!(optimizer.reconstruct_path(&labels, 0, 1).is_none());
        labels[3].predecessor = None;
        assert!(optimizer.reconstruct_path(&labels, 0, 3).is_none());
    }

    #[test]
    fn test_frontier_pops_lowest_score_first() {
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry { score: 0.5, station: 1 });
        frontier.push(FrontierEntry { score: 0.1, station: 3 });
        frontier.push(FrontierEntry { score: 0.1, station: 2 });
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|entry| entry.station)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
