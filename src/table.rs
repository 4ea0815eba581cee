//! Declarative network descriptions.
//!
//! A [`NetworkTable`] lists lines as ordered station sequences with default per-hop attributes and
//! per-segment overrides. Consecutive stations are joined in both directions, so alternate
//! networks can be supplied as data (for example a JSON file) without touching the optimiser.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::network::{Currency, Kilometres, Minutes, Network, NetworkError};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkTable {
    pub lines: Vec<LineTable>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineTable {
    pub name: String,
    pub stations: Vec<String>,
    pub default_travel_time: Minutes,
    pub default_distance: Kilometres,
    pub default_cost: Currency,
    #[serde(default)]
    pub default_zone: Option<String>,
    #[serde(default)]
    pub zones: HashMap<String, String>,
    #[serde(default)]
    pub overrides: Vec<SegmentOverride>,
}

/// Replaces some attributes of one segment. Applies to both orientations of the segment.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmentOverride {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub travel_time: Option<Minutes>,
    #[serde(default)]
    pub distance: Option<Kilometres>,
    #[serde(default)]
    pub cost: Option<Currency>,
}

impl SegmentOverride {
    fn matches(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl LineTable {
    // The first override naming the segment wins.
    fn segment_attributes(&self, a: &str, b: &str) -> (Minutes, Kilometres, Currency) {
        let found = self.overrides.iter().find(|o| o.matches(a, b));
        (
            found.and_then(|o| o.travel_time).unwrap_or(self.default_travel_time),
            found.and_then(|o| o.distance).unwrap_or(self.default_distance),
            found.and_then(|o| o.cost).unwrap_or(self.default_cost),
        )
    }

    fn validate(&self) -> Result<(), NetworkError> {
        if self.stations.len() < 2 {
            return Err(NetworkError::EmptyLine(self.name.clone()));
        }
        for segment in &self.overrides {
            let on_line = self.stations.windows(2).any(|pair| segment.matches(&pair[0], &pair[1]));
            if !on_line {
                return Err(NetworkError::UnknownOverrideSegment {
                    line: self.name.clone(),
                    from: segment.from.clone(),
                    to: segment.to.clone(),
                });
            }
        }
        Ok(())
    }
}

impl NetworkTable {
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, NetworkError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Network {
    pub fn from_table(table: &NetworkTable) -> Result<Self, NetworkError> {
        let mut network = Network::new();
        for line in &table.lines {
            line.validate()?;

            for station in &line.stations {
                network.set_station_line(station, &line.name);
                let zone = line.zones.get(station).or(line.default_zone.as_ref());
                if let Some(zone) = zone {
                    network.set_station_zone(station, zone);
                }
            }

            for pair in line.stations.windows(2) {
                let (a, b) = (pair[0].as_str(), pair[1].as_str());
                let (travel_time, distance, cost) = line.segment_attributes(a, b);
                network.add_bidirectional(a, b, travel_time, distance, cost)?;
            }
            log::debug!("Loaded line '{}' with {} stations.", line.name, line.stations.len());
        }
        Ok(network)
    }
}
