use std::collections::HashMap;

pub type StationIndex = u32;

// Units used for connection attributes.
pub type Minutes = f64;
pub type Kilometres = f64;
pub type Currency = f64;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Connection {from} -> {to} has a non-finite {attribute} ({value}).")]
    NonFiniteAttribute { from: String, to: String, attribute: &'static str, value: f64 },
    #[error("Line '{0}' needs at least two stations.")]
    EmptyLine(String),
    #[error("Override {from} -> {to} on line '{line}' is not a segment of that line.")]
    UnknownOverrideSegment { line: String, from: String, to: String },
    #[error("Could not read network table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse network table: {0}")]
    Json(#[from] serde_json::Error),
}

// A directed arc leaving a station.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub destination: StationIndex,
    pub travel_time: Minutes,
    pub distance: Kilometres, // Informational only, never optimised.
    pub cost: Currency,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub name: Box<str>,
    pub line: Option<Box<str>>,
    pub zone: Option<Box<str>>,
}

impl Station {
    pub fn new(name: &str) -> Self {
        Self { name: name.into(), line: None, zone: None }
    }
}

/// The station set and its weighted adjacency lists.
///
/// Stations are stored densely and addressed by [`StationIndex`]; names map to indices through
/// `station_index`. Each station owns its outgoing connections in insertion order, which keeps
/// frontier tie-breaks reproducible.
#[derive(Clone, Debug, Default)]
pub struct Network {
    pub(crate) stations: Vec<Station>,
    pub(crate) station_index: HashMap<Box<str>, StationIndex>,
    pub(crate) connections: Vec<Vec<Connection>>,
}

impl Network {
    pub fn new() -> Self { Self::default() }

    /// Registers `name` if it is not already known and returns its index.
    pub fn add_station(&mut self, name: &str) -> StationIndex {
        if let Some(&idx) = self.station_index.get(name) {
            return idx;
        }
        assert!(
            self.stations.len() < StationIndex::MAX as usize,
            "Too many stations in network (we currently use a {}-bit index for stations).",
            std::mem::size_of::<StationIndex>() * 8
        );
        let idx = self.stations.len() as StationIndex;
        self.stations.push(Station::new(name));
        self.station_index.insert(name.into(), idx);
        self.connections.push(Vec::new());
        idx
    }

    pub fn set_station_line(&mut self, name: &str, line: &str) {
        let idx = self.add_station(name) as usize;
        self.stations[idx].line = Some(line.into());
    }

    pub fn set_station_zone(&mut self, name: &str, zone: &str) {
        let idx = self.add_station(name) as usize;
        self.stations[idx].zone = Some(zone.into());
    }

    /// Appends a directed connection `from -> to`, registering either endpoint if unseen.
    /// Parallel connections between the same pair are kept; relaxation picks whichever scores lower.
    pub fn add_connection(
        &mut self,
        from: &str,
        to: &str,
        travel_time: Minutes,
        distance: Kilometres,
        cost: Currency,
    ) -> Result<(), NetworkError> {
        for (attribute, value) in [("travel time", travel_time), ("distance", distance), ("cost", cost)] {
            if !value.is_finite() {
                return Err(NetworkError::NonFiniteAttribute {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    attribute,
                    value,
                });
            }
        }

        let from_idx = self.add_station(from);
        let to_idx = self.add_station(to);
        self.connections[from_idx as usize].push(Connection {
            destination: to_idx,
            travel_time,
            distance,
            cost,
        });
        Ok(())
    }

    // Adds the symmetric pair of connections for an undirected segment.
    pub fn add_bidirectional(
        &mut self,
        a: &str,
        b: &str,
        travel_time: Minutes,
        distance: Kilometres,
        cost: Currency,
    ) -> Result<(), NetworkError> {
        self.add_connection(a, b, travel_time, distance, cost)?;
        self.add_connection(b, a, travel_time, distance, cost)
    }

    /// All station names, in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(|station| station.name.as_ref())
    }

    /// Connections leaving `name`. Unknown stations have none.
    pub fn outgoing_edges(&self, name: &str) -> &[Connection] {
        match self.get_station_idx(name) {
            Some(idx) => self.get_connections(idx),
            None => &[],
        }
    }

    pub fn contains(&self, name: &str) -> bool { self.station_index.contains_key(name) }

    pub fn get_station(&self, idx: StationIndex) -> &Station { &self.stations[idx as usize] }

    pub fn get_station_name(&self, idx: StationIndex) -> &str { &self.stations[idx as usize].name }

    pub fn get_station_idx(&self, name: &str) -> Option<StationIndex> { self.station_index.get(name).copied() }

    pub fn get_connections(&self, idx: StationIndex) -> &[Connection] { &self.connections[idx as usize] }

    pub fn num_stations(&self) -> usize { self.stations.len() }

    pub fn num_connections(&self) -> usize { self.connections.iter().map(Vec::len).sum() }

    pub fn print_stats(&self) {
        log::info!("Network has {} stations and {} connections.", self.num_stations(), self.num_connections());
    }
}
