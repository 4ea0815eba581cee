//! The Kochi Metro Blue Line, used as the reference network.

use crate::network::{Network, NetworkError};
use crate::table::{LineTable, NetworkTable, SegmentOverride};

pub const LINE_NAME: &str = "Blue Line";

pub const STATIONS: [&str; 23] = [
    "Aluva", "Pulinchodu", "Companypady", "Ambattukavu", "Muttom",
    "Kalamassery", "Cusat", "Pathadipalam", "Edapally", "Changampuzha Park",
    "Palarivattom", "J.L.N Stadium", "Kaloor", "Lissie", "M.G Road",
    "Maharajas", "Ernakulam South", "Kadavanthra", "Elamkulam",
    "Vyttila", "Thaikoodam", "Petta", "Thripunithura",
];

const HOP_TIME: f64 = 2.5;
const HOP_DISTANCE: f64 = 1.2;
const HOP_COST: f64 = 5.0;

// (from, to, travel time, distance)
const SEGMENT_OVERRIDES: [(&str, &str, Option<f64>, Option<f64>); 4] = [
    ("Aluva", "Pulinchodu", Some(3.0), Some(1.8)),
    ("Edapally", "Changampuzha Park", Some(2.0), None),
    ("M.G Road", "Maharajas", Some(1.5), Some(0.8)),
    ("Vyttila", "Thaikoodam", Some(3.5), Some(2.1)),
];

const ZONES: [(&str, &str); 10] = [
    ("Aluva", "Zone 3"),
    ("Pulinchodu", "Zone 3"),
    ("Companypady", "Zone 3"),
    ("Thaikoodam", "Zone 3"),
    ("Petta", "Zone 3"),
    ("Thripunithura", "Zone 3"),
    ("Lissie", "Zone 1"),
    ("M.G Road", "Zone 1"),
    ("Maharajas", "Zone 1"),
    ("Ernakulam South", "Zone 1"),
];

pub fn blue_line_table() -> NetworkTable {
    let line = LineTable {
        name: LINE_NAME.to_string(),
        stations: STATIONS.iter().map(|s| s.to_string()).collect(),
        default_travel_time: HOP_TIME,
        default_distance: HOP_DISTANCE,
        default_cost: HOP_COST,
        default_zone: Some("Zone 2".to_string()),
        zones: ZONES.iter().map(|&(station, zone)| (station.to_string(), zone.to_string())).collect(),
        overrides: SEGMENT_OVERRIDES
            .iter()
            .map(|&(from, to, travel_time, distance)| SegmentOverride {
                from: from.to_string(),
                to: to.to_string(),
                travel_time,
                distance,
                cost: None,
            })
            .collect(),
    };
    NetworkTable { lines: vec![line] }
}

pub fn build_network() -> Result<Network, NetworkError> {
    Network::from_table(&blue_line_table())
}
