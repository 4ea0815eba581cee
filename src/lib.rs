pub mod network;

pub use network::{Connection, Network, NetworkError, Station, StationIndex};

pub mod table;

pub use table::{LineTable, NetworkTable, SegmentOverride};

pub mod weights;

pub use weights::{Preset, WeightError, WeightVector, DEFAULT_WEIGHTS};

pub mod optimizer;

pub use optimizer::{Normalization, NormalizationError, RouteError, RouteOptimizer};

pub mod route;

pub use route::{rank, RouteResult, RouteTable, Routes};

pub mod kochi;

pub mod utils;
