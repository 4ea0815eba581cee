use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// How far a weight sum may stray from 1.0 before an input collector rejects it.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Relative importance of monetary cost, travel time and number of stops.
///
/// The optimiser accepts any weights as given. A composite score is only meaningful when the three
/// weights are non-negative and sum to 1.0 (within [`WEIGHT_SUM_TOLERANCE`]); callers collecting
/// weights from a user should check this with [`WeightVector::validate`] before optimising.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub cost: f64,
    pub time: f64,
    pub stops: f64,
}

pub const DEFAULT_WEIGHTS: WeightVector = WeightVector::new(0.3, 0.4, 0.3);
pub const COST_FOCUS: WeightVector = WeightVector::new(0.6, 0.2, 0.2);
pub const TIME_FOCUS: WeightVector = WeightVector::new(0.2, 0.6, 0.2);
pub const FEWER_STOPS: WeightVector = WeightVector::new(0.2, 0.2, 0.6);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("The {name} weight is not a number.")]
    NonFinite { name: &'static str },
    #[error("The {name} weight ({value}) must not be negative.")]
    Negative { name: &'static str, value: f64 },
    #[error("Weights should sum to 1.0 (got {sum:.3}).")]
    BadSum { sum: f64 },
}

impl WeightVector {
    pub const fn new(cost: f64, time: f64, stops: f64) -> Self {
        Self { cost, time, stops }
    }

    pub fn sum(&self) -> f64 { self.cost + self.time + self.stops }

    pub fn validate(&self) -> Result<(), WeightError> {
        for (name, value) in [("cost", self.cost), ("time", self.time), ("stops", self.stops)] {
            if !value.is_finite() {
                return Err(WeightError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { name, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::BadSum { sum });
        }
        Ok(())
    }
}

impl Default for WeightVector {
    fn default() -> Self { DEFAULT_WEIGHTS }
}

/// Named weightings offered by the interactive shells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Preset {
    Balanced,
    CostFocus,
    TimeFocus,
    FewerStops,
}

impl Preset {
    pub fn weights(self) -> WeightVector {
        match self {
            Preset::Balanced => DEFAULT_WEIGHTS,
            Preset::CostFocus => COST_FOCUS,
            Preset::TimeFocus => TIME_FOCUS,
            Preset::FewerStops => FEWER_STOPS,
        }
    }
}
