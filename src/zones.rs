use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrendError};

/// Training zone classified from a day's form (TSB) value
///
/// Ordered from deepest load to full rest: a later zone means a fresher
/// athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrainingZone {
    /// At or below the overload bound (default -30)
    Overload,
    /// Up to the optimal bound (default -10)
    Optimal,
    /// Up to the neutral bound (default 5)
    Neutral,
    /// Up to the freshness bound (default 25)
    Freshness,
    /// Above the freshness bound
    Transition,
}

impl TrainingZone {
    /// Upper TSB bound of the zone under the default thresholds,
    /// `None` for the unbounded transition zone
    pub fn upper_bound(&self) -> Option<Decimal> {
        match self {
            TrainingZone::Overload => Some(dec!(-30)),
            TrainingZone::Optimal => Some(dec!(-10)),
            TrainingZone::Neutral => Some(dec!(5)),
            TrainingZone::Freshness => Some(dec!(25)),
            TrainingZone::Transition => None,
        }
    }

    /// Title-case display label
    pub fn label(&self) -> &'static str {
        match self {
            TrainingZone::Overload => "Overload",
            TrainingZone::Optimal => "Optimal",
            TrainingZone::Neutral => "Neutral",
            TrainingZone::Freshness => "Freshness",
            TrainingZone::Transition => "Transition",
        }
    }

    /// Classify a TSB value against the default thresholds
    pub fn from_tsb(tsb: Decimal) -> Self {
        ZoneThresholds::default().classify(tsb)
    }
}

/// Upper TSB bounds separating the training zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    pub overload: Decimal,
    pub optimal: Decimal,
    pub neutral: Decimal,
    pub freshness: Decimal,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        ZoneThresholds {
            overload: dec!(-30),
            optimal: dec!(-10),
            neutral: dec!(5),
            freshness: dec!(25),
        }
    }
}

impl ZoneThresholds {
    /// Reject bounds that are not strictly ascending
    pub fn validate(&self) -> Result<()> {
        if self.overload >= self.optimal
            || self.optimal >= self.neutral
            || self.neutral >= self.freshness
        {
            return Err(TrendError::InvalidConfig {
                parameter: "zone_thresholds",
                value: format!(
                    "{}, {}, {}, {} must be ascending",
                    self.overload, self.optimal, self.neutral, self.freshness
                ),
            });
        }
        Ok(())
    }

    /// Classify a TSB value: the first zone whose upper bound is >= tsb wins
    pub fn classify(&self, tsb: Decimal) -> TrainingZone {
        if tsb <= self.overload {
            TrainingZone::Overload
        } else if tsb <= self.optimal {
            TrainingZone::Optimal
        } else if tsb <= self.neutral {
            TrainingZone::Neutral
        } else if tsb <= self.freshness {
            TrainingZone::Freshness
        } else {
            TrainingZone::Transition
        }
    }
}

/// Horizontal reference line drawn on the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseLine {
    pub value: Decimal,
    pub label: &'static str,
}

/// The fixed training zone baselines, top of chart first
pub fn training_zone_base_lines() -> [BaseLine; 4] {
    [
        BaseLine {
            value: dec!(25),
            label: "Freshness",
        },
        BaseLine {
            value: dec!(5),
            label: "Neutral",
        },
        BaseLine {
            value: dec!(-10),
            label: "Optimal",
        },
        BaseLine {
            value: dec!(-30),
            label: "Overload",
        },
    ]
}
