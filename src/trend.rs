use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

use crate::error::{Result, TrendError};
use crate::models::DayStress;
use crate::zones::{TrainingZone, ZoneThresholds};

/// Number of days contributing to the rolling stress window
pub const ROLLING_WINDOW_DAYS: usize = 7;

/// Smoothing parameters for the fitness/fatigue exponential averages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// CTL time constant in days (default: 42)
    pub ctl_time_constant: u16,

    /// ATL time constant in days (default: 7)
    pub atl_time_constant: u16,

    /// TSB bounds separating the training zones
    pub zones: ZoneThresholds,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        SmoothingConfig {
            ctl_time_constant: 42,
            atl_time_constant: 7,
            zones: ZoneThresholds::default(),
        }
    }
}

impl SmoothingConfig {
    /// Reject time constants that would make the smoothing factor undefined
    pub fn validate(&self) -> Result<()> {
        if self.ctl_time_constant == 0 {
            return Err(TrendError::InvalidConfig {
                parameter: "ctl_time_constant",
                value: self.ctl_time_constant.to_string(),
            });
        }
        if self.atl_time_constant == 0 {
            return Err(TrendError::InvalidConfig {
                parameter: "atl_time_constant",
                value: self.atl_time_constant.to_string(),
            });
        }
        self.zones.validate()
    }
}

/// A day's fitness trend: the raw stress inputs plus the derived rolling state
///
/// Built once per day by folding the previous day's record with the current
/// day's [`DayStress`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayFitnessTrend {
    /// The raw stress inputs this record derives from
    pub day: DayStress,

    /// Windowed sum of the most recent 7 days' final stress scores
    pub rolling_stress: Decimal,

    /// Chronic training load ("fitness")
    pub ctl: Decimal,

    /// Acute training load ("fatigue")
    pub atl: Decimal,

    /// Training stress balance ("form"), from the previous day's CTL/ATL
    pub tsb: Decimal,

    /// Previous day's CTL, absent on the first record
    pub prev_ctl: Option<Decimal>,

    /// Previous day's ATL, absent on the first record
    pub prev_atl: Option<Decimal>,

    /// Previous day's TSB, absent on the first record
    pub prev_tsb: Option<Decimal>,

    /// Zone classified from this record's TSB
    pub training_zone: TrainingZone,

    /// Display label of the zone, fixed at construction
    pub training_zone_label: String,
}

impl DayFitnessTrend {
    /// Date of the underlying training day
    pub fn date(&self) -> NaiveDate {
        self.day.date
    }
}

/// Folds daily stress inputs into fitness trend records
#[derive(Debug)]
pub struct TrendCalculator {
    config: SmoothingConfig,
    ctl_factor: Decimal,
    atl_factor: Decimal,
}

impl TrendCalculator {
    /// Calculator with the standard 42/7-day constants
    pub fn new() -> Self {
        Self::from_validated(SmoothingConfig::default())
    }

    /// Calculator with custom smoothing parameters
    pub fn with_config(config: SmoothingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: SmoothingConfig) -> Self {
        let ctl_factor = smoothing_factor(config.ctl_time_constant);
        let atl_factor = smoothing_factor(config.atl_time_constant);
        TrendCalculator {
            config,
            ctl_factor,
            atl_factor,
        }
    }

    /// Build one day's trend record from the previous day's record, the
    /// day's raw stress inputs, and the precomputed rolling stress.
    ///
    /// CTL/ATL are smoothed against the previous day:
    /// `ctl = prev_ctl + (stress - prev_ctl) * (1 - exp(-1/ctl_constant))`,
    /// and analogously for ATL. The first record seeds both from the day's
    /// final stress score. TSB is the previous day's `ctl - atl`, so a
    /// day's form reflects the load accumulated before its session.
    pub fn build(
        &self,
        previous: Option<&DayFitnessTrend>,
        today: &DayStress,
        rolling_stress: Decimal,
    ) -> Result<DayFitnessTrend> {
        if let Some(prev) = previous {
            if today.date <= prev.date() {
                return Err(TrendError::NonMonotonicDate {
                    previous: prev.date(),
                    current: today.date,
                });
            }
        }
        validate_scores(today)?;

        let stress = today.final_stress_score;

        let (ctl, atl, tsb, prev_ctl, prev_atl, prev_tsb) = match previous {
            Some(prev) => {
                let ctl = prev.ctl + (stress - prev.ctl) * self.ctl_factor;
                let atl = prev.atl + (stress - prev.atl) * self.atl_factor;
                let tsb = prev.ctl - prev.atl;
                (ctl, atl, tsb, Some(prev.ctl), Some(prev.atl), Some(prev.tsb))
            }
            None => (stress, stress, Decimal::ZERO, None, None, None),
        };

        let training_zone = self.config.zones.classify(tsb);

        Ok(DayFitnessTrend {
            day: today.clone(),
            rolling_stress,
            ctl,
            atl,
            tsb,
            prev_ctl,
            prev_atl,
            prev_tsb,
            training_zone,
            training_zone_label: training_zone.label().to_string(),
        })
    }

    /// Fold a chronologically ordered day sequence into trend records,
    /// maintaining the 7-day rolling stress window along the way
    pub fn compute_series(&self, days: &[DayStress]) -> Result<Vec<DayFitnessTrend>> {
        let mut series: Vec<DayFitnessTrend> = Vec::with_capacity(days.len());
        let mut window: VecDeque<Decimal> = VecDeque::with_capacity(ROLLING_WINDOW_DAYS);
        let mut rolling = Decimal::ZERO;

        for day in days {
            if window.len() == ROLLING_WINDOW_DAYS {
                if let Some(oldest) = window.pop_front() {
                    rolling -= oldest;
                }
            }
            window.push_back(day.final_stress_score);
            rolling += day.final_stress_score;

            let record = self.build(series.last(), day, rolling)?;
            series.push(record);
        }

        debug!(days = series.len(), "computed fitness trend series");
        Ok(series)
    }

    /// The smoothing parameters this calculator was built with
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }
}

impl Default for TrendCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Weight given to today's stress in the exponential average: 1 - e^(-1/tc)
fn smoothing_factor(time_constant: u16) -> Decimal {
    let factor = 1.0 - (-1.0 / f64::from(time_constant)).exp();
    Decimal::from_f64(factor).unwrap()
}

fn validate_scores(day: &DayStress) -> Result<()> {
    let scores = [
        ("heart_rate_stress_score", day.heart_rate_stress_score),
        ("training_impulse_score", day.training_impulse_score),
        ("power_stress_score", day.power_stress_score),
        ("running_stress_score", day.running_stress_score),
        ("swim_stress_score", day.swim_stress_score),
        ("final_stress_score", Some(day.final_stress_score)),
    ];

    for (field, score) in scores {
        if let Some(value) = score {
            if value < Decimal::ZERO {
                return Err(TrendError::NegativeStress {
                    field,
                    date: day.date,
                    value,
                });
            }
        }
    }
    Ok(())
}
