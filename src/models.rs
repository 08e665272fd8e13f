use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lactate threshold heart rates, per discipline where measured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LactateThresholds {
    /// Fallback LTHR used when no sport-specific value is set
    pub default: Option<u16>,

    /// Cycling LTHR
    pub cycling: Option<u16>,

    /// Running LTHR
    pub running: Option<u16>,
}

impl LactateThresholds {
    /// True when at least one threshold has been measured
    pub fn is_any_set(&self) -> bool {
        self.default.is_some() || self.cycling.is_some() || self.running.is_some()
    }
}

/// Athlete settings in effect on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteSnapshot {
    /// Maximum heart rate in bpm
    pub max_hr: u16,

    /// Resting heart rate in bpm
    pub rest_hr: u16,

    /// Lactate threshold heart rates
    pub lthr: LactateThresholds,

    /// Cycling functional threshold power in watts
    pub cycling_ftp: Option<u16>,

    /// Running functional threshold pace in seconds per kilometer
    pub running_ftp: Option<u16>,

    /// Swim functional threshold in meters per minute
    pub swim_ftp: Option<u16>,

    /// Body weight in kilograms
    pub weight: Decimal,
}

/// A single day's raw training stress inputs
///
/// Immutable once constructed for a given day; the trend builder enriches
/// it into a [`DayFitnessTrend`](crate::trend::DayFitnessTrend) without
/// mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStress {
    /// Date of the training day
    pub date: NaiveDate,

    /// True for forecast days rendered as the preview chart variants
    pub preview: bool,

    /// Identifiers of the activities contributing to this day
    pub ids: Vec<u64>,

    /// Names of the contributing activities
    pub activity_names: Vec<String>,

    /// Type labels of the contributing activities ("Run", "Ride", ...)
    pub activity_types: Vec<String>,

    /// Heart-rate based stress score (HRSS)
    pub heart_rate_stress_score: Option<Decimal>,

    /// Training impulse score (TRIMP)
    pub training_impulse_score: Option<Decimal>,

    /// Power based stress score (PSS)
    pub power_stress_score: Option<Decimal>,

    /// Running stress score (RSS)
    pub running_stress_score: Option<Decimal>,

    /// Swim stress score (SSS)
    pub swim_stress_score: Option<Decimal>,

    /// Combined stress score for the day, zero on rest days
    pub final_stress_score: Decimal,

    /// Athlete settings valid on this day, when known
    pub athlete_snapshot: Option<AthleteSnapshot>,
}

impl DayStress {
    /// Create an empty (rest) day
    pub fn new(date: NaiveDate, preview: bool) -> Self {
        DayStress {
            date,
            preview,
            ids: Vec::new(),
            activity_names: Vec::new(),
            activity_types: Vec::new(),
            heart_rate_stress_score: None,
            training_impulse_score: None,
            power_stress_score: None,
            running_stress_score: None,
            swim_stress_score: None,
            final_stress_score: Decimal::ZERO,
            athlete_snapshot: None,
        }
    }

    /// True when at least one activity contributed to this day
    pub fn has_activities(&self) -> bool {
        !self.activity_names.is_empty()
    }

    /// True when any heart-rate based score is present
    pub fn has_heart_rate_score(&self) -> bool {
        self.heart_rate_stress_score.is_some() || self.training_impulse_score.is_some()
    }
}
