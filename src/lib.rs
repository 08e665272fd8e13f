// Library interface for the fitness trend core
// Derives rolling fitness/fatigue/form (CTL/ATL/TSB) series from daily
// training stress inputs and shapes them for display and charting.

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod trend;
pub mod viewable;
pub mod zones;

// Re-export commonly used types for convenience
pub use config::TrendConfig;
pub use display::TrendFormatter;
pub use error::{Result, TrendError};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::{AthleteSnapshot, DayStress, LactateThresholds};
pub use trend::{DayFitnessTrend, SmoothingConfig, TrendCalculator, ROLLING_WINDOW_DAYS};
pub use viewable::{GraphPoint, Marker, ViewableFitnessData};
pub use zones::{training_zone_base_lines, BaseLine, TrainingZone, ZoneThresholds};
