use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::zones::{training_zone_base_lines, BaseLine};

/// A single chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

impl GraphPoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        GraphPoint { date, value }
    }
}

/// A date-anchored chart annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub date: NaiveDate,
    pub label: String,
}

/// Named point series shaped for direct consumption by a charting surface
///
/// Input series must be date-ordered and share the markers' time domain;
/// nothing is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewableFitnessData {
    pub markers: Vec<Marker>,
    pub rolling_stress_line: Vec<GraphPoint>,
    pub fatigue_line: Vec<GraphPoint>,
    pub fitness_line: Vec<GraphPoint>,
    pub form_line: Vec<GraphPoint>,
    pub preview_fatigue_line: Vec<GraphPoint>,
    pub preview_fitness_line: Vec<GraphPoint>,
    pub preview_form_line: Vec<GraphPoint>,
    pub active_line: Vec<GraphPoint>,
}

impl ViewableFitnessData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        markers: Vec<Marker>,
        rolling_stress_line: Vec<GraphPoint>,
        fatigue_line: Vec<GraphPoint>,
        fitness_line: Vec<GraphPoint>,
        form_line: Vec<GraphPoint>,
        preview_fatigue_line: Vec<GraphPoint>,
        preview_fitness_line: Vec<GraphPoint>,
        preview_form_line: Vec<GraphPoint>,
        active_line: Vec<GraphPoint>,
    ) -> Self {
        ViewableFitnessData {
            markers,
            rolling_stress_line,
            fatigue_line,
            fitness_line,
            form_line,
            preview_fatigue_line,
            preview_fitness_line,
            preview_form_line,
            active_line,
        }
    }

    /// All series for simultaneous rendering, in the fixed order:
    /// rolling-stress, fatigue, fitness, form, preview-fatigue,
    /// preview-fitness, preview-form, active
    pub fn fitness_trend_lines(&self) -> Vec<&[GraphPoint]> {
        vec![
            &self.rolling_stress_line,
            &self.fatigue_line,
            &self.fitness_line,
            &self.form_line,
            &self.preview_fatigue_line,
            &self.preview_fitness_line,
            &self.preview_form_line,
            &self.active_line,
        ]
    }

    /// The fixed training zone baselines when enabled, else empty
    pub fn base_lines(&self, zones_enabled: bool) -> Vec<BaseLine> {
        if zones_enabled {
            training_zone_base_lines().to_vec()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn points(len: u32, offset: i64) -> Vec<GraphPoint> {
        (0..len)
            .map(|i| {
                GraphPoint::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                    Decimal::from(i as i64 + offset),
                )
            })
            .collect()
    }

    fn viewable(len: u32) -> ViewableFitnessData {
        ViewableFitnessData::new(
            vec![Marker {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                label: "Race day".to_string(),
            }],
            points(len, 0),
            points(len, 10),
            points(len, 20),
            points(len, 30),
            points(len, 40),
            points(len, 50),
            points(len, 60),
            points(len, 70),
        )
    }

    #[test]
    fn test_combined_view_order_and_shape() {
        let data = viewable(5);
        let lines = data.fitness_trend_lines();

        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.len(), 5);
        }

        assert_eq!(lines[0], data.rolling_stress_line.as_slice());
        assert_eq!(lines[1], data.fatigue_line.as_slice());
        assert_eq!(lines[2], data.fitness_line.as_slice());
        assert_eq!(lines[3], data.form_line.as_slice());
        assert_eq!(lines[4], data.preview_fatigue_line.as_slice());
        assert_eq!(lines[5], data.preview_fitness_line.as_slice());
        assert_eq!(lines[6], data.preview_form_line.as_slice());
        assert_eq!(lines[7], data.active_line.as_slice());
    }

    #[test]
    fn test_base_lines_toggle_as_a_unit() {
        let data = viewable(3);

        assert!(data.base_lines(false).is_empty());

        let enabled = data.base_lines(true);
        assert_eq!(enabled.len(), 4);
        assert_eq!(enabled[0].value, dec!(25));
        assert_eq!(enabled[0].label, "Freshness");
        assert_eq!(enabled[3].value, dec!(-30));
        assert_eq!(enabled[3].label, "Overload");
    }
}
