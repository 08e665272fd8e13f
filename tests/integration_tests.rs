use chrono::NaiveDate;
use fittrend::{
    DayFitnessTrend, DayStress, GraphPoint, Marker, SmoothingConfig, TrainingZone,
    TrendCalculator, TrendFormatter, ViewableFitnessData,
};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Integration tests covering the full stress -> trend -> display -> chart flow

fn day(date: NaiveDate, stress: Decimal, activity: Option<(&str, &str)>) -> DayStress {
    let mut day = DayStress::new(date, false);
    day.final_stress_score = stress;
    if let Some((name, activity_type)) = activity {
        day.ids = vec![1];
        day.activity_names = vec![name.to_string()];
        day.activity_types = vec![activity_type.to_string()];
        day.heart_rate_stress_score = Some(stress);
    }
    day
}

fn training_week(start: NaiveDate) -> Vec<DayStress> {
    let stresses = [
        dec!(50),
        dec!(0),
        dec!(80),
        dec!(60),
        dec!(0),
        dec!(120),
        dec!(40),
        dec!(0),
        dec!(90),
        dec!(70),
        dec!(30),
        dec!(0),
        dec!(110),
        dec!(55),
    ];

    stresses
        .iter()
        .enumerate()
        .map(|(i, stress)| {
            let date = start + chrono::Days::new(i as u64);
            let activity = if stress.is_zero() {
                None
            } else {
                Some(("Workout", "Run"))
            };
            day(date, *stress, activity)
        })
        .collect()
}

#[test]
fn test_complete_trend_workflow() {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let days = training_week(start);

    let calculator = TrendCalculator::new();
    let series = calculator.compute_series(&days).unwrap();
    assert_eq!(series.len(), days.len());

    // Form always reflects the previous day's accumulated load
    for pair in series.windows(2) {
        assert_eq!(pair[1].tsb, pair[0].ctl - pair[0].atl);
        assert_eq!(pair[1].prev_ctl, Some(pair[0].ctl));
        assert_eq!(pair[1].prev_atl, Some(pair[0].atl));
    }

    // Zone classification stays consistent with the record's own TSB
    for record in &series {
        assert_eq!(record.training_zone, TrainingZone::from_tsb(record.tsb));
        assert_eq!(record.training_zone_label, record.training_zone.label());
    }

    // Deltas exist exactly when a previous record existed
    assert_eq!(TrendFormatter::delta_fitness(&series[0]), None);
    for record in &series[1..] {
        assert!(TrendFormatter::delta_fitness(record).is_some());
        assert!(TrendFormatter::delta_form(record).is_some());
    }
}

#[test]
fn test_two_day_reference_values() {
    let date1 = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let date2 = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let days = vec![day(date1, dec!(50), None), day(date2, dec!(60), None)];

    let calculator = TrendCalculator::new();
    let series = calculator.compute_series(&days).unwrap();

    // Day 1 seeds CTL/ATL from its stress score
    assert_eq!(series[0].ctl, dec!(50));
    assert_eq!(series[0].atl, dec!(50));
    assert_eq!(series[0].tsb, dec!(0));

    // Day 2 follows the exponential smoothing formulas with the 42/7 constants
    let ctl_factor = Decimal::from_f64(1.0 - (-1.0 / 42.0_f64).exp()).unwrap();
    let atl_factor = Decimal::from_f64(1.0 - (-1.0 / 7.0_f64).exp()).unwrap();
    assert_eq!(series[1].ctl, dec!(50) + (dec!(60) - dec!(50)) * ctl_factor);
    assert_eq!(series[1].atl, dec!(50) + (dec!(60) - dec!(50)) * atl_factor);
    assert_eq!(series[1].tsb, series[0].ctl - series[0].atl);
}

#[test]
fn test_unordered_sequence_rejected() {
    let date1 = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let date2 = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let days = vec![day(date1, dec!(50), None), day(date2, dec!(60), None)];

    let calculator = TrendCalculator::new();
    assert!(calculator.compute_series(&days).is_err());
}

#[test]
fn test_series_feeds_the_chart_aggregate() {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let days = training_week(start);

    let calculator = TrendCalculator::new();
    let series = calculator.compute_series(&days).unwrap();

    let line = |value: fn(&DayFitnessTrend) -> Decimal| -> Vec<GraphPoint> {
        series
            .iter()
            .map(|record| GraphPoint::new(record.date(), value(record)))
            .collect()
    };

    let markers = vec![Marker {
        date: start,
        label: "Block start".to_string(),
    }];

    let data = ViewableFitnessData::new(
        markers,
        line(|r| r.rolling_stress),
        line(|r| r.atl),
        line(|r| r.ctl),
        line(|r| r.tsb),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );

    let lines = data.fitness_trend_lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].len(), series.len());
    assert_eq!(lines[2].len(), series.len());
    assert!(lines[4].is_empty());

    // Fitness line carries the raw CTL values in date order
    assert_eq!(lines[2][0].value, series[0].ctl);
    assert_eq!(lines[2][0].date, start);
    assert!(lines[2].windows(2).all(|pair| pair[0].date < pair[1].date));

    assert_eq!(data.base_lines(true).len(), 4);
    assert!(data.base_lines(false).is_empty());
}

#[test]
fn test_preview_days_split_into_preview_lines() {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let mut days = training_week(start);

    // Mark the trailing three days as forecast
    let preview_from = days.len() - 3;
    for day in &mut days[preview_from..] {
        day.preview = true;
    }

    let calculator = TrendCalculator::new();
    let series = calculator.compute_series(&days).unwrap();

    let split = |preview: bool, value: fn(&DayFitnessTrend) -> Decimal| -> Vec<GraphPoint> {
        series
            .iter()
            .filter(|record| record.day.preview == preview)
            .map(|record| GraphPoint::new(record.date(), value(record)))
            .collect()
    };

    let data = ViewableFitnessData::new(
        Vec::new(),
        split(false, |r| r.rolling_stress),
        split(false, |r| r.atl),
        split(false, |r| r.ctl),
        split(false, |r| r.tsb),
        split(true, |r| r.atl),
        split(true, |r| r.ctl),
        split(true, |r| r.tsb),
        Vec::new(),
    );

    let lines = data.fitness_trend_lines();
    assert_eq!(lines[1].len(), preview_from);
    assert_eq!(lines[4].len(), 3);
    assert_eq!(lines[5].len(), 3);
    assert_eq!(lines[6].len(), 3);
}

#[test]
fn test_trend_record_serialization_round_trip() {
    let date1 = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let date2 = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let days = vec![
        day(date1, dec!(50), Some(("Morning Run", "Run"))),
        day(date2, dec!(60), None),
    ];

    let calculator = TrendCalculator::new();
    let series = calculator.compute_series(&days).unwrap();

    let json = serde_json::to_string(&series).unwrap();
    let restored: Vec<DayFitnessTrend> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, series);
}

#[test]
fn test_custom_constants_change_responsiveness() {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let days = training_week(start);

    let standard = TrendCalculator::new().compute_series(&days).unwrap();
    let snappy = TrendCalculator::with_config(SmoothingConfig {
        ctl_time_constant: 14,
        atl_time_constant: 3,
        ..SmoothingConfig::default()
    })
    .unwrap()
    .compute_series(&days)
    .unwrap();

    // Shorter constants track the day-to-day load more closely
    let last_stress = days.last().unwrap().final_stress_score;
    let standard_gap = (standard.last().unwrap().ctl - last_stress).abs();
    let snappy_gap = (snappy.last().unwrap().ctl - last_stress).abs();
    assert!(snappy_gap < standard_gap);
}
