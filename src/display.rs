use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::trend::DayFitnessTrend;

/// Stateless display formatting for fitness trend records
///
/// These functions never fail: missing optional data degrades to `None`
/// or the caller-supplied default string. That is a "no value to show"
/// outcome, not an error.
pub struct TrendFormatter;

impl TrendFormatter {
    /// Fitness (CTL) floored to one decimal
    pub fn fitness(day: &DayFitnessTrend) -> Decimal {
        floor_dp1(day.ctl)
    }

    /// Fatigue (ATL) floored to one decimal
    pub fn fatigue(day: &DayFitnessTrend) -> Decimal {
        floor_dp1(day.atl)
    }

    /// Form (TSB) floored to one decimal
    pub fn form(day: &DayFitnessTrend) -> Decimal {
        floor_dp1(day.tsb)
    }

    /// Rolling 7-day stress floored to a whole number
    pub fn rolling_stress(day: &DayFitnessTrend) -> String {
        day.rolling_stress.floor().to_string()
    }

    /// Day-over-day fitness change, `None` on the first record
    pub fn delta_fitness(day: &DayFitnessTrend) -> Option<String> {
        day.prev_ctl.map(|prev| format_delta(day.ctl, prev))
    }

    /// Day-over-day fatigue change, `None` on the first record
    pub fn delta_fatigue(day: &DayFitnessTrend) -> Option<String> {
        day.prev_atl.map(|prev| format_delta(day.atl, prev))
    }

    /// Day-over-day form change, `None` on the first record
    pub fn delta_form(day: &DayFitnessTrend) -> Option<String> {
        day.prev_tsb.map(|prev| format_delta(day.tsb, prev))
    }

    /// Long date form, prefixed with "Today, " when the record is for the
    /// reference day (the local calendar day when `as_of` is `None`)
    pub fn date_label(day: &DayFitnessTrend, as_of: Option<NaiveDate>) -> String {
        let today = as_of.unwrap_or_else(|| Local::now().date_naive());
        let formatted = day.date().format("%A, %B %-d %Y");
        if day.date() == today {
            format!("Today, {formatted}")
        } else {
            formatted.to_string()
        }
    }

    /// Short date form
    pub fn short_date_label(day: &DayFitnessTrend) -> String {
        day.date().format("%a, %b %-d %Y").to_string()
    }

    /// True when at least one activity contributed to the day
    pub fn has_activities(day: &DayFitnessTrend) -> bool {
        day.day.has_activities()
    }

    /// Activity names joined with "; "
    pub fn activities(day: &DayFitnessTrend, default: Option<&str>) -> String {
        join_or_default(&day.day.activity_names, default)
    }

    /// Activity type labels joined with "; "
    pub fn activity_types(day: &DayFitnessTrend, default: Option<&str>) -> String {
        join_or_default(&day.day.activity_types, default)
    }

    /// Activity types grouped and counted, most frequent first
    ///
    /// Counts are pluralized ("2 Runs, 1 Ride"). `max_types` truncates the
    /// list of distinct types, appending "& N more" for the ones left out.
    pub fn activity_type_counts(
        day: &DayFitnessTrend,
        max_types: Option<usize>,
        default: Option<&str>,
    ) -> String {
        let types = &day.day.activity_types;
        if types.is_empty() {
            return default.unwrap_or("").to_string();
        }

        // Count per type; the stable sort keeps first-seen order for ties
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for label in types {
            match counts.iter_mut().find(|(name, _)| *name == label.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.as_str(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut result = String::new();
        for (index, (name, count)) in counts.iter().enumerate() {
            result.push_str(&count.to_string());
            result.push(' ');
            result.push_str(name);
            if *count > 1 {
                result.push('s');
            }

            if let Some(max) = max_types {
                if index + 1 == max {
                    let remaining = counts.len() - 1 - index;
                    if remaining > 0 {
                        result.push_str(&format!(" & {remaining} more"));
                    }
                    break;
                }
            }
            if index + 1 < counts.len() {
                result.push_str(", ");
            }
        }
        result
    }

    /// Display label of the day's training zone
    pub fn training_zone(day: &DayFitnessTrend) -> &str {
        &day.training_zone_label
    }

    /// One-line summary of the athlete settings backing the day's scores
    ///
    /// `None` when no snapshot is attached to the record. Each threshold
    /// only appears when the corresponding stress modality is present.
    pub fn athlete_settings(day: &DayFitnessTrend) -> Option<String> {
        let snapshot = day.day.athlete_snapshot.as_ref()?;
        let mut summary = String::new();

        if day.day.has_heart_rate_score() {
            summary.push_str(&format!("MaxHr {}bpm. ", snapshot.max_hr));
            summary.push_str(&format!("RestHr {}bpm. ", snapshot.rest_hr));

            if snapshot.lthr.is_any_set() {
                let mut lthr_parts: Vec<String> = Vec::new();
                if let Some(default) = snapshot.lthr.default {
                    lthr_parts.push(format!("D:{default}bpm"));
                }
                if let Some(cycling) = snapshot.lthr.cycling {
                    lthr_parts.push(format!("C:{cycling}bpm"));
                }
                if let Some(running) = snapshot.lthr.running {
                    lthr_parts.push(format!("R:{running}bpm"));
                }
                summary.push_str(&format!("Lthr {}. ", lthr_parts.join(", ")));
            }
        }

        if day.day.power_stress_score.is_some() {
            if let Some(ftp) = snapshot.cycling_ftp {
                summary.push_str(&format!("Cycling Ftp {ftp}w. "));
            }
        }
        if day.day.running_stress_score.is_some() {
            if let Some(ftp) = snapshot.running_ftp {
                summary.push_str(&format!("Run Ftp {ftp}s/km. "));
            }
        }
        if day.day.swim_stress_score.is_some() {
            if let Some(ftp) = snapshot.swim_ftp {
                summary.push_str(&format!("Swim Ftp {ftp}m/min. "));
            }
        }

        summary.push_str(&format!("Weight {}kg.", snapshot.weight));
        Some(summary)
    }
}

/// Floor toward negative infinity at one decimal place
fn floor_dp1(value: Decimal) -> Decimal {
    (value * dec!(10)).floor() / dec!(10)
}

/// Signed one-decimal delta between the floored current and previous values
fn format_delta(current: Decimal, previous: Decimal) -> String {
    let delta = (floor_dp1(current) - floor_dp1(previous)).normalize();
    if delta >= Decimal::ZERO {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

fn join_or_default(items: &[String], default: Option<&str>) -> String {
    if items.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        items.join("; ")
    }
}
