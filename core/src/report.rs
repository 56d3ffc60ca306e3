// core/src/report.rs
use log::{debug, error};

use crate::duration::hours;
use crate::error::TrackerError;
use crate::metrics::{distance, mean_speed, spent_calories, walking_spent_calories, StepLength};
use crate::models::{Activity, PhysicalProfile};
use crate::parser::{parse_package, parse_training};
use crate::types::{ActivityReport, DailyReport};

/// Dagsrapport for "steg,varighet".
///
/// Distansen bruker fast skrittlengde (0.65 m) uansett høyde; kaloriene
/// regnes som gange med høydebasert fart.
pub fn daily_step_report(
    record: &str,
    weight_kg: f64,
    height_m: f64,
) -> Result<DailyReport, TrackerError> {
    let rec = parse_package(record)?;
    PhysicalProfile::new(weight_kg, height_m).validate()?;

    let distance_km = distance(rec.steps, height_m, StepLength::FIXED);
    let calories_kcal = walking_spent_calories(rec.steps, weight_kg, height_m, rec.duration)?;

    debug!("daily report: steps={} dist={distance_km:.3} kcal={calories_kcal:.3}", rec.steps);
    Ok(DailyReport { steps: rec.steps, distance_km, calories_kcal })
}

/// Ytterste grense for dagsrapporten: feil logges og gir tom streng.
pub fn daily_step_report_text(record: &str, weight_kg: f64, height_m: f64) -> String {
    match daily_step_report(record, weight_kg, height_m) {
        Ok(r) => r.to_string(),
        Err(e) => {
            error!("{e}");
            String::new()
        }
    }
}

/// Treningsrapport for "steg,aktivitet,varighet".
pub fn training_report(
    record: &str,
    weight_kg: f64,
    height_m: f64,
) -> Result<ActivityReport, TrackerError> {
    let rec = parse_training(record)?;
    let activity = Activity::from_label(&rec.label)?;
    PhysicalProfile::new(weight_kg, height_m).validate()?;

    let calories_kcal = spent_calories(activity, rec.steps, weight_kg, height_m, rec.duration)?;
    let report = ActivityReport {
        activity,
        label: rec.label,
        duration_hours: hours(&rec.duration),
        distance_km: distance(rec.steps, height_m, StepLength::HEIGHT_BASED),
        speed_kmh: mean_speed(rec.steps, height_m, rec.duration),
        calories_kcal,
    };
    debug!("training report: {report:?}");
    Ok(report)
}

pub fn training_report_text(
    record: &str,
    weight_kg: f64,
    height_m: f64,
) -> Result<String, TrackerError> {
    training_report(record, weight_kg, height_m)
        .map(|r| r.to_string())
        .inspect_err(|e| error!("{e}"))
}
