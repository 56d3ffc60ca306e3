// core/src/metrics.rs
use chrono::Duration;

use crate::duration::{hours, minutes};
use crate::error::CalculationError;
use crate::models::Activity;

/// Gjennomsnittlig skrittlengde (m) for dagsrapporten.
pub const FIXED_STEP_LENGTH_M: f64 = 0.65;
/// Skrittlengde = høyde * koeffisient.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Gange forbrenner halvparten av løpeformelen.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Hvordan lengden på ett skritt bestemmes.
///
/// Dagsrapporten bruker fast lengde, treningsrapporten regner ut fra høyden.
/// De to holdes bevisst adskilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepLength {
    /// Fast lengde i meter, uavhengig av høyde.
    Fixed(f64),
    /// Høyde (m) ganger koeffisient.
    HeightBased(f64),
}

impl StepLength {
    pub const FIXED: StepLength = StepLength::Fixed(FIXED_STEP_LENGTH_M);
    pub const HEIGHT_BASED: StepLength = StepLength::HeightBased(STEP_LENGTH_COEFFICIENT);

    #[inline]
    pub fn meters(self, height_m: f64) -> f64 {
        match self {
            StepLength::Fixed(m) => m,
            StepLength::HeightBased(k) => height_m * k,
        }
    }
}

/// Distanse i km.
#[inline]
pub fn distance(steps: u64, height_m: f64, step_length: StepLength) -> f64 {
    steps as f64 * step_length.meters(height_m) / M_IN_KM
}

/// Snittfart (km/t) med høydebasert skrittlengde. 0 når varigheten ikke er positiv.
pub fn mean_speed(steps: u64, height_m: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() {
        return 0.0;
    }
    let h = hours(&duration);
    if h == 0.0 {
        return 0.0;
    }
    distance(steps, height_m, StepLength::HEIGHT_BASED) / h
}

fn validate_inputs(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, CalculationError> {
    if steps == 0 {
        return Err(CalculationError::InvalidInput("количество шагов"));
    }
    // !(x > 0) fanger også NaN
    if !(weight_kg > 0.0) {
        return Err(CalculationError::InvalidInput("вес"));
    }
    if !(height_m > 0.0) {
        return Err(CalculationError::InvalidInput("рост"));
    }
    if duration <= Duration::zero() {
        return Err(CalculationError::InvalidInput("продолжительность"));
    }
    let speed = mean_speed(steps, height_m, duration);
    if speed == 0.0 {
        return Err(CalculationError::ZeroSpeed);
    }
    Ok(speed)
}

/// Kalorier for løping: vekt * fart * minutter / 60.
pub fn running_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, CalculationError> {
    let speed = validate_inputs(steps, weight_kg, height_m, duration)?;
    Ok(weight_kg * speed * minutes(&duration) / MIN_IN_H)
}

/// Kalorier for gange: løpeformelen ganget med gangkoeffisienten.
pub fn walking_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, CalculationError> {
    let speed = validate_inputs(steps, weight_kg, height_m, duration)?;
    Ok(weight_kg * speed * minutes(&duration) / MIN_IN_H * WALKING_CALORIES_COEFFICIENT)
}

pub fn spent_calories(
    activity: Activity,
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> Result<f64, CalculationError> {
    match activity {
        Activity::Running => running_spent_calories(steps, weight_kg, height_m, duration),
        Activity::Walking => walking_spent_calories(steps, weight_kg, height_m, duration),
    }
}
