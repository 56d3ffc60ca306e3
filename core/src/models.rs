use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, ParseError};

/// Aktivitetstypen vi kan beregne kalorier for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// Normaliserer etikett fra posten (store/små bokstaver ignoreres).
    pub fn from_label(label: &str) -> Result<Self, ParseError> {
        match label.to_lowercase().as_str() {
            "ходьба" | "walking" => Ok(Activity::Walking),
            "бег" | "running" => Ok(Activity::Running),
            _ => Err(ParseError::UnknownActivity(label.to_string())),
        }
    }
}

/// Én parset post. Konstrueres kun av parseren, så steg og varighet er > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: u64,
    pub label: String,     // ordrett fra posten
    pub duration: Duration,
}

/// Vekt og høyde, levert utenfra per kall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self { weight_kg, height_m }
    }

    pub fn validate(&self) -> Result<(), CalculationError> {
        let ok = |x: f64| x.is_finite() && x > 0.0;
        if ok(self.weight_kg) && ok(self.height_m) {
            Ok(())
        } else {
            Err(CalculationError::InvalidProfile {
                weight_kg: self.weight_kg,
                height_m: self.height_m,
            })
        }
    }
}
