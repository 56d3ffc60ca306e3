use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::Activity;

/// Tall i JSON-rapporten avrundes til hundredeler, som i teksten.
fn two_dp<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((x * 100.0).round() / 100.0)
}

/// Resultat av en treningspost ("steg,aktivitet,varighet").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    pub activity: Activity,
    pub label: String, // som skrevet i posten
    #[serde(serialize_with = "two_dp")]
    pub duration_hours: f64,
    #[serde(serialize_with = "two_dp")]
    pub distance_km: f64,
    #[serde(serialize_with = "two_dp")]
    pub speed_kmh: f64,
    #[serde(serialize_with = "two_dp")]
    pub calories_kcal: f64,
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.label)?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
    }
}

/// Resultat av en dagspost ("steg,varighet").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub steps: u64,
    #[serde(serialize_with = "two_dp")]
    pub distance_km: f64,
    #[serde(serialize_with = "two_dp")]
    pub calories_kcal: f64,
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories_kcal)
    }
}
