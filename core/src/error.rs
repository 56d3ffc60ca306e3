// core/src/error.rs
use thiserror::Error;

use crate::duration::DurationError;

/// Feil fra parsing av en rå post ("steg,aktivitet,varighet").
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("неверный формат данных: ожидалось полей {expected}, получено {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("ошибка парсинга шагов: {0:?}")]
    InvalidStepCount(String),

    #[error("ошибка парсинга времени {input:?}: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: DurationError,
    },

    #[error("неизвестный тип тренировки: {0:?}")]
    UnknownActivity(String),
}

/// Feil fra beregningene (distanse/fart/kalorier).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Ugyldig enkeltverdi; navnet på feltet følger med.
    #[error("{0} должно быть положительным")]
    InvalidInput(&'static str),

    #[error("некорректный профиль: вес {weight_kg} кг, рост {height_m} м")]
    InvalidProfile { weight_kg: f64, height_m: f64 },

    #[error("невозможно вычислить скорость")]
    ZeroSpeed,
}

/// Feil ved lasting av profil fra disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать профиль {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("некорректный JSON профиля в `{path}`: {message}")]
    Json { path: String, message: String },
}

/// Samlet feiltype for rapport-inngangene.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TrackerError {
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            TrackerError::Parse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_calculation(&self) -> Option<&CalculationError> {
        match self {
            TrackerError::Calculation(e) => Some(e),
            _ => None,
        }
    }
}
