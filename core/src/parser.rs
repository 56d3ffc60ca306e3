// core/src/parser.rs
use log::debug;

use crate::duration::parse_duration;
use crate::error::ParseError;
use crate::models::ActivityRecord;

/// Standard-etikett for poster uten aktivitetsfelt.
pub const DEFAULT_LABEL: &str = "walking";

const DELIMITER: char = ',';

fn parse_steps(field: &str) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidStepCount(field.to_string());
    let steps: i64 = field.parse().map_err(|_| invalid())?;
    if steps <= 0 {
        return Err(invalid());
    }
    u64::try_from(steps).map_err(|_| invalid())
}

fn parse_positive_duration(field: &str) -> Result<chrono::Duration, ParseError> {
    let duration = parse_duration(field).map_err(|source| ParseError::InvalidDuration {
        input: field.to_string(),
        source,
    })?;
    if duration <= chrono::Duration::zero() {
        return Err(ParseError::InvalidDuration {
            input: field.to_string(),
            source: crate::duration::DurationError::NotPositive,
        });
    }
    Ok(duration)
}

/// Parser "steg,varighet" (2 felt) eller "steg,aktivitet,varighet" (3 felt).
///
/// Enten en fullt validert post eller en feil, aldri halvveis.
/// Etiketten valideres ikke her; det skjer i rapport-steget.
pub fn parse_record(raw: &str, expected_fields: usize) -> Result<ActivityRecord, ParseError> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() != expected_fields || !(2..=3).contains(&expected_fields) {
        return Err(ParseError::MalformedRecord {
            expected: expected_fields,
            found: parts.len(),
        });
    }

    let steps = parse_steps(parts[0])?;
    let label = if expected_fields == 3 { parts[1] } else { DEFAULT_LABEL };
    let duration = parse_positive_duration(parts[expected_fields - 1])?;

    debug!("parsed record {raw:?}: steps={steps} label={label:?} duration={duration}");
    Ok(ActivityRecord {
        steps,
        label: label.to_string(),
        duration,
    })
}

/// "steg,varighet"
pub fn parse_package(raw: &str) -> Result<ActivityRecord, ParseError> {
    parse_record(raw, 2)
}

/// "steg,aktivitet,varighet"
pub fn parse_training(raw: &str) -> Result<ActivityRecord, ParseError> {
    parse_record(raw, 3)
}
