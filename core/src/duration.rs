// core/src/duration.rs
//! Varighetsgrammatikk for poster: `[+-]? (tall enhet)+` eller bare `0`.
//!
//! Tall er sifre med valgfri brøkdel (`1.5`, `.5`, `1.`). Enheter:
//! `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`. Eksempler: `45m`, `1h30m`,
//! `1.5h`, `90s`.
use chrono::Duration;
use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Største størrelse vi tåler før fortegn (|i64::MIN|).
const MAX_MAGNITUDE: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("пустая строка длительности")]
    Empty,
    #[error("ожидалось число в позиции {0}")]
    ExpectedNumber(usize),
    #[error("не указана единица измерения после числа")]
    MissingUnit,
    #[error("неизвестная единица измерения {0:?}")]
    UnknownUnit(String),
    #[error("длительность слишком велика")]
    Overflow,
    #[error("продолжительность должна быть положительной")]
    NotPositive,
}

/// Ett ledd av grammatikken: heltall, brøk og enhet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Term<'a> {
    int: &'a str,
    frac: &'a str,
    unit: &'a str,
}

fn split_while(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// tall := sifre ('.' sifre?)? | '.' sifre
fn number(s: &str, offset: usize) -> Result<(&str, &str, &str), DurationError> {
    let (int, rest) = split_while(s, |c| c.is_ascii_digit());
    let (frac, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => split_while(after_dot, |c| c.is_ascii_digit()),
        None => ("", rest),
    };
    if int.is_empty() && frac.is_empty() {
        return Err(DurationError::ExpectedNumber(offset));
    }
    Ok((int, frac, rest))
}

/// enhet := alt frem til neste siffer eller '.'
fn unit(s: &str) -> Result<(&str, &str), DurationError> {
    let (unit, rest) = split_while(s, |c| c != '.' && !c.is_ascii_digit());
    if unit.is_empty() {
        return Err(DurationError::MissingUnit);
    }
    Ok((unit, rest))
}

fn term(s: &str, offset: usize) -> Result<(Term<'_>, &str), DurationError> {
    let (int, frac, rest) = number(s, offset)?;
    let (unit, rest) = unit(rest)?;
    Ok((Term { int, frac, unit }, rest))
}

fn unit_nanos(unit: &str) -> Result<u64, DurationError> {
    match unit {
        "ns" => Ok(1),
        "us" | "µs" | "μs" => Ok(NANOS_PER_MICRO),
        "ms" => Ok(NANOS_PER_MILLI),
        "s" => Ok(NANOS_PER_SEC),
        "m" => Ok(NANOS_PER_MIN),
        "h" => Ok(NANOS_PER_HOUR),
        other => Err(DurationError::UnknownUnit(other.to_string())),
    }
}

/// Nanosekunder for ett ledd. Brøksifre utover u64-presisjon kastes.
fn term_nanos(t: &Term<'_>) -> Result<u64, DurationError> {
    let scale_unit = unit_nanos(t.unit)?;

    let mut whole: u64 = 0;
    for d in t.int.bytes() {
        whole = whole
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
    }
    let mut nanos = whole
        .checked_mul(scale_unit)
        .filter(|v| *v <= MAX_MAGNITUDE)
        .ok_or(DurationError::Overflow)?;

    let mut frac: u64 = 0;
    let mut scale: f64 = 1.0;
    for d in t.frac.bytes() {
        match frac.checked_mul(10).and_then(|v| v.checked_add(u64::from(d - b'0'))) {
            Some(v) if v <= MAX_MAGNITUDE => {
                frac = v;
                scale *= 10.0;
            }
            _ => break,
        }
    }
    if frac > 0 {
        nanos = nanos
            .checked_add((frac as f64 * (scale_unit as f64 / scale)) as u64)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
    }
    Ok(nanos)
}

/// Parser en varighet som `45m`, `1h30m` eller `-1.5h`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if body == "0" {
        return Ok(Duration::zero());
    }
    if body.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        let (t, tail) = term(rest, offset)?;
        total = total
            .checked_add(term_nanos(&t)?)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
        rest = tail;
    }

    if !negative && total > i64::MAX as u64 {
        return Err(DurationError::Overflow);
    }
    // 1<<63 som i64 er i64::MIN, som er riktig for "-2562047h47m16.854775808s"
    let signed = if negative {
        (total as i64).wrapping_neg()
    } else {
        total as i64
    };
    Ok(Duration::nanoseconds(signed))
}

/// Varighet i timer (flyttall).
pub fn hours(d: &Duration) -> f64 {
    let nanos = d.num_nanoseconds().unwrap_or(i64::MAX);
    let whole = nanos / NANOS_PER_HOUR as i64;
    let rem = nanos % NANOS_PER_HOUR as i64;
    whole as f64 + rem as f64 / NANOS_PER_HOUR as f64
}

/// Varighet i minutter (flyttall).
pub fn minutes(d: &Duration) -> f64 {
    let nanos = d.num_nanoseconds().unwrap_or(i64::MAX);
    let whole = nanos / NANOS_PER_MIN as i64;
    let rem = nanos % NANOS_PER_MIN as i64;
    whole as f64 + rem as f64 / NANOS_PER_MIN as f64
}
