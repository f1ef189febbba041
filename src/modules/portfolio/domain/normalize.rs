use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer};

pub const DEFAULT_LEVEL: u8 = 50;

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; single-digit month/day are tolerated
/// and padded on output.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?$").expect("invalid date regex")
});

const ONGOING_MARKERS: [&str; 4] = ["present", "current", "now", "ongoing"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Text
// ──────────────────────────────────────────────────────────
//

pub fn text(value: &str) -> String {
    value.trim().to_string()
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Text field that treats an explicit `null` like a missing value.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trims every entry and drops the blank ones.
pub fn text_lines(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
    Nothing(()),
}

/// Accepts a list or a single comma-separated string ("Rust, Actix").
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => s.split(',').map(str::to_string).collect(),
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}

/// Accepts a list or a single multi-line string, one entry per line.
pub fn deserialize_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => s.lines().map(str::to_string).collect(),
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}

//
// ──────────────────────────────────────────────────────────
// Levels
// ──────────────────────────────────────────────────────────
//

pub fn default_level() -> u8 {
    DEFAULT_LEVEL
}

fn clamp_level(value: f64) -> u8 {
    if value.is_nan() {
        return DEFAULT_LEVEL;
    }
    value.round().clamp(0.0, 100.0) as u8
}

pub fn level_from_value(value: &serde_json::Value) -> u8 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(clamp_level).unwrap_or(DEFAULT_LEVEL),
        serde_json::Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .map(clamp_level)
            .unwrap_or(DEFAULT_LEVEL),
        _ => DEFAULT_LEVEL,
    }
}

/// Levels stored as INTEGER may have drifted outside the range.
pub fn level_from_stored(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Lenient `level` field: numbers, numeric strings ("80", "80%") and null.
pub fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(level_from_value(&value))
}

//
// ──────────────────────────────────────────────────────────
// Dates
// ──────────────────────────────────────────────────────────
//

pub fn date(field: &str, value: &str) -> Result<String, ValidationError> {
    let raw = value.trim().replace('/', "-");

    let caps = DATE_RE.captures(&raw).ok_or_else(|| {
        ValidationError::new(field, "expected a date as YYYY, YYYY-MM or YYYY-MM-DD")
    })?;

    let year: i32 = caps[1]
        .parse()
        .map_err(|_| ValidationError::new(field, "invalid year"))?;

    let Some(month) = caps.get(2) else {
        return Ok(format!("{year:04}"));
    };
    let month: u32 = month
        .as_str()
        .parse()
        .map_err(|_| ValidationError::new(field, "invalid month"))?;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(field, "month must be between 1 and 12"));
    }

    let Some(day) = caps.get(3) else {
        return Ok(format!("{year:04}-{month:02}"));
    };
    let day: u32 = day
        .as_str()
        .parse()
        .map_err(|_| ValidationError::new(field, "invalid day"))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::new(field, "day does not exist in that month"))?;

    Ok(format!("{year:04}-{month:02}-{day:02}"))
}

/// Blank and "present"-style values mean the period is still running.
pub fn end_date(field: &str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(raw) = optional_text(value) else {
        return Ok(None);
    };
    if ONGOING_MARKERS.contains(&raw.to_lowercase().as_str()) {
        return Ok(None);
    }
    date(field, &raw).map(Some)
}

pub fn optional_date(field: &str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    optional_text(value).map(|raw| date(field, &raw)).transpose()
}

/// Missing month/day sort as the first of the period.
fn date_key(canonical: &str) -> (u32, u32, u32) {
    let mut parts = canonical.split('-').map(|p| p.parse::<u32>().unwrap_or(1));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(1),
        parts.next().unwrap_or(1),
    )
}

pub fn ensure_chronological(
    field: &str,
    start: &str,
    end: Option<&str>,
) -> Result<(), ValidationError> {
    match end {
        Some(end) if date_key(end) < date_key(start) => {
            Err(ValidationError::new(field, "end date is before start date"))
        }
        _ => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// URLs
// ──────────────────────────────────────────────────────────
//

pub fn url(field: &str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(raw) = optional_text(value) else {
        return Ok(None);
    };
    let lower = raw.to_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) || raw.contains(' ') {
        return Err(ValidationError::new(field, "must be an http(s) URL"));
    }
    Ok(Some(raw))
}
