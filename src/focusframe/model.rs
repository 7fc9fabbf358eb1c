use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Storage format for `SessionRecord::timestamp` (local time, microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Storage format for `SessionRecord::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The `duration` field as it was found on disk.
///
/// Sessions written by this crate always hold `Minutes`, but older files may carry
/// numeric strings or arbitrary JSON. Whatever was read is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Minutes(i64),
    Text(String),
    Other(Value),
}

impl RawDuration {
    /// Lenient coercion used for sums and display. Anything that is not a whole,
    /// non-negative number of minutes counts as zero.
    pub fn minutes(&self) -> u64 {
        match self.strict_minutes() {
            Some(n) if n > 0 => n as u64,
            _ => 0,
        }
    }

    /// Strict coercion used when accepting new input: `None` when the value is not
    /// an integer or a string holding one.
    pub fn strict_minutes(&self) -> Option<i64> {
        match self {
            RawDuration::Minutes(n) => Some(*n),
            RawDuration::Text(s) => s.trim().parse().ok(),
            RawDuration::Other(_) => None,
        }
    }

    /// Coercion for new input: [`Self::strict_minutes`], plus JSON floats with
    /// no fractional part (`25.0`).
    pub fn input_minutes(&self) -> Option<i64> {
        match self {
            RawDuration::Other(value) => value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(f))
                .map(|f| f as i64),
            _ => self.strict_minutes(),
        }
    }
}

impl From<i64> for RawDuration {
    fn from(n: i64) -> Self {
        RawDuration::Minutes(n)
    }
}

impl From<&str> for RawDuration {
    fn from(s: &str) -> Self {
        RawDuration::Text(s.to_string())
    }
}

impl From<String> for RawDuration {
    fn from(s: String) -> Self {
        RawDuration::Text(s)
    }
}

impl From<Value> for RawDuration {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RawDuration::Text(s),
            other => match other.as_i64() {
                Some(n) => RawDuration::Minutes(n),
                None => RawDuration::Other(other),
            },
        }
    }
}

/// Coerces a possibly missing duration to minutes.
pub fn coerce_minutes(raw: Option<&RawDuration>) -> u64 {
    raw.map(RawDuration::minutes).unwrap_or(0)
}

/// One completed focus interval.
///
/// Every field decodes leniently: a missing or wrong-typed value becomes its
/// default instead of failing the record. Keys this crate does not know about
/// are kept in `extra` and written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<RawDuration>,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient")]
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// Ids are also accepted as numeric strings. Negative or fractional ids read as 0.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(id.unwrap_or_default())
}

impl SessionRecord {
    pub fn new<Tz: TimeZone>(id: u64, minutes: i64, notes: String, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id,
            duration: Some(RawDuration::Minutes(minutes)),
            notes,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            extra: Map::new(),
        }
    }

    /// Duration in minutes after coercion.
    pub fn minutes(&self) -> u64 {
        coerce_minutes(self.duration.as_ref())
    }

    /// True when the stored duration needed coercion to be usable.
    pub fn has_malformed_duration(&self) -> bool {
        !matches!(self.duration, Some(RawDuration::Minutes(n)) if n >= 0)
    }
}

/// Parse a stored `timestamp` as local time. Fractional seconds are optional.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Sessions in creation order.
pub type SessionCollection = Vec<SessionRecord>;
