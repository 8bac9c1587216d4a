use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// Numeric key of a signal in the vehicle's sensor catalog.
pub type SensorId = i64;

/// One snapshot of sensor readings, as handed to transmitters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    /// Unix epoch milliseconds when the snapshot was taken.
    pub timestamp: i64,

    /// Identifier of the upstream data source (e.g., head-unit address).
    pub source: String,

    /// Readings keyed by sensor ID.
    #[serde(default)]
    pub values: BTreeMap<SensorId, SensorValue>,
}

impl SensorData {
    /// Create an empty snapshot with the current timestamp.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            timestamp: current_timestamp_millis(),
            source: source.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add a reading to this snapshot.
    pub fn with_value(mut self, id: SensorId, value: impl Into<SensorValue>) -> Self {
        self.values.insert(id, value.into());
        self
    }

    /// Look up a single reading.
    pub fn get(&self, id: SensorId) -> Option<&SensorValue> {
        self.values.get(&id)
    }

    /// Drop every reading whose ID is not in `published`.
    ///
    /// Sinks call this with the allowlist's published IDs before sending
    /// anything out of the process.
    pub fn retain_published(&mut self, published: &[SensorId]) {
        self.values.retain(|id, _| published.contains(id));
    }

    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Typed sensor reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SensorValue {
    /// Numeric reading (speed, temperature, percentage...).
    Number(f64),

    /// Boolean reading (door open, seat belt fastened...).
    Boolean(bool),

    /// Text reading (gear position label, file path...).
    Text(String),
}

impl SensorValue {
    /// Numeric view of the reading, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SensorValue::Number(v) => Some(*v),
            SensorValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            SensorValue::Text(_) => None,
        }
    }
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        SensorValue::Number(v)
    }
}

impl From<i64> for SensorValue {
    fn from(v: i64) -> Self {
        SensorValue::Number(v as f64)
    }
}

impl From<bool> for SensorValue {
    fn from(v: bool) -> Self {
        SensorValue::Boolean(v)
    }
}

impl From<String> for SensorValue {
    fn from(v: String) -> Self {
        SensorValue::Text(v)
    }
}

impl From<&str> for SensorValue {
    fn from(v: &str) -> Self {
        SensorValue::Text(v.to_string())
    }
}

/// Get the current timestamp in milliseconds since Unix epoch.
///
/// Returns 0 if system time is before Unix epoch (should never happen in practice).
pub fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
