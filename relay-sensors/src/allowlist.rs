//! Sensor allowlist: which IDs are polled and which may be published.
//!
//! Every entry is requested from the head unit on each poll cycle (see
//! [`Allowlist::poll_sensor_ids`]). Entries with `publish == true` may also
//! leave the process: every sink filters outgoing readings through
//! [`Allowlist::published_sensor_ids`]. Poll-only entries stay internal, for
//! derived values or sensors not ready to be exposed.
//!
//! # Override format
//!
//! The `BYD_HASS_SENSOR_IDS` variable replaces the built-in table with a
//! comma-separated list of `ID` or `ID:publish` tokens. `"33:0,34:1"` polls
//! both and publishes only 34. `:1` may be omitted, so `"33,34"` publishes
//! both. Malformed tokens are dropped; a string with no usable token falls
//! back to the built-in table.
//!
//! # Extending the default table
//!
//! The head unit also reports the following IDs, which were monitored in the
//! past and are currently disabled. Enable them through the override rather
//! than by editing [`DEFAULT_MONITORED_SENSORS`]:
//!
//! ```text
//!   13-22      consumption, battery temperature/voltage, wiper, weather, locks
//!   25-39      cabin/outside/AC temperature, capacity, steering, SoC, fuel
//!   40-47      parking radar
//!   48-59      wipers, cruise, charging, tire pressures, turn signals
//!   61-72      windows, sunroof, working/operation mode, date fields
//!   73-101     seat belts, AC, doors, hood, trunk, ACC, lane keeping, lights
//!   104-109    fog lamps, footlights, DRL, coolant temperature, hazard lights
//!   1001-1009  panorama, sentry, recording, WiFi, Bluetooth
//!   1101       wireless ADB switch
//!   2001-2007  sentry AI confidences, last trigger, video recordings
//! ```
//!
//! IDs 23, 24, 60, 102 and 103 are never reported by the head unit.

use relay_common::SensorId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable holding the allowlist override.
pub const SENSOR_IDS_ENV: &str = "BYD_HASS_SENSOR_IDS";

/// A sensor the relay polls, and whether its value may be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonitoredSensor {
    /// ID in the sensor catalog.
    pub id: SensorId,
    /// Whether the value may leave the process.
    pub publish: bool,
}

impl MonitoredSensor {
    /// A sensor that is polled and published.
    pub const fn published(id: SensorId) -> Self {
        Self { id, publish: true }
    }

    /// A sensor that is polled but kept internal.
    pub const fn internal(id: SensorId) -> Self {
        Self { id, publish: false }
    }
}

/// Sensors monitored when no override is configured.
pub const DEFAULT_MONITORED_SENSORS: &[MonitoredSensor] = &[
    MonitoredSensor::published(1),  // PowerStatus
    MonitoredSensor::published(2),  // Speed
    MonitoredSensor::published(3),  // Mileage
    MonitoredSensor::published(4),  // GearPosition
    MonitoredSensor::published(5),  // EngineRPM
    MonitoredSensor::published(6),  // BrakePedalDepth
    MonitoredSensor::published(7),  // AcceleratorPedalDepth
    MonitoredSensor::published(8),  // FrontMotorRPM
    MonitoredSensor::published(9),  // RearMotorRPM
    MonitoredSensor::published(10), // EnginePower
    MonitoredSensor::published(11), // FrontMotorTorque
    MonitoredSensor::internal(12),  // ChargeGunState
];

/// Parse an override string into monitored sensors.
///
/// Tokens are trimmed and empty ones skipped. Only the first `:` separates the
/// ID from the publish flag, and only a flag of exactly `"0"` disables
/// publishing. Tokens whose ID is not a base-10 integer are dropped.
pub fn parse_sensor_ids(raw: &str) -> Vec<MonitoredSensor> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let (id_str, flag) = match token.split_once(':') {
                Some((id_str, flag)) => (id_str, Some(flag)),
                None => (token, None),
            };

            match id_str.parse::<SensorId>() {
                Ok(id) => Some(MonitoredSensor {
                    id,
                    publish: flag != Some("0"),
                }),
                Err(e) => {
                    debug!(token, error = %e, "Dropping malformed sensor token");
                    None
                }
            }
        })
        .collect()
}

/// The immutable set of monitored sensors.
///
/// Built once at startup and shared (usually behind an `Arc`) with the poller
/// and every sink. Projections are recomputed on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    entries: Vec<MonitoredSensor>,
    is_default: bool,
}

impl Allowlist {
    /// The built-in default table.
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULT_MONITORED_SENSORS.to_vec(),
            is_default: true,
        }
    }

    /// Build the allowlist from an optional override string.
    ///
    /// An absent or empty override, or one without a single usable token,
    /// yields [`Allowlist::defaults`].
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            debug!("No sensor override configured, using default table");
            return Self::defaults();
        };

        let entries = parse_sensor_ids(raw);
        if entries.is_empty() {
            warn!(raw, "Sensor override has no valid entries, using default table");
            return Self::defaults();
        }

        Self {
            entries,
            is_default: false,
        }
    }

    /// Build the allowlist from [`SENSOR_IDS_ENV`].
    pub fn from_env() -> Self {
        let raw = std::env::var(SENSOR_IDS_ENV).ok();
        Self::load(raw.as_deref())
    }

    /// All monitored entries, in configuration order.
    pub fn entries(&self) -> &[MonitoredSensor] {
        &self.entries
    }

    /// Number of monitored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries; never the case after [`Allowlist::load`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the built-in table is in effect.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// IDs to request from the head unit on every poll cycle.
    pub fn poll_sensor_ids(&self) -> Vec<SensorId> {
        self.entries.iter().map(|s| s.id).collect()
    }

    /// IDs whose values may be forwarded to sinks.
    pub fn published_sensor_ids(&self) -> Vec<SensorId> {
        self.entries
            .iter()
            .filter(|s| s.publish)
            .map(|s| s.id)
            .collect()
    }

    /// Whether any entry for `id` is marked for publishing.
    pub fn is_published(&self, id: SensorId) -> bool {
        self.entries.iter().any(|s| s.id == id && s.publish)
    }

    /// The subset of `required` that is not polled at all.
    pub fn missing(&self, required: &[SensorId]) -> Vec<SensorId> {
        required
            .iter()
            .copied()
            .filter(|id| !self.entries.iter().any(|s| s.id == *id))
            .collect()
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Self::defaults()
    }
}
