//! Sensor allowlist for the vehicle telemetry relay.
//!
//! Decides which sensor IDs are polled from the head unit and which of them
//! may be forwarded to sinks (message bus, route planner).
//!
//! # Usage
//!
//! ```
//! use relay_sensors::Allowlist;
//!
//! let allowlist = Allowlist::load(Some("12:0,34:1,56"));
//! assert_eq!(allowlist.poll_sensor_ids(), vec![12, 34, 56]);
//! assert_eq!(allowlist.published_sensor_ids(), vec![34, 56]);
//! ```
//!
//! The allowlist is built once at startup and handed to the poller and every
//! sink; it is never reloaded.

pub mod allowlist;
pub mod config;
pub mod routing;

pub use allowlist::{
    Allowlist, DEFAULT_MONITORED_SENSORS, MonitoredSensor, SENSOR_IDS_ENV, parse_sensor_ids,
};
pub use config::{ConfigError, RelayConfig, SensorsConfig};
pub use routing::{ROUTING_REQUIRED_SENSOR_IDS, check_required};
