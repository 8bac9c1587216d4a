//! Relay Transmission
//!
//! The contract between the relay and its sinks.
//!
//! - [`Transmitter`] trait implemented by every sink
//! - [`TransmitError`] for reporting failed deliveries
//! - [`dispatch`] for sending one snapshot to many sinks
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use relay_transmission::{Transmitter, dispatch};
//!
//! let sinks: Vec<Arc<dyn Transmitter>> = vec![Arc::new(mqtt), Arc::new(abrp)];
//!
//! let mut data = poll_head_unit(&allowlist.poll_sensor_ids()).await?;
//! data.retain_published(&allowlist.published_sensor_ids());
//!
//! let stats = dispatch(&sinks, &data).await;
//! tracing::debug!(delivered = stats.delivered, failed = stats.failed, "Dispatched");
//! ```

mod dispatch;
mod error;
mod transmitter;

pub use dispatch::{DispatchStats, dispatch};
pub use error::{Result, TransmitError};
pub use transmitter::Transmitter;

// Re-export the payload type sinks receive
pub use relay_common::{SensorData, SensorValue};
