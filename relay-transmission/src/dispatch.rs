//! Fan-out of one snapshot to several sinks.

use std::sync::Arc;

use relay_common::SensorData;

use crate::transmitter::Transmitter;

/// Send `data` to every connected transmitter, in order.
///
/// Disconnected sinks are skipped and failures are logged; neither stops the
/// remaining sinks from receiving the snapshot. Nothing is retried.
pub async fn dispatch(
    transmitters: &[Arc<dyn Transmitter>],
    data: &SensorData,
) -> DispatchStats {
    let mut stats = DispatchStats::default();

    for transmitter in transmitters {
        if !transmitter.is_connected() {
            stats.skipped += 1;
            tracing::debug!(sink = transmitter.name(), "Sink not connected, skipping");
            continue;
        }

        match transmitter.transmit(data).await {
            Ok(()) => stats.delivered += 1,
            Err(e) => {
                stats.failed += 1;
                tracing::warn!(
                    sink = transmitter.name(),
                    error = %e,
                    "Failed to transmit sensor data"
                );
            }
        }
    }

    stats
}

/// Statistics from a dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    /// Sinks that accepted the snapshot.
    pub delivered: usize,
    /// Sinks whose transmit returned an error.
    pub failed: usize,
    /// Sinks skipped because they were not connected.
    pub skipped: usize,
}

impl DispatchStats {
    /// Number of sinks a transmit was attempted on.
    pub fn attempted(&self) -> usize {
        self.delivered + self.failed
    }

    /// Success rate of attempted transmits as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.attempted() == 0 {
            100.0
        } else {
            (self.delivered as f64 / self.attempted() as f64) * 100.0
        }
    }
}
