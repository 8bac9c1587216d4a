//! The contract every sink implements.

use async_trait::async_trait;
use relay_common::SensorData;

use crate::error::Result;

/// A downstream destination for sensor readings.
///
/// Implemented by each sink (message-bus publisher, route-planner adapter,
/// ...). Retry, backoff, timeouts and connection pooling are the
/// implementation's business; the dispatcher only calls [`transmit`] and
/// reports what it returns.
///
/// [`transmit`]: Transmitter::transmit
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use relay_transmission::{Transmitter, TransmitError};
///
/// struct StdoutSink;
///
/// #[async_trait]
/// impl Transmitter for StdoutSink {
///     async fn transmit(&self, data: &SensorData) -> Result<(), TransmitError> {
///         println!("{}", String::from_utf8_lossy(&data.to_json()?));
///         Ok(())
///     }
///
///     fn is_connected(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait Transmitter: Send + Sync {
    /// Deliver one snapshot to the sink.
    async fn transmit(&self, data: &SensorData) -> Result<()>;

    /// Current connectivity. Must not perform I/O or block.
    fn is_connected(&self) -> bool;

    /// Name used in logs and errors.
    fn name(&self) -> &str {
        "transmitter"
    }
}
