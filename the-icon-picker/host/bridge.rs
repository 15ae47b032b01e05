//! The capability interface over the embedding host.
//!
//! The picker never probes the host for methods at call time; the variant
//! (connected or standalone) is chosen once when the session is built, and
//! everything downstream sees only this trait.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
  /// The host shell went away (or was never there on this path).
  #[error("host bridge is disconnected")]
  Disconnected,
  /// The host refused the value (validation, read-only entry, ...).
  #[error("host rejected the request: {0}")]
  Rejected(String),
}

/// Read/write surface over the host's field storage and configuration.
///
/// Field values and configuration travel as JSON. Both writes may fail and
/// are never retried by the picker; a failed write simply leaves the prior
/// state displayed.
#[async_trait]
pub trait HostBridge: Send + Sync {
  async fn read_field(&self) -> Result<Value, HostError>;
  async fn write_field(&self, value: Value) -> Result<(), HostError>;

  async fn read_config(&self) -> Result<Value, HostError>;
  async fn write_config(&self, value: Value) -> Result<(), HostError>;

  /// Ask the embedding surface to track the rendered content height.
  /// Invoked once per mount of the field panel; a no-op without a host.
  fn enable_auto_resize(&self);
}
