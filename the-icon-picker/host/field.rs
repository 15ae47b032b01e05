//! The field sync adapter.
//!
//! One uniform surface over "the selected icon, as the host stores it",
//! independent of which bridge variant is underneath. Reads decode whatever
//! shape is stored; writes re-encode from the canonical identifier in the
//! configured format, so a format switch re-encodes correctly on the next
//! save without touching the stored value.

use std::sync::Arc;

use serde_json::Value;

use crate::{
  core::format::{
    self,
    IconFormat,
  },
  host::bridge::{
    HostBridge,
    HostError,
  },
};

#[derive(Clone)]
pub struct FieldSync {
  bridge: Arc<dyn HostBridge>,
}

impl FieldSync {
  pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
    Self { bridge }
  }

  pub fn bridge(&self) -> &Arc<dyn HostBridge> {
    &self.bridge
  }

  /// The currently selected canonical identifier, if any.
  ///
  /// A read failure or an unrecognized stored shape both come back as
  /// "no selection" — the UI treats them exactly like an explicit clear.
  pub async fn read_selection(&self) -> Option<String> {
    match self.bridge.read_field().await {
      Ok(value) => format::decode(&value).map(str::to_owned),
      Err(err) => {
        log::warn!("field read failed: {err}");
        None
      },
    }
  }

  /// Persist a selection in the given format. Failures surface to the
  /// caller and are not retried.
  pub async fn write_selection(&self, name: &str, format: IconFormat) -> Result<(), HostError> {
    self.bridge.write_field(format::encode(name, format)).await
  }

  /// Clear the selection. The stored value becomes null, never `""`.
  pub async fn clear(&self) -> Result<(), HostError> {
    self.bridge.write_field(Value::Null).await
  }
}
