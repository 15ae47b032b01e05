//! Bridge variant for running without a host (dev and tests).
//!
//! The field value lives in memory with the same shape and semantics the
//! connected bridge exposes, so the grid and codec cannot tell the contexts
//! apart. Configuration optionally persists to the loader's TOML file;
//! without one it is memory-only as well. Host absence is a recovered
//! condition here, never an error the UI surfaces.

use std::{
  path::PathBuf,
  sync::Mutex,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
  core::config::Config,
  host::bridge::{
    HostBridge,
    HostError,
  },
};

/// `HostBridge` variant with local state only.
pub struct StandaloneHost {
  field:       Mutex<Value>,
  config:      Mutex<Value>,
  config_path: Option<PathBuf>,
}

impl StandaloneHost {
  /// Memory-only bridge; nothing touches the file system.
  pub fn new() -> Self {
    Self {
      field:       Mutex::new(Value::Null),
      config:      Mutex::new(Value::Null),
      config_path: None,
    }
  }

  /// Bridge persisting configuration to `path` as TOML. The field value
  /// stays memory-only; there is no host to own it.
  pub fn with_config_file(path: PathBuf) -> Self {
    Self {
      field:       Mutex::new(Value::Null),
      config:      Mutex::new(Value::Null),
      config_path: Some(path),
    }
  }

  fn read_config_file(&self, path: &PathBuf) -> Option<Config> {
    let text = std::fs::read_to_string(path).ok()?;
    match Config::load(Ok(text), Err(missing_local())) {
      Ok(config) => Some(config),
      Err(err) => {
        log::warn!("ignoring malformed config at {}: {err}", path.display());
        None
      },
    }
  }
}

fn missing_local() -> crate::core::config::ConfigLoadError {
  crate::core::config::ConfigLoadError::Error(std::io::Error::new(
    std::io::ErrorKind::NotFound,
    "no workspace config",
  ))
}

impl Default for StandaloneHost {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl HostBridge for StandaloneHost {
  async fn read_field(&self) -> Result<Value, HostError> {
    Ok(self.field.lock().expect("field lock poisoned").clone())
  }

  async fn write_field(&self, value: Value) -> Result<(), HostError> {
    *self.field.lock().expect("field lock poisoned") = value;
    Ok(())
  }

  async fn read_config(&self) -> Result<Value, HostError> {
    if let Some(path) = &self.config_path
      && let Some(config) = self.read_config_file(path)
    {
      return Ok(config.to_host_value());
    }
    Ok(self.config.lock().expect("config lock poisoned").clone())
  }

  async fn write_config(&self, value: Value) -> Result<(), HostError> {
    if let Some(path) = &self.config_path {
      let config = Config::from_host_value(&value);
      std::fs::write(path, config.to_toml_string())
        .map_err(|err| HostError::Rejected(err.to_string()))?;
    }
    *self.config.lock().expect("config lock poisoned") = value;
    Ok(())
  }

  fn enable_auto_resize(&self) {
    // Nothing embeds us; there is no surface to resize.
    log::debug!("auto-resize requested without a host");
  }
}
