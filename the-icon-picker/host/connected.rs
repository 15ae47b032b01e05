//! Bridge to a live host shell.
//!
//! The embedding application owns the actual host SDK connection; we talk to
//! it through a channel of request messages, each carrying a oneshot reply
//! sender. All picker-side operations stay non-blocking: a request is queued
//! and the caller awaits its reply, with a dropped channel on either side
//! reported as `HostError::Disconnected`.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{
  mpsc,
  oneshot,
};

use crate::host::bridge::{
  HostBridge,
  HostError,
};

/// Requests forwarded to the host shell.
pub enum HostRequest {
  ReadField {
    reply: oneshot::Sender<Result<Value, HostError>>,
  },
  WriteField {
    value: Value,
    reply: oneshot::Sender<Result<(), HostError>>,
  },
  ReadConfig {
    reply: oneshot::Sender<Result<Value, HostError>>,
  },
  WriteConfig {
    value: Value,
    reply: oneshot::Sender<Result<(), HostError>>,
  },
  /// Fire-and-forget: the shell starts reporting its content height.
  EnableAutoResize,
}

/// `HostBridge` variant backed by a live host shell.
pub struct ConnectedHost {
  request_tx: mpsc::UnboundedSender<HostRequest>,
}

impl ConnectedHost {
  pub fn new(request_tx: mpsc::UnboundedSender<HostRequest>) -> Self {
    Self { request_tx }
  }

  fn send(&self, request: HostRequest) -> Result<(), HostError> {
    self
      .request_tx
      .send(request)
      .map_err(|_| HostError::Disconnected)
  }
}

#[async_trait]
impl HostBridge for ConnectedHost {
  async fn read_field(&self) -> Result<Value, HostError> {
    let (reply, rx) = oneshot::channel();
    self.send(HostRequest::ReadField { reply })?;
    rx.await.map_err(|_| HostError::Disconnected)?
  }

  async fn write_field(&self, value: Value) -> Result<(), HostError> {
    let (reply, rx) = oneshot::channel();
    self.send(HostRequest::WriteField { value, reply })?;
    rx.await.map_err(|_| HostError::Disconnected)?
  }

  async fn read_config(&self) -> Result<Value, HostError> {
    let (reply, rx) = oneshot::channel();
    self.send(HostRequest::ReadConfig { reply })?;
    rx.await.map_err(|_| HostError::Disconnected)?
  }

  async fn write_config(&self, value: Value) -> Result<(), HostError> {
    let (reply, rx) = oneshot::channel();
    self.send(HostRequest::WriteConfig { value, reply })?;
    rx.await.map_err(|_| HostError::Disconnected)?
  }

  fn enable_auto_resize(&self) {
    if self.send(HostRequest::EnableAutoResize).is_err() {
      log::warn!("auto-resize request dropped: host shell is gone");
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  /// A host shell double that stores the field value in a task.
  fn spawn_shell() -> mpsc::UnboundedSender<HostRequest> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
      let mut field = Value::Null;
      while let Some(request) = rx.recv().await {
        match request {
          HostRequest::ReadField { reply } => {
            let _ = reply.send(Ok(field.clone()));
          },
          HostRequest::WriteField { value, reply } => {
            if value == json!("rejected") {
              let _ = reply.send(Err(HostError::Rejected("validation failed".into())));
            } else {
              field = value;
              let _ = reply.send(Ok(()));
            }
          },
          HostRequest::ReadConfig { reply } => {
            let _ = reply.send(Ok(json!({ "iconFormat": "camel" })));
          },
          HostRequest::WriteConfig { reply, .. } => {
            let _ = reply.send(Ok(()));
          },
          HostRequest::EnableAutoResize => {},
        }
      }
    });
    tx
  }

  #[tokio::test]
  async fn write_then_read_roundtrips() {
    let host = ConnectedHost::new(spawn_shell());
    host.write_field(json!("smile")).await.unwrap();
    assert_eq!(host.read_field().await.unwrap(), json!("smile"));
  }

  #[tokio::test]
  async fn rejected_writes_surface_to_the_caller() {
    let host = ConnectedHost::new(spawn_shell());
    let err = host.write_field(json!("rejected")).await.unwrap_err();
    assert!(matches!(err, HostError::Rejected(_)));

    // The stored value is untouched.
    assert_eq!(host.read_field().await.unwrap(), Value::Null);
  }

  #[tokio::test]
  async fn dropped_shell_reports_disconnected() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let host = ConnectedHost::new(tx);
    assert!(matches!(
      host.read_field().await,
      Err(HostError::Disconnected)
    ));
  }

  #[tokio::test]
  async fn config_travels_as_json() {
    let host = ConnectedHost::new(spawn_shell());
    let config = host.read_config().await.unwrap();
    assert_eq!(config, json!({ "iconFormat": "camel" }));
    host
      .write_config(json!({ "iconFormat": "json" }))
      .await
      .unwrap();
  }
}
