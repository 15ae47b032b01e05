//! Shared state for one embedded picker instance.
//!
//! The embedding shell builds a `Session` once at startup: it picks the
//! bridge variant (connected or standalone), supplies the catalog, and — in
//! the rich-text context — the editor bridge. Components reach all of it
//! through `Context`.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::{
  core::{
    catalog::Catalog,
    config::Config,
    format::IconFormat,
  },
  host::{
    bridge::HostBridge,
    editor::EditorBridge,
    field::FieldSync,
  },
};

pub struct Session {
  pub catalog: Arc<Catalog>,
  pub field:   FieldSync,
  pub editor:  Option<Box<dyn EditorBridge>>,
  config:      Arc<ArcSwap<Config>>,
  bridge:      Arc<dyn HostBridge>,
}

impl Session {
  pub fn new(catalog: Arc<Catalog>, bridge: Arc<dyn HostBridge>) -> Self {
    Self {
      catalog,
      field: FieldSync::new(bridge.clone()),
      editor: None,
      config: Arc::new(ArcSwap::from_pointee(Config::default())),
      bridge,
    }
  }

  pub fn with_editor(mut self, editor: Box<dyn EditorBridge>) -> Self {
    self.editor = Some(editor);
    self
  }

  pub fn bridge(&self) -> &Arc<dyn HostBridge> {
    &self.bridge
  }

  /// Live config pointer, shared with spawned jobs.
  pub fn config(&self) -> &Arc<ArcSwap<Config>> {
    &self.config
  }

  /// The configured output format. Read at write time so a format switch
  /// re-encodes from the canonical identifier on the next save.
  pub fn icon_format(&self) -> IconFormat {
    self.config.load().icon_format
  }

  pub fn set_config(&self, config: Config) {
    self.config.store(Arc::new(config));
  }

  /// Pull the host's configuration into the live pointer. Host absence or a
  /// malformed config quietly keeps the defaults.
  pub async fn refresh_config(&self) {
    match self.bridge.read_config().await {
      Ok(value) => self.set_config(Config::from_host_value(&value)),
      Err(err) => {
        log::debug!("config read failed, keeping defaults: {err}");
      },
    }
  }
}
