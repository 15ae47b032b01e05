//! Icon selection and synchronization for host-embedded editing surfaces.
//!
//! Three embeddings share one core: a custom-field panel that persists the
//! picked identifier through a host bridge, a configuration panel choosing
//! the persisted format, and a rich-text-editor plugin that inserts the
//! pick as an inline void node. The embedding shell owns rendering and the
//! event loop; this crate owns the catalog, search, format codec, field
//! sync and the overlay insertion protocol.

pub mod core;
pub mod host;
pub mod logging;
pub mod plugin;
pub mod session;
pub mod ui;

pub use crate::{
  core::{
    catalog::Catalog,
    config::Config,
    format::IconFormat,
  },
  host::{
    bridge::{
      HostBridge,
      HostError,
    },
    connected::{
      ConnectedHost,
      HostRequest,
    },
    editor::{
      EditorBridge,
      IconNode,
      InsertOptions,
      SavedSelection,
    },
    standalone::StandaloneHost,
  },
  session::Session,
};
