//! Async event plumbing shared by the icon picker UI.
//!
//! The picker itself is synchronous and event-driven; the only timed behavior
//! it owns is transient UI state (the configuration panel's "Saved"
//! indicator). That is expressed as a debounced [`AsyncHook`] running on the
//! host's tokio runtime.

pub mod debounce;

pub use debounce::{
  AsyncHook,
  send_blocking,
  try_send,
};
